use std::sync::Arc;

use tracing::debug;

use crate::feedback::{
    FeedbackSender, ReviewPrompt, Survey, SurveyEffect, SurveyInput, SurveyQuestion,
};

/// Dialog surface the survey runs on.
///
/// Calls are strictly sequential: `dismiss` returns only once the dialog is
/// fully down, so a `present` issued afterwards can never overlap it. The
/// headless harness and the tests model this with plain synchronous calls.
pub trait DialogHost: Send {
    fn present(&mut self, question: SurveyQuestion);
    fn dismiss(&mut self);
}

/// Drives the survey state machine against the dialog host and the two
/// fire-and-forget collaborators, preserving effect order.
pub struct SurveyDriver {
    survey: Survey,
    host: Box<dyn DialogHost>,
    sender: Arc<dyn FeedbackSender>,
    review: Box<dyn ReviewPrompt>,
}

impl SurveyDriver {
    pub fn new(
        host: Box<dyn DialogHost>,
        sender: Arc<dyn FeedbackSender>,
        review: Box<dyn ReviewPrompt>,
    ) -> Self {
        Self {
            survey: Survey::new(),
            host,
            sender,
            review,
        }
    }

    pub fn is_active(&self) -> bool {
        self.survey.is_active()
    }

    /// Present the first question. A survey that already ran stays silent.
    pub async fn begin(&mut self) {
        let effects = self.survey.begin();
        self.run(effects).await;
    }

    /// Feed a user answer to the machine.
    pub async fn answer(&mut self, input: SurveyInput) {
        let effects = self.survey.answer(input);
        self.run(effects).await;
    }

    async fn run(&mut self, effects: Vec<SurveyEffect>) {
        for effect in effects {
            debug!(?effect, "survey effect");
            match effect {
                SurveyEffect::Dismiss => self.host.dismiss(),
                SurveyEffect::Present(question) => self.host.present(question),
                SurveyEffect::OpenReview => self.review.open_review(),
                SurveyEffect::SendFeedback(text) => self.sender.send(&text).await,
            }
        }
    }
}
