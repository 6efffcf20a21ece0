//! Scripted three-question survey ending in either a store-review prompt or a
//! free-text feedback submission.
//!
//! The original flow chained dismiss/present completion callbacks; here every
//! user answer produces an ordered effect list with `Dismiss` ahead of any
//! `Present`, so two dialogs can never be up at once and the sequencing is
//! visible in the data rather than buried in closures.

/// The dialog currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyQuestion {
    /// Q1: "Are you enjoying the app?"
    Enjoying,
    /// Q2: "Would you rate it on the store?"
    StoreRate,
    /// Q3: "Would you tell us what to improve?"
    OfferFeedback,
    /// Q4: free-text input form.
    FeedbackInput,
}

impl SurveyQuestion {
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Enjoying => "Are you enjoying Stopwatch?",
            Self::StoreRate => "Would you mind rating it on the App Store?",
            Self::OfferFeedback => "Would you tell us how we could improve?",
            Self::FeedbackInput => "What should we improve?",
        }
    }
}

/// User input driving the machine. Every transition is a button tap; there
/// are no timeouts and no auto-advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyInput {
    Positive,
    Negative,
    /// Only meaningful on the free-text form.
    Submit(String),
}

/// Side effects a transition asks the shell to perform, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyEffect {
    /// Take down whatever dialog is currently shown.
    Dismiss,
    /// Put up the next dialog. Always preceded by `Dismiss` except for the
    /// very first question.
    Present(SurveyQuestion),
    /// Open the app-store review deep link.
    OpenReview,
    /// Hand the free-text body to the feedback-submission collaborator.
    SendFeedback(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Idle,
    Showing(SurveyQuestion),
    Done,
}

/// The survey machine. Created idle; [`Survey::begin`] presents Q1, then each
/// [`Survey::answer`] advances one step. Input outside a showing state is
/// ignored.
#[derive(Debug)]
pub struct Survey {
    state: State,
}

impl Default for Survey {
    fn default() -> Self {
        Self::new()
    }
}

impl Survey {
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, State::Showing(_))
    }

    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    pub fn current_question(&self) -> Option<SurveyQuestion> {
        match self.state {
            State::Showing(q) => Some(q),
            _ => None,
        }
    }

    /// Start the survey: present Q1. No dismiss is emitted since nothing is
    /// on screen yet. Idempotent once started.
    pub fn begin(&mut self) -> Vec<SurveyEffect> {
        if self.state != State::Idle {
            return Vec::new();
        }
        self.state = State::Showing(SurveyQuestion::Enjoying);
        vec![SurveyEffect::Present(SurveyQuestion::Enjoying)]
    }

    /// Advance on a user answer, returning the effects to perform in order.
    pub fn answer(&mut self, input: SurveyInput) -> Vec<SurveyEffect> {
        let question = match self.state {
            State::Showing(q) => q,
            // Not showing anything: late taps are dropped.
            _ => return Vec::new(),
        };

        match (question, input) {
            // A text submission only exists on the free-text form; a bare
            // button tap only exists on the yes/no questions.
            (SurveyQuestion::FeedbackInput, SurveyInput::Positive) => Vec::new(),
            (_, SurveyInput::Submit(_)) if question != SurveyQuestion::FeedbackInput => Vec::new(),

            (SurveyQuestion::Enjoying, SurveyInput::Positive) => {
                self.show(SurveyQuestion::StoreRate)
            }
            (SurveyQuestion::Enjoying, _) => self.show(SurveyQuestion::OfferFeedback),

            // Q2 both branches dismiss and stop; the positive branch also
            // fires the review deep link. The original never presented a
            // follow-up here.
            (SurveyQuestion::StoreRate, SurveyInput::Positive) => {
                self.finish(vec![SurveyEffect::Dismiss, SurveyEffect::OpenReview])
            }
            (SurveyQuestion::StoreRate, _) => self.finish(vec![SurveyEffect::Dismiss]),

            (SurveyQuestion::OfferFeedback, SurveyInput::Positive) => {
                self.show(SurveyQuestion::FeedbackInput)
            }
            (SurveyQuestion::OfferFeedback, _) => self.finish(vec![SurveyEffect::Dismiss]),

            (SurveyQuestion::FeedbackInput, SurveyInput::Submit(text)) => self.finish(vec![
                SurveyEffect::SendFeedback(text),
                SurveyEffect::Dismiss,
            ]),
            (SurveyQuestion::FeedbackInput, SurveyInput::Negative) => {
                self.finish(vec![SurveyEffect::Dismiss])
            }
        }
    }

    fn show(&mut self, next: SurveyQuestion) -> Vec<SurveyEffect> {
        self.state = State::Showing(next);
        vec![SurveyEffect::Dismiss, SurveyEffect::Present(next)]
    }

    fn finish(&mut self, effects: Vec<SurveyEffect>) -> Vec<SurveyEffect> {
        self.state = State::Done;
        effects
    }
}
