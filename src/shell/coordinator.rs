use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::feedback::{self, FeedbackThresholds, SurveyInput};
use crate::services::{PreferencesStore, SessionStore};
use crate::shell::dialogs::SurveyDriver;
use crate::shell::pages::{HistoryEvent, HistoryPage, TimerEvent, TimerPage};
use crate::shell::paging::{PagedSurface, PageIndex};

/// Fraction of the viewport the user must scroll toward the history page
/// before the one-shot hint is considered seen.
const HINT_SEEN_FRACTION: f64 = 0.9;

/// Owns the two-page surface and mediates all cross-page communication.
///
/// The timer and history pages never talk to each other; their events arrive
/// here and get relayed. The coordinator also runs the feedback-eligibility
/// check at its two trigger points (first launch and timer reset) and hands
/// an eligible user over to the survey driver.
pub struct Coordinator<S: SessionStore> {
    store: Arc<S>,
    prefs: PreferencesStore,
    surface: PagedSurface,
    timer_page: Box<dyn TimerPage>,
    history_page: Box<dyn HistoryPage>,
    survey: SurveyDriver,
}

impl<S: SessionStore> Coordinator<S> {
    /// Wire the coordinator. Both pages are taken by value, so a partially
    /// wired shell cannot exist.
    pub fn new(
        store: Arc<S>,
        prefs: PreferencesStore,
        viewport_width: f64,
        timer_page: Box<dyn TimerPage>,
        history_page: Box<dyn HistoryPage>,
        survey: SurveyDriver,
    ) -> Self {
        Self {
            store,
            prefs,
            surface: PagedSurface::new(viewport_width),
            timer_page,
            history_page,
            survey,
        }
    }

    /// First-appearance setup: apply the persisted `has_reset` flag to paging
    /// and the history affordance, then run the app-open feedback check.
    pub async fn initialize(&mut self) -> Result<()> {
        let has_reset = self.prefs.has_reset();
        self.surface.set_scroll_enabled(has_reset);
        self.timer_page.set_history_button_visible(has_reset);
        debug!(has_reset, "shell initialized");

        self.maybe_start_survey(feedback::APP_OPEN).await
    }

    /// Page-scroll observation. Once the user has dragged at least 90% of a
    /// viewport toward the history page, the hint latch clears (persisted)
    /// and the timer page refreshes its hint display. One-shot: subsequent
    /// calls past the threshold do nothing.
    pub fn on_scroll(&mut self, offset_x: f64) -> Result<()> {
        self.surface.set_offset(offset_x);

        if offset_x >= self.surface.viewport_width() * HINT_SEEN_FRACTION
            && self.prefs.show_history_hint()
        {
            self.prefs.set_show_history_hint(false)?;
            self.timer_page.refresh_history_hint();
        }
        Ok(())
    }

    pub fn reveal_history(&mut self) {
        self.surface.reveal(PageIndex::History);
    }

    pub fn reveal_timer(&mut self) {
        self.surface.reveal(PageIndex::Timer);
    }

    pub async fn handle_timer_event(&mut self, event: TimerEvent) -> Result<()> {
        debug!(?event, "timer event");
        match event {
            TimerEvent::Started => {
                self.history_page.show_live_preview();
            }
            TimerEvent::Reset => {
                // Paging is enabled unconditionally from the first reset on;
                // the flag is persisted so it survives restarts.
                self.surface.set_scroll_enabled(true);
                if !self.prefs.has_reset() {
                    self.prefs.set_has_reset(true)?;
                    self.timer_page.set_history_button_visible(true);
                }
                self.timer_page.refresh_history_hint();
                self.history_page.hide_live_preview();

                self.maybe_start_survey(feedback::TIMER_RESET).await?;
            }
            TimerEvent::Saved => {
                self.history_page.reload();
            }
            TimerEvent::ShowHistory => {
                self.reveal_history();
            }
        }
        Ok(())
    }

    pub fn handle_history_event(&mut self, event: HistoryEvent) {
        debug!(?event, "history event");
        match event {
            HistoryEvent::ShowTimer => self.reveal_timer(),
        }
    }

    /// Forward a survey answer from whatever is rendering the dialogs.
    pub async fn survey_answer(&mut self, input: SurveyInput) {
        self.survey.answer(input).await;
    }

    pub fn survey_active(&self) -> bool {
        self.survey.is_active()
    }

    pub fn surface(&self) -> &PagedSurface {
        &self.surface
    }

    pub fn preferences(&self) -> &PreferencesStore {
        &self.prefs
    }

    async fn maybe_start_survey(&mut self, thresholds: FeedbackThresholds) -> Result<()> {
        if self.prefs.did_show_feedback_ui() {
            return Ok(());
        }

        // A broken store degrades to "no sessions": the policy then simply
        // evaluates to false.
        let records = match self.store.fetch_sessions().await {
            Ok(records) => records,
            Err(e) => {
                warn!("session fetch failed, treating as empty: {}", e);
                Vec::new()
            }
        };

        if !feedback::eligible(&records, false, thresholds) {
            return Ok(());
        }

        info!(
            sessions = records.len(),
            "feedback survey eligible, latching before first dialog"
        );
        // Latch first: a crash mid-survey must never re-trigger it.
        self.prefs.set_did_show_feedback_ui(true)?;
        self.survey.begin().await;
        Ok(())
    }
}
