//! Contracts between the coordinator and its two child pages.
//!
//! The pages are opaque collaborators: the coordinator exclusively owns one
//! instance of each and pushes commands through these traits, while the pages
//! feed events back through the coordinator's `handle_*` entry points. Pages
//! never hold a reference to the coordinator, so there is no ownership cycle
//! to break.

/// Commands the coordinator pushes to the timer page.
pub trait TimerPage: Send {
    /// Re-evaluate the history-hint affordance against the current
    /// preferences.
    fn refresh_history_hint(&mut self);

    /// Show or hide the affordance that takes the user to the history page.
    fn set_history_button_visible(&mut self, visible: bool);
}

/// Commands the coordinator pushes to the history page.
pub trait HistoryPage: Send {
    /// A timer is running: reveal the live preview of the current run.
    fn show_live_preview(&mut self);

    /// The timer was reset: take the live preview back down.
    fn hide_live_preview(&mut self);

    /// Stored sessions changed: reload the list.
    fn reload(&mut self);
}

/// Events the timer page emits at the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Started,
    Reset,
    Saved,
    /// The user tapped the history affordance on the timer page.
    ShowHistory,
}

/// Events the history page emits at the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEvent {
    /// The user wants to get back to the timer page.
    ShowTimer,
}
