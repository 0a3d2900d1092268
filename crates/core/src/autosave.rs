//! Debounced "Saving... / Saved" indicator for the writing editor.
//!
//! Nothing is persisted; the notifier only tracks when a save would happen.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Quiet period after the last change before a save is due.
pub const SAVE_DELAY_MS: i64 = 1_500;
/// How long `Saved` stays visible before returning to idle.
pub const SAVED_VISIBLE_MS: i64 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AutoSaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
}

impl AutoSaveStatus {
    /// Label shown next to the editor; `None` while idle.
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Saving => Some("Saving..."),
            Self::Saved => Some("Saved"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoSaveEvent {
    /// The quiet period elapsed; the caller should save and then call `complete_save`.
    SaveDue,
    /// `Saved` expired back to `Idle`.
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoSaveNotifier {
    status: AutoSaveStatus,
    save_deadline: Option<DateTime<Utc>>,
    clear_at: Option<DateTime<Utc>>,
    delay: Duration,
    visible_for: Duration,
}

impl Default for AutoSaveNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoSaveNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::with_delays(
            Duration::milliseconds(SAVE_DELAY_MS),
            Duration::milliseconds(SAVED_VISIBLE_MS),
        )
    }

    #[must_use]
    pub fn with_delays(delay: Duration, visible_for: Duration) -> Self {
        Self {
            status: AutoSaveStatus::Idle,
            save_deadline: None,
            clear_at: None,
            delay,
            visible_for,
        }
    }

    #[must_use]
    pub fn status(&self) -> AutoSaveStatus {
        self.status
    }

    #[must_use]
    pub fn pending_deadline(&self) -> Option<DateTime<Utc>> {
        self.save_deadline
    }

    /// Records an edit at `now`, pushing the save deadline out.
    pub fn record_change(&mut self, now: DateTime<Utc>) {
        self.save_deadline = Some(now + self.delay);
    }

    /// Advances the notifier to `now`.
    ///
    /// Returns at most one event per call; a due save takes precedence.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<AutoSaveEvent> {
        if let Some(deadline) = self.save_deadline
            && now >= deadline
        {
            self.save_deadline = None;
            self.clear_at = None;
            self.status = AutoSaveStatus::Saving;
            return Some(AutoSaveEvent::SaveDue);
        }

        if self.status == AutoSaveStatus::Saved
            && let Some(clear_at) = self.clear_at
            && now >= clear_at
        {
            self.clear_at = None;
            self.status = AutoSaveStatus::Idle;
            return Some(AutoSaveEvent::Cleared);
        }

        None
    }

    /// Marks the in-flight save as done at `now`.
    pub fn complete_save(&mut self, now: DateTime<Utc>) {
        if self.status != AutoSaveStatus::Saving {
            return;
        }
        self.status = AutoSaveStatus::Saved;
        self.clear_at = Some(now + self.visible_for);
    }

    /// Drops any pending save; used when the session is submitted.
    pub fn cancel(&mut self) {
        self.save_deadline = None;
        self.clear_at = None;
        self.status = AutoSaveStatus::Idle;
    }
}
