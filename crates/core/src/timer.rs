//! Exam countdown.
//!
//! Remaining time is derived from wall-clock deltas between ticks, not from
//! the number of ticks received. A tick that arrives late (window hidden,
//! runtime busy) consumes every whole second that passed since the previous
//! one, and the sub-second remainder carries into the next tick.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time::format_mm_ss;

/// Below this share of the duration the timer is `Warning`.
pub const WARNING_RATIO: f64 = 0.25;
/// Below this share of the duration the timer is `Critical`.
pub const CRITICAL_RATIO: f64 = 0.10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Expired,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer is not running; nothing changed.
    Inactive,
    /// Time was consumed and some remains.
    Ticked { remaining: u32 },
    /// Remaining reached zero on this tick. Reported once.
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    Normal,
    Warning,
    Critical,
}

impl Urgency {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Normal => "timer-normal",
            Self::Warning => "timer-warning",
            Self::Critical => "timer-critical",
        }
    }
}

type TimeUpCallback = Box<dyn FnMut() + Send>;

pub struct CountdownTimer {
    duration: u32,
    remaining: u32,
    state: TimerState,
    last_tick: Option<DateTime<Utc>>,
    carry_ms: i64,
    on_time_up: Option<TimeUpCallback>,
}

impl fmt::Debug for CountdownTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountdownTimer")
            .field("duration", &self.duration)
            .field("remaining", &self.remaining)
            .field("state", &self.state)
            .field("carry_ms", &self.carry_ms)
            .field("has_callback", &self.on_time_up.is_some())
            .finish_non_exhaustive()
    }
}

impl CountdownTimer {
    /// New idle timer at full `duration_secs`.
    #[must_use]
    pub fn new(duration_secs: u32) -> Self {
        Self {
            duration: duration_secs,
            remaining: duration_secs,
            state: TimerState::Idle,
            last_tick: None,
            carry_ms: 0,
            on_time_up: None,
        }
    }

    /// Registers the callback run once when remaining time reaches zero.
    #[must_use]
    pub fn with_on_time_up(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_time_up = Some(Box::new(callback));
        self
    }

    /// Starts counting from `now`. Only valid from `Idle`; returns whether it started.
    ///
    /// A zero-length timer expires immediately.
    pub fn start(&mut self, now: DateTime<Utc>) -> bool {
        if self.state != TimerState::Idle {
            return false;
        }
        if self.remaining == 0 {
            self.expire();
            return true;
        }
        self.state = TimerState::Running;
        self.last_tick = Some(now);
        self.carry_ms = 0;
        true
    }

    /// Consumes the wall-clock time since the previous tick.
    pub fn tick(&mut self, now: DateTime<Utc>) -> TickOutcome {
        if self.state != TimerState::Running {
            return TickOutcome::Inactive;
        }
        self.consume_until(now);
        if self.remaining == 0 {
            self.expire();
            return TickOutcome::Expired;
        }
        TickOutcome::Ticked {
            remaining: self.remaining,
        }
    }

    /// Banks elapsed time up to `now` and suspends counting.
    pub fn pause(&mut self, now: DateTime<Utc>) -> TickOutcome {
        let outcome = self.tick(now);
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
            self.last_tick = None;
        }
        outcome
    }

    pub fn resume(&mut self, now: DateTime<Utc>) -> bool {
        if self.state != TimerState::Paused {
            return false;
        }
        self.state = TimerState::Running;
        self.last_tick = Some(now);
        true
    }

    /// Freezes the timer where it is (used on submission). Never fires the callback.
    pub fn stop(&mut self) {
        if matches!(self.state, TimerState::Running | TimerState::Paused | TimerState::Idle) {
            self.state = TimerState::Stopped;
            self.last_tick = None;
        }
    }

    /// Back to idle at full duration; the callback is re-armed.
    pub fn reset(&mut self) {
        self.remaining = self.duration;
        self.state = TimerState::Idle;
        self.last_tick = None;
        self.carry_ms = 0;
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    #[must_use]
    pub fn duration_seconds(&self) -> u32 {
        self.duration
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.duration - self.remaining
    }

    /// Remaining time as `MM:SS`.
    #[must_use]
    pub fn formatted(&self) -> String {
        format_mm_ss(self.remaining)
    }

    #[must_use]
    pub fn urgency(&self) -> Urgency {
        if self.duration == 0 {
            return Urgency::Critical;
        }
        let ratio = f64::from(self.remaining) / f64::from(self.duration);
        if ratio < CRITICAL_RATIO {
            Urgency::Critical
        } else if ratio < WARNING_RATIO {
            Urgency::Warning
        } else {
            Urgency::Normal
        }
    }

    fn consume_until(&mut self, now: DateTime<Utc>) {
        let Some(last) = self.last_tick else {
            self.last_tick = Some(now);
            return;
        };
        // A clock that steps backwards contributes nothing.
        let delta_ms = (now - last).num_milliseconds().max(0);
        self.last_tick = Some(now);

        let total_ms = self.carry_ms + delta_ms;
        let whole = total_ms / 1000;
        self.carry_ms = total_ms % 1000;

        let consumed = u32::try_from(whole).unwrap_or(u32::MAX);
        self.remaining = self.remaining.saturating_sub(consumed);
    }

    fn expire(&mut self) {
        self.remaining = 0;
        self.state = TimerState::Expired;
        self.last_tick = None;
        if let Some(callback) = self.on_time_up.as_mut() {
            callback();
        }
    }
}
