//! Session clock implementation.
//!
//! The clock is a second-granular state machine. It does not use internal
//! threads - the host is responsible for calling `tick()` once per elapsed
//! second while the clock is running (see [`super::Ticker`]).
//!
//! ## State Transitions
//!
//! ```text
//! WorkPaused  --start--> WorkRunning  --tick to 0--> BreakPaused
//! BreakPaused --start--> BreakRunning --tick to 0--> WorkPaused
//! any         --reset--> WorkPaused
//! ```
//!
//! ## Usage
//!
//! ```
//! use pomopad_core::timer::{SessionClock, SessionConfig, SessionKind};
//!
//! let mut clock = SessionClock::new(SessionConfig::new(2, 1).unwrap());
//! clock.start();
//! clock.tick();
//! let switched = clock.tick(); // Some(Event::SessionSwitched { .. })
//! assert!(switched.is_some());
//! assert_eq!(clock.kind(), SessionKind::Break);
//! assert!(!clock.is_running());
//! ```

use chrono::Utc;
use serde::Serialize;

use super::session::{SessionConfig, SessionKind};
use crate::error::ValidationError;
use crate::events::Event;

/// Core session clock.
///
/// Serialize-only: a clock is always built through [`SessionClock::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionClock {
    config: SessionConfig,
    kind: SessionKind,
    /// Remaining seconds of the current session.
    remaining_secs: u64,
    running: bool,
}

impl SessionClock {
    /// Create a clock paused at the start of a work session.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            remaining_secs: config.work_secs(),
            config,
            kind: SessionKind::Work,
            running: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Configured length of the current session.
    pub fn total_secs(&self) -> u64 {
        self.config.duration_secs(self.kind)
    }

    /// Whether `start()` would do anything. Mirrors the disabled state of
    /// the start/pause button.
    pub fn can_start(&self) -> bool {
        self.remaining_secs > 0
    }

    /// 0.0 .. 1.0 elapsed share of the current session.
    pub fn progress_fraction(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        let elapsed = total.saturating_sub(self.remaining_secs) as f64;
        (elapsed / total as f64).clamp(0.0, 1.0)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            kind: self.kind,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            running: self.running,
            progress: self.progress_fraction(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if self.running || self.remaining_secs == 0 {
            return None;
        }
        self.running = true;
        Some(Event::SessionStarted {
            kind: self.kind,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::SessionPaused {
            kind: self.kind,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Start when paused, pause when running.
    pub fn toggle(&mut self) -> Option<Event> {
        if self.running {
            self.pause()
        } else {
            self.start()
        }
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.kind = SessionKind::Work;
        self.remaining_secs = self.config.work_secs();
        self.running = false;
        Some(Event::SessionReset {
            duration_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Call once per elapsed second. Returns `Some(Event::SessionSwitched)`
    /// when the current session runs out.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            return Some(self.switch_session());
        }
        None
    }

    /// Replace both durations. See [`SessionConfig::new`] for validation.
    ///
    /// A paused clock is resynced to the new length of its current kind; a
    /// running session keeps its remaining time, even when that exceeds the
    /// new length (progress then reads as zero until it catches up).
    pub fn reconfigure(&mut self, work_secs: i64, break_secs: i64) -> Result<Event, ValidationError> {
        let config = SessionConfig::new(work_secs, break_secs)?;
        Ok(self.apply_config(config))
    }

    /// Minutes-based variant used by the settings form.
    pub fn reconfigure_minutes(&mut self, work: &str, brk: &str) -> Result<Event, ValidationError> {
        let config = SessionConfig::from_minutes(work, brk)?;
        Ok(self.apply_config(config))
    }

    /// Commit an already validated config.
    pub fn apply_config(&mut self, config: SessionConfig) -> Event {
        self.config = config;
        if !self.running {
            self.remaining_secs = self.total_secs();
        }
        tracing::debug!(
            work_secs = config.work_secs(),
            break_secs = config.break_secs(),
            running = self.running,
            "session durations reconfigured"
        );
        Event::DurationsReconfigured {
            work_secs: config.work_secs(),
            break_secs: config.break_secs(),
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn switch_session(&mut self) -> Event {
        let from = self.kind;
        self.kind = from.opposite();
        self.remaining_secs = self.total_secs();
        self.running = false;
        tracing::info!(
            from = from.as_str(),
            to = self.kind.as_str(),
            "{} session finished",
            from.as_str()
        );
        Event::SessionSwitched {
            from,
            to: self.kind,
            duration_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
