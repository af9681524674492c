use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::render::BackgroundSpec;
use crate::timer::SessionKind;

/// Every state change in the widget produces an Event.
/// Hosts either poll `Widget::view()` or subscribe to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionStarted {
        kind: SessionKind,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    SessionPaused {
        kind: SessionKind,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// The current session ran out; the next one is ready but not started.
    SessionSwitched {
        from: SessionKind,
        to: SessionKind,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    SessionReset {
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    DurationsReconfigured {
        work_secs: u64,
        break_secs: u64,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    BackgroundChanged {
        background: BackgroundSpec,
        at: DateTime<Utc>,
    },
    NoteEdited {
        chars: usize,
        at: DateTime<Utc>,
    },
    NoteColorChanged {
        color: String,
        at: DateTime<Utc>,
    },
    NoteImported {
        bytes: usize,
        at: DateTime<Utc>,
    },
    NoteExported {
        path: String,
        bytes: usize,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        kind: SessionKind,
        remaining_secs: u64,
        total_secs: u64,
        running: bool,
        progress: f64,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Whether the event changes what the dial shows, and so needs a repaint.
    pub fn affects_clock(&self) -> bool {
        matches!(
            self,
            Event::SessionStarted { .. }
                | Event::SessionPaused { .. }
                | Event::SessionSwitched { .. }
                | Event::SessionReset { .. }
                | Event::DurationsReconfigured { .. }
                | Event::BackgroundChanged { .. }
        )
    }
}
