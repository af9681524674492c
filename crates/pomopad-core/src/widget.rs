//! The widget: one session clock, one notepad and one background, owned
//! together and driven by user intents.
//!
//! Every intent either produces an [`Event`] (also published to
//! subscribers), does nothing, or fails with a [`crate::CoreError`] that leaves all
//! state untouched. Hosts repaint from [`Widget::view`].

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use tokio::sync::broadcast;

use crate::error::Result;
use crate::events::Event;
use crate::notepad::NotepadStore;
use crate::render::{BackgroundSpec, BackgroundStyle, ProgressRenderer, ProgressView};
use crate::storage::Config;
use crate::timer::{SessionClock, SessionConfig, SessionKind};

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// A discrete user action coming from the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Start,
    Pause,
    Toggle,
    Reset,
    /// One elapsed second, delivered by the host's ticker.
    Tick,
    Reconfigure {
        work_minutes: String,
        break_minutes: String,
    },
    SetBackground(BackgroundSpec),
    EditNote(String),
    SetNoteColor(String),
    ImportNote {
        bytes: Vec<u8>,
        mime: String,
    },
}

/// The contents of the settings panel while it is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDraft {
    pub work_minutes: String,
    pub break_minutes: String,
    pub background: BackgroundSpec,
}

/// Everything a host needs to paint one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub kind: SessionKind,
    pub running: bool,
    pub remaining_secs: u64,
    /// The start/pause button is disabled once a session has run out.
    pub start_enabled: bool,
    pub progress: ProgressView,
    pub background: BackgroundSpec,
    pub style: BackgroundStyle,
    pub note_color: String,
    pub footer: Vec<String>,
}

#[derive(Debug)]
pub struct Widget {
    clock: SessionClock,
    notepad: NotepadStore,
    background: BackgroundSpec,
    renderer: ProgressRenderer,
    events_tx: broadcast::Sender<Event>,
}

impl Widget {
    /// Build a widget from the configured defaults.
    pub fn new(config: &Config) -> Result<Self> {
        let mut widget = Self::with_parts(
            config.session_config()?,
            config.background()?,
            ProgressRenderer::new(config.appearance.dial_radius),
        );
        widget
            .notepad
            .set_background_color(&config.notepad.background_color)?;
        Ok(widget)
    }

    pub fn with_parts(session: SessionConfig, background: BackgroundSpec, renderer: ProgressRenderer) -> Self {
        let (events_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            clock: SessionClock::new(session),
            notepad: NotepadStore::new(),
            background,
            renderer,
            events_tx,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn clock(&self) -> &SessionClock {
        &self.clock
    }

    pub fn notepad(&self) -> &NotepadStore {
        &self.notepad
    }

    pub fn background(&self) -> &BackgroundSpec {
        &self.background
    }

    /// Receive every event produced from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events_tx.subscribe()
    }

    pub fn view(&self) -> ViewModel {
        let kind = self.clock.kind();
        let progress = self
            .renderer
            .render(self.clock.progress_fraction(), kind, self.clock.remaining_secs())
            .with_background(&self.background);
        ViewModel {
            kind,
            running: self.clock.is_running(),
            remaining_secs: self.clock.remaining_secs(),
            start_enabled: self.clock.can_start() || self.clock.is_running(),
            progress,
            background: self.background.clone(),
            style: BackgroundStyle::for_spec(&self.background, kind),
            note_color: self.notepad.background_color().to_string(),
            footer: self.footer(),
        }
    }

    fn footer(&self) -> Vec<String> {
        let config = self.clock.config();
        let mut lines = vec![
            "Pomodoro Timer".to_string(),
            format!(
                "Work: {}m | Break: {}m",
                config.duration_min(SessionKind::Work),
                config.duration_min(SessionKind::Break)
            ),
        ];
        if let Some(bg) = self.background.describe() {
            lines.push(format!("BG: {bg}"));
        }
        lines
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn dispatch(&mut self, intent: Intent) -> Result<Option<Event>> {
        let event = match intent {
            Intent::Start => self.clock.start(),
            Intent::Pause => self.clock.pause(),
            Intent::Toggle => self.clock.toggle(),
            Intent::Reset => self.clock.reset(),
            Intent::Tick => self.clock.tick(),
            Intent::Reconfigure {
                work_minutes,
                break_minutes,
            } => Some(self.clock.reconfigure_minutes(&work_minutes, &break_minutes)?),
            Intent::SetBackground(background) => Some(self.set_background(background)),
            Intent::EditNote(text) => {
                self.notepad.set_text(text);
                Some(Event::NoteEdited {
                    chars: self.notepad.text().chars().count(),
                    at: Utc::now(),
                })
            }
            Intent::SetNoteColor(color) => {
                self.notepad.set_background_color(&color)?;
                Some(Event::NoteColorChanged {
                    color: self.notepad.background_color().to_string(),
                    at: Utc::now(),
                })
            }
            Intent::ImportNote { bytes, mime } => {
                self.notepad.import_from_file(&bytes, &mime)?;
                Some(Event::NoteImported {
                    bytes: bytes.len(),
                    at: Utc::now(),
                })
            }
        };
        Ok(self.publish(event))
    }

    /// Open the settings panel: the running session is paused and the draft
    /// starts from the current values.
    pub fn open_settings(&mut self) -> SettingsDraft {
        let paused = self.clock.pause();
        self.publish(paused);
        let config = self.clock.config();
        SettingsDraft {
            work_minutes: config.duration_min(SessionKind::Work).to_string(),
            break_minutes: config.duration_min(SessionKind::Break).to_string(),
            background: self.background.clone(),
        }
    }

    /// Save the settings panel. Nothing is committed unless the whole draft
    /// is valid.
    pub fn apply_settings(&mut self, draft: SettingsDraft) -> Result<Vec<Event>> {
        let session = SessionConfig::from_minutes(&draft.work_minutes, &draft.break_minutes)?;
        let reconfigured = self.clock.apply_config(session);
        let mut events = Vec::with_capacity(2);
        events.extend(self.publish(Some(reconfigured)));
        if draft.background != self.background {
            let changed = self.set_background(draft.background);
            events.extend(self.publish(Some(changed)));
        }
        Ok(events)
    }

    pub async fn import_note(&mut self, path: &Path) -> Result<Event> {
        self.notepad.import_path(path).await?;
        let event = Event::NoteImported {
            bytes: self.notepad.text().len(),
            at: Utc::now(),
        };
        self.publish(Some(event.clone()));
        Ok(event)
    }

    pub async fn export_note(&self, dir: &Path) -> Result<PathBuf> {
        let path = self.notepad.export_to_dir(dir).await?;
        self.publish(Some(Event::NoteExported {
            path: path.display().to_string(),
            bytes: self.notepad.text().len(),
            at: Utc::now(),
        }));
        Ok(path)
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn set_background(&mut self, background: BackgroundSpec) -> Event {
        tracing::debug!(mode = background.mode(), "background changed");
        self.background = background.clone();
        Event::BackgroundChanged {
            background,
            at: Utc::now(),
        }
    }

    fn publish(&self, event: Option<Event>) -> Option<Event> {
        if let Some(ref event) = event {
            // No subscribers is fine: hosts may rely on polling `view()`.
            let _ = self.events_tx.send(event.clone());
        }
        event
    }
}

impl Default for Widget {
    fn default() -> Self {
        Self::with_parts(
            SessionConfig::default(),
            BackgroundSpec::default(),
            ProgressRenderer::default(),
        )
    }
}
