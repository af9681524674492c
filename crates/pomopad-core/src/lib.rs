//! # Pomopad Core Library
//!
//! This library provides the behavior of the Pomopad widget: a work/break
//! countdown with a circular progress dial, a cosmetic background, and an
//! attached notepad. The `pomopad-cli` binary is a thin terminal host over
//! the same library.
//!
//! ## Architecture
//!
//! - **Session Clock**: A second-granular state machine; the host calls
//!   `tick()` once per elapsed second while it runs
//! - **Ticker**: Cancellable periodic task that produces those seconds
//! - **Renderer**: Pure mapping from progress to dial geometry and colors
//! - **Notepad**: Freeform text with plain-text import/export
//! - **Widget**: Owns all of the above, dispatches intents, publishes events
//!
//! ## Key Components
//!
//! - [`SessionClock`]: Core session state machine
//! - [`ProgressRenderer`]: Dial view-model
//! - [`NotepadStore`]: Note text and file exchange
//! - [`Widget`]: Intent dispatch and view snapshots
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod notepad;
pub mod render;
pub mod storage;
pub mod timer;
pub mod widget;

pub use error::{ConfigError, CoreError, NotepadError, Result, ValidationError};
pub use events::Event;
pub use notepad::{ExportedNote, NotepadStore, EXPORT_FILENAME};
pub use render::{
    format_time, BackgroundSpec, BackgroundStyle, Color, GradientPreset, ProgressRenderer,
    ProgressView, GRADIENT_PRESETS,
};
pub use storage::Config;
pub use timer::{SessionClock, SessionConfig, SessionKind, TickSignal, Ticker};
pub use widget::{Intent, SettingsDraft, ViewModel, Widget};
