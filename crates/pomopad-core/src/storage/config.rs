//! TOML-based application configuration.
//!
//! Stores the defaults the widget starts from:
//! - Work and break durations
//! - Background style and dial size
//! - Notepad color
//!
//! Configuration is stored at `~/.config/pomopad/config.toml`. The widget
//! never writes its runtime state back here; only `config set`/`config reset`
//! change the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::{ConfigError, Result, ValidationError};
use crate::render::{BackgroundSpec, DEFAULT_COLOR_A, DEFAULT_COLOR_B, DEFAULT_RADIUS};
use crate::timer::{SessionConfig, DEFAULT_BREAK_MIN, DEFAULT_WORK_MIN};

/// Timer durations, in whole minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u64,
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u64,
}

/// Background and dial appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// One of `theme`, `solid`, `gradient`, `preset`.
    #[serde(default = "default_background_mode")]
    pub background_mode: String,
    #[serde(default = "default_color_a")]
    pub color_a: String,
    #[serde(default = "default_color_b")]
    pub color_b: String,
    /// Preset name, used when `background_mode` is `preset`.
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default = "default_dial_radius")]
    pub dial_radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotepadConfig {
    #[serde(default = "default_note_color")]
    pub background_color: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/pomopad/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub notepad: NotepadConfig,
}

// Default functions
fn default_work_minutes() -> u64 {
    DEFAULT_WORK_MIN
}
fn default_break_minutes() -> u64 {
    DEFAULT_BREAK_MIN
}
fn default_background_mode() -> String {
    "theme".into()
}
fn default_color_a() -> String {
    DEFAULT_COLOR_A.into()
}
fn default_color_b() -> String {
    DEFAULT_COLOR_B.into()
}
fn default_dial_radius() -> f64 {
    DEFAULT_RADIUS
}
fn default_note_color() -> String {
    "#ffffff".into()
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            break_minutes: default_break_minutes(),
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            background_mode: default_background_mode(),
            color_a: default_color_a(),
            color_b: default_color_b(),
            preset: None,
            dial_radius: default_dial_radius(),
        }
    }
}

impl Default for NotepadConfig {
    fn default() -> Self {
        Self {
            background_color: default_note_color(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> std::result::Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() || key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Number(n) if n.is_u64() => value
                        .trim()
                        .parse::<u64>()
                        .map(serde_json::Value::from)
                        .map_err(|_| invalid(format!("expected a whole number, got '{value}'")))?,
                    serde_json::Value::Number(_) => value
                        .trim()
                        .parse::<f64>()
                        .ok()
                        .and_then(serde_json::Number::from_f64)
                        .map(serde_json::Value::Number)
                        .ok_or_else(|| invalid(format!("expected a number, got '{value}'")))?,
                    serde_json::Value::Object(_) => return Err(unknown()),
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if the file is
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a value by dot-separated key, in memory only.
    ///
    /// The result must still describe a usable widget; otherwise the config
    /// is left unchanged.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.validate().map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        *self = updated;
        Ok(())
    }

    /// Durations as a validated [`SessionConfig`].
    pub fn session_config(&self) -> std::result::Result<SessionConfig, ValidationError> {
        let work = i64::try_from(self.timer.work_minutes.saturating_mul(60)).unwrap_or(i64::MAX);
        let brk = i64::try_from(self.timer.break_minutes.saturating_mul(60)).unwrap_or(i64::MAX);
        SessionConfig::new(work, brk)
    }

    /// Background as a validated [`BackgroundSpec`].
    pub fn background(&self) -> std::result::Result<BackgroundSpec, ValidationError> {
        let a = &self.appearance;
        match a.background_mode.trim().to_ascii_lowercase().as_str() {
            "theme" => Ok(BackgroundSpec::Theme),
            "solid" => BackgroundSpec::solid(&a.color_a),
            "gradient" => BackgroundSpec::gradient(&a.color_a, &a.color_b),
            "preset" => BackgroundSpec::preset(a.preset.as_deref().unwrap_or_default()),
            other => Err(ValidationError::UnknownBackgroundMode(other.to_string())),
        }
    }

    fn validate(&self) -> Result<()> {
        self.session_config()?;
        self.background()?;
        crate::render::Color::parse(&self.notepad.background_color)?;
        if !(self.appearance.dial_radius.is_finite() && self.appearance.dial_radius > 0.0) {
            return Err(ConfigError::InvalidValue {
                key: "appearance.dial_radius".into(),
                message: "must be a positive number".into(),
            }
            .into());
        }
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default configuration");
            Self::default()
        })
    }
}
