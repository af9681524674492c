//! Background customization: theme, solid color, custom gradient, or one of
//! the fixed gradient presets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::timer::SessionKind;

/// A CSS hex color, `#rgb` or `#rrggbb`. Case is preserved as entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let value = raw.trim();
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| ValidationError::InvalidColor(raw.to_string()))?;
        let valid_len = matches!(digits.len(), 3 | 6);
        if !valid_len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::InvalidColor(raw.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    /// For literals already known to be valid.
    pub(crate) fn from_trusted(value: &str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// A named two-stop gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradientPreset {
    pub name: &'static str,
    pub colors: [&'static str; 2],
}

pub const GRADIENT_PRESETS: [GradientPreset; 6] = [
    GradientPreset { name: "Sunset", colors: ["#ff7e5f", "#feb47b"] },
    GradientPreset { name: "Ocean", colors: ["#2b5876", "#4e4376"] },
    GradientPreset { name: "Forest", colors: ["#134E5E", "#71B280"] },
    GradientPreset { name: "Mojito", colors: ["#1d976c", "#93f9b9"] },
    GradientPreset { name: "Cosmic", colors: ["#ff00cc", "#333399"] },
    GradientPreset { name: "Peach", colors: ["#FFECD2", "#FCB69F"] },
];

/// Case-insensitive lookup in [`GRADIENT_PRESETS`].
pub fn find_preset(name: &str) -> Option<&'static GradientPreset> {
    let name = name.trim();
    GRADIENT_PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Default first color offered by the settings form.
pub const DEFAULT_COLOR_A: &str = "#dc2626";
/// Default second color offered by the settings form.
pub const DEFAULT_COLOR_B: &str = "#3b82f6";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum BackgroundSpec {
    /// Follows the session kind: red while working, blue on break.
    #[default]
    Theme,
    Solid { color: Color },
    Gradient { from: Color, to: Color },
    Preset { name: String, from: Color, to: Color },
}

impl BackgroundSpec {
    pub fn solid(color: &str) -> Result<Self, ValidationError> {
        Ok(BackgroundSpec::Solid {
            color: Color::parse(color)?,
        })
    }

    pub fn gradient(from: &str, to: &str) -> Result<Self, ValidationError> {
        Ok(BackgroundSpec::Gradient {
            from: Color::parse(from)?,
            to: Color::parse(to)?,
        })
    }

    pub fn preset(name: &str) -> Result<Self, ValidationError> {
        let preset = find_preset(name).ok_or_else(|| ValidationError::UnknownPreset(name.to_string()))?;
        Ok(BackgroundSpec::Preset {
            name: preset.name.to_string(),
            from: Color::parse(preset.colors[0])?,
            to: Color::parse(preset.colors[1])?,
        })
    }

    pub fn mode(&self) -> &'static str {
        match self {
            BackgroundSpec::Theme => "theme",
            BackgroundSpec::Solid { .. } => "solid",
            BackgroundSpec::Gradient { .. } => "gradient",
            BackgroundSpec::Preset { .. } => "preset",
        }
    }

    pub fn is_theme(&self) -> bool {
        matches!(self, BackgroundSpec::Theme)
    }

    /// Footer caption. The theme background is not described.
    pub fn describe(&self) -> Option<String> {
        match self {
            BackgroundSpec::Theme => None,
            BackgroundSpec::Solid { color } => Some(format!("Solid ({color})")),
            BackgroundSpec::Preset { name, .. } => Some(format!("Preset ({name})")),
            BackgroundSpec::Gradient { from, to } => Some(format!("Gradient ({from} to {to})")),
        }
    }
}

/// Page-level styling derived from a background and the session kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundStyle {
    /// CSS `background` value for the page.
    pub page: String,
    /// CSS `background` value for the control buttons.
    pub button: String,
    /// Whether the slow background-position animation is applied.
    pub animated: bool,
}

impl BackgroundStyle {
    pub fn for_spec(spec: &BackgroundSpec, kind: SessionKind) -> Self {
        match spec {
            BackgroundSpec::Theme => {
                let (page, button) = match kind {
                    SessionKind::Work => (["#f87171", "#dc2626"], ["#ef4444", "#dc2626"]),
                    SessionKind::Break => (["#60a5fa", "#2563eb"], ["#3b82f6", "#2563eb"]),
                };
                Self {
                    page: format!("linear-gradient(to bottom right, {}, {})", page[0], page[1]),
                    button: format!("linear-gradient(to right, {}, {})", button[0], button[1]),
                    animated: true,
                }
            }
            BackgroundSpec::Solid { color } => Self {
                page: color.to_string(),
                button: color.to_string(),
                animated: false,
            },
            BackgroundSpec::Gradient { from, to } | BackgroundSpec::Preset { from, to, .. } => Self {
                page: format!("linear-gradient(to bottom right, {from}, {to})"),
                button: format!("linear-gradient(to right, {from}, {to})"),
                animated: true,
            },
        }
    }
}
