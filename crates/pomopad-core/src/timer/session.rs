use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Default work session length in minutes.
pub const DEFAULT_WORK_MIN: u64 = 25;
/// Default break session length in minutes.
pub const DEFAULT_BREAK_MIN: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Work,
    Break,
}

impl SessionKind {
    /// The other kind of session.
    pub fn opposite(self) -> Self {
        match self {
            SessionKind::Work => SessionKind::Break,
            SessionKind::Break => SessionKind::Work,
        }
    }

    /// Heading shown above the dial.
    pub fn label(self) -> &'static str {
        match self {
            SessionKind::Work => "FOCUS",
            SessionKind::Break => "BREAK",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SessionKind::Work => "work",
            SessionKind::Break => "break",
        }
    }
}

impl std::str::FromStr for SessionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "work" | "focus" => Ok(SessionKind::Work),
            "break" => Ok(SessionKind::Break),
            other => Err(format!("unknown session kind: {other}")),
        }
    }
}

/// Configured work and break durations, both strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSessionConfig")]
pub struct SessionConfig {
    work_secs: u64,
    break_secs: u64,
}

/// Unchecked wire form of [`SessionConfig`].
#[derive(Deserialize)]
struct RawSessionConfig {
    work_secs: u64,
    break_secs: u64,
}

impl TryFrom<RawSessionConfig> for SessionConfig {
    type Error = ValidationError;

    fn try_from(raw: RawSessionConfig) -> Result<Self, Self::Error> {
        if raw.work_secs == 0 {
            return Err(ValidationError::duration("work", raw.work_secs));
        }
        if raw.break_secs == 0 {
            return Err(ValidationError::duration("break", raw.break_secs));
        }
        Ok(Self {
            work_secs: raw.work_secs,
            break_secs: raw.break_secs,
        })
    }
}

impl SessionConfig {
    /// Build a config from raw second counts.
    ///
    /// Signed inputs so that negative values coming from a form are rejected
    /// here rather than wrapping.
    pub fn new(work_secs: i64, break_secs: i64) -> Result<Self, ValidationError> {
        let work_secs = positive(work_secs, "work")?;
        let break_secs = positive(break_secs, "break")?;
        Ok(Self {
            work_secs,
            break_secs,
        })
    }

    /// Parse the two minute fields of the settings form.
    ///
    /// Each field must be a whole number of minutes greater than zero.
    pub fn from_minutes(work: &str, brk: &str) -> Result<Self, ValidationError> {
        let work_min = parse_minutes(work, "work")?;
        let break_min = parse_minutes(brk, "break")?;
        Ok(Self {
            work_secs: work_min.saturating_mul(60),
            break_secs: break_min.saturating_mul(60),
        })
    }

    pub fn work_secs(&self) -> u64 {
        self.work_secs
    }

    pub fn break_secs(&self) -> u64 {
        self.break_secs
    }

    /// Duration of the given session kind in seconds.
    pub fn duration_secs(&self, kind: SessionKind) -> u64 {
        match kind {
            SessionKind::Work => self.work_secs,
            SessionKind::Break => self.break_secs,
        }
    }

    /// Whole minutes of the given session kind, as shown in the footer.
    pub fn duration_min(&self, kind: SessionKind) -> u64 {
        self.duration_secs(kind) / 60
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            work_secs: DEFAULT_WORK_MIN * 60,
            break_secs: DEFAULT_BREAK_MIN * 60,
        }
    }
}

fn positive(value: i64, field: &str) -> Result<u64, ValidationError> {
    if value <= 0 {
        return Err(ValidationError::duration(field, value));
    }
    Ok(value as u64)
}

fn parse_minutes(raw: &str, field: &str) -> Result<u64, ValidationError> {
    let minutes: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::duration(field, raw))?;
    positive(minutes, field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_25_and_5_minutes() {
        let c = SessionConfig::default();
        assert_eq!(c.work_secs(), 1500);
        assert_eq!(c.break_secs(), 300);
    }

    #[test]
    fn rejects_non_positive_seconds() {
        assert!(SessionConfig::new(0, 5).is_err());
        assert!(SessionConfig::new(-3, 5).is_err());
        assert!(SessionConfig::new(5, 0).is_err());
        assert!(SessionConfig::new(1, 1).is_ok());
    }

    #[test]
    fn parses_minutes_with_whitespace() {
        let c = SessionConfig::from_minutes(" 50 ", "10").unwrap();
        assert_eq!(c.work_secs(), 3000);
        assert_eq!(c.break_secs(), 600);
    }

    #[test]
    fn rejects_garbage_minutes() {
        for bad in ["abc", "", "-3", "0", "2.5"] {
            let err = SessionConfig::from_minutes(bad, "5").unwrap_err();
            assert!(matches!(err, ValidationError::InvalidDuration { ref field, .. } if field == "work"));
        }
        assert!(SessionConfig::from_minutes("25", "x").is_err());
    }

    #[test]
    fn deserializing_validates_durations() {
        let c: SessionConfig = serde_json::from_str(r#"{"work_secs":60,"break_secs":30}"#).unwrap();
        assert_eq!(c, SessionConfig::new(60, 30).unwrap());

        let err = serde_json::from_str::<SessionConfig>(r#"{"work_secs":0,"break_secs":5}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Invalid work duration"));
        assert!(serde_json::from_str::<SessionConfig>(r#"{"work_secs":5,"break_secs":0}"#).is_err());
    }

    #[test]
    fn kind_opposite_and_labels() {
        assert_eq!(SessionKind::Work.opposite(), SessionKind::Break);
        assert_eq!(SessionKind::Break.opposite(), SessionKind::Work);
        assert_eq!(SessionKind::Work.label(), "FOCUS");
        assert_eq!("Break".parse::<SessionKind>().unwrap(), SessionKind::Break);
        assert!("lunch".parse::<SessionKind>().is_err());
    }
}
