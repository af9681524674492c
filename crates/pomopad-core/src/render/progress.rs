//! Circular progress dial.
//!
//! The dial is an SVG-style circle whose stroke is dashed with a dash the
//! length of the circumference; shifting the dash offset reveals the elapsed
//! share of the session.

use std::f64::consts::PI;

use serde::Serialize;

use super::background::BackgroundSpec;
use crate::timer::SessionKind;

pub const DEFAULT_RADIUS: f64 = 140.0;
pub const STROKE_WIDTH: f64 = 18.0;

const WORK_STROKE: &str = "#ef4444";
const BREAK_STROKE: &str = "#3b82f6";
const WORK_TRACK: &str = "rgba(239, 68, 68, 0.2)";
const BREAK_TRACK: &str = "rgba(59, 130, 246, 0.2)";
/// Track color when a custom background replaces the theme.
const NEUTRAL_TRACK: &str = "rgba(255, 255, 255, 0.15)";

/// Everything needed to paint the dial.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressView {
    pub label: &'static str,
    pub formatted_time: String,
    pub stroke_color: &'static str,
    pub background_stroke_color: &'static str,
    pub radius: f64,
    pub stroke_width: f64,
    pub dash_array: f64,
    pub dash_offset: f64,
    pub fraction: f64,
}

impl ProgressView {
    /// Swap the kind-tinted track for the neutral one on custom backgrounds.
    pub fn with_background(mut self, background: &BackgroundSpec) -> Self {
        if !background.is_theme() {
            self.background_stroke_color = NEUTRAL_TRACK;
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressRenderer {
    radius: f64,
}

impl ProgressRenderer {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Map an elapsed fraction onto the dial. Out-of-range fractions are
    /// clamped, NaN counts as no progress.
    pub fn render(&self, fraction: f64, kind: SessionKind, remaining_secs: u64) -> ProgressView {
        let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
        let circumference = self.circumference();
        let (stroke_color, background_stroke_color) = match kind {
            SessionKind::Work => (WORK_STROKE, WORK_TRACK),
            SessionKind::Break => (BREAK_STROKE, BREAK_TRACK),
        };
        ProgressView {
            label: kind.label(),
            formatted_time: format_time(remaining_secs),
            stroke_color,
            background_stroke_color,
            radius: self.radius,
            stroke_width: STROKE_WIDTH,
            dash_array: circumference,
            dash_offset: circumference * (1.0 - fraction),
            fraction,
        }
    }
}

impl Default for ProgressRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS)
    }
}

/// `MM:SS`, both fields zero-padded to two digits.
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
