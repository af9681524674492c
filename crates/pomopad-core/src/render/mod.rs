mod background;
mod progress;

pub use background::{
    find_preset, BackgroundSpec, BackgroundStyle, Color, GradientPreset, DEFAULT_COLOR_A,
    DEFAULT_COLOR_B, GRADIENT_PRESETS,
};
pub use progress::{format_time, ProgressRenderer, ProgressView, DEFAULT_RADIUS, STROKE_WIDTH};
