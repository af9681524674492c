pub mod config;
pub mod format;
pub mod presets;
pub mod render;
pub mod run;
