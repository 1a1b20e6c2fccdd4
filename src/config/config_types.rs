// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    pub default_stroke_weight: f32,
}

#[derive(Debug, Deserialize)]
pub struct SpeedConfig {
    /// Multiplier applied to the per-frame dt before it reaches the scene.
    pub dt_speed_factor: f32,
}

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub scene_file: String,
}
