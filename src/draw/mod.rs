// src/draw/mod.rs
// Shared draw parameters and the low-level draw primitives

use nannou::prelude::*;

// Center marker disc radii, outer then inner
pub const MARKER_OUTER_RADIUS: f32 = 7.0;
pub const MARKER_INNER_RADIUS: f32 = 5.0;

#[derive(Debug, Clone)]
pub struct DrawParams {
    pub color: Rgb<f32>,
    pub stroke_weight: f32,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            color: rgb(1.0, 1.0, 1.0),
            stroke_weight: 1.0,
        }
    }
}

/// Two-layer pivot marker: a background-colored disc with a smaller
/// foreground disc on top, for an outlined look.
pub fn center_marker(draw: &Draw, center: Point2, color: Rgb<f32>) {
    draw.ellipse()
        .xy(center)
        .radius(MARKER_OUTER_RADIUS)
        .color(BLACK);
    draw.ellipse()
        .xy(center)
        .radius(MARKER_INNER_RADIUS)
        .color(color);
}
