// src/models/geometry.rs
// Point rotation and the Line segment primitive

use nannou::prelude::*;

/// Rotate `point` around `pivot` by `angle` radians.
///
/// Positive angles turn counter-clockwise in nannou's y-up coordinate space.
pub fn rotate_point(point: Point2, pivot: Point2, angle: f32) -> Point2 {
    // Translate to origin
    let x = point.x - pivot.x;
    let y = point.y - pivot.y;

    let cos_a = angle.cos();
    let sin_a = angle.sin();

    // Rotate, then translate back
    pt2(
        x * cos_a - y * sin_a + pivot.x,
        x * sin_a + y * cos_a + pivot.y,
    )
}

/// A single drawable segment. Each Line is owned by exactly one Shape;
/// shapes never share segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point2,
    pub end: Point2,
}

impl Line {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn rotate(&mut self, pivot: Point2, angle: f32) -> &mut Self {
        self.start = rotate_point(self.start, pivot, angle);
        self.end = rotate_point(self.end, pivot, angle);
        self
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.start += offset;
        self.end += offset;
    }

    /// Scale both endpoints away from `pivot`. The factor is per-axis;
    /// uniform callers pass `Vec2::splat(f)`.
    pub fn scale(&mut self, pivot: Point2, factor: Vec2) {
        self.start = (self.start - pivot) * factor + pivot;
        self.end = (self.end - pivot) * factor + pivot;
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    pub fn draw(&self, draw: &Draw, color: Rgb<f32>, stroke_weight: f32) {
        draw.line()
            .points(self.start, self.end)
            .color(color)
            .stroke_weight(stroke_weight);
    }
}
