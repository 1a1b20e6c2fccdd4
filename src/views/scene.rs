// src/views/scene.rs
// The Scene: an ordered group of shapes with broadcast transform calls.
//
// Every call forwards to the member shapes in insertion order, which keeps
// the per-frame transform/draw order stable and deterministic.

use nannou::prelude::*;

use crate::draw::DrawParams;
use crate::models::Shape;

#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Shape> {
        self.shapes.iter_mut()
    }

    /// Rotate every shape around its own center.
    pub fn rotate(&mut self, angle: f32) {
        for shape in self.shapes.iter_mut() {
            shape.rotate(angle);
        }
    }

    pub fn translate(&mut self, offset: Vec2) {
        for shape in self.shapes.iter_mut() {
            shape.translate(offset);
        }
    }

    pub fn scale(&mut self, factor: f32) {
        for shape in self.shapes.iter_mut() {
            shape.scale(factor);
        }
    }

    pub fn update(&mut self, dt: f32) {
        for shape in self.shapes.iter_mut() {
            shape.update(dt);
        }
    }

    pub fn draw(&self, draw: &Draw, params: &DrawParams) {
        for shape in &self.shapes {
            shape.draw(draw, params);
        }
    }

    pub fn toggle_center_markers(&mut self) {
        for shape in self.shapes.iter_mut() {
            shape.draw_center = !shape.draw_center;
        }
    }
}
