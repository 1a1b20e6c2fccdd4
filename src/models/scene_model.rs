// src/models/scene_model.rs
// the JSON-based scene data model
//
// A scene file declares the shapes to spawn at startup; SceneSpec::build
// turns the descriptors into live Shapes.

use nannou::prelude::*;
use serde::{Deserialize, Serialize};

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::draw::DrawParams;
use crate::models::Shape;
use crate::views::Scene;

#[derive(Debug, Serialize, Deserialize)]
pub struct SceneSpec {
    pub name: String,
    pub shapes: Vec<ShapeSpec>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShapeSpec {
    #[serde(flatten)]
    pub kind: ShapeKindSpec,
    #[serde(default)]
    pub draw_center: bool,
    /// Falls back to the configured default stroke weight when omitted.
    #[serde(default)]
    pub line_width: Option<f32>,
    /// Angular velocity in rad/s; 0 = static.
    #[serde(default)]
    pub spin: f32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeKindSpec {
    Rect {
        lt: [f32; 2],
        wh: [f32; 2],
    },
    Circle {
        center: [f32; 2],
        radius: f32,
        #[serde(default = "default_circle_segments")]
        segments: usize,
    },
    Custom {
        center: [f32; 2],
        lines: Vec<[[f32; 2]; 2]>,
    },
    Propeller {
        center: [f32; 2],
        blade_length: f32,
        blade_width: f32,
        #[serde(default = "default_num_blades")]
        num_blades: usize,
    },
}

fn default_circle_segments() -> usize {
    10
}

fn default_num_blades() -> usize {
    3
}

impl SceneSpec {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let spec: SceneSpec = serde_json::from_str(&content)?;
        Ok(spec)
    }

    pub fn build(&self, defaults: &DrawParams) -> Scene {
        Scene::from_shapes(
            self.shapes
                .iter()
                .map(|spec| spec.build(defaults))
                .collect(),
        )
    }
}

impl ShapeSpec {
    pub fn build(&self, defaults: &DrawParams) -> Shape {
        let mut shape = match &self.kind {
            ShapeKindSpec::Rect { lt, wh } => {
                Shape::rect(pt2(lt[0], lt[1]), vec2(wh[0], wh[1]))
            }
            ShapeKindSpec::Circle {
                center,
                radius,
                segments,
            } => Shape::circle(pt2(center[0], center[1]), *radius, *segments),
            ShapeKindSpec::Custom { center, lines } => Shape::custom(
                pt2(center[0], center[1]),
                lines
                    .iter()
                    .map(|[a, b]| (vec2(a[0], a[1]), vec2(b[0], b[1])))
                    .collect(),
            ),
            ShapeKindSpec::Propeller {
                center,
                blade_length,
                blade_width,
                num_blades,
            } => Shape::propeller(
                pt2(center[0], center[1]),
                *blade_length,
                *blade_width,
                *num_blades,
            ),
        };

        shape.draw_center = self.draw_center;
        shape.line_width = self.line_width.unwrap_or(defaults.stroke_weight);
        shape.spin = self.spin;
        shape
    }
}
