pub mod geometry;
pub mod scene_model;
pub mod shape;

pub use geometry::{rotate_point, Line};
pub use scene_model::{SceneSpec, ShapeKindSpec, ShapeSpec};
pub use shape::{Shape, ShapeKind};
