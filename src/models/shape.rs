// src/models/shape.rs
// The Shape type: a movable center plus the line segments anchored to it.
//
// One non-polymorphic struct covers every variant; ShapeKind carries the
// construction parameters. Transforms mutate the realized lines in place and
// pivot on `center`, so composite shapes turn and scale rigidly as a unit.

use nannou::prelude::*;
use std::f32::consts::TAU;

use crate::draw::{center_marker, DrawParams};
use crate::models::geometry::{rotate_point, Line};

/// Variant tag plus the parameters the variant was built from.
///
/// Custom and Propeller keep their relative/local definitions so the
/// absolute line list can be regenerated; Rect and Circle own absolute
/// geometry only.
#[derive(Debug, Clone)]
pub enum ShapeKind {
    Rect { pos: Point2, size: Vec2 },
    Circle { radius: f32, segments: usize },
    Custom { rel_lines: Vec<(Vec2, Vec2)> },
    Propeller { blades: Vec<[Vec2; 4]> },
}

#[derive(Debug, Clone)]
pub struct Shape {
    pub kind: ShapeKind,
    pub center: Point2,
    pub lines: Vec<Line>,
    pub draw_center: bool,
    pub line_width: f32,
    /// Angular velocity in rad/s, consumed by `update`.
    pub spin: f32,
}

impl Shape {
    fn with_kind(kind: ShapeKind, center: Point2) -> Self {
        Self {
            kind,
            center,
            lines: Vec::new(),
            draw_center: false,
            line_width: 1.0,
            spin: 0.0,
        }
    }

    /// Closed rectangle from top-left corner `lt` and size `wh`.
    /// Lines run top, right, bottom, left; the pivot sits at `lt + wh / 2`.
    pub fn rect(lt: Point2, wh: Vec2) -> Self {
        let mut shape = Self::with_kind(ShapeKind::Rect { pos: lt, size: wh }, lt + wh / 2.0);

        let (l, t) = (lt.x, lt.y);
        let (w, h) = (wh.x, wh.y);
        shape.lines = vec![
            Line::new(pt2(l, t), pt2(l + w, t)),
            Line::new(pt2(l + w, t), pt2(l + w, t + h)),
            Line::new(pt2(l + w, t + h), pt2(l, t + h)),
            Line::new(pt2(l, t + h), pt2(l, t)),
        ];
        shape
    }

    /// Regular `num_segments`-gon inscribed at `radius`, closing last-to-first.
    pub fn circle(center: Point2, radius: f32, num_segments: usize) -> Self {
        let mut shape = Self::with_kind(
            ShapeKind::Circle {
                radius,
                segments: num_segments,
            },
            center,
        );

        let mut points = Vec::with_capacity(num_segments);
        let angle_increment = 360.0 / num_segments as f32;
        for i in 0..num_segments {
            let angle = (i as f32 * angle_increment).to_radians();
            points.push(center + vec2(angle.cos(), angle.sin()) * radius);
        }

        shape.lines = (0..points.len())
            .map(|i| Line::new(points[i], points[(i + 1) % points.len()]))
            .collect();
        shape
    }

    /// Shape defined by (start, end) offset pairs relative to `center`.
    pub fn custom(center: Point2, rel_lines: Vec<(Vec2, Vec2)>) -> Self {
        let mut shape = Self::with_kind(ShapeKind::Custom { rel_lines }, center);
        shape.update_lines();
        shape
    }

    /// `num_blades` rectangular blades spread evenly around the hub.
    /// Each blade is a local-space quad pre-rotated by its slot angle.
    pub fn propeller(center: Point2, blade_length: f32, blade_width: f32, num_blades: usize) -> Self {
        let half_w = blade_width / 2.0;
        let local = [
            vec2(-half_w, 0.0),
            vec2(half_w, 0.0),
            vec2(half_w, -blade_length),
            vec2(-half_w, -blade_length),
        ];

        let mut blades = Vec::with_capacity(num_blades);
        for i in 0..num_blades {
            let angle = i as f32 * TAU / num_blades as f32;
            let mut blade = local;
            for corner in blade.iter_mut() {
                *corner = rotate_point(*corner, pt2(0.0, 0.0), angle);
            }
            blades.push(blade);
        }

        let mut shape = Self::with_kind(ShapeKind::Propeller { blades }, center);
        shape.update_lines();
        shape
    }

    /// Rebuild the absolute line list from the stored relative/local
    /// definition (Custom, Propeller). No-op for Rect and Circle, which own
    /// absolute geometry only.
    ///
    /// This is the construction/re-anchoring path: the stored definition is
    /// never re-rotated by `rotate`/`scale`, so regenerating after an
    /// incremental transform discards that transform by contract.
    pub fn update_lines(&mut self) {
        match &self.kind {
            ShapeKind::Custom { rel_lines } => {
                self.lines = rel_lines
                    .iter()
                    .map(|(a, b)| Line::new(self.center + *a, self.center + *b))
                    .collect();
            }
            ShapeKind::Propeller { blades } => {
                self.lines = blades
                    .iter()
                    .flat_map(|blade| {
                        (0..blade.len()).map(|i| {
                            Line::new(
                                self.center + blade[i],
                                self.center + blade[(i + 1) % blade.len()],
                            )
                        })
                    })
                    .collect();
            }
            ShapeKind::Rect { .. } | ShapeKind::Circle { .. } => {}
        }
    }

    /// Rotate every line around the shape's own center. The center is the
    /// fixed pivot and does not move.
    pub fn rotate(&mut self, angle: f32) {
        for line in self.lines.iter_mut() {
            line.rotate(self.center, angle);
        }
    }

    /// Move the center and every endpoint by the same offset, preserving all
    /// relative geometry exactly.
    pub fn translate(&mut self, offset: Vec2) {
        self.center += offset;
        for line in self.lines.iter_mut() {
            line.translate(offset);
        }
    }

    /// Uniform scale around the center; the center is the scale origin and
    /// does not move.
    pub fn scale(&mut self, factor: f32) {
        self.scale_xy(Vec2::splat(factor));
    }

    /// Per-axis scale around the center.
    pub fn scale_xy(&mut self, factor: Vec2) {
        for line in self.lines.iter_mut() {
            line.scale(self.center, factor);
        }
    }

    /// Per-frame hook: advance the shape by its angular velocity.
    pub fn update(&mut self, dt: f32) {
        if self.spin != 0.0 {
            self.rotate(self.spin * dt);
        }
    }

    pub fn draw(&self, draw: &Draw, params: &DrawParams) {
        for line in &self.lines {
            line.draw(draw, params.color, self.line_width);
        }
        if self.draw_center {
            center_marker(draw, self.center, params.color);
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const TOLERANCE: f32 = 1e-4;

    fn assert_pt_eq(a: Point2, b: Point2) {
        assert!(
            (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE,
            "expected ({}, {}), got ({}, {})",
            b.x,
            b.y,
            a.x,
            a.y
        );
    }

    fn endpoints(shape: &Shape) -> Vec<Point2> {
        shape
            .lines
            .iter()
            .flat_map(|l| [l.start, l.end])
            .collect()
    }

    mod construction_tests {
        use super::*;

        #[test]
        fn test_rect_scenario() {
            let rect = Shape::rect(pt2(0.0, 0.0), vec2(10.0, 20.0));
            assert_pt_eq(rect.center, pt2(5.0, 10.0));
            assert_eq!(rect.line_count(), 4);

            let expected = [
                (pt2(0.0, 0.0), pt2(10.0, 0.0)),
                (pt2(10.0, 0.0), pt2(10.0, 20.0)),
                (pt2(10.0, 20.0), pt2(0.0, 20.0)),
                (pt2(0.0, 20.0), pt2(0.0, 0.0)),
            ];
            for (line, (start, end)) in rect.lines.iter().zip(expected) {
                assert_pt_eq(line.start, start);
                assert_pt_eq(line.end, end);
            }
        }

        #[test]
        fn test_circle_scenario() {
            let circle = Shape::circle(pt2(0.0, 0.0), 10.0, 4);
            assert_eq!(circle.line_count(), 4);

            // 90-degree increments starting on the +x axis
            assert_pt_eq(circle.lines[0].start, pt2(10.0, 0.0));
            assert_pt_eq(circle.lines[1].start, pt2(0.0, 10.0));
            assert_pt_eq(circle.lines[2].start, pt2(-10.0, 0.0));
            assert_pt_eq(circle.lines[3].start, pt2(0.0, -10.0));
            // closed: last line wraps back to the first point
            assert_pt_eq(circle.lines[3].end, pt2(10.0, 0.0));
        }

        #[test]
        fn test_circle_line_count_matches_segments() {
            for n in [3, 7, 20] {
                assert_eq!(Shape::circle(pt2(1.0, 1.0), 5.0, n).line_count(), n);
            }
        }

        #[test]
        fn test_circle_points_lie_on_radius() {
            let circle = Shape::circle(pt2(3.0, -4.0), 12.5, 9);
            for line in &circle.lines {
                assert!((line.start.distance(circle.center) - 12.5).abs() < TOLERANCE);
            }
        }

        #[test]
        fn test_custom_materializes_relative_lines() {
            let shape = Shape::custom(
                pt2(100.0, 50.0),
                vec![
                    (vec2(-10.0, 0.0), vec2(10.0, 0.0)),
                    (vec2(0.0, -10.0), vec2(0.0, 10.0)),
                ],
            );
            assert_eq!(shape.line_count(), 2);
            assert_pt_eq(shape.lines[0].start, pt2(90.0, 50.0));
            assert_pt_eq(shape.lines[0].end, pt2(110.0, 50.0));
            assert_pt_eq(shape.lines[1].start, pt2(100.0, 40.0));
            assert_pt_eq(shape.lines[1].end, pt2(100.0, 60.0));
        }

        #[test]
        fn test_propeller_scenario() {
            let prop = Shape::propeller(pt2(0.0, 0.0), 80.0, 20.0, 2);
            assert_eq!(prop.line_count(), 8);

            // The second blade is the first one turned half a revolution
            match &prop.kind {
                ShapeKind::Propeller { blades } => {
                    for (a, b) in blades[0].iter().zip(blades[1].iter()) {
                        assert_pt_eq(rotate_point(*a, pt2(0.0, 0.0), PI), *b);
                    }
                }
                _ => panic!("Wrong variant"),
            }
        }

        #[test]
        fn test_propeller_line_count() {
            for n in [1, 3, 5] {
                let prop = Shape::propeller(pt2(0.0, 0.0), 80.0, 20.0, n);
                assert_eq!(prop.line_count(), 4 * n);
            }
        }

        #[test]
        fn test_propeller_blades_are_closed_quads() {
            let prop = Shape::propeller(pt2(10.0, 10.0), 60.0, 16.0, 3);
            for blade in prop.lines.chunks(4) {
                assert_pt_eq(blade[0].start, blade[3].end);
                for pair in blade.windows(2) {
                    assert_pt_eq(pair[0].end, pair[1].start);
                }
            }
        }

        #[test]
        fn test_degenerate_parameters_pass_through() {
            // Not validated: degenerate inputs produce degenerate geometry
            let rect = Shape::rect(pt2(5.0, 5.0), vec2(0.0, 0.0));
            assert_eq!(rect.line_count(), 4);
            assert!(rect.lines.iter().all(|l| l.length() == 0.0));

            let circle = Shape::circle(pt2(0.0, 0.0), 10.0, 0);
            assert_eq!(circle.line_count(), 0);

            let prop = Shape::propeller(pt2(0.0, 0.0), 0.0, 0.0, 1);
            assert_eq!(prop.line_count(), 4);
        }
    }

    mod transform_tests {
        use super::*;

        #[test]
        fn test_rotate_keeps_center_fixed() {
            let mut rect = Shape::rect(pt2(0.0, 0.0), vec2(10.0, 20.0));
            rect.rotate(1.0);
            assert_pt_eq(rect.center, pt2(5.0, 10.0));
        }

        #[test]
        fn test_rotate_preserves_distances_to_center() {
            let mut rect = Shape::rect(pt2(-3.0, 2.0), vec2(8.0, 6.0));
            let before: Vec<f32> = endpoints(&rect)
                .iter()
                .map(|p| p.distance(rect.center))
                .collect();
            rect.rotate(0.83);
            for (p, d) in endpoints(&rect).iter().zip(before) {
                assert!((p.distance(rect.center) - d).abs() < TOLERANCE);
            }
        }

        #[test]
        fn test_rotate_round_trip() {
            let mut circle = Shape::circle(pt2(40.0, -10.0), 25.0, 12);
            let before = endpoints(&circle);
            circle.rotate(0.37);
            circle.rotate(-0.37);
            for (p, q) in endpoints(&circle).iter().zip(before) {
                assert_pt_eq(*p, q);
            }
        }

        #[test]
        fn test_translate_moves_center_and_lines_together() {
            let mut rect = Shape::rect(pt2(0.0, 0.0), vec2(10.0, 20.0));
            let offsets: Vec<Vec2> = endpoints(&rect).iter().map(|p| *p - rect.center).collect();

            rect.translate(vec2(33.0, -7.0));
            assert_pt_eq(rect.center, pt2(38.0, 3.0));
            for (p, offset) in endpoints(&rect).iter().zip(offsets) {
                assert_pt_eq(*p, rect.center + offset);
            }
        }

        #[test]
        fn test_translate_then_rotate_matches_rotate_then_translate() {
            // Rigid-body composition: the pivot travels with the shape
            let offset = vec2(120.0, -45.0);
            let angle = 0.6;

            let mut a = Shape::rect(pt2(10.0, 10.0), vec2(30.0, 12.0));
            a.translate(offset);
            a.rotate(angle);

            let mut b = Shape::rect(pt2(10.0, 10.0), vec2(30.0, 12.0));
            b.rotate(angle);
            b.translate(offset);

            for (p, q) in endpoints(&a).iter().zip(endpoints(&b)) {
                assert_pt_eq(*p, q);
            }
        }

        #[test]
        fn test_scale_keeps_center_fixed_and_composes() {
            let mut twice = Shape::circle(pt2(5.0, 5.0), 10.0, 8);
            twice.scale(1.5);
            twice.scale(2.0);
            assert_pt_eq(twice.center, pt2(5.0, 5.0));

            let mut once = Shape::circle(pt2(5.0, 5.0), 10.0, 8);
            once.scale(3.0);

            for (p, q) in endpoints(&twice).iter().zip(endpoints(&once)) {
                assert_pt_eq(*p, q);
            }
        }

        #[test]
        fn test_scale_xy_is_per_axis() {
            let mut rect = Shape::rect(pt2(0.0, 0.0), vec2(10.0, 10.0));
            rect.scale_xy(vec2(2.0, 1.0));
            // Width doubles around center (5,5); height is untouched
            assert_pt_eq(rect.lines[0].start, pt2(-5.0, 0.0));
            assert_pt_eq(rect.lines[0].end, pt2(15.0, 0.0));
        }

        #[test]
        fn test_update_applies_spin_over_dt() {
            let mut spun = Shape::propeller(pt2(0.0, 0.0), 80.0, 20.0, 3);
            spun.spin = 2.0;
            spun.update(0.25);

            let mut rotated = Shape::propeller(pt2(0.0, 0.0), 80.0, 20.0, 3);
            rotated.rotate(0.5);

            for (p, q) in endpoints(&spun).iter().zip(endpoints(&rotated)) {
                assert_pt_eq(*p, q);
            }
        }

        #[test]
        fn test_update_without_spin_is_a_no_op() {
            let mut rect = Shape::rect(pt2(0.0, 0.0), vec2(4.0, 4.0));
            let before = endpoints(&rect);
            rect.update(1.0);
            assert_eq!(endpoints(&rect), before);
        }

        #[test]
        fn test_update_lines_discards_incremental_rotation() {
            // Regeneration is the construction path: the stored relative
            // definition is never re-rotated, so update_lines resets the pose
            let mut shape = Shape::custom(
                pt2(0.0, 0.0),
                vec![(vec2(-10.0, 0.0), vec2(10.0, 0.0))],
            );
            let before = endpoints(&shape);
            shape.rotate(PI / 2.0);
            shape.update_lines();
            for (p, q) in endpoints(&shape).iter().zip(before) {
                assert_pt_eq(*p, q);
            }
        }

        #[test]
        fn test_update_lines_follows_a_reassigned_center() {
            let mut prop = Shape::propeller(pt2(0.0, 0.0), 40.0, 10.0, 2);
            prop.center = pt2(50.0, 50.0);
            prop.update_lines();
            assert_pt_eq(prop.lines[0].start, pt2(45.0, 50.0));
        }
    }
}
