// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Freehand highlighter strokes.

use kurbo::{BezPath, Circle, Point, Rect, Shape, Vec2};
use peniko::{BlendMode, Color, Compose, Mix};
use understory_markup_geometry::{StrokedSegment, union_bounds};
use vello_cpu::RenderContext;

use crate::style::{LineStyle, effective_scale, scaled_stroke};

/// Layer opacity applied to every highlighter stroke.
pub const HIGHLIGHTER_ALPHA: f32 = 0.4;

const HIGHLIGHTER_MIN_HIT_TOLERANCE: f64 = 10.0;

/// A polyline drawn with a multiply blend at fixed opacity.
#[derive(Clone, Debug, PartialEq)]
pub struct Highlighter {
    points: Vec<Point>,
    color: Color,
    stroke_width: f64,
    bounds: Rect,
}

impl Highlighter {
    /// Create a stroke through `points`.
    #[must_use]
    pub fn new(points: Vec<Point>, color: Color, stroke_width: f64) -> Self {
        let mut stroke = Self {
            points,
            color,
            stroke_width,
            bounds: Rect::ZERO,
        };
        stroke.recompute_bounds();
        stroke
    }

    /// Points along the stroke, in drawing order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Stroke color before blending.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Stroke width in canvas units.
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Cached bounds: all points padded by half the stroke width.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Extend the stroke while the pointer is still down.
    pub fn push_point(&mut self, point: Point) {
        self.points.push(point);
        self.recompute_bounds();
    }

    /// Replace every point.
    pub fn set_points(&mut self, points: Vec<Point>) {
        self.points = points;
        self.recompute_bounds();
    }

    /// Change the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Change the stroke width.
    pub fn set_stroke_width(&mut self, stroke_width: f64) {
        self.stroke_width = stroke_width;
        self.recompute_bounds();
    }

    pub(crate) fn translate(&mut self, offset: Vec2) {
        for p in &mut self.points {
            *p += offset;
        }
        self.recompute_bounds();
    }

    fn recompute_bounds(&mut self) {
        self.bounds = union_bounds(&self.points, self.stroke_width / 2.0);
    }

    fn tolerance(&self) -> f64 {
        (self.stroke_width / 2.0).max(HIGHLIGHTER_MIN_HIT_TOLERANCE)
    }

    pub(crate) fn hit_test_local(&self, point: Point) -> bool {
        let tolerance = self.tolerance();
        match self.points.as_slice() {
            [] => false,
            [only] => only.distance(point) <= tolerance,
            pts => pts
                .windows(2)
                .any(|pair| StrokedSegment::new(pair[0], pair[1], tolerance).hit(point)),
        }
    }

    pub(crate) fn render(&self, ctx: &mut RenderContext, scale: f64) {
        let Some((first, rest)) = self.points.split_first() else {
            return;
        };
        ctx.push_layer(
            None,
            Some(BlendMode::new(Mix::Multiply, Compose::SrcOver)),
            Some(HIGHLIGHTER_ALPHA),
            None,
            None,
        );
        ctx.set_paint(self.color);
        if rest.is_empty() {
            let radius = self.stroke_width / 2.0 / effective_scale(scale);
            ctx.fill_path(&Circle::new(*first, radius).to_path(0.1));
        } else {
            let mut path = BezPath::new();
            path.move_to(*first);
            for p in rest {
                path.line_to(*p);
            }
            ctx.set_stroke(scaled_stroke(self.stroke_width, scale, LineStyle::Solid));
            ctx.stroke_path(&path);
        }
        ctx.pop_layer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke() -> Highlighter {
        Highlighter::new(
            vec![Point::new(50.0, 100.0), Point::new(200.0, 100.0)],
            Color::from_rgba8(255, 230, 0, 255),
            12.0,
        )
    }

    #[test]
    fn bounds_pad_by_half_width() {
        assert_eq!(stroke().bounds(), Rect::new(44.0, 94.0, 206.0, 106.0));
    }

    #[test]
    fn hit_uses_segment_distance() {
        let h = stroke();
        assert!(
            h.hit_test_local(Point::new(120.0, 109.0)),
            "within 10 of the segment"
        );
        assert!(!h.hit_test_local(Point::new(120.0, 111.0)));
        assert!(
            !h.hit_test_local(Point::new(215.0, 100.0)),
            "past the end cap"
        );
    }

    #[test]
    fn wide_strokes_widen_tolerance() {
        let mut h = stroke();
        h.set_stroke_width(40.0);
        assert!(h.hit_test_local(Point::new(120.0, 119.0)));
    }

    #[test]
    fn single_point_and_empty_strokes() {
        let mut h = Highlighter::new(vec![], Color::BLACK, 4.0);
        assert!(!h.hit_test_local(Point::ZERO));
        assert_eq!(h.bounds(), Rect::ZERO);
        h.push_point(Point::new(5.0, 5.0));
        assert!(h.hit_test_local(Point::new(10.0, 10.0)));
    }
}
