// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Straight and curved arrows.

use kurbo::{BezPath, Circle, Point, Rect, Shape, Vec2};
use peniko::Color;
use understory_markup_geometry::{
    BASE_HEAD_LENGTH, StrokedSegment, arrow_head_length, arrow_wings, curve_control_point,
    union_bounds,
};
use vello_cpu::RenderContext;

use crate::style::{HeadStyle, LineStyle, scaled_stroke};

/// Extra padding added around an arrow's endpoints beyond its head/stroke extent.
const ARROW_BOUNDS_SLOP: f64 = 5.0;

/// Minimum distance from the shaft that still counts as a hit.
const ARROW_MIN_HIT_TOLERANCE: f64 = 8.0;

/// An arrow from `start` to `end`, optionally curved, with decorations at both ends.
///
/// The head is drawn at `end`, the tail at `start`.
#[derive(Clone, Debug, PartialEq)]
pub struct Arrow {
    start: Point,
    end: Point,
    head: HeadStyle,
    tail: HeadStyle,
    line: LineStyle,
    curved: bool,
    color: Color,
    stroke_width: f64,
    bounds: Rect,
}

impl Arrow {
    /// Create a straight, solid arrow with a filled head and no tail.
    #[must_use]
    pub fn new(start: Point, end: Point, color: Color, stroke_width: f64) -> Self {
        let mut arrow = Self {
            start,
            end,
            head: HeadStyle::Filled,
            tail: HeadStyle::None,
            line: LineStyle::Solid,
            curved: false,
            color,
            stroke_width,
            bounds: Rect::ZERO,
        };
        arrow.recompute_bounds();
        arrow
    }

    /// Builder-style head decoration.
    #[must_use]
    pub fn with_head(mut self, head: HeadStyle) -> Self {
        self.head = head;
        self
    }

    /// Builder-style tail decoration.
    #[must_use]
    pub fn with_tail(mut self, tail: HeadStyle) -> Self {
        self.tail = tail;
        self
    }

    /// Builder-style line style.
    #[must_use]
    pub fn with_line_style(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    /// Builder-style curvature flag.
    #[must_use]
    pub fn with_curve(mut self, curved: bool) -> Self {
        self.curved = curved;
        self
    }

    /// Start point (tail end).
    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// End point (head end).
    #[must_use]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Head decoration.
    #[must_use]
    pub fn head(&self) -> HeadStyle {
        self.head
    }

    /// Tail decoration.
    #[must_use]
    pub fn tail(&self) -> HeadStyle {
        self.tail
    }

    /// Line style of the shaft.
    #[must_use]
    pub fn line_style(&self) -> LineStyle {
        self.line
    }

    /// Whether the shaft is drawn as a quadratic curve.
    #[must_use]
    pub fn is_curved(&self) -> bool {
        self.curved
    }

    /// Stroke and head color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Shaft stroke width in canvas units.
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Cached bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Move both endpoints.
    pub fn set_points(&mut self, start: Point, end: Point) {
        self.start = start;
        self.end = end;
        self.recompute_bounds();
    }

    /// Change the stroke width.
    pub fn set_stroke_width(&mut self, stroke_width: f64) {
        self.stroke_width = stroke_width;
        self.recompute_bounds();
    }

    /// Change the color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Change the head decoration.
    pub fn set_head(&mut self, head: HeadStyle) {
        self.head = head;
    }

    /// Change the tail decoration.
    pub fn set_tail(&mut self, tail: HeadStyle) {
        self.tail = tail;
    }

    /// Change the line style.
    pub fn set_line_style(&mut self, line: LineStyle) {
        self.line = line;
    }

    /// Toggle curvature.
    pub fn set_curved(&mut self, curved: bool) {
        self.curved = curved;
    }

    pub(crate) fn translate(&mut self, offset: Vec2) {
        self.set_points(self.start + offset, self.end + offset);
    }

    fn recompute_bounds(&mut self) {
        let padding = self.stroke_width.max(BASE_HEAD_LENGTH) + ARROW_BOUNDS_SLOP;
        self.bounds = union_bounds(&[self.start, self.end], padding);
    }

    /// Hit test against the straight chord, even for curved arrows.
    pub(crate) fn hit_test_local(&self, pt: Point) -> bool {
        let tolerance = (self.stroke_width / 2.0).max(ARROW_MIN_HIT_TOLERANCE);
        StrokedSegment::new(self.start, self.end, tolerance).hit(pt)
    }

    /// The shaft path plus the points each decoration is aimed from.
    fn shaft(&self) -> (BezPath, Point, Point) {
        let mut path = BezPath::new();
        path.move_to(self.start);
        if self.curved {
            let control = curve_control_point(self.start, self.end);
            path.quad_to(control, self.end);
            (path, control, control)
        } else {
            path.line_to(self.end);
            (path, self.start, self.end)
        }
    }

    pub(crate) fn render(&self, ctx: &mut RenderContext, scale: f64) {
        let (shaft, head_from, tail_from) = self.shaft();
        ctx.set_paint(self.color);
        ctx.set_stroke(scaled_stroke(self.stroke_width, scale, self.line));
        ctx.stroke_path(&shaft);

        let head_length = arrow_head_length(self.stroke_width);
        self.render_decoration(ctx, scale, self.head, self.end, head_from, head_length);
        self.render_decoration(ctx, scale, self.tail, self.start, tail_from, head_length);
    }

    fn render_decoration(
        &self,
        ctx: &mut RenderContext,
        scale: f64,
        style: HeadStyle,
        tip: Point,
        from: Point,
        length: f64,
    ) {
        match style {
            HeadStyle::None => {}
            HeadStyle::Filled => {
                let wings = arrow_wings(tip, from, length);
                let mut path = BezPath::new();
                path.move_to(tip);
                path.line_to(wings.left);
                path.line_to(wings.right);
                path.close_path();
                ctx.fill_path(&path);
            }
            HeadStyle::Open => {
                let wings = arrow_wings(tip, from, length);
                let mut path = BezPath::new();
                path.move_to(wings.left);
                path.line_to(tip);
                path.line_to(wings.right);
                ctx.set_stroke(scaled_stroke(self.stroke_width, scale, LineStyle::Solid));
                ctx.stroke_path(&path);
            }
            HeadStyle::Circle => {
                let circle = Circle::new(tip, length / 2.0);
                ctx.fill_path(&circle.to_path(0.1));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Arrow {
        Arrow::new(
            Point::new(50.0, 100.0),
            Point::new(200.0, 100.0),
            Color::BLACK,
            10.0,
        )
    }

    #[test]
    fn bounds_pad_by_head_or_stroke() {
        // max(10, 10) + 5
        assert_eq!(sample().bounds(), Rect::new(35.0, 85.0, 215.0, 115.0));
        let mut thick = sample();
        thick.set_stroke_width(20.0);
        assert_eq!(thick.bounds(), Rect::new(25.0, 75.0, 225.0, 125.0));
    }

    #[test]
    fn hit_uses_chord_distance() {
        let arrow = sample();
        assert!(arrow.hit_test_local(Point::new(100.0, 100.0)), "on shaft");
        assert!(arrow.hit_test_local(Point::new(100.0, 108.0)), "within 8");
        assert!(!arrow.hit_test_local(Point::new(100.0, 200.0)), "far below");
    }

    #[test]
    fn curved_arrows_still_hit_test_the_chord() {
        let arrow = sample().with_curve(true);
        assert!(
            arrow.hit_test_local(Point::new(125.0, 100.0)),
            "chord midpoint"
        );
        assert!(
            !arrow.hit_test_local(Point::new(125.0, 85.0)),
            "apex of the curve is off the chord"
        );
    }

    #[test]
    fn translate_moves_endpoints_and_bounds() {
        let mut arrow = sample();
        let before = arrow.bounds();
        arrow.translate(Vec2::new(-10.0, 5.0));
        assert_eq!(arrow.start(), Point::new(40.0, 105.0));
        assert_eq!(arrow.bounds(), before + Vec2::new(-10.0, 5.0));
    }
}
