// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangles, ellipses, and straight lines defined by a box.

use kurbo::{Ellipse, Line, Rect, RoundedRect, Shape as _, Vec2};
use peniko::Color;
use vello_cpu::RenderContext;

use crate::style::{LineStyle, scaled_stroke};

/// Which primitive a [`Shape`] draws inside its box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ShapeKind {
    /// Axis-aligned rectangle with optional rounded corners.
    Rectangle {
        /// Corner radius; `0.0` draws sharp corners.
        corner_radius: f64,
    },
    /// Ellipse inscribed in the box.
    Ellipse,
    /// Diagonal from the top-left to the bottom-right corner. Never filled.
    Line,
}

/// A box-defined shape: rectangle, ellipse, or diagonal line.
///
/// The box is the shape's bounds as-is; line shapes therefore hit test by
/// their box, not by the diagonal.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    rect: Rect,
    color: Color,
    stroke_width: f64,
    fill: Option<Color>,
    line: LineStyle,
}

impl Shape {
    /// Create an unfilled, solid-stroked shape.
    #[must_use]
    pub fn new(kind: ShapeKind, rect: Rect, color: Color, stroke_width: f64) -> Self {
        Self {
            kind,
            rect,
            color,
            stroke_width,
            fill: None,
            line: LineStyle::Solid,
        }
    }

    /// Convenience constructor for a sharp-cornered rectangle.
    #[must_use]
    pub fn rectangle(rect: Rect, color: Color, stroke_width: f64) -> Self {
        Self::new(
            ShapeKind::Rectangle { corner_radius: 0.0 },
            rect,
            color,
            stroke_width,
        )
    }

    /// Builder-style fill color; ignored by line shapes.
    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Builder-style outline dash pattern.
    #[must_use]
    pub fn with_line_style(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    /// Which primitive this shape draws.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The defining box, which is also the bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.rect
    }

    /// Outline color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Outline width in canvas units.
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Interior fill, if any.
    #[must_use]
    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    /// Replace the defining box.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Change the primitive kind.
    pub fn set_kind(&mut self, kind: ShapeKind) {
        self.kind = kind;
    }

    /// Change the outline color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Change the outline width.
    pub fn set_stroke_width(&mut self, stroke_width: f64) {
        self.stroke_width = stroke_width;
    }

    /// Change or remove the fill.
    pub fn set_fill(&mut self, fill: Option<Color>) {
        self.fill = fill;
    }

    pub(crate) fn translate(&mut self, offset: Vec2) {
        self.rect = self.rect + offset;
    }

    pub(crate) fn render(&self, ctx: &mut RenderContext, scale: f64) {
        let rect = self.rect;
        let outline = match self.kind {
            ShapeKind::Rectangle { corner_radius } if corner_radius > 0.0 => {
                RoundedRect::from_rect(rect.abs(), corner_radius).to_path(0.1)
            }
            ShapeKind::Rectangle { .. } => rect.abs().to_path(0.1),
            ShapeKind::Ellipse => Ellipse::from_rect(rect.abs()).to_path(0.1),
            ShapeKind::Line => Line::new((rect.x0, rect.y0), (rect.x1, rect.y1)).to_path(0.1),
        };

        if let Some(fill) = self.fill
            && self.kind != ShapeKind::Line
        {
            ctx.set_paint(fill);
            ctx.fill_path(&outline);
        }

        ctx.set_paint(self.color);
        ctx.set_stroke(scaled_stroke(self.stroke_width, scale, self.line));
        ctx.stroke_path(&outline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_the_box() {
        let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
        let shape = Shape::new(ShapeKind::Ellipse, rect, Color::BLACK, 3.0);
        assert_eq!(shape.bounds(), rect);
    }

    #[test]
    fn translate_shifts_the_box() {
        let mut shape = Shape::rectangle(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK, 1.0);
        shape.translate(Vec2::new(5.0, -5.0));
        assert_eq!(shape.bounds(), Rect::new(5.0, -5.0, 15.0, 5.0));
    }
}
