// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numbered step badges.

use kurbo::{Circle, Point, Rect, Shape, Vec2};
use peniko::Color;
use vello_cpu::RenderContext;

use crate::font::TextFont;
use crate::style::{contrasting, effective_scale};

/// Extra radius beyond the badge edge that still counts as a hit.
const COUNTER_HIT_SLOP: f64 = 5.0;

/// Numeral height relative to the badge diameter.
const NUMERAL_RATIO: f32 = 0.5;

/// A filled circle with a centered number.
#[derive(Clone, Debug, PartialEq)]
pub struct Counter {
    label: u32,
    position: Point,
    color: Color,
    size: f64,
    font: TextFont,
}

impl Counter {
    /// Create a badge of diameter `size` centered on `position`.
    #[must_use]
    pub fn new(label: u32, position: Point, color: Color, size: f64) -> Self {
        Self {
            label,
            position,
            color,
            size,
            font: TextFont::fallback(numeral_size(size)),
        }
    }

    /// Builder-style font for the numeral; its size is derived from the diameter.
    #[must_use]
    pub fn with_font(mut self, font: TextFont) -> Self {
        self.font = font.with_size(numeral_size(self.size));
        self
    }

    /// The displayed number.
    #[must_use]
    pub fn label(&self) -> u32 {
        self.label
    }

    /// Badge center.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Badge fill color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Badge diameter.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Square of side `size` centered on `position`.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.position, (self.size, self.size))
    }

    /// Change the displayed number.
    pub fn set_label(&mut self, label: u32) {
        self.label = label;
    }

    /// Move the badge.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Change the fill color; the numeral color follows.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Change the diameter.
    pub fn set_size(&mut self, size: f64) {
        self.size = size;
        self.font = self.font.with_size(numeral_size(size));
    }

    pub(crate) fn translate(&mut self, offset: Vec2) {
        self.position += offset;
    }

    pub(crate) fn hit_test_local(&self, point: Point) -> bool {
        self.position.distance(point) <= self.size / 2.0 + COUNTER_HIT_SLOP
    }

    pub(crate) fn render(&self, ctx: &mut RenderContext, scale: f64) {
        ctx.set_paint(self.color);
        ctx.fill_path(&Circle::new(self.position, self.size / 2.0).to_path(0.1));

        let text = self.label.to_string();
        let width = self.font.line_width(&text);
        let metrics = self.font.line_metrics();
        // Center the ink box (ascent to baseline) on the badge center.
        let baseline = Point::new(
            self.position.x - width / 2.0,
            self.position.y + metrics.ascent / 2.0,
        );
        let embolden = 1.0 / effective_scale(scale);
        self.font
            .draw_line(ctx, &text, baseline, contrasting(self.color), embolden);
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "badge diameters are far inside f32 range"
)]
fn numeral_size(diameter: f64) -> f32 {
    diameter as f32 * NUMERAL_RATIO
}
