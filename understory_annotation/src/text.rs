// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text labels.

use kurbo::{Point, Rect, RoundedRect, Shape as _, Size, Vec2};
use peniko::Color;
use vello_cpu::RenderContext;

use crate::font::TextFont;

/// Width of the placeholder box shown for an empty label.
const EMPTY_TEXT_WIDTH: f64 = 20.0;

/// Corner radius of the optional background plate.
const BACKGROUND_RADIUS: f64 = 4.0;

/// A possibly multi-line text label.
///
/// `position` is the top-left corner of the label's box; the glyphs are inset
/// from it by `padding`. Bounds are the measured text extent plus `padding` on
/// every side, recomputed whenever text, font, padding, or position change.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    text: String,
    position: Point,
    font: TextFont,
    color: Color,
    background: Option<Color>,
    padding: f64,
    editing: bool,
    bounds: Rect,
}

impl Text {
    /// Create a label without a background.
    #[must_use]
    pub fn new(text: impl Into<String>, position: Point, font: TextFont, color: Color) -> Self {
        let mut label = Self {
            text: text.into(),
            position,
            font,
            color,
            background: None,
            padding: 4.0,
            editing: false,
            bounds: Rect::ZERO,
        };
        label.recompute_bounds();
        label
    }

    /// Builder-style background plate.
    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }

    /// Builder-style padding.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.set_padding(padding);
        self
    }

    /// The label contents.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Top-left corner of the label box.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// The font used for measurement and drawing.
    #[must_use]
    pub fn font(&self) -> &TextFont {
        &self.font
    }

    /// Glyph color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Background plate color, if any.
    #[must_use]
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Inset between the box edge and the glyphs.
    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Whether an external text editor currently owns this label's pixels.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Cached bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Replace the contents.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.recompute_bounds();
    }

    /// Move the label.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
        self.recompute_bounds();
    }

    /// Change the font (face or size).
    pub fn set_font(&mut self, font: TextFont) {
        self.font = font;
        self.recompute_bounds();
    }

    /// Change the padding.
    pub fn set_padding(&mut self, padding: f64) {
        self.padding = padding;
        self.recompute_bounds();
    }

    /// Change the glyph color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Change or remove the background plate.
    pub fn set_background(&mut self, background: Option<Color>) {
        self.background = background;
    }

    /// Mark the label as being edited; editing labels are not rendered.
    pub fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }

    pub(crate) fn translate(&mut self, offset: Vec2) {
        self.set_position(self.position + offset);
    }

    fn recompute_bounds(&mut self) {
        let inset = 2.0 * self.padding;
        let size = if self.text.is_empty() {
            // The placeholder is a fixed width; only its height carries padding.
            Size::new(EMPTY_TEXT_WIDTH, f64::from(self.font.size()) + inset)
        } else {
            let content = self.font.measure(&self.text);
            Size::new(content.width + inset, content.height + inset)
        };
        self.bounds = Rect::from_origin_size(self.position, size);
    }

    pub(crate) fn render(&self, ctx: &mut RenderContext, _scale: f64) {
        if self.editing {
            return;
        }
        if let Some(background) = self.background {
            ctx.set_paint(background);
            let plate = RoundedRect::from_rect(self.bounds, BACKGROUND_RADIUS);
            ctx.fill_path(&plate.to_path(0.1));
        }

        let metrics = self.font.line_metrics();
        let left = self.position.x + self.padding;
        let mut baseline = self.position.y + self.padding + metrics.ascent;
        for line in self.text.split('\n') {
            self.font
                .draw_line(ctx, line, Point::new(left, baseline), self.color, 0.0);
            baseline += metrics.line_height();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(text: &str) -> Text {
        Text::new(
            text,
            Point::new(10.0, 20.0),
            TextFont::fallback(10.0),
            Color::BLACK,
        )
        .with_padding(3.0)
    }

    #[test]
    fn empty_text_uses_placeholder_box() {
        // 20 wide, font size plus padding on both sides tall.
        let mut t = label("");
        assert_eq!(t.bounds(), Rect::new(10.0, 20.0, 30.0, 36.0));

        t.set_padding(0.0);
        assert_eq!(
            t.bounds(),
            Rect::new(10.0, 20.0, 30.0, 30.0),
            "width ignores padding"
        );

        t.set_text("ab");
        assert!(
            t.bounds().width() < 20.0,
            "measured text replaces the placeholder"
        );
    }

    #[test]
    fn bounds_follow_text_and_padding() {
        let mut t = label("abcd");
        // 4 * 5.5 wide, one 10-unit line, padded by 3.
        assert!((t.bounds().width() - 28.0).abs() < 1e-6);
        assert!((t.bounds().height() - 16.0).abs() < 1e-6);

        t.set_text("abcd\nabcd");
        assert!(
            (t.bounds().height() - 26.0).abs() < 1e-6,
            "second line adds a line height"
        );

        t.set_padding(0.0);
        assert!(
            (t.bounds().width() - 22.0).abs() < 1e-6,
            "padding shrinks with it"
        );
    }

    #[test]
    fn moving_the_label_moves_bounds() {
        let mut t = label("x");
        let before = t.bounds();
        t.translate(Vec2::new(5.0, 5.0));
        assert_eq!(t.bounds(), before + Vec2::new(5.0, 5.0));
    }
}
