// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font handles, line metrics, and glyph drawing.
//!
//! Text layout is one glyph per `char`, advances from
//! the font's horizontal metrics, no shaping or kerning. A [`TextFont`] without
//! font data (or with data that fails to parse) falls back to fixed-ratio
//! metrics and draws filled placeholder boxes, so bounds stay well-defined in
//! headless environments without any font files.

use core::fmt;

use kurbo::{BezPath, Point, Rect, Shape, Size as KurboSize, Stroke};
use peniko::{Color, FontData};
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::OutlinePen;
use skrifa::{FontRef, MetadataProvider};
use vello_cpu::RenderContext;

const FALLBACK_ASCENT: f32 = 0.8;
const FALLBACK_DESCENT: f32 = -0.2;
const FALLBACK_ADVANCE: f32 = 0.55;

/// Vertical metrics of a single line, in canvas units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineMetrics {
    /// Distance from the baseline to the top of the line (positive).
    pub ascent: f64,
    /// Distance from the baseline to the bottom of the line (negative).
    pub descent: f64,
    /// Extra spacing between consecutive lines.
    pub line_gap: f64,
}

impl LineMetrics {
    /// Vertical advance from one baseline to the next: `ascent - descent + line_gap`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent - self.descent + self.line_gap
    }
}

/// A font face at a specific size.
///
/// Cloning is cheap: the font bytes live in a shared [`peniko::Blob`].
#[derive(Clone)]
pub struct TextFont {
    data: Option<FontData>,
    size: f32,
}

impl TextFont {
    /// Create a font from shared font data at `size` pixels per em.
    #[must_use]
    pub fn new(data: FontData, size: f32) -> Self {
        Self {
            data: Some(data),
            size,
        }
    }

    /// A font with no face data; uses fallback metrics and placeholder glyphs.
    #[must_use]
    pub const fn fallback(size: f32) -> Self {
        Self { data: None, size }
    }

    /// Returns the same face at a different size.
    #[must_use]
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            data: self.data.clone(),
            size,
        }
    }

    /// Font size in pixels per em.
    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The underlying font data, if any.
    #[must_use]
    pub fn data(&self) -> Option<&FontData> {
        self.data.as_ref()
    }

    fn font_ref(&self) -> Option<FontRef<'_>> {
        let data = self.data.as_ref()?;
        FontRef::from_index(data.data.as_ref(), data.index).ok()
    }

    /// Line metrics at this size.
    #[must_use]
    pub fn line_metrics(&self) -> LineMetrics {
        match self.font_ref() {
            Some(font) => {
                let m = font.metrics(Size::new(self.size), LocationRef::default());
                LineMetrics {
                    ascent: f64::from(m.ascent),
                    descent: f64::from(m.descent),
                    line_gap: f64::from(m.leading),
                }
            }
            None => LineMetrics {
                ascent: f64::from(self.size * FALLBACK_ASCENT),
                descent: f64::from(self.size * FALLBACK_DESCENT),
                line_gap: 0.0,
            },
        }
    }

    /// Sum of horizontal advances for a single line of text.
    #[must_use]
    pub fn line_width(&self, line: &str) -> f64 {
        match self.font_ref() {
            Some(font) => {
                let charmap = font.charmap();
                let metrics = font.glyph_metrics(Size::new(self.size), LocationRef::default());
                line.chars()
                    .map(|ch| {
                        charmap
                            .map(ch)
                            .and_then(|gid| metrics.advance_width(gid))
                            .unwrap_or(self.size * FALLBACK_ADVANCE)
                    })
                    .map(f64::from)
                    .sum()
            }
            None => line.chars().count() as f64 * f64::from(self.size * FALLBACK_ADVANCE),
        }
    }

    /// Extent of a possibly multi-line string: widest line by line count × line height.
    #[must_use]
    pub fn measure(&self, text: &str) -> KurboSize {
        let metrics = self.line_metrics();
        let mut width = 0.0_f64;
        let mut lines = 0_usize;
        for line in text.split('\n') {
            width = width.max(self.line_width(line));
            lines += 1;
        }
        KurboSize::new(width, lines as f64 * metrics.line_height())
    }

    /// Fill the glyphs of `line` with `color`, starting at `baseline`.
    ///
    /// Outline glyphs are appended to a single path so each line is one fill.
    /// When `embolden` is non-zero the same path is also stroked with that
    /// width as a synthetic bold.
    pub(crate) fn draw_line(
        &self,
        ctx: &mut RenderContext,
        line: &str,
        baseline: Point,
        color: Color,
        embolden: f64,
    ) {
        let mut path = BezPath::new();
        match self.font_ref() {
            Some(font) => {
                let size = Size::new(self.size);
                let charmap = font.charmap();
                let metrics = font.glyph_metrics(size, LocationRef::default());
                let outlines = font.outline_glyphs();
                let mut x = baseline.x;
                for ch in line.chars() {
                    let advance = match charmap.map(ch) {
                        Some(gid) => {
                            if let Some(glyph) = outlines.get(gid) {
                                let mut pen = GlyphPen {
                                    path: &mut path,
                                    origin: Point::new(x, baseline.y),
                                };
                                // A glyph that fails to draw is skipped, not fatal.
                                let _ = glyph.draw(size, &mut pen);
                            }
                            metrics.advance_width(gid).unwrap_or(self.size * FALLBACK_ADVANCE)
                        }
                        None => self.size * FALLBACK_ADVANCE,
                    };
                    x += f64::from(advance);
                }
            }
            None => {
                let advance = f64::from(self.size * FALLBACK_ADVANCE);
                let ascent = f64::from(self.size * FALLBACK_ASCENT);
                let mut x = baseline.x;
                for ch in line.chars() {
                    if !ch.is_whitespace() {
                        let tofu = Rect::new(
                            x + advance * 0.15,
                            baseline.y - ascent * 0.85,
                            x + advance * 0.85,
                            baseline.y,
                        );
                        path.extend(tofu.path_elements(0.1));
                    }
                    x += advance;
                }
            }
        }
        if path.elements().is_empty() {
            return;
        }
        ctx.set_paint(color);
        ctx.fill_path(&path);
        if embolden > 0.0 {
            ctx.set_stroke(Stroke::new(embolden));
            ctx.stroke_path(&path);
        }
    }
}

impl fmt::Debug for TextFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextFont")
            .field("size", &self.size)
            .field("data", &self.data.as_ref().map(|d| (d.data.id(), d.index)))
            .finish()
    }
}

impl PartialEq for TextFont {
    fn eq(&self, other: &Self) -> bool {
        let same_face = match (&self.data, &other.data) {
            (Some(a), Some(b)) => a.data.id() == b.data.id() && a.index == b.index,
            (None, None) => true,
            _ => false,
        };
        same_face && self.size == other.size
    }
}

/// Appends glyph outlines to a path, flipping font-space Y to canvas-space Y.
struct GlyphPen<'a> {
    path: &'a mut BezPath,
    origin: Point,
}

impl GlyphPen<'_> {
    fn map(&self, x: f32, y: f32) -> Point {
        Point::new(self.origin.x + f64::from(x), self.origin.y - f64::from(y))
    }
}

impl OutlinePen for GlyphPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let c = self.map(x1, y1);
        let p = self.map(x, y);
        self.path.quad_to(c, p);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let c1 = self.map(x1, y1);
        let c2 = self.map(x2, y2);
        let p = self.map(x, y);
        self.path.curve_to(c1, c2, p);
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}
