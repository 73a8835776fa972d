// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_annotation --heading-base-level=0

//! Understory Annotation: vector markup objects drawn over a raster image.
//!
//! An [`Annotation`] is a single piece of markup owned by a document: an
//! identity, an affine transform, a z-order slot, a transient selection flag,
//! and one of a closed set of [`AnnotationKind`] variants:
//!
//! - [`Arrow`]: straight or curved, with head and tail decorations.
//! - [`Shape`]: rectangle (optionally rounded), ellipse, or line, defined by a box.
//! - [`Text`]: multi-line label with optional background plate.
//! - [`Blur`]: a region blurred or pixelated on export, a translucent placeholder otherwise.
//! - [`Highlighter`]: freehand polyline drawn with a multiply blend.
//! - [`Counter`]: numbered badge.
//!
//! Every variant keeps its bounds in sync with its geometry: setters recompute
//! them, so there is no way to observe stale bounds.
//!
//! ## Hit testing
//!
//! [`Annotation::hit_test`] takes a point in canvas coordinates. Arrows,
//! highlighters, and counters test against their actual geometry; all other
//! variants accept any point within [`DEFAULT_HIT_TOLERANCE`] of their
//! transformed bounds.
//!
//! ```rust
//! use kurbo::Point;
//! use peniko::Color;
//! use understory_annotation::{Annotation, Arrow, Counter};
//!
//! let arrow = Annotation::new(Arrow::new(
//!     Point::new(50.0, 100.0),
//!     Point::new(200.0, 100.0),
//!     Color::BLACK,
//!     10.0,
//! ));
//! assert!(arrow.hit_test(Point::new(100.0, 100.0)));
//! assert!(!arrow.hit_test(Point::new(100.0, 200.0)));
//!
//! let badge = Annotation::new(Counter::new(1, Point::new(100.0, 100.0), Color::BLACK, 28.0));
//! assert!(badge.hit_test(Point::new(118.0, 100.0)));
//! ```
//!
//! ## Rendering
//!
//! [`Annotation::render`] draws into a `vello_cpu` [`RenderContext`] whose
//! output is `scale` pixels per canvas unit. Stroke widths are divided by
//! `scale` before drawing.

mod arrow;
mod blur;
mod counter;
mod font;
mod highlighter;
mod id;
mod shape;
mod style;
mod text;

pub use arrow::Arrow;
pub use blur::Blur;
pub use counter::Counter;
pub use font::{LineMetrics, TextFont};
pub use highlighter::{HIGHLIGHTER_ALPHA, Highlighter};
pub use id::AnnotationId;
pub use shape::{Shape, ShapeKind};
pub use style::{BlurKind, HeadStyle, LineStyle};
pub use text::Text;

use kurbo::{Affine, Point, Rect, Vec2};
use understory_markup_geometry::contains_inclusive;
use vello_cpu::RenderContext;

/// Outward slop applied to bounds by the default hit test.
pub const DEFAULT_HIT_TOLERANCE: f64 = 5.0;

/// Determinants smaller than this are treated as non-invertible.
const SINGULAR_EPSILON: f64 = 1e-12;

/// The variant-specific part of an [`Annotation`].
#[derive(Clone, Debug, PartialEq)]
pub enum AnnotationKind {
    /// See [`Arrow`].
    Arrow(Arrow),
    /// See [`Shape`].
    Shape(Shape),
    /// See [`Text`].
    Text(Text),
    /// See [`Blur`].
    Blur(Blur),
    /// See [`Highlighter`].
    Highlighter(Highlighter),
    /// See [`Counter`].
    Counter(Counter),
}

impl AnnotationKind {
    /// Untransformed bounds of the variant.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Arrow(a) => a.bounds(),
            Self::Shape(s) => s.bounds(),
            Self::Text(t) => t.bounds(),
            Self::Blur(b) => b.bounds(),
            Self::Highlighter(h) => h.bounds(),
            Self::Counter(c) => c.bounds(),
        }
    }

    /// A short lowercase name, used in log output.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Arrow(_) => "arrow",
            Self::Shape(_) => "shape",
            Self::Text(_) => "text",
            Self::Blur(_) => "blur",
            Self::Highlighter(_) => "highlighter",
            Self::Counter(_) => "counter",
        }
    }

    fn translate(&mut self, offset: Vec2) {
        match self {
            Self::Arrow(a) => a.translate(offset),
            Self::Shape(s) => s.translate(offset),
            Self::Text(t) => t.translate(offset),
            Self::Blur(b) => b.translate(offset),
            Self::Highlighter(h) => h.translate(offset),
            Self::Counter(c) => c.translate(offset),
        }
    }

    /// Geometry-accurate test in local coordinates, or `None` for the default rule.
    fn hit_test_local(&self, point: Point) -> Option<bool> {
        match self {
            Self::Arrow(a) => Some(a.hit_test_local(point)),
            Self::Highlighter(h) => Some(h.hit_test_local(point)),
            Self::Counter(c) => Some(c.hit_test_local(point)),
            Self::Shape(_) | Self::Text(_) | Self::Blur(_) => None,
        }
    }

    fn render(&self, ctx: &mut RenderContext, scale: f64) {
        match self {
            Self::Arrow(a) => a.render(ctx, scale),
            Self::Shape(s) => s.render(ctx, scale),
            Self::Text(t) => t.render(ctx, scale),
            Self::Blur(b) => b.render(ctx, scale),
            Self::Highlighter(h) => h.render(ctx, scale),
            Self::Counter(c) => c.render(ctx, scale),
        }
    }
}

macro_rules! impl_from_variant {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for AnnotationKind {
                fn from(value: $ty) -> Self {
                    Self::$ty(value)
                }
            }
        )*
    };
}

impl_from_variant!(Arrow, Shape, Text, Blur, Highlighter, Counter);

/// A single markup object: identity, placement, and variant data.
///
/// `z_index` is assigned by the owning document when the annotation is added;
/// a freshly constructed annotation has `z_index == 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    id: AnnotationId,
    transform: Affine,
    z_index: i64,
    selected: bool,
    kind: AnnotationKind,
}

impl Annotation {
    /// Wrap a variant with a fresh id and an identity transform.
    #[must_use]
    pub fn new(kind: impl Into<AnnotationKind>) -> Self {
        Self {
            id: AnnotationId::fresh(),
            transform: Affine::IDENTITY,
            z_index: 0,
            selected: false,
            kind: kind.into(),
        }
    }

    /// Builder-style transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Stable identity.
    #[must_use]
    pub fn id(&self) -> AnnotationId {
        self.id
    }

    /// Variant data.
    #[must_use]
    pub fn kind(&self) -> &AnnotationKind {
        &self.kind
    }

    /// Mutable variant data; bounds stay current through the variant setters.
    pub fn kind_mut(&mut self) -> &mut AnnotationKind {
        &mut self.kind
    }

    /// Untransformed bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.kind.bounds()
    }

    /// Bounds after applying [`transform`](Self::transform), as an axis-aligned box.
    #[must_use]
    pub fn transformed_bounds(&self) -> Rect {
        self.transform.transform_rect_bbox(self.bounds())
    }

    /// Render/hit-test transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Replace the transform.
    pub fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    /// Paint and pick order; higher is on top.
    #[must_use]
    pub fn z_index(&self) -> i64 {
        self.z_index
    }

    /// Set the paint and pick order.
    pub fn set_z_index(&mut self, z_index: i64) {
        self.z_index = z_index;
    }

    /// Transient UI selection flag.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Set the selection flag.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// The blur mask, if this is a [`Blur`].
    #[must_use]
    pub fn as_blur(&self) -> Option<&Blur> {
        match &self.kind {
            AnnotationKind::Blur(b) => Some(b),
            _ => None,
        }
    }

    /// Returns `true` for [`Blur`] annotations.
    #[must_use]
    pub fn is_blur(&self) -> bool {
        self.as_blur().is_some()
    }

    /// Whether `point` (canvas coordinates) picks this annotation.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> bool {
        if let Some(inverse) = self.inverse_transform()
            && let Some(hit) = self.kind.hit_test_local(inverse * point)
        {
            return hit;
        }
        let slop = self
            .transformed_bounds()
            .inflate(DEFAULT_HIT_TOLERANCE, DEFAULT_HIT_TOLERANCE);
        contains_inclusive(slop, point)
    }

    /// Copy with a newly allocated id; every other field is kept.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            id: AnnotationId::fresh(),
            ..self.clone()
        }
    }

    /// Move the annotation by `offset` in canvas coordinates.
    ///
    /// The variant geometry is moved, so [`bounds`](Self::bounds) shift along
    /// with it; the transform is left unchanged.
    pub fn translate(&mut self, offset: Vec2) {
        let local = match self.inverse_transform() {
            Some(inverse) => (inverse * offset.to_point()) - (inverse * Point::ORIGIN),
            None => offset,
        };
        self.kind.translate(local);
    }

    /// Draw into `ctx`, whose output has `scale` pixels per canvas unit.
    ///
    /// Replaces the context's current transform.
    pub fn render(&self, ctx: &mut RenderContext, scale: f64) {
        ctx.set_transform(Affine::scale(scale) * self.transform);
        self.kind.render(ctx, scale);
    }

    fn inverse_transform(&self) -> Option<Affine> {
        if self.transform == Affine::IDENTITY {
            return Some(Affine::IDENTITY);
        }
        (self.transform.determinant().abs() > SINGULAR_EPSILON).then(|| self.transform.inverse())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::Color;

    #[test]
    fn default_rule_inflates_bounds() {
        let shape = Annotation::new(Shape::rectangle(
            Rect::new(10.0, 10.0, 50.0, 50.0),
            Color::BLACK,
            2.0,
        ));
        assert!(shape.hit_test(Point::new(30.0, 30.0)));
        assert!(
            shape.hit_test(Point::new(55.0, 30.0)),
            "slop edge is inclusive"
        );
        assert!(!shape.hit_test(Point::new(55.5, 30.0)));
    }

    #[test]
    fn transform_applies_to_hit_and_bounds() {
        let shape = Annotation::new(Shape::rectangle(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Color::BLACK,
            1.0,
        ))
        .with_transform(Affine::translate((100.0, 0.0)));
        assert_eq!(
            shape.transformed_bounds(),
            Rect::new(100.0, 0.0, 110.0, 10.0)
        );
        assert!(shape.hit_test(Point::new(105.0, 5.0)));
        assert!(!shape.hit_test(Point::new(5.0, 5.0)));

        let badge = Annotation::new(Counter::new(1, Point::ZERO, Color::BLACK, 20.0))
            .with_transform(Affine::translate((50.0, 50.0)));
        assert!(
            badge.hit_test(Point::new(60.0, 50.0)),
            "accurate test runs in local space"
        );
        assert!(!badge.hit_test(Point::ZERO));
    }

    #[test]
    fn translate_respects_scaled_transform() {
        let mut shape = Annotation::new(Shape::rectangle(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Color::BLACK,
            1.0,
        ))
        .with_transform(Affine::scale(2.0));
        shape.translate(Vec2::new(20.0, 0.0));
        assert_eq!(shape.bounds(), Rect::new(10.0, 0.0, 20.0, 10.0));
        assert_eq!(shape.transformed_bounds(), Rect::new(20.0, 0.0, 40.0, 20.0));
    }

    #[test]
    fn degenerate_transform_uses_default_rule() {
        let badge = Annotation::new(Counter::new(1, Point::new(10.0, 10.0), Color::BLACK, 10.0))
            .with_transform(Affine::scale(0.0));
        assert!(badge.hit_test(Point::ZERO));
    }

    #[test]
    fn blur_accessors() {
        let blur = Annotation::new(Blur::new(
            Rect::new(0.0, 0.0, 5.0, 5.0),
            BlurKind::Pixelate,
            0.2,
        ));
        assert!(blur.is_blur());
        assert_eq!(blur.as_blur().map(Blur::kind), Some(BlurKind::Pixelate));
        assert_eq!(blur.kind().name(), "blur");
    }
}
