// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounding-box helpers with closed-interval semantics.
//!
//! `kurbo::Rect::contains` is half-open, which is right for pixel coverage but
//! wrong for hit testing: a point exactly on the far edge of a padded box
//! should still hit. The helpers here treat every edge as inclusive.

use kurbo::{Point, Rect, Size};

/// Smallest rectangle containing every point, expanded by `padding` on all sides.
///
/// An empty point set yields [`Rect::ZERO`].
#[must_use]
pub fn union_bounds(points: &[Point], padding: f64) -> Rect {
    let Some((first, rest)) = points.split_first() else {
        return Rect::ZERO;
    };
    let seed = Rect::from_points(*first, *first);
    let tight = rest.iter().fold(seed, |acc, pt| acc.union_pt(*pt));
    tight.inflate(padding, padding)
}

/// Returns `true` if `pt` lies inside `rect` or on any of its edges.
///
/// `rect` is normalized first, so rectangles with negative extents behave the
/// same as their positive counterparts.
#[must_use]
pub fn contains_inclusive(rect: Rect, pt: Point) -> bool {
    let r = rect.abs();
    pt.x >= r.x0 && pt.x <= r.x1 && pt.y >= r.y0 && pt.y <= r.y1
}

/// Returns `true` if the closed rectangles `a` and `b` share at least one point.
#[must_use]
pub fn intersects(a: Rect, b: Rect) -> bool {
    let a = a.abs();
    let b = b.abs();
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Intersect `rect` with the canvas `[0, 0] .. size`.
///
/// The result is normalized and may have zero area when `rect` lies entirely
/// outside the canvas.
#[must_use]
pub fn clamp_to_canvas(rect: Rect, size: Size) -> Rect {
    let canvas = size.to_rect();
    let r = rect.abs();
    let x0 = r.x0.max(canvas.x0);
    let y0 = r.y0.max(canvas.y0);
    let x1 = r.x1.min(canvas.x1).max(x0);
    let y1 = r.y1.min(canvas.y1).max(y0);
    Rect::new(x0, y0, x1, y1)
}
