// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment distance and stroked-segment hit helpers.

use kurbo::Point;

/// Euclidean distance from `p` to the closest point on the segment `a`–`b`.
///
/// When `a == b` the segment is degenerate and the distance to that single
/// point is returned. Otherwise `p` is projected onto the infinite line through
/// `a` and `b`, the projection parameter is clamped to `[0, 1]`, and the
/// distance to the clamped point is returned.
#[must_use]
pub fn distance_point_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.hypot2();
    if len_sq == 0.0 {
        return (p - a).hypot();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    let closest = a + ab * t;
    (p - closest).hypot()
}

/// A straight centerline segment paired with a hit tolerance.
///
/// Unlike a rendered stroke, the tolerance here is the full accepted distance
/// from the centerline; callers fold stroke half-width and slop into it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokedSegment {
    /// Segment start.
    pub start: Point,
    /// Segment end.
    pub end: Point,
    /// Maximum accepted distance from the centerline.
    pub tolerance: f64,
}

impl StrokedSegment {
    /// Create a segment with the given hit tolerance.
    #[must_use]
    pub const fn new(start: Point, end: Point, tolerance: f64) -> Self {
        Self {
            start,
            end,
            tolerance,
        }
    }

    /// Distance from `pt` to the centerline.
    #[must_use]
    pub fn distance(&self, pt: Point) -> f64 {
        distance_point_to_segment(pt, self.start, self.end)
    }

    /// Returns `true` if `pt` lies within the tolerance of the centerline.
    #[must_use]
    pub fn hit(&self, pt: Point) -> bool {
        self.distance(pt) <= self.tolerance
    }
}
