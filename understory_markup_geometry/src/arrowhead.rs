// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrowhead and curved-arrow construction.

use core::f64::consts::FRAC_PI_6;

use kurbo::{Point, Vec2};

/// Head length of an arrow with zero stroke width.
pub const BASE_HEAD_LENGTH: f64 = 10.0;

/// Angle between the arrow direction and each head wing.
pub const ARROW_HEAD_ANGLE: f64 = FRAC_PI_6;

/// Perpendicular offset of a curved arrow's control point, as a fraction of
/// the start→end distance.
pub const CURVE_OFFSET_RATIO: f64 = 0.2;

/// Head length for a given stroke width: `BASE_HEAD_LENGTH + 2 * stroke_width`.
#[must_use]
pub fn arrow_head_length(stroke_width: f64) -> f64 {
    BASE_HEAD_LENGTH + stroke_width * 2.0
}

/// The two wing points of an arrowhead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowWings {
    /// Wing rotated counter-clockwise from the shaft.
    pub left: Point,
    /// Wing rotated clockwise from the shaft.
    pub right: Point,
}

/// Wing points for a head at `tip`, for a shaft arriving from `from`.
///
/// Each wing sits `length` away from the tip, rotated by ±[`ARROW_HEAD_ANGLE`]
/// from the reversed shaft direction. If `from == tip` the shaft points along
/// +X.
#[must_use]
pub fn arrow_wings(tip: Point, from: Point, length: f64) -> ArrowWings {
    let shaft = tip - from;
    let angle = if shaft.hypot2() == 0.0 {
        0.0
    } else {
        shaft.atan2()
    };
    ArrowWings {
        left: tip - Vec2::from_angle(angle - ARROW_HEAD_ANGLE) * length,
        right: tip - Vec2::from_angle(angle + ARROW_HEAD_ANGLE) * length,
    }
}

/// Quadratic control point for a curved arrow from `start` to `end`.
///
/// The point sits on the perpendicular bisector, offset by
/// [`CURVE_OFFSET_RATIO`] of the segment length toward the left of the
/// start→end direction (in a y-down canvas this bows the curve upward for a
/// left-to-right arrow).
#[must_use]
pub fn curve_control_point(start: Point, end: Point) -> Point {
    let d = end - start;
    let perpendicular = Vec2::new(d.y, -d.x);
    start.midpoint(end) + perpendicular * CURVE_OFFSET_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn head_length_grows_with_stroke() {
        assert_eq!(arrow_head_length(0.0), BASE_HEAD_LENGTH);
        assert_eq!(arrow_head_length(4.0), BASE_HEAD_LENGTH + 8.0);
    }

    #[test]
    fn wings_are_symmetric_behind_the_tip() {
        let tip = Point::new(100.0, 0.0);
        let wings = arrow_wings(tip, Point::new(0.0, 0.0), 20.0);
        assert!(
            wings.left.x < tip.x && wings.right.x < tip.x,
            "wings trail the tip"
        );
        assert!(
            (wings.left.y + wings.right.y).abs() < 1e-9,
            "mirrored about the shaft"
        );
        assert!(
            ((wings.left - tip).hypot() - 20.0).abs() < 1e-9,
            "left at head length"
        );
        assert!(
            ((wings.right - tip).hypot() - 20.0).abs() < 1e-9,
            "right at head length"
        );
        // cos(30 degrees) = sqrt(3) / 2
        let expected_dx = 20.0 * 0.866_025_403_784_438_6;
        assert!(
            (tip.x - wings.left.x - expected_dx).abs() < 1e-9,
            "30 degree spread"
        );
    }

    #[test]
    fn control_point_is_offset_by_a_fifth_of_length() {
        let c = curve_control_point(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(close(c, Point::new(50.0, -20.0)), "got {c:?}");
    }
}
