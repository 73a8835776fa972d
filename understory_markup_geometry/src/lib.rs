// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_markup_geometry --heading-base-level=0

//! Understory Markup Geometry: the stateless geometry kernel behind image markup.
//!
//! Every function here is pure: no allocation beyond what the caller hands in,
//! no interior state, and no knowledge of annotations or documents. Higher
//! layers (`understory_annotation`, `understory_markup`) compose these helpers
//! into bounds computation and hit testing.
//!
//! The kernel covers three areas:
//!
//! - **Segments**: [`distance_point_to_segment`] and [`StrokedSegment`], the
//!   basis for every stroke and path hit test.
//! - **Bounds**: [`union_bounds`] for padded multi-point boxes, plus small
//!   rectangle helpers ([`contains_inclusive`], [`intersects`],
//!   [`clamp_to_canvas`]) with the closed-interval semantics hit testing needs.
//! - **Arrowheads**: [`arrow_head_length`], [`arrow_wings`], and
//!   [`curve_control_point`] for straight and curved arrows.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_markup_geometry::{distance_point_to_segment, union_bounds};
//!
//! let d = distance_point_to_segment(
//!     Point::new(5.0, 3.0),
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//! );
//! assert_eq!(d, 3.0);
//!
//! let bounds = union_bounds(&[Point::new(50.0, 100.0), Point::new(200.0, 100.0)], 2.0);
//! assert_eq!(bounds.x0, 48.0);
//! assert_eq!(bounds.x1, 202.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod arrowhead;
mod bounds;
mod segment;

pub use arrowhead::{
    ARROW_HEAD_ANGLE, ArrowWings, BASE_HEAD_LENGTH, CURVE_OFFSET_RATIO, arrow_head_length,
    arrow_wings, curve_control_point,
};
pub use bounds::{clamp_to_canvas, contains_inclusive, intersects, union_bounds};
pub use segment::{StrokedSegment, distance_point_to_segment};
