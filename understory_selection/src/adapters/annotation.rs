// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for Understory Annotation.
//!
//! ## Feature
//!
//! Enable with `annotation`.
//!
//! Annotations pick with their own [`Annotation::hit_test`], stack by
//! `z_index`, and use their transformed bounds for marquee queries.

use kurbo::{Point, Rect};
use understory_annotation::{Annotation, AnnotationId};

use crate::Pickable;

impl Pickable for Annotation {
    type Key = AnnotationId;

    fn pick_key(&self) -> AnnotationId {
        self.id()
    }

    fn pick_depth(&self) -> i64 {
        self.z_index()
    }

    fn pick_bounds(&self) -> Rect {
        self.transformed_bounds()
    }

    fn pick_hit(&self, pt: Point) -> bool {
        self.hit_test(pt)
    }
}
