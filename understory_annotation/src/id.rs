// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Annotation identifiers.

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque, process-unique identifier of an annotation.
///
/// Ids are handed out by [`AnnotationId::fresh`] from a global counter, so two
/// annotations created anywhere in the process never share an id. An id is
/// fixed for the lifetime of the annotation it was assigned to; cloning an
/// annotation for a history snapshot keeps the id, while
/// [`Annotation::duplicate`](crate::Annotation::duplicate) draws a new one.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnnotationId(u64);

impl AnnotationId {
    /// Allocate a new id, distinct from every id previously returned.
    #[must_use]
    pub fn fresh() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw value of this id.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnnotationId").field(&self.0).finish()
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
