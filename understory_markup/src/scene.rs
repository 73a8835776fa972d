// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only views of composable content.

use std::sync::Arc;

use kurbo::Size;
use understory_annotation::Annotation;

use crate::BaseImage;

/// Everything a compositor needs: canvas size, base pixels, and annotations.
pub trait Scene {
    /// Canvas extent in canvas units.
    fn canvas_size(&self) -> Size;

    /// The raster under the annotations.
    fn base_image(&self) -> &BaseImage;

    /// Annotations in insertion order.
    fn annotations(&self) -> &[Annotation];

    /// Annotations in paint order: ascending `z_index`, insertion order for ties.
    fn annotations_by_z(&self) -> Vec<&Annotation> {
        let mut ordered: Vec<&Annotation> = self.annotations().iter().collect();
        ordered.sort_by_key(|a| a.z_index());
        ordered
    }
}

/// An immutable copy of a document's composable state.
///
/// Snapshots are `Send + Sync` and share pixel buffers with the document they
/// came from, so taking one costs a clone of the annotation list only.
#[derive(Clone, Debug)]
pub struct Snapshot {
    annotations: Arc<[Annotation]>,
    base: BaseImage,
    canvas_size: Size,
}

impl Snapshot {
    pub(crate) fn new(annotations: &[Annotation], base: BaseImage, canvas_size: Size) -> Self {
        Self {
            annotations: annotations.into(),
            base,
            canvas_size,
        }
    }
}

impl Scene for Snapshot {
    fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    fn base_image(&self) -> &BaseImage {
        &self.base
    }

    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}
