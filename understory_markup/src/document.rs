// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editable markup document.

use hashbrown::HashSet;
use kurbo::{Point, Rect, Size, Vec2};
use tracing::{debug, trace, warn};
use understory_annotation::{Annotation, AnnotationId, AnnotationKind};
use understory_markup_geometry::clamp_to_canvas;
use understory_selection::{Selection, pick};

use crate::history::History;
use crate::{BaseImage, CropError, DocumentConfig, Scene, Snapshot};

/// Everything an undo step restores.
#[derive(Clone, Debug)]
struct Checkpoint {
    annotations: Vec<Annotation>,
    next_z: i64,
    selected: Vec<AnnotationId>,
    base: BaseImage,
    canvas_size: Size,
}

/// A base image plus the annotations drawn over it, with linear undo/redo.
///
/// All mutation goes through `Document` methods. Each mutating call that
/// changes anything records one undo step holding a full copy of the prior
/// state; calls that change nothing (unknown ids, empty collections) record
/// nothing. Selection changes are not undoable on their own, but every undo
/// step restores the selection that was current when it was recorded.
#[derive(Clone, Debug)]
pub struct Document {
    config: DocumentConfig,
    annotations: Vec<Annotation>,
    next_z: i64,
    selection: Selection<AnnotationId>,
    base: BaseImage,
    canvas_size: Size,
    history: History<Checkpoint>,
}

impl Document {
    /// Create a document over `base`, whose canvas spans `canvas_size` units.
    #[must_use]
    pub fn new(base: BaseImage, canvas_size: Size) -> Self {
        Self::with_config(base, canvas_size, DocumentConfig::default())
    }

    /// Create a document whose canvas matches the image's pixel size.
    #[must_use]
    pub fn from_image(base: BaseImage) -> Self {
        let size = base.size();
        Self::new(base, size)
    }

    /// Create a document with explicit configuration.
    #[must_use]
    pub fn with_config(base: BaseImage, canvas_size: Size, config: DocumentConfig) -> Self {
        Self {
            config,
            annotations: Vec::new(),
            next_z: 0,
            selection: Selection::new(),
            base,
            canvas_size,
            history: History::new(config.history_limit),
        }
    }

    // --- queries ---

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Canvas extent in canvas units.
    #[must_use]
    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// The raster under the annotations.
    #[must_use]
    pub fn base_image(&self) -> &BaseImage {
        &self.base
    }

    /// Annotations in insertion order.
    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Annotations in paint order.
    #[must_use]
    pub fn annotations_by_z(&self) -> Vec<&Annotation> {
        Scene::annotations_by_z(self)
    }

    /// Look up an annotation by id.
    #[must_use]
    pub fn annotation(&self, id: AnnotationId) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id() == id)
    }

    /// Ids of selected annotations; the primary (most recently picked) is
    /// available through [`primary_selection`](Self::primary_selection).
    #[must_use]
    pub fn selected_ids(&self) -> &[AnnotationId] {
        self.selection.items()
    }

    /// The most recently picked selected annotation.
    #[must_use]
    pub fn primary_selection(&self) -> Option<AnnotationId> {
        self.selection.primary().copied()
    }

    /// Whether `id` is selected.
    #[must_use]
    pub fn is_selected(&self, id: AnnotationId) -> bool {
        self.selection.contains(&id)
    }

    /// One more than the largest counter label present, starting from `1`.
    #[must_use]
    pub fn next_counter_label(&self) -> u32 {
        self.annotations
            .iter()
            .filter_map(|a| match a.kind() {
                AnnotationKind::Counter(c) => Some(c.label()),
                _ => None,
            })
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    /// An immutable copy for off-thread export.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(&self.annotations, self.base.clone(), self.canvas_size)
    }

    // --- history ---

    /// Whether [`undo`](Self::undo) would do anything.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.undo_depth() > 0
    }

    /// Whether [`redo`](Self::redo) would do anything.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.redo_depth() > 0
    }

    /// Same as [`can_undo`](Self::can_undo).
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.can_undo()
    }

    /// Number of undo steps available.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    /// Number of redo steps available.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// Revert the most recent step. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let current = self.checkpoint();
        match self.history.undo(current) {
            Ok(prior) => {
                self.restore(prior);
                debug!(undo = self.undo_depth(), redo = self.redo_depth(), "undo");
                true
            }
            Err(_) => false,
        }
    }

    /// Re-apply the most recently undone step. Returns `false` if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        let current = self.checkpoint();
        match self.history.redo(current) {
            Ok(next) => {
                self.restore(next);
                debug!(undo = self.undo_depth(), redo = self.redo_depth(), "redo");
                true
            }
            Err(_) => false,
        }
    }

    // --- mutations ---

    /// Append an annotation on top of everything else.
    ///
    /// Its `z_index` is overwritten with the next value of the document's
    /// counter. An annotation whose id is already present (a plain clone of a
    /// stored one) is given a fresh id. Returns the id it was stored under.
    pub fn add(&mut self, mut annotation: Annotation) -> AnnotationId {
        if self.index_of(annotation.id()).is_some() {
            annotation = annotation.duplicate();
        }
        self.record();
        let id = annotation.id();
        annotation.set_z_index(self.next_z);
        annotation.set_selected(false);
        self.next_z += 1;
        debug!(%id, kind = annotation.kind().name(), z = annotation.z_index(), "annotation added");
        self.annotations.push(annotation);
        id
    }

    /// Remove an annotation. Returns `false` (and records nothing) if `id` is unknown.
    pub fn remove(&mut self, id: AnnotationId) -> bool {
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        self.record();
        self.annotations.remove(idx);
        self.selection.remove(&id);
        debug!(%id, "annotation removed");
        true
    }

    /// Replace the stored annotation with the same id.
    ///
    /// Returns `false` (and records nothing) if no annotation has that id.
    pub fn update(&mut self, mut annotation: Annotation) -> bool {
        let id = annotation.id();
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        self.record();
        annotation.set_selected(self.selection.contains(&id));
        self.annotations[idx] = annotation;
        debug!(%id, "annotation updated");
        true
    }

    /// Remove every annotation. Returns `false` if there were none.
    pub fn clear(&mut self) -> bool {
        if self.annotations.is_empty() {
            return false;
        }
        self.record();
        let count = self.annotations.len();
        self.annotations.clear();
        self.selection.clear();
        debug!(count, "annotations cleared");
        true
    }

    /// Remove every selected annotation in one step. Returns how many were removed.
    pub fn remove_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        let doomed: HashSet<AnnotationId> = self.selection.iter().copied().collect();
        self.record();
        let before = self.annotations.len();
        self.annotations.retain(|a| !doomed.contains(&a.id()));
        self.selection.clear();
        let removed = before - self.annotations.len();
        debug!(removed, "selected annotations removed");
        removed
    }

    /// Give an annotation the next z value so it paints and picks above the rest.
    ///
    /// Returns `false` if `id` is unknown or already on top.
    pub fn bring_to_front(&mut self, id: AnnotationId) -> bool {
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        let z = self.annotations[idx].z_index();
        if self.annotations.iter().all(|a| a.id() == id || a.z_index() < z) {
            return false;
        }
        self.record();
        self.annotations[idx].set_z_index(self.next_z);
        self.next_z += 1;
        debug!(%id, z = self.next_z - 1, "brought to front");
        true
    }

    /// Insert a copy of `id` moved by `offset`, with a new id, on top.
    pub fn duplicate_annotation(&mut self, id: AnnotationId, offset: Vec2) -> Option<AnnotationId> {
        let mut copy = self.annotation(id)?.duplicate();
        copy.translate(offset);
        Some(self.add(copy))
    }

    /// Crop the canvas to `rect` (canvas units), clipped to the current canvas.
    ///
    /// On success the base image is cropped, the canvas shrinks to the clipped
    /// rectangle, every annotation moves by the negated rectangle origin, and
    /// the clipped rectangle is returned. On failure nothing changes.
    pub fn apply_crop(&mut self, rect: Rect) -> Result<Rect, CropError> {
        let clipped = clamp_to_canvas(rect, self.canvas_size);
        if !clipped.is_finite() || clipped.width() <= 0.0 || clipped.height() <= 0.0 {
            warn!(?rect, canvas = ?self.canvas_size, "crop rejected: outside canvas");
            return Err(CropError::OutsideCanvas);
        }
        let min = self.config.min_crop_extent;
        if !(clipped.width() >= min && clipped.height() >= min) {
            warn!(?clipped, min, "crop rejected: too small");
            return Err(CropError::TooSmall {
                width: clipped.width(),
                height: clipped.height(),
                min,
            });
        }

        self.record();
        self.base = self.base.crop_to(clipped, self.canvas_size);
        self.canvas_size = clipped.size();
        let shift = -clipped.origin().to_vec2();
        for annotation in &mut self.annotations {
            annotation.translate(shift);
        }
        debug!(?clipped, width = self.base.width(), height = self.base.height(), "cropped");
        Ok(clipped)
    }

    // --- selection ---

    /// Select the topmost annotation under `point`, replacing the selection.
    ///
    /// Clears the selection and returns `None` when nothing is hit.
    pub fn select_at(&mut self, point: Point) -> Option<AnnotationId> {
        let hit = pick::topmost_at(&self.annotations, point);
        trace!(?point, ?hit, "select at point");
        match hit {
            Some(id) => self.selection.select_only(id),
            None => self.selection.clear(),
        }
        self.sync_selection_flags();
        hit
    }

    /// Select every annotation whose transformed bounds intersect `rect`.
    ///
    /// Returns the ids now selected.
    pub fn select_in_rect(&mut self, rect: Rect) -> &[AnnotationId] {
        let hits = pick::intersecting(&self.annotations, rect);
        trace!(?rect, count = hits.len(), "select in rect");
        self.selection.replace_with(hits);
        self.sync_selection_flags();
        self.selection.items()
    }

    /// Flip selection of a single annotation. Returns `false` if `id` is unknown.
    pub fn toggle_selection(&mut self, id: AnnotationId) -> bool {
        if self.index_of(id).is_none() {
            return false;
        }
        self.selection.toggle(id);
        self.sync_selection_flags();
        true
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.sync_selection_flags();
    }

    // --- internals ---

    fn index_of(&self, id: AnnotationId) -> Option<usize> {
        self.annotations.iter().position(|a| a.id() == id)
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            annotations: self.annotations.clone(),
            next_z: self.next_z,
            selected: self.selection.items().to_vec(),
            base: self.base.clone(),
            canvas_size: self.canvas_size,
        }
    }

    fn record(&mut self) {
        let prior = self.checkpoint();
        self.history.record(prior);
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.annotations = checkpoint.annotations;
        self.next_z = checkpoint.next_z;
        self.base = checkpoint.base;
        self.canvas_size = checkpoint.canvas_size;

        let present: HashSet<AnnotationId> = self.annotations.iter().map(Annotation::id).collect();
        let kept = checkpoint.selected.into_iter().filter(|id| present.contains(id));
        self.selection.replace_with(kept);
        self.sync_selection_flags();
    }

    fn sync_selection_flags(&mut self) {
        for annotation in &mut self.annotations {
            let selected = self.selection.contains(&annotation.id());
            annotation.set_selected(selected);
        }
    }
}

impl Scene for Document {
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
