// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_selection --heading-base-level=0

//! Understory Selection: selection bookkeeping and z-ordered picking.
//!
//! This crate covers the two halves of "what is selected on the canvas":
//!
//! - [`Selection`], a small container tracking a set of selected keys, an
//!   optional **primary** key (the most recently picked item), and a
//!   **revision** counter that bumps only when the selection actually changes.
//! - The [`pick`] module, which turns a pointer position or a marquee
//!   rectangle into keys, given any collection of [`Pickable`] items.
//!
//! Keys are stored in a `Vec<K>` with uniqueness enforced by equality, so any
//! `PartialEq` id type works without hashing or ordering.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_selection::Selection;
//!
//! let mut selection = Selection::<u32>::new();
//!
//! // Click: replace selection with a single item.
//! selection.select_only(10);
//! assert_eq!(selection.primary(), Some(&10));
//!
//! // Modifier-click: toggle a single item.
//! selection.toggle(10);
//! assert!(selection.is_empty());
//!
//! // Marquee: replace the selection with a batch.
//! selection.replace_with([1, 2, 3]);
//! assert_eq!(selection.len(), 3);
//!
//! // Items deleted elsewhere are pruned.
//! selection.retain(|k| *k != 2);
//! assert_eq!(selection.items(), &[1, 3]);
//! ```
//!
//! ## Picking
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_selection::{Pickable, pick};
//!
//! struct Sticker {
//!     id: u32,
//!     z: i64,
//!     rect: Rect,
//! }
//!
//! impl Pickable for Sticker {
//!     type Key = u32;
//!     fn pick_key(&self) -> u32 { self.id }
//!     fn pick_depth(&self) -> i64 { self.z }
//!     fn pick_bounds(&self) -> Rect { self.rect }
//!     fn pick_hit(&self, pt: Point) -> bool { self.rect.contains(pt) }
//! }
//!
//! let stickers = [
//!     Sticker { id: 1, z: 5, rect: Rect::new(0.0, 0.0, 50.0, 50.0) },
//!     Sticker { id: 2, z: 9, rect: Rect::new(25.0, 25.0, 75.0, 75.0) },
//! ];
//! assert_eq!(pick::topmost_at(&stickers, Point::new(30.0, 30.0)), Some(2));
//! assert_eq!(pick::intersecting(&stickers, Rect::new(0.0, 0.0, 10.0, 10.0)), vec![1]);
//! ```
//!
//! ## Adapters
//!
//! With the `annotation` feature, [`adapters`] implements [`Pickable`] for
//! `understory_annotation::Annotation`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod adapters;
pub mod pick;

pub use pick::Pickable;

use alloc::vec::Vec;

/// A set of selected keys plus a primary key and a revision.
#[derive(Clone, Debug, Default)]
pub struct Selection<T> {
    items: Vec<T>,
    primary: Option<usize>,
    revision: u64,
}

impl<T> Selection<T> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            primary: None,
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Selected keys, in the order they were added.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Iterator over the selected keys.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The primary key, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&T> {
        self.primary.and_then(|idx| self.items.get(idx))
    }

    /// Counter that increases whenever the contents or primary change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        if self.items.is_empty() && self.primary.is_none() {
            return;
        }
        self.items.clear();
        self.primary = None;
        self.bump_revision();
    }

    /// Keep only the keys for which `keep` returns `true`.
    ///
    /// The primary is dropped if its key is removed.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        let primary = self.primary;
        let mut idx = 0;
        let mut kept_ahead_of_primary = 0;
        let mut primary_kept = false;
        self.items.retain(|key| {
            let kept = keep(key);
            match primary {
                Some(p) if idx < p && kept => kept_ahead_of_primary += 1,
                Some(p) if idx == p => primary_kept = kept,
                _ => {}
            }
            idx += 1;
            kept
        });
        if self.items.len() == before {
            return;
        }
        self.primary = primary
            .filter(|_| primary_kept)
            .map(|_| kept_ahead_of_primary);
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> Selection<T>
where
    T: PartialEq,
{
    /// Returns `true` if `key` is selected.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.position_of(key).is_some()
    }

    /// Replace the selection with a single key, which becomes primary.
    pub fn select_only(&mut self, key: T) {
        if self.items.len() == 1 && self.items.first() == Some(&key) && self.primary == Some(0) {
            return;
        }
        self.items.clear();
        self.items.push(key);
        self.primary = Some(0);
        self.bump_revision();
    }

    /// Replace the selection with a batch of keys; duplicates are ignored.
    ///
    /// The first key becomes primary.
    pub fn replace_with<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut new_items: Vec<T> = Vec::new();
        for key in keys {
            if !new_items.contains(&key) {
                new_items.push(key);
            }
        }
        let new_primary = (!new_items.is_empty()).then_some(0);
        if new_items == self.items && new_primary == self.primary {
            return;
        }
        self.items = new_items;
        self.primary = new_primary;
        self.bump_revision();
    }

    /// Add a key without touching the others; it becomes primary.
    pub fn add(&mut self, key: T) {
        let idx = match self.position_of(&key) {
            Some(idx) => idx,
            None => {
                self.items.push(key);
                self.items.len() - 1
            }
        };
        if self.primary == Some(idx) {
            return;
        }
        self.primary = Some(idx);
        self.bump_revision();
    }

    /// Deselect a single key; no-op if it is not selected.
    pub fn remove(&mut self, key: &T) {
        let Some(idx) = self.position_of(key) else {
            return;
        };
        self.items.remove(idx);
        self.primary = match self.primary {
            Some(p) if p == idx => None,
            Some(p) if p > idx => Some(p - 1),
            other => other,
        };
        self.bump_revision();
    }

    /// Flip membership of a single key without touching the others.
    pub fn toggle(&mut self, key: T) {
        if self.contains(&key) {
            self.remove(&key);
        } else {
            self.add(key);
        }
    }

    fn position_of(&self, key: &T) -> Option<usize> {
        self.items.iter().position(|k| k == key)
    }
}

#[cfg(test)]
mod tests {
    use super::Selection;

    #[test]
    fn retain_reindexes_primary() {
        let mut sel = Selection::new();
        sel.replace_with([1, 2, 3]);
        sel.add(3);
        assert_eq!(sel.primary(), Some(&3));

        sel.retain(|k| *k != 1);
        assert_eq!(sel.items(), &[2, 3]);
        assert_eq!(sel.primary(), Some(&3), "primary follows its key");

        sel.retain(|k| *k != 3);
        assert_eq!(sel.primary(), None);
    }

    #[test]
    fn retain_without_removal_keeps_revision() {
        let mut sel = Selection::new();
        sel.replace_with([1, 2]);
        let rev = sel.revision();
        sel.retain(|_| true);
        assert_eq!(sel.revision(), rev);
    }
}
