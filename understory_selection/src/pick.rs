// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-ordered picking over arbitrary item collections.
//!
//! Items describe themselves through [`Pickable`]; the functions here never
//! sort or store them, so callers can pass whatever collection they own.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use understory_markup_geometry::intersects;

/// Something that can be picked by pointer or marquee.
pub trait Pickable {
    /// Identity reported back to the caller.
    type Key;

    /// Stable key of this item.
    fn pick_key(&self) -> Self::Key;

    /// Stacking depth; higher values are on top.
    fn pick_depth(&self) -> i64;

    /// Box used for marquee intersection, in the same space as query points.
    fn pick_bounds(&self) -> Rect;

    /// Whether `pt` picks this item.
    fn pick_hit(&self, pt: Point) -> bool;
}

/// The key of the topmost item hit by `pt`.
///
/// Among items at equal depth, the one that comes later in iteration order wins,
/// matching a stable back-to-front paint.
pub fn topmost_at<'a, P, I>(items: I, pt: Point) -> Option<P::Key>
where
    P: Pickable + 'a,
    I: IntoIterator<Item = &'a P>,
{
    let mut best: Option<&P> = None;
    for item in items {
        if best.is_some_and(|b| item.pick_depth() < b.pick_depth()) {
            continue;
        }
        if item.pick_hit(pt) {
            best = Some(item);
        }
    }
    best.map(Pickable::pick_key)
}

/// Keys of every item whose bounds intersect `rect` (edges inclusive), in iteration order.
pub fn intersecting<'a, P, I>(items: I, rect: Rect) -> Vec<P::Key>
where
    P: Pickable + 'a,
    I: IntoIterator<Item = &'a P>,
{
    items
        .into_iter()
        .filter(|item| intersects(item.pick_bounds(), rect))
        .map(Pickable::pick_key)
        .collect()
}
