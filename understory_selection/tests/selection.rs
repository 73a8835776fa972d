// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas-style selection flows: picks and marquees feeding a `Selection`.

use kurbo::{Point, Rect};
use understory_selection::{Pickable, Selection, pick};

#[derive(Debug)]
struct Sticker {
    id: u32,
    z: i64,
    rect: Rect,
}

impl Pickable for Sticker {
    type Key = u32;

    fn pick_key(&self) -> u32 {
        self.id
    }

    fn pick_depth(&self) -> i64 {
        self.z
    }

    fn pick_bounds(&self) -> Rect {
        self.rect
    }

    fn pick_hit(&self, pt: Point) -> bool {
        self.rect.contains(pt)
    }
}

fn sticker(id: u32, z: i64, rect: Rect) -> Sticker {
    Sticker { id, z, rect }
}

fn board() -> Vec<Sticker> {
    vec![
        sticker(10, 3, Rect::new(0.0, 0.0, 40.0, 40.0)),
        sticker(20, 1, Rect::new(20.0, 20.0, 60.0, 60.0)),
        sticker(30, 2, Rect::new(100.0, 0.0, 140.0, 40.0)),
    ]
}

#[test]
fn fresh_selection_is_empty_at_revision_zero() {
    let sel = Selection::<u32>::new();
    assert!(sel.is_empty());
    assert_eq!(sel.primary(), None);
    assert_eq!(sel.revision(), 0);
}

#[test]
fn click_selects_topmost_and_miss_clears() {
    let items = board();
    let mut sel = Selection::new();

    let hit = pick::topmost_at(&items, Point::new(30.0, 30.0));
    assert_eq!(hit, Some(10), "z 3 beats z 1 in the overlap");
    if let Some(id) = hit {
        sel.select_only(id);
    }
    assert_eq!(sel.items(), &[10]);
    assert_eq!(sel.revision(), 1);

    // Clicking the same item again changes nothing.
    sel.select_only(10);
    assert_eq!(sel.revision(), 1);

    assert_eq!(pick::topmost_at(&items, Point::new(80.0, 80.0)), None);
    sel.clear();
    assert!(sel.is_empty());
    assert_eq!(sel.revision(), 2);
}

#[test]
fn marquee_replaces_selection_in_collection_order() {
    let items = board();
    let mut sel = Selection::new();
    sel.select_only(30);

    sel.replace_with(pick::intersecting(&items, Rect::new(35.0, 35.0, 45.0, 45.0)));
    assert_eq!(sel.items(), &[10, 20]);
    assert_eq!(sel.primary(), Some(&10));

    let rev = sel.revision();
    sel.replace_with(pick::intersecting(&items, Rect::new(35.0, 35.0, 45.0, 45.0)));
    assert_eq!(sel.revision(), rev, "same marquee result does not bump");

    sel.replace_with(pick::intersecting(&items, Rect::new(300.0, 300.0, 310.0, 310.0)));
    assert!(sel.is_empty());
}

#[test]
fn marquee_touching_an_edge_counts() {
    let items = board();
    let keys = pick::intersecting(&items, Rect::new(140.0, 40.0, 150.0, 50.0));
    assert_eq!(keys, vec![30]);
}

#[test]
fn modifier_click_toggles_membership() {
    let mut sel = Selection::new();
    sel.replace_with([10, 20]);

    sel.toggle(30);
    assert_eq!(sel.items(), &[10, 20, 30]);
    assert_eq!(sel.primary(), Some(&30));

    sel.toggle(10);
    assert_eq!(sel.items(), &[20, 30]);
    assert_eq!(
        sel.primary(),
        Some(&30),
        "primary survives removal of an earlier key"
    );

    sel.toggle(30);
    assert_eq!(sel.items(), &[20]);
    assert_eq!(sel.primary(), None);
}

#[test]
fn deleting_items_prunes_the_selection() {
    let mut items = board();
    let mut sel = Selection::new();
    sel.replace_with([10, 20, 30]);
    sel.add(20);

    items.retain(|s| s.id != 10);
    sel.retain(|id| items.iter().any(|s| s.id == *id));
    assert_eq!(sel.items(), &[20, 30]);
    assert_eq!(sel.primary(), Some(&20));

    let rev = sel.revision();
    sel.remove(&99);
    assert_eq!(sel.revision(), rev, "removing an unselected key is a no-op");
}
