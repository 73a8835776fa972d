// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-variant behavior of `Annotation`.

use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use understory_annotation::{
    Annotation, AnnotationKind, Arrow, Blur, BlurKind, Counter, HeadStyle, Highlighter, Shape,
    ShapeKind, Text, TextFont,
};

fn every_variant() -> Vec<Annotation> {
    vec![
        Annotation::new(
            Arrow::new(
                Point::new(50.0, 100.0),
                Point::new(200.0, 100.0),
                Color::BLACK,
                10.0,
            )
            .with_tail(HeadStyle::Circle)
            .with_curve(true),
        ),
        Annotation::new(
            Shape::new(
                ShapeKind::Rectangle { corner_radius: 6.0 },
                Rect::new(10.0, 10.0, 80.0, 60.0),
                Color::BLACK,
                3.0,
            )
            .with_fill(Color::WHITE),
        ),
        Annotation::new(Text::new(
            "hello\nworld",
            Point::new(5.0, 5.0),
            TextFont::fallback(14.0),
            Color::BLACK,
        )),
        Annotation::new(Blur::new(
            Rect::new(0.0, 0.0, 40.0, 40.0),
            BlurKind::Gaussian,
            0.5,
        )),
        Annotation::new(Highlighter::new(
            vec![Point::new(50.0, 100.0), Point::new(200.0, 100.0)],
            Color::from_rgba8(255, 240, 0, 255),
            16.0,
        )),
        Annotation::new(Counter::new(
            4,
            Point::new(100.0, 100.0),
            Color::from_rgba8(220, 30, 30, 255),
            28.0,
        )),
    ]
}

#[test]
fn arrow_hits_near_shaft_only() {
    let arrow = Annotation::new(Arrow::new(
        Point::new(50.0, 100.0),
        Point::new(200.0, 100.0),
        Color::BLACK,
        10.0,
    ));
    assert!(arrow.hit_test(Point::new(100.0, 100.0)));
    assert!(!arrow.hit_test(Point::new(100.0, 200.0)));
}

#[test]
fn counter_hits_radially() {
    let badge = Annotation::new(Counter::new(
        1,
        Point::new(100.0, 100.0),
        Color::BLACK,
        28.0,
    ));
    assert!(
        badge.hit_test(Point::new(118.0, 100.0)),
        "within radius plus slop"
    );
    assert!(!badge.hit_test(Point::new(200.0, 200.0)));
    // Inside the bounding square's corner but outside the circle.
    assert!(!badge.hit_test(Point::new(114.0, 114.0)));
}

#[test]
fn highlighter_bounds_cover_every_point() {
    let stroke = Annotation::new(Highlighter::new(
        vec![Point::new(50.0, 100.0), Point::new(200.0, 100.0)],
        Color::BLACK,
        8.0,
    ));
    let b = stroke.bounds();
    assert!(b.x0 <= 50.0 && b.x1 >= 200.0, "bounds were {b:?}");
}

#[test]
fn duplicate_draws_new_id_and_keeps_fields() {
    for (i, original) in every_variant().into_iter().enumerate() {
        let mut original = original;
        original.set_z_index(i as i64 + 3);
        let copy = original.duplicate();
        assert_ne!(copy.id(), original.id(), "variant {i} kept its id");
        assert_eq!(copy.kind(), original.kind(), "variant {i} changed data");
        assert_eq!(copy.z_index(), original.z_index());
        assert_eq!(copy.transform(), original.transform());
        assert_eq!(copy.bounds(), original.bounds());
    }
}

#[test]
fn clone_keeps_identity() {
    for original in every_variant() {
        assert_eq!(original.clone(), original, "snapshot clones compare equal");
    }
}

#[test]
fn translate_moves_bounds_for_every_variant() {
    let offset = Vec2::new(-7.0, 12.0);
    for mut a in every_variant() {
        let before = a.bounds();
        a.translate(offset);
        let after = a.bounds();
        assert!(
            (after.x0 - (before.x0 + offset.x)).abs() < 1e-9
                && (after.y1 - (before.y1 + offset.y)).abs() < 1e-9,
            "{} bounds moved from {before:?} to {after:?}",
            a.kind().name()
        );
    }
}

#[test]
fn setters_keep_bounds_current() {
    let mut a = Annotation::new(Arrow::new(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Color::BLACK,
        2.0,
    ));
    let before = a.bounds();
    if let AnnotationKind::Arrow(arrow) = a.kind_mut() {
        arrow.set_stroke_width(30.0);
    }
    assert_eq!(a.bounds().union(before), a.bounds());
    assert!(
        a.bounds().width() > before.width(),
        "padding grows with stroke width"
    );
}
