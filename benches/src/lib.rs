// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the markup benchmarks.

use image::{Rgba, RgbaImage};
use kurbo::{Point, Rect};
use peniko::Color;
use understory_annotation::{
    Annotation, Arrow, Blur, BlurKind, Counter, Highlighter, Shape, Text, TextFont,
};
use understory_markup::{BaseImage, Document};

/// Deterministic pseudo-random numbers so runs are comparable.
#[derive(Clone, Debug)]
pub struct Lcg(u64);

impl Lcg {
    /// Seeded generator.
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Next 32 random bits.
    pub fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// Uniform value in `[0, upper)`.
    pub fn next_f64(&mut self, upper: f64) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX) * upper
    }

    fn point(&mut self, w: f64, h: f64) -> Point {
        Point::new(self.next_f64(w), self.next_f64(h))
    }
}

/// A gradient base image.
pub fn base_image(width: u32, height: u32) -> BaseImage {
    BaseImage::new(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 96, 255])
    }))
}

/// A document with `count` annotations cycling through every variant.
pub fn document(width: u32, height: u32, count: usize, seed: u64) -> Document {
    let mut rng = Lcg::new(seed);
    let (w, h) = (f64::from(width), f64::from(height));
    let mut doc = Document::from_image(base_image(width, height));
    for i in 0..count {
        let a = rng.point(w, h);
        let b = rng.point(w, h);
        let annotation = match i % 6 {
            0 => Annotation::new(Arrow::new(a, b, Color::BLACK, 4.0)),
            1 => Annotation::new(Shape::rectangle(Rect::from_points(a, b), Color::BLACK, 2.0)),
            2 => Annotation::new(Text::new(
                "label",
                a,
                TextFont::fallback(16.0),
                Color::BLACK,
            )),
            3 => Annotation::new(Blur::new(
                Rect::from_center_size(a, (40.0, 30.0)),
                BlurKind::Gaussian,
                0.5,
            )),
            4 => Annotation::new(Highlighter::new(
                (0..16).map(|_| rng.point(w, h)).collect(),
                Color::from_rgba8(255, 230, 0, 255),
                12.0,
            )),
            _ => Annotation::new(Counter::new(i as u32, a, Color::BLACK, 24.0)),
        };
        doc.add(annotation);
    }
    doc
}
