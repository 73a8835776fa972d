// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Blur and pixelate masks.

use kurbo::{Circle, Rect, Shape, Vec2};
use peniko::Color;
use vello_cpu::RenderContext;

use crate::style::{BlurKind, LineStyle, effective_scale, scaled_stroke};

const OVERLAY: Color = Color::from_rgba8(128, 128, 128, 96);
const BORDER: Color = Color::from_rgba8(64, 64, 64, 200);
const ICON: Color = Color::from_rgba8(255, 255, 255, 200);

/// Icon edge length in output pixels, before being capped by the region size.
const ICON_SIZE: f64 = 16.0;

/// A rectangular region whose pixels are blurred or pixelated on export.
///
/// In the interactive preview only a translucent overlay, a dashed border, and
/// a small icon are drawn; the base pixels are never touched.
#[derive(Clone, Debug, PartialEq)]
pub struct Blur {
    region: Rect,
    kind: BlurKind,
    intensity: f64,
}

impl Blur {
    /// Create a mask. `intensity` is clamped to `[0, 1]`; NaN becomes `0`.
    #[must_use]
    pub fn new(region: Rect, kind: BlurKind, intensity: f64) -> Self {
        Self {
            region: region.abs(),
            kind,
            intensity: clamp_intensity(intensity),
        }
    }

    /// The masked region.
    #[must_use]
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Filter applied on export.
    #[must_use]
    pub fn kind(&self) -> BlurKind {
        self.kind
    }

    /// Filter strength in `[0, 1]`.
    #[must_use]
    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Bounds are the region as given.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.region
    }

    /// Replace the masked region.
    pub fn set_region(&mut self, region: Rect) {
        self.region = region.abs();
    }

    /// Switch between Gaussian blur and pixelation.
    pub fn set_kind(&mut self, kind: BlurKind) {
        self.kind = kind;
    }

    /// Change strength; clamped like [`Blur::new`].
    pub fn set_intensity(&mut self, intensity: f64) {
        self.intensity = clamp_intensity(intensity);
    }

    pub(crate) fn translate(&mut self, offset: Vec2) {
        self.region = self.region + offset;
    }

    pub(crate) fn render(&self, ctx: &mut RenderContext, scale: f64) {
        ctx.set_paint(OVERLAY);
        ctx.fill_rect(&self.region);

        ctx.set_paint(BORDER);
        ctx.set_stroke(scaled_stroke(1.0, scale, LineStyle::Dashed));
        ctx.stroke_rect(&self.region);

        let side = (ICON_SIZE / effective_scale(scale))
            .min(self.region.width())
            .min(self.region.height());
        if side <= 0.0 {
            return;
        }
        let icon = Rect::from_center_size(self.region.center(), (side, side));
        ctx.set_paint(ICON);
        match self.kind {
            BlurKind::Gaussian => {
                let center = icon.center();
                for radius in [side / 2.0, side / 4.0] {
                    ctx.set_stroke(scaled_stroke(1.5, scale, LineStyle::Solid));
                    ctx.stroke_path(&Circle::new(center, radius).to_path(0.1));
                }
            }
            BlurKind::Pixelate => {
                let cell = side / 2.0;
                for (col, row) in [(0.0, 0.0), (1.0, 1.0)] {
                    let origin = icon.origin() + Vec2::new(col * cell, row * cell);
                    ctx.fill_rect(&Rect::from_origin_size(origin, (cell, cell)));
                }
            }
        }
    }
}

fn clamp_intensity(intensity: f64) -> f64 {
    if intensity.is_nan() {
        0.0
    } else {
        intensity.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_is_clamped() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(Blur::new(r, BlurKind::Gaussian, 3.0).intensity(), 1.0);
        assert_eq!(Blur::new(r, BlurKind::Gaussian, -1.0).intensity(), 0.0);
        assert_eq!(Blur::new(r, BlurKind::Pixelate, f64::NAN).intensity(), 0.0);

        let mut b = Blur::new(r, BlurKind::Pixelate, 0.5);
        b.set_intensity(7.0);
        assert_eq!(b.intensity(), 1.0);
    }

    #[test]
    fn bounds_are_the_region() {
        let b = Blur::new(Rect::new(30.0, 40.0, 10.0, 20.0), BlurKind::Gaussian, 0.5);
        assert_eq!(
            b.bounds(),
            Rect::new(10.0, 20.0, 30.0, 40.0),
            "region is normalized"
        );
    }
}
