// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Destructive blur and pixelate filters over rendered pixels.

use image::RgbaImage;
use image::imageops::{self, FilterType};
use kurbo::Rect;
use understory_annotation::BlurKind;

/// A pixel-aligned region, clipped to an image.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct PixelRegion {
    pub(crate) x: u32,
    pub(crate) y: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl PixelRegion {
    /// The smallest pixel box covering `rect` (already in pixels), clipped to `width`×`height`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "coordinates are positive and clamped to the image extent"
    )]
    pub(crate) fn covering(rect: Rect, width: u32, height: u32) -> Option<Self> {
        let rect = rect.abs().expand();
        let clip = |v: f64, max: u32| -> u32 {
            if v.is_nan() || v <= 0.0 {
                0
            } else {
                (v as u32).min(max)
            }
        };
        let x0 = clip(rect.x0, width);
        let y0 = clip(rect.y0, height);
        let x1 = clip(rect.x1, width);
        let y1 = clip(rect.y1, height);
        (x1 > x0 && y1 > y0).then_some(Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        })
    }
}

/// Filter a region of `pixels` in place.
///
/// `sigma` applies to [`BlurKind::Gaussian`], `block` to [`BlurKind::Pixelate`].
pub(crate) fn apply(
    pixels: &mut RgbaImage,
    region: PixelRegion,
    kind: BlurKind,
    sigma: f32,
    block: u32,
) {
    let source = imageops::crop_imm(pixels, region.x, region.y, region.width, region.height)
        .to_image();
    let filtered = match kind {
        BlurKind::Gaussian => imageops::blur(&source, sigma),
        BlurKind::Pixelate => pixelate(&source, block),
    };
    imageops::replace(pixels, &filtered, i64::from(region.x), i64::from(region.y));
}

/// Average `block`×`block` cells, then scale back up without smoothing.
fn pixelate(source: &RgbaImage, block: u32) -> RgbaImage {
    let (w, h) = source.dimensions();
    let block = block.max(1);
    let cells_x = w.div_ceil(block).max(1);
    let cells_y = h.div_ceil(block).max(1);
    let small = imageops::resize(source, cells_x, cells_y, FilterType::Triangle);
    imageops::resize(&small, w, h, FilterType::Nearest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn checker(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_fn(w, h, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        })
    }

    #[test]
    fn covering_rounds_outward_and_clips() {
        let r = PixelRegion::covering(Rect::new(1.5, 2.2, 9.1, 30.0), 20, 20);
        assert_eq!(
            r,
            Some(PixelRegion {
                x: 1,
                y: 2,
                width: 9,
                height: 18
            })
        );
        assert_eq!(
            PixelRegion::covering(Rect::new(25.0, 0.0, 30.0, 5.0), 20, 20),
            None
        );
    }

    #[test]
    fn pixelate_flattens_cells_and_spares_the_rest() {
        let mut img = checker(32, 32);
        let region = PixelRegion {
            x: 0,
            y: 0,
            width: 16,
            height: 16,
        };
        apply(&mut img, region, BlurKind::Pixelate, 0.0, 8);
        let first = *img.get_pixel(0, 0);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(img.get_pixel(x, y), &first, "cell pixel ({x}, {y})");
            }
        }
        assert!(
            first[0] > 60 && first[0] < 200,
            "cell averages to gray, got {first:?}"
        );
        assert_eq!(
            img.get_pixel(20, 20),
            &Rgba([0, 0, 0, 255]),
            "outside untouched"
        );
        assert_eq!(img.get_pixel(21, 20), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn gaussian_smooths_inside_region_only() {
        let mut img = checker(32, 32);
        let region = PixelRegion {
            x: 8,
            y: 8,
            width: 16,
            height: 16,
        };
        apply(&mut img, region, BlurKind::Gaussian, 3.0, 1);
        let mid = img.get_pixel(16, 16)[0];
        assert!(mid > 40 && mid < 215, "blurred checker is gray, got {mid}");
        assert_eq!(img.get_pixel(2, 2), &Rgba([0, 0, 0, 255]));
    }
}
