// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The immutable raster under the annotations.

use std::sync::Arc;

use image::RgbaImage;
use kurbo::{Rect, Size};
use peniko::{Blob, ImageAlphaType, ImageData, ImageFormat};

/// A shared, immutable RGBA8 image.
///
/// Cloning is cheap: pixels live behind reference counts, once as an
/// [`RgbaImage`] for filtering and once as a [`peniko::ImageData`] paint.
#[derive(Clone)]
pub struct BaseImage {
    pixels: Arc<RgbaImage>,
    paint: ImageData,
}

impl BaseImage {
    /// Wrap decoded pixels.
    #[must_use]
    pub fn new(pixels: RgbaImage) -> Self {
        let paint = ImageData {
            data: Blob::from(pixels.as_raw().clone()),
            format: ImageFormat::Rgba8,
            alpha_type: ImageAlphaType::Alpha,
            width: pixels.width(),
            height: pixels.height(),
        };
        Self {
            pixels: Arc::new(pixels),
            paint,
        }
    }

    /// Build from raw, non-premultiplied RGBA8 bytes.
    ///
    /// Returns `None` if `data` is not exactly `width * height * 4` bytes.
    #[must_use]
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        RgbaImage::from_raw(width, height, data).map(Self::new)
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Pixel dimensions as a [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width()), f64::from(self.height()))
    }

    /// The pixels, for filtering.
    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// The pixels, as a paint source.
    #[must_use]
    pub fn image_data(&self) -> &ImageData {
        &self.paint
    }

    /// Copy out the pixels covered by `canvas_rect`, where the whole image spans `canvas`.
    ///
    /// The result always has at least one pixel in each dimension.
    pub(crate) fn crop_to(&self, canvas_rect: Rect, canvas: Size) -> Self {
        let sx = f64::from(self.width()) / canvas.width;
        let sy = f64::from(self.height()) / canvas.height;
        let x0 = clamp_px(canvas_rect.x0 * sx, self.width().saturating_sub(1));
        let y0 = clamp_px(canvas_rect.y0 * sy, self.height().saturating_sub(1));
        let x1 = clamp_px(canvas_rect.x1 * sx, self.width()).max(x0 + 1);
        let y1 = clamp_px(canvas_rect.y1 * sy, self.height()).max(y0 + 1);
        let cropped = image::imageops::crop_imm(&*self.pixels, x0, y0, x1 - x0, y1 - y0);
        Self::new(cropped.to_image())
    }

    /// Returns `true` if both handles share the same pixel buffer.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl core::fmt::Debug for BaseImage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BaseImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "value is positive and clamped to the image extent"
)]
fn clamp_px(v: f64, max: u32) -> u32 {
    if v.is_nan() || v <= 0.0 {
        0
    } else {
        (v.round() as u32).min(max)
    }
}
