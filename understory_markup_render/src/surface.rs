// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output surface allocation, image paints, and pixel readback.

use image::RgbaImage;
use image::imageops::{self, FilterType};
use kurbo::{Affine, Rect, Size};
use peniko::{Blob, ImageAlphaType, ImageData, ImageFormat, ImageQuality, ImageSampler};
use vello_cpu::{Image as CpuImage, ImageSource, Pixmap, RenderContext, RenderSettings};

use understory_markup::BaseImage;

use crate::{RenderConfig, SurfaceError};

/// A validated output size in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct SurfaceSize {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl SurfaceSize {
    /// Size of `canvas` rendered at `scale` pixels per unit, if it fits `config`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "both dimensions are checked against u16::MAX first"
    )]
    pub(crate) fn for_canvas(
        canvas: Size,
        scale: f64,
        config: &RenderConfig,
    ) -> Result<Self, SurfaceError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(SurfaceError::InvalidScale(scale));
        }
        let width = (canvas.width * scale).round();
        let height = (canvas.height * scale).round();
        if !(width >= 1.0 && height >= 1.0) {
            return Err(SurfaceError::Empty { width, height });
        }
        let max = u16::MAX;
        if width > f64::from(max) || height > f64::from(max) {
            return Err(SurfaceError::TooLarge { width, height, max });
        }
        let size = Self {
            width: width as u16,
            height: height as u16,
        };
        let pixels = size.pixel_count();
        if pixels > config.max_pixels {
            return Err(SurfaceError::OverBudget {
                pixels,
                max: config.max_pixels,
            });
        }
        Ok(size)
    }

    pub(crate) fn pixel_count(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub(crate) fn context(self, config: &RenderConfig) -> RenderContext {
        let settings = RenderSettings {
            render_mode: config.render_mode,
            ..RenderSettings::default()
        };
        RenderContext::new_with(self.width, self.height, settings)
    }
}

/// Fill the whole surface with the base image, resampled to cover it.
///
/// Resampling happens on the CPU raster first so opaque sources stay fully
/// opaque; the result is then drawn pixel for pixel.
pub(crate) fn draw_base(ctx: &mut RenderContext, base: &BaseImage, surface: SurfaceSize) {
    if base.width() == 0 || base.height() == 0 {
        return;
    }
    let (width, height) = (u32::from(surface.width), u32::from(surface.height));
    if base.width() == width && base.height() == height {
        draw_exact(ctx, base.image_data());
    } else {
        let resized = imageops::resize(base.pixels(), width, height, FilterType::Triangle);
        draw_exact(ctx, &image_data(resized));
    }
}

/// Draw `image` at the origin with one source pixel per output pixel.
pub(crate) fn draw_exact(ctx: &mut RenderContext, image: &ImageData) {
    if image.width == 0 || image.height == 0 {
        return;
    }
    ctx.set_transform(Affine::IDENTITY);
    ctx.set_paint(CpuImage {
        image: ImageSource::from_peniko_image_data(image),
        sampler: ImageSampler {
            quality: ImageQuality::Low,
            ..ImageSampler::default()
        },
    });
    ctx.fill_rect(&Rect::new(
        0.0,
        0.0,
        f64::from(image.width),
        f64::from(image.height),
    ));
}

/// Wrap an owned raster as a paint source.
pub(crate) fn image_data(pixels: RgbaImage) -> ImageData {
    let (width, height) = pixels.dimensions();
    ImageData {
        data: Blob::from(pixels.into_raw()),
        format: ImageFormat::Rgba8,
        alpha_type: ImageAlphaType::Alpha,
        width,
        height,
    }
}

/// Rasterize everything drawn so far and return it as straight-alpha RGBA8.
pub(crate) fn read_back(ctx: &mut RenderContext, surface: SurfaceSize) -> RgbaImage {
    let mut pixmap = Pixmap::new(surface.width, surface.height);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    let unpremul = pixmap.take_unpremultiplied();
    let mut bytes = Vec::with_capacity(unpremul.len() * 4);
    for p in unpremul {
        bytes.extend_from_slice(&[p.r, p.g, p.b, p.a]);
    }
    let (width, height) = (u32::from(surface.width), u32::from(surface.height));
    RgbaImage::from_raw(width, height, bytes).unwrap_or_else(|| RgbaImage::new(width, height))
}
