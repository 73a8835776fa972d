// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Preview and export composition.

use image::RgbaImage;
use kurbo::Affine;
use tracing::{debug, warn};
use understory_markup::Scene;

use crate::filter::{self, PixelRegion};
use crate::surface::{self, SurfaceSize};
use crate::{CancellationToken, ExportError, FilterConfig, RenderConfig, SurfaceError};

/// Flattens a [`Scene`] into pixels.
#[derive(Copy, Clone, Debug, Default)]
pub struct Compositor {
    /// Surface limits and rasterizer settings.
    pub render: RenderConfig,
    /// Blur mask filter parameters.
    pub filter: FilterConfig,
}

impl Compositor {
    /// A compositor with the given surface settings and default filters.
    #[must_use]
    pub fn new(render: RenderConfig) -> Self {
        Self {
            render,
            filter: FilterConfig::default(),
        }
    }

    /// Non-destructive preview at `scale` output pixels per canvas unit.
    ///
    /// Returns `None` if no surface of that size can be allocated.
    #[must_use]
    pub fn render(&self, scene: &impl Scene, scale: f64) -> Option<RgbaImage> {
        self.try_render(scene, scale)
            .inspect_err(|err| warn!(%err, scale, "preview render unavailable"))
            .ok()
    }

    /// Like [`render`](Self::render), reporting why a surface could not be allocated.
    pub fn try_render(&self, scene: &impl Scene, scale: f64) -> Result<RgbaImage, SurfaceError> {
        let surface = SurfaceSize::for_canvas(scene.canvas_size(), scale, &self.render)?;
        let mut ctx = surface.context(&self.render);
        surface::draw_base(&mut ctx, scene.base_image(), surface);
        for annotation in scene.annotations_by_z() {
            annotation.render(&mut ctx, scale);
        }
        Ok(surface::read_back(&mut ctx, surface))
    }

    /// Destructive export: blur masks are burned into the base pixels and
    /// every other annotation is drawn on top.
    ///
    /// Returns `None` if no surface of that size can be allocated.
    #[must_use]
    pub fn export_final(&self, scene: &impl Scene, scale: f64) -> Option<RgbaImage> {
        match self.export_with(scene, scale, &CancellationToken::new()) {
            Ok(image) => Some(image),
            Err(err) => {
                warn!(%err, scale, "export unavailable");
                None
            }
        }
    }

    /// Export, checking `token` between stages and between blur masks.
    pub fn export_with(
        &self,
        scene: &impl Scene,
        scale: f64,
        token: &CancellationToken,
    ) -> Result<RgbaImage, ExportError> {
        let surface = SurfaceSize::for_canvas(scene.canvas_size(), scale, &self.render)?;
        let ordered = scene.annotations_by_z();

        let mut ctx = surface.context(&self.render);
        surface::draw_base(&mut ctx, scene.base_image(), surface);
        let mut pixels = surface::read_back(&mut ctx, surface);
        token.check()?;

        let mut masks = 0_usize;
        for annotation in ordered.iter().copied() {
            let Some(blur) = annotation.as_blur() else {
                continue;
            };
            let region = Affine::scale(scale).transform_rect_bbox(annotation.transformed_bounds());
            let Some(region) = PixelRegion::covering(region, pixels.width(), pixels.height())
            else {
                continue;
            };
            filter::apply(
                &mut pixels,
                region,
                blur.kind(),
                self.filter.sigma(blur.intensity(), scale),
                self.filter.block_size(blur.intensity(), scale),
            );
            masks += 1;
            token.check()?;
        }
        debug!(
            masks,
            width = surface.width,
            height = surface.height,
            "blur masks applied"
        );

        let mut ctx = surface.context(&self.render);
        surface::draw_exact(&mut ctx, &surface::image_data(pixels));
        for annotation in ordered.iter().filter(|a| !a.is_blur()) {
            annotation.render(&mut ctx, scale);
        }
        token.check()?;
        Ok(surface::read_back(&mut ctx, surface))
    }
}

/// Convenience wrapper around [`Compositor::render`] with default settings.
#[must_use]
pub fn render(scene: &impl Scene, scale: f64) -> Option<RgbaImage> {
    Compositor::default().render(scene, scale)
}

/// Convenience wrapper around [`Compositor::export_final`] with default settings.
#[must_use]
pub fn export_final(scene: &impl Scene, scale: f64) -> Option<RgbaImage> {
    Compositor::default().export_final(scene, scale)
}

