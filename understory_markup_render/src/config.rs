// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vello_cpu::RenderMode;

/// Limits and settings for output surfaces.
#[derive(Copy, Clone, Debug)]
pub struct RenderConfig {
    /// Largest accepted `width * height` of an output surface.
    ///
    /// Each dimension is independently capped at `u16::MAX`.
    pub max_pixels: u64,
    /// Rasterizer mode passed to `vello_cpu`.
    pub render_mode: RenderMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_pixels: 16_384 * 16_384,
            render_mode: RenderMode::OptimizeSpeed,
        }
    }
}

/// Maps a blur mask's `intensity` in `[0, 1]` to filter parameters in canvas units.
///
/// Both parameters grow linearly from `*_min` at intensity `0` to
/// `*_min + *_range` at intensity `1`, and are multiplied by the render scale.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FilterConfig {
    /// Gaussian standard deviation at intensity `0`.
    pub sigma_min: f64,
    /// Extra standard deviation at intensity `1`.
    pub sigma_range: f64,
    /// Pixelation block edge at intensity `0`.
    pub block_min: f64,
    /// Extra block edge at intensity `1`.
    pub block_range: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            sigma_min: 2.0,
            sigma_range: 18.0,
            block_min: 4.0,
            block_range: 28.0,
        }
    }
}

impl FilterConfig {
    /// Gaussian sigma in output pixels.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the blur filter takes an f32 sigma"
    )]
    pub fn sigma(&self, intensity: f64, scale: f64) -> f32 {
        ((self.sigma_min + self.sigma_range * intensity) * scale) as f32
    }

    /// Pixelation block edge in output pixels, at least `1`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "saturating cast of a finite positive edge length"
    )]
    pub fn block_size(&self, intensity: f64, scale: f64) -> u32 {
        let edge = ((self.block_min + self.block_range * intensity) * scale).round();
        if edge.is_finite() && edge >= 1.0 {
            edge as u32
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FilterConfig;

    #[test]
    fn parameters_scale_with_intensity_and_output() {
        let f = FilterConfig::default();
        assert_eq!(f.sigma(0.0, 1.0), 2.0);
        assert_eq!(f.sigma(1.0, 2.0), 40.0);
        assert_eq!(f.block_size(0.5, 1.0), 18);
        assert_eq!(f.block_size(1.0, 0.5), 16);
        assert_eq!(f.block_size(0.0, 0.0), 1, "never below one pixel");
    }
}
