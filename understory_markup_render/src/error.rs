// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Why an output surface could not be allocated.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum SurfaceError {
    /// The scale is zero, negative, or not finite.
    #[error("invalid render scale {0}")]
    InvalidScale(f64),
    /// The scaled canvas rounds to zero pixels in some dimension.
    #[error("surface would be empty ({width}x{height})")]
    Empty {
        /// Requested width in pixels.
        width: f64,
        /// Requested height in pixels.
        height: f64,
    },
    /// A dimension exceeds what the rasterizer can address.
    #[error("surface {width}x{height} exceeds the {max} pixel edge limit")]
    TooLarge {
        /// Requested width in pixels.
        width: f64,
        /// Requested height in pixels.
        height: f64,
        /// Largest supported edge.
        max: u16,
    },
    /// The surface exceeds [`RenderConfig::max_pixels`](crate::RenderConfig::max_pixels).
    #[error("surface of {pixels} pixels exceeds the budget of {max}")]
    OverBudget {
        /// Requested pixel count.
        pixels: u64,
        /// Configured budget.
        max: u64,
    },
}

/// Why an export produced no image.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No surface could be allocated for the output.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    /// The job was cancelled before it finished.
    #[error("export cancelled")]
    Cancelled,
    /// The worker thread could not be started.
    #[error("failed to start export worker")]
    Spawn(#[source] std::io::Error),
    /// The worker thread panicked.
    #[error("export worker panicked")]
    WorkerPanicked,
}
