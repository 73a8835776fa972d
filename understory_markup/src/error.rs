// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Why [`Document::apply_crop`](crate::Document::apply_crop) left the document unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum CropError {
    /// The requested rectangle does not overlap the canvas.
    #[error("crop rectangle lies outside the canvas")]
    OutsideCanvas,
    /// The overlap with the canvas is narrower or shorter than the minimum extent.
    #[error("crop of {width}x{height} is below the {min} unit minimum")]
    TooSmall {
        /// Width of the overlap.
        width: f64,
        /// Height of the overlap.
        height: f64,
        /// The configured minimum extent.
        min: f64,
    },
}
