// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Crops whose width or height would fall below this many canvas units are rejected.
pub const MIN_CROP_EXTENT: f64 = 10.0;

/// Tunables for a [`Document`](crate::Document).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DocumentConfig {
    /// Smallest accepted crop width and height, in canvas units.
    pub min_crop_extent: f64,
    /// Maximum number of undo steps kept; `None` keeps every step.
    pub history_limit: Option<usize>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            min_crop_extent: MIN_CROP_EXTENT,
            history_limit: None,
        }
    }
}
