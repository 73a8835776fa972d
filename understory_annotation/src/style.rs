// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared style enums and stroke construction.

use kurbo::{Cap, Join, Stroke};
use peniko::Color;

/// Decoration drawn at an arrow endpoint.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HeadStyle {
    /// No decoration.
    None,
    /// Two stroked wings, not closed.
    Open,
    /// Closed, filled wing triangle.
    #[default]
    Filled,
    /// Filled circle centered on the endpoint.
    Circle,
}

/// Dash pattern of a stroked line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// Continuous line.
    #[default]
    Solid,
    /// Long dashes.
    Dashed,
    /// Round dots.
    Dotted,
}

/// Filter applied to a blur region at export time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlurKind {
    /// Gaussian blur.
    #[default]
    Gaussian,
    /// Block averaging (mosaic).
    Pixelate,
}

/// Clamp a render scale to something usable as a divisor.
pub(crate) fn effective_scale(scale: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

/// Build a stroke whose width and dash lengths are divided by `scale`.
pub(crate) fn scaled_stroke(width: f64, scale: f64, line: LineStyle) -> Stroke {
    let scale = effective_scale(scale);
    let w = width / scale;
    let stroke = Stroke::new(w).with_caps(Cap::Round).with_join(Join::Round);
    match line {
        LineStyle::Solid => stroke,
        LineStyle::Dashed => stroke
            .with_caps(Cap::Butt)
            .with_dashes(0.0, [w * 3.0, w * 2.0]),
        LineStyle::Dotted => stroke.with_dashes(0.0, [w * 0.5, w * 1.5]),
    }
}

/// Black or white, whichever reads better on top of `background`.
pub(crate) fn contrasting(background: Color) -> Color {
    let [r, g, b, _] = background.components;
    let luma = 0.299 * r + 0.587 * g + 0.114 * b;
    if luma > 0.6 { Color::BLACK } else { Color::WHITE }
}
