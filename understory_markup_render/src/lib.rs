// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_markup_render --heading-base-level=0

//! Understory Markup Render: flatten markup documents into pixels.
//!
//! Two paths share one [`Compositor`]:
//!
//! - [`Compositor::render`] is the **non-destructive preview**. It draws the
//!   base image stretched over a `canvas_size * scale` surface, then every
//!   annotation in ascending `z_index`. Blur masks show only their translucent
//!   placeholder.
//! - [`Compositor::export_final`] is the **destructive export**. It renders the
//!   base image alone, burns each blur mask into those pixels (Gaussian blur
//!   or pixelation, strength from [`FilterConfig`]), then draws every
//!   non-blur annotation on top in the same order as the preview.
//!
//! Both return `None` when the output surface cannot be allocated (invalid
//! scale, a dimension beyond `u16::MAX`, or more than
//! [`RenderConfig::max_pixels`]); the `try_*`/`export_with` forms report why.
//! Neither touches the document.
//!
//! Exports of large documents can run off-thread against a
//! [`Snapshot`](understory_markup::Snapshot) with [`ExportJob::spawn`]; the
//! returned [`ExportHandle`] can be cancelled cooperatively.
//!
//! ```rust
//! use image::RgbaImage;
//! use kurbo::{Point, Rect};
//! use peniko::Color;
//! use understory_annotation::{Annotation, Blur, BlurKind, Counter};
//! use understory_markup::{BaseImage, Document};
//! use understory_markup_render::{Compositor, ExportJob};
//!
//! let mut doc = Document::from_image(BaseImage::new(RgbaImage::new(120, 80)));
//! doc.add(Annotation::new(Blur::new(
//!     Rect::new(10.0, 10.0, 60.0, 40.0),
//!     BlurKind::Pixelate,
//!     0.5,
//! )));
//! doc.add(Annotation::new(Counter::new(1, Point::new(90.0, 40.0), Color::BLACK, 24.0)));
//!
//! let compositor = Compositor::default();
//! let preview = compositor.render(&doc, 2.0).unwrap();
//! assert_eq!(preview.dimensions(), (240, 160));
//!
//! let job = ExportJob::spawn(doc.snapshot(), 1.0, compositor);
//! let exported = job.wait().unwrap();
//! assert_eq!(exported.dimensions(), (120, 80));
//! ```

mod compositor;
mod config;
mod error;
mod export;
mod filter;
mod surface;

pub use compositor::{Compositor, export_final, render};
pub use config::{FilterConfig, RenderConfig};
pub use error::{ExportError, SurfaceError};
pub use export::{CancellationToken, ExportHandle, ExportJob};
