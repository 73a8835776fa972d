// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_markup --heading-base-level=0

//! Understory Markup: the editable document behind an image annotation tool.
//!
//! A [`Document`] owns a [`BaseImage`], a canvas size, an insertion-ordered
//! list of [`Annotation`]s, a selection, and a linear undo/redo history.
//!
//! - **Z-order**: [`Document::add`] stamps each annotation with the next value
//!   of a document-wide counter; paint order and pick priority follow `z_index`,
//!   not insertion order.
//! - **History**: every mutating call that changes something records one step
//!   holding a full copy of the prior state (annotations, z counter, selection,
//!   base image handle, canvas size). Undo and redo swap whole states, and any
//!   new mutation after an undo discards the redo stack.
//! - **Selection**: [`Document::select_at`] picks the topmost hit,
//!   [`Document::select_in_rect`] selects everything whose transformed bounds
//!   touch a marquee, and [`Document::toggle_selection`] flips one id. The
//!   selection only ever holds ids present in the document.
//! - **Crop**: [`Document::apply_crop`] clips a rectangle to the canvas,
//!   rejects results below [`DocumentConfig::min_crop_extent`], and otherwise
//!   crops the base image and re-anchors every annotation, as one undo step.
//!
//! ```rust
//! use image::RgbaImage;
//! use kurbo::{Point, Rect};
//! use peniko::Color;
//! use understory_annotation::{Annotation, Arrow};
//! use understory_markup::{BaseImage, Document};
//!
//! let mut doc = Document::from_image(BaseImage::new(RgbaImage::new(400, 300)));
//! let arrow = doc.add(Annotation::new(Arrow::new(
//!     Point::new(50.0, 100.0),
//!     Point::new(200.0, 100.0),
//!     Color::BLACK,
//!     10.0,
//! )));
//! assert_eq!(doc.select_at(Point::new(100.0, 100.0)), Some(arrow));
//!
//! doc.apply_crop(Rect::new(40.0, 40.0, 240.0, 240.0)).unwrap();
//! assert_eq!(doc.base_image().width(), 200);
//!
//! doc.undo();
//! assert_eq!(doc.base_image().width(), 400);
//! assert!(doc.can_redo());
//! ```
//!
//! Rendering lives in `understory_markup_render`; it consumes any [`Scene`],
//! which both [`Document`] and the thread-safe [`Snapshot`] implement.

mod base_image;
mod config;
mod document;
mod error;
mod history;
mod scene;

pub use base_image::BaseImage;
pub use config::{DocumentConfig, MIN_CROP_EXTENT};
pub use document::Document;
pub use error::CropError;
pub use scene::{Scene, Snapshot};

pub use understory_annotation::{Annotation, AnnotationId};
