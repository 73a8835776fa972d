// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integrations with other Understory crates.

#[cfg(feature = "annotation")]
pub mod annotation;
