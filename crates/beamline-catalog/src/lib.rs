// SPDX-FileCopyrightText: 2026 Beamline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Photonics product catalog and relevance scoring for Beamline.
//!
//! This crate provides:
//! - [`CatalogStore`]: ordered, read-only access to the builtin catalog
//! - [`RelevanceScorer`]: heuristic free-text matching with normalized
//!   [0, 99] scores
//!
//! The catalog is a compile-time fixture; nothing here performs I/O or
//! can fail at runtime.

pub mod data;
pub mod record;
pub mod search;
pub mod store;

pub use data::PHOTONICS_CATALOG;
pub use record::{ProductKind, ProductRecord};
pub use search::{MatchResult, RelevanceScorer};
pub use store::CatalogStore;
