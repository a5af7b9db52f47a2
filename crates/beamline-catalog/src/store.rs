// SPDX-FileCopyrightText: 2026 Beamline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only catalog store.
//!
//! The store is an explicitly constructed view over a static record
//! slice -- no process-wide mutable singleton. Safe to share across
//! threads; nothing is ever mutated after construction.

use crate::data::PHOTONICS_CATALOG;
use crate::record::{ProductKind, ProductRecord};

/// Ordered, read-only access to the product catalog.
#[derive(Debug, Clone, Copy)]
pub struct CatalogStore {
    records: &'static [ProductRecord],
}

impl CatalogStore {
    /// Creates a store over the builtin catalog fixture.
    pub fn new() -> Self {
        Self {
            records: PHOTONICS_CATALOG,
        }
    }

    /// Creates a store over an injected record slice (for tests and
    /// alternative fixtures).
    pub fn with_records(records: &'static [ProductRecord]) -> Self {
        Self { records }
    }

    /// All records in definition order.
    pub fn all(&self) -> &'static [ProductRecord] {
        self.records
    }

    /// Looks up a record by its unique identifier.
    pub fn by_id(&self, id: &str) -> Option<&'static ProductRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records of the given kind, preserving definition order.
    pub fn by_kind(&self, kind: ProductKind) -> Vec<&'static ProductRecord> {
        self.records.iter().filter(|r| r.kind == kind).collect()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
