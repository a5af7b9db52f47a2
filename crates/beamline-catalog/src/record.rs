// SPDX-FileCopyrightText: 2026 Beamline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog record types.
//!
//! Records are immutable, defined once at compile time, and shared as
//! `&'static` references for the life of the process.

use serde::Serialize;
use strum::{Display, EnumString};

/// Product technology family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Laser,
    Terahertz,
}

/// An immutable catalog entry for a photonics product family.
///
/// Numeric ranges are `(lo, hi)` with `lo <= hi`. Optional fields are
/// `None` where the product family has no such characteristic; the
/// relevance scorer only fires the corresponding signal when the field
/// is present.
#[derive(Debug, Serialize)]
pub struct ProductRecord {
    /// Unique identifier, stable across releases.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Category line, e.g. "Single Frequency CW DPSS Lasers".
    pub category: &'static str,
    /// Technology family.
    pub kind: ProductKind,
    /// Discrete wavelengths offered, in nm.
    pub wavelengths_nm: &'static [u32],
    /// Continuous tuning range in nm, for tunable sources.
    pub wavelength_range_nm: Option<(u32, u32)>,
    /// Output power range in mW.
    pub power_range_mw: Option<(u32, u32)>,
    /// Pulse length range in ns, for Q-switched sources.
    pub pulse_length_ns: Option<(u32, u32)>,
    /// Pulse duration in fs, for ultrafast sources.
    pub pulse_duration_fs: Option<u32>,
    /// Digital modulation bandwidth in MHz.
    pub modulation_mhz: Option<u32>,
    /// Frequency range in THz, for terahertz systems.
    pub frequency_range_thz: Option<(f64, f64)>,
    /// Whether the source is continuously tunable.
    pub tunable: bool,
    /// Application names, title-cased as printed in the catalog.
    pub applications: &'static [&'static str],
    /// Key feature phrases.
    pub key_features: &'static [&'static str],
    /// Named models, with the variant in parentheses, e.g.
    /// "Cobolt Samba (532 nm)".
    pub named_models: &'static [&'static str],
    /// Declared search keywords.
    pub keywords: &'static [&'static str],
}
