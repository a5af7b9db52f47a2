// SPDX-FileCopyrightText: 2026 Beamline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Token pricing, cost arithmetic, and savings reporting for Beamline.
//!
//! This crate provides:
//! - **Pricing**: fixed per-model rate table and cost calculation
//! - **Savings**: comparison of actual spend against the most expensive
//!   model over the same token counts
//! - **Reporting**: per-model comparison table and end-to-end savings
//!   summary for the presentation layer

pub mod pricing;
pub mod report;

pub use pricing::{MODEL_PRICING, PricingEntry, Savings};
pub use report::{CallLeg, ComparisonRow, SavingsSummary};
