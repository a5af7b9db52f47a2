// SPDX-FileCopyrightText: 2026 Beamline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Specification complexity classification and model routing for Beamline.
//!
//! This crate provides:
//! - [`SpecClassifier`]: strategy trait over complexity classification,
//!   with [`HeuristicClassifier`] (keyword-driven, zero-cost) and
//!   [`LlmClassifier`] (delegating) implementations
//! - [`ModelRouter`]: deterministic tier-to-model selection with
//!   classification-call pricing
//!
//! The router sits between the incoming specification and the proposal
//! generation call, selecting the cheapest model tier adequate for the
//! request's complexity.

pub mod classifier;
pub mod router;

pub use classifier::{
    Classification, ComplexityTier, HeuristicClassifier, LlmClassifier, SpecClassifier,
};
pub use router::{ModelRouter, RoutingDecision, display_name};
