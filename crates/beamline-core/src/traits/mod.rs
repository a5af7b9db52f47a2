// SPDX-FileCopyrightText: 2026 Beamline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for external collaborators of the routing core.

pub mod provider;

pub use provider::{CompletionProvider, CompletionRequest, CompletionResponse};
