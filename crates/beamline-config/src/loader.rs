// SPDX-FileCopyrightText: 2026 Beamline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./beamline.toml` > `~/.config/beamline/beamline.toml`
//! > `/etc/beamline/beamline.toml` with environment variable overrides via
//! `BEAMLINE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::BeamlineConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/beamline/beamline.toml` (system-wide)
/// 3. `~/.config/beamline/beamline.toml` (user XDG config)
/// 4. `./beamline.toml` (local directory)
/// 5. `BEAMLINE_*` environment variables
pub fn load_config() -> Result<BeamlineConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BeamlineConfig::default()))
        .merge(Toml::file("/etc/beamline/beamline.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("beamline/beamline.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("beamline.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<BeamlineConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BeamlineConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<BeamlineConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BeamlineConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `BEAMLINE_OPENAI_API_KEY` must map to
/// `openai.api_key`, not `openai.api.key`.
fn env_provider() -> Env {
    Env::prefixed("BEAMLINE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: BEAMLINE_ROUTING_SIMPLE_MODEL -> "routing_simple_model"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("routing_", "routing.", 1)
            .replacen("scorer_", "scorer.", 1)
            .replacen("openai_", "openai.", 1);
        mapped.into()
    })
}
