// SPDX-FileCopyrightText: 2026 Beamline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic relevance scoring of free-text specifications against the
//! catalog.
//!
//! Each record accumulates an integer score from independent, additive
//! signal categories (applications, features, categories, keywords,
//! named models, numeric wavelength/power/frequency hits, modality
//! flags). The raw score is normalized against a configurable ceiling,
//! capped at 99 -- never 100, a full-certainty score is deliberately
//! unreachable. All matching is case-insensitive; numeric extraction is
//! plain digit-token scanning, not unit-aware parsing, so a bare "532"
//! matches a 532 nm entry regardless of context. That trade-off favors
//! recall and is intentional.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use beamline_config::ScorerConfig;

use crate::record::{ProductKind, ProductRecord};
use crate::store::CatalogStore;

/// Any integer token.
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Power stated in milliwatts, e.g. "100 mW".
static POWER_MW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(?:mw|milliwatt)").unwrap());

/// Power stated in watts, e.g. "2 W". The word boundary keeps "watts"
/// and trailing letters from matching.
static POWER_W_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*(?:w|watt)\b").unwrap());

const THZ_KEYWORDS: &[&str] = &["terahertz", "thz"];
const TUNABLE_KEYWORDS: &[&str] = &["tunable", "tuning"];
const PULSED_KEYWORDS: &[&str] = &["pulsed", "nanosecond", "ns-", "q-switch"];
const FEMTOSECOND_KEYWORDS: &[&str] = &["femtosecond", "ultrafast", "multiphoton"];
const MODULATION_KEYWORDS: &[&str] = &["modulation", "modulated", "fast switching"];
const SECURITY_KEYWORDS: &[&str] = &["security", "screening", "mail"];

/// A scored catalog record for one query.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MatchResult {
    /// The matched record.
    pub record: &'static ProductRecord,
    /// Normalized relevance score in [0, 99].
    pub score: u32,
}

impl MatchResult {
    /// Identifier of the matched record.
    pub fn record_id(&self) -> &'static str {
        self.record.id
    }
}

/// Scores catalog records against free-text specifications.
///
/// Constructed over an explicit store and config; holds no mutable
/// state and never fails -- a specification with no signal simply
/// yields an empty result list.
#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    store: CatalogStore,
    config: ScorerConfig,
}

impl RelevanceScorer {
    /// Creates a scorer over the given store and configuration.
    pub fn new(store: CatalogStore, config: ScorerConfig) -> Self {
        Self { store, config }
    }

    /// Ranks all catalog records against the specification text.
    ///
    /// Returns matches sorted descending by score; ties keep catalog
    /// definition order (stable sort). Records with zero raw score are
    /// excluded.
    pub fn search(&self, spec_text: &str) -> Vec<MatchResult> {
        let spec = spec_text.to_lowercase();

        let mut results: Vec<MatchResult> = self
            .store
            .all()
            .iter()
            .filter_map(|record| {
                let raw = raw_score(record, &spec);
                (raw > 0).then(|| MatchResult {
                    record,
                    score: self.normalize(raw),
                })
            })
            .collect();

        results.sort_by(|a, b| b.score.cmp(&a.score));

        debug!(
            matches = results.len(),
            spec_len = spec_text.len(),
            "catalog search complete"
        );
        results
    }

    /// Normalizes a raw signal sum to a percentage, capped at 99.
    fn normalize(&self, raw: u32) -> u32 {
        let ceiling = self.config.score_ceiling.max(1);
        let pct = (raw as f64 / ceiling as f64 * 100.0).round() as u32;
        pct.min(99)
    }
}

/// Accumulates the raw signal sum for one record.
fn raw_score(record: &ProductRecord, spec: &str) -> u32 {
    let mut score = 0;

    // Application matching (high value).
    for app in record.applications {
        let app_lower = app.to_lowercase();
        if spec.contains(&app_lower) {
            score += 20;
        } else {
            let app_words: Vec<&str> = app_lower
                .split_whitespace()
                .filter(|w| w.len() > 3)
                .collect();
            let matching = app_words.iter().filter(|w| spec.contains(**w)).count();
            if matching >= 2 {
                score += 12;
            } else if matching == 1 && app_words.len() <= 2 {
                score += 6;
            }
        }
    }

    // Feature keyword matching.
    for feature in record.key_features {
        for word in feature.to_lowercase().split_whitespace() {
            if word.len() > 3 && spec.contains(word) {
                score += 4;
            }
        }
    }

    // Category matching.
    let category_lower = record.category.to_lowercase();
    if spec.contains(&category_lower) {
        score += 15;
    } else {
        let matching = category_lower
            .split_whitespace()
            .filter(|w| w.len() > 3 && spec.contains(*w))
            .count();
        if matching >= 2 {
            score += 8;
        }
    }

    // Declared keyword matching.
    for keyword in record.keywords {
        if spec.contains(&keyword.to_lowercase()) {
            score += 10;
        }
    }

    // Named model matching: the text before the parenthetical.
    for model_name in record.named_models {
        let name_part = model_name
            .split('(')
            .next()
            .unwrap_or(model_name)
            .trim()
            .to_lowercase();
        if spec.contains(&name_part) {
            score += 30;
        }
    }

    // Discrete wavelength matching (numeric, nm).
    for wavelength in record.wavelengths_nm {
        if spec.contains(&wavelength.to_string()) {
            score += 25;
        }
    }

    // Wavelength range matching: any integer token inside the range.
    if let Some((lo, hi)) = record.wavelength_range_nm {
        for token in NUMBER_RE.find_iter(spec) {
            if let Ok(value) = token.as_str().parse::<u64>() {
                if u64::from(lo) <= value && value <= u64::from(hi) {
                    score += 20;
                }
            }
        }
    }

    // THz frequency matching.
    if record.frequency_range_thz.is_some() && THZ_KEYWORDS.iter().any(|kw| spec.contains(kw)) {
        score += 30;
    }

    // Power matching (mW and W).
    if let Some((lo, hi)) = record.power_range_mw {
        for capture in POWER_MW_RE.captures_iter(spec) {
            if let Ok(value) = capture[1].parse::<u64>() {
                if u64::from(lo) <= value && value <= u64::from(hi) {
                    score += 20;
                } else if value < u64::from(lo) * 2 {
                    // Close under the floor still counts a little.
                    score += 5;
                }
            }
        }

        for capture in POWER_W_RE.captures_iter(spec) {
            if let Ok(value) = capture[1].parse::<f64>() {
                let mw = value * 1000.0;
                if f64::from(lo) <= mw && mw <= f64::from(hi) {
                    score += 20;
                }
            }
        }
    }

    // Tunability.
    if record.tunable && TUNABLE_KEYWORDS.iter().any(|kw| spec.contains(kw)) {
        score += 25;
    }

    // Pulsed / femtosecond operation.
    if (record.pulse_length_ns.is_some() || record.pulse_duration_fs.is_some())
        && PULSED_KEYWORDS.iter().any(|kw| spec.contains(kw))
    {
        score += 20;
    }

    if record.pulse_duration_fs.is_some()
        && FEMTOSECOND_KEYWORDS.iter().any(|kw| spec.contains(kw))
    {
        score += 25;
    }

    // Modulation.
    if record.modulation_mhz.is_some() && MODULATION_KEYWORDS.iter().any(|kw| spec.contains(kw)) {
        score += 20;
    }

    // Security / screening specs favor terahertz systems.
    if record.kind == ProductKind::Terahertz
        && SECURITY_KEYWORDS.iter().any(|kw| spec.contains(kw))
    {
        score += 15;
    }

    // Exact product name.
    if spec.contains(&record.name.to_lowercase()) {
        score += 35;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> RelevanceScorer {
        RelevanceScorer::new(CatalogStore::new(), ScorerConfig::default())
    }

    #[test]
    fn results_are_sorted_and_bounded() {
        let results = scorer().search(
            "Tunable 532 nm laser, 100 mW, for Raman spectroscopy and fluorescence microscopy \
             with modulation and terahertz quality control on the side",
        );
        assert!(!results.is_empty());
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score, "scores must be descending");
        }
        for result in &results {
            assert!(result.score >= 1 && result.score <= 99);
        }
    }

    #[test]
    fn zero_signal_spec_yields_empty_results() {
        assert!(scorer().search("completely unrelated text").is_empty());
        assert!(scorer().search("").is_empty());
    }

    #[test]
    fn simple_microscopy_spec_ranks_single_frequency_families_first() {
        let results =
            scorer().search("We need a 532 nm laser with 100 mW for fluorescence microscopy.");

        // Both single-frequency families score wavelength (+25), exact
        // application (+20), and power in range (+20); the 05-01 adds a
        // partial hit on "Super-Resolution Microscopy" (+6) and edges
        // ahead.
        assert_eq!(results[0].record_id(), "cobolt-05-01");
        assert_eq!(results[1].record_id(), "cobolt-04-01");
        assert!(results[0].score > results[1].score);
        assert!(results[0].score >= 50, "got {}", results[0].score);
    }

    #[test]
    fn thz_production_spec_ranks_terahertz_above_lasers() {
        let results = scorer().search(
            "THz spectroscopy system for quality control on the production line, \
             RS-232 interface required.",
        );

        assert_eq!(results[0].record.kind, ProductKind::Terahertz);
        let top_laser = results
            .iter()
            .filter(|r| r.record.kind == ProductKind::Laser)
            .map(|r| r.score)
            .max()
            .unwrap_or(0);
        assert!(results[0].score > top_laser);
    }

    #[test]
    fn dense_spec_saturates_at_99_never_100() {
        let results = scorer().search(
            "T-SPECTRALYZER terahertz thz spectrometer for thz spectroscopy, ndt and quality control",
        );
        assert_eq!(results[0].record_id(), "t-spectralyzer");
        assert_eq!(results[0].score, 99);
    }

    #[test]
    fn power_below_range_earns_partial_credit() {
        // VALO starts at 500 mW; 400 mW is under the floor but inside 2x,
        // and "multiphoton" adds the femtosecond signal.
        let results = scorer().search("400 mW source for multiphoton imaging");
        let valo = results
            .iter()
            .find(|r| r.record_id() == "valo")
            .expect("valo should match");
        // femtosecond +25, partial power +5, application word matches.
        assert!(valo.score > 0);
    }

    #[test]
    fn watt_power_is_converted_to_milliwatts() {
        // 2 W = 2000 mW, inside the 05-01 range [20, 3000].
        let with_watts = scorer().search("532 nm at 2 W output");
        let high_power = with_watts
            .iter()
            .find(|r| r.record_id() == "cobolt-05-01")
            .expect("05-01 should match");

        let without_watts = scorer().search("532 nm output");
        let baseline = without_watts
            .iter()
            .find(|r| r.record_id() == "cobolt-05-01")
            .unwrap();

        assert!(high_power.score > baseline.score);
    }

    #[test]
    fn bare_number_matches_wavelength_regardless_of_context() {
        // Deliberate precision/recall trade-off: "532" with no unit
        // still fires the discrete-wavelength signal.
        let results = scorer().search("need part number 532");
        assert!(results.iter().any(|r| r.record_id() == "cobolt-04-01"));
    }

    #[test]
    fn tunable_spec_rewards_tunable_sources() {
        let results = scorer().search("tunable source from 450 to 650 nm");
        let c_wave = results
            .iter()
            .find(|r| r.record_id() == "c-wave")
            .expect("c-wave should match");
        // tunable +25, keyword "tunable" +10, range hits for 450 and 650.
        assert!(c_wave.score >= 50);
    }

    #[test]
    fn security_spec_favors_terahertz_systems() {
        let results = scorer().search("mail screening for explosives detection");
        assert_eq!(results[0].record.kind, ProductKind::Terahertz);
    }

    #[test]
    fn named_model_hits_score_heavily() {
        let results = scorer().search("quote for a Cobolt Samba please");
        // "Cobolt Samba" is a named model of both 04-01 and 05-01.
        assert_eq!(results[0].record_id(), "cobolt-04-01");
        assert!(results[0].score >= 25);
    }

    #[test]
    fn ceiling_is_configurable() {
        let default_scorer = scorer();
        let wide_scorer = RelevanceScorer::new(
            CatalogStore::new(),
            ScorerConfig { score_ceiling: 240 },
        );

        let spec = "532 nm laser with 100 mW for fluorescence microscopy";
        let default_top = default_scorer.search(spec)[0].score;
        let wide_top = wide_scorer.search(spec)[0].score;
        assert!(wide_top < default_top);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let upper = scorer().search("FLUORESCENCE MICROSCOPY AT 532 NM");
        let lower = scorer().search("fluorescence microscopy at 532 nm");
        assert_eq!(upper[0].record_id(), lower[0].record_id());
        assert_eq!(upper[0].score, lower[0].score);
    }
}
