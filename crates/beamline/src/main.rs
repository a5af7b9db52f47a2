// SPDX-FileCopyrightText: 2026 Beamline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Beamline - spec-to-proposal model router for photonics catalogs.
//!
//! This is the binary entry point. It wires configuration, the catalog
//! scorer, the complexity classifier, and the model router together and
//! prints results as JSON.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use beamline_catalog::{CatalogStore, MatchResult, RelevanceScorer};
use beamline_config::BeamlineConfig;
use beamline_cost::{ComparisonRow, report};
use beamline_openai::OpenAiClient;
use beamline_router::{
    Classification, HeuristicClassifier, LlmClassifier, ModelRouter, RoutingDecision,
    SpecClassifier,
};

/// Beamline - route photonics specifications to the right model tier.
#[derive(Parser, Debug)]
#[command(name = "beamline", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Score the catalog against a specification.
    Search {
        /// Free-text customer specification.
        spec: String,
    },
    /// Classify a specification's complexity.
    Classify {
        /// Free-text customer specification.
        spec: String,
        /// Delegate classification to the configured completion service.
        #[arg(long)]
        live: bool,
    },
    /// Classify, route, and score in one pass.
    Route {
        /// Free-text customer specification.
        spec: String,
        /// Delegate classification to the configured completion service.
        #[arg(long)]
        live: bool,
    },
}

/// Combined output of the `route` subcommand.
#[derive(Debug, Serialize)]
struct RouteOutput {
    classification: Classification,
    routing: RoutingDecision,
    matches: Vec<MatchResult>,
    /// What the classification call would have cost on every priced
    /// model.
    cost_comparison: Vec<ComparisonRow>,
}

fn classifier_for(config: &BeamlineConfig, live: bool) -> Box<dyn SpecClassifier> {
    if live {
        match OpenAiClient::new(&config.openai) {
            Ok(client) => {
                return Box::new(LlmClassifier::new(Arc::new(client), &config.openai));
            }
            Err(e) => {
                eprintln!("beamline: {e}");
                std::process::exit(1);
            }
        }
    }
    Box::new(HeuristicClassifier::new())
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("beamline: failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match beamline_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            beamline_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.agent.log_level.clone())),
        )
        .with_writer(std::io::stderr)
        .init();

    let scorer = RelevanceScorer::new(CatalogStore::new(), config.scorer.clone());

    match cli.command {
        Commands::Search { spec } => {
            print_json(&scorer.search(&spec));
        }
        Commands::Classify { spec, live } => {
            let classifier = classifier_for(&config, live);
            print_json(&classifier.classify(&spec).await);
        }
        Commands::Route { spec, live } => {
            let classifier = classifier_for(&config, live);
            let classification = classifier.classify(&spec).await;
            let routing = ModelRouter::new(config.routing.clone()).route(&classification);
            let matches = scorer.search(&spec);
            let cost_comparison = report::comparison_table(&classification.usage);
            print_json(&RouteOutput {
                classification,
                routing,
                matches,
                cost_comparison,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn heuristic_classifier_is_selected_without_live() {
        let config = BeamlineConfig::default();
        // No API key configured; the offline path must not exit.
        let classifier = classifier_for(&config, false);
        let result = classifier.classify("532 nm laser, 100 mw").await;
        assert!(result.error.is_none());
    }

    #[test]
    fn route_output_serializes() {
        let config = BeamlineConfig::default();
        let classifier = HeuristicClassifier::new();
        let classification = classifier.classify_text("532 nm laser with 100 mw");
        let routing = ModelRouter::new(config.routing.clone()).route(&classification);
        let scorer = RelevanceScorer::new(CatalogStore::new(), config.scorer.clone());

        let cost_comparison = report::comparison_table(&classification.usage);
        let output = RouteOutput {
            classification,
            routing,
            matches: scorer.search("532 nm laser with 100 mw"),
            cost_comparison,
        };

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["classification"]["tier"], "SIMPLE");
        assert_eq!(json["routing"]["model_id"], "gpt-5-nano");
        assert!(json["matches"].as_array().is_some_and(|m| !m.is_empty()));
        assert_eq!(json["cost_comparison"].as_array().unwrap().len(), 5);
    }
}
