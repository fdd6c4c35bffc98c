//! # Radar and Cards Subcommands
//!
//! Render the listing-detail comparison views as JSON.
//!
//! ## Usage
//!
//! ```bash
//! gpumart radar listing-42.json
//! gpumart cards listing-42.yaml --config normalizer.yaml
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use gpumart_normalize::{build_cards, build_radar, Normalizer};

use crate::input::{load_document, ComparisonInput};

/// Arguments shared by the `radar` and `cards` subcommands.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Path to a JSON or YAML file with `benchmark`, `averages` and an
    /// optional `best` section.
    pub input: PathBuf,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    pub compact: bool,
}

fn to_json<T: serde::Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    json.context("serializing output")
}

/// Render the radar chart for an input file.
pub fn render_radar(args: &CompareArgs, normalizer: &Normalizer) -> Result<String> {
    let input: ComparisonInput = load_document(&args.input)?;
    let chart = build_radar(
        normalizer,
        &input.benchmark,
        &input.averages,
        input.best.as_ref(),
    )
    .with_context(|| format!("scoring radar for {}", args.input.display()))?;
    tracing::info!(domain = %chart.domain, "radar chart ready");
    to_json(&chart, args.compact)
}

/// Render the metric card grid for an input file.
pub fn render_cards(args: &CompareArgs, normalizer: &Normalizer) -> Result<String> {
    let input: ComparisonInput = load_document(&args.input)?;
    let cards = build_cards(normalizer, &input.benchmark, &input.averages)
        .with_context(|| format!("building metric cards for {}", args.input.display()))?;
    tracing::info!(cards = cards.len(), "metric cards ready");
    to_json(&cards, args.compact)
}

/// Execute the `radar` subcommand.
pub fn run_radar(args: &CompareArgs, normalizer: &Normalizer) -> Result<u8> {
    println!("{}", render_radar(args, normalizer)?);
    Ok(0)
}

/// Execute the `cards` subcommand.
pub fn run_cards(args: &CompareArgs, normalizer: &Normalizer) -> Result<u8> {
    println!("{}", render_cards(args, normalizer)?);
    Ok(0)
}
