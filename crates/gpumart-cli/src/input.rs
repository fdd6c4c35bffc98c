//! # Input Loading
//!
//! Reads benchmark exports and normalizer configuration from disk. Files
//! ending in `.yaml` or `.yml` are parsed as YAML; everything else as JSON.

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use gpumart_core::{AverageMetrics, BenchmarkScore, BestMetrics};
use gpumart_normalize::{Normalizer, NormalizerConfig};

/// A listing's benchmark row, the peer averages for its model, and
/// optionally the best known values for the radar axes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonInput {
    pub benchmark: BenchmarkScore,
    pub averages: AverageMetrics,
    #[serde(default)]
    pub best: Option<BestMetrics>,
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Load a JSON or YAML document into `T`.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    if is_yaml(path) {
        serde_yaml::from_str(&content).with_context(|| format!("parsing YAML {}", path.display()))
    } else {
        serde_json::from_str(&content).with_context(|| format!("parsing JSON {}", path.display()))
    }
}

/// Build a normalizer from an optional YAML config file.
pub fn load_normalizer(config: Option<&Path>) -> Result<Normalizer> {
    let config = match config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading normalizer config {}", path.display()))?;
            NormalizerConfig::from_yaml_str(&content)
                .with_context(|| format!("loading normalizer config {}", path.display()))?
        }
        None => NormalizerConfig::default(),
    };
    tracing::debug!(?config, "normalizer configuration");
    Normalizer::new(config).context("building normalizer")
}
