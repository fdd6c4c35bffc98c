//! # Comparison Value Objects
//!
//! A measured sample, its peer-average baseline, an optional best-known
//! reference, and the normalized percentage produced from them. All are
//! plain `Copy` values built fresh for each render.

use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;
use crate::metric::{Metric, Polarity};

/// A single raw measurement of one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    pub metric: Metric,
    pub value: f64,
}

impl MetricSample {
    pub fn new(metric: Metric, value: f64) -> Self {
        Self { metric, value }
    }

    /// Column name of the measured metric.
    pub fn name(&self) -> &'static str {
        self.metric.as_str()
    }

    pub fn polarity(&self) -> Polarity {
        self.metric.polarity()
    }
}

/// Peer-average value for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub metric: Metric,
    pub value: f64,
}

impl Baseline {
    pub fn new(metric: Metric, value: f64) -> Self {
        Self { metric, value }
    }
}

/// Best observed value for a metric, treated as the 100% mark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub metric: Metric,
    pub value: f64,
}

impl ReferencePoint {
    pub fn new(metric: Metric, value: f64) -> Self {
        Self { metric, value }
    }
}

/// Which plotted series a normalized score belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Series {
    /// The listed GPU.
    Current,
    /// The peer average for the same model.
    Average,
    /// The best known value for the model.
    Best,
}

impl Series {
    pub fn all() -> &'static [Series] {
        &[Self::Current, Self::Average, Self::Best]
    }

    /// Legend label for the series.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Current => "This GPU",
            Self::Average => "Average",
            Self::Best => "Best",
        }
    }
}

/// A metric's position on a 0–100 scale for one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedScore {
    pub metric: Metric,
    pub series: Series,
    pub percentage: f64,
}

/// Check that a sample, its baseline, and an optional reference all
/// describe the same metric.
pub fn ensure_same_metric(
    sample: &MetricSample,
    baseline: &Baseline,
    reference: Option<&ReferencePoint>,
) -> Result<(), NormalizeError> {
    if sample.metric != baseline.metric {
        return Err(NormalizeError::InvalidArgument(format!(
            "baseline for {} paired with sample of {}",
            baseline.metric, sample.metric
        )));
    }
    match reference {
        Some(r) if r.metric != sample.metric => Err(NormalizeError::InvalidArgument(format!(
            "reference for {} paired with sample of {}",
            r.metric, sample.metric
        ))),
        _ => Ok(()),
    }
}
