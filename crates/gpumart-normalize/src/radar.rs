//! # Radar Comparison View
//!
//! Builds the "Relative Performance" radar chart for a listing: six axes,
//! three series (this GPU, the peer average, the best known value), and an
//! auto-scaled radial domain fitted to all eighteen scores.
//!
//! Each axis is scored against the caller's [`BestMetrics`] entry when one
//! is supplied, otherwise against a reference derived from the sample and
//! its peer average.

use serde::{Deserialize, Serialize};

use gpumart_core::{
    AverageMetrics, BenchmarkScore, BestMetrics, Metric, NormalizeError, NormalizedScore, Series,
};

use crate::domain::Domain;
use crate::format::{format_domain_caption, format_percent};
use crate::normalize::Normalizer;

/// The radar axes in plotting order, with their chart labels.
pub const RADAR_AXES: [(Metric, &str); 6] = [
    (Metric::Fp32Flops, "FP32 FLOPS"),
    (Metric::Fp16Flops, "FP16 FLOPS"),
    (Metric::TensorFlopsFp16, "Tensor FLOPS"),
    (Metric::D2dMemBandwidth, "Memory BW"),
    (Metric::MaxPwrDraw, "Power Efficiency"),
    (Metric::MaxTemp, "Thermal Efficiency"),
];

/// One axis of the radar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub metric: Metric,
    pub label: String,
    pub current: f64,
    pub average: f64,
    pub best: f64,
    /// Raw reference value the axis was scored against.
    pub reference: f64,
    /// True when the reference was derived rather than supplied.
    pub reference_derived: bool,
}

impl RadarPoint {
    /// Tooltip text for each series, truncated to whole percentages.
    pub fn tooltips(&self) -> [String; 3] {
        [
            format_percent(self.current),
            format_percent(self.average),
            format_percent(self.best),
        ]
    }
}

/// A fully scored radar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChart {
    pub points: Vec<RadarPoint>,
    pub domain: Domain,
    pub caption: String,
    /// Series legend labels in plotting order.
    pub legend: Vec<String>,
}

impl RadarChart {
    /// Every plotted score, axis by axis, in current/average/best order.
    pub fn scores(&self) -> Vec<NormalizedScore> {
        self.points
            .iter()
            .flat_map(|p| {
                Series::all()
                    .iter()
                    .zip([p.current, p.average, p.best])
                    .map(|(series, percentage)| NormalizedScore {
                        metric: p.metric,
                        series: *series,
                        percentage,
                    })
            })
            .collect()
    }
}

/// Score the six radar axes and fit the chart domain.
pub fn build_radar(
    normalizer: &Normalizer,
    benchmark: &BenchmarkScore,
    averages: &AverageMetrics,
    best: Option<&BestMetrics>,
) -> Result<RadarChart, NormalizeError> {
    let mut points = Vec::with_capacity(RADAR_AXES.len());

    for (metric, label) in RADAR_AXES {
        let sample = benchmark.sample(metric);
        let baseline = averages.baseline(metric);
        let reference = best.and_then(|b| b.reference(metric));

        let (reference_value, [current, average, best_score]) =
            normalizer.score(&sample, &baseline, reference.as_ref())?;

        tracing::trace!(
            metric = sample.name(),
            current = current.percentage,
            average = average.percentage,
            reference = reference_value,
            derived = reference.is_none(),
            "scored radar axis"
        );

        points.push(RadarPoint {
            metric,
            label: label.to_string(),
            current: current.percentage,
            average: average.percentage,
            best: best_score.percentage,
            reference: reference_value,
            reference_derived: reference.is_none(),
        });
    }

    let all_scores: Vec<f64> = points
        .iter()
        .flat_map(|p| [p.current, p.average, p.best])
        .collect();
    let domain = normalizer.compute_domain(&all_scores)?;
    tracing::debug!(
        min = domain.min,
        max = domain.max,
        width = domain.width(),
        supplied_best = best.is_some(),
        "built radar chart"
    );

    Ok(RadarChart {
        points,
        caption: format_domain_caption(&domain),
        domain,
        legend: Series::all().iter().map(|s| s.label().to_string()).collect(),
    })
}
