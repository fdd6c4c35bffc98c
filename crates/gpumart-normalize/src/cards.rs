//! # Metric Cards
//!
//! The grid of per-metric cards on the listing detail page. Each card shows
//! the measured value, the peer average, and a signed delta badge that is
//! highlighted when the GPU beats its peers.

use serde::{Deserialize, Serialize};

use gpumart_core::{
    AverageMetrics, Baseline, BenchmarkScore, Metric, MetricKind, MetricSample, NormalizeError,
};

use crate::format::{format_bandwidth, format_delta, format_flops, format_grouped};
use crate::normalize::{Normalizer, PercentageDelta};

/// Metrics shown as cards, in grid order.
pub const CARD_METRICS: [Metric; 12] = [
    Metric::Fp16Flops,
    Metric::Fp32Flops,
    Metric::Fp64Flops,
    Metric::TensorFlopsFp16,
    Metric::TensorFlopsBf16,
    Metric::TensorFlopsTf32,
    Metric::TensorFlopsFp8,
    Metric::TensorFlopsInt8,
    Metric::D2dMemBandwidth,
    Metric::AvgPwrDraw,
    Metric::MaxPwrDraw,
    Metric::AvgTemp,
];

/// One rendered metric card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub metric: Metric,
    pub title: String,
    pub value: f64,
    pub average: f64,
    /// Value with unit, e.g. `"82.6 TFLOPS"`.
    pub display_value: String,
    /// Average with unit, prefixed `"Avg: "`.
    pub display_average: String,
    pub delta: PercentageDelta,
    /// Badge text, e.g. `"+12.4%"`.
    pub delta_label: String,
}

fn unit(kind: MetricKind) -> &'static str {
    match kind {
        MetricKind::Throughput => "FLOPS",
        MetricKind::Bandwidth => "",
        MetricKind::Power => "W",
        MetricKind::Temperature => "°C",
    }
}

fn display(kind: MetricKind, value: f64) -> String {
    let number = match kind {
        MetricKind::Throughput => format_flops(value),
        MetricKind::Bandwidth => format_bandwidth(value),
        MetricKind::Power | MetricKind::Temperature => format_grouped(value),
    };
    format!("{number}{}", unit(kind))
}

/// Build a single card from a sample and its peer average.
pub fn build_card(
    normalizer: &Normalizer,
    sample: &MetricSample,
    baseline: &Baseline,
) -> Result<MetricCard, NormalizeError> {
    gpumart_core::sample::ensure_same_metric(sample, baseline, None)?;
    let metric = sample.metric;
    let delta = normalizer.percentage_delta(sample.value, baseline.value, sample.polarity())?;
    let kind = metric.kind();

    Ok(MetricCard {
        metric,
        title: metric.label().to_string(),
        value: sample.value,
        average: baseline.value,
        display_value: display(kind, sample.value),
        display_average: format!("Avg: {}", display(kind, baseline.value)),
        delta,
        delta_label: format_delta(delta.percentage),
    })
}

/// Build the full card grid for a listing.
pub fn build_cards(
    normalizer: &Normalizer,
    benchmark: &BenchmarkScore,
    averages: &AverageMetrics,
) -> Result<Vec<MetricCard>, NormalizeError> {
    let cards = CARD_METRICS
        .iter()
        .map(|m| build_card(normalizer, &benchmark.sample(*m), &averages.baseline(*m)))
        .collect::<Result<Vec<_>, _>>()?;

    let above = cards.iter().filter(|c| c.delta.is_above_average).count();
    tracing::debug!(cards = cards.len(), above_average = above, "built metric cards");
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(metric: Metric, value: f64, average: f64) -> MetricCard {
        build_card(
            &Normalizer::default(),
            &MetricSample::new(metric, value),
            &Baseline::new(metric, average),
        )
        .unwrap()
    }

    #[test]
    fn test_throughput_card() {
        let c = card(Metric::Fp32Flops, 82.6e12, 75e12);
        assert_eq!(c.title, "FP32 Performance");
        assert_eq!(c.display_value, "82.6 TFLOPS");
        assert_eq!(c.display_average, "Avg: 75.0 TFLOPS");
        assert!(c.delta.is_above_average);
        assert_eq!(c.delta_label, "+10.1%");
    }

    #[test]
    fn test_bandwidth_card_has_no_extra_unit() {
        let c = card(Metric::D2dMemBandwidth, 1008e9, 1000e9);
        assert_eq!(c.display_value, "1008.0GB/s");
    }

    #[test]
    fn test_power_card_lower_is_better() {
        let c = card(Metric::MaxPwrDraw, 400.0, 450.0);
        assert_eq!(c.display_value, "400W");
        assert_eq!(c.delta_label, "-11.1%");
        assert!(c.delta.is_above_average);
    }

    #[test]
    fn test_temperature_card_hotter_than_peers() {
        let c = card(Metric::AvgTemp, 72.0, 68.0);
        assert_eq!(c.display_value, "72°C");
        assert!(!c.delta.is_above_average);
    }

    #[test]
    fn test_zero_average_is_configuration_error() {
        let err = build_card(
            &Normalizer::default(),
            &MetricSample::new(Metric::Fp64Flops, 1.0),
            &Baseline::new(Metric::Fp64Flops, 0.0),
        )
        .unwrap_err();
        assert!(matches!(err, NormalizeError::Configuration(_)));
    }

    #[test]
    fn test_card_metrics_unique() {
        let mut seen = std::collections::HashSet::new();
        for m in CARD_METRICS {
            assert!(seen.insert(m), "duplicate card {m}");
        }
    }
}
