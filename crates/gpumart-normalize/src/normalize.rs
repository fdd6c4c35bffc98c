//! # Metric Normalizer
//!
//! Turns raw benchmark measurements into comparable 0–100 scores.
//!
//! ## Scoring
//!
//! ```text
//! higher_is_better:  score = min(100, value / best * 100)
//! lower_is_better:   range = best * worst_case_multiple
//!                    score = clamp((range - value) / (range - best) * 100, 0, 100)
//! ```
//!
//! Values past a higher-is-better reference are capped at 100 rather than
//! stretching the chart. A lower-is-better metric scores 100 at the
//! reference and 0 at `worst_case_multiple` times it.
//!
//! When the caller has no best-known value the reference is derived from
//! the sample and its peer average with the configured headroom.
//!
//! ## Error Policy
//!
//! Zero denominators are reported as [`NormalizeError::Configuration`];
//! non-finite or negative measurements as
//! [`NormalizeError::InvalidArgument`]. Nothing here returns `NaN`.

use serde::{Deserialize, Serialize};

use gpumart_core::sample::ensure_same_metric;
use gpumart_core::{
    Baseline, MetricSample, NormalizeError, NormalizedScore, Polarity, ReferencePoint, Series,
};

use crate::config::NormalizerConfig;
use crate::domain::Domain;

/// Relative deviation of a sample from its peer average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageDelta {
    /// `(value - baseline) / baseline * 100`. Unbounded.
    pub percentage: f64,
    /// Whether the deviation is in the desirable direction.
    pub is_above_average: bool,
}

/// Polarity-aware scorer holding a validated [`NormalizerConfig`].
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    /// Create a normalizer, rejecting an inconsistent configuration.
    pub fn new(config: NormalizerConfig) -> Result<Self, NormalizeError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Score `value` against `reference_best` on a 0–100 scale.
    pub fn normalize(
        &self,
        value: f64,
        reference_best: f64,
        polarity: Polarity,
    ) -> Result<f64, NormalizeError> {
        let value = NormalizeError::check_measurement("value", value)?;
        let reference = NormalizeError::check_finite("reference_best", reference_best)?;

        match polarity {
            Polarity::HigherIsBetter => {
                if reference == 0.0 {
                    // Nothing can be scored against a zero ceiling.
                    return Ok(0.0);
                }
                Ok((value / reference * 100.0).clamp(0.0, 100.0))
            }
            Polarity::LowerIsBetter => {
                if reference == 0.0 {
                    return Err(NormalizeError::Configuration(
                        "lower-is-better reference must be non-zero".to_string(),
                    ));
                }
                // (range - value) / (range - reference) with range = reference * m,
                // divided through by the reference so huge references cannot overflow.
                let multiple = self.config.worst_case_multiple;
                let score = (multiple - value / reference) / (multiple - 1.0) * 100.0;
                Ok(score.clamp(0.0, 100.0))
            }
        }
    }

    /// Derive a best-known reference from a sample and its peer average.
    pub fn derive_best_reference(
        &self,
        current: f64,
        average: f64,
        polarity: Polarity,
    ) -> Result<f64, NormalizeError> {
        let current = NormalizeError::check_measurement("current", current)?;
        let average = NormalizeError::check_measurement("average", average)?;

        Ok(match polarity {
            Polarity::HigherIsBetter => current.max(average) * self.config.higher_headroom,
            Polarity::LowerIsBetter => current.min(average) * self.config.lower_headroom,
        })
    }

    /// Fit a chart domain to every plotted score.
    pub fn compute_domain(&self, scores: &[f64]) -> Result<Domain, NormalizeError> {
        Domain::fit(scores, &self.config)
    }

    /// Deviation of `value` from `baseline` as a percentage of the baseline.
    pub fn percentage_delta(
        &self,
        value: f64,
        baseline: f64,
        polarity: Polarity,
    ) -> Result<PercentageDelta, NormalizeError> {
        let value = NormalizeError::check_measurement("value", value)?;
        let baseline = NormalizeError::check_measurement("baseline", baseline)?;
        if baseline == 0.0 {
            return Err(NormalizeError::Configuration(
                "baseline must be non-zero".to_string(),
            ));
        }

        let percentage = (value - baseline) / baseline * 100.0;
        let is_above_average = match polarity {
            Polarity::HigherIsBetter => percentage > 0.0,
            Polarity::LowerIsBetter => percentage < 0.0,
        };
        Ok(PercentageDelta {
            percentage,
            is_above_average,
        })
    }

    /// Score a sample and its baseline against one reference, deriving the
    /// reference when none is supplied.
    ///
    /// Returns the reference actually used alongside the scores in
    /// [`Series::all`] order. The best series is pinned at 100: it is the
    /// reference itself, whatever its raw value.
    pub fn score(
        &self,
        sample: &MetricSample,
        baseline: &Baseline,
        reference: Option<&ReferencePoint>,
    ) -> Result<(f64, [NormalizedScore; 3]), NormalizeError> {
        ensure_same_metric(sample, baseline, reference)?;
        let polarity = sample.polarity();
        let best = match reference {
            Some(r) => r.value,
            None => self.derive_best_reference(sample.value, baseline.value, polarity)?,
        };

        let scored = |series: Series, percentage: f64| NormalizedScore {
            metric: sample.metric,
            series,
            percentage,
        };
        Ok((
            best,
            [
                scored(Series::Current, self.normalize(sample.value, best, polarity)?),
                scored(Series::Average, self.normalize(baseline.value, best, polarity)?),
                scored(Series::Best, 100.0),
            ],
        ))
    }
}

/// [`Normalizer::normalize`] with the default configuration.
pub fn normalize(value: f64, reference_best: f64, polarity: Polarity) -> Result<f64, NormalizeError> {
    Normalizer::default().normalize(value, reference_best, polarity)
}

/// [`Normalizer::derive_best_reference`] with the default configuration.
pub fn derive_best_reference(
    current: f64,
    average: f64,
    polarity: Polarity,
) -> Result<f64, NormalizeError> {
    Normalizer::default().derive_best_reference(current, average, polarity)
}

/// [`Normalizer::compute_domain`] with the default configuration.
pub fn compute_domain(scores: &[f64]) -> Result<Domain, NormalizeError> {
    Normalizer::default().compute_domain(scores)
}

/// [`Normalizer::percentage_delta`] with the default configuration.
pub fn percentage_delta(
    value: f64,
    baseline: f64,
    polarity: Polarity,
) -> Result<PercentageDelta, NormalizeError> {
    Normalizer::default().percentage_delta(value, baseline, polarity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpumart_core::Metric;

    const HIGHER: Polarity = Polarity::HigherIsBetter;
    const LOWER: Polarity = Polarity::LowerIsBetter;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // ---- normalize ----

    #[test]
    fn test_higher_at_reference_is_hundred() {
        assert_eq!(normalize(108e12, 108e12, HIGHER).unwrap(), 100.0);
    }

    #[test]
    fn test_higher_caps_above_reference() {
        assert_eq!(normalize(150.0, 100.0, HIGHER).unwrap(), 100.0);
    }

    #[test]
    fn test_higher_proportional() {
        assert!(approx(normalize(45.0, 90.0, HIGHER).unwrap(), 50.0));
        assert_eq!(normalize(0.0, 90.0, HIGHER).unwrap(), 0.0);
    }

    #[test]
    fn test_higher_zero_reference_scores_zero() {
        assert_eq!(normalize(0.0, 0.0, HIGHER).unwrap(), 0.0);
        assert_eq!(normalize(5.0, 0.0, HIGHER).unwrap(), 0.0);
    }

    #[test]
    fn test_lower_at_reference_is_hundred() {
        assert_eq!(normalize(62.4, 62.4, LOWER).unwrap(), 100.0);
    }

    #[test]
    fn test_lower_at_worst_case_is_zero() {
        assert_eq!(normalize(200.0, 100.0, LOWER).unwrap(), 0.0);
        assert_eq!(normalize(500.0, 100.0, LOWER).unwrap(), 0.0);
    }

    #[test]
    fn test_lower_below_reference_clamped() {
        assert_eq!(normalize(10.0, 100.0, LOWER).unwrap(), 100.0);
    }

    #[test]
    fn test_lower_midpoint() {
        assert!(approx(normalize(150.0, 100.0, LOWER).unwrap(), 50.0));
    }

    #[test]
    fn test_lower_zero_reference_is_configuration_error() {
        let err = normalize(10.0, 0.0, LOWER).unwrap_err();
        assert!(matches!(err, NormalizeError::Configuration(_)));
    }

    #[test]
    fn test_lower_huge_reference_stays_in_range() {
        let score = normalize(1.0, 1e308, LOWER).unwrap();
        assert_eq!(score, 100.0);
        let score = normalize(f64::MAX, 1e308, LOWER).unwrap();
        assert!((0.0..=100.0).contains(&score));
        assert!(normalize(f64::MAX, 1e-300, LOWER).unwrap() == 0.0);
    }

    #[test]
    fn test_negative_value_rejected() {
        let err = normalize(-1.0, 10.0, HIGHER).unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidArgument(_)));
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        assert!(normalize(f64::NAN, 10.0, HIGHER).is_err());
        assert!(normalize(1.0, f64::INFINITY, LOWER).is_err());
    }

    // ---- derive_best_reference ----

    #[test]
    fn test_derive_higher_uses_max_with_headroom() {
        let best = derive_best_reference(90e12, 75e12, HIGHER).unwrap();
        assert!((best - 108e12).abs() < 1.0);
    }

    #[test]
    fn test_derive_lower_uses_min_with_headroom() {
        let best = derive_best_reference(78.0, 82.0, LOWER).unwrap();
        assert!(approx(best, 62.4));
    }

    #[test]
    fn test_derive_zero_inputs() {
        assert_eq!(derive_best_reference(0.0, 0.0, HIGHER).unwrap(), 0.0);
        assert_eq!(derive_best_reference(0.0, 0.0, LOWER).unwrap(), 0.0);
    }

    #[test]
    fn test_derive_respects_config() {
        let n = Normalizer::new(NormalizerConfig {
            higher_headroom: 1.5,
            ..Default::default()
        })
        .unwrap();
        assert!(approx(n.derive_best_reference(10.0, 20.0, HIGHER).unwrap(), 30.0));
    }

    // ---- percentage_delta ----

    #[test]
    fn test_delta_higher_above_average() {
        let d = percentage_delta(120.0, 100.0, HIGHER).unwrap();
        assert!(approx(d.percentage, 20.0));
        assert!(d.is_above_average);
    }

    #[test]
    fn test_delta_lower_below_average_is_good() {
        let d = percentage_delta(80.0, 100.0, LOWER).unwrap();
        assert!(approx(d.percentage, -20.0));
        assert!(d.is_above_average);
    }

    #[test]
    fn test_delta_unbounded() {
        let d = percentage_delta(350.0, 100.0, HIGHER).unwrap();
        assert!(approx(d.percentage, 250.0));
        let d = percentage_delta(350.0, 100.0, LOWER).unwrap();
        assert!(!d.is_above_average);
    }

    #[test]
    fn test_delta_equal_is_not_above() {
        assert!(!percentage_delta(100.0, 100.0, HIGHER).unwrap().is_above_average);
        assert!(!percentage_delta(100.0, 100.0, LOWER).unwrap().is_above_average);
    }

    #[test]
    fn test_delta_zero_baseline_is_configuration_error() {
        let err = percentage_delta(10.0, 0.0, HIGHER).unwrap_err();
        assert!(matches!(err, NormalizeError::Configuration(_)));
    }

    // ---- score ----

    #[test]
    fn test_score_derives_reference() {
        let n = Normalizer::default();
        let (reference, [current, average, best]) = n
            .score(
                &MetricSample::new(Metric::MaxTemp, 78.0),
                &Baseline::new(Metric::MaxTemp, 82.0),
                None,
            )
            .unwrap();
        assert!(approx(reference, 62.4));
        assert!((current.percentage - 75.0).abs() < 1e-6);
        assert!(average.percentage < current.percentage);
        assert_eq!(best.percentage, 100.0);
        assert_eq!(best.series, Series::Best);
        assert_eq!(current.metric, Metric::MaxTemp);
    }

    #[test]
    fn test_score_uses_supplied_reference() {
        let n = Normalizer::default();
        let (reference, [current, average, _]) = n
            .score(
                &MetricSample::new(Metric::Fp32Flops, 50.0),
                &Baseline::new(Metric::Fp32Flops, 25.0),
                Some(&ReferencePoint::new(Metric::Fp32Flops, 100.0)),
            )
            .unwrap();
        assert_eq!(reference, 100.0);
        assert!(approx(current.percentage, 50.0));
        assert!(approx(average.percentage, 25.0));
    }

    #[test]
    fn test_score_rejects_mismatched_metrics() {
        let n = Normalizer::default();
        let err = n
            .score(
                &MetricSample::new(Metric::Fp32Flops, 50.0),
                &Baseline::new(Metric::Fp16Flops, 25.0),
                None,
            )
            .unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidArgument(_)));
    }

    #[test]
    fn test_score_zero_lower_reference_surfaces_error() {
        let n = Normalizer::default();
        let result = n.score(
            &MetricSample::new(Metric::MaxPwrDraw, 0.0),
            &Baseline::new(Metric::MaxPwrDraw, 0.0),
            None,
        );
        assert!(matches!(result, Err(NormalizeError::Configuration(_))));
    }

    #[test]
    fn test_score_best_is_hundred_for_zero_supplied_reference() {
        let n = Normalizer::default();
        let (_, [current, average, best]) = n
            .score(
                &MetricSample::new(Metric::Fp32Flops, 50.0),
                &Baseline::new(Metric::Fp32Flops, 25.0),
                Some(&ReferencePoint::new(Metric::Fp32Flops, 0.0)),
            )
            .unwrap();
        assert_eq!(current.percentage, 0.0);
        assert_eq!(average.percentage, 0.0);
        assert_eq!(best.percentage, 100.0);
    }

    #[test]
    fn test_score_accepts_negative_lower_reference() {
        let n = Normalizer::default();
        let (reference, [current, average, best]) = n
            .score(
                &MetricSample::new(Metric::MaxTemp, 78.0),
                &Baseline::new(Metric::MaxTemp, 82.0),
                Some(&ReferencePoint::new(Metric::MaxTemp, -5.0)),
            )
            .unwrap();
        assert_eq!(reference, -5.0);
        for score in [current, average, best] {
            assert!((0.0..=100.0).contains(&score.percentage));
        }
        assert_eq!(best.percentage, 100.0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = NormalizerConfig {
            domain_step: 0,
            ..Default::default()
        };
        assert!(Normalizer::new(config).is_err());
    }
}
