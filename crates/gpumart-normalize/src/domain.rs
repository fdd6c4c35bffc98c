//! # Chart Domain
//!
//! Auto-scaling of the radar chart's radial axis. The domain is fitted to
//! every plotted score with a little padding and snapped outward to the
//! configured step, so the shapes fill the chart without clipping.
//!
//! ```text
//! min_raw = floor(min(scores))      max_raw = floor(max(scores))
//! padding = max(min_padding, (max_raw - min_raw) * padding_ratio)
//! min     = floor(max(0,   min_raw - padding) / step) * step
//! max     = ceil (min(100, max_raw + padding) / step) * step
//! ```

use serde::{Deserialize, Serialize};

use gpumart_core::NormalizeError;

use crate::config::NormalizerConfig;

/// Integer percentage bounds of a chart axis.
///
/// Always satisfies `0 <= min <= max <= 100` with both bounds multiples of
/// the configured step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Domain {
    pub min: u32,
    pub max: u32,
}

impl Domain {
    /// Fit a domain around a non-empty set of percentages in `[0, 100]`.
    pub fn fit(scores: &[f64], config: &NormalizerConfig) -> Result<Self, NormalizeError> {
        if scores.is_empty() {
            return Err(NormalizeError::InvalidArgument(
                "cannot fit a domain to an empty score sequence".to_string(),
            ));
        }
        if let Some(bad) = scores
            .iter()
            .find(|s| !s.is_finite() || **s < 0.0 || **s > 100.0)
        {
            return Err(NormalizeError::InvalidArgument(format!(
                "scores must lie in [0, 100], got {bad}"
            )));
        }

        let (lowest, highest) = scores
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
                (lo.min(*s), hi.max(*s))
            });
        let min_raw = lowest.floor();
        let max_raw = highest.floor();
        let padding = config
            .min_padding
            .max((max_raw - min_raw) * config.padding_ratio);
        let step = f64::from(config.domain_step);

        let min = ((min_raw - padding).max(0.0) / step).floor() * step;
        let max = ((max_raw + padding).min(100.0) / step).ceil() * step;

        // Both values are whole multiples of step inside [0, 100].
        Ok(Self {
            min: min as u32,
            max: max as u32,
        })
    }

    /// Distance between the bounds in percentage points.
    pub fn width(&self) -> u32 {
        self.max - self.min
    }

    pub fn contains(&self, score: f64) -> bool {
        score >= f64::from(self.min) && score <= f64::from(self.max)
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}% - {}%", self.min, self.max)
    }
}
