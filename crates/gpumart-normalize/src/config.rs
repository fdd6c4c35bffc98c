//! # Normalizer Configuration
//!
//! Tunables for reference derivation and domain auto-scaling. Every field
//! has a serde default, so an empty YAML document yields the stock
//! configuration used by the listing detail page.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use gpumart_core::NormalizeError;

/// Configuration for [`crate::Normalizer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Multiplier applied to `max(current, average)` when deriving a
    /// higher-is-better reference.
    #[serde(default = "default_higher_headroom")]
    pub higher_headroom: f64,
    /// Multiplier applied to `min(current, average)` when deriving a
    /// lower-is-better reference.
    #[serde(default = "default_lower_headroom")]
    pub lower_headroom: f64,
    /// Lower-is-better values at this multiple of the reference score 0.
    #[serde(default = "default_worst_case_multiple")]
    pub worst_case_multiple: f64,
    /// Domain bounds snap to multiples of this step. Must divide 100.
    #[serde(default = "default_domain_step")]
    pub domain_step: u32,
    /// Smallest padding added on each side of the domain.
    #[serde(default = "default_min_padding")]
    pub min_padding: f64,
    /// Padding as a share of the score spread.
    #[serde(default = "default_padding_ratio")]
    pub padding_ratio: f64,
}

fn default_higher_headroom() -> f64 {
    1.2
}

fn default_lower_headroom() -> f64 {
    0.8
}

fn default_worst_case_multiple() -> f64 {
    2.0
}

fn default_domain_step() -> u32 {
    5
}

fn default_min_padding() -> f64 {
    5.0
}

fn default_padding_ratio() -> f64 {
    0.1
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            higher_headroom: default_higher_headroom(),
            lower_headroom: default_lower_headroom(),
            worst_case_multiple: default_worst_case_multiple(),
            domain_step: default_domain_step(),
            min_padding: default_min_padding(),
            padding_ratio: default_padding_ratio(),
        }
    }
}

/// Failure to load a [`NormalizerConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document is not valid YAML for this shape.
    #[error("failed to parse normalizer config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The document parsed but holds inconsistent values.
    #[error(transparent)]
    Invalid(#[from] NormalizeError),
}

impl NormalizerConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the tunables keep scores and domains inside `[0, 100]`.
    pub fn validate(&self) -> Result<(), NormalizeError> {
        fn invalid(msg: String) -> Result<(), NormalizeError> {
            Err(NormalizeError::Configuration(msg))
        }

        if !self.higher_headroom.is_finite() || self.higher_headroom < 1.0 {
            return invalid(format!(
                "higher_headroom must be >= 1.0, got {}",
                self.higher_headroom
            ));
        }
        if !self.lower_headroom.is_finite()
            || self.lower_headroom <= 0.0
            || self.lower_headroom > 1.0
        {
            return invalid(format!(
                "lower_headroom must be in (0, 1], got {}",
                self.lower_headroom
            ));
        }
        if !self.worst_case_multiple.is_finite() || self.worst_case_multiple <= 1.0 {
            return invalid(format!(
                "worst_case_multiple must be > 1.0, got {}",
                self.worst_case_multiple
            ));
        }
        if self.domain_step == 0 || self.domain_step > 100 || 100 % self.domain_step != 0 {
            return invalid(format!(
                "domain_step must divide 100, got {}",
                self.domain_step
            ));
        }
        if !self.min_padding.is_finite() || self.min_padding < 0.0 {
            return invalid(format!(
                "min_padding must be >= 0, got {}",
                self.min_padding
            ));
        }
        if !self.padding_ratio.is_finite() || self.padding_ratio < 0.0 {
            return invalid(format!(
                "padding_ratio must be >= 0, got {}",
                self.padding_ratio
            ));
        }
        Ok(())
    }
}
