//! # gpumart-normalize — Metric Normalizer
//!
//! Compares a listed GPU's benchmark against its peers:
//!
//! - **Normalize** (`normalize.rs`): polarity-aware 0–100 scoring against a
//!   best-known reference, reference derivation, and percentage deltas.
//!
//! - **Domain** (`domain.rs`): radial-axis auto-scaling for the radar chart.
//!
//! - **Radar** (`radar.rs`): the six-axis, three-series comparison chart.
//!
//! - **Cards** (`cards.rs`): the per-metric delta card grid.
//!
//! - **Format** (`format.rs`): display strings. Scores are rounded only
//!   here.
//!
//! Every operation is a synchronous pure function over numeric inputs.
//! Nothing in this crate performs I/O or holds shared state.

pub mod cards;
pub mod config;
pub mod domain;
pub mod format;
pub mod normalize;
pub mod radar;

pub use cards::{build_cards, MetricCard};
pub use config::{ConfigError, NormalizerConfig};
pub use domain::Domain;
pub use normalize::{
    compute_domain, derive_best_reference, normalize, percentage_delta, Normalizer,
    PercentageDelta,
};
pub use radar::{build_radar, RadarChart, RadarPoint};
