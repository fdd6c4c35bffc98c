//! # gpumart-core — Foundational Types for the GPU Marketplace
//!
//! Defines the value objects shared by every other crate in the workspace:
//! the benchmark metric vocabulary, benchmark and peer-average rows, the
//! comparison value objects fed to the normalizer, and listing entities.
//!
//! ## Key Design Principles
//!
//! 1. **Single `Metric` enum.** One definition of the 15 benchmark metrics,
//!    each with a fixed `Polarity`. Exhaustive `match` everywhere.
//!
//! 2. **Typed comparison inputs.** `MetricSample`, `Baseline` and
//!    `ReferencePoint` carry their metric, so a power baseline cannot be
//!    paired with a throughput sample unnoticed.
//!
//! 3. **Errors, not NaN.** Zero denominators and non-finite measurements
//!    become `NormalizeError` values instead of leaking into a chart.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `gpumart-*` crates (this is the leaf of the DAG).
//! - No I/O, no `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod benchmark;
pub mod error;
pub mod listing;
pub mod metric;
pub mod sample;

// Re-export primary types for ergonomic imports.
pub use benchmark::{AverageMetrics, BenchmarkScore, BestMetrics};
pub use error::{GpumartError, NormalizeError};
pub use listing::{
    filter_listings, GpuDetails, GpuListing, ListingCard, ListingFilter, ListingStatus, Price,
    Seller, SortOrder,
};
pub use metric::{Metric, MetricKind, Polarity, METRIC_COUNT};
pub use sample::{Baseline, MetricSample, NormalizedScore, ReferencePoint, Series};
