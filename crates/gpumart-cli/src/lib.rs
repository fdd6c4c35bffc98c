//! # gpumart-cli — GPU Marketplace Command-Line Interface
//!
//! Offline access to the comparison views and the listing browser.
//!
//! ## Subcommands
//!
//! - `radar` — Six-axis radar comparison with auto-scaled domain
//! - `cards` — Per-metric delta cards against the peer average
//! - `listings` — Filter and sort a listings export
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `gpumart-normalize` and `gpumart-core`.
//! - All output is JSON on stdout; diagnostics go through `tracing`.

pub mod compare;
pub mod input;
pub mod listings;
