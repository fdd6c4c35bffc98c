//! # Benchmark Metric — Single Source of Truth
//!
//! Defines the `Metric` enum with all 15 benchmark measurements recorded for
//! a listed GPU, and the `Polarity` that says whether a higher or lower raw
//! value is better. Every `match` on `Metric` is exhaustive, so adding a
//! measurement forces every view builder to decide how to present it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GpumartError;

/// Whether a higher or lower raw value is considered better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Throughput and bandwidth: more is better.
    HigherIsBetter,
    /// Power draw and temperature: less is better.
    LowerIsBetter,
}

impl Polarity {
    /// Returns the snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HigherIsBetter => "higher_is_better",
            Self::LowerIsBetter => "lower_is_better",
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All benchmark metrics recorded by the GPU benchmark run.
///
/// | # | Metric | Polarity | Unit |
/// |---|--------|----------|------|
/// |  1 | fp16_flops | higher | FLOPS |
/// |  2 | fp32_flops | higher | FLOPS |
/// |  3 | fp64_flops | higher | FLOPS |
/// |  4 | tensor_flops_fp16 | higher | FLOPS |
/// |  5 | tensor_flops_bf16 | higher | FLOPS |
/// |  6 | tensor_flops_tf32 | higher | FLOPS |
/// |  7 | tensor_flops_int8 | higher | OPS |
/// |  8 | tensor_flops_fp8 | higher | FLOPS |
/// |  9 | d2d_mem_bandwidth | higher | bytes/s |
/// | 10 | d2h_mem_bandwidth | higher | bytes/s |
/// | 11 | h2d_mem_bandwidth | higher | bytes/s |
/// | 12 | avg_pwr_draw | lower | W |
/// | 13 | max_pwr_draw | lower | W |
/// | 14 | avg_temp | lower | °C |
/// | 15 | max_temp | lower | °C |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Half-precision throughput.
    Fp16Flops,
    /// Single-precision throughput.
    Fp32Flops,
    /// Double-precision throughput.
    Fp64Flops,
    /// Tensor-core throughput, FP16 inputs.
    TensorFlopsFp16,
    /// Tensor-core throughput, BF16 inputs.
    TensorFlopsBf16,
    /// Tensor-core throughput, TF32 inputs.
    TensorFlopsTf32,
    /// Tensor-core throughput, INT8 inputs.
    TensorFlopsInt8,
    /// Tensor-core throughput, FP8 inputs.
    TensorFlopsFp8,
    /// Device-to-device memory bandwidth.
    D2dMemBandwidth,
    /// Device-to-host memory bandwidth.
    D2hMemBandwidth,
    /// Host-to-device memory bandwidth.
    H2dMemBandwidth,
    /// Average power draw under load.
    AvgPwrDraw,
    /// Peak power draw under load.
    MaxPwrDraw,
    /// Average temperature under load.
    AvgTemp,
    /// Peak temperature under load.
    MaxTemp,
}

/// Total number of benchmark metrics.
pub const METRIC_COUNT: usize = 15;

impl Metric {
    /// Returns every metric in canonical order.
    pub fn all_metrics() -> &'static [Metric] {
        &[
            Self::Fp16Flops,
            Self::Fp32Flops,
            Self::Fp64Flops,
            Self::TensorFlopsFp16,
            Self::TensorFlopsBf16,
            Self::TensorFlopsTf32,
            Self::TensorFlopsInt8,
            Self::TensorFlopsFp8,
            Self::D2dMemBandwidth,
            Self::D2hMemBandwidth,
            Self::H2dMemBandwidth,
            Self::AvgPwrDraw,
            Self::MaxPwrDraw,
            Self::AvgTemp,
            Self::MaxTemp,
        ]
    }

    /// Returns the snake_case identifier. This is also the column name in
    /// the benchmark table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fp16Flops => "fp16_flops",
            Self::Fp32Flops => "fp32_flops",
            Self::Fp64Flops => "fp64_flops",
            Self::TensorFlopsFp16 => "tensor_flops_fp16",
            Self::TensorFlopsBf16 => "tensor_flops_bf16",
            Self::TensorFlopsTf32 => "tensor_flops_tf32",
            Self::TensorFlopsInt8 => "tensor_flops_int8",
            Self::TensorFlopsFp8 => "tensor_flops_fp8",
            Self::D2dMemBandwidth => "d2d_mem_bandwidth",
            Self::D2hMemBandwidth => "d2h_mem_bandwidth",
            Self::H2dMemBandwidth => "h2d_mem_bandwidth",
            Self::AvgPwrDraw => "avg_pwr_draw",
            Self::MaxPwrDraw => "max_pwr_draw",
            Self::AvgTemp => "avg_temp",
            Self::MaxTemp => "max_temp",
        }
    }

    /// Whether a higher or lower value of this metric is better.
    pub fn polarity(&self) -> Polarity {
        match self {
            Self::Fp16Flops
            | Self::Fp32Flops
            | Self::Fp64Flops
            | Self::TensorFlopsFp16
            | Self::TensorFlopsBf16
            | Self::TensorFlopsTf32
            | Self::TensorFlopsInt8
            | Self::TensorFlopsFp8
            | Self::D2dMemBandwidth
            | Self::D2hMemBandwidth
            | Self::H2dMemBandwidth => Polarity::HigherIsBetter,
            Self::AvgPwrDraw | Self::MaxPwrDraw | Self::AvgTemp | Self::MaxTemp => {
                Polarity::LowerIsBetter
            }
        }
    }

    /// Human-readable title used on metric cards.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fp16Flops => "FP16 Performance",
            Self::Fp32Flops => "FP32 Performance",
            Self::Fp64Flops => "FP64 Performance",
            Self::TensorFlopsFp16 => "Tensor Performance",
            Self::TensorFlopsBf16 => "Tensor BF16 Performance",
            Self::TensorFlopsTf32 => "Tensor TF32 Performance",
            Self::TensorFlopsInt8 => "Tensor INT8 Performance",
            Self::TensorFlopsFp8 => "Tensor FP8 Performance",
            Self::D2dMemBandwidth => "Memory Bandwidth",
            Self::D2hMemBandwidth => "Device-to-Host Bandwidth",
            Self::H2dMemBandwidth => "Host-to-Device Bandwidth",
            Self::AvgPwrDraw => "Average Power Draw",
            Self::MaxPwrDraw => "Max Power Draw",
            Self::AvgTemp => "Average Temperature",
            Self::MaxTemp => "Max Temperature",
        }
    }

    /// The physical quantity this metric measures.
    pub fn kind(&self) -> MetricKind {
        match self {
            Self::Fp16Flops
            | Self::Fp32Flops
            | Self::Fp64Flops
            | Self::TensorFlopsFp16
            | Self::TensorFlopsBf16
            | Self::TensorFlopsTf32
            | Self::TensorFlopsInt8
            | Self::TensorFlopsFp8 => MetricKind::Throughput,
            Self::D2dMemBandwidth | Self::D2hMemBandwidth | Self::H2dMemBandwidth => {
                MetricKind::Bandwidth
            }
            Self::AvgPwrDraw | Self::MaxPwrDraw => MetricKind::Power,
            Self::AvgTemp | Self::MaxTemp => MetricKind::Temperature,
        }
    }
}

/// Physical quantity measured by a [`Metric`]. Drives unit and formatting
/// choices in the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Operations per second.
    Throughput,
    /// Bytes per second.
    Bandwidth,
    /// Watts.
    Power,
    /// Degrees Celsius.
    Temperature,
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = GpumartError;

    /// Parse a metric from its snake_case identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all_metrics()
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                GpumartError::Normalize(crate::error::NormalizeError::InvalidArgument(format!(
                    "unknown metric: {s:?}"
                )))
            })
    }
}
