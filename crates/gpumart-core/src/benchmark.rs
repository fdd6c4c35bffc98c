//! # Benchmark Rows
//!
//! The per-GPU benchmark result, the peer-average row for the same GPU
//! model, and the optional caller-supplied reference-best values for the
//! radar axes. Field names match the benchmark table columns so rows
//! deserialize straight from the backend's JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metric::Metric;
use crate::sample::{Baseline, MetricSample, ReferencePoint};

/// Benchmark measurements for one physical GPU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkScore {
    /// CUDA toolkit version the benchmark ran under.
    #[serde(default = "unknown")]
    pub cuda_version: String,
    /// Driver version the benchmark ran under.
    #[serde(default = "unknown")]
    pub driver_version: String,
    pub fp16_flops: f64,
    pub fp32_flops: f64,
    pub fp64_flops: f64,
    pub tensor_flops_fp16: f64,
    pub tensor_flops_bf16: f64,
    pub tensor_flops_tf32: f64,
    pub tensor_flops_int8: f64,
    pub tensor_flops_fp8: f64,
    pub d2d_mem_bandwidth: f64,
    pub d2h_mem_bandwidth: f64,
    pub h2d_mem_bandwidth: f64,
    pub avg_pwr_draw: f64,
    pub max_pwr_draw: f64,
    pub avg_temp: f64,
    pub max_temp: f64,
    /// When the benchmark was verified. Absent for unverified uploads.
    #[serde(default)]
    pub verified_at: Option<DateTime<Utc>>,
}

fn unknown() -> String {
    "Unknown".to_string()
}

impl BenchmarkScore {
    /// Raw measured value for a metric.
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Fp16Flops => self.fp16_flops,
            Metric::Fp32Flops => self.fp32_flops,
            Metric::Fp64Flops => self.fp64_flops,
            Metric::TensorFlopsFp16 => self.tensor_flops_fp16,
            Metric::TensorFlopsBf16 => self.tensor_flops_bf16,
            Metric::TensorFlopsTf32 => self.tensor_flops_tf32,
            Metric::TensorFlopsInt8 => self.tensor_flops_int8,
            Metric::TensorFlopsFp8 => self.tensor_flops_fp8,
            Metric::D2dMemBandwidth => self.d2d_mem_bandwidth,
            Metric::D2hMemBandwidth => self.d2h_mem_bandwidth,
            Metric::H2dMemBandwidth => self.h2d_mem_bandwidth,
            Metric::AvgPwrDraw => self.avg_pwr_draw,
            Metric::MaxPwrDraw => self.max_pwr_draw,
            Metric::AvgTemp => self.avg_temp,
            Metric::MaxTemp => self.max_temp,
        }
    }

    /// The measured value as a typed sample.
    pub fn sample(&self, metric: Metric) -> MetricSample {
        MetricSample::new(metric, self.value(metric))
    }
}

/// Peer averages over every benchmarked GPU of the same model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageMetrics {
    #[serde(default)]
    pub aib_partner: String,
    #[serde(default)]
    pub gpu_arch: String,
    #[serde(default)]
    pub gpu_model: String,
    #[serde(default)]
    pub vram_gb: u32,
    pub avg_fp16_flops: f64,
    pub avg_fp32_flops: f64,
    pub avg_fp64_flops: f64,
    pub avg_tensor_flops_fp16: f64,
    pub avg_tensor_flops_bf16: f64,
    pub avg_tensor_flops_tf32: f64,
    pub avg_tensor_flops_int8: f64,
    pub avg_tensor_flops_fp8: f64,
    pub avg_d2d_mem_bandwidth: f64,
    pub avg_d2h_mem_bandwidth: f64,
    pub avg_h2d_mem_bandwidth: f64,
    pub avg_avg_pwr_draw: f64,
    pub avg_max_pwr_draw: f64,
    pub avg_avg_temp: f64,
    pub avg_max_temp: f64,
}

impl AverageMetrics {
    /// Peer-average value for a metric.
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Fp16Flops => self.avg_fp16_flops,
            Metric::Fp32Flops => self.avg_fp32_flops,
            Metric::Fp64Flops => self.avg_fp64_flops,
            Metric::TensorFlopsFp16 => self.avg_tensor_flops_fp16,
            Metric::TensorFlopsBf16 => self.avg_tensor_flops_bf16,
            Metric::TensorFlopsTf32 => self.avg_tensor_flops_tf32,
            Metric::TensorFlopsInt8 => self.avg_tensor_flops_int8,
            Metric::TensorFlopsFp8 => self.avg_tensor_flops_fp8,
            Metric::D2dMemBandwidth => self.avg_d2d_mem_bandwidth,
            Metric::D2hMemBandwidth => self.avg_d2h_mem_bandwidth,
            Metric::H2dMemBandwidth => self.avg_h2d_mem_bandwidth,
            Metric::AvgPwrDraw => self.avg_avg_pwr_draw,
            Metric::MaxPwrDraw => self.avg_max_pwr_draw,
            Metric::AvgTemp => self.avg_avg_temp,
            Metric::MaxTemp => self.avg_max_temp,
        }
    }

    /// The peer average as a typed baseline.
    pub fn baseline(&self, metric: Metric) -> Baseline {
        Baseline::new(metric, self.value(metric))
    }
}

/// Best known values for the six radar axes.
///
/// For lower-is-better axes (power, temperature) the best value is the
/// lowest one observed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BestMetrics {
    pub fp32_flops: f64,
    pub fp16_flops: f64,
    pub tensor_flops_fp16: f64,
    pub d2d_mem_bandwidth: f64,
    pub max_pwr_draw: f64,
    pub max_temp: f64,
}

impl BestMetrics {
    /// Reference point for a metric, if this set carries one.
    pub fn reference(&self, metric: Metric) -> Option<ReferencePoint> {
        let value = match metric {
            Metric::Fp32Flops => self.fp32_flops,
            Metric::Fp16Flops => self.fp16_flops,
            Metric::TensorFlopsFp16 => self.tensor_flops_fp16,
            Metric::D2dMemBandwidth => self.d2d_mem_bandwidth,
            Metric::MaxPwrDraw => self.max_pwr_draw,
            Metric::MaxTemp => self.max_temp,
            Metric::Fp64Flops
            | Metric::TensorFlopsBf16
            | Metric::TensorFlopsTf32
            | Metric::TensorFlopsInt8
            | Metric::TensorFlopsFp8
            | Metric::D2hMemBandwidth
            | Metric::H2dMemBandwidth
            | Metric::AvgPwrDraw
            | Metric::AvgTemp => return None,
        };
        Some(ReferencePoint::new(metric, value))
    }
}
