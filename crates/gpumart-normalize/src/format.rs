//! # Display Formatting
//!
//! String rendering for metric cards and radar tooltips. Scores are only
//! rounded here, never in the normalizer itself.

use crate::domain::Domain;

/// Throughput with a T/B/M magnitude suffix, e.g. `"82.6 T"`.
///
/// Values below a million are printed in full with digit grouping and a
/// trailing space, so `format_flops(v) + "FLOPS"` always reads naturally.
pub fn format_flops(flops: f64) -> String {
    if flops >= 1e12 {
        format!("{:.1} T", flops / 1e12)
    } else if flops >= 1e9 {
        format!("{:.1} B", flops / 1e9)
    } else if flops >= 1e6 {
        format!("{:.1} M", flops / 1e6)
    } else {
        format!("{} ", format_grouped(flops))
    }
}

/// Memory bandwidth, e.g. `"1008.0GB/s"`.
pub fn format_bandwidth(bytes_per_sec: f64) -> String {
    if bytes_per_sec >= 1e9 {
        format!("{:.1}GB/s", bytes_per_sec / 1e9)
    } else {
        format!("{} MB/s", format_grouped(bytes_per_sec))
    }
}

/// Signed delta label, e.g. `"+20.0%"` or `"-4.5%"`.
pub fn format_delta(percentage: f64) -> String {
    let sign = if percentage > 0.0 { "+" } else { "" };
    format!("{sign}{percentage:.1}%")
}

/// Whole-percent tooltip value. Truncates toward zero.
pub fn format_percent(score: f64) -> String {
    format!("{}%", score.floor() as i64)
}

/// Caption under the radar chart describing the auto-scaled range.
pub fn format_domain_caption(domain: &Domain) -> String {
    format!("Chart auto-scales to show data range: {domain}")
}

/// Digit-grouped number with at most three fractional digits, e.g.
/// `"12,345.5"`.
pub fn format_grouped(value: f64) -> String {
    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && rounded.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}
