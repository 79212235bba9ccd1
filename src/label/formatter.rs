use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::decimal::{is_halfway, round_tie_up};

/// Mantissa fraction digits used for every scientific label.
pub const SCIENTIFIC_MANTISSA_DECIMALS: usize = 2;

/// Rendering mode for a whole label set.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Notation {
    #[default]
    Fixed,
    Scientific,
}

impl Notation {
    pub fn from_flag(exponential: bool) -> Self {
        if exponential {
            Notation::Scientific
        } else {
            Notation::Fixed
        }
    }
}

/// Trait for rendering a single number as a label
pub trait LabelFormatter {
    fn format(&self, value: f64) -> String;
}

/// Plain decimal notation with a fixed number of fraction digits
pub struct FixedFormatter {
    pub decimals: usize,
}

impl LabelFormatter for FixedFormatter {
    fn format(&self, value: f64) -> String {
        format_fixed(value, self.decimals)
    }
}

/// Normalized `d.dd e±k` notation
pub struct ScientificFormatter {
    pub mantissa_decimals: usize,
}

impl Default for ScientificFormatter {
    fn default() -> Self {
        Self {
            mantissa_decimals: SCIENTIFIC_MANTISSA_DECIMALS,
        }
    }
}

impl LabelFormatter for ScientificFormatter {
    fn format(&self, value: f64) -> String {
        format_scientific(value, self.mantissa_decimals)
    }
}

/// Formats `value` with exactly `decimals` fraction digits, rounding ties
/// away from zero. Negative values keep their sign even when every digit
/// rounds to zero; only `-0.0` itself renders unsigned.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    let digits = if is_halfway(magnitude, decimals as i32) {
        round_tie_up(&format!("{:.*}", decimals + 1, magnitude))
    } else {
        format!("{:.*}", decimals, magnitude)
    };

    if value < 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Formats `value` as `m.mm e±k` with `1 <= |m| < 10`, an explicitly signed
/// exponent and no exponent zero padding. Zero renders as `0.00e+0`.
pub fn format_scientific(value: f64, mantissa_decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return format!("{:.*}e+0", mantissa_decimals, 0.0);
    }

    let magnitude = value.abs();
    // One extra digit is exact for a tie, and its exponent is then the true one.
    let extended = format!("{:.*e}", mantissa_decimals + 1, magnitude);
    let (extended_mantissa, exponent) = split_exponent(&extended);

    let (mantissa, exponent) = if is_halfway(magnitude, mantissa_decimals as i32 - exponent) {
        renormalize(round_tie_up(extended_mantissa), exponent, mantissa_decimals)
    } else {
        let rounded = format!("{:.*e}", mantissa_decimals, magnitude);
        let (mantissa, exponent) = split_exponent(&rounded);
        (mantissa.to_string(), exponent)
    };

    let sign = if value.is_sign_negative() { "-" } else { "" };
    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    format!(
        "{sign}{mantissa}e{exponent_sign}{}",
        exponent.unsigned_abs()
    )
}

fn split_exponent(formatted: &str) -> (&str, i32) {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse().unwrap_or(0)),
        None => (formatted, 0),
    }
}

// A carry out of 9.99.. leaves "10.00"; shift it back into [1, 10).
fn renormalize(mantissa: String, exponent: i32, decimals: usize) -> (String, i32) {
    if !mantissa.starts_with("10") {
        return (mantissa, exponent);
    }
    let normalized = if decimals == 0 {
        "1".to_string()
    } else {
        format!("1.{}", "0".repeat(decimals))
    };
    (normalized, exponent + 1)
}
