use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::util::{min_abs_nonzero, order_of_magnitude};

/// Fraction digits kept for any value of magnitude 1 or more.
pub const MIN_DECIMALS: usize = 2;

/// How fixed-point decimals are chosen across a label set.
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
pub enum PrecisionPolicy {
    /// Each value keeps two significant digits; trailing zeros are dropped per label.
    #[default]
    PerValue,
    /// One decimal count for the whole set, derived from its smallest non-zero magnitude.
    Shared,
}

/// Outcome of one precision pass over a value set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrecisionPlan {
    PerValue(Vec<usize>),
    Shared(usize),
}

impl PrecisionPlan {
    pub fn decimals_at(&self, index: usize) -> usize {
        match self {
            PrecisionPlan::PerValue(decimals) => decimals.get(index).copied().unwrap_or(0),
            PrecisionPlan::Shared(decimals) => *decimals,
        }
    }
}

/// Fraction digits needed to show two significant digits of `value`.
///
/// Values of magnitude 1 or more get [`MIN_DECIMALS`]; smaller values get
/// enough digits to reach past their leading zeros. Zero and non-finite
/// values need none.
pub fn decimals_for_magnitude(value: f64) -> usize {
    match order_of_magnitude(value) {
        None => 0,
        Some(exponent) if exponent >= 0 => MIN_DECIMALS,
        Some(exponent) => (1 - exponent) as usize,
    }
}

/// The value most at risk of losing significance: the smallest non-zero
/// finite magnitude in the set.
pub fn reference_magnitude(values: &[f64]) -> Option<f64> {
    min_abs_nonzero(values)
}

pub fn select_precision(values: &[f64], policy: PrecisionPolicy) -> PrecisionPlan {
    match policy {
        PrecisionPolicy::PerValue => PrecisionPlan::PerValue(
            values
                .iter()
                .map(|value| decimals_for_magnitude(*value))
                .collect(),
        ),
        PrecisionPolicy::Shared => {
            let reference = reference_magnitude(values);
            let decimals = reference.map_or(0, decimals_for_magnitude);
            debug!("shared precision: reference {reference:?}, {decimals} decimals");
            PrecisionPlan::Shared(decimals)
        }
    }
}
