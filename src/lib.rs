//! Human-readable labels for chart ticks, legends and color bars.
//!
//! Two entry points cover the common cases:
//!
//! ```
//! use ticklabel::{compute_range_labels, compute_value_labels};
//!
//! let ticks = compute_range_labels(0.0, 0.25, 5, false, false).unwrap();
//! assert_eq!(ticks, ["0", "0.063", "0.13", "0.19", "0.25"]);
//!
//! let legend = compute_value_labels(&[123.456, 234.567], true);
//! assert_eq!(legend, ["1.23e+2", "2.35e+2"]);
//! ```
//!
//! [`label`] exposes the sampler, precision selector and formatter the two
//! functions are built from.
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod input;
pub mod label;
pub mod output;
pub mod util;

pub use error::{InputError, LabelError};
pub use label::{LabelOptions, LabelSet, Notation, PrecisionPolicy, Scale};

/// Labels for `count` ticks spanning `[min, max]`.
///
/// Ticks are spaced evenly, in log10 space when `log_scale` is set, and
/// rendered in scientific notation when `exponential` is set.
pub fn compute_range_labels(
    min: f64,
    max: f64,
    count: usize,
    log_scale: bool,
    exponential: bool,
) -> Result<Vec<String>, LabelError> {
    let options = LabelOptions::from_flags(log_scale, exponential);
    Ok(label::range_labels(min, max, count, &options)?.into_texts())
}

/// Labels for caller-supplied values, in input order.
pub fn compute_value_labels(values: &[f64], exponential: bool) -> Vec<String> {
    let options = LabelOptions::from_flags(false, exponential);
    label::value_labels(values, &options).into_texts()
}
