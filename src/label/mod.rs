pub mod decimal;
pub mod engine;
pub mod formatter;
pub mod precision;
pub mod sampler;

// Re-export the main types for convenience
pub use engine::{range_labels, strip_trailing_zeros, value_labels, Label, LabelOptions, LabelSet};
pub use formatter::{
    format_fixed, format_scientific, FixedFormatter, LabelFormatter, Notation,
    ScientificFormatter, SCIENTIFIC_MANTISSA_DECIMALS,
};
pub use precision::{
    decimals_for_magnitude, reference_magnitude, select_precision, PrecisionPlan, PrecisionPolicy,
};
pub use sampler::{generate_samples, Interval, LinearSampler, LogSampler, Sampler, Scale};
