use log::debug;
use serde::{Deserialize, Serialize};

use super::formatter::{FixedFormatter, LabelFormatter, Notation, ScientificFormatter};
use super::precision::{select_precision, PrecisionPlan, PrecisionPolicy};
use super::sampler::{generate_samples, Interval, Scale};
use crate::error::LabelError;

/// Knobs shared by range and value labelling.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelOptions {
    pub scale: Scale,
    pub notation: Notation,
    pub precision: PrecisionPolicy,
}

impl LabelOptions {
    pub fn from_flags(log_scale: bool, exponential: bool) -> Self {
        Self {
            scale: Scale::from_flag(log_scale),
            notation: Notation::from_flag(exponential),
            precision: PrecisionPolicy::default(),
        }
    }

    pub fn with_precision(mut self, precision: PrecisionPolicy) -> Self {
        self.precision = precision;
        self
    }
}

/// A number together with its rendered label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub value: f64,
    pub text: String,
}

/// Ordered labels, one per source value, in source order.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LabelSet {
    entries: Vec<Label>,
}

impl LabelSet {
    fn from_parts(values: &[f64], texts: Vec<String>) -> Self {
        Self {
            entries: values
                .iter()
                .zip(texts)
                .map(|(value, text)| Label {
                    value: *value,
                    text,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.entries.iter()
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|label| label.value).collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|label| label.text.as_str()).collect()
    }

    pub fn into_texts(self) -> Vec<String> {
        self.entries.into_iter().map(|label| label.text).collect()
    }
}

/// Samples `count` ticks over `[min, max]` and labels them.
pub fn range_labels(
    min: f64,
    max: f64,
    count: usize,
    options: &LabelOptions,
) -> Result<LabelSet, LabelError> {
    let interval = Interval::new(min, max)?;
    let samples = generate_samples(&interval, count, options.scale)?;
    Ok(value_labels(&samples, options))
}

/// Labels caller-supplied values as one set; `options.scale` is ignored.
pub fn value_labels(values: &[f64], options: &LabelOptions) -> LabelSet {
    if values.is_empty() {
        return LabelSet::default();
    }

    let texts = match options.notation {
        Notation::Scientific => format_all(values, &ScientificFormatter::default()),
        Notation::Fixed => fixed_labels(values, options.precision),
    };
    LabelSet::from_parts(values, texts)
}

fn fixed_labels(values: &[f64], policy: PrecisionPolicy) -> Vec<String> {
    let plan = select_precision(values, policy);
    match &plan {
        PrecisionPlan::PerValue(_) => values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let formatter = FixedFormatter {
                    decimals: plan.decimals_at(index),
                };
                strip_trailing_zeros(formatter.format(*value))
            })
            .collect(),
        PrecisionPlan::Shared(decimals) => {
            let mut decimals = *decimals;
            let mut labels = format_all(values, &FixedFormatter { decimals });
            while decimals > 0 && all_end_in_zero(&labels) {
                decimals -= 1;
                debug!("all labels end in 0, retrying with {decimals} decimals");
                labels = format_all(values, &FixedFormatter { decimals });
            }
            labels
        }
    }
}

fn format_all(values: &[f64], formatter: &dyn LabelFormatter) -> Vec<String> {
    values.iter().map(|value| formatter.format(*value)).collect()
}

// Non-finite labels ("NaN", "inf") carry no fraction and do not vote.
fn all_end_in_zero(labels: &[String]) -> bool {
    labels
        .iter()
        .filter(|label| label.contains('.'))
        .all(|label| label.ends_with('0'))
}

/// Removes redundant fraction zeros, and the point itself if nothing remains.
pub fn strip_trailing_zeros(label: String) -> String {
    if !label.contains('.') {
        return label;
    }
    label
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn texts(set: LabelSet) -> Vec<String> {
        set.into_texts()
    }

    #[test]
    fn test_strip_trailing_zeros() {
        assert_eq!(strip_trailing_zeros("0.0010".into()), "0.001");
        assert_eq!(strip_trailing_zeros("-1.00".into()), "-1");
        assert_eq!(strip_trailing_zeros("100".into()), "100");
        assert_eq!(strip_trailing_zeros("10.50".into()), "10.5");
        assert_eq!(strip_trailing_zeros("NaN".into()), "NaN");
    }

    #[test]
    fn test_value_labels_empty() {
        let set = value_labels(&[], &LabelOptions::default());
        assert!(set.is_empty());
        let set = value_labels(&[], &LabelOptions::from_flags(false, true));
        assert!(set.is_empty());
    }

    #[test]
    fn test_value_labels_per_value_mixed_magnitudes() {
        let options = LabelOptions::default();
        assert_eq!(
            texts(value_labels(&[0.001, 0.5, 12.0, 1234.5678], &options)),
            vec!["0.001", "0.5", "12", "1234.57"]
        );
    }

    #[test]
    fn test_value_labels_all_zero() {
        let options = LabelOptions::default();
        assert_eq!(texts(value_labels(&[0.0, 0.0], &options)), vec!["0", "0"]);
        let shared = options.with_precision(PrecisionPolicy::Shared);
        assert_eq!(texts(value_labels(&[0.0, -0.0], &shared)), vec!["0", "0"]);
    }

    #[test]
    fn test_shared_precision_keeps_common_decimals() {
        let options = LabelOptions::default().with_precision(PrecisionPolicy::Shared);
        assert_eq!(
            texts(value_labels(&[0.0, 0.0625, 0.125, 0.1875, 0.25], &options)),
            vec!["0.000", "0.063", "0.125", "0.188", "0.250"]
        );
    }

    #[test]
    fn test_shared_precision_trims_uniform_zeros() {
        let options = LabelOptions::default().with_precision(PrecisionPolicy::Shared);
        assert_eq!(
            texts(value_labels(&[0.01, 0.02, 0.03], &options)),
            vec!["0.01", "0.02", "0.03"]
        );
        assert_eq!(
            texts(value_labels(&[1.0, 2.0, 3.0], &options)),
            vec!["1", "2", "3"]
        );
        assert_eq!(
            texts(value_labels(&[1.5, 2.0, 2.5], &options)),
            vec!["1.5", "2.0", "2.5"]
        );
    }

    #[test]
    fn test_shared_precision_keeps_negative_sign() {
        let options = LabelOptions::default().with_precision(PrecisionPolicy::Shared);
        assert_eq!(
            texts(value_labels(&[-0.0001, 0.5], &options)),
            vec!["-0.0001", "0.5000"]
        );
    }

    #[test]
    fn test_shared_precision_ignores_non_finite() {
        let options = LabelOptions::default().with_precision(PrecisionPolicy::Shared);
        assert_eq!(
            texts(value_labels(&[0.5, f64::NAN, 1.0], &options)),
            vec!["0.5", "NaN", "1.0"]
        );
    }

    #[test]
    fn test_scientific_labels_ignore_precision_policy() {
        let options = LabelOptions::from_flags(false, true).with_precision(PrecisionPolicy::Shared);
        assert_eq!(
            texts(value_labels(&[0.0, 1500.0], &options)),
            vec!["0.00e+0", "1.50e+3"]
        );
    }

    #[test]
    fn test_range_labels_keeps_samples() {
        let set = range_labels(0.0, 1.0, 3, &LabelOptions::default()).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.values(), vec![0.0, 0.5, 1.0]);
        assert_eq!(set.texts(), vec!["0", "0.5", "1"]);
    }

    #[test]
    fn test_range_labels_rejects_bad_intervals() {
        let log = LabelOptions::from_flags(true, false);
        assert_matches!(
            range_labels(0.0, 1.0, 3, &log),
            Err(LabelError::NonPositiveLogBound { .. })
        );
        assert_matches!(
            range_labels(1.0, 0.0, 3, &LabelOptions::default()),
            Err(LabelError::InvertedInterval { .. })
        );
        assert_matches!(
            range_labels(0.0, 1.0, 0, &LabelOptions::default()),
            Err(LabelError::ZeroTickCount)
        );
    }

    #[test]
    fn test_label_set_serializes_as_pairs() {
        let set = value_labels(&[0.5], &LabelOptions::default());
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"[{"value":0.5,"text":"0.5"}]"#);
    }
}
