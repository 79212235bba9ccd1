use thiserror::Error;

/// Rejections raised by the label engine for ranges it cannot sample.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LabelError {
    #[error("logarithmic scale requires a positive lower bound, got {min}")]
    NonPositiveLogBound { min: f64 },

    #[error("inverted interval: min {min} is greater than max {max}")]
    InvertedInterval { min: f64, max: f64 },

    #[error("interval bounds must be finite, got [{min}, {max}]")]
    NonFiniteBound { min: f64, max: f64 },

    #[error("tick count must be at least 1")]
    ZeroTickCount,
}

/// Failures while reading values to label from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read values: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: '{text}' is not a number")]
    ParseValue { row: usize, text: String },

    #[error("column '{0}' not found in header")]
    MissingColumn(String),
}

/// Failures while rendering a label set for output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush output: {0}")]
    Io(#[from] std::io::Error),

    #[error("output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_error_messages() {
        assert_eq!(
            LabelError::NonPositiveLogBound { min: 0.0 }.to_string(),
            "logarithmic scale requires a positive lower bound, got 0"
        );
        assert_eq!(
            LabelError::InvertedInterval { min: 2.0, max: 1.0 }.to_string(),
            "inverted interval: min 2 is greater than max 1"
        );
        assert_eq!(
            LabelError::ZeroTickCount.to_string(),
            "tick count must be at least 1"
        );
    }

    #[test]
    fn test_input_error_messages() {
        let err = InputError::ParseValue {
            row: 3,
            text: "abc".into(),
        };
        assert_eq!(err.to_string(), "row 3: 'abc' is not a number");
        assert_eq!(
            InputError::MissingColumn("temp".into()).to_string(),
            "column 'temp' not found in header"
        );
    }
}
