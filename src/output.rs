use clap::ValueEnum;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::error::OutputError;
use crate::label::LabelSet;

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
pub enum OutputFormat {
    /// One label per line
    #[default]
    Text,
    /// Array of `{ "value", "text" }` objects
    Json,
    /// `value,label` rows with a header
    Csv,
}

/// Renders `labels` in `format`. `align` right-aligns text labels to the
/// widest one and is ignored by the structured formats.
pub fn render(
    labels: &LabelSet,
    format: OutputFormat,
    align: bool,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Text => Ok(render_text(labels, align)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(labels)?)),
        OutputFormat::Csv => render_csv(labels),
    }
}

fn render_text(labels: &LabelSet, align: bool) -> String {
    if labels.is_empty() {
        return String::new();
    }
    let texts = labels.texts();
    let width = if align {
        texts.iter().map(|text| text.width()).max().unwrap_or(0)
    } else {
        0
    };
    let body = texts
        .iter()
        .map(|text| {
            let padding = width.saturating_sub(text.width());
            format!("{}{text}", " ".repeat(padding))
        })
        .join("\n");
    format!("{body}\n")
}

fn render_csv(labels: &LabelSet) -> Result<String, OutputError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["value", "label"])?;
    for label in labels.iter() {
        writer.write_record([label.value.to_string(), label.text.clone()])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| OutputError::Io(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
