use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::InputError;

/// Reads one numeric column from CSV data.
///
/// With `column` the first row is a header and the named column is used;
/// without it every row is data and the first column is used. Blank cells
/// are skipped.
pub fn read_values<R: Read>(reader: R, column: Option<&str>) -> Result<Vec<f64>, InputError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(column.is_some())
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let index = match column {
        Some(name) => csv_reader
            .headers()?
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| InputError::MissingColumn(name.to_string()))?,
        None => 0,
    };

    let mut values = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let Some(cell) = record.get(index).filter(|cell| !cell.is_empty()) else {
            continue;
        };
        let value = cell.parse::<f64>().map_err(|_| InputError::ParseValue {
            row: record.position().map_or(0, |pos| pos.line() as usize),
            text: cell.to_string(),
        })?;
        values.push(value);
    }
    Ok(values)
}

/// Like [`read_values`], reading from a file or from stdin when `path` is `-`.
pub fn read_values_from(path: &Path, column: Option<&str>) -> Result<Vec<f64>, InputError> {
    if path == Path::new("-") {
        read_values(io::stdin().lock(), column)
    } else {
        read_values(File::open(path)?, column)
    }
}
