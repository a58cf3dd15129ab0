//! Tabular data handling: a small column-oriented frame with format
//! conversion, filtering, summary statistics, and chart rendering.
//!
//! Cells are `serde_json::Value`s. CSV input infers integers and floats
//! per field so statistics and charts work without type annotations;
//! anything that fails numeric parsing stays a string.

mod chart;
mod stats;

pub use chart::{render_chart, ChartKind};
pub use stats::{summarize, ColumnSummary};

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{OpsError, Result};

/// Output formats for [`Frame::write_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Csv,
    /// JSON Lines: one record object per line.
    Json,
    Yaml,
}

impl FromStr for DataFormat {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(DataFormat::Csv),
            "json" => Ok(DataFormat::Json),
            "yaml" | "yml" => Ok(DataFormat::Yaml),
            _ => Err(OpsError::Unsupported {
                what: "output format",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataFormat::Csv => "csv",
            DataFormat::Json => "json",
            DataFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}

/// In-memory table: ordered column names plus rows of cells.
///
/// Invariant: every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Frame {
    /// Build a frame from parts, checking row width.
    pub fn from_parts(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        if let Some(bad) = rows.iter().position(|r| r.len() != columns.len()) {
            return Err(OpsError::InvalidInput(format!(
                "row {bad} has {} cells, expected {}",
                rows[bad].len(),
                columns.len()
            )));
        }
        Ok(Self { columns, rows })
    }

    /// Load from a file, sniffing the format by extension: `.csv` parses
    /// as CSV, everything else as JSON (array of objects or JSON Lines).
    pub fn from_path(path: &Path) -> Result<Self> {
        let is_csv = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv {
            Self::from_csv(path)
        } else {
            Self::from_json(path)
        }
    }

    fn from_csv(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row: Vec<Value> = record.iter().map(infer_cell).collect();
            // ragged rows pad or trim to the header width
            row.resize(columns.len(), Value::Null);
            rows.push(row);
        }
        Ok(Self { columns, rows })
    }

    fn from_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let trimmed = content.trim_start();
        let records: Vec<Map<String, Value>> = if trimmed.starts_with('[') {
            let items: Vec<Value> = serde_json::from_str(trimmed)?;
            items
                .into_iter()
                .map(|item| match item {
                    Value::Object(map) => Ok(map),
                    _ => Err(OpsError::InvalidInput(
                        "expected an array of JSON objects".to_string(),
                    )),
                })
                .collect::<Result<Vec<_>>>()?
        } else {
            // JSON Lines
            let mut out = Vec::new();
            for line in content.lines() {
                if line.trim().is_empty() {
                    continue;
                }
                let value: Value = serde_json::from_str(line)?;
                match value {
                    Value::Object(map) => out.push(map),
                    _ => {
                        return Err(OpsError::InvalidInput(
                            "expected one JSON object per line".to_string(),
                        ))
                    }
                }
            }
            out
        };

        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for key in record.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        let rows = records
            .into_iter()
            .map(|mut record| {
                columns
                    .iter()
                    .map(|c| record.remove(c).unwrap_or(Value::Null))
                    .collect()
            })
            .collect();
        Ok(Self { columns, rows })
    }

    /// Write the frame out in the requested format.
    pub fn write_to(&self, path: &Path, format: DataFormat) -> Result<()> {
        match format {
            DataFormat::Csv => {
                let mut writer = csv::Writer::from_path(path)?;
                writer.write_record(&self.columns)?;
                for row in &self.rows {
                    writer.write_record(row.iter().map(cell_text))?;
                }
                writer.flush()?;
            }
            DataFormat::Json => {
                let mut file = std::fs::File::create(path)?;
                for row in &self.rows {
                    let record = self.record_for(row);
                    writeln!(file, "{}", serde_json::to_string(&record)?)?;
                }
            }
            DataFormat::Yaml => {
                let records: Vec<Map<String, Value>> =
                    self.rows.iter().map(|r| self.record_for(r)).collect();
                std::fs::write(path, serde_yaml::to_string(&records)?)?;
            }
        }
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a named column.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| OpsError::ColumnNotFound(name.to_string()))
    }

    /// Rows whose cell in `column` renders equal to `value`.
    pub fn filter_eq(&self, column: &str, value: &str) -> Result<Frame> {
        let idx = self.column_index(column)?;
        let rows = self
            .rows
            .iter()
            .filter(|row| cell_text(&row[idx]) == value)
            .cloned()
            .collect();
        Ok(Frame {
            columns: self.columns.clone(),
            rows,
        })
    }

    /// Inner join with `other` on the named key column.
    ///
    /// Result columns are this frame's columns followed by the other
    /// frame's non-key columns; a right-side name that collides with a
    /// left-side one gets a `_right` suffix.
    pub fn merge(&self, other: &Frame, on: &str) -> Result<Frame> {
        let left_key = self.column_index(on)?;
        let right_key = other.column_index(on)?;

        let mut columns = self.columns.clone();
        // (right column index, output name)
        let mut right_cols: Vec<(usize, String)> = Vec::new();
        for (idx, name) in other.columns.iter().enumerate() {
            if idx == right_key {
                continue;
            }
            let out_name = if columns.iter().any(|c| c == name) {
                format!("{name}_right")
            } else {
                name.clone()
            };
            right_cols.push((idx, out_name.clone()));
            columns.push(out_name);
        }

        let mut by_key: std::collections::HashMap<String, Vec<usize>> =
            std::collections::HashMap::new();
        for (idx, row) in other.rows.iter().enumerate() {
            by_key
                .entry(cell_text(&row[right_key]))
                .or_default()
                .push(idx);
        }

        let mut rows = Vec::new();
        for left_row in &self.rows {
            let key = cell_text(&left_row[left_key]);
            if let Some(matches) = by_key.get(&key) {
                for &right_idx in matches {
                    let mut merged = left_row.clone();
                    for (src_idx, _) in &right_cols {
                        merged.push(other.rows[right_idx][*src_idx].clone());
                    }
                    rows.push(merged);
                }
            }
        }
        Ok(Frame { columns, rows })
    }

    fn record_for(&self, row: &[Value]) -> Map<String, Value> {
        self.columns
            .iter()
            .cloned()
            .zip(row.iter().cloned())
            .collect()
    }
}

/// Render a cell for display, CSV output, and equality checks.
/// Null is empty; strings are unquoted; everything else is its JSON form.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Infer a typed cell from a raw CSV field.
fn infer_cell(field: &str) -> Value {
    if field.is_empty() {
        return Value::Null;
    }
    if let Ok(int) = field.parse::<i64>() {
        return Value::from(int);
    }
    if let Ok(float) = field.parse::<f64>() {
        if float.is_finite() {
            if let Some(number) = serde_json::Number::from_f64(float) {
                return Value::Number(number);
            }
        }
    }
    Value::String(field.to_string())
}
