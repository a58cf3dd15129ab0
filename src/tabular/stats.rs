//! Descriptive statistics over a frame's numeric columns.

use serde_json::Value;

use super::Frame;

/// Five-number summary for one numeric column. `std` is the sample
/// standard deviation (n-1 denominator) and 0 when fewer than two values.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

/// Summarize every numeric column.
///
/// A column counts as numeric when it has at least one value and every
/// non-null cell is a number; other columns are skipped.
pub fn summarize(frame: &Frame) -> Vec<ColumnSummary> {
    let mut summaries = Vec::new();
    for (idx, column) in frame.columns().iter().enumerate() {
        let mut values = Vec::new();
        let mut numeric = true;
        for row in frame.rows() {
            match &row[idx] {
                Value::Null => {}
                Value::Number(n) => {
                    if let Some(f) = n.as_f64() {
                        values.push(f);
                    }
                }
                _ => {
                    numeric = false;
                    break;
                }
            }
        }
        if !numeric || values.is_empty() {
            continue;
        }

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
                / (count - 1) as f64;
            variance.sqrt()
        } else {
            0.0
        };
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        summaries.push(ColumnSummary {
            column: column.clone(),
            count,
            mean,
            std,
            min,
            max,
        });
    }
    summaries
}
