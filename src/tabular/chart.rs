//! Chart rendering to SVG via plotters.

use std::ops::Range;
use std::path::Path;
use std::str::FromStr;

use plotters::prelude::*;
use serde_json::Value;

use super::{cell_text, Frame};
use crate::error::{OpsError, Result};

const CHART_SIZE: (u32, u32) = (1000, 600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Scatter,
}

impl FromStr for ChartKind {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bar" => Ok(ChartKind::Bar),
            "line" => Ok(ChartKind::Line),
            "scatter" => Ok(ChartKind::Scatter),
            _ => Err(OpsError::Unsupported {
                what: "chart type",
                value: s.to_string(),
            }),
        }
    }
}

/// Render `y` against `x` as the given chart kind into an SVG file.
///
/// Bar charts treat the x column as categorical labels; line and scatter
/// need both columns numeric. Rows with a null in either column are
/// skipped.
pub fn render_chart(
    frame: &Frame,
    x_column: &str,
    y_column: &str,
    kind: ChartKind,
    output: &Path,
) -> Result<()> {
    if frame.is_empty() {
        return Err(OpsError::InvalidInput(
            "cannot chart an empty data set".to_string(),
        ));
    }
    let x_idx = frame.column_index(x_column)?;
    let y_idx = frame.column_index(y_column)?;
    let caption = format!("{y_column} vs {x_column}");

    match kind {
        ChartKind::Bar => {
            let mut labels = Vec::new();
            let mut values = Vec::new();
            for row in frame.rows() {
                if row[y_idx].is_null() {
                    continue;
                }
                labels.push(cell_text(&row[x_idx]));
                values.push(numeric_cell(&row[y_idx], y_column)?);
            }
            draw_bar(output, &caption, &labels, &values)
        }
        ChartKind::Line | ChartKind::Scatter => {
            let mut points = Vec::new();
            for row in frame.rows() {
                if row[x_idx].is_null() || row[y_idx].is_null() {
                    continue;
                }
                points.push((
                    numeric_cell(&row[x_idx], x_column)?,
                    numeric_cell(&row[y_idx], y_column)?,
                ));
            }
            draw_xy(output, &caption, &points, kind)
        }
    }
}

fn draw_bar(output: &Path, caption: &str, labels: &[String], values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(OpsError::InvalidInput(
            "no plottable rows in the data set".to_string(),
        ));
    }
    let root = SVGBackend::new(output, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let y_min = values.iter().copied().fold(0.0f64, f64::min);
    let y_max = values.iter().copied().fold(0.0f64, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (0..labels.len().saturating_sub(1)).into_segmented(),
            padded(y_min, y_max),
        )
        .map_err(chart_err)?;

    let labels_for_axis = labels.to_vec();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&move |segment: &SegmentValue<usize>| match segment {
            SegmentValue::CenterOf(idx) => {
                labels_for_axis.get(*idx).cloned().unwrap_or_default()
            }
            _ => String::new(),
        })
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.filled())
                .margin(10)
                .data(values.iter().enumerate().map(|(idx, v)| (idx, *v))),
        )
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

fn draw_xy(output: &Path, caption: &str, points: &[(f64, f64)], kind: ChartKind) -> Result<()> {
    if points.is_empty() {
        return Err(OpsError::InvalidInput(
            "no plottable rows in the data set".to_string(),
        ));
    }
    let root = SVGBackend::new(output, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let x_min = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let x_max = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    let y_min = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let y_max = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(padded(x_min, x_max), padded(y_min, y_max))
        .map_err(chart_err)?;

    chart.configure_mesh().draw().map_err(chart_err)?;

    match kind {
        ChartKind::Line => {
            let mut ordered = points.to_vec();
            ordered.sort_by(|a, b| a.0.total_cmp(&b.0));
            chart
                .draw_series(LineSeries::new(ordered, &BLUE))
                .map_err(chart_err)?;
        }
        _ => {
            chart
                .draw_series(
                    points
                        .iter()
                        .map(|(x, y)| Circle::new((*x, *y), 4, BLUE.filled())),
                )
                .map_err(chart_err)?;
        }
    }

    root.present().map_err(chart_err)?;
    Ok(())
}

fn numeric_cell(value: &Value, column: &str) -> Result<f64> {
    value.as_f64().ok_or_else(|| {
        OpsError::InvalidInput(format!(
            "column '{column}' has non-numeric value {value}"
        ))
    })
}

fn padded(min: f64, max: f64) -> Range<f64> {
    let span = max - min;
    let pad = if span.abs() < f64::EPSILON {
        1.0
    } else {
        span * 0.05
    };
    (min - pad)..(max + pad)
}

fn chart_err<E: std::fmt::Display>(err: E) -> OpsError {
    OpsError::Chart(err.to_string())
}
