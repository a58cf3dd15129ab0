//! Tabular data commands: convert, filter, summarize, merge, chart.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::tabular::{render_chart, summarize, ChartKind, DataFormat, Frame};

#[derive(Debug, Clone)]
pub enum DataSubcommand {
    /// Convert a data file to another format.
    Convert {
        input: PathBuf,
        output: PathBuf,
        format: String,
    },
    /// Keep only rows whose column equals a value.
    Filter {
        input: PathBuf,
        output: PathBuf,
        column: String,
        value: String,
    },
    /// Descriptive statistics for the numeric columns.
    Summarize { input: PathBuf },
    /// Inner-join two data files on a key column.
    Merge {
        left: PathBuf,
        right: PathBuf,
        on: String,
        output: PathBuf,
    },
    /// Render a chart of two columns to an SVG file.
    Chart {
        input: PathBuf,
        x: String,
        y: String,
        chart: String,
        output: PathBuf,
    },
}

pub fn execute_data(command: DataSubcommand) -> Result<()> {
    match command {
        DataSubcommand::Convert {
            input,
            output,
            format,
        } => {
            let format: DataFormat = format.parse()?;
            let frame = Frame::from_path(&input)?;
            frame.write_to(&output, format)?;
            println!(
                "{} Data converted to {} and saved to {}",
                style("✓").green(),
                format,
                output.display()
            );
        }

        DataSubcommand::Filter {
            input,
            output,
            column,
            value,
        } => {
            let frame = Frame::from_path(&input)?;
            let filtered = frame.filter_eq(&column, &value)?;
            filtered.write_to(&output, DataFormat::Csv)?;
            println!(
                "{} Filtered data saved to {}",
                style("✓").green(),
                output.display()
            );
        }

        DataSubcommand::Summarize { input } => {
            let frame = Frame::from_path(&input)?;
            let summaries = summarize(&frame);
            if summaries.is_empty() {
                println!("No numeric columns in {}.", input.display());
            } else {
                println!(
                    "{:<20} {:>8} {:>12} {:>12} {:>12} {:>12}",
                    "column", "count", "mean", "std", "min", "max"
                );
                for summary in summaries {
                    println!(
                        "{:<20} {:>8} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
                        summary.column,
                        summary.count,
                        summary.mean,
                        summary.std,
                        summary.min,
                        summary.max
                    );
                }
            }
        }

        DataSubcommand::Merge {
            left,
            right,
            on,
            output,
        } => {
            let left_frame = Frame::from_path(&left)?;
            let right_frame = Frame::from_path(&right)?;
            let merged = left_frame.merge(&right_frame, &on)?;
            merged.write_to(&output, DataFormat::Csv)?;
            println!(
                "{} Merged data saved to {}",
                style("✓").green(),
                output.display()
            );
        }

        DataSubcommand::Chart {
            input,
            x,
            y,
            chart,
            output,
        } => {
            let kind: ChartKind = chart.parse()?;
            let frame = Frame::from_path(&input)?;
            render_chart(&frame, &x, &y, kind, &output)?;
            println!(
                "{} Chart saved to {}",
                style("✓").green(),
                output.display()
            );
        }
    }

    Ok(())
}
