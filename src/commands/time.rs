//! Date and time commands backed by the calendar adapter.

use anyhow::Result;

use crate::calendar::{self, Shift};

#[derive(Debug, Clone)]
pub enum TimeSubcommand {
    /// Current time in a zone.
    Now { timezone: String },
    /// Re-zone a local timestamp.
    Convert {
        time: String,
        from_tz: String,
        to_tz: String,
    },
    /// Add days, weeks, or months to a date.
    Add {
        date: String,
        days: i64,
        weeks: i64,
        months: i64,
    },
    /// Span between two dates.
    Diff { start: String, end: String },
}

pub fn execute_time(command: TimeSubcommand) -> Result<()> {
    match command {
        TimeSubcommand::Now { timezone } => {
            println!("{}", calendar::now(&timezone)?);
        }
        TimeSubcommand::Convert { time, from_tz, to_tz } => {
            println!("{}", calendar::convert(&time, &from_tz, &to_tz)?);
        }
        TimeSubcommand::Add {
            date,
            days,
            weeks,
            months,
        } => {
            let shifted = calendar::shift(&date, Shift { days, weeks, months })?;
            println!("{shifted}");
        }
        TimeSubcommand::Diff { start, end } => {
            let span = calendar::difference(&start, &end)?;
            println!("Difference: {span}");
        }
    }
    Ok(())
}
