//! Date and time operations: current time per zone, zone conversion,
//! calendar arithmetic, and differences.
//!
//! Input stamps are naive (`2024-09-10 12:00:00` or bare `2024-09-10`);
//! zone names come from the IANA database. Month arithmetic is
//! approximated as 30 days.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{OpsError, Result};

/// Naive timestamp layout accepted on input and used for arithmetic output.
pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date-only layout accepted as a fallback on input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Layout for zone-aware output, e.g. `2024-09-10 12:00:00 JST+0900`.
pub const ZONED_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z%z";

/// Additive shift applied by [`shift`]. Months count as 30 days.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shift {
    pub days: i64,
    pub weeks: i64,
    pub months: i64,
}

impl Shift {
    fn as_duration(&self) -> Duration {
        Duration::days(self.days + self.weeks * 7 + self.months * 30)
    }
}

/// Elapsed time between two stamps, broken into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl fmt::Display for DateSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} days, {} hours, {} minutes",
            self.days, self.hours, self.minutes
        )
    }
}

/// Current time in the given zone, formatted with zone name and offset.
pub fn now(zone: &str) -> Result<String> {
    let tz = parse_zone(zone)?;
    Ok(Utc::now().with_timezone(&tz).format(ZONED_FORMAT).to_string())
}

/// Reinterpret a naive stamp from one zone and render it in another.
pub fn convert(stamp: &str, from_zone: &str, to_zone: &str) -> Result<String> {
    let from_tz = parse_zone(from_zone)?;
    let to_tz = parse_zone(to_zone)?;
    let naive = parse_stamp(stamp)?;
    // DST gaps make some local times nonexistent; ambiguous times take
    // the earlier interpretation.
    let localized = from_tz.from_local_datetime(&naive).earliest().ok_or_else(|| {
        OpsError::InvalidInput(format!(
            "time '{stamp}' does not exist in zone '{from_zone}'"
        ))
    })?;
    Ok(localized
        .with_timezone(&to_tz)
        .format(ZONED_FORMAT)
        .to_string())
}

/// Add days, weeks, and approximate months to a stamp.
pub fn shift(stamp: &str, delta: Shift) -> Result<String> {
    let date = parse_stamp(stamp)?;
    Ok((date + delta.as_duration()).format(STAMP_FORMAT).to_string())
}

/// Difference `end - start` in whole days, hours, and minutes.
pub fn difference(start: &str, end: &str) -> Result<DateSpan> {
    let delta = parse_stamp(end)? - parse_stamp(start)?;
    Ok(DateSpan {
        days: delta.num_days(),
        hours: delta.num_hours() % 24,
        minutes: delta.num_minutes() % 60,
    })
}

/// Resolve an IANA zone name.
pub fn parse_zone(zone: &str) -> Result<Tz> {
    zone.parse::<Tz>()
        .map_err(|_| OpsError::UnknownTimezone(zone.to_string()))
}

/// Parse a naive stamp, accepting a bare date as midnight.
pub fn parse_stamp(input: &str) -> Result<NaiveDateTime> {
    if let Ok(stamp) = NaiveDateTime::parse_from_str(input, STAMP_FORMAT) {
        return Ok(stamp);
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| OpsError::DateParse(input.to_string()))
}
