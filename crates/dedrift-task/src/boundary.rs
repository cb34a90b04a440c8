//! Start-boundary formatting.

use chrono::NaiveDateTime;

use dedrift_core::Clock;

use crate::error::TaskError;

/// Input format for the combined day/time string.
const INPUT_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Wire format the scheduler expects for `StartBoundary`.
const BOUNDARY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Combine an optional start day (`DD/MM/YYYY`) and time (`HH:MM`) into a
/// `StartBoundary` timestamp.
///
/// A missing day defaults to the clock's current local date, a missing time
/// to its current local time. Seconds are always `:00` since only
/// hour:minute are accepted as input.
pub fn format_start_boundary(
    day: Option<&str>,
    time: Option<&str>,
    clock: &dyn Clock,
) -> Result<String, TaskError> {
    let now = clock.now();
    let day = match day {
        Some(day) => day.to_string(),
        None => now.format("%d/%m/%Y").to_string(),
    };
    let time = match time {
        Some(time) => time.to_string(),
        None => now.format("%H:%M").to_string(),
    };

    let combined = format!("{day} {time}");
    let parsed = NaiveDateTime::parse_from_str(&combined, INPUT_FORMAT)
        .map_err(|_| TaskError::InvalidDateTime { value: combined })?;

    Ok(parsed.format(BOUNDARY_FORMAT).to_string())
}
