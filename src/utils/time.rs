//! Time utilities: parsing HH:MM, minute arithmetic, clock resolution.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Drop seconds and below; sheet times have minute granularity.
pub fn truncate_to_minute(t: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t)
}

pub fn minutes_since_midnight(t: NaiveTime) -> i64 {
    i64::from(t.hour()) * 60 + i64::from(t.minute())
}

/// The summary clock: an explicit HH:MM override (tests) or the local wall
/// clock truncated to the minute.
pub fn resolve_now(overridden: Option<&String>) -> AppResult<NaiveTime> {
    match parse_optional_time(overridden)? {
        Some(t) => Ok(t),
        None => Ok(truncate_to_minute(Local::now().time())),
    }
}
