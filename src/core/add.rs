use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::utils::time::{parse_time, truncate_to_minute};
use chrono::NaiveTime;

/// High-level business logic for the `write` command.
pub struct AddLogic;

impl AddLogic {
    /// Build one entry from a write request and insert it in time order.
    /// Persisting the updated list is the caller's step, so a failed build
    /// leaves the sheet on disk untouched.
    pub fn apply(
        entries: &mut Vec<Entry>,
        description: &str,
        time: Option<&String>,
        context: Option<&String>,
        stop: bool,
        minor: bool,
        now: NaiveTime,
    ) -> AppResult<()> {
        let start_time = match time {
            Some(s) => parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?,
            None => truncate_to_minute(now),
        };

        let context = match context {
            Some(c) => c.as_str(),
            None => description,
        };

        // A stop entry carries no task text, only the endpoint time.
        let entry = if stop {
            Entry::new("", start_time, context, true, minor)
        } else {
            Entry::new(description, start_time, context, false, minor)
        };

        entries.push(entry);
        sort_entries(entries);

        Ok(())
    }
}

/// Stable sort by start time; entries with equal timestamps keep their
/// relative order.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by_key(|e| e.start_time);
}
