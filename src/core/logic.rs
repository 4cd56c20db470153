use crate::core::calculator::{contexts, durations, redistribute};
use crate::errors::AppResult;
use crate::models::{entry::Entry, summary::DaySummary};

pub struct Core;

impl Core {
    /// Derive the full day summary from a sorted entry list and the summary
    /// clock (minutes since midnight). The clock is a parameter so tests
    /// never depend on the wall clock.
    pub fn build_day_summary(entries: &[Entry], now_minutes: i64) -> AppResult<DaySummary> {
        let durations = durations::derive_durations(entries, now_minutes);
        let majors = redistribute::redistribute(entries, &durations)?;
        let contexts = contexts::aggregate_contexts(&majors);
        let total_hours = majors.iter().map(|m| m.hours).sum();

        Ok(DaySummary {
            majors,
            contexts,
            total_hours,
        })
    }
}
