use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::summary::MajorEntry;

/// Spread minor-task time across the major entries.
///
/// The reported total for major entries must equal the true elapsed total,
/// so every major duration is inflated by total/major. Stop entries count
/// for nothing on either side.
pub fn redistribute(entries: &[Entry], durations: &[i64]) -> AppResult<Vec<MajorEntry>> {
    let total_minutes: i64 = entries
        .iter()
        .zip(durations)
        .filter(|(e, _)| !e.is_finish)
        .map(|(_, d)| *d)
        .sum();

    let major_minutes: i64 = entries
        .iter()
        .zip(durations)
        .filter(|(e, _)| !e.is_finish && !e.is_minor)
        .map(|(_, d)| *d)
        .sum();

    // A day with only minor or stop entries has nothing to absorb the
    // minor time, and the ratio below would divide by zero.
    if major_minutes == 0 {
        return Err(AppError::NoMajorWork);
    }

    let stretch_factor = total_minutes as f64 / major_minutes as f64;

    let majors = entries
        .iter()
        .zip(durations)
        .filter(|(e, _)| !e.is_finish && !e.is_minor)
        .map(|(e, d)| MajorEntry {
            description: e.description.clone(),
            original_minutes: *d,
            minutes: *d as f64 * stretch_factor,
            hours: *d as f64 * stretch_factor / 60.0,
            context: e.context.clone(),
        })
        .collect();

    Ok(majors)
}
