use crate::models::entry::Entry;

/// Per-entry durations in minutes, derived from successive start times.
///
/// The sheet stores only start times: each entry runs until the next one
/// begins, and the last entry runs until `now_minutes`. Input must already
/// be sorted ascending. Durations of stop entries are still produced here;
/// the consumers treat them as zero.
pub fn derive_durations(entries: &[Entry], now_minutes: i64) -> Vec<i64> {
    let mut boundaries: Vec<i64> = entries.iter().map(Entry::start_minutes).collect();
    boundaries.push(now_minutes);

    boundaries.windows(2).map(|w| w[1] - w[0]).collect()
}
