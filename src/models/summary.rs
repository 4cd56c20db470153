/// One major (non-finish, non-minor) entry after minor time has been
/// spread across the majors. `minutes` and `hours` carry the adjusted
/// value; `original_minutes` the raw derived duration.
#[derive(Debug, Clone, PartialEq)]
pub struct MajorEntry {
    pub description: String,
    pub original_minutes: i64,
    pub minutes: f64,
    pub hours: f64,
    pub context: String,
}

/// Totals for one context, tasks de-duplicated, both in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextSummary {
    pub context: String,
    pub original_minutes: i64,
    pub minutes: f64,
    pub hours: f64,
    pub tasks: Vec<String>,
}

#[derive(Debug, Default, Clone)]
pub struct DaySummary {
    pub majors: Vec<MajorEntry>,
    pub contexts: Vec<ContextSummary>,
    pub total_hours: f64,
}
