use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use csv::StringRecord;

/// Column order of the per-day sheet, header included. Historical sheets
/// use exactly these names and this order.
pub const SHEET_FIELDS: [&str; 5] = [
    "description",
    "start_time",
    "context",
    "is_finish",
    "is_minor",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub description: String,   // ⇔ sheet.description (TEXT, empty for stop rows)
    pub start_time: NaiveTime, // ⇔ sheet.start_time (TEXT "HH:MM")
    pub context: String,       // ⇔ sheet.context (TEXT, defaults to description)
    pub is_finish: bool,       // ⇔ sheet.is_finish ("True" | "False")
    pub is_minor: bool,        // ⇔ sheet.is_minor ("True" | "False")
}

impl Entry {
    pub fn new(
        description: &str,
        start_time: NaiveTime,
        context: &str,
        is_finish: bool,
        is_minor: bool,
    ) -> Self {
        Self {
            description: description.to_string(),
            start_time,
            context: context.to_string(),
            is_finish,
            is_minor,
        }
    }

    pub fn time_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    /// Start time as minutes since midnight.
    pub fn start_minutes(&self) -> i64 {
        crate::utils::time::minutes_since_midnight(self.start_time)
    }

    /// Row in sheet column order, booleans as the literal text True/False.
    pub fn to_record(&self) -> [String; 5] {
        [
            self.description.clone(),
            self.time_str(),
            self.context.clone(),
            bool_to_field(self.is_finish).to_string(),
            bool_to_field(self.is_minor).to_string(),
        ]
    }

    /// Parse one sheet row. Any malformed field rejects the row, and the
    /// caller rejects the whole sheet.
    pub fn from_record(record: &StringRecord) -> AppResult<Self> {
        if record.len() != SHEET_FIELDS.len() {
            return Err(AppError::MalformedRow(format!(
                "expected {} fields, found {}",
                SHEET_FIELDS.len(),
                record.len()
            )));
        }

        let start_time = crate::utils::time::parse_time(&record[1])
            .ok_or_else(|| AppError::MalformedRow(format!("bad start_time '{}'", &record[1])))?;

        Ok(Self {
            description: record[0].to_string(),
            start_time,
            context: record[2].to_string(),
            is_finish: bool_from_field(&record[3])?,
            is_minor: bool_from_field(&record[4])?,
        })
    }
}

fn bool_to_field(b: bool) -> &'static str {
    if b { "True" } else { "False" }
}

fn bool_from_field(s: &str) -> AppResult<bool> {
    match s {
        "True" => Ok(true),
        "False" => Ok(false),
        other => Err(AppError::MalformedRow(format!("bad boolean '{}'", other))),
    }
}
