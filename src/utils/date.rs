use chrono::NaiveDate;

/// The local calendar date; every sheet is keyed on it.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
