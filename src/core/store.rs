use crate::config::Config;
use crate::errors::AppResult;
use crate::models::entry::{Entry, SHEET_FIELDS};
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;
use chrono::{Local, NaiveDate};
use csv::{ReaderBuilder, Writer};
use std::fs;
use std::path::PathBuf;

/// Per-day sheet storage: one CSV file per calendar day, plus a backup
/// directory keeping the previous content of every rewritten sheet.
pub struct EntryStore {
    dir: PathBuf,
    backup_subdir: String,
    date: NaiveDate,
}

impl EntryStore {
    pub fn new(cfg: &Config, date: NaiveDate) -> Self {
        Self {
            dir: expand_tilde(&cfg.data_dir),
            backup_subdir: cfg.backup_subdir.clone(),
            date,
        }
    }

    /// Full path of the day's sheet
    pub fn sheet_path(&self) -> PathBuf {
        self.dir.join(format!("{}.csv", self.date))
    }

    /// Directory receiving pre-rewrite copies
    pub fn backup_dir(&self) -> PathBuf {
        self.dir.join(&self.backup_subdir)
    }

    /// Read all entries for the day. A missing sheet is an empty day; a
    /// malformed row fails the whole load, no partial results. Entries come
    /// back in file order, callers sort after every load.
    pub fn load(&self) -> AppResult<Vec<Entry>> {
        let path = self.sheet_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new().has_headers(true).from_path(&path)?;

        let mut entries = Vec::new();
        for record in reader.records() {
            entries.push(Entry::from_record(&record?)?);
        }

        Ok(entries)
    }

    /// Rewrite the day's sheet with the given entries, header first, in the
    /// given order (no re-sort here). The previous sheet content, if any, is
    /// copied into the backup directory tagged with the current time of day
    /// before anything is overwritten.
    pub fn persist(&self, entries: &[Entry], verbose: bool) -> AppResult<()> {
        let path = self.sheet_path();
        let backup_dir = self.backup_dir();

        fs::create_dir_all(&self.dir)?;
        fs::create_dir_all(&backup_dir)?;

        if path.exists() {
            let tag = Local::now().format("%H%M%S");
            let backup_path = backup_dir.join(format!("{}.csv.{}", self.date, tag));
            if verbose {
                info(format!(
                    "Backing up {} as {}",
                    path.display(),
                    backup_path.display()
                ));
            }
            fs::copy(&path, &backup_path)?;
        }

        if verbose {
            info(format!("Writing modified entries to {}", path.display()));
        }

        let mut writer = Writer::from_path(&path)?;
        writer.write_record(SHEET_FIELDS)?;
        for entry in entries {
            writer.write_record(&entry.to_record())?;
        }
        writer.flush()?;

        Ok(())
    }
}
