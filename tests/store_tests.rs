use chrono::{NaiveDate, NaiveTime};
use rtasklog::config::Config;
use rtasklog::core::store::EntryStore;
use rtasklog::errors::AppError;
use rtasklog::models::entry::Entry;
use std::env;
use std::fs;
use std::path::PathBuf;

fn sheet_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date")
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

/// Config pointing at a unique directory inside the system temp dir
fn test_config(name: &str) -> Config {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtasklog_store", name));
    fs::remove_dir_all(&path).ok();

    Config {
        data_dir: path.to_string_lossy().to_string(),
        backup_subdir: "backup".to_string(),
    }
}

fn sample_entries() -> Vec<Entry> {
    vec![
        Entry::new("Morning review, notes", t(8, 15), "Planning", false, false),
        Entry::new("Coffee", t(8, 45), "Breaks", false, true),
        Entry::new("Deep work", t(9, 0), "Project", false, false),
        Entry::new("", t(12, 0), "", true, false),
    ]
}

#[test]
fn round_trip_preserves_every_field() {
    let cfg = test_config("round_trip");
    let store = EntryStore::new(&cfg, sheet_date());
    let entries = sample_entries();

    store.persist(&entries, false).expect("persist");
    let loaded = store.load().expect("load");

    assert_eq!(loaded, entries);
}

#[test]
fn booleans_round_trip_through_literal_text() {
    let cfg = test_config("bool_text");
    let store = EntryStore::new(&cfg, sheet_date());

    store.persist(&sample_entries(), false).expect("persist");

    let content = fs::read_to_string(store.sheet_path()).expect("read sheet");
    assert!(content.contains("Coffee,08:45,Breaks,False,True"));
    assert!(content.contains(",12:00,,True,False"));
    assert!(!content.contains("true"));
}

#[test]
fn missing_sheet_loads_as_empty_day() {
    let cfg = test_config("missing_sheet");
    let store = EntryStore::new(&cfg, sheet_date());

    let loaded = store.load().expect("load");
    assert!(loaded.is_empty());
}

#[test]
fn short_row_fails_the_whole_load() {
    let cfg = test_config("short_row");
    let store = EntryStore::new(&cfg, sheet_date());

    fs::create_dir_all(&cfg.data_dir).expect("mkdir");
    fs::write(
        store.sheet_path(),
        "description,start_time,context,is_finish,is_minor\n\
         Deep work,09:00,Project,False,False\n\
         broken,09:30,Project\n",
    )
    .expect("write sheet");

    let err = store.load().expect_err("malformed row");
    assert!(matches!(err, AppError::Csv(_)));
}

#[test]
fn unknown_boolean_text_fails_the_whole_load() {
    let cfg = test_config("bad_bool");
    let store = EntryStore::new(&cfg, sheet_date());

    fs::create_dir_all(&cfg.data_dir).expect("mkdir");
    fs::write(
        store.sheet_path(),
        "description,start_time,context,is_finish,is_minor\n\
         Deep work,09:00,Project,TRUE,False\n",
    )
    .expect("write sheet");

    let err = store.load().expect_err("bad boolean");
    assert!(matches!(err, AppError::MalformedRow(_)));
}

#[test]
fn unparsable_time_fails_the_whole_load() {
    let cfg = test_config("bad_time");
    let store = EntryStore::new(&cfg, sheet_date());

    fs::create_dir_all(&cfg.data_dir).expect("mkdir");
    fs::write(
        store.sheet_path(),
        "description,start_time,context,is_finish,is_minor\n\
         Deep work,9am,Project,False,False\n",
    )
    .expect("write sheet");

    let err = store.load().expect_err("bad time");
    assert!(matches!(err, AppError::MalformedRow(_)));
}

#[test]
fn persist_creates_directories_on_first_write() {
    let cfg = test_config("creates_dirs");
    let store = EntryStore::new(&cfg, sheet_date());

    store.persist(&sample_entries(), false).expect("persist");

    assert!(store.sheet_path().exists());
    assert!(store.backup_dir().exists());
}

#[test]
fn rewrite_backs_up_the_previous_sheet_first() {
    let cfg = test_config("backup_first");
    let store = EntryStore::new(&cfg, sheet_date());

    let first = vec![Entry::new("First", t(9, 0), "First", false, false)];
    store.persist(&first, false).expect("first persist");

    let mut second = first.clone();
    second.push(Entry::new("Second", t(10, 0), "Second", false, false));
    store.persist(&second, false).expect("second persist");

    let backups: Vec<String> = fs::read_dir(store.backup_dir())
        .expect("backup dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(backups.len(), 1);
    assert!(backups[0].starts_with("2025-03-14.csv."));

    let backup_content =
        fs::read_to_string(store.backup_dir().join(&backups[0])).expect("read backup");
    assert!(backup_content.contains("First"));
    assert!(!backup_content.contains("Second"));

    let sheet_content = fs::read_to_string(store.sheet_path()).expect("read sheet");
    assert!(sheet_content.contains("Second"));
}

#[test]
fn persist_keeps_caller_order() {
    let cfg = test_config("caller_order");
    let store = EntryStore::new(&cfg, sheet_date());

    // The store never re-sorts; file order is exactly what it was given.
    let entries = vec![
        Entry::new("late", t(11, 0), "late", false, false),
        Entry::new("early", t(8, 0), "early", false, false),
    ];
    store.persist(&entries, false).expect("persist");

    let loaded = store.load().expect("load");
    assert_eq!(loaded[0].description, "late");
    assert_eq!(loaded[1].description, "early");
}
