// Tests for writing the calendar file to disk.
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

use chrono::NaiveDate;
use feriados_ical::{write_calendar, Error, Holiday, HolidayKind};

fn test_dir(test_name: &str) -> PathBuf {
    let timestamp = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = env::temp_dir().join(format!(
        "feriados_ical_{}_{}_{}",
        test_name,
        std::process::id(),
        timestamp
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn holidays() -> Vec<Holiday> {
    [
        (1, 1, "Año Nuevo"),
        (3, 24, "Día Nacional de la Memoria por la Verdad y la Justicia"),
        (7, 9, "Día de la Independencia"),
    ]
    .into_iter()
    .map(|(month, day, label)| Holiday {
        date: NaiveDate::from_ymd_opt(2025, month, day).unwrap(),
        label: label.into(),
        kind: HolidayKind::Official,
    })
    .collect()
}

fn without_dtstamp(ics: &str) -> String {
    ics.lines()
        .filter(|line| !line.starts_with("DTSTAMP:"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_rewriting_gives_the_same_events() {
    let dir = test_dir("rewrite");
    let path = dir.join("argentina_holidays_2025.ics");

    assert_eq!(write_calendar(&holidays(), &path).unwrap(), 3);
    let first = fs::read_to_string(&path).unwrap();

    assert_eq!(write_calendar(&holidays(), &path).unwrap(), 3);
    let second = fs::read_to_string(&path).unwrap();

    assert_eq!(without_dtstamp(&first), without_dtstamp(&second));
    assert_eq!(first.matches("BEGIN:VEVENT").count(), 3);
    assert!(first.contains("SUMMARY:Día de la Independencia"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn test_existing_file_is_overwritten() {
    let dir = test_dir("overwrite");
    let path = dir.join("out.ics");
    fs::write(&path, "stale contents that are much longer than nothing at all").unwrap();

    assert_eq!(write_calendar(&holidays()[..1], &path).unwrap(), 1);

    let ics = fs::read_to_string(&path).unwrap();
    assert!(ics.starts_with("BEGIN:VCALENDAR"));
    assert!(!ics.contains("stale"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn test_zero_holidays_still_write_a_calendar() {
    let dir = test_dir("empty");
    let path = dir.join("argentina_holidays_2031.ics");

    assert_eq!(write_calendar(&[], &path).unwrap(), 0);

    let ics = fs::read_to_string(&path).unwrap();
    assert!(ics.starts_with("BEGIN:VCALENDAR"));
    assert!(ics.trim_end().ends_with("END:VCALENDAR"));
    assert!(ics.contains("VERSION:2.0"));
    assert!(!ics.contains("BEGIN:VEVENT"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn test_unwritable_path_is_reported() {
    let dir = test_dir("unwritable");
    let path = dir.join("missing").join("out.ics");

    let result = write_calendar(&holidays(), &path);

    match result {
        Err(Error::Write { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("expected a write error, got {other:?}"),
    }

    let _ = fs::remove_dir_all(dir);
}
