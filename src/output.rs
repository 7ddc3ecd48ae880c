use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::Utc;
use feriados_parser::{Calendar, Holiday};

use crate::Error;

pub fn default_path(year: i32) -> PathBuf {
    PathBuf::from(format!("argentina_holidays_{year}.ics"))
}

/// Writes `holidays` as an iCalendar file at `path`, replacing any existing
/// file, and returns the number of events written.
pub fn write_calendar(holidays: &[Holiday], path: &Path) -> Result<usize, Error> {
    let calendar = Calendar::from_holidays(holidays, Utc::now());

    fs::write(path, calendar.to_ics().to_string()).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(calendar.events.len())
}

/// Human-readable listing, sorted by date and then label.
pub fn summary(holidays: &[Holiday], year: i32) -> String {
    let mut sorted = holidays.iter().collect::<Vec<_>>();
    sorted.sort();

    let lines = sorted
        .iter()
        .map(|holiday| format!("{}: {}\n", holiday.date.format("%Y-%m-%d"), holiday.label))
        .collect::<String>();

    format!("Found {} holidays for {year}:\n{lines}", holidays.len())
}
