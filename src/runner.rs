use std::path::Path;

use feriados_parser::Holiday;
use log::{error, info};

use crate::{write_calendar, Error, Source};

/// What a run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub holidays: Vec<Holiday>,
    pub events_written: usize,
}

/// Fetches `year` and writes the calendar to `path`.
///
/// Anything that goes wrong before the write (building the client, the
/// request, finding the data block) is logged and yields an empty calendar.
/// Only a failed write is returned as an error.
pub async fn run(
    source: Result<Source, Error>,
    year: i32,
    path: &Path,
) -> Result<RunSummary, Error> {
    let fetched = match source {
        Ok(source) => source.holidays(year).await,
        Err(err) => Err(err),
    };

    let holidays = fetched.unwrap_or_else(|err| {
        error!("Could not get holidays for {year}: {err}");
        Vec::new()
    });

    let events_written = write_calendar(&holidays, path)?;
    info!("Wrote {events_written} events to {}", path.display());

    Ok(RunSummary {
        holidays,
        events_written,
    })
}
