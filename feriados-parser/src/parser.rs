use log::{debug, warn};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde::Deserialize;

use crate::{
    date::{normalize_label, parse_slash_date},
    scan, Holiday, HolidayKind, ParseError,
};

macro_rules! selector {
    ($query:expr) => {{
        static SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse($query).unwrap());
        &SELECTOR
    }};
}

const LANGUAGE: &str = "es";

/// One entry of the embedded list, exactly as the page spells it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    pub date: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Strategy for pulling raw records out of the script block that declares
/// `holidays<year>`.
pub trait RecordSource {
    fn records(&self, script: &str, year: i32) -> Result<Vec<RawRecord>, ParseError>;
}

/// Default strategy: scans the object literal by bracket depth and decodes each
/// record on its own, so one malformed entry does not sink the rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptScanner;

impl RecordSource for ScriptScanner {
    fn records(&self, script: &str, year: i32) -> Result<Vec<RawRecord>, ParseError> {
        let array = scan::language_array(script, year, LANGUAGE)
            .ok_or(ParseError::LanguageArrayNotFound { year })?;

        let records = scan::objects(array)
            .into_iter()
            .filter_map(|object| match serde_json::from_str::<RawRecord>(object) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!("Skipping undecodable record {object}: {err}");
                    None
                }
            })
            .collect();

        Ok(records)
    }
}

pub fn parse_holidays<S: AsRef<str>>(html: S, year: i32) -> Result<Vec<Holiday>, ParseError> {
    parse_holidays_with(html, year, &ScriptScanner)
}

pub fn parse_holidays_with<S, R>(html: S, year: i32, source: &R) -> Result<Vec<Holiday>, ParseError>
where
    S: AsRef<str>,
    R: RecordSource + ?Sized,
{
    let html = Html::parse_document(html.as_ref());
    let marker = format!("holidays{year}");

    let script = html
        .select(selector!("script"))
        .map(|script| script.text().collect::<String>())
        .find(|text| text.contains(&marker))
        .ok_or(ParseError::DataBlockNotFound { year })?;

    debug!("Found `{marker}` in a {} byte script block", script.len());

    let holidays = source
        .records(&script, year)?
        .into_iter()
        .filter_map(|record| holiday_from_record(record, year))
        .collect::<Vec<_>>();

    if holidays.is_empty() {
        warn!("No holidays found for {year}");
    }

    Ok(holidays)
}

fn holiday_from_record(record: RawRecord, year: i32) -> Option<Holiday> {
    let kind = HolidayKind::from_token(&record.kind);

    if kind == HolidayKind::NonWorking {
        debug!("Skipping non-working day {} ({})", record.date, record.label);
        return None;
    }

    let date = match parse_slash_date(&record.date, year) {
        Ok(date) => date,
        Err(err) => {
            warn!("Could not parse date of {:?}: {err}", record.label);
            return None;
        }
    };

    Some(Holiday {
        date,
        label: normalize_label(&record.label),
        kind,
    })
}
