mod calendar;
mod date;
mod error;
mod parser;
mod scan;
mod structs;

#[cfg(feature = "ics")]
mod ics;

pub use date::{normalize_label, parse_prose_date, parse_slash_date};
pub use error::{DateError, ParseError};
pub use parser::{parse_holidays, parse_holidays_with, RawRecord, RecordSource, ScriptScanner};
pub use structs::{Calendar, Event, Holiday, HolidayKind};

#[cfg(feature = "ics")]
pub use crate::ics::{PRODID, TZID, VERSION};
