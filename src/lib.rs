//! Fetches Argentina's national holidays for a year from the government
//! website and writes them to an iCalendar file.
//!
//! The page is read from `https://www.argentina.gob.ar/interior/feriados-nacionales-<year>`,
//! decoding happens offline in [`feriados_parser`].

mod error;

pub mod cli;
pub mod output;
pub mod runner;
pub mod source;

pub use error::Error;
pub use feriados_parser::{Holiday, HolidayKind};
pub use output::{default_path, summary, write_calendar};
pub use runner::{run, RunSummary};
pub use source::{holidays_url, year_from_url, Source};
