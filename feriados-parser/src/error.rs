use thiserror::Error;

/// Failure to locate the holiday data inside a fetched page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no script block declares `holidays{year}`")]
    DataBlockNotFound { year: i32 },

    #[error("`holidays{year}` has no `es` array")]
    LanguageArrayNotFound { year: i32 },
}

/// Why a single `D/M/Y` date string was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("`{0}` is not of the form D/M/YYYY")]
    Shape(String),

    #[error("`{0}` has a non-numeric component")]
    NotNumeric(String),

    #[error("year {found} does not match {expected}")]
    YearMismatch { expected: i32, found: i32 },

    #[error("`{0}` is not a valid calendar date")]
    InvalidDate(String),
}
