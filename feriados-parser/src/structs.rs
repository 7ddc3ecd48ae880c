use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HolidayKind {
    /// `inamovible`, `trasladable` and anything the page may add later.
    Official,
    /// `puente`, days granted for tourism.
    Bridge,
    /// `no_laborable`, optional days off that are not holidays.
    NonWorking,
}

impl HolidayKind {
    pub fn from_token(token: &str) -> Self {
        match token {
            "no_laborable" => Self::NonWorking,
            "puente" => Self::Bridge,
            _ => Self::Official,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Holiday {
    pub date: NaiveDate,
    pub label: String,
    pub kind: HolidayKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub summary: String,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub stamp: DateTime<Utc>,
    pub uid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    pub events: Vec<Event>,
}
