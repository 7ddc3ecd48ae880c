use chrono::{DateTime, FixedOffset, NaiveTime, Utc};

use crate::{Calendar, Event, Holiday};

/// Argentina has stayed on UTC-3 without daylight saving since 2009.
const ARGENTINA: FixedOffset = match FixedOffset::east_opt(-3 * 3600) {
    Some(offset) => offset,
    None => panic!("UTC-3 is a valid offset"),
};
const START: NaiveTime = match NaiveTime::from_hms_opt(8, 0, 0) {
    Some(time) => time,
    None => panic!("08:00 is a valid time"),
};
const END: NaiveTime = match NaiveTime::from_hms_opt(22, 0, 0) {
    Some(time) => time,
    None => panic!("22:00 is a valid time"),
};

const UID_DOMAIN: &str = "argentina.holidays";

impl Event {
    /// Builds the 08:00–22:00 local event for `holiday`.
    pub fn from_holiday(holiday: &Holiday, stamp: DateTime<Utc>) -> Self {
        let at = |time| {
            let local = holiday.date.and_time(time);
            DateTime::from_naive_utc_and_offset(local - ARGENTINA, ARGENTINA)
        };

        let uid = format!(
            "{}-{}@{UID_DOMAIN}",
            holiday.date.format("%Y%m%d"),
            holiday.label.replace(' ', "_").replace(['(', ')'], "")
        );

        Self {
            summary: holiday.label.clone(),
            start: at(START),
            end: at(END),
            stamp,
            uid,
        }
    }
}

impl Calendar {
    /// One event per holiday, in input order, all stamped with `stamp`.
    pub fn from_holidays(holidays: &[Holiday], stamp: DateTime<Utc>) -> Self {
        let events = holidays
            .iter()
            .map(|holiday| Event::from_holiday(holiday, stamp))
            .collect();

        Self { events }
    }
}
