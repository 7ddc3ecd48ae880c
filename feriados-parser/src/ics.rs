use ics::{
    components::Parameter,
    escape_text,
    properties::{DtEnd, DtStart, Summary, TzName},
    Standard, TimeZone,
};

use crate::{Calendar, Event};

pub const PRODID: &str = "-//Argentina Holidays//feriados-ical//ES";
pub const VERSION: &str = "2.0";
pub const TZID: &str = "America/Argentina/Buenos_Aires";

const LOCAL_FORMAT: &str = "%Y%m%dT%H%M%S";
const UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

impl Calendar {
    #[must_use]
    pub fn to_ics(&self) -> ics::ICalendar<'_> {
        let mut art_standard = Standard::new("19700101T000000", "-0300", "-0300");
        art_standard.push(TzName::new("-03"));

        let mut icalendar = ics::ICalendar::new(VERSION, PRODID);
        icalendar.add_timezone(TimeZone::standard(TZID, art_standard));

        for event in &self.events {
            icalendar.add_event(event.to_ics());
        }

        icalendar
    }
}

impl Event {
    #[must_use]
    pub fn to_ics(&self) -> ics::Event<'_> {
        let mut ics_event = ics::Event::new(&self.uid, self.stamp.format(UTC_FORMAT).to_string());

        let mut start = DtStart::new(self.start.format(LOCAL_FORMAT).to_string());
        start.add(Parameter::new("TZID", TZID));

        let mut end = DtEnd::new(self.end.format(LOCAL_FORMAT).to_string());
        end.add(Parameter::new("TZID", TZID));

        ics_event.push(start);
        ics_event.push(end);
        ics_event.push(Summary::new(escape_text(self.summary.as_str())));

        ics_event
    }
}
