use chrono::NaiveDate;

use crate::DateError;

const MONTHS: [(&str, u32); 13] = [
    ("enero", 1),
    ("febrero", 2),
    ("marzo", 3),
    ("abril", 4),
    ("mayo", 5),
    ("junio", 6),
    ("julio", 7),
    ("agosto", 8),
    ("septiembre", 9),
    ("setiembre", 9),
    ("octubre", 10),
    ("noviembre", 11),
    ("diciembre", 12),
];

/// Parses `D/M/YYYY` (day and month may be zero-padded) and checks that the
/// year is `year`.
pub fn parse_slash_date(raw: &str, year: i32) -> Result<NaiveDate, DateError> {
    let raw = raw.trim();
    let parts = raw.split('/').collect::<Vec<_>>();

    let [day, month, found_year] = parts.as_slice() else {
        return Err(DateError::Shape(raw.to_string()));
    };

    if parts
        .iter()
        .any(|part| part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(DateError::NotNumeric(raw.to_string()));
    }

    if day.len() > 2 || month.len() > 2 || found_year.len() != 4 {
        return Err(DateError::Shape(raw.to_string()));
    }

    let shape = || DateError::Shape(raw.to_string());
    let day = day.parse::<u32>().map_err(|_| shape())?;
    let month = month.parse::<u32>().map_err(|_| shape())?;
    let found_year = found_year.parse::<i32>().map_err(|_| shape())?;

    if found_year != year {
        return Err(DateError::YearMismatch {
            expected: year,
            found: found_year,
        });
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| DateError::InvalidDate(raw.to_string()))
}

/// Finds the first `<day> de <month>` phrase in `text` (e.g. `1° de enero`,
/// `25 de Diciembre`) and resolves it in `year`.
pub fn parse_prose_date(text: &str, year: i32) -> Option<NaiveDate> {
    let chars = text.to_lowercase().chars().collect::<Vec<_>>();

    let (day, month_name) = (0..chars.len()).find_map(|start| day_of_month(&chars[start..]))?;

    let month = MONTHS
        .iter()
        .find(|(name, _)| *name == month_name)
        .map(|(_, month)| *month)?;

    NaiveDate::from_ymd_opt(year, month, day)
}

fn day_of_month(chars: &[char]) -> Option<(u32, String)> {
    let digits = chars.iter().take(2).take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }

    let day = chars[..digits].iter().collect::<String>().parse::<u32>().ok()?;

    let mut rest = &chars[digits..];
    if let Some('°' | 'º') = rest.first() {
        rest = &rest[1..];
    }

    let rest = skip_whitespace(rest)?;
    let rest = rest.strip_prefix(&['d', 'e'])?;
    let rest = skip_whitespace(rest)?;

    let month = rest
        .iter()
        .take_while(|c| c.is_alphanumeric() || **c == '_')
        .collect::<String>();

    (!month.is_empty()).then_some((day, month))
}

fn skip_whitespace(chars: &[char]) -> Option<&[char]> {
    let skipped = chars.iter().take_while(|c| c.is_whitespace()).count();
    (skipped > 0).then(|| &chars[skipped..])
}

/// Trims whitespace and any run of trailing periods and spaces. Idempotent.
pub fn normalize_label(label: &str) -> String {
    label
        .trim()
        .trim_end_matches(|c: char| c == '.' || c.is_whitespace())
        .to_string()
}
