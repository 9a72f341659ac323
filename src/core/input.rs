use crate::utils::error::{LifeWeeksError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parses user-supplied date text.
///
/// Date-only and naive date-time inputs are taken as UTC; RFC 3339 input keeps
/// its offset.
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(LifeWeeksError::EmptyInput);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(naive.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Ok(date.and_time(NaiveTime::MIN).and_utc());
        }
    }

    Err(LifeWeeksError::InvalidDate {
        input: input.to_string(),
    })
}
