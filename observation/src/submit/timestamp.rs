use chrono::{NaiveDate, NaiveTime, SecondsFormat};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("'{0}' is not a date in YYYY-MM-DD format")]
    InvalidDate(String),
    #[error("'{0}' is not a time in HH:MM or HH:MM:SS format")]
    InvalidTime(String),
}

/// Combines the separately entered date and time values into one RFC 3339
/// instant. The pair is interpreted as UTC; a combination that does not
/// parse is rejected here, before any record is assembled.
pub fn compose_contributed_at(date: &str, time: &str) -> Result<String, TimestampError> {
    let date = date.trim();
    let time = time.trim();
    let parsed_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| TimestampError::InvalidDate(date.to_string()))?;
    let parsed_time = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|_| TimestampError::InvalidTime(time.to_string()))?;
    Ok(parsed_date
        .and_time(parsed_time)
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Secs, true))
}
