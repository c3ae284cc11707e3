use chrono::{DateTime, NaiveDateTime, Utc};
use garde::Validate;
use serde::Deserialize;

use super::{trim_in_place, FormErrors};

/// Formats accepted for naive (zone-less) start times, read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Format used to prefill the start time input.
pub const START_TIME_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ShowForm {
    #[garde(custom(record_id))]
    pub artist_id: String,
    #[garde(custom(record_id))]
    pub venue_id: String,
    #[garde(custom(valid_start_time))]
    pub start_time: String,
}

/// A validated show submission; the referenced rows are checked on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

impl ShowForm {
    /// Empty ids with the start time defaulted to `now`.
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            start_time: now.format(START_TIME_INPUT_FORMAT).to_string(),
            ..Default::default()
        }
    }

    pub fn trimmed(mut self) -> Self {
        trim_in_place(&mut self.artist_id);
        trim_in_place(&mut self.venue_id);
        trim_in_place(&mut self.start_time);
        self
    }

    pub fn to_new_show(&self) -> Result<NewShow, FormErrors> {
        self.validate()?;

        let invalid = |field: &str| {
            let mut errors = FormErrors::default();
            errors.add(field, "Invalid value.");
            errors
        };
        Ok(NewShow {
            artist_id: self.artist_id.parse().map_err(|_| invalid("artist_id"))?,
            venue_id: self.venue_id.parse().map_err(|_| invalid("venue_id"))?,
            start_time: parse_start_time(&self.start_time).ok_or_else(|| invalid("start_time"))?,
        })
    }
}

/// Parses RFC 3339 or one of the naive formats (taken as UTC).
pub fn parse_start_time(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

fn record_id(value: &str, _ctx: &()) -> garde::Result {
    if value.is_empty() {
        return Err(garde::Error::new("This field is required."));
    }
    match value.parse::<i32>() {
        Ok(id) if id > 0 => Ok(()),
        _ => Err(garde::Error::new(format!("'{}' is not a valid id.", value))),
    }
}

fn valid_start_time(value: &str, _ctx: &()) -> garde::Result {
    if value.is_empty() {
        return Err(garde::Error::new("This field is required."));
    }
    parse_start_time(value)
        .map(|_| ())
        .ok_or_else(|| garde::Error::new("Not a valid datetime value."))
}
