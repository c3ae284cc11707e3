//! Typed form submissions.
//!
//! Every form arrives as strings (plus the multi-valued `genres`), is trimmed,
//! validated with `garde`, and only then converted into an active model or an
//! insert payload. Validation failures are collected per field in
//! [`FormErrors`] so the form can be re-rendered with messages next to inputs.

pub mod artist;
pub mod show;
pub mod venue;

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::db::enums::{Genre, UsState};

pub use artist::ArtistForm;
pub use show::{NewShow, ShowForm};
pub use venue::VenueForm;

/// Token the yes/no selects submit for "Yes".
pub const TRUTHY_TOKEN: &str = "True";

/// Field name → messages, in field order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

impl From<garde::Report> for FormErrors {
    fn from(report: garde::Report) -> Self {
        let mut errors = Self::default();
        for (path, error) in report.iter() {
            // `genres[2]` reports against the `genres` input
            let path = path.to_string();
            let field = path.split('[').next().unwrap_or_default();
            errors.add(field, error.message());
        }
        errors
    }
}

/// Body of the venue and artist search forms.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub search_term: String,
}

/// `"True"` → true, `""`/`"False"` → false, anything else is not a flag.
pub fn parse_seeking_flag(value: &str) -> Option<bool> {
    match value {
        TRUTHY_TOKEN => Some(true),
        "" | "False" => Some(false),
        _ => None,
    }
}

/// Blank input means "not provided".
pub(crate) fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub(crate) fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

pub(crate) fn required(value: &str, _ctx: &()) -> garde::Result {
    if value.is_empty() {
        return Err(garde::Error::new("This field is required."));
    }
    Ok(())
}

pub(crate) fn known_state(value: &str, _ctx: &()) -> garde::Result {
    if value.is_empty() {
        return Err(garde::Error::new("This field is required."));
    }
    UsState::from_str(value)
        .map(|_| ())
        .ok_or_else(|| garde::Error::new(format!("'{}' is not a valid state.", value)))
}

pub(crate) fn known_genres(values: &[String], _ctx: &()) -> garde::Result {
    if values.is_empty() {
        return Err(garde::Error::new("Pick at least one genre."));
    }
    match values.iter().find(|g| Genre::from_str(g).is_none()) {
        Some(unknown) => Err(garde::Error::new(format!(
            "'{}' is not a valid genre.",
            unknown
        ))),
        None => Ok(()),
    }
}

/// Empty is fine; otherwise an absolute http(s) URL with a host.
pub(crate) fn optional_url(value: &str, _ctx: &()) -> garde::Result {
    if value.is_empty() {
        return Ok(());
    }
    match url::Url::parse(value) {
        Ok(parsed)
            if matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some() =>
        {
            Ok(())
        }
        _ => Err(garde::Error::new("Invalid URL.")),
    }
}

pub(crate) fn seeking_flag(value: &str, _ctx: &()) -> garde::Result {
    parse_seeking_flag(value)
        .map(|_| ())
        .ok_or_else(|| garde::Error::new("Choose Yes or No."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeking_flag_only_accepts_the_truthy_token() {
        assert_eq!(parse_seeking_flag("True"), Some(true));
        assert_eq!(parse_seeking_flag(""), Some(false));
        assert_eq!(parse_seeking_flag("False"), Some(false));
        assert_eq!(parse_seeking_flag("false"), None);
        assert_eq!(parse_seeking_flag("yes"), None);
        assert_eq!(parse_seeking_flag("true"), None);
    }

    #[test]
    fn test_optional_url() {
        assert!(optional_url("", &()).is_ok());
        assert!(optional_url("https://www.facebook.com/thedueling", &()).is_ok());
        assert!(optional_url("http://example.com", &()).is_ok());
        assert!(optional_url("facebook.com/thedueling", &()).is_err());
        assert!(optional_url("mailto:someone@example.com", &()).is_err());
        assert!(optional_url("not a url", &()).is_err());
    }

    #[test]
    fn test_known_genres() {
        assert!(known_genres(&["Jazz".to_string(), "R&B".to_string()], &()).is_ok());
        assert!(known_genres(&[], &()).is_err());
        assert!(known_genres(&["Jazz".to_string(), "Polka".to_string()], &()).is_err());
    }

    #[test]
    fn test_form_errors_display_and_lookup() {
        let mut errors = FormErrors::default();
        errors.add("name", "This field is required.");
        errors.add("genres", "Pick at least one genre.");

        assert!(errors.has("name"));
        assert!(!errors.has("city"));
        assert_eq!(errors.get("name"), ["This field is required.".to_string()]);
        assert!(errors.get("city").is_empty());
        assert_eq!(
            errors.to_string(),
            "genres: Pick at least one genre.; name: This field is required."
        );
    }
}
