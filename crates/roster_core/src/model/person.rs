//! Person domain model.
//!
//! # Responsibility
//! - Define the canonical person record stored by the person directory.
//! - Provide the field validation shared by add and update paths.
//!
//! # Invariants
//! - `id` is stable and never reused for another person.
//! - `name` is non-blank and `email` is a well-formed address once stored.
//! - `gender` is stored as the textual form of [`Gender`].

use crate::model::country::CountryId;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("valid email regex"));

/// Stable identifier for a person.
pub type PersonId = Uuid;

/// Gender options accepted on person requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Textual form stored on [`Person::gender`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    /// Parses the stored text back into an option, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level validation failures for person input.
///
/// Only the first violation is reported; rules run in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    NameRequired,
    EmailRequired,
    InvalidEmail(String),
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameRequired => write!(f, "person name can not be blank"),
            Self::EmailRequired => write!(f, "email can not be blank"),
            Self::InvalidEmail(value) => {
                write!(f, "email value should be a valid email, got `{value}`")
            }
        }
    }
}

impl PersonValidationError {
    /// Stable tag for log lines; never carries the rejected value.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NameRequired => "name_required",
            Self::EmailRequired => "email_required",
            Self::InvalidEmail(_) => "invalid_email",
        }
    }
}

impl Error for PersonValidationError {}

/// Canonical person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    /// Textual [`Gender`] value, kept as text to match the view shape.
    pub gender: Option<String>,
    /// Weak reference; may point at a country that does not exist.
    pub country_id: Option<CountryId>,
    pub address: Option<String>,
    pub receive_news_letters: bool,
}

impl Person {
    /// Creates a person with a generated ID and every optional field unset.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            date_of_birth: None,
            gender: None,
            country_id: None,
            address: None,
            receive_news_letters: false,
        }
    }

    /// Validates the stored record against the same rules as request input.
    pub fn validate(&self) -> Result<(), PersonValidationError> {
        validate_person_fields(Some(self.name.as_str()), Some(self.email.as_str()))
    }
}

/// Runs the required-field and email-shape rules.
///
/// # Errors
/// - `NameRequired` when `name` is absent or blank.
/// - `EmailRequired` when `email` is absent or blank.
/// - `InvalidEmail` when `email` does not have the `local@domain` shape.
pub fn validate_person_fields(
    name: Option<&str>,
    email: Option<&str>,
) -> Result<(), PersonValidationError> {
    if name.map_or(true, |value| value.trim().is_empty()) {
        return Err(PersonValidationError::NameRequired);
    }

    let email = match email {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Err(PersonValidationError::EmailRequired),
    };
    if !EMAIL_RE.is_match(email) {
        return Err(PersonValidationError::InvalidEmail(email.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_person_fields, Gender, Person, PersonValidationError};

    #[test]
    fn gender_text_roundtrips_case_insensitively() {
        assert_eq!(Gender::Female.as_str(), "Female");
        assert_eq!(Gender::parse("fEmAlE"), Some(Gender::Female));
        assert_eq!(Gender::parse(" other "), Some(Gender::Other));
        assert_eq!(Gender::parse("unknown"), None);
    }

    #[test]
    fn validation_reports_first_violation() {
        assert_eq!(
            validate_person_fields(None, None).unwrap_err(),
            PersonValidationError::NameRequired
        );
        assert_eq!(
            validate_person_fields(Some("Ana"), Some("  ")).unwrap_err(),
            PersonValidationError::EmailRequired
        );
        assert_eq!(
            validate_person_fields(Some("Ana"), Some("ana.example.com")).unwrap_err(),
            PersonValidationError::InvalidEmail("ana.example.com".to_string())
        );
    }

    #[test]
    fn validation_rejects_malformed_addresses() {
        for email in ["@example.com", "ana@", "ana@@example.com", "ana @example.com"] {
            assert!(
                validate_person_fields(Some("Ana"), Some(email)).is_err(),
                "`{email}` should be rejected"
            );
        }
        assert!(validate_person_fields(Some("Ana"), Some("ana@example.com")).is_ok());
    }

    #[test]
    fn new_person_defaults_optional_fields() {
        let person = Person::new("Ana", "ana@example.com");
        assert!(!person.id.is_nil());
        assert_eq!(person.date_of_birth, None);
        assert_eq!(person.gender, None);
        assert_eq!(person.country_id, None);
        assert!(!person.receive_news_letters);
        assert!(person.validate().is_ok());
    }
}
