//! Person filter/sort field selection.
//!
//! Field names coming from outer layers (query strings, form fields) are
//! parsed into [`FilterField`] / [`SortField`]. Parsing ignores ASCII case and
//! `_`, so `dateOfBirth`, `date_of_birth` and `DateOfBirth` are the same field.

use crate::service::dto::PersonView;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Format applied to `date_of_birth` before text matching, e.g. `01 January 2000`.
pub const DATE_OF_BIRTH_SEARCH_FORMAT: &str = "%d %B %Y";

/// Field name that does not map to a filterable or sortable person field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldError(pub String);

impl Display for UnknownFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown person field: `{}`", self.0)
    }
}

impl Error for UnknownFieldError {}

/// Person fields that support contains-text filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Name,
    Email,
    DateOfBirth,
    Gender,
    Country,
    Address,
}

impl FilterField {
    /// Text the search string is matched against, `None` when the value is missing.
    fn text_of(self, view: &PersonView) -> Option<String> {
        match self {
            Self::Name => Some(view.name.clone()),
            Self::Email => Some(view.email.clone()),
            Self::DateOfBirth => view
                .date_of_birth
                .map(|date| date.format(DATE_OF_BIRTH_SEARCH_FORMAT).to_string()),
            Self::Gender => view.gender.clone(),
            Self::Country => view.country.clone(),
            Self::Address => view.address.clone(),
        }
    }

    /// Returns whether `view` is retained for a lowercase search needle.
    ///
    /// Missing or empty values are retained. This keeps records with
    /// incomplete data visible under any search; it is not a zero-match.
    pub fn matches(self, view: &PersonView, lowercase_needle: &str) -> bool {
        match self.text_of(view) {
            Some(text) if !text.is_empty() => text.to_lowercase().contains(lowercase_needle),
            _ => true,
        }
    }
}

impl FromStr for FilterField {
    type Err = UnknownFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_field_name(value).as_str() {
            "name" | "personname" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "dateofbirth" => Ok(Self::DateOfBirth),
            "gender" => Ok(Self::Gender),
            "country" | "countryid" => Ok(Self::Country),
            "address" => Ok(Self::Address),
            _ => Err(UnknownFieldError(value.to_string())),
        }
    }
}

/// Person fields that support ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Email,
    Gender,
    Country,
    Address,
    Age,
    DateOfBirth,
    ReceiveNewsLetters,
}

impl SortField {
    /// Ascending comparison; text fields ignore case, missing values sort first.
    fn compare(self, left: &PersonView, right: &PersonView) -> Ordering {
        match self {
            Self::Name => compare_text(Some(&left.name), Some(&right.name)),
            Self::Email => compare_text(Some(&left.email), Some(&right.email)),
            Self::Gender => compare_text(left.gender.as_deref(), right.gender.as_deref()),
            Self::Country => compare_text(left.country.as_deref(), right.country.as_deref()),
            Self::Address => compare_text(left.address.as_deref(), right.address.as_deref()),
            Self::Age => left.age.cmp(&right.age),
            Self::DateOfBirth => left.date_of_birth.cmp(&right.date_of_birth),
            Self::ReceiveNewsLetters => left.receive_news_letters.cmp(&right.receive_news_letters),
        }
    }
}

impl FromStr for SortField {
    type Err = UnknownFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_field_name(value).as_str() {
            "name" | "personname" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "gender" => Ok(Self::Gender),
            "country" | "countryid" => Ok(Self::Country),
            "address" => Ok(Self::Address),
            "age" => Ok(Self::Age),
            "dateofbirth" => Ok(Self::DateOfBirth),
            "receivenewsletters" => Ok(Self::ReceiveNewsLetters),
            _ => Err(UnknownFieldError(value.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Keeps views whose `field` contains `search_text`, ignoring case.
///
/// Empty or absent search text returns `views` unchanged.
pub fn filter_views(
    views: Vec<PersonView>,
    field: FilterField,
    search_text: Option<&str>,
) -> Vec<PersonView> {
    let Some(search_text) = search_text.filter(|text| !text.is_empty()) else {
        return views;
    };
    let needle = search_text.to_lowercase();
    views
        .into_iter()
        .filter(|view| field.matches(view, needle.as_str()))
        .collect()
}

/// Orders views by `field`; ties keep their input order.
pub fn sort_views(
    mut views: Vec<PersonView>,
    field: SortField,
    order: SortOrder,
) -> Vec<PersonView> {
    match order {
        SortOrder::Ascending => views.sort_by(|left, right| field.compare(left, right)),
        SortOrder::Descending => views.sort_by(|left, right| field.compare(right, left)),
    }
    views
}

fn normalize_field_name(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '_' && !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Ordinal comparison after folding to upper case, so `_` sorts after letters.
fn compare_text(left: Option<&str>, right: Option<&str>) -> Ordering {
    left.map(str::to_uppercase)
        .cmp(&right.map(str::to_uppercase))
}
