//! Country domain model.
//!
//! # Invariants
//! - `id` is generated once and never changes.
//! - `name` is unique inside one directory (enforced by the repository).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a country.
pub type CountryId = Uuid;

/// Canonical country record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    /// Display name, compared case-sensitively for uniqueness.
    pub name: String,
}

impl Country {
    /// Creates a country with a freshly generated ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// Returns whether a country name carries any visible content.
pub fn is_blank_name(name: &str) -> bool {
    name.trim().is_empty()
}
