//! Domain types and DTOs
//!
//! Content entities stored in the hosted tables. Each entity struct holds the
//! operator-editable columns; [`Record`] adds the backend-owned id and timestamps.

pub mod auth;
pub mod careers;
pub mod company;
pub mod hero;
pub mod news;
pub mod sectors;
pub mod seo;
pub mod team;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::services::Query;

/// How a table's rows are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    /// `order_index` ascending
    Position,
    /// `created_at` descending
    NewestFirst,
}

impl Ordering {
    pub fn apply(self, query: Query) -> Query {
        match self {
            Self::Position => query.order_asc("order_index"),
            Self::NewestFirst => query.order_desc("created_at"),
        }
    }
}

/// A content table editable from the admin console.
///
/// Writes always carry the whole entity; there is no partial patching.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const TABLE: &'static str;
    const ORDERING: Ordering;

    /// Check required fields and normalize clamped values before a write.
    fn validate(&mut self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// A stored row: backend id and timestamps around the entity's columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record<T> {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl<T> std::ops::Deref for Record<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.fields
    }
}

// ============================================================================
// Validation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {problem}")]
pub struct ValidationError {
    pub field: &'static str,
    pub problem: &'static str,
}

/// Required text inputs must contain something besides whitespace.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError {
            field,
            problem: "is required",
        });
    }
    Ok(())
}

/// The same loose check a browser applies to `type=email` inputs.
pub fn require_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    require(field, value)?;

    let value = value.trim();
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        return Err(ValidationError {
            field,
            problem: "must be a valid email address",
        });
    }
    Ok(())
}

/// Optional email inputs are checked only when filled in.
pub fn optional_email(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => require_email(field, v),
        _ => Ok(()),
    }
}

pub(crate) fn default_true() -> bool {
    true
}

/// Nullable columns come back as `null`; decode that the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// `active` flags left `null` count as active, like a missing key.
pub(crate) fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(|v| v.unwrap_or(true))
}
