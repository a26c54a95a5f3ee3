use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::PowerId;

/// Minimum number of characters a power description must hold.
pub const MIN_DESCRIPTION_LEN: usize = 20;

/// Checks that `value` is an acceptable power description.
///
/// Length is counted in characters, not bytes. NUL characters are refused
/// because SQLite's `length()` stops counting at the first one.
///
/// # Errors
/// Returns [`CoreError::DescriptionContainsNul`] if `value` contains `'\0'`,
/// or [`CoreError::InvalidDescription`] if it is shorter than
/// [`MIN_DESCRIPTION_LEN`].
pub fn validate_description(value: &str) -> Result<&str, CoreError> {
    if value.contains('\0') {
        return Err(CoreError::DescriptionContainsNul);
    }
    let len = value.chars().count();
    if len < MIN_DESCRIPTION_LEN {
        return Err(CoreError::InvalidDescription { len, min: MIN_DESCRIPTION_LEN });
    }
    Ok(value)
}

/// A power description that has passed [`validate_description`].
///
/// The only way to obtain one is through validation, so every write path
/// that takes a `Description` re-runs the check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Validates and wraps a description.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDescription`] if the value is too short.
    pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();
        validate_description(&value)?;
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Description {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Description> for String {
    fn from(d: Description) -> Self {
        d.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted power.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Power {
    /// Row id assigned on insert.
    pub id: PowerId,
    /// Short label (e.g. `"flight"`).
    pub name: String,
    /// What the power does; always at least [`MIN_DESCRIPTION_LEN`] characters.
    pub description: Description,
}

impl Power {
    #[must_use]
    pub fn new(id: PowerId, name: impl Into<String>, description: Description) -> Self {
        Self { id, name: name.into(), description }
    }
}

/// Field values for a power that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct NewPower {
    /// Short label.
    pub name: String,
    /// Already validated description.
    pub description: Description,
}

impl NewPower {
    pub fn new(name: impl Into<String>, description: Description) -> Self {
        Self { name: name.into(), description }
    }
}
