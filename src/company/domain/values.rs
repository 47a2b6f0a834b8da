//! Validated scalar types for the company domain.

use super::CompanyDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum handle length, matching the `VARCHAR(25)` column.
const MAX_HANDLE_LENGTH: usize = 25;

/// Unique, human-readable company identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyHandle(String);

impl CompanyHandle {
    /// Creates a validated handle.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyDomainError::InvalidHandle`] when the value is empty,
    /// longer than 25 characters, or contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, CompanyDomainError> {
        let raw = value.into();
        let length = raw.chars().count();
        let is_valid = (1..=MAX_HANDLE_LENGTH).contains(&length)
            && !raw.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(CompanyDomainError::InvalidHandle(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the handle as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CompanyHandle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CompanyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-empty company display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyName(String);

impl CompanyName {
    /// Creates a validated name.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyDomainError::EmptyName`] when the value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, CompanyDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(CompanyDomainError::EmptyName);
        }
        Ok(Self(raw))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-negative head count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeCount(i32);

impl EmployeeCount {
    /// Creates a validated count.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyDomainError::NegativeEmployeeCount`] for values below
    /// zero.
    pub const fn new(value: i32) -> Result<Self, CompanyDomainError> {
        if value < 0 {
            return Err(CompanyDomainError::NegativeEmployeeCount(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying count.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}
