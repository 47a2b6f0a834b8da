//! Error types for company domain validation.

use thiserror::Error;

/// Errors returned while constructing company domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompanyDomainError {
    /// The handle is empty, too long, or contains whitespace.
    #[error("handle must be 1 to 25 characters without whitespace, got '{0}'")]
    InvalidHandle(String),

    /// The company name has no characters.
    #[error("name must not be empty")]
    EmptyName,

    /// The employee count is negative.
    #[error("employee count must be >= 0, got {0}")]
    NegativeEmployeeCount(i32),

    /// The minimum employee bound exceeds the maximum.
    #[error("minEmployees ({min}) cannot be greater than maxEmployees ({max})")]
    InvertedEmployeeRange {
        /// Lower bound supplied by the caller.
        min: i32,
        /// Upper bound supplied by the caller.
        max: i32,
    },
}
