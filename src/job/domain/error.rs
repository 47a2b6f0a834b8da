//! Error types for job domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing job domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JobDomainError {
    /// The job identifier is not a valid integer.
    #[error("invalid job id '{0}'")]
    InvalidJobId(String),

    /// The title has no characters.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The salary is negative.
    #[error("salary must be >= 0, got {0}")]
    NegativeSalary(i32),

    /// The equity value is not a plain decimal such as `0.25`.
    #[error("equity '{0}' is not a decimal number")]
    MalformedEquity(String),

    /// The equity value lies outside `[0, 1]`.
    #[error("equity '{0}' must be between 0 and 1")]
    EquityOutOfRange(String),
}
