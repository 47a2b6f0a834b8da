//! Validated scalar types for job postings.

use super::JobDomainError;
use bigdecimal::BigDecimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Non-empty job title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct JobTitle(String);

impl JobTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::EmptyTitle`] when the value is empty.
    /// Whitespace counts as content.
    pub fn new(value: impl Into<String>) -> Result<Self, JobDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(JobDomainError::EmptyTitle);
        }
        Ok(Self(raw))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-negative yearly salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Salary(i32);

impl Salary {
    /// Creates a validated salary.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::NegativeSalary`] for values below zero.
    pub const fn new(value: i32) -> Result<Self, JobDomainError> {
        if value < 0 {
            return Err(JobDomainError::NegativeSalary(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw amount.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

/// Equity fraction in `[0, 1]`, kept as decimal text.
///
/// The text form is what clients send and receive; the parsed decimal is
/// used for range checks and for binding to the `NUMERIC` column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Equity {
    text: String,
    decimal: BigDecimal,
}

impl Equity {
    /// Parses an equity fraction such as `"0"`, `"0.25"`, `".5"` or `"1"`.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::MalformedEquity`] when the value is not a
    /// plain unsigned decimal, or [`JobDomainError::EquityOutOfRange`] when
    /// it exceeds 1.
    pub fn new(value: impl Into<String>) -> Result<Self, JobDomainError> {
        let text = value.into();
        if !is_plain_decimal(&text) {
            return Err(JobDomainError::MalformedEquity(text));
        }

        let normalized = if text.starts_with('.') {
            format!("0{text}")
        } else {
            text.clone()
        };
        let Ok(decimal) = BigDecimal::from_str(&normalized) else {
            return Err(JobDomainError::MalformedEquity(text));
        };
        if decimal > BigDecimal::from(1) {
            return Err(JobDomainError::EquityOutOfRange(text));
        }
        Ok(Self { text, decimal })
    }

    /// Builds an equity value from a stored decimal.
    ///
    /// # Errors
    ///
    /// Returns a [`JobDomainError`] when the stored value is negative or
    /// above 1.
    pub fn from_decimal(decimal: &BigDecimal) -> Result<Self, JobDomainError> {
        Self::new(decimal.to_plain_string())
    }

    /// Returns the decimal text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the parsed decimal.
    #[must_use]
    pub const fn as_decimal(&self) -> &BigDecimal {
        &self.decimal
    }

    /// Returns `true` when the fraction is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.decimal > BigDecimal::from(0)
    }
}

impl fmt::Display for Equity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Equity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// Accepts `digits`, `digits.digits` and `.digits`.
fn is_plain_decimal(text: &str) -> bool {
    let all_digits = |part: &str| part.chars().all(|ch| ch.is_ascii_digit());
    match text.split_once('.') {
        None => !text.is_empty() && all_digits(text),
        Some((whole, fraction)) => !fraction.is_empty() && all_digits(whole) && all_digits(fraction),
    }
}
