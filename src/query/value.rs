//! Positional parameter values produced by the query builders.

use bigdecimal::BigDecimal;

/// A value bound to a `$n` placeholder.
///
/// The variant carries the SQL type the adapter must bind it as, so that a
/// `NULL` can still be sent with the column's type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    /// Non-null text.
    Text(String),
    /// Text that may be `NULL`.
    NullableText(Option<String>),
    /// Non-null 32-bit integer.
    Integer(i32),
    /// Integer that may be `NULL`.
    NullableInteger(Option<i32>),
    /// Exact decimal that may be `NULL`.
    NullableNumeric(Option<BigDecimal>),
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}
