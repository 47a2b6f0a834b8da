//! Request validation shared by the job and company services.
//!
//! Bodies and query strings are deserialized into typed request structs that
//! derive [`validator::Validate`]. Serde rejects unknown and mistyped fields;
//! the derived rules check ranges and lengths, recording every violation.
//! [`InvalidRequest`] carries the resulting messages back to the caller.

use serde::{Deserialize, Deserializer};
use std::borrow::Cow;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

/// Every validation failure for one request, in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", .0.join("; "))]
pub struct InvalidRequest(Vec<String>);

impl InvalidRequest {
    /// Creates a failure holding one message.
    #[must_use]
    pub fn single(message: impl Into<String>) -> Self {
        Self(vec![message.into()])
    }

    /// Returns the recorded messages.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    /// Consumes the failure, returning the messages.
    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        self.0
    }
}

impl From<ValidationErrors> for InvalidRequest {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, failures)| {
                failures.iter().map(move |failure| describe(&field, failure))
            })
            .collect();
        messages.sort();
        Self(messages)
    }
}

fn describe(field: &str, failure: &ValidationError) -> String {
    failure.message.as_ref().map_or_else(
        || format!("{field} is invalid ({})", failure.code),
        ToString::to_string,
    )
}

/// Builds a rule failure with a client-facing message.
#[must_use]
pub fn rule_failure(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Reads a nullable field of a partial update.
///
/// Paired with `#[serde(default)]`: an absent key stays `None`, an explicit
/// `null` becomes `Some(None)`.
///
/// # Errors
///
/// Propagates the inner deserialization error.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Reads an optional field that must not be `null` when present.
///
/// Paired with `#[serde(default)]`.
///
/// # Errors
///
/// Fails on `null` or a value of the wrong type.
pub fn non_null<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    #[serde(deny_unknown_fields)]
    struct Patch {
        #[serde(default, deserialize_with = "non_null")]
        #[validate(length(min = 1, message = "label must not be empty"))]
        label: Option<String>,
        #[serde(default, deserialize_with = "double_option")]
        #[validate(range(min = 0, message = "size must be greater than or equal to 0"))]
        size: Option<Option<i32>>,
    }

    fn patch(value: serde_json::Value) -> Result<Patch, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn collects_every_rule_failure_in_order() {
        let request = patch(json!({"label": "", "size": -1})).expect("well-typed body");
        let errors = InvalidRequest::from(request.validate().expect_err("rules fail"));
        assert_eq!(
            errors.messages(),
            ["label must not be empty", "size must be greater than or equal to 0"]
        );
    }

    #[test]
    fn nullable_fields_keep_missing_and_null_apart() {
        let cleared = patch(json!({"size": null})).expect("null is allowed");
        assert_eq!(cleared.size, Some(None));
        assert_eq!(cleared.label, None);

        let untouched = patch(json!({})).expect("empty body");
        assert_eq!(untouched.size, None);
        assert!(untouched.validate().is_ok());
    }

    #[test]
    fn non_nullable_fields_reject_null() {
        assert!(patch(json!({"label": null})).is_err());
    }

    #[test]
    fn unknown_fields_are_rejected_by_deserialization() {
        let err = patch(json!({"other": 1})).expect_err("unknown field");
        assert!(err.to_string().contains("unknown field `other`"));
    }

    #[test]
    fn rule_failures_without_a_message_name_the_field() {
        let mut errors = ValidationErrors::new();
        errors.add("size", ValidationError::new("range"));
        assert_eq!(
            InvalidRequest::from(errors).messages(),
            ["size is invalid (range)"]
        );
    }
}
