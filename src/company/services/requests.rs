//! Typed request bodies and query strings for company profiles.

use crate::company::domain::{
    Company, CompanyDomainError, CompanyFilter, CompanyHandle, CompanyName, CompanyUpdate,
    EmployeeCount,
};
use crate::validation::{InvalidRequest, double_option, non_null, rule_failure};
use serde::Deserialize;
use std::fmt;
use validator::{Validate, ValidationError};

/// Body of `POST /companies`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct NewCompanyRequest {
    /// Unique handle.
    #[validate(
        length(min = 1, max = 25, message = "handle must be between 1 and 25 characters"),
        custom(function = "handle_charset")
    )]
    pub handle: String,
    /// Display name.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Head count.
    #[serde(default)]
    #[validate(range(min = 0, message = "numEmployees must be greater than or equal to 0"))]
    pub num_employees: Option<i32>,
    /// Logo location.
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl NewCompanyRequest {
    /// Validates the request and converts it into a [`Company`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequest`] listing every rule the request breaks.
    pub fn into_company(self) -> Result<Company, InvalidRequest> {
        self.validate()?;
        Ok(Company {
            handle: CompanyHandle::new(self.handle).map_err(|err| invalid(&err))?,
            name: CompanyName::new(self.name).map_err(|err| invalid(&err))?,
            description: self.description,
            num_employees: self
                .num_employees
                .map(EmployeeCount::new)
                .transpose()
                .map_err(|err| invalid(&err))?,
            logo_url: self.logo_url,
        })
    }
}

/// Body of `PATCH /companies/{handle}`.
///
/// The handle is immutable and not a field, so deserialization rejects it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CompanyUpdateRequest {
    /// New display name.
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    /// New description.
    #[serde(default, deserialize_with = "non_null")]
    pub description: Option<String>,
    /// New head count, or `null` to clear it.
    #[serde(default, deserialize_with = "double_option")]
    #[validate(range(min = 0, message = "numEmployees must be greater than or equal to 0"))]
    pub num_employees: Option<Option<i32>>,
    /// New logo location, or `null` to clear it.
    #[serde(default, deserialize_with = "double_option")]
    pub logo_url: Option<Option<String>>,
}

impl CompanyUpdateRequest {
    /// Validates the request and converts it into a [`CompanyUpdate`].
    ///
    /// # Errors
    ///
    /// Returns `"No data"` when no field is supplied, otherwise every rule
    /// the request breaks.
    pub fn into_update(self) -> Result<CompanyUpdate, InvalidRequest> {
        self.validate()?;
        let update = CompanyUpdate {
            name: self
                .name
                .map(CompanyName::new)
                .transpose()
                .map_err(|err| invalid(&err))?,
            description: self.description,
            num_employees: self
                .num_employees
                .map(|count| count.map(EmployeeCount::new).transpose())
                .transpose()
                .map_err(|err| invalid(&err))?,
            logo_url: self.logo_url,
        };
        if update.is_empty() {
            return Err(InvalidRequest::single("No data"));
        }
        Ok(update)
    }
}

/// Query string of `GET /companies`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
#[validate(schema(function = "ordered_bounds"))]
pub struct CompanySearchQuery {
    /// Case-insensitive name fragment.
    #[validate(length(min = 1, message = "nameLike must not be empty"))]
    pub name_like: Option<String>,
    /// Inclusive head-count lower bound.
    #[validate(range(min = 0, message = "minEmployees must be greater than or equal to 0"))]
    pub min_employees: Option<i32>,
    /// Inclusive head-count upper bound.
    #[validate(range(min = 0, message = "maxEmployees must be greater than or equal to 0"))]
    pub max_employees: Option<i32>,
}

impl CompanySearchQuery {
    /// Validates the query and converts it into a [`CompanyFilter`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequest`] for malformed bounds or
    /// `minEmployees > maxEmployees`.
    pub fn into_filter(self) -> Result<CompanyFilter, InvalidRequest> {
        self.validate()?;
        CompanyFilter::new(self.name_like, self.min_employees, self.max_employees)
            .map_err(|err| invalid(&err))
    }
}

/// Handles are lowercase letters, digits and dashes.
fn handle_charset(handle: &str) -> Result<(), ValidationError> {
    let allowed = handle
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-');
    if allowed {
        Ok(())
    } else {
        Err(rule_failure(
            "handle",
            "handle may only contain lowercase letters, digits and dashes",
        ))
    }
}

fn ordered_bounds(query: &CompanySearchQuery) -> Result<(), ValidationError> {
    match (query.min_employees, query.max_employees) {
        (Some(min), Some(max)) if min > max => Err(rule_failure(
            "range",
            CompanyDomainError::InvertedEmployeeRange { min, max }.to_string(),
        )),
        _ => Ok(()),
    }
}

fn invalid(err: &dyn fmt::Display) -> InvalidRequest {
    InvalidRequest::single(err.to_string())
}
