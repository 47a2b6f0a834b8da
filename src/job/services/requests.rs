//! Typed request bodies and query strings for job postings.
//!
//! Deserialization rejects unknown and mistyped fields. [`Validate`] then
//! checks the value rules and reports all of them together.

use crate::company::domain::CompanyHandle;
use crate::job::domain::{Equity, JobFilter, JobTitle, JobUpdate, NewJob, Salary};
use crate::validation::{InvalidRequest, double_option, non_null, rule_failure};
use serde::Deserialize;
use std::fmt;
use validator::{Validate, ValidationError};

/// Body of `POST /jobs`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct NewJobRequest {
    /// Job title.
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    /// Yearly salary.
    #[serde(default)]
    #[validate(range(min = 0, message = "salary must be greater than or equal to 0"))]
    pub salary: Option<i32>,
    /// Equity fraction as decimal text.
    #[serde(default)]
    #[validate(custom(function = "equity_fraction"))]
    pub equity: Option<String>,
    /// Owning company.
    #[validate(length(
        min = 1,
        max = 25,
        message = "companyHandle must be between 1 and 25 characters"
    ))]
    pub company_handle: String,
}

impl NewJobRequest {
    /// Validates the request and converts it into a [`NewJob`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequest`] listing every rule the request breaks.
    pub fn into_new_job(self) -> Result<NewJob, InvalidRequest> {
        self.validate()?;
        Ok(NewJob {
            title: JobTitle::new(self.title).map_err(|err| invalid(&err))?,
            salary: self
                .salary
                .map(Salary::new)
                .transpose()
                .map_err(|err| invalid(&err))?,
            equity: self
                .equity
                .map(Equity::new)
                .transpose()
                .map_err(|err| invalid(&err))?,
            company_handle: CompanyHandle::new(self.company_handle)
                .map_err(|err| invalid(&err))?,
        })
    }
}

/// Body of `PATCH /jobs/{id}`.
///
/// `id` and `companyHandle` are not fields, so deserialization rejects them.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct JobUpdateRequest {
    /// New title.
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    /// New salary, or `null` to clear it.
    #[serde(default, deserialize_with = "double_option")]
    #[validate(range(min = 0, message = "salary must be greater than or equal to 0"))]
    pub salary: Option<Option<i32>>,
    /// New equity, or `null` to clear it.
    #[serde(default, deserialize_with = "double_option")]
    #[validate(custom(function = "equity_fraction"))]
    pub equity: Option<Option<String>>,
}

impl JobUpdateRequest {
    /// Validates the request and converts it into a [`JobUpdate`].
    ///
    /// # Errors
    ///
    /// Returns `"No data"` when no field is supplied, otherwise every rule
    /// the request breaks.
    pub fn into_update(self) -> Result<JobUpdate, InvalidRequest> {
        self.validate()?;
        let update = JobUpdate {
            title: self
                .title
                .map(JobTitle::new)
                .transpose()
                .map_err(|err| invalid(&err))?,
            salary: self
                .salary
                .map(|salary| salary.map(Salary::new).transpose())
                .transpose()
                .map_err(|err| invalid(&err))?,
            equity: self
                .equity
                .map(|equity| equity.map(Equity::new).transpose())
                .transpose()
                .map_err(|err| invalid(&err))?,
        };
        if update.is_empty() {
            return Err(InvalidRequest::single("No data"));
        }
        Ok(update)
    }
}

/// Query string of `GET /jobs`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct JobSearchQuery {
    /// Case-insensitive title fragment.
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    /// Inclusive salary lower bound.
    #[validate(range(min = 0, message = "minSalary must be greater than or equal to 0"))]
    pub min_salary: Option<i32>,
    /// Only the exact text `"true"` restricts to jobs with equity.
    pub has_equity: Option<String>,
}

impl JobSearchQuery {
    /// Validates the query and converts it into a [`JobFilter`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequest`] for an empty title or a negative bound.
    pub fn into_filter(self) -> Result<JobFilter, InvalidRequest> {
        self.validate()?;
        let mut filter = JobFilter::any().with_equity(self.has_equity.as_deref() == Some("true"));
        if let Some(title) = self.title {
            filter = filter.with_title(title);
        }
        if let Some(min) = self.min_salary {
            filter = filter.with_min_salary(min);
        }
        Ok(filter)
    }
}

fn equity_fraction(value: &str) -> Result<(), ValidationError> {
    Equity::new(value)
        .map(drop)
        .map_err(|err| rule_failure("equity", err.to_string()))
}

fn invalid(err: &dyn fmt::Display) -> InvalidRequest {
    InvalidRequest::single(err.to_string())
}
