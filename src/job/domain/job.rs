//! Job records, partial updates and listing filters.

use super::{Equity, JobId, JobTitle, Salary};
use crate::company::domain::{Company, CompanyHandle, CompanyName};
use serde::Serialize;

/// Stored job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Store-generated identifier.
    pub id: JobId,
    /// Job title.
    pub title: JobTitle,
    /// Salary, when posted.
    pub salary: Option<Salary>,
    /// Equity fraction, when offered.
    pub equity: Option<Equity>,
    /// Owning company.
    pub company_handle: CompanyHandle,
}

impl Job {
    /// Converts the record into its detailed form, nesting `company`.
    #[must_use]
    pub fn into_detail(self, company: Option<Company>) -> JobDetail {
        JobDetail {
            id: self.id,
            title: self.title,
            salary: self.salary,
            equity: self.equity,
            company,
        }
    }
}

/// Job posting awaiting an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    /// Job title.
    pub title: JobTitle,
    /// Salary, when posted.
    pub salary: Option<Salary>,
    /// Equity fraction, when offered.
    pub equity: Option<Equity>,
    /// Owning company; must already exist.
    pub company_handle: CompanyHandle,
}

impl NewJob {
    /// Attaches the identifier assigned by the store.
    #[must_use]
    pub fn into_job(self, id: JobId) -> Job {
        Job {
            id,
            title: self.title,
            salary: self.salary,
            equity: self.equity,
            company_handle: self.company_handle,
        }
    }
}

/// Listing row: the job plus its company's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    /// Job identifier.
    pub id: JobId,
    /// Job title.
    pub title: JobTitle,
    /// Salary, when posted.
    pub salary: Option<Salary>,
    /// Equity fraction, when offered.
    pub equity: Option<Equity>,
    /// Owning company.
    pub company_handle: CompanyHandle,
    /// Owning company's name, absent if the company row is gone.
    pub company_name: Option<CompanyName>,
}

/// Single-job view with the owning company nested in place of its handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobDetail {
    /// Job identifier.
    pub id: JobId,
    /// Job title.
    pub title: JobTitle,
    /// Salary, when posted.
    pub salary: Option<Salary>,
    /// Equity fraction, when offered.
    pub equity: Option<Equity>,
    /// Owning company, `null` when it cannot be found.
    pub company: Option<Company>,
}

/// Sparse set of job changes.
///
/// `id` and `company_handle` are immutable. For the nullable fields the outer
/// `Option` says whether the field is changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobUpdate {
    /// New title.
    pub title: Option<JobTitle>,
    /// New salary, or `Some(None)` to clear it.
    pub salary: Option<Option<Salary>>,
    /// New equity, or `Some(None)` to clear it.
    pub equity: Option<Option<Equity>>,
}

impl JobUpdate {
    /// Returns `true` when no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.salary.is_none() && self.equity.is_none()
    }

    /// Applies the changes to `job` in place.
    pub fn apply_to(&self, job: &mut Job) {
        if let Some(title) = &self.title {
            job.title = title.clone();
        }
        if let Some(salary) = self.salary {
            job.salary = salary;
        }
        if let Some(equity) = &self.equity {
            job.equity.clone_from(equity);
        }
    }
}

/// Optional constraints for job listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    title: Option<String>,
    min_salary: Option<i32>,
    has_equity: bool,
}

impl JobFilter {
    /// Creates a filter that matches every job.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Restricts to titles containing `term`, ignoring case.
    #[must_use]
    pub fn with_title(mut self, term: impl Into<String>) -> Self {
        self.title = Some(term.into());
        self
    }

    /// Restricts to salaries of at least `min`.
    #[must_use]
    pub const fn with_min_salary(mut self, min: i32) -> Self {
        self.min_salary = Some(min);
        self
    }

    /// When `true`, restricts to jobs with equity greater than zero.
    #[must_use]
    pub const fn with_equity(mut self, has_equity: bool) -> Self {
        self.has_equity = has_equity;
        self
    }

    /// Case-insensitive title substring.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Inclusive salary lower bound.
    #[must_use]
    pub const fn min_salary(&self) -> Option<i32> {
        self.min_salary
    }

    /// Whether only jobs with positive equity are wanted.
    #[must_use]
    pub const fn has_equity(&self) -> bool {
        self.has_equity
    }

    /// Evaluates the filter against one job.
    ///
    /// A job without a salary fails a salary bound; a job without equity
    /// fails the equity constraint.
    #[must_use]
    pub fn matches(&self, job: &Job) -> bool {
        let title_ok = self.title.as_deref().is_none_or(|term| {
            job.title
                .as_str()
                .to_lowercase()
                .contains(&term.to_lowercase())
        });
        let salary_ok = self
            .min_salary
            .is_none_or(|min| job.salary.is_some_and(|salary| salary.value() >= min));
        let equity_ok = !self.has_equity || job.equity.as_ref().is_some_and(Equity::is_positive);
        title_ok && salary_ok && equity_ok
    }
}
