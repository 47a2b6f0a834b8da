//! Company records, partial updates and listing filters.

use super::{CompanyDomainError, CompanyHandle, CompanyName, EmployeeCount};
use crate::job::domain::{Equity, JobId, JobTitle, Salary};
use serde::Serialize;

/// Public company profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Unique handle.
    pub handle: CompanyHandle,
    /// Display name, unique across companies.
    pub name: CompanyName,
    /// Free-form description.
    pub description: String,
    /// Head count, when known.
    pub num_employees: Option<EmployeeCount>,
    /// Logo location, when known.
    pub logo_url: Option<String>,
}

/// Job summary listed under a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyJob {
    /// Job identifier.
    pub id: JobId,
    /// Job title.
    pub title: JobTitle,
    /// Salary, when posted.
    pub salary: Option<Salary>,
    /// Equity fraction, when offered.
    pub equity: Option<Equity>,
}

/// Company profile together with its jobs, ordered by job identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyDetail {
    /// Profile fields, flattened into the same JSON object.
    #[serde(flatten)]
    pub company: Company,
    /// Jobs owned by the company.
    pub jobs: Vec<CompanyJob>,
}

/// Sparse set of company changes.
///
/// The handle is immutable and therefore not representable here. For the
/// nullable fields the outer `Option` says whether the field is changed and
/// the inner one carries the new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyUpdate {
    /// New display name.
    pub name: Option<CompanyName>,
    /// New description.
    pub description: Option<String>,
    /// New head count, or `Some(None)` to clear it.
    pub num_employees: Option<Option<EmployeeCount>>,
    /// New logo location, or `Some(None)` to clear it.
    pub logo_url: Option<Option<String>>,
}

impl CompanyUpdate {
    /// Returns `true` when no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.num_employees.is_none()
            && self.logo_url.is_none()
    }

    /// Applies the changes to `company` in place.
    pub fn apply_to(&self, company: &mut Company) {
        if let Some(name) = &self.name {
            company.name = name.clone();
        }
        if let Some(description) = &self.description {
            company.description.clone_from(description);
        }
        if let Some(num_employees) = self.num_employees {
            company.num_employees = num_employees;
        }
        if let Some(logo_url) = &self.logo_url {
            company.logo_url.clone_from(logo_url);
        }
    }
}

/// Optional constraints for company listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyFilter {
    name_like: Option<String>,
    min_employees: Option<i32>,
    max_employees: Option<i32>,
}

impl CompanyFilter {
    /// Creates a filter.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyDomainError::InvertedEmployeeRange`] when both bounds
    /// are given and `min_employees > max_employees`.
    pub fn new(
        name_like: Option<String>,
        min_employees: Option<i32>,
        max_employees: Option<i32>,
    ) -> Result<Self, CompanyDomainError> {
        if let (Some(min), Some(max)) = (min_employees, max_employees) {
            if min > max {
                return Err(CompanyDomainError::InvertedEmployeeRange { min, max });
            }
        }
        Ok(Self {
            name_like,
            min_employees,
            max_employees,
        })
    }

    /// Case-insensitive substring the name must contain.
    #[must_use]
    pub fn name_like(&self) -> Option<&str> {
        self.name_like.as_deref()
    }

    /// Inclusive lower bound on head count.
    #[must_use]
    pub const fn min_employees(&self) -> Option<i32> {
        self.min_employees
    }

    /// Inclusive upper bound on head count.
    #[must_use]
    pub const fn max_employees(&self) -> Option<i32> {
        self.max_employees
    }

    /// Evaluates the filter against one company.
    ///
    /// A company with an unknown head count fails any employee bound.
    #[must_use]
    pub fn matches(&self, company: &Company) -> bool {
        let name_ok = self.name_like.as_deref().is_none_or(|term| {
            company
                .name
                .as_str()
                .to_lowercase()
                .contains(&term.to_lowercase())
        });
        let count = company.num_employees.map(EmployeeCount::value);
        let min_ok = self
            .min_employees
            .is_none_or(|min| count.is_some_and(|n| n >= min));
        let max_ok = self
            .max_employees
            .is_none_or(|max| count.is_some_and(|n| n <= max));
        name_ok && min_ok && max_ok
    }
}
