//! Shared in-memory tables for the job and company test adapters.
//!
//! Both in-memory repositories hold a clone of the same [`InMemoryDatabase`]
//! so that jobs can see their company and company deletes cascade, the way
//! the foreign key behaves in `PostgreSQL`.

use crate::company::domain::{Company, CompanyHandle, CompanyName};
use crate::job::domain::{Job, JobId};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

/// Row-level constraint failures mirrored from the relational schema.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// The lock guarding the tables was poisoned by a panicking writer.
    #[error("in-memory tables lock poisoned")]
    Poisoned,

    /// A job references a company that does not exist.
    #[error("insert or update on table \"jobs\" violates foreign key: company '{0}' does not exist")]
    MissingCompany(CompanyHandle),

    /// Another company already uses the name.
    #[error("duplicate key value violates unique constraint on company name '{0}'")]
    DuplicateName(CompanyName),
}

/// Table contents guarded by the database lock.
#[derive(Debug, Default)]
pub struct Tables {
    /// Companies keyed by handle.
    pub companies: BTreeMap<CompanyHandle, Company>,
    /// Jobs keyed by identifier.
    pub jobs: BTreeMap<JobId, Job>,
    last_job_id: i32,
}

impl Tables {
    /// Allocates the next serial job identifier, starting at 1.
    pub fn next_job_id(&mut self) -> JobId {
        self.last_job_id += 1;
        JobId::new(self.last_job_id)
    }

    /// Fails unless `handle` names an existing company.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintViolation::MissingCompany`] for unknown handles.
    pub fn require_company(&self, handle: &CompanyHandle) -> Result<(), ConstraintViolation> {
        if self.companies.contains_key(handle) {
            Ok(())
        } else {
            Err(ConstraintViolation::MissingCompany(handle.clone()))
        }
    }

    /// Fails when a company other than `except` already uses `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintViolation::DuplicateName`] on a clash.
    pub fn require_unique_name(
        &self,
        name: &CompanyName,
        except: Option<&CompanyHandle>,
    ) -> Result<(), ConstraintViolation> {
        let clash = self
            .companies
            .values()
            .any(|company| company.name == *name && Some(&company.handle) != except);
        if clash {
            return Err(ConstraintViolation::DuplicateName(name.clone()));
        }
        Ok(())
    }

    /// Removes a company together with every job it owns.
    ///
    /// Returns `false` when the handle is unknown.
    pub fn remove_company_cascade(&mut self, handle: &CompanyHandle) -> bool {
        if self.companies.remove(handle).is_none() {
            return false;
        }
        self.jobs.retain(|_, job| job.company_handle != *handle);
        true
    }
}

/// Thread-safe handle to a set of in-memory tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryDatabase {
    /// Creates an empty database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires shared read access.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintViolation::Poisoned`] when a writer panicked.
    pub fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, ConstraintViolation> {
        self.tables.read().map_err(|_| ConstraintViolation::Poisoned)
    }

    /// Acquires exclusive write access.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintViolation::Poisoned`] when a writer panicked.
    pub fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, ConstraintViolation> {
        self.tables.write().map_err(|_| ConstraintViolation::Poisoned)
    }
}
