//! Domain model for job postings.
//!
//! The job domain validates titles, salaries and equity fractions and models
//! the record shapes returned by each operation. Infrastructure concerns stay
//! in the adapters.

mod error;
mod ids;
mod job;
mod values;

pub use error::JobDomainError;
pub use ids::JobId;
pub use job::{Job, JobDetail, JobFilter, JobSummary, JobUpdate, NewJob};
pub use values::{Equity, JobTitle, Salary};
