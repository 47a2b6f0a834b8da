//! Port contracts for company persistence.

pub mod repository;

pub use repository::{CompanyRepository, CompanyRepositoryError, CompanyRepositoryResult};
