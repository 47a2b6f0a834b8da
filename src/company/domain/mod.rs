//! Domain model for companies.
//!
//! Validated scalar types keep malformed handles, names and counts out of
//! the adapters; record types mirror the public JSON shapes.

mod company;
mod error;
mod values;

pub use company::{Company, CompanyDetail, CompanyFilter, CompanyJob, CompanyUpdate};
pub use error::CompanyDomainError;
pub use values::{CompanyHandle, CompanyName, EmployeeCount};
