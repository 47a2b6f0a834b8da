//! Application services for company profiles.

mod profiles;
mod requests;

pub use profiles::{CompanyService, CompanyServiceError, CompanyServiceResult};
pub use requests::{CompanySearchQuery, CompanyUpdateRequest, NewCompanyRequest};
