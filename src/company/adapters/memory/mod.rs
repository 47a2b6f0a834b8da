//! In-memory adapter for company persistence.

mod company;

pub use company::InMemoryCompanyRepository;
