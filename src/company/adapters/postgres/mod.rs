//! `PostgreSQL` adapters for company persistence.

mod models;
mod queries;
mod repository;

pub use repository::PostgresCompanyRepository;
