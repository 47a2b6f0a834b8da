//! `PostgreSQL` adapters for job persistence.

mod models;
mod queries;
mod repository;

pub use repository::PostgresJobRepository;
