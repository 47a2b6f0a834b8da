//! In-memory adapter for job persistence.

mod job;

pub use job::InMemoryJobRepository;
