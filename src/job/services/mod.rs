//! Application services for job postings.

mod postings;
mod requests;

pub use postings::{JobService, JobServiceError, JobServiceResult};
pub use requests::{JobSearchQuery, JobUpdateRequest, NewJobRequest};
