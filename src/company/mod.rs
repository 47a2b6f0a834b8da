//! Company records: the owners of job postings.
//!
//! Companies are keyed by a human-readable handle. Listing supports
//! name-substring and employee-count filters; fetching a company also returns
//! its jobs. The module follows the same hexagonal layout as [`crate::job`]:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Request validation and orchestration in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
