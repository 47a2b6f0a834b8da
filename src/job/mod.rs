//! Job postings: creation, filtered listing, lookup, partial update and
//! removal.
//!
//! A job belongs to exactly one company, referenced by handle. Listings are
//! decorated with the owning company's name; single-job lookups nest the full
//! company profile. The module follows hexagonal architecture:
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
