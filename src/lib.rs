//! Jobboard: a REST backend for companies and their job postings.
//!
//! The crate exposes CRUD operations over two relational entities, companies
//! and jobs, behind an `axum` HTTP surface with a bearer-token admin guard.
//!
//! # Architecture
//!
//! Each entity follows hexagonal architecture principles:
//!
//! - **Domain**: validated values and record shapes
//! - **Ports**: repository traits
//! - **Adapters**: `PostgreSQL` (Diesel) and in-memory implementations
//! - **Services**: request validation and orchestration
//!
//! # Modules
//!
//! - [`query`]: partial-update `SET` clauses and filtered `WHERE` clauses
//! - [`job`]: job postings
//! - [`company`]: company profiles
//! - [`http`]: routes, handlers, admin guard and error responses
//! - [`db`], [`config`], [`telemetry`], [`cli`]: runtime plumbing

pub mod cli;
pub mod company;
pub mod config;
pub mod db;
pub mod http;
pub mod job;
pub mod query;
pub mod telemetry;
pub mod validation;
