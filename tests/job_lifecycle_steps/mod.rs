//! Step definitions for job lifecycle scenarios.

mod given;
mod then;
mod when;
pub mod world;
