//! Adapter implementations of the company ports.

pub mod memory;
pub mod postgres;
