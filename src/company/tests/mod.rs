//! Unit tests for the company module.
