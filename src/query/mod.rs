//! SQL fragment builders shared by the job and company adapters.
//!
//! Both builders are pure: they produce SQL text plus an ordered list of
//! [`SqlValue`] parameters and never touch a connection. Adapters bind the
//! values positionally (`$1`, `$2`, ...) when executing the statement.
//!
//! - [`partial_update`]: `SET` clauses for sparse updates
//! - [`filter`]: `WHERE` predicates for filtered listings

pub mod filter;
pub mod partial_update;
mod value;

pub use filter::{BuiltQuery, FilteredQuery, like_pattern};
pub use partial_update::{ColumnMap, PartialUpdate, QueryBuildError, sql_for_partial_update};
pub use value::SqlValue;
