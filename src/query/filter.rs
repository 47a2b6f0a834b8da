//! Incremental `WHERE` clause construction for filtered listings.
//!
//! A [`FilteredQuery`] starts from a base `SELECT` and accepts predicates one
//! at a time. Bound predicates consume the next placeholder and push a value;
//! literal predicates add SQL only. All predicates are joined with `AND`, and
//! the clause is omitted entirely when none were added.

use super::SqlValue;

/// A finished statement with its positional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuery {
    /// Complete SQL text.
    pub sql: String,
    /// Values in placeholder order.
    pub values: Vec<SqlValue>,
}

/// Builder for a `SELECT` with optional predicates and a fixed ordering.
#[derive(Debug, Clone)]
pub struct FilteredQuery {
    base: String,
    predicates: Vec<String>,
    values: Vec<SqlValue>,
}

impl FilteredQuery {
    /// Starts a query from a base `SELECT ... FROM ...` statement.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            predicates: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Appends `<lhs> $<n>` and binds `value` to the new placeholder.
    ///
    /// `lhs` carries the column and operator, e.g. `"j.salary >="`.
    pub fn push_bound(&mut self, lhs: &str, value: impl Into<SqlValue>) -> &mut Self {
        self.values.push(value.into());
        self.predicates.push(format!("{lhs} ${}", self.values.len()));
        self
    }

    /// Appends a predicate that needs no parameter.
    pub fn push_literal(&mut self, predicate: &str) -> &mut Self {
        self.predicates.push(predicate.to_owned());
        self
    }

    /// Finishes the statement with `ORDER BY <order_by>`.
    #[must_use]
    pub fn order_by(self, order_by: &str) -> BuiltQuery {
        let Self {
            mut base,
            predicates,
            values,
        } = self;

        if !predicates.is_empty() {
            base.push_str(" WHERE ");
            base.push_str(&predicates.join(" AND "));
        }
        base.push_str(" ORDER BY ");
        base.push_str(order_by);

        BuiltQuery { sql: base, values }
    }
}

/// Wraps a search term for a substring `ILIKE` match.
///
/// `%`, `_` and the backslash escape character are escaped so the term is
/// matched literally.
#[must_use]
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
