//! `SET` clause construction for sparse updates.
//!
//! Callers hand over only the fields they want to change, in the order they
//! should appear, together with a [`ColumnMap`] translating external field
//! names into column names. The result is a clause string such as
//! `"first_name"=$1, "age"=$2` plus the values in placeholder order. The
//! caller appends its own placeholder for the row identifier.

use super::SqlValue;
use thiserror::Error;

/// Errors returned while building SQL fragments.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryBuildError {
    /// The field map was empty, so there is nothing to update.
    #[error("No data")]
    NoData,
}

/// Static translation from external field names to storage column names.
///
/// Only fields whose names differ from their column need an entry; any other
/// field maps to itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    entries: &'static [(&'static str, &'static str)],
}

impl ColumnMap {
    /// A map with no translations: every field is its own column.
    pub const IDENTITY: Self = Self::new(&[]);

    /// Creates a map from `(field, column)` pairs.
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Returns the column backing `field`, or `field` itself when unmapped.
    #[must_use]
    pub fn column_for<'a>(&self, field: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map_or(field, |(_, column)| column)
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Output of [`sql_for_partial_update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialUpdate {
    /// Comma-separated assignments, e.g. `"title"=$1, "salary"=$2`.
    pub set_cols: String,
    /// Values in placeholder order; `values[i]` binds to `$(i + 1)`.
    pub values: Vec<SqlValue>,
}

impl PartialUpdate {
    /// Index of the first placeholder not used by the assignments.
    ///
    /// Callers use it for the `WHERE` clause identifier.
    #[must_use]
    pub fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }
}

/// Builds the `SET` portion of an `UPDATE` statement.
///
/// Fields are emitted in iteration order as `"<column>"=$<n>`, where `n`
/// starts at 1 and matches the value's position in
/// [`PartialUpdate::values`].
///
/// # Errors
///
/// Returns [`QueryBuildError::NoData`] when `fields` is empty.
pub fn sql_for_partial_update<K>(
    fields: impl IntoIterator<Item = (K, SqlValue)>,
    columns: &ColumnMap,
) -> Result<PartialUpdate, QueryBuildError>
where
    K: AsRef<str>,
{
    let mut assignments = Vec::new();
    let mut values = Vec::new();

    for (field, value) in fields {
        values.push(value);
        let column = columns.column_for(field.as_ref());
        assignments.push(format!("\"{column}\"=${}", values.len()));
    }

    if values.is_empty() {
        return Err(QueryBuildError::NoData);
    }

    Ok(PartialUpdate {
        set_cols: assignments.join(", "),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const USER_COLUMNS: ColumnMap =
        ColumnMap::new(&[("firstName", "first_name"), ("lastName", "last_name")]);

    #[test]
    fn translates_a_single_field() {
        let update = sql_for_partial_update(
            [("firstName", SqlValue::from("Jenny"))],
            &USER_COLUMNS,
        )
        .expect("non-empty update");

        assert_eq!(update.set_cols, "\"first_name\"=$1");
        assert_eq!(update.values, vec![SqlValue::from("Jenny")]);
        assert_eq!(update.next_placeholder(), 2);
    }

    #[test]
    fn untranslated_fields_keep_their_name() {
        let update = sql_for_partial_update(
            [
                ("firstName", SqlValue::from("Jenny")),
                ("age", SqlValue::from(25)),
            ],
            &ColumnMap::new(&[("age", "age")]),
        )
        .expect("non-empty update");

        assert_eq!(update.set_cols, "\"firstName\"=$1, \"age\"=$2");
        assert_eq!(
            update.values,
            vec![SqlValue::from("Jenny"), SqlValue::from(25)]
        );
    }

    #[test]
    fn placeholders_follow_value_positions() {
        let fields = vec![
            ("lastName", SqlValue::from("Smith")),
            ("salary", SqlValue::NullableInteger(None)),
            ("firstName", SqlValue::from("Ann")),
        ];
        let update =
            sql_for_partial_update(fields.clone(), &USER_COLUMNS).expect("non-empty update");

        let clauses: Vec<&str> = update.set_cols.split(", ").collect();
        assert_eq!(clauses.len(), update.values.len());
        for (index, clause) in clauses.iter().enumerate() {
            assert!(
                clause.ends_with(&format!("=${}", index + 1)),
                "clause {clause} should bind position {}",
                index + 1
            );
        }
        let expected: Vec<SqlValue> = fields.into_iter().map(|(_, value)| value).collect();
        assert_eq!(update.values, expected);
        assert_eq!(
            clauses,
            vec!["\"last_name\"=$1", "\"salary\"=$2", "\"first_name\"=$3"]
        );
    }

    #[rstest]
    #[case::identity(ColumnMap::IDENTITY)]
    #[case::translating(USER_COLUMNS)]
    fn empty_field_map_is_rejected(#[case] columns: ColumnMap) {
        let result = sql_for_partial_update(Vec::<(&str, SqlValue)>::new(), &columns);
        assert_eq!(result, Err(QueryBuildError::NoData));
    }

    #[test]
    fn column_map_falls_back_to_field_name() {
        assert_eq!(USER_COLUMNS.column_for("firstName"), "first_name");
        assert_eq!(USER_COLUMNS.column_for("email"), "email");
        assert_eq!(ColumnMap::default().column_for("title"), "title");
    }
}
