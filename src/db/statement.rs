//! Binding of builder output onto raw Diesel statements.

use crate::query::SqlValue;
use diesel::pg::Pg;
use diesel::query_builder::{BoxedSqlQuery, SqlQuery};
use diesel::sql_types::{Integer, Nullable, Numeric, Text};

/// Raw statement with its parameters already bound.
pub type BoundQuery = BoxedSqlQuery<'static, Pg, SqlQuery>;

/// Prepares `sql` and binds `values` to `$1`, `$2`, ... in order.
#[must_use]
pub fn bind_all(sql: &str, values: Vec<SqlValue>) -> BoundQuery {
    values
        .into_iter()
        .fold(diesel::sql_query(sql).into_boxed::<Pg>(), |query, value| {
            match value {
                SqlValue::Text(text) => query.bind::<Text, _>(text),
                SqlValue::NullableText(text) => query.bind::<Nullable<Text>, _>(text),
                SqlValue::Integer(number) => query.bind::<Integer, _>(number),
                SqlValue::NullableInteger(number) => query.bind::<Nullable<Integer>, _>(number),
                SqlValue::NullableNumeric(decimal) => query.bind::<Nullable<Numeric>, _>(decimal),
            }
        })
}
