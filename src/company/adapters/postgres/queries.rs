//! SQL text for the company statements that need runtime composition.

use crate::company::domain::{CompanyFilter, CompanyHandle, CompanyUpdate, EmployeeCount};
use crate::query::{
    BuiltQuery, ColumnMap, FilteredQuery, QueryBuildError, SqlValue, like_pattern,
    sql_for_partial_update,
};

/// Request field names that differ from their column.
pub const COMPANY_COLUMNS: ColumnMap = ColumnMap::new(&[
    ("numEmployees", "num_employees"),
    ("logoUrl", "logo_url"),
]);

const COMPANY_RETURNING: &str = "RETURNING handle, name, num_employees, description, logo_url";

const LIST_SELECT: &str =
    "SELECT handle, name, num_employees, description, logo_url FROM companies";

/// Byte-wise name order, matching the in-memory store for mixed case.
const LIST_ORDER: &str = "name COLLATE \"C\", handle";

/// Builds the listing statement for `filter`, ordered by name.
pub fn find_all(filter: &CompanyFilter) -> BuiltQuery {
    let mut query = FilteredQuery::new(LIST_SELECT);
    if let Some(term) = filter.name_like() {
        query.push_bound("name ILIKE", like_pattern(term));
    }
    if let Some(min) = filter.min_employees() {
        query.push_bound("num_employees >=", min);
    }
    if let Some(max) = filter.max_employees() {
        query.push_bound("num_employees <=", max);
    }
    query.order_by(LIST_ORDER)
}

/// Builds `UPDATE companies SET ... WHERE handle = $n RETURNING ...`.
///
/// # Errors
///
/// Returns [`QueryBuildError::NoData`] when `changes` is empty.
pub fn update(
    handle: &CompanyHandle,
    changes: &CompanyUpdate,
) -> Result<BuiltQuery, QueryBuildError> {
    let update = sql_for_partial_update(update_fields(changes), &COMPANY_COLUMNS)?;
    let sql = format!(
        "UPDATE companies SET {} WHERE handle = ${} {COMPANY_RETURNING}",
        update.set_cols,
        update.next_placeholder(),
    );
    let mut values = update.values;
    values.push(SqlValue::from(handle.as_str()));
    Ok(BuiltQuery { sql, values })
}

fn update_fields(changes: &CompanyUpdate) -> Vec<(&'static str, SqlValue)> {
    let mut fields = Vec::new();
    if let Some(name) = &changes.name {
        fields.push(("name", SqlValue::from(name.as_str())));
    }
    if let Some(description) = &changes.description {
        fields.push(("description", SqlValue::from(description.as_str())));
    }
    if let Some(num_employees) = changes.num_employees {
        fields.push((
            "numEmployees",
            SqlValue::NullableInteger(num_employees.map(EmployeeCount::value)),
        ));
    }
    if let Some(logo_url) = &changes.logo_url {
        fields.push(("logoUrl", SqlValue::NullableText(logo_url.clone())));
    }
    fields
}
