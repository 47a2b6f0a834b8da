//! SQL text for the job statements that need runtime composition.

use crate::job::domain::{Equity, JobFilter, JobId, JobUpdate, Salary};
use crate::query::{
    BuiltQuery, ColumnMap, FilteredQuery, QueryBuildError, SqlValue, like_pattern,
    sql_for_partial_update,
};

/// Job fields share their column names.
const JOB_COLUMNS: ColumnMap = ColumnMap::IDENTITY;

const JOB_RETURNING: &str = "RETURNING id, title, salary, equity, company_handle";

const LIST_SELECT: &str = concat!(
    "SELECT j.id, j.title, j.salary, j.equity, j.company_handle, c.name AS company_name ",
    "FROM jobs j LEFT JOIN companies c ON c.handle = j.company_handle",
);

/// Byte-wise title order, matching the in-memory store for mixed case.
const LIST_ORDER: &str = "j.title COLLATE \"C\", j.id";

/// Single-job lookup with the owning company joined in; binds `$1` to the id.
pub const DETAIL_SELECT: &str = concat!(
    "SELECT j.id, j.title, j.salary, j.equity, j.company_handle, ",
    "c.name AS company_name, c.description AS company_description, ",
    "c.num_employees AS company_num_employees, c.logo_url AS company_logo_url ",
    "FROM jobs j LEFT JOIN companies c ON c.handle = j.company_handle ",
    "WHERE j.id = $1",
);

/// Builds the listing statement for `filter`, ordered by title.
pub fn find_all(filter: &JobFilter) -> BuiltQuery {
    let mut query = FilteredQuery::new(LIST_SELECT);
    if let Some(term) = filter.title() {
        query.push_bound("j.title ILIKE", like_pattern(term));
    }
    if let Some(min) = filter.min_salary() {
        query.push_bound("j.salary >=", min);
    }
    if filter.has_equity() {
        query.push_literal("j.equity > 0");
    }
    query.order_by(LIST_ORDER)
}

/// Builds `UPDATE jobs SET ... WHERE id = $n RETURNING ...` for `changes`.
///
/// # Errors
///
/// Returns [`QueryBuildError::NoData`] when `changes` is empty.
pub fn update(id: JobId, changes: &JobUpdate) -> Result<BuiltQuery, QueryBuildError> {
    let update = sql_for_partial_update(update_fields(changes), &JOB_COLUMNS)?;
    let sql = format!(
        "UPDATE jobs SET {} WHERE id = ${} {JOB_RETURNING}",
        update.set_cols,
        update.next_placeholder(),
    );
    let mut values = update.values;
    values.push(SqlValue::Integer(id.value()));
    Ok(BuiltQuery { sql, values })
}

fn update_fields(changes: &JobUpdate) -> Vec<(&'static str, SqlValue)> {
    let mut fields = Vec::new();
    if let Some(title) = &changes.title {
        fields.push(("title", SqlValue::from(title.as_str())));
    }
    if let Some(salary) = changes.salary {
        fields.push(("salary", SqlValue::NullableInteger(salary.map(Salary::value))));
    }
    if let Some(equity) = &changes.equity {
        let decimal = equity.as_ref().map(Equity::as_decimal).cloned();
        fields.push(("equity", SqlValue::NullableNumeric(decimal)));
    }
    fields
}
