//! Diesel row models for company persistence.

use crate::db::schema::{companies, jobs};
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Nullable, Text, Varchar};

/// Company row, used for inserts and reads alike.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable, Insertable)]
#[diesel(table_name = companies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CompanyRow {
    /// Unique handle.
    #[diesel(sql_type = Varchar)]
    pub handle: String,
    /// Display name.
    #[diesel(sql_type = Text)]
    pub name: String,
    /// Optional head count.
    #[diesel(sql_type = Nullable<Integer>)]
    pub num_employees: Option<i32>,
    /// Description.
    #[diesel(sql_type = Text)]
    pub description: String,
    /// Optional logo location.
    #[diesel(sql_type = Nullable<Text>)]
    pub logo_url: Option<String>,
}

/// Job columns listed under a company.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = jobs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CompanyJobRow {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<BigDecimal>,
}
