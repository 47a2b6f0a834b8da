//! Diesel row models for job persistence.

use crate::db::schema::jobs;
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Nullable, Numeric, Text, Varchar};

/// Query result row for job records.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = jobs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct JobRow {
    /// Serial identifier.
    #[diesel(sql_type = Integer)]
    pub id: i32,
    /// Job title.
    #[diesel(sql_type = Text)]
    pub title: String,
    /// Optional salary.
    #[diesel(sql_type = Nullable<Integer>)]
    pub salary: Option<i32>,
    /// Optional equity fraction.
    #[diesel(sql_type = Nullable<Numeric>)]
    pub equity: Option<BigDecimal>,
    /// Owning company handle.
    #[diesel(sql_type = Varchar)]
    pub company_handle: String,
}

/// Insert model for job records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = jobs)]
pub struct NewJobRow {
    /// Job title.
    pub title: String,
    /// Optional salary.
    pub salary: Option<i32>,
    /// Optional equity fraction.
    pub equity: Option<BigDecimal>,
    /// Owning company handle.
    pub company_handle: String,
}

/// Listing row: a job joined with its company's name.
#[derive(Debug, Clone, QueryableByName)]
pub struct JobSummaryRow {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Text)]
    pub title: String,
    #[diesel(sql_type = Nullable<Integer>)]
    pub salary: Option<i32>,
    #[diesel(sql_type = Nullable<Numeric>)]
    pub equity: Option<BigDecimal>,
    #[diesel(sql_type = Varchar)]
    pub company_handle: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub company_name: Option<String>,
}

/// Single-job row with the owning company's columns, all nullable because of
/// the outer join.
#[derive(Debug, Clone, QueryableByName)]
pub struct JobDetailRow {
    #[diesel(embed)]
    pub job: JobRow,
    #[diesel(sql_type = Nullable<Text>)]
    pub company_name: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub company_description: Option<String>,
    #[diesel(sql_type = Nullable<Integer>)]
    pub company_num_employees: Option<i32>,
    #[diesel(sql_type = Nullable<Text>)]
    pub company_logo_url: Option<String>,
}
