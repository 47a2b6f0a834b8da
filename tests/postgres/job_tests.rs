//! Job repository tests against `PostgreSQL`.

use crate::postgres::helpers::{DbContext, db_context, new_job, seed_companies};
use diesel::prelude::*;
use jobboard::db::ping;
use jobboard::job::{
    domain::{Equity, JobFilter, JobId, JobTitle, JobUpdate, Salary},
    ports::{JobRepository, JobRepositoryError},
};
use jobboard::query::QueryBuildError;
use rstest::rstest;

fn seeded(context: &DbContext) -> Vec<JobId> {
    seed_companies(context);
    [
        new_job("J1", Some(1), Some("0.1"), "c1"),
        new_job("J2", Some(2), Some("0.2"), "c1"),
        new_job("J3", Some(3), None, "c1"),
        new_job("J4", None, Some("0"), "c2"),
    ]
    .iter()
    .map(|job| {
        context
            .rt
            .block_on(context.jobs.create(job))
            .expect("job insert")
            .id
    })
    .collect()
}

fn titles(context: &DbContext, filter: &JobFilter) -> Vec<String> {
    context
        .rt
        .block_on(context.jobs.find_all(filter))
        .expect("listing")
        .into_iter()
        .map(|job| job.title.as_str().to_owned())
        .collect()
}

#[rstest]
fn create_returns_the_stored_row(db_context: Option<DbContext>) {
    let Some(context) = db_context else { return };
    seed_companies(&context);

    let job = context
        .rt
        .block_on(context.jobs.create(&new_job("New", Some(100), Some(".5"), "c1")))
        .expect("job insert");

    assert_eq!(job.title.as_str(), "New");
    assert_eq!(job.salary.map(Salary::value), Some(100));
    assert_eq!(job.equity.as_ref().map(Equity::as_str), Some("0.5"));
    assert_eq!(job.company_handle.as_str(), "c1");
    assert!(context.rt.block_on(ping(&context.pool)).is_ok());
}

#[rstest]
fn create_for_unknown_company_fails(db_context: Option<DbContext>) {
    let Some(context) = db_context else { return };

    let result = context
        .rt
        .block_on(context.jobs.create(&new_job("New", None, None, "nope")));
    assert!(matches!(result, Err(JobRepositoryError::Persistence(_))));
}

#[rstest]
#[case::all(JobFilter::any(), &["J1", "J2", "J3", "J4"])]
#[case::title(JobFilter::any().with_title("1"), &["J1"])]
#[case::min_salary(JobFilter::any().with_min_salary(2), &["J2", "J3"])]
#[case::has_equity(JobFilter::any().with_equity(true), &["J1", "J2"])]
#[case::combined(JobFilter::any().with_min_salary(2).with_equity(true), &["J2"])]
#[case::wildcards_are_literal(JobFilter::any().with_title("%"), &[])]
fn find_all_filters(
    db_context: Option<DbContext>,
    #[case] filter: JobFilter,
    #[case] expected: &[&str],
) {
    let Some(context) = db_context else { return };
    seeded(&context);
    assert_eq!(titles(&context, &filter), expected);
}

#[rstest]
fn find_all_sorts_titles_by_bytes(db_context: Option<DbContext>) {
    let Some(context) = db_context else { return };
    seed_companies(&context);
    for title in ["analyst", "Zed", "Engineer"] {
        context
            .rt
            .block_on(context.jobs.create(&new_job(title, None, None, "c1")))
            .expect("job insert");
    }

    assert_eq!(
        titles(&context, &JobFilter::any()),
        ["Engineer", "Zed", "analyst"]
    );
}

#[rstest]
fn find_all_includes_company_names(db_context: Option<DbContext>) {
    let Some(context) = db_context else { return };
    seeded(&context);

    let jobs = context
        .rt
        .block_on(context.jobs.find_all(&JobFilter::any()))
        .expect("listing");
    let names: Vec<Option<&str>> = jobs
        .iter()
        .map(|job| job.company_name.as_ref().map(|name| name.as_str()))
        .collect();
    assert_eq!(names, [Some("C1"), Some("C1"), Some("C1"), Some("C2")]);
}

#[rstest]
fn get_nests_the_company(db_context: Option<DbContext>) {
    let Some(context) = db_context else { return };
    let ids = seeded(&context);
    let first = *ids.first().expect("seeded job");

    let detail = context.rt.block_on(context.jobs.get(first)).expect("job");
    assert_eq!(detail.title.as_str(), "J1");
    assert_eq!(detail.equity.as_ref().map(Equity::as_str), Some("0.1"));
    let company = detail.company.expect("company nested");
    assert_eq!(company.handle.as_str(), "c1");
    assert_eq!(company.logo_url.as_deref(), Some("http://c1.img"));

    let missing = context.rt.block_on(context.jobs.get(JobId::new(0)));
    assert!(matches!(missing, Err(JobRepositoryError::NotFound(_))));
}

#[rstest]
fn update_changes_only_supplied_columns(db_context: Option<DbContext>) {
    let Some(context) = db_context else { return };
    let ids = seeded(&context);
    let first = *ids.first().expect("seeded job");

    let changes = JobUpdate {
        title: Some(JobTitle::new("Renamed").expect("valid title")),
        equity: Some(None),
        ..JobUpdate::default()
    };
    let updated = context
        .rt
        .block_on(context.jobs.update(first, &changes))
        .expect("update");

    assert_eq!(updated.title.as_str(), "Renamed");
    assert_eq!(updated.salary.map(Salary::value), Some(1));
    assert_eq!(updated.equity, None);
    assert_eq!(updated.company_handle.as_str(), "c1");
}

#[rstest]
fn update_reports_missing_rows_and_empty_changes(db_context: Option<DbContext>) {
    let Some(context) = db_context else { return };
    seeded(&context);

    let changes = JobUpdate {
        salary: Some(Some(Salary::new(5).expect("valid salary"))),
        ..JobUpdate::default()
    };
    let missing = context.rt.block_on(context.jobs.update(JobId::new(0), &changes));
    assert!(matches!(missing, Err(JobRepositoryError::NotFound(_))));

    let empty = context
        .rt
        .block_on(context.jobs.update(JobId::new(1), &JobUpdate::default()));
    assert!(matches!(
        empty,
        Err(JobRepositoryError::InvalidInput(QueryBuildError::NoData))
    ));
}

#[rstest]
fn remove_deletes_the_row(db_context: Option<DbContext>) {
    let Some(context) = db_context else { return };
    let ids = seeded(&context);
    let first = *ids.first().expect("seeded job");

    context.rt.block_on(context.jobs.remove(first)).expect("remove");

    let mut conn = context.pool.get().expect("connection");
    let remaining: i64 = jobboard::db::schema::jobs::table
        .filter(jobboard::db::schema::jobs::id.eq(first.value()))
        .count()
        .get_result(&mut conn)
        .expect("count");
    assert_eq!(remaining, 0);

    let again = context.rt.block_on(context.jobs.remove(first));
    assert!(matches!(again, Err(JobRepositoryError::NotFound(_))));
}
