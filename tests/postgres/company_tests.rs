//! Company repository tests against `PostgreSQL`.

use crate::postgres::helpers::{DbContext, company, db_context, new_job, seed_companies};
use jobboard::company::{
    domain::{CompanyFilter, CompanyHandle, CompanyName, CompanyUpdate},
    ports::{CompanyRepository, CompanyRepositoryError},
};
use jobboard::job::ports::{JobRepository, JobRepositoryError};
use rstest::rstest;

fn handle(raw: &str) -> CompanyHandle {
    CompanyHandle::new(raw).expect("valid handle")
}

#[rstest]
fn create_rejects_duplicate_handles(db_context: Option<DbContext>) {
    let Some(context) = db_context else { return };
    seed_companies(&context);

    let result = context.rt.block_on(context.companies.create(&company(1)));
    assert!(matches!(
        result,
        Err(CompanyRepositoryError::DuplicateCompany(existing)) if existing.as_str() == "c1"
    ));
}

#[rstest]
#[case::all(None, None, None, &["c1", "c2", "c3"])]
#[case::name(Some("C2"), None, None, &["c2"])]
#[case::name_case_insensitive(Some("c"), None, None, &["c1", "c2", "c3"])]
#[case::range(None, Some(2), Some(3), &["c2", "c3"])]
#[case::none(Some("nope"), None, None, &[])]
fn find_all_filters(
    db_context: Option<DbContext>,
    #[case] name_like: Option<&str>,
    #[case] min: Option<i32>,
    #[case] max: Option<i32>,
    #[case] expected: &[&str],
) {
    let Some(context) = db_context else { return };
    seed_companies(&context);

    let filter = CompanyFilter::new(name_like.map(str::to_owned), min, max).expect("valid filter");
    let companies = context
        .rt
        .block_on(context.companies.find_all(&filter))
        .expect("listing");
    let handles: Vec<&str> = companies.iter().map(|c| c.handle.as_str()).collect();
    assert_eq!(handles, expected);
}

#[rstest]
fn get_includes_jobs_by_id(db_context: Option<DbContext>) {
    let Some(context) = db_context else { return };
    seed_companies(&context);
    for title in ["Zeta", "Alpha"] {
        context
            .rt
            .block_on(context.jobs.create(&new_job(title, None, Some("0.5"), "c1")))
            .expect("job insert");
    }

    let detail = context
        .rt
        .block_on(context.companies.get(&handle("c1")))
        .expect("company");
    let titles: Vec<&str> = detail.jobs.iter().map(|job| job.title.as_str()).collect();
    assert_eq!(titles, ["Zeta", "Alpha"]);
    assert_eq!(detail.company.description, "Desc1");

    let missing = context.rt.block_on(context.companies.get(&handle("nope")));
    assert!(matches!(missing, Err(CompanyRepositoryError::NotFound(_))));
}

#[rstest]
fn update_maps_camel_case_fields_to_columns(db_context: Option<DbContext>) {
    let Some(context) = db_context else { return };
    seed_companies(&context);

    let changes = CompanyUpdate {
        name: Some(CompanyName::new("New").expect("valid name")),
        num_employees: Some(None),
        logo_url: Some(None),
        ..CompanyUpdate::default()
    };
    let updated = context
        .rt
        .block_on(context.companies.update(&handle("c1"), &changes))
        .expect("update");

    assert_eq!(updated.handle.as_str(), "c1");
    assert_eq!(updated.name.as_str(), "New");
    assert_eq!(updated.description, "Desc1");
    assert_eq!(updated.num_employees, None);
    assert_eq!(updated.logo_url, None);

    let missing = context
        .rt
        .block_on(context.companies.update(&handle("nope"), &changes));
    assert!(matches!(missing, Err(CompanyRepositoryError::NotFound(_))));
}

#[rstest]
fn remove_cascades_to_jobs(db_context: Option<DbContext>) {
    let Some(context) = db_context else { return };
    seed_companies(&context);
    let job = context
        .rt
        .block_on(context.jobs.create(&new_job("J", None, None, "c1")))
        .expect("job insert");

    context
        .rt
        .block_on(context.companies.remove(&handle("c1")))
        .expect("remove");

    let gone = context.rt.block_on(context.jobs.get(job.id));
    assert!(matches!(gone, Err(JobRepositoryError::NotFound(_))));
    let again = context.rt.block_on(context.companies.remove(&handle("c1")));
    assert!(matches!(again, Err(CompanyRepositoryError::NotFound(_))));
}
