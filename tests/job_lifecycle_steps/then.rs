//! Then steps for job lifecycle BDD scenarios.

use super::world::{JobWorld, run_async};
use jobboard::job::{ports::JobRepositoryError, services::JobServiceError};
use rstest_bdd_macros::then;

#[then(r#"the job can be fetched with company "{name}" nested"#)]
fn job_has_company(world: &JobWorld, name: String) -> Result<(), eyre::Report> {
    let job = world.require_job()?;
    let detail = run_async(world.jobs.get(job.id))
        .map_err(|err| eyre::eyre!("job lookup failed: {err}"))?;

    let nested = detail
        .company
        .as_ref()
        .map(|company| company.name.as_str().to_owned());
    if nested.as_deref() != Some(name.as_str()) {
        return Err(eyre::eyre!("expected company {name} nested, found {nested:?}"));
    }
    if detail.title != job.title || detail.equity != job.equity {
        return Err(eyre::eyre!("fetched job does not match the posted job"));
    }
    Ok(())
}

#[then("posting fails in the store")]
fn posting_failed(world: &JobWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;
    if !matches!(
        result,
        Err(JobServiceError::Repository(JobRepositoryError::Persistence(_)))
    ) {
        return Err(eyre::eyre!("expected a store failure, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the update is rejected because "{field}" is not allowed"#)]
fn update_rejected(world: &JobWorld, field: String) -> Result<(), eyre::Report> {
    let result = world
        .last_update_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result in scenario world"))?;
    let Err(message) = result else {
        return Err(eyre::eyre!("expected the update to be rejected, got {result:?}"));
    };
    let expected = format!("unknown field `{field}`");
    if !message.contains(&expected) {
        return Err(eyre::eyre!("expected {expected:?} in {message:?}"));
    }
    Ok(())
}

#[then(r#"only "{title}" is listed"#)]
fn only_title_listed(world: &JobWorld, title: String) -> Result<(), eyre::Report> {
    let listing = world
        .last_listing
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing in scenario world"))?;
    let titles: Vec<&str> = listing.iter().map(|job| job.title.as_str()).collect();
    if titles != [title.as_str()] {
        return Err(eyre::eyre!("expected only {title}, found {titles:?}"));
    }
    Ok(())
}

#[then("the job can no longer be fetched")]
fn job_is_gone(world: &JobWorld) -> Result<(), eyre::Report> {
    let job = world.require_job()?;
    match run_async(world.jobs.get(job.id)) {
        Err(JobServiceError::Repository(JobRepositoryError::NotFound(_))) => Ok(()),
        other => Err(eyre::eyre!("expected the job to be gone, got {other:?}")),
    }
}
