//! When steps for job lifecycle BDD scenarios.

use super::world::{JobWorld, request, run_async};
use jobboard::job::services::JobUpdateRequest;
use rstest_bdd_macros::when;
use serde_json::{Map, Value, json};

#[when(r#"a job "{title}" paying {salary:i32} with equity "{equity}" is posted for "{handle}""#)]
fn post_job(
    world: &mut JobWorld,
    title: String,
    salary: i32,
    equity: String,
    handle: String,
) -> Result<(), eyre::Report> {
    let posting = request(json!({
        "title": title,
        "salary": salary,
        "equity": equity,
        "companyHandle": handle,
    }))?;
    let result = run_async(world.jobs.create(posting));
    if let Ok(job) = &result {
        world.last_job = Some(job.clone());
    }
    world.last_create_result = Some(result);
    Ok(())
}

#[when(r#"the job is patched with "{field}" set to "{value}""#)]
fn patch_job(world: &mut JobWorld, field: String, value: String) -> Result<(), eyre::Report> {
    let id = world.require_job()?.id;
    let body = Value::Object(Map::from_iter([(field, Value::String(value))]));
    let outcome = match serde_json::from_value::<JobUpdateRequest>(body) {
        Ok(changes) => run_async(world.jobs.update(id, changes)).map_err(|err| err.to_string()),
        Err(err) => Err(err.to_string()),
    };
    world.last_update_result = Some(outcome);
    Ok(())
}

#[when(r#"jobs are listed with "{param}" set to "{value}""#)]
fn list_jobs(world: &mut JobWorld, param: String, value: String) -> Result<(), eyre::Report> {
    let query = request(Value::Object(Map::from_iter([(param, Value::String(value))])))?;
    let listing = run_async(world.jobs.find_all(query))
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    world.last_listing = Some(listing);
    Ok(())
}

#[when(r#"company "{handle}" is removed"#)]
fn remove_company(world: &mut JobWorld, handle: String) -> Result<(), eyre::Report> {
    run_async(world.companies.remove(&handle))
        .map_err(|err| eyre::eyre!("company removal failed: {err}"))
}
