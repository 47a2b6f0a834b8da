//! Given steps for job lifecycle BDD scenarios.

use super::world::{JobWorld, request, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use serde_json::json;

#[given(r#"a company "{handle}" named "{name}""#)]
fn company_exists(world: &mut JobWorld, handle: String, name: String) -> Result<(), eyre::Report> {
    let profile = request(json!({
        "handle": handle,
        "name": name,
        "description": format!("About {name}"),
    }))?;
    run_async(world.companies.create(profile)).wrap_err("seed company")?;
    Ok(())
}

#[given(r#"a job "{title}" with equity "{equity}" has been posted for "{handle}""#)]
fn job_posted(
    world: &mut JobWorld,
    title: String,
    equity: String,
    handle: String,
) -> Result<(), eyre::Report> {
    let posting = request(json!({
        "title": title,
        "equity": equity,
        "companyHandle": handle,
    }))?;
    let job = run_async(world.jobs.create(posting)).wrap_err("seed job")?;
    world.last_job = Some(job);
    Ok(())
}
