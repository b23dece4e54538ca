//! When steps for task completion BDD scenarios.

use super::world::{TaskCompletionWorld, run_async};
use rstest_bdd_macros::when;
use todo_api::task::domain::Window;

#[when("its completion is set to {percent:u32} percent")]
fn set_completion(world: &mut TaskCompletionWorld, percent: u32) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    let result = run_async(world.service.set_percent_complete(id, f64::from(percent)));
    world.last_update = Some(result);
    Ok(())
}

#[when(r#"incoming tasks for "{window}" are listed"#)]
fn list_incoming(world: &mut TaskCompletionWorld, window: String) -> Result<(), eyre::Report> {
    let parsed: Window = window
        .parse()
        .map_err(|err| eyre::eyre!("invalid window in scenario: {err}"))?;
    let tasks = run_async(world.service.list_incoming(parsed))
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    world.listing = Some(tasks);
    Ok(())
}
