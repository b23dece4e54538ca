//! Then steps for task completion BDD scenarios.

use super::world::TaskCompletionWorld;
use rstest_bdd_macros::then;
use todo_api::task::{domain::CompletePercent, services::TaskLifecycleError};

#[then("the task is done")]
fn task_is_done(world: &TaskCompletionWorld) -> Result<(), eyre::Report> {
    let task = world.current_task()?;
    eyre::ensure!(task.is_done(), "expected task to be done");
    Ok(())
}

#[then("the task is not done")]
fn task_is_not_done(world: &TaskCompletionWorld) -> Result<(), eyre::Report> {
    let task = world.current_task()?;
    eyre::ensure!(!task.is_done(), "expected task to be open");
    Ok(())
}

#[then("its completion is {percent:u32} percent")]
fn completion_is(world: &TaskCompletionWorld, percent: u32) -> Result<(), eyre::Report> {
    let expected = CompletePercent::new(f64::from(percent))
        .map_err(|err| eyre::eyre!("invalid expected percent in scenario: {err}"))?;
    let task = world.current_task()?;
    eyre::ensure!(
        task.complete_percent() == expected,
        "expected completion {expected}, found {}",
        task.complete_percent()
    );
    Ok(())
}

#[then("the update is rejected with a validation error")]
fn update_rejected(world: &TaskCompletionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_update
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result"))?;

    if !matches!(result, Err(TaskLifecycleError::Validation(_))) {
        return Err(eyre::eyre!("expected Validation error, got {result:?}"));
    }
    Ok(())
}

#[then("the listing is empty")]
fn listing_is_empty(world: &TaskCompletionWorld) -> Result<(), eyre::Report> {
    let listing = world
        .listing
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing"))?;
    eyre::ensure!(listing.is_empty(), "expected no tasks, found {}", listing.len());
    Ok(())
}

#[then("the listing contains the task")]
fn listing_contains_task(world: &TaskCompletionWorld) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    let listing = world
        .listing
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing"))?;
    eyre::ensure!(
        listing.iter().any(|task| task.id() == id),
        "expected task {id} in listing"
    );
    Ok(())
}
