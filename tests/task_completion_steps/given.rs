//! Given steps for task completion BDD scenarios.

use super::world::{TaskCompletionWorld, run_async};
use chrono::{DateTime, TimeDelta, Utc};
use eyre::WrapErr;
use mockable::Clock;
use rstest_bdd_macros::given;
use todo_api::task::domain::{TaskDetails, Window};

fn create_task(
    world: &mut TaskCompletionWorld,
    title: String,
    expire: DateTime<Utc>,
) -> Result<(), eyre::Report> {
    let details = TaskDetails::new(title, "Created by a scenario", expire);
    let id = run_async(world.service.create(details)).wrap_err("create scenario task")?;
    world.task_id = Some(id);
    Ok(())
}

#[given(r#"a task titled "{title}" due in {hours:i64} hours"#)]
fn task_due_in_hours(
    world: &mut TaskCompletionWorld,
    title: String,
    hours: i64,
) -> Result<(), eyre::Report> {
    let expire = world.clock.utc() + TimeDelta::hours(hours);
    create_task(world, title, expire)
}

#[given(r#"a task titled "{title}" due at the end of today"#)]
fn task_due_tonight(world: &mut TaskCompletionWorld, title: String) -> Result<(), eyre::Report> {
    let expire = Window::Today.bounds(&world.clock.local()).until();
    create_task(world, title, expire)
}

#[given("the task has been marked done")]
fn task_marked_done(world: &mut TaskCompletionWorld) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    run_async(world.service.mark_done(id)).wrap_err("mark scenario task done")
}

#[given("its completion has been set to {percent:u32} percent")]
fn completion_has_been_set(
    world: &mut TaskCompletionWorld,
    percent: u32,
) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    run_async(world.service.set_percent_complete(id, f64::from(percent)))
        .wrap_err("set scenario task completion")
}
