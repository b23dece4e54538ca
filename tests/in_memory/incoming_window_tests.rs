//! Due-window listings evaluated against the system clock.

use chrono::TimeDelta;
use mockable::{Clock, DefaultClock};
use rstest::rstest;
use todo_api::task::domain::Window;

use super::helpers::{TestService, assert_ids, create_due, service};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_due_tonight_are_listed_for_today(service: TestService) -> Result<(), eyre::Report> {
    let today = Window::Today.bounds(&DefaultClock.local());
    let tonight = create_due(&service, "Tonight", today.until()).await?;
    create_due(&service, "Tomorrow", today.until() + TimeDelta::hours(1)).await?;

    assert_ids(&service.list_incoming(Window::Today).await?, &[tonight])
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn next_day_lists_only_tomorrow(service: TestService) -> Result<(), eyre::Report> {
    let next_day = Window::NextDay.bounds(&DefaultClock.local());
    create_due(&service, "Tonight", next_day.after()).await?;
    let tomorrow = create_due(&service, "Tomorrow", next_day.until()).await?;

    assert_ids(&service.list_incoming(Window::NextDay).await?, &[tomorrow])
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn current_week_is_sorted_and_skips_finished(
    service: TestService,
) -> Result<(), eyre::Report> {
    let week = Window::CurrentWeek.bounds(&DefaultClock.local());
    let late = create_due(&service, "Week end", week.until()).await?;
    let early = create_due(&service, "Week start", week.after() + TimeDelta::seconds(1)).await?;
    let finished = create_due(&service, "Finished", week.after() + TimeDelta::minutes(5)).await?;
    service.mark_done(finished).await?;

    assert_ids(
        &service.list_incoming(Window::CurrentWeek).await?,
        &[early, late],
    )
}
