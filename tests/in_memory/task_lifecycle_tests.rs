//! In-memory integration tests for task lifecycle operations.

use std::collections::BTreeSet;

use chrono::{TimeDelta, Utc};
use rstest::rstest;
use todo_api::task::{
    domain::{CompletePercent, TaskId},
    services::TaskLifecycleError,
};

use super::helpers::{TestService, create_due, details_due, service};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_round_trip(service: TestService) -> Result<(), eyre::Report> {
    let expire = Utc::now() + TimeDelta::days(2);
    let id = create_due(&service, "Plan sprint", expire).await?;

    let created = service.get_by_id(id).await?;
    eyre::ensure!(
        created.complete_percent() == CompletePercent::ZERO,
        "new task should start at zero percent"
    );
    eyre::ensure!(!created.is_done(), "new task should be open");

    service
        .update(id, details_due("Plan next sprint", expire + TimeDelta::hours(1)))
        .await?;
    service.set_percent_complete(id, 75.0).await?;
    let progressed = service.get_by_id(id).await?;
    eyre::ensure!(progressed.title() == "Plan next sprint", "title not updated");
    eyre::ensure!(!progressed.is_done(), "partial progress should stay open");

    service.mark_done(id).await?;
    eyre::ensure!(
        service.get_by_id(id).await?.is_done(),
        "task should be done"
    );

    service.delete(id).await?;
    eyre::ensure!(
        matches!(
            service.get_by_id(id).await,
            Err(TaskLifecycleError::NotFound(_))
        ),
        "deleted task should be gone"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_receive_distinct_identifiers(
    service: TestService,
) -> Result<(), eyre::Report> {
    let expire = Utc::now() + TimeDelta::days(1);
    let handles: Vec<_> = (0..16)
        .map(|index| {
            let shared = service.clone();
            tokio::spawn(async move {
                shared
                    .create(details_due(&format!("Parallel task {index}"), expire))
                    .await
            })
        })
        .collect();

    let mut ids = BTreeSet::new();
    for handle in handles {
        ids.insert(handle.await??);
    }

    eyre::ensure!(ids.len() == 16, "expected 16 distinct ids, got {}", ids.len());
    eyre::ensure!(
        service.list_all().await?.len() == 16,
        "every task should be listed"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identifiers_are_not_reused_after_delete(
    service: TestService,
) -> Result<(), eyre::Report> {
    let expire = Utc::now();
    let first = create_due(&service, "Temporary", expire).await?;
    service.delete(first).await?;

    let second = create_due(&service, "Permanent", expire).await?;

    eyre::ensure!(second > first, "identifier {second} reused after {first}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_percent_does_not_touch_the_store(
    service: TestService,
) -> Result<(), eyre::Report> {
    let id = create_due(&service, "Careful task", Utc::now()).await?;
    service.set_percent_complete(id, 20.0).await?;

    let result = service.set_percent_complete(id, 105.0).await;

    eyre::ensure!(
        matches!(result, Err(TaskLifecycleError::Validation(_))),
        "expected validation error, got {result:?}"
    );
    let task = service.get_by_id(id).await?;
    eyre::ensure!(
        task.complete_percent() == CompletePercent::new(20.0)?,
        "completion changed to {}",
        task.complete_percent()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn operations_on_unknown_ids_report_not_found(service: TestService) {
    let missing = TaskId::new(404);

    assert!(matches!(
        service
            .update(missing, details_due("Ghost task", Utc::now()))
            .await,
        Err(TaskLifecycleError::NotFound(_))
    ));
    assert!(matches!(
        service.set_percent_complete(missing, 10.0).await,
        Err(TaskLifecycleError::NotFound(_))
    ));
    assert!(matches!(
        service.mark_done(missing).await,
        Err(TaskLifecycleError::NotFound(_))
    ));
    assert!(matches!(
        service.delete(missing).await,
        Err(TaskLifecycleError::NotFound(_))
    ));
}
