//! End-to-end flows through the HTTP router over the in-memory store.

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use chrono::TimeDelta;
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use todo_api::{
    http::{SharedTaskService, TaskView, router},
    task::{adapters::memory::InMemoryTaskRepository, domain::Window, services::TaskLifecycleService},
};
use tower::ServiceExt;

#[fixture]
fn app() -> Router {
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(DefaultClock);
    let service: SharedTaskService =
        TaskLifecycleService::new(Arc::new(InMemoryTaskRepository::new()), clock);
    router(service)
}

async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&Value>,
) -> Result<(StatusCode, Option<String>, Vec<u8>), eyre::Report> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, location, bytes.to_vec()))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_travels_through_every_endpoint(app: Router) -> Result<(), eyre::Report> {
    let expire = Window::Today.bounds(&DefaultClock.local()).until();
    let payload = json!({
        "title": "Book flights",
        "description": "Return trip for the conference",
        "expire": expire,
    });

    let (status, location, _) = call(&app, "POST", "/api/todo", Some(&payload)).await?;
    eyre::ensure!(status == StatusCode::CREATED, "create returned {status}");
    let location = location.ok_or_else(|| eyre::eyre!("missing Location header"))?;

    let (status, _, body) = call(&app, "GET", &location, None).await?;
    eyre::ensure!(status == StatusCode::OK, "get returned {status}");
    let view: TaskView = serde_json::from_slice(&body)?;
    eyre::ensure!(view.title == "Book flights", "unexpected title {}", view.title);

    let (status, _, body) = call(&app, "GET", "/api/todo/incoming/Today", None).await?;
    eyre::ensure!(status == StatusCode::OK, "incoming returned {status}");
    let incoming: Vec<TaskView> = serde_json::from_slice(&body)?;
    eyre::ensure!(incoming.len() == 1, "expected one incoming task");

    let percent_uri = format!("{location}/percent_complete");
    let (status, _, _) = call(
        &app,
        "PUT",
        &percent_uri,
        Some(&json!({ "completePercent": 100 })),
    )
    .await?;
    eyre::ensure!(status == StatusCode::NO_CONTENT, "percent returned {status}");

    let (_, _, body) = call(&app, "GET", "/api/todo/incoming/Today", None).await?;
    let incoming: Vec<TaskView> = serde_json::from_slice(&body)?;
    eyre::ensure!(incoming.is_empty(), "finished task still incoming");

    let (status, _, _) = call(&app, "DELETE", &location, None).await?;
    eyre::ensure!(status == StatusCode::NO_CONTENT, "delete returned {status}");
    let (status, _, _) = call(&app, "GET", &location, None).await?;
    eyre::ensure!(status == StatusCode::NOT_FOUND, "deleted task returned {status}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_with_bad_payload_keeps_original(app: Router) -> Result<(), eyre::Report> {
    let expire = DefaultClock.utc() + TimeDelta::days(1);
    let payload = json!({
        "title": "Renew passport",
        "description": "Photos and form",
        "expire": expire,
    });
    let (_, location, _) = call(&app, "POST", "/api/todo", Some(&payload)).await?;
    let location = location.ok_or_else(|| eyre::eyre!("missing Location header"))?;

    let bad = json!({ "title": "x", "description": "y", "expire": expire });
    let (status, _, body) = call(&app, "PUT", &location, Some(&bad)).await?;
    eyre::ensure!(status == StatusCode::BAD_REQUEST, "update returned {status}");
    let error: Value = serde_json::from_slice(&body)?;
    eyre::ensure!(
        error.get("statusCode") == Some(&json!(400)),
        "unexpected error body {error}"
    );

    let (_, _, body) = call(&app, "GET", &location, None).await?;
    let view: TaskView = serde_json::from_slice(&body)?;
    eyre::ensure!(view.title == "Renew passport", "title changed to {}", view.title);
    Ok(())
}
