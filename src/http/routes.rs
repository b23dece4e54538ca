//! Handlers for the `/api/todo` resource.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
};

use super::{
    SharedTaskService,
    dto::{PercentCompletePayload, TaskPayload, TaskView},
    error::ApiError,
};
use crate::task::{
    domain::{Task, TaskDetails, TaskId, Window},
    validation::validate_details,
};

/// Base path of the task resource.
pub const TODO_PATH: &str = "/api/todo";

type PathId = Result<Path<i64>, PathRejection>;
type JsonBody<T> = Result<Json<T>, JsonRejection>;

fn views<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<TaskView> {
    tasks.into_iter().map(TaskView::from).collect()
}

fn validated_details(body: JsonBody<TaskPayload>) -> Result<TaskDetails, ApiError> {
    let Json(payload) = body?;
    let details = TaskDetails::from(payload);
    validate_details(&details)?;
    Ok(details)
}

/// `GET /api/todo/all`
pub async fn list_all(
    State(service): State<SharedTaskService>,
) -> Result<Json<Vec<TaskView>>, ApiError> {
    let tasks = service.list_all().await?;
    Ok(Json(views(&tasks)))
}

/// `GET /api/todo/{id}`
pub async fn get_by_id(
    State(service): State<SharedTaskService>,
    id: PathId,
) -> Result<Json<TaskView>, ApiError> {
    let Path(id) = id?;
    let task = service.get_by_id(TaskId::new(id)).await?;
    Ok(Json(TaskView::from(&task)))
}

/// `GET /api/todo/incoming/{window}`
pub async fn list_incoming(
    State(service): State<SharedTaskService>,
    window: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<TaskView>>, ApiError> {
    let Path(raw) = window?;
    let parsed: Window = raw.parse()?;
    let tasks = service.list_incoming(parsed).await?;
    Ok(Json(views(&tasks)))
}

/// `POST /api/todo`
pub async fn create(
    State(service): State<SharedTaskService>,
    body: JsonBody<TaskPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let details = validated_details(body)?;
    let id = service.create(details).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("{TODO_PATH}/{id}"))],
    ))
}

/// `PUT /api/todo/{id}`
pub async fn update(
    State(service): State<SharedTaskService>,
    id: PathId,
    body: JsonBody<TaskPayload>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    let details = validated_details(body)?;
    service.update(TaskId::new(id), details).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `PUT /api/todo/{id}/percent_complete`
pub async fn set_percent_complete(
    State(service): State<SharedTaskService>,
    id: PathId,
    body: JsonBody<PercentCompletePayload>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    let Json(payload) = body?;
    service
        .set_percent_complete(TaskId::new(id), payload.complete_percent)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/todo/{id}`
pub async fn delete(
    State(service): State<SharedTaskService>,
    id: PathId,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    service.delete(TaskId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `PUT /api/todo/{id}/done`
pub async fn mark_done(
    State(service): State<SharedTaskService>,
    id: PathId,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    service.mark_done(TaskId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
