//! HTTP transport for the task lifecycle service.
//!
//! Handlers translate requests into service calls and map service results
//! to status codes. The service itself never sees HTTP types.

use axum::{
    Router,
    routing::{get, post, put},
};
use mockable::Clock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::task::{ports::TaskRepository, services::TaskLifecycleService};

pub mod dto;
pub mod error;
pub mod routes;

pub use dto::{PercentCompletePayload, TaskPayload, TaskView};
pub use error::{ApiError, ErrorResponse};

/// Lifecycle service over type-erased store and clock, as shared by handlers.
pub type SharedTaskService =
    TaskLifecycleService<dyn TaskRepository, dyn Clock + Send + Sync>;

/// Builds the application router.
pub fn router(service: SharedTaskService) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/todo", post(routes::create))
        .route("/api/todo/all", get(routes::list_all))
        .route("/api/todo/incoming/{window}", get(routes::list_incoming))
        .route(
            "/api/todo/{id}",
            get(routes::get_by_id)
                .put(routes::update)
                .delete(routes::delete),
        )
        .route(
            "/api/todo/{id}/percent_complete",
            put(routes::set_percent_complete),
        )
        .route("/api/todo/{id}/done", put(routes::mark_done))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}

async fn health_check() -> &'static str {
    "ok"
}
