//! Mapping of service errors to HTTP responses.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::{
    domain::ParseWindowError, services::TaskLifecycleError, validation::ValidationErrors,
};

/// Body returned with every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// HTTP status code.
    pub status_code: u16,
    /// Human-readable error message.
    pub message: String,
    /// Per-field validation messages keyed by payload field name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, Vec<String>>,
}

/// Errors surfaced by API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Task lifecycle operation failed.
    #[error(transparent)]
    Lifecycle(#[from] TaskLifecycleError),
    /// Request payload failed field validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// Window path segment could not be parsed.
    #[error(transparent)]
    InvalidWindow(#[from] ParseWindowError),
    /// Request body or path could not be extracted.
    #[error("{message}")]
    Rejected {
        /// Status reported by the extractor.
        status: StatusCode,
        /// Extractor message.
        message: String,
    },
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: bad_request_unless_media_type(rejection.status()),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected {
            status: bad_request_unless_media_type(rejection.status()),
            message: rejection.body_text(),
        }
    }
}

fn bad_request_unless_media_type(status: StatusCode) -> StatusCode {
    if status == StatusCode::UNSUPPORTED_MEDIA_TYPE || status.is_server_error() {
        status
    } else {
        StatusCode::BAD_REQUEST
    }
}

impl ApiError {
    /// Returns the status code this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Lifecycle(TaskLifecycleError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Lifecycle(TaskLifecycleError::Validation(_))
            | Self::Validation(_)
            | Self::InvalidWindow(_) => StatusCode::BAD_REQUEST,
            Self::Lifecycle(TaskLifecycleError::Repository(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Rejected { status, .. } => *status,
        }
    }

    fn field_errors(&self) -> BTreeMap<String, Vec<String>> {
        let violations = match self {
            Self::Validation(errors) | Self::Lifecycle(TaskLifecycleError::Validation(errors)) => {
                errors.violations()
            }
            _ => return BTreeMap::new(),
        };

        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for violation in violations {
            grouped
                .entry(violation.field().as_str().to_owned())
                .or_default()
                .push(violation.message().to_owned());
        }
        grouped
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }

        let body = ErrorResponse {
            status_code: status.as_u16(),
            message: self.to_string(),
            errors: self.field_errors(),
        };
        (status, Json(body)).into_response()
    }
}
