//! Wire envelope for service results.
//!
//! Every response is either `{"success": true, "data": …}` or
//! `{"success": false, "error": {"code", "message"}}`. Codes are stable
//! strings; HTTP hosts map them with [`ErrorCode::http_status`].

use crate::gantt::services::GanttError;
use crate::task::{
    domain::TaskDomainError, ports::TaskRepositoryError, services::TaskLifecycleError,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine-readable failure code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The action is not defined for the task's current status.
    InvalidTransition,
    /// The actor may not perform the action.
    PermDenied,
    /// Input failed validation.
    ValidationFailed,
    /// The task does not exist.
    TaskNotFound,
    /// The task changed since the caller read it.
    ResourceConflict,
    /// Storage or another internal failure.
    InternalError,
}

impl ErrorCode {
    /// Returns the wire code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidTransition => "INVALID_TRANSITION",
            Self::PermDenied => "PERM_DENIED",
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::ResourceConflict => "RESOURCE_CONFLICT",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Returns the HTTP status a host should answer with.
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidTransition | Self::ValidationFailed => 400,
            Self::PermDenied => 403,
            Self::TaskNotFound => 404,
            Self::ResourceConflict => 409,
            Self::InternalError => 500,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure half of the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Failure code.
    pub code: ErrorCode,
    /// Human-readable description.
    pub message: String,
}

impl ApiError {
    /// Creates an error payload.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<&TaskDomainError> for ApiError {
    fn from(err: &TaskDomainError) -> Self {
        let code = match err {
            TaskDomainError::IllegalTransition { .. } | TaskDomainError::TaskClosed(_) => {
                ErrorCode::InvalidTransition
            }
            TaskDomainError::PermissionDenied { .. }
            | TaskDomainError::ProgressReportDenied { .. } => ErrorCode::PermDenied,
            TaskDomainError::EmptyTitle
            | TaskDomainError::InvalidProgress(_)
            | TaskDomainError::SelfDependency(_)
            | TaskDomainError::CircularDependency { .. } => ErrorCode::ValidationFailed,
        };
        Self::new(code, err.to_string())
    }
}

impl From<&TaskRepositoryError> for ApiError {
    fn from(err: &TaskRepositoryError) -> Self {
        let code = match err {
            TaskRepositoryError::NotFound(_) => ErrorCode::TaskNotFound,
            TaskRepositoryError::Conflict(_) => ErrorCode::ResourceConflict,
            TaskRepositoryError::DuplicateTask(_) | TaskRepositoryError::Persistence(_) => {
                ErrorCode::InternalError
            }
        };
        Self::new(code, err.to_string())
    }
}

impl From<&TaskLifecycleError> for ApiError {
    fn from(err: &TaskLifecycleError) -> Self {
        match err {
            TaskLifecycleError::Domain(inner) => inner.into(),
            TaskLifecycleError::Repository(inner) => inner.into(),
            TaskLifecycleError::InvalidAction(_) => {
                Self::new(ErrorCode::ValidationFailed, err.to_string())
            }
            TaskLifecycleError::NotFound(_) => {
                Self::new(ErrorCode::TaskNotFound, err.to_string())
            }
        }
    }
}

impl From<&GanttError> for ApiError {
    fn from(err: &GanttError) -> Self {
        match err {
            GanttError::Tasks(inner) => inner.into(),
            GanttError::Milestones(_) => Self::new(ErrorCode::InternalError, err.to_string()),
        }
    }
}

/// Response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// `true` when `data` is set.
    pub success: bool,
    /// Payload on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Failure description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl<T> ApiResponse<T> {
    /// Wraps a successful payload.
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Wraps a failure.
    #[must_use]
    pub const fn err(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }

    /// Returns the HTTP status for this response.
    #[must_use]
    pub fn http_status(&self) -> u16 {
        self.error.as_ref().map_or(200, |error| error.code.http_status())
    }
}

impl<T, E> From<Result<T, E>> for ApiResponse<T>
where
    for<'a> ApiError: From<&'a E>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self::err(ApiError::from(&err)),
        }
    }
}
