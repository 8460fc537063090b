//! Application services for task lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    ReportProgressRequest, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
    TransitionTaskRequest,
};
