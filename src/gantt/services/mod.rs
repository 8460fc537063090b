//! Application services for timeline views.

mod view;

pub use view::{GanttError, GanttQuery, GanttResult, GanttService};
