//! Pure timeline computations over task snapshots.
//!
//! Ordering, tree annotation, statistics, and layout are all functions of
//! their inputs plus a caller-supplied "now". Nothing here reads a clock or
//! touches storage.

mod config;
mod filter;
mod milestone;
pub mod ordering;
mod progress;
pub mod timeline;
pub mod tree;
mod view;

pub use config::{ParseTimeScaleError, ScaleWindow, TimeScale, TimelineConfig};
pub use filter::TaskFilter;
pub use milestone::Milestone;
pub use ordering::{compare_start, sort_order, sort_tasks};
pub use progress::{
    PriorityCounts, ProgressBucket, ProgressDistribution, StatusCounts, TaskStats, is_overdue,
    is_overdue_now,
};
pub use timeline::{AxisMark, BarPosition, DateWindow, OutOfRange, TimelineLayout};
pub use tree::{TreeConnector, build_tree_connectors};
pub use view::{GanttRow, GanttView, MilestoneMarker, ProjectGroup};
