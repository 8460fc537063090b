//! Timeline layout: date window, positions, and axis marks.
//!
//! Positions are percentages of the timeline width, `0.0` at the window
//! start and `100.0` at its end.

#![expect(
    clippy::float_arithmetic,
    reason = "timeline positions are fractional percentages by definition"
)]

use super::{Milestone, TimeScale, TimelineConfig};
use crate::task::domain::{Schedule, Task};
use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, TimeDelta, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Returns midnight at the start of `date`.
#[must_use]
pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    NaiveDateTime::from(date)
}

/// Moves `at` by `delta`, stopping at the representable bound.
fn saturating_shift(at: NaiveDateTime, delta: TimeDelta) -> NaiveDateTime {
    at.checked_add_signed(delta).unwrap_or(if delta < TimeDelta::zero() {
        NaiveDateTime::MIN
    } else {
        NaiveDateTime::MAX
    })
}

fn whole_days(days: i64) -> TimeDelta {
    TimeDelta::try_days(days).unwrap_or(if days < 0 {
        TimeDelta::MIN
    } else {
        TimeDelta::MAX
    })
}

#[expect(
    clippy::cast_precision_loss,
    reason = "a lossy ratio only nudges positions on absurdly wide windows"
)]
fn percent(offset: TimeDelta, span: TimeDelta) -> f64 {
    offset.num_milliseconds() as f64 / span.num_milliseconds() as f64 * 100.0
}

/// Visible `[start, end]` range of a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateWindow {
    /// Creates a window from explicit bounds.
    #[must_use]
    pub const fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Returns the window centred on `today` for `scale`.
    #[must_use]
    pub fn ideal(scale: TimeScale, today: NaiveDate, config: &TimelineConfig) -> Self {
        let window = config.window_for(scale);
        let anchor = midnight(today);
        Self::new(
            saturating_shift(anchor, -whole_days(window.before_days)),
            saturating_shift(anchor, whole_days(window.after_days)),
        )
    }

    /// Returns the window for `scale` that shows every date in `dates`.
    ///
    /// With no dates the ideal window is returned unchanged. Otherwise the
    /// window covers both the ideal window and the data, plus a symmetric
    /// buffer of `max(min_buffer_days, buffer_ratio × span)`. Bounds
    /// saturate at the representable date range.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        reason = "the buffer is truncated to whole milliseconds"
    )]
    pub fn fit(
        scale: TimeScale,
        today: NaiveDate,
        dates: impl IntoIterator<Item = NaiveDate>,
        config: &TimelineConfig,
    ) -> Self {
        let ideal = Self::ideal(scale, today, config);
        let points: Vec<NaiveDateTime> = dates.into_iter().map(midnight).collect();
        let (Some(&data_min), Some(&data_max)) = (points.iter().min(), points.iter().max())
        else {
            return ideal;
        };

        let start = std::cmp::min(ideal.start, data_min);
        let end = std::cmp::max(ideal.end, data_max);
        let scaled = (end - start).num_milliseconds() as f64 * config.buffer_ratio;
        let buffer = std::cmp::max(
            whole_days(config.min_buffer_days),
            TimeDelta::try_milliseconds(scaled as i64).unwrap_or(TimeDelta::MAX),
        );
        debug!(
            %scale,
            data_min = %data_min,
            data_max = %data_max,
            buffer_ms = buffer.num_milliseconds(),
            "timeline window fitted to data"
        );
        Self::new(
            saturating_shift(start, -buffer),
            saturating_shift(end, buffer),
        )
    }

    /// Returns the window start.
    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the window end.
    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns the window length.
    #[must_use]
    pub fn span(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Unclamped position of `at`, or `None` for an empty window.
    #[must_use]
    pub fn offset_percent(&self, at: NaiveDateTime) -> Option<f64> {
        let span = self.span();
        (span > TimeDelta::zero()).then(|| percent(at - self.start, span))
    }

    /// Position of a point marker, clamped to `[0, 100]`.
    ///
    /// An empty window puts every marker in the middle.
    #[must_use]
    pub fn marker_position(&self, at: NaiveDateTime) -> f64 {
        self.offset_percent(at)
            .map_or(50.0, |position| position.clamp(0.0, 100.0))
    }

    fn visible_position(&self, at: NaiveDateTime) -> Option<f64> {
        self.offset_percent(at)
            .filter(|position| (0.0..=100.0).contains(position))
    }
}

/// Horizontal extent of a task bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarPosition {
    /// Left edge, never below zero.
    pub left: f64,
    /// Width, never below the configured minimum. The right edge may run
    /// past 100.
    pub width: f64,
}

/// One labelled tick on the time axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisMark {
    /// Position in percent.
    pub position: f64,
    /// Display label (`M/D` for days and weeks, `YYYY/M` for months).
    pub label: String,
    /// Emphasised tick: Mondays, first weeks of a month, or January.
    pub is_main: bool,
    /// Saturday or Sunday, day scale only.
    pub is_weekend: bool,
}

/// Tasks whose whole span lies outside the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutOfRange {
    /// Tasks due before the window starts.
    pub before: usize,
    /// Tasks starting after the window ends.
    pub after: usize,
    /// `before + after`.
    pub total: usize,
}

/// Computed layout for one timeline view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineLayout {
    scale: TimeScale,
    window: DateWindow,
    today_position: f64,
    axis_marks: Vec<AxisMark>,
    out_of_range: OutOfRange,
    min_bar_width: f64,
}

impl TimelineLayout {
    /// Lays out `tasks` and `milestones` at `scale`, with `now` in local
    /// time.
    ///
    /// Tasks without both dates take no part in the layout.
    #[must_use]
    pub fn compute(
        tasks: &[Task],
        milestones: &[Milestone],
        scale: TimeScale,
        now: NaiveDateTime,
        config: &TimelineConfig,
    ) -> Self {
        let schedules: Vec<Schedule> = tasks.iter().filter_map(Task::schedule).collect();
        let dates = schedules
            .iter()
            .flat_map(|schedule| [schedule.start(), schedule.due()])
            .chain(milestones.iter().map(Milestone::date));
        let window = DateWindow::fit(scale, now.date(), dates, config);

        let axis_marks = match scale {
            TimeScale::Day => day_marks(&window, config),
            TimeScale::Week => week_marks(&window, config.max_axis_marks),
            TimeScale::Month => month_marks(&window, config.max_axis_marks),
        };

        Self {
            scale,
            window,
            today_position: window.marker_position(now),
            axis_marks,
            out_of_range: count_out_of_range(&window, &schedules),
            min_bar_width: config.min_bar_width,
        }
    }

    /// Returns the time scale.
    #[must_use]
    pub const fn scale(&self) -> TimeScale {
        self.scale
    }

    /// Returns the date window.
    #[must_use]
    pub const fn window(&self) -> DateWindow {
        self.window
    }

    /// Returns the clamped position of the today marker.
    #[must_use]
    pub const fn today_position(&self) -> f64 {
        self.today_position
    }

    /// Returns the axis marks, left to right.
    #[must_use]
    pub fn axis_marks(&self) -> &[AxisMark] {
        &self.axis_marks
    }

    /// Returns the counts of tasks outside the window.
    #[must_use]
    pub const fn out_of_range(&self) -> OutOfRange {
        self.out_of_range
    }

    /// Clamped position of a calendar date (midnight).
    #[must_use]
    pub fn position(&self, date: NaiveDate) -> f64 {
        self.window.marker_position(midnight(date))
    }

    /// Clamped position of a milestone marker.
    #[must_use]
    pub fn milestone_position(&self, milestone: &Milestone) -> f64 {
        self.position(milestone.date())
    }

    /// Bar geometry for a scheduled task.
    ///
    /// Only the left edge is clamped; short tasks are widened to the
    /// minimum bar width so they stay visible.
    #[must_use]
    pub fn bar(&self, schedule: &Schedule) -> BarPosition {
        let span = self.window.span();
        if span <= TimeDelta::zero() {
            return BarPosition {
                left: 0.0,
                width: 100.0,
            };
        }
        let start = midnight(schedule.start());
        let left = percent(start - self.window.start(), span);
        let width = percent(midnight(schedule.due()) - start, span);
        BarPosition {
            left: left.max(0.0),
            width: width.max(self.min_bar_width),
        }
    }
}

fn count_out_of_range(window: &DateWindow, schedules: &[Schedule]) -> OutOfRange {
    let before = schedules
        .iter()
        .filter(|schedule| midnight(schedule.due()) < window.start())
        .count();
    let after = schedules
        .iter()
        .filter(|schedule| midnight(schedule.start()) > window.end())
        .count();
    OutOfRange {
        before,
        after,
        total: before + after,
    }
}

fn month_day_label(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

const fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

fn day_marks(window: &DateWindow, config: &TimelineConfig) -> Vec<AxisMark> {
    let dense = window.span() > whole_days(config.dense_day_threshold);
    let mut marks = Vec::new();
    let mut alternate = true;
    let mut current = window.start().date();

    while midnight(current) <= window.end() && marks.len() < config.max_axis_marks {
        let weekday = current.weekday();
        let is_monday = weekday == Weekday::Mon;
        if let Some(position) = window.visible_position(midnight(current))
            && (!dense || alternate || is_monday)
        {
            marks.push(AxisMark {
                position,
                label: month_day_label(current),
                is_main: is_monday,
                is_weekend: is_weekend(weekday),
            });
        }
        alternate = !alternate;
        let Some(next) = current.succ_opt() else {
            break;
        };
        current = next;
    }
    marks
}

fn week_marks(window: &DateWindow, limit: usize) -> Vec<AxisMark> {
    let first_day = window.start().date();
    let to_monday = match first_day.weekday() {
        Weekday::Mon => 0,
        other => 7 - u64::from(other.num_days_from_monday()),
    };
    let mut marks = Vec::new();
    let Some(mut current) = first_day.checked_add_days(Days::new(to_monday)) else {
        return marks;
    };

    while midnight(current) <= window.end() && marks.len() < limit {
        if let Some(position) = window.visible_position(midnight(current)) {
            marks.push(AxisMark {
                position,
                label: month_day_label(current),
                is_main: current.day() <= 7,
                is_weekend: false,
            });
        }
        let Some(next) = current.checked_add_days(Days::new(7)) else {
            break;
        };
        current = next;
    }
    marks
}

fn month_marks(window: &DateWindow, limit: usize) -> Vec<AxisMark> {
    let Some(mut current) = window.start().date().with_day(1) else {
        return Vec::new();
    };
    if midnight(current) < window.start() {
        let Some(next) = current.checked_add_months(Months::new(1)) else {
            return Vec::new();
        };
        current = next;
    }

    let mut marks = Vec::new();
    while midnight(current) <= window.end() && marks.len() < limit {
        if let Some(position) = window.visible_position(midnight(current)) {
            marks.push(AxisMark {
                position,
                label: format!("{}/{}", current.year(), current.month()),
                is_main: current.month() == 1,
                is_weekend: false,
            });
        }
        let Some(next) = current.checked_add_months(Months::new(1)) else {
            break;
        };
        current = next;
    }
    marks
}
