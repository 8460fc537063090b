//! Timeline configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Zoom level of a timeline view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeScale {
    /// One axis mark per day.
    Day,
    /// One axis mark per week.
    #[default]
    Week,
    /// One axis mark per month.
    Month,
}

impl TimeScale {
    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for TimeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned while parsing a time scale.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown time scale: {0}")]
pub struct ParseTimeScaleError(pub String);

impl TryFrom<&str> for TimeScale {
    type Error = ParseTimeScaleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(ParseTimeScaleError(value.to_owned())),
        }
    }
}

/// Days shown before and after today in the ideal window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleWindow {
    /// Look-back in days.
    pub before_days: i64,
    /// Look-ahead in days.
    pub after_days: i64,
}

impl ScaleWindow {
    /// Creates a window symmetric around today.
    #[must_use]
    pub const fn symmetric(days: i64) -> Self {
        Self {
            before_days: days,
            after_days: days,
        }
    }
}

/// Configuration for timeline layout.
///
/// # Examples
///
/// ```
/// use taskline::gantt::domain::{TimeScale, TimelineConfig};
///
/// let config = TimelineConfig::default();
/// assert_eq!(config.window_for(TimeScale::Day).before_days, 14);
/// assert_eq!(config.min_buffer_days, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Ideal window for the day scale.
    pub day: ScaleWindow,
    /// Ideal window for the week scale.
    pub week: ScaleWindow,
    /// Ideal window for the month scale.
    pub month: ScaleWindow,
    /// Smallest padding added around task and milestone data.
    pub min_buffer_days: i64,
    /// Padding as a fraction of the expanded span, when that is larger.
    pub buffer_ratio: f64,
    /// Narrowest task bar, in percent of the timeline width.
    pub min_bar_width: f64,
    /// Day-scale windows longer than this many days only label every
    /// second day (Mondays are always labelled).
    pub dense_day_threshold: i64,
    /// Axis marks stop once this many have been emitted.
    pub max_axis_marks: usize,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            day: ScaleWindow::symmetric(14),
            week: ScaleWindow::symmetric(35),
            month: ScaleWindow::symmetric(60),
            min_buffer_days: 3,
            buffer_ratio: 0.05,
            min_bar_width: 5.0,
            dense_day_threshold: 21,
            max_axis_marks: 1_000,
        }
    }
}

impl TimelineConfig {
    /// Returns the ideal window for `scale`.
    #[must_use]
    pub const fn window_for(&self, scale: TimeScale) -> ScaleWindow {
        match scale {
            TimeScale::Day => self.day,
            TimeScale::Week => self.week,
            TimeScale::Month => self.month,
        }
    }
}
