//! Analytics & recommendation engine.
//!
//! Everything here is a pure function of its inputs: the engine holds only
//! its constants, never student data, so calls are independent of each
//! other.
//!
//! - [`urgency`]: how pressing one task is, given "now"
//! - [`rank_descending`]: merge sort used to order tasks by urgency
//! - [`daily_score`]: productivity points for a [`Day`]
//! - [`course_grade`]: weighted percentage for a [`Course`]
//! - [`recommend`]: the task to work on next, with a display message

mod daily;
mod grade;
mod ranker;
mod recommend;
mod urgency;

pub use daily::{DailyReport, Day, ScoreBand};
pub use ranker::rank_descending;
pub use recommend::{RankedTask, Recommendation, NO_ACTIVE_TASKS};
pub use urgency::{days_until, UNRANKED};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::student::{Course, Student};
use crate::task::{Task, UNKNOWN_DUE_DATE};

/// Scoring constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Daily-score points per hour of accumulated work.
    #[serde(default = "default_points_per_hour")]
    pub points_per_hour: f64,
    /// Daily-score points for each DONE task.
    #[serde(default = "default_completion_bonus")]
    pub completion_bonus: f64,
    /// Floor for days-left in the urgency divisor; due-today and overdue
    /// tasks all use this value.
    #[serde(default = "default_min_days_left")]
    pub min_days_left: f64,
    /// Due-date value meaning "no deadline yet", matched case-insensitively.
    #[serde(default = "default_unknown_due_token")]
    pub unknown_due_token: String,
}

fn default_points_per_hour() -> f64 {
    10.0
}
fn default_completion_bonus() -> f64 {
    50.0
}
fn default_min_days_left() -> f64 {
    0.1
}
fn default_unknown_due_token() -> String {
    UNKNOWN_DUE_DATE.to_string()
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            points_per_hour: default_points_per_hour(),
            completion_bonus: default_completion_bonus(),
            min_days_left: default_min_days_left(),
            unknown_due_token: default_unknown_due_token(),
        }
    }
}

impl AnalyticsConfig {
    /// Reject constants that would break the urgency divisor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_days_left > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                key: "analytics.min_days_left".to_string(),
                message: format!("must be greater than 0, got {}", self.min_days_left),
            })
        }
    }
}

/// Analytics calculator parameterized by [`AnalyticsConfig`].
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    config: AnalyticsConfig,
}

impl AnalyticsEngine {
    /// Engine with the default constants.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Urgency of `task` at `now`; [`UNRANKED`] when it has no usable due date.
    pub fn urgency(&self, task: &Task, now: NaiveDateTime) -> f64 {
        urgency::score(task, now, &self.config)
    }

    /// Productivity score for the tasks in `day`, to one decimal.
    ///
    /// **No date filtering happens here.** Whatever tasks the caller put in
    /// the day are scored; pass every task and the result is all-time work.
    pub fn daily_score(&self, day: &Day) -> f64 {
        daily::score(&day.tasks, &self.config)
    }

    /// Score plus the summary figures shown in the daily report.
    pub fn daily_report(&self, day: &Day) -> DailyReport {
        daily::report(day, &self.config)
    }

    /// Weighted grade percentage for `course`, to two decimals.
    pub fn course_grade(&self, course: &Course) -> f64 {
        grade::course_grade(&course.tasks)
    }

    /// Active tasks of `tasks`, most urgent first.
    pub fn rank_tasks(&self, tasks: &[Task], now: NaiveDateTime) -> Vec<RankedTask> {
        recommend::rank(tasks, now, &self.config)
    }

    /// The most urgent unfinished task of `student`.
    pub fn recommend(&self, student: &Student, now: NaiveDateTime) -> Recommendation {
        recommend::recommend(&student.tasks, now, &self.config)
    }
}

/// [`AnalyticsEngine::urgency`] with default constants.
pub fn urgency(task: &Task, now: NaiveDateTime) -> f64 {
    AnalyticsEngine::new().urgency(task, now)
}

/// [`AnalyticsEngine::daily_score`] with default constants.
pub fn daily_score(day: &Day) -> f64 {
    AnalyticsEngine::new().daily_score(day)
}

/// [`AnalyticsEngine::course_grade`] with default constants.
pub fn course_grade(course: &Course) -> f64 {
    AnalyticsEngine::new().course_grade(course)
}

/// [`AnalyticsEngine::recommend`] with default constants.
pub fn recommend(student: &Student, now: NaiveDateTime) -> Recommendation {
    AnalyticsEngine::new().recommend(student, now)
}

/// Round half away from zero to `places` decimals.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
