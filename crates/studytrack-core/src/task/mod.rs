//! Task records consumed by the analytics engine.
//!
//! Tasks are owned by a [`Student`](crate::Student); the engine only reads
//! them. The session controller adds worked minutes and status updates come
//! from the CLI.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Placeholder stored in `due_date` when no real deadline is known.
pub const UNKNOWN_DUE_DATE: &str = "TBD";

/// Date format accepted for due dates.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Task lifecycle status.
///
/// Any status may be set from any other; the original tracker let the user
/// pick freely from the three values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Numeric code used by the original menu (1 = TODO, 2 = IN PROGRESS, 3 = DONE).
    pub fn code(&self) -> u8 {
        match self {
            TaskStatus::Todo => 1,
            TaskStatus::InProgress => 2,
            TaskStatus::Done => 3,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, TaskStatus::Done)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::InProgress => "IN PROGRESS",
            TaskStatus::Done => "DONE",
        };
        f.write_str(label)
    }
}

impl FromStr for TaskStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "1" | "todo" => Ok(TaskStatus::Todo),
            "2" | "in_progress" | "inprogress" => Ok(TaskStatus::InProgress),
            "3" | "done" => Ok(TaskStatus::Done),
            _ => Err(ValidationError::UnknownStatus(s.to_string())),
        }
    }
}

/// Interpretation of a task's raw `due_date` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDate {
    /// No date, or the unknown sentinel.
    Unknown,
    /// Present but not a `YYYY-MM-DD` date.
    Invalid,
    On(NaiveDate),
}

impl DueDate {
    /// Classify a raw due date. `sentinel` is compared case-insensitively.
    pub fn parse(raw: Option<&str>, sentinel: &str) -> Self {
        let Some(raw) = raw else {
            return DueDate::Unknown;
        };
        if raw.is_empty() || raw.eq_ignore_ascii_case(sentinel) {
            return DueDate::Unknown;
        }
        // Exact YYYY-MM-DD only; surrounding whitespace is not stripped.
        if raw.trim() != raw {
            return DueDate::Invalid;
        }
        match NaiveDate::parse_from_str(raw, DUE_DATE_FORMAT) {
            Ok(date) => DueDate::On(date),
            Err(_) => DueDate::Invalid,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DueDate::On(date) => Some(*date),
            _ => None,
        }
    }
}

/// A unit of coursework tracked for one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique within a student
    pub id: u32,
    pub title: String,
    pub date_assigned: NaiveDate,
    /// `YYYY-MM-DD`, the [`UNKNOWN_DUE_DATE`] sentinel, or absent.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Share of the course grade, 0-100.
    #[serde(default)]
    pub weighted_percent: f64,
    /// Score out of 100; `None` until graded.
    #[serde(default)]
    pub points_earned: Option<f64>,
    #[serde(default)]
    pub status: TaskStatus,
    /// Accumulated minutes of work.
    #[serde(default)]
    pub total_work_time: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
}

impl Task {
    /// New TODO task with no due date, weight or grade.
    pub fn new(id: u32, title: impl Into<String>, date_assigned: NaiveDate) -> Self {
        Self {
            id,
            title: title.into(),
            date_assigned,
            due_date: None,
            weighted_percent: 0.0,
            points_earned: None,
            status: TaskStatus::Todo,
            total_work_time: 0,
            course_id: None,
        }
    }

    pub fn with_due_date(mut self, due: impl Into<String>) -> Self {
        self.due_date = Some(due.into());
        self
    }

    pub fn with_weight(mut self, weighted_percent: f64) -> Self {
        self.weighted_percent = weighted_percent;
        self
    }

    pub fn with_points(mut self, points_earned: f64) -> Self {
        self.points_earned = Some(points_earned);
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_work_time(mut self, minutes: u64) -> Self {
        self.total_work_time = minutes;
        self
    }

    pub fn with_course(mut self, course_id: impl Into<String>) -> Self {
        self.course_id = Some(course_id.into());
        self
    }

    /// Classify `due_date` using the default sentinel.
    pub fn due(&self) -> DueDate {
        DueDate::parse(self.due_date.as_deref(), UNKNOWN_DUE_DATE)
    }

    /// Check the weight and grade ranges.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_percent("weighted_percent", self.weighted_percent)?;
        if let Some(points) = self.points_earned {
            check_percent("points_earned", points)?;
        }
        Ok(())
    }
}

fn check_percent(field: &str, value: f64) -> Result<(), ValidationError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value,
            min: 0.0,
            max: 100.0,
        })
    }
}
