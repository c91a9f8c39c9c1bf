//! Urgency heuristic: weight divided by days left.
//!
//! - No due date, the unknown token, or an unparsable date: [`UNRANKED`]
//! - Otherwise `weighted_percent / max(days_left, min_days_left)`
//!
//! Due-today and overdue tasks share the floor divisor, so they all score
//! `weighted_percent * 10` with the default floor of 0.1.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::AnalyticsConfig;
use crate::task::{DueDate, Task};

/// Urgency of a task without a usable due date. Below every real score.
pub const UNRANKED: f64 = -1.0;

pub(crate) fn score(task: &Task, now: NaiveDateTime, config: &AnalyticsConfig) -> f64 {
    let DueDate::On(due) = DueDate::parse(task.due_date.as_deref(), &config.unknown_due_token)
    else {
        return UNRANKED;
    };
    let days_left = days_until(due, now) as f64;
    task.weighted_percent / days_left.max(config.min_days_left)
}

/// Whole days from `now` until the start of `due`, truncated toward zero.
///
/// Negative when overdue by at least a full day.
pub fn days_until(due: NaiveDate, now: NaiveDateTime) -> i64 {
    due.and_time(NaiveTime::MIN)
        .signed_duration_since(now)
        .num_days()
}
