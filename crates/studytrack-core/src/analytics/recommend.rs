//! "What should I work on now?"
//!
//! Drops finished tasks, ranks the rest by urgency with the merge sort and
//! reports the winner.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ranker::rank_descending;
use super::urgency::{self, days_until};
use super::AnalyticsConfig;
use crate::task::{DueDate, Task};

/// Message returned when every task is DONE (or there are none).
pub const NO_ACTIVE_TASKS: &str = "No active tasks found! You are free.";

/// An active task with the urgency it was ranked by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTask {
    pub task: Task,
    pub urgency: f64,
}

/// Outcome of a recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// `None` when there is nothing left to do.
    pub task: Option<Task>,
    pub message: String,
}

pub(crate) fn rank(tasks: &[Task], now: NaiveDateTime, config: &AnalyticsConfig) -> Vec<RankedTask> {
    let active: Vec<&Task> = tasks.iter().filter(|t| !t.status.is_done()).collect();
    let ranked = rank_descending(active, |t| urgency::score(t, now, config));
    ranked
        .into_iter()
        .map(|task| RankedTask {
            urgency: urgency::score(task, now, config),
            task: task.clone(),
        })
        .collect()
}

pub(crate) fn recommend(tasks: &[Task], now: NaiveDateTime, config: &AnalyticsConfig) -> Recommendation {
    let Some(RankedTask { task: top, urgency: score }) = rank(tasks, now, config).into_iter().next()
    else {
        tracing::debug!("no active tasks to recommend");
        return Recommendation {
            task: None,
            message: NO_ACTIVE_TASKS.to_string(),
        };
    };

    let days_left = match DueDate::parse(top.due_date.as_deref(), &config.unknown_due_token) {
        DueDate::On(due) => days_until(due, now).to_string(),
        DueDate::Unknown | DueDate::Invalid => "?".to_string(),
    };
    tracing::debug!(task_id = top.id, score, "recommended task");

    Recommendation {
        message: format!(
            "Priority Score: {score:.1} (Weight: {}% / Days Left: {days_left})",
            top.weighted_percent
        ),
        task: Some(top),
    }
}
