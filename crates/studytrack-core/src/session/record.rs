//! Study session records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum SessionType {
    Lecture,
    #[default]
    Study,
    Classwork,
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionType::Lecture => "LECTURE",
            SessionType::Study => "STUDY",
            SessionType::Classwork => "CLASSWORK",
        };
        f.write_str(label)
    }
}

impl FromStr for SessionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lecture" => Ok(SessionType::Lecture),
            "study" => Ok(SessionType::Study),
            "classwork" => Ok(SessionType::Classwork),
            _ => Err(ValidationError::UnknownSessionType(s.to_string())),
        }
    }
}

/// The task a session was spent on.
///
/// Sessions fresh from the controller carry the full record; sessions read
/// back from storage carry only the id until the store resolves it against
/// the student's tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum SessionTask {
    #[default]
    Unset,
    Reference(u32),
    Record(Box<Task>),
}

impl SessionTask {
    pub fn task_id(&self) -> Option<u32> {
        match self {
            SessionTask::Unset => None,
            SessionTask::Reference(id) => Some(*id),
            SessionTask::Record(task) => Some(task.id),
        }
    }

    pub fn record(&self) -> Option<&Task> {
        match self {
            SessionTask::Record(task) => Some(task),
            _ => None,
        }
    }

    /// Collapse a full record to its id, the form written to storage.
    pub fn to_reference(&self) -> SessionTask {
        match self.task_id() {
            Some(id) => SessionTask::Reference(id),
            None => SessionTask::Unset,
        }
    }

    /// Replace a reference with the matching record from `tasks`.
    ///
    /// Returns `false` when the referenced id is not in `tasks`; the
    /// reference is left in place.
    pub fn resolve(&mut self, tasks: &[Task]) -> bool {
        let SessionTask::Reference(id) = *self else {
            return true;
        };
        match tasks.iter().find(|t| t.id == id) {
            Some(task) => {
                *self = SessionTask::Record(Box::new(task.clone()));
                true
            }
            None => false,
        }
    }
}

impl From<Option<&Task>> for SessionTask {
    fn from(task: Option<&Task>) -> Self {
        match task {
            Some(task) => SessionTask::Record(Box::new(task.clone())),
            None => SessionTask::Unset,
        }
    }
}

/// A timed block of study. Immutable once its duration is finalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySession {
    pub session_id: u32,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: u64,
    #[serde(default)]
    pub session_type: SessionType,
    #[serde(default)]
    pub task: SessionTask,
}
