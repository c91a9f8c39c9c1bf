//! Study session timer.
//!
//! Like a stopwatch, the controller keeps only the start instant; elapsed
//! time is computed from wall-clock deltas when the session is stopped.
//!
//! ## Usage
//!
//! ```ignore
//! let mut controller = SessionController::new();
//! controller.start_session(SessionType::Study, Some(&task));
//! // ... later
//! let session = controller.stop_session(&mut student.tasks);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{SessionTask, SessionType, StudySession};
use crate::task::Task;

/// Starts and stops study sessions and credits worked minutes to tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionController {
    /// Session being timed; `None` when idle.
    #[serde(default)]
    active_session: Option<StudySession>,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_running(&self) -> bool {
        self.active_session.is_some()
    }

    pub fn active_session(&self) -> Option<&StudySession> {
        self.active_session.as_ref()
    }

    /// Whole minutes elapsed since the session started, as of `now`.
    pub fn elapsed_minutes_at(&self, now: DateTime<Utc>) -> Option<u64> {
        self.active_session
            .as_ref()
            .map(|s| whole_minutes(s.start_time, now))
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start timing a session now.
    pub fn start_session(&mut self, session_type: SessionType, task: Option<&Task>) -> StudySession {
        self.start_session_at(Utc::now(), session_type, task)
    }

    /// Start timing a session at a given instant.
    ///
    /// A session that is already running is discarded.
    pub fn start_session_at(
        &mut self,
        start: DateTime<Utc>,
        session_type: SessionType,
        task: Option<&Task>,
    ) -> StudySession {
        if let Some(previous) = &self.active_session {
            tracing::warn!(
                started_at = %previous.start_time,
                "discarding running session to start a new one"
            );
        }

        // Id 0 until the session is stored with its owner.
        let session = StudySession {
            session_id: 0,
            start_time: start,
            duration_minutes: 0,
            session_type,
            task: SessionTask::from(task),
        };
        tracing::debug!(%session_type, task_id = ?session.task.task_id(), "session started");
        self.active_session = Some(session.clone());
        session
    }

    /// Stop the running session now. See [`stop_session_at`](Self::stop_session_at).
    pub fn stop_session(&mut self, tasks: &mut [Task]) -> Option<StudySession> {
        self.stop_session_at(Utc::now(), tasks)
    }

    /// Stop the running session at `end`.
    ///
    /// Returns `None` if no session is running. Otherwise finalizes the
    /// duration in whole minutes and adds it to the matching task in
    /// `tasks` and to the session's own copy of the task.
    pub fn stop_session_at(&mut self, end: DateTime<Utc>, tasks: &mut [Task]) -> Option<StudySession> {
        let mut session = self.active_session.take()?;
        session.duration_minutes = whole_minutes(session.start_time, end);

        if let Some(task_id) = session.task.task_id() {
            match tasks.iter_mut().find(|t| t.id == task_id) {
                Some(task) => {
                    task.total_work_time += session.duration_minutes;
                    session.task = SessionTask::Record(Box::new(task.clone()));
                }
                None => {
                    if let SessionTask::Record(ref mut record) = session.task {
                        record.total_work_time += session.duration_minutes;
                    }
                    tracing::warn!(task_id, "stopped session refers to an unknown task");
                }
            }
        }

        tracing::debug!(minutes = session.duration_minutes, "session stopped");
        Some(session)
    }
}

/// Whole minutes from `start` to `end`, zero if `end` is earlier.
fn whole_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> u64 {
    let seconds = end.signed_duration_since(start).num_seconds().max(0);
    (seconds / 60) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn task(id: u32) -> Task {
        Task::new(id, "Lab report", NaiveDate::from_ymd_opt(2026, 10, 1).unwrap())
    }

    #[test]
    fn start_returns_zero_length_session() {
        let mut controller = SessionController::new();
        let session = controller.start_session(SessionType::Study, None);
        assert_eq!(session.duration_minutes, 0);
        assert_eq!(session.task, SessionTask::Unset);
        assert!(controller.is_running());
    }

    #[test]
    fn stop_without_start_is_none() {
        let mut controller = SessionController::new();
        assert!(controller.stop_session(&mut []).is_none());
    }

    #[test]
    fn sixty_seconds_is_one_minute() {
        let mut controller = SessionController::new();
        let start = Utc::now();
        controller.start_session_at(start, SessionType::Study, None);
        let session = controller
            .stop_session_at(start + Duration::seconds(60), &mut [])
            .unwrap();
        assert_eq!(session.duration_minutes, 1);
        assert!(!controller.is_running());
    }

    #[test]
    fn partial_minutes_are_truncated() {
        let mut controller = SessionController::new();
        let start = Utc::now();
        controller.start_session_at(start, SessionType::Lecture, None);
        let session = controller
            .stop_session_at(start + Duration::seconds(179), &mut [])
            .unwrap();
        assert_eq!(session.duration_minutes, 2);
    }

    #[test]
    fn clock_going_backwards_gives_zero() {
        let mut controller = SessionController::new();
        let start = Utc::now();
        controller.start_session_at(start, SessionType::Study, None);
        let session = controller
            .stop_session_at(start - Duration::minutes(5), &mut [])
            .unwrap();
        assert_eq!(session.duration_minutes, 0);
    }

    #[test]
    fn stop_credits_minutes_to_task() {
        let mut tasks = vec![task(1), task(2).with_work_time(30)];
        let mut controller = SessionController::new();
        let start = Utc::now();
        controller.start_session_at(start, SessionType::Study, Some(&tasks[1]));

        let session = controller
            .stop_session_at(start + Duration::minutes(45), &mut tasks)
            .unwrap();

        assert_eq!(tasks[0].total_work_time, 0);
        assert_eq!(tasks[1].total_work_time, 75);
        assert_eq!(session.task.record().map(|t| t.total_work_time), Some(75));
    }

    #[test]
    fn elapsed_minutes_tracks_running_session() {
        let mut controller = SessionController::new();
        let start = Utc::now();
        assert_eq!(controller.elapsed_minutes_at(start), None);
        controller.start_session_at(start, SessionType::Study, None);
        assert_eq!(
            controller.elapsed_minutes_at(start + Duration::minutes(12)),
            Some(12)
        );
    }

    #[test]
    fn controller_state_survives_serialization() {
        let mut controller = SessionController::new();
        let start = Utc::now();
        controller.start_session_at(start, SessionType::Classwork, Some(&task(5)));

        let json = serde_json::to_string(&controller).unwrap();
        let mut restored: SessionController = serde_json::from_str(&json).unwrap();
        let mut tasks = vec![task(5)];
        let session = restored
            .stop_session_at(start + Duration::minutes(20), &mut tasks)
            .unwrap();
        assert_eq!(session.session_type, SessionType::Classwork);
        assert_eq!(tasks[0].total_work_time, 20);
    }
}
