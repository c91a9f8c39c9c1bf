//! Daily productivity score.
//!
//! Each task in the day earns `points_per_hour` for every hour of
//! accumulated work (fractional hours count fractionally) and a flat
//! `completion_bonus` when it is DONE. The score has no upper bound.

use chrono::{Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use super::{round_to, AnalyticsConfig};
use crate::session::StudySession;
use crate::student::Student;
use crate::task::Task;

/// Tasks and sessions grouped under one date for scoring.
///
/// A view built by the caller; nothing checks that the tasks belong to
/// `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub sessions: Vec<StudySession>,
}

impl Day {
    pub fn new(date: NaiveDate, tasks: Vec<Task>) -> Self {
        Self {
            date,
            tasks,
            sessions: Vec::new(),
        }
    }

    pub fn with_sessions(mut self, sessions: Vec<StudySession>) -> Self {
        self.sessions = sessions;
        self
    }

    /// Every task and session the student has, filed under `date`.
    pub fn all_of(student: &Student, date: NaiveDate) -> Self {
        Self::new(date, student.tasks.clone()).with_sessions(student.study_sessions.clone())
    }

    /// Only the tasks assigned on `date` and the sessions started on it,
    /// in local time.
    pub fn assigned_on(student: &Student, date: NaiveDate) -> Self {
        Self::assigned_on_in(student, date, &Local)
    }

    /// [`assigned_on`](Self::assigned_on) with session start times read in `tz`.
    pub fn assigned_on_in<Tz: TimeZone>(student: &Student, date: NaiveDate, tz: &Tz) -> Self {
        let tasks = student
            .tasks
            .iter()
            .filter(|t| t.date_assigned == date)
            .cloned()
            .collect();
        let sessions = student
            .study_sessions
            .iter()
            .filter(|s| s.start_time.with_timezone(tz).date_naive() == date)
            .cloned()
            .collect();
        Self::new(date, tasks).with_sessions(sessions)
    }
}

/// Feedback tier for a daily score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// Above 100 points
    Excellent,
    /// Above 50 points
    Good,
    NeedsWork,
}

impl ScoreBand {
    pub fn for_score(score: f64) -> Self {
        if score > 100.0 {
            ScoreBand::Excellent
        } else if score > 50.0 {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsWork
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Amazing! You are crushing it today!",
            ScoreBand::Good => "Good job! Keep up the work.",
            ScoreBand::NeedsWork => "Time to get to work! Finish a task for 50 points!",
        }
    }
}

/// Figures shown by the daily analytics report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub score: f64,
    pub band: ScoreBand,
    pub task_count: usize,
    pub completed_tasks: usize,
    pub session_count: usize,
    pub session_minutes: u64,
}

pub(crate) fn score(tasks: &[Task], config: &AnalyticsConfig) -> f64 {
    let total: f64 = tasks
        .iter()
        .map(|task| {
            let hours = task.total_work_time as f64 / 60.0;
            let bonus = if task.status.is_done() {
                config.completion_bonus
            } else {
                0.0
            };
            hours * config.points_per_hour + bonus
        })
        .sum();
    round_to(total, 1)
}

pub(crate) fn report(day: &Day, config: &AnalyticsConfig) -> DailyReport {
    let score = score(&day.tasks, config);
    DailyReport {
        date: day.date,
        score,
        band: ScoreBand::for_score(score),
        task_count: day.tasks.len(),
        completed_tasks: day.tasks.iter().filter(|t| t.status.is_done()).count(),
        session_count: day.sessions.len(),
        session_minutes: day.sessions.iter().map(|s| s.duration_minutes).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionTask, SessionType};
    use crate::task::TaskStatus;
    use chrono::{FixedOffset, TimeZone, Utc};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn task(minutes: u64, status: TaskStatus) -> Task {
        Task::new(1, "Work", date())
            .with_work_time(minutes)
            .with_status(status)
    }

    #[test]
    fn empty_day_scores_zero() {
        assert_eq!(score(&[], &AnalyticsConfig::default()), 0.0);
    }

    #[test]
    fn done_hour_scores_sixty() {
        let tasks = [task(60, TaskStatus::Done)];
        assert_eq!(score(&tasks, &AnalyticsConfig::default()), 60.0);
    }

    #[test]
    fn unfinished_work_has_no_bonus() {
        let tasks = [task(90, TaskStatus::InProgress), task(0, TaskStatus::Todo)];
        assert_eq!(score(&tasks, &AnalyticsConfig::default()), 15.0);
    }

    #[test]
    fn fractional_hours_round_to_one_decimal() {
        // 25 min = 4.1666.. points
        let tasks = [task(25, TaskStatus::Todo)];
        assert_eq!(score(&tasks, &AnalyticsConfig::default()), 4.2);
        // 50 min = 8.333.. points
        let tasks = [task(50, TaskStatus::Todo)];
        assert_eq!(score(&tasks, &AnalyticsConfig::default()), 8.3);
        // 3 min = 0.5 points
        let tasks = [task(3, TaskStatus::Todo)];
        assert_eq!(score(&tasks, &AnalyticsConfig::default()), 0.5);
    }

    #[test]
    fn custom_constants_apply() {
        let cfg = AnalyticsConfig {
            points_per_hour: 20.0,
            completion_bonus: 5.0,
            ..Default::default()
        };
        let tasks = [task(30, TaskStatus::Done)];
        assert_eq!(score(&tasks, &cfg), 15.0);
    }

    #[test]
    fn bands_follow_thresholds() {
        assert_eq!(ScoreBand::for_score(100.1), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(100.0), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(50.1), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(50.0), ScoreBand::NeedsWork);
        assert_eq!(ScoreBand::for_score(0.0), ScoreBand::NeedsWork);
    }

    #[test]
    fn assigned_on_filters_tasks_and_sessions() {
        let mut student = Student::new("a@b.c", "1");
        student.add_task(Task::new(1, "Today", date()).with_work_time(60));
        student.add_task(Task::new(2, "Earlier", date().pred_opt().unwrap()).with_work_time(600));
        student.add_study_session(StudySession {
            session_id: 1,
            start_time: Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap(),
            duration_minutes: 40,
            session_type: SessionType::Study,
            task: SessionTask::Reference(1),
        });
        student.add_study_session(StudySession {
            session_id: 2,
            start_time: Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap(),
            duration_minutes: 15,
            session_type: SessionType::Lecture,
            task: SessionTask::Unset,
        });

        let day = Day::assigned_on_in(&student, date(), &Utc);
        assert_eq!(day.tasks.len(), 1);
        assert_eq!(day.sessions.len(), 1);

        let all = Day::all_of(&student, date());
        assert_eq!(all.tasks.len(), 2);

        let report = report(&all, &AnalyticsConfig::default());
        assert_eq!(report.score, 110.0);
        assert_eq!(report.band, ScoreBand::Excellent);
        assert_eq!(report.session_minutes, 55);
    }

    #[test]
    fn evening_session_stays_on_local_day() {
        let mut student = Student::new("a@b.c", "1");
        // 22:30 on Oct 18 at UTC-4 is 02:30 UTC on Oct 19.
        student.add_study_session(StudySession {
            session_id: 1,
            start_time: Utc.with_ymd_and_hms(2026, 10, 19, 2, 30, 0).unwrap(),
            duration_minutes: 45,
            session_type: SessionType::Study,
            task: SessionTask::Unset,
        });
        let eastern = FixedOffset::west_opt(4 * 3600).unwrap();

        assert_eq!(Day::assigned_on_in(&student, date(), &eastern).sessions.len(), 1);
        let next = date().succ_opt().unwrap();
        assert!(Day::assigned_on_in(&student, next, &eastern).sessions.is_empty());
        assert_eq!(Day::assigned_on_in(&student, next, &Utc).sessions.len(), 1);
    }
}
