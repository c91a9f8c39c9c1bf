//! # studytrack Core Library
//!
//! Business logic for studytrack, a single-student productivity tracker.
//! Everything is available through the `studytrack` CLI, which is a thin
//! layer over this crate.
//!
//! ## Architecture
//!
//! - **Analytics Engine**: pure functions that score a day's productivity,
//!   compute weighted course grades and recommend the most urgent task
//! - **Session Timer**: wall-clock stopwatch that credits worked minutes to tasks
//! - **Storage**: JSON student store behind an injected [`StudentStore`] and
//!   TOML configuration
//! - **Credentials**: password hashing behind [`CredentialHasher`]
//!
//! ## Key Components
//!
//! - [`AnalyticsEngine`]: urgency, ranking, daily score, course grade, recommendation
//! - [`SessionController`]: start/stop study sessions
//! - [`Roster`]: loaded students plus the store they are saved to
//! - [`Config`]: application configuration management

pub mod analytics;
pub mod auth;
pub mod error;
pub mod session;
pub mod storage;
pub mod student;
pub mod task;

pub use analytics::{
    course_grade, daily_score, rank_descending, recommend, urgency, AnalyticsConfig,
    AnalyticsEngine, DailyReport, Day, RankedTask, Recommendation, ScoreBand, NO_ACTIVE_TASKS,
    UNRANKED,
};
pub use auth::{CredentialHasher, SaltedSha256};
pub use error::{AuthError, ConfigError, CoreError, StorageError, ValidationError};
pub use session::{SessionController, SessionTask, SessionType, StudySession};
pub use storage::{Config, JsonStore, MemoryStore, Roster, StudentStore};
pub use student::{Course, Student};
pub use task::{DueDate, Task, TaskStatus, UNKNOWN_DUE_DATE};
