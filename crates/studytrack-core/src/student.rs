//! Student and course records.

use serde::{Deserialize, Serialize};

use crate::auth::CredentialHasher;
use crate::error::{AuthError, ValidationError};
use crate::session::StudySession;
use crate::task::Task;

/// A course and the tasks that make up its grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub course_id: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Course {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            tasks: Vec::new(),
        }
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }
}

/// One user of the tracker and everything they own.
///
/// `tasks` holds every task; a task that belongs to a course also has a copy
/// in that course's list. Use [`Student::update_task`] so both copies stay
/// in step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub email: String,
    #[serde(default)]
    pub password_hash: String,
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub study_sessions: Vec<StudySession>,
}

impl Student {
    pub fn new(email: impl Into<String>, student_id: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: String::new(),
            student_id: student_id.into(),
            courses: Vec::new(),
            tasks: Vec::new(),
            study_sessions: Vec::new(),
        }
    }

    // ── Credentials ──────────────────────────────────────────────────

    pub fn set_password(
        &mut self,
        hasher: &impl CredentialHasher,
        plain: &str,
    ) -> Result<(), AuthError> {
        self.password_hash = hasher.hash(plain)?;
        Ok(())
    }

    pub fn check_password(&self, hasher: &impl CredentialHasher, plain: &str) -> bool {
        hasher.verify(plain, &self.password_hash)
    }

    // ── Collections ──────────────────────────────────────────────────

    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Add a task to the global list and to the course named by `course_id`.
    pub fn add_task_to_course(&mut self, task: Task, course_id: &str) -> Result<(), ValidationError> {
        let course = self
            .courses
            .iter_mut()
            .find(|c| c.course_id == course_id)
            .ok_or_else(|| ValidationError::CourseNotFound(course_id.to_string()))?;
        let task = task.with_course(course_id);
        course.tasks.push(task.clone());
        self.tasks.push(task);
        Ok(())
    }

    /// Store a finished session. The controller credits minutes to the task
    /// in `tasks`; the course copy of that task is refreshed here.
    pub fn add_study_session(&mut self, session: StudySession) {
        if let Some(task) = session.task.task_id().and_then(|id| self.task(id)).cloned() {
            for course in &mut self.courses {
                for copy in course.tasks.iter_mut().filter(|t| t.id == task.id) {
                    *copy = task.clone();
                }
            }
        }
        self.study_sessions.push(session);
    }

    pub fn task(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.course_id == course_id)
    }

    /// Apply `update` to task `id` and to its course copy, if any.
    pub fn update_task(
        &mut self,
        id: u32,
        update: impl Fn(&mut Task),
    ) -> Result<&Task, ValidationError> {
        for course in &mut self.courses {
            course.tasks.iter_mut().filter(|t| t.id == id).for_each(&update);
        }
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ValidationError::TaskNotFound(id))?;
        update(task);
        Ok(task)
    }

    /// Id for the next new task: one past the count, bumped past any id
    /// already in use.
    pub fn next_task_id(&self) -> u32 {
        let mut id = self.tasks.len() as u32 + 1;
        while self.tasks.iter().any(|t| t.id == id) {
            id += 1;
        }
        id
    }

    /// Id for the next stored session.
    pub fn next_session_id(&self) -> u32 {
        self.study_sessions
            .iter()
            .map(|s| s.session_id)
            .max()
            .unwrap_or(0)
            + 1
    }
}
