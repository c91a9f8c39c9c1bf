//! Student persistence.
//!
//! The engine never touches storage; callers load students through a
//! [`StudentStore`], work on them in memory and save them back. The store is
//! passed in explicitly, there is no process-wide handle.
//!
//! On disk a session's task is written as the task id only. Loading resolves
//! the ids back into task records so everything handed to the analytics
//! engine is complete.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::error::{Result, StorageError};
use crate::student::Student;

/// Load and save the full set of students.
pub trait StudentStore {
    fn load(&self) -> Result<Vec<Student>>;
    fn save(&self, students: &[Student]) -> Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    students: Vec<Student>,
}

/// Swap session task records for ids before writing.
fn to_stored(students: &[Student]) -> Vec<Student> {
    students
        .iter()
        .cloned()
        .map(|mut student| {
            for session in &mut student.study_sessions {
                session.task = session.task.to_reference();
            }
            student
        })
        .collect()
}

/// Resolve session task ids against each student's tasks.
fn resolve(students: &mut [Student]) {
    for student in students {
        let Student {
            email,
            tasks,
            study_sessions,
            ..
        } = student;
        for session in study_sessions.iter_mut() {
            if !session.task.resolve(tasks) {
                tracing::warn!(
                    student = %email,
                    session_id = session.session_id,
                    task_id = ?session.task.task_id(),
                    "session refers to a task that no longer exists"
                );
            }
        }
    }
}

/// Students kept in a pretty-printed JSON file: `{"students": [...]}`.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StudentStore for JsonStore {
    /// A missing file is created empty. A file that does not parse is
    /// reported at warn level and treated as empty.
    fn load(&self) -> Result<Vec<Student>> {
        if !self.path.is_file() {
            self.save(&[])?;
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| StorageError::ReadFailed {
            path: self.path.clone(),
            source,
        })?;

        let mut students = match serde_json::from_str::<StoreFile>(&content) {
            Ok(file) => file.students,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "student database is corrupted, starting with empty data"
                );
                Vec::new()
            }
        };
        resolve(&mut students);
        tracing::debug!(count = students.len(), "loaded students");
        Ok(students)
    }

    fn save(&self, students: &[Student]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::WriteFailed {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let file = StoreFile {
            students: to_stored(students),
        };
        let json = serde_json::to_string_pretty(&file)?;
        std::fs::write(&self.path, json).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), count = students.len(), "saved students");
        Ok(())
    }
}

/// In-memory store. Round-trips through the same stored form as
/// [`JsonStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    students: RefCell<Vec<Student>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StudentStore for MemoryStore {
    fn load(&self) -> Result<Vec<Student>> {
        let mut students = self.students.borrow().clone();
        resolve(&mut students);
        Ok(students)
    }

    fn save(&self, students: &[Student]) -> Result<()> {
        *self.students.borrow_mut() = to_stored(students);
        Ok(())
    }
}

/// The loaded students plus the store they came from.
///
/// Registration saves immediately; other changes are written by
/// [`Roster::save`].
pub struct Roster<S: StudentStore> {
    store: S,
    students: Vec<Student>,
}

impl<S: StudentStore> Roster<S> {
    /// Load every student from `store`.
    pub fn open(store: S) -> Result<Self> {
        let students = store.load()?;
        Ok(Self { store, students })
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn get_student(&self, email: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.email == email)
    }

    pub fn get_student_mut(&mut self, email: &str) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.email == email)
    }

    /// Register a new student and save.
    ///
    /// # Errors
    /// Fails if the email is already registered or the save fails.
    pub fn add_student(&mut self, student: Student) -> Result<()> {
        if self.get_student(&student.email).is_some() {
            return Err(StorageError::DuplicateStudent(student.email).into());
        }
        self.students.push(student);
        self.save()
    }

    pub fn save(&self) -> Result<()> {
        self.store.save(&self.students)
    }
}
