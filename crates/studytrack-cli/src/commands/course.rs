use clap::Subcommand;
use studytrack_core::{Course, ValidationError};

use super::{CmdResult, LoginArgs, Workspace};

#[derive(Subcommand)]
pub enum CourseAction {
    /// Add a course
    Add {
        /// Course code, e.g. CSCI2134
        course_id: String,
    },
    /// List courses with their tasks
    List,
    /// Show the weighted grade for a course
    Grade {
        course_id: String,
    },
}

pub fn run(action: CourseAction, login: &LoginArgs) -> CmdResult {
    let mut ws = Workspace::open()?;

    match action {
        CourseAction::Add { course_id } => {
            let student = ws.login_mut(login)?;
            if student.course(&course_id).is_some() {
                return Err(ValidationError::InvalidValue {
                    field: "course_id".into(),
                    message: format!("course {course_id} already exists"),
                }
                .into());
            }
            student.add_course(Course::new(course_id.as_str()));
            ws.roster.save()?;
            println!("Course added: {course_id}");
        }
        CourseAction::List => {
            let student = ws.login(login)?;
            if student.courses.is_empty() {
                println!("No courses.");
            }
            for course in &student.courses {
                println!("{} ({} tasks)", course.course_id, course.tasks.len());
                for t in &course.tasks {
                    println!("  [{}] {} - {}", t.id, t.title, t.status);
                }
            }
        }
        CourseAction::Grade { course_id } => {
            let engine = ws.engine();
            let student = ws.login(login)?;
            let course = student
                .course(&course_id)
                .ok_or_else(|| ValidationError::CourseNotFound(course_id.clone()))?;
            println!("{}: {:.2}%", course.course_id, engine.course_grade(course));
        }
    }
    Ok(())
}
