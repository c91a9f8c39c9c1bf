//! Task management commands for CLI.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use studytrack_core::{DueDate, Task, TaskStatus, ValidationError, UNKNOWN_DUE_DATE};

use super::{CmdResult, LoginArgs, Workspace};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        /// Task title
        title: String,
        /// Due date (YYYY-MM-DD), or TBD when unknown
        #[arg(long, default_value = UNKNOWN_DUE_DATE)]
        due: String,
        /// Share of the course grade, 0-100
        #[arg(long, default_value_t = 0.0)]
        weight: f64,
        /// Course to file the task under
        #[arg(long)]
        course: Option<String>,
        /// Date assigned (default: today)
        #[arg(long)]
        assigned: Option<NaiveDate>,
    },
    /// List tasks
    List {
        /// Filter by status (todo, in_progress, done)
        #[arg(long)]
        status: Option<TaskStatus>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Change a task's status
    Status {
        /// Task ID
        id: u32,
        /// New status: todo, in_progress, done (or 1, 2, 3)
        status: TaskStatus,
    },
    /// Record the grade earned on a task, 0-100
    Grade {
        /// Task ID
        id: u32,
        /// Points earned
        points: f64,
    },
}

pub fn run(action: TaskAction, login: &LoginArgs) -> CmdResult {
    let mut ws = Workspace::open()?;

    match action {
        TaskAction::Add {
            title,
            due,
            weight,
            course,
            assigned,
        } => {
            let token = ws.config.analytics.unknown_due_token.clone();
            let student = ws.login_mut(login)?;
            let assigned = assigned.unwrap_or_else(|| Local::now().date_naive());
            let task = Task::new(student.next_task_id(), title, assigned)
                .with_due_date(due)
                .with_weight(weight);
            task.validate()?;
            if DueDate::parse(task.due_date.as_deref(), &token) == DueDate::Invalid {
                eprintln!("warning: due date is not YYYY-MM-DD; the task will not be ranked");
            }

            let id = task.id;
            match course {
                Some(course_id) => student.add_task_to_course(task, &course_id)?,
                None => student.add_task(task),
            }
            ws.roster.save()?;
            println!("Task created: {id}");
        }
        TaskAction::List { status, json } => {
            let student = ws.login(login)?;
            let tasks: Vec<&Task> = student
                .tasks
                .iter()
                .filter(|t| status.map_or(true, |s| t.status == s))
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else if tasks.is_empty() {
                println!("No tasks.");
            } else {
                println!(
                    "{:<4} {:<12} {:<12} {:>7} {:>7}  {}",
                    "ID", "STATUS", "DUE", "WEIGHT", "MINUTES", "TITLE"
                );
                for t in tasks {
                    println!(
                        "{:<4} {:<12} {:<12} {:>6}% {:>7}  {}",
                        t.id,
                        t.status.to_string(),
                        t.due_date.as_deref().unwrap_or("-"),
                        t.weighted_percent,
                        t.total_work_time,
                        t.title
                    );
                }
            }
        }
        TaskAction::Status { id, status } => {
            let student = ws.login_mut(login)?;
            let task = student.update_task(id, |t| t.status = status)?;
            println!("Task {} is now {}.", task.id, task.status);
            ws.roster.save()?;
        }
        TaskAction::Grade { id, points } => {
            if !(0.0..=100.0).contains(&points) {
                return Err(ValidationError::OutOfRange {
                    field: "points_earned".into(),
                    value: points,
                    min: 0.0,
                    max: 100.0,
                }
                .into());
            }
            let student = ws.login_mut(login)?;
            student.update_task(id, |t| t.points_earned = Some(points))?;
            ws.roster.save()?;
            println!("Task {id} graded: {points}%");
        }
    }
    Ok(())
}
