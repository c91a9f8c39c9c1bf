//! Study session commands.
//!
//! The running session outlives the process, so the controller is kept in
//! `active_session.json` in the data directory between `start` and `stop`.

use std::path::PathBuf;

use chrono::Utc;
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use studytrack_core::storage::data_dir;
use studytrack_core::{SessionController, SessionType, ValidationError};

use super::{CmdResult, LoginArgs, Workspace};

const ACTIVE_SESSION_FILE: &str = "active_session.json";

#[derive(Subcommand)]
pub enum SessionAction {
    /// Start timing a session
    Start {
        /// lecture, study or classwork
        #[arg(long = "type", default_value = "study")]
        session_type: SessionType,
        /// Task to credit the minutes to
        #[arg(long)]
        task: Option<u32>,
    },
    /// Stop the running session and save it
    Stop,
    /// Show the running session
    Status,
}

/// Controller state saved between invocations.
#[derive(Serialize, Deserialize)]
struct ActiveSession {
    email: String,
    controller: SessionController,
}

fn state_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    Ok(data_dir()?.join(ACTIVE_SESSION_FILE))
}

fn load_state() -> Result<Option<ActiveSession>, Box<dyn std::error::Error>> {
    let path = state_path()?;
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)?;
    Ok(Some(serde_json::from_str(&content)?))
}

fn save_state(state: &ActiveSession) -> CmdResult {
    std::fs::write(state_path()?, serde_json::to_string_pretty(state)?)?;
    Ok(())
}

fn clear_state() -> CmdResult {
    let path = state_path()?;
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

pub fn run(action: SessionAction, login: &LoginArgs) -> CmdResult {
    let mut ws = Workspace::open()?;

    match action {
        SessionAction::Start { session_type, task } => {
            let student = ws.login(login)?;
            let task = match task {
                Some(id) => Some(student.task(id).ok_or(ValidationError::TaskNotFound(id))?),
                None => None,
            };

            let mut state = match load_state()? {
                Some(state) if state.email == student.email => state,
                Some(other) if other.controller.is_running() => {
                    return Err(format!(
                        "a session for {} is already running; stop it first",
                        other.email
                    )
                    .into());
                }
                _ => ActiveSession {
                    email: student.email.clone(),
                    controller: SessionController::new(),
                },
            };
            if state.controller.is_running() {
                println!("Replacing the running session.");
            }
            let session = state.controller.start_session(session_type, task);
            save_state(&state)?;

            match session.task.record() {
                Some(t) => println!("{} session started on task {}: {}", session.session_type, t.id, t.title),
                None => println!("{} session started.", session.session_type),
            }
        }
        SessionAction::Stop => {
            let student = ws.login_mut(login)?;
            let mut state = match load_state()? {
                Some(state) if state.email == student.email => state,
                _ => {
                    println!("No session is running.");
                    return Ok(());
                }
            };
            let Some(mut session) = state.controller.stop_session(&mut student.tasks) else {
                println!("No session is running.");
                return clear_state();
            };
            session.session_id = student.next_session_id();
            let minutes = session.duration_minutes;
            student.add_study_session(session);
            ws.roster.save()?;
            clear_state()?;
            println!("Session stopped: {minutes} minutes recorded.");
        }
        SessionAction::Status => {
            let student = ws.login(login)?;
            let running = load_state()?
                .filter(|state| state.email == student.email)
                .and_then(|state| {
                    let session = state.controller.active_session()?.clone();
                    let minutes = state.controller.elapsed_minutes_at(Utc::now())?;
                    Some((session, minutes))
                });
            match running {
                Some((session, minutes)) => {
                    println!("{} session running for {minutes} minutes.", session.session_type);
                    if let Some(id) = session.task.task_id() {
                        println!("Task: {id}");
                    }
                }
                None => println!("No session is running."),
            }
        }
    }
    Ok(())
}
