use clap::Subcommand;
use studytrack_core::{SaltedSha256, Student};

use super::{CmdResult, LoginArgs, Workspace};

#[derive(Subcommand)]
pub enum AccountAction {
    /// Create a new account with --email and --password
    Register {
        /// Student number
        #[arg(long)]
        student_id: String,
    },
    /// Check --email and --password
    Login,
}

pub fn run(action: AccountAction, login: &LoginArgs) -> CmdResult {
    let mut ws = Workspace::open()?;

    match action {
        AccountAction::Register { student_id } => {
            let (email, password) = login.require()?;
            let mut student = Student::new(email, student_id);
            student.set_password(&SaltedSha256, password)?;
            ws.roster.add_student(student)?;
            println!("Account created for {email}.");
        }
        AccountAction::Login => {
            let student = ws.login(login)?;
            println!("Login successful! Welcome back, {}.", student.email);
            println!(
                "Stats: {} Courses | {} Tasks | {} Sessions",
                student.courses.len(),
                student.tasks.len(),
                student.study_sessions.len()
            );
        }
    }
    Ok(())
}
