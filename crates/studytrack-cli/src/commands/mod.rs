//! Subcommand handlers.

pub mod account;
pub mod config;
pub mod course;
pub mod recommend;
pub mod report;
pub mod session;
pub mod task;

use std::error::Error;

use chrono::{Local, NaiveDateTime};
use clap::Args;
use studytrack_core::{AnalyticsEngine, AuthError, Config, JsonStore, Roster, SaltedSha256, Student};

pub type CmdResult = Result<(), Box<dyn Error>>;

/// Account credentials shared by every student command.
#[derive(Args)]
pub struct LoginArgs {
    /// Account email
    #[arg(long, global = true, env = "STUDYTRACK_EMAIL")]
    pub email: Option<String>,
    /// Account password
    #[arg(long, global = true, env = "STUDYTRACK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl LoginArgs {
    pub fn require(&self) -> Result<(&str, &str), Box<dyn Error>> {
        let email = self.email.as_deref().ok_or("--email is required")?;
        let password = self.password.as_deref().ok_or("--password is required")?;
        Ok((email, password))
    }
}

/// Configuration plus the roster it points at.
pub struct Workspace {
    pub config: Config,
    pub roster: Roster<JsonStore>,
}

impl Workspace {
    pub fn open() -> Result<Self, Box<dyn Error>> {
        let config = Config::load()?;
        let path = config.database_path()?;
        tracing::debug!(path = %path.display(), "opening student database");
        let roster = Roster::open(JsonStore::new(path))?;
        Ok(Self { config, roster })
    }

    pub fn engine(&self) -> AnalyticsEngine {
        AnalyticsEngine::with_config(self.config.analytics.clone())
    }

    /// The student named by `login`, if the password checks out.
    pub fn login(&self, login: &LoginArgs) -> Result<&Student, Box<dyn Error>> {
        let (email, password) = login.require()?;
        match self.roster.get_student(email) {
            Some(student) if student.check_password(&SaltedSha256, password) => Ok(student),
            _ => Err(AuthError::InvalidCredentials.into()),
        }
    }

    pub fn login_mut(&mut self, login: &LoginArgs) -> Result<&mut Student, Box<dyn Error>> {
        let email = self.login(login)?.email.clone();
        self.roster
            .get_student_mut(&email)
            .ok_or_else(|| AuthError::InvalidCredentials.into())
    }
}

/// Local wall-clock time, the "now" the analytics engine ranks against.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
