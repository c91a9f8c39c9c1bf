mod controller;
mod record;

pub use controller::SessionController;
pub use record::{SessionTask, SessionType, StudySession};
