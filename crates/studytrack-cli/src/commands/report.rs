use chrono::{Local, NaiveDate};
use clap::Args;
use studytrack_core::Day;

use super::{CmdResult, LoginArgs, Workspace};

#[derive(Args)]
pub struct ReportArgs {
    /// Only score tasks assigned on this date (YYYY-MM-DD)
    #[arg(long)]
    assigned_on: Option<NaiveDate>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Daily productivity report. Without `--assigned-on` every task counts.
pub fn run(args: ReportArgs, login: &LoginArgs) -> CmdResult {
    let ws = Workspace::open()?;
    let engine = ws.engine();
    let student = ws.login(login)?;

    let day = match args.assigned_on {
        Some(date) => Day::assigned_on(student, date),
        None => Day::all_of(student, Local::now().date_naive()),
    };
    let report = engine.daily_report(&day);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("--- DAILY ANALYTICS REPORT ---");
    println!("Date: {}", report.date);
    println!("Tasks: {} ({} done)", report.task_count, report.completed_tasks);
    println!(
        "Sessions: {} ({} minutes)",
        report.session_count, report.session_minutes
    );
    println!("Score: {:.1}", report.score);
    println!("{}", report.band.message());
    Ok(())
}
