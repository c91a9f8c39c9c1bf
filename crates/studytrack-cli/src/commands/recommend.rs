use clap::Args;

use super::{now, CmdResult, LoginArgs, Workspace};

#[derive(Args)]
pub struct RecommendArgs {
    /// List every active task by urgency, not just the top one
    #[arg(long)]
    all: bool,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

pub fn run(args: RecommendArgs, login: &LoginArgs) -> CmdResult {
    let ws = Workspace::open()?;
    let engine = ws.engine();
    let student = ws.login(login)?;
    let now = now();

    if args.all {
        let ranked = engine.rank_tasks(&student.tasks, now);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&ranked)?);
            return Ok(());
        }
        for (rank, entry) in ranked.iter().enumerate() {
            println!(
                "{:>2}. [{}] {} (urgency {:.1})",
                rank + 1,
                entry.task.id,
                entry.task.title,
                entry.urgency
            );
        }
        return Ok(());
    }

    let rec = engine.recommend(student, now);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&rec)?);
        return Ok(());
    }
    if let Some(task) = &rec.task {
        println!("Next up: {}", task.title);
    }
    println!("{}", rec.message);
    Ok(())
}
