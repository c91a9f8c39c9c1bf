use clap::{Parser, Subcommand};
use studytrack_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "studytrack", version, about = "Student productivity tracker")]
struct Cli {
    #[command(flatten)]
    login: commands::LoginArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Account registration and login
    Account {
        #[command(subcommand)]
        action: commands::account::AccountAction,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Course management and grades
    Course {
        #[command(subcommand)]
        action: commands::course::CourseAction,
    },
    /// Study session timer
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Daily productivity report
    Report(commands::report::ReportArgs),
    /// Recommend the most urgent task
    Recommend(commands::recommend::RecommendArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_env("STUDYTRACK_LOG")
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&Config::load_or_default());

    let result = match cli.command {
        Commands::Account { action } => commands::account::run(action, &cli.login),
        Commands::Task { action } => commands::task::run(action, &cli.login),
        Commands::Course { action } => commands::course::run(action, &cli.login),
        Commands::Session { action } => commands::session::run(action, &cli.login),
        Commands::Report(args) => commands::report::run(args, &cli.login),
        Commands::Recommend(args) => commands::recommend::run(args, &cli.login),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
