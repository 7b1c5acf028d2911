use anyhow::Result;
use clap::{Parser, Subcommand};
use momentum_store::RecordStore;

mod config;
mod journal_cmd;
mod progress_cmd;
mod state;
mod task_cmd;

const BUILD_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("MOMENTUM_BUILD_SHA"));

#[derive(Parser, Debug)]
#[command(name = "momentum", version = BUILD_VERSION, about = "Momentum gamified productivity CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One-time setup: write ~/.momentum/config.toml and a seeded state file
    Init {
        /// Stable id the leaderboard pseudonym is derived from
        #[arg(long)]
        user_id: Option<String>,

        /// IANA timezone for entering due dates, e.g. America/Chicago
        #[arg(long)]
        timezone: Option<String>,
    },

    /// Task CRUD and the completion flow
    Task {
        #[command(subcommand)]
        command: task_cmd::TaskCommand,
    },

    /// Progress report: level, streak, badge progress
    Progress,

    /// Badge catalog with earned state
    Badges {
        /// Only badges in one category (milestone|streak|experience)
        #[arg(long)]
        category: Option<String>,
    },

    /// Anonymized leaderboard
    Leaderboard {
        /// Rows to print (default from config)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Project records
    Project {
        #[command(subcommand)]
        command: journal_cmd::ProjectCommand,
    },

    /// Project journal entries
    Journal {
        #[command(subcommand)]
        command: journal_cmd::JournalCommand,
    },

    /// Saved links and reading material
    Resource {
        #[command(subcommand)]
        command: journal_cmd::ResourceCommand,
    },

    /// Task generation rule definitions
    Rule {
        #[command(subcommand)]
        command: journal_cmd::RuleCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Init { user_id, timezone } => init(user_id, timezone),
        Command::Task { command } => task_cmd::run(command),
        Command::Progress => progress_cmd::progress(),
        Command::Badges { category } => progress_cmd::badges(category),
        Command::Leaderboard { limit } => progress_cmd::leaderboard(limit),
        Command::Project { command } => journal_cmd::run_project(command),
        Command::Journal { command } => journal_cmd::run_journal(command),
        Command::Resource { command } => journal_cmd::run_resource(command),
        Command::Rule { command } => journal_cmd::run_rule(command),
    }
}

fn init(user_id: Option<String>, timezone: Option<String>) -> Result<()> {
    let mut cfg = config::Config::default();
    if let Some(id) = user_id {
        cfg.user.user_id = id;
    }
    if let Some(tz) = timezone {
        if tz.parse::<chrono_tz::Tz>().is_err() {
            anyhow::bail!("unknown timezone: {tz}");
        }
        cfg.user.timezone = tz;
    }
    config::init_config(&cfg)?;

    let path = state::store_path()?;
    if path.exists() {
        println!("State already exists: {}", path.display());
        return Ok(());
    }

    let store = RecordStore::seeded();
    state::save_store(&store)?;
    println!("Wrote {} ({} badges in the catalog)", path.display(), store.badges().len());

    Ok(())
}
