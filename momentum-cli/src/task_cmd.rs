use anyhow::{Context, Result};
use chrono::Utc;
use clap::Subcommand;
use momentum_core::{parse_local_due_to_utc, to_rfc3339_utc, Priority, Task, TaskStatus};
use momentum_store::RawTaskRecord;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::progress_cmd::sync_rewards;
use crate::state::{load_store, save_store};

#[derive(Subcommand, Debug)]
pub enum TaskCommand {
    /// Create a task
    Add {
        title: String,

        /// XP granted on completion
        #[arg(long, default_value_t = 20)]
        xp: i64,

        /// low | medium | high
        #[arg(long, default_value = "medium")]
        priority: String,

        /// Due date as local "YYYY-MM-DD" or "YYYY-MM-DD HH:MM" (config timezone)
        #[arg(long)]
        due: Option<String>,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Board view of all tasks
    List {
        /// Only one column (todo|in_progress|done)
        #[arg(long)]
        status: Option<String>,
    },

    /// Move a task to in_progress
    Start { id: u32 },

    /// Complete a task and collect the rewards
    Done { id: u32 },

    /// Delete a task
    Rm { id: u32 },

    /// Import loosely-shaped task records from a JSON export
    Import { file: PathBuf },
}

pub fn run(cmd: TaskCommand) -> Result<()> {
    match cmd {
        TaskCommand::Add {
            title,
            xp,
            priority,
            due,
            description,
        } => add(title, xp, &priority, due.as_deref(), description),
        TaskCommand::List { status } => list(status.as_deref()),
        TaskCommand::Start { id } => start(id),
        TaskCommand::Done { id } => done(id),
        TaskCommand::Rm { id } => rm(id),
        TaskCommand::Import { file } => import(&file),
    }
}

fn add(
    title: String,
    xp: i64,
    priority: &str,
    due: Option<&str>,
    description: String,
) -> Result<()> {
    let cfg = load_config()?;
    let mut store = load_store()?;

    let priority: Priority = priority.parse().map_err(anyhow::Error::msg)?;
    let mut task = Task::new(title).with_xp(xp).with_priority(priority);
    if !description.is_empty() {
        task = task.with_description(description);
    }
    if let Some(due) = due {
        task = task.with_due_date(parse_local_due_to_utc(due, &cfg.user.timezone)?);
    }

    let id = store.add_task(task);
    save_store(&store)?;

    println!("Added task {id}");
    Ok(())
}

fn list(status: Option<&str>) -> Result<()> {
    let store = load_store()?;
    let filter: Option<TaskStatus> = status
        .map(str::parse)
        .transpose()
        .map_err(anyhow::Error::msg)?;

    for column in [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done] {
        if filter.is_some_and(|f| f != column) {
            continue;
        }

        let tasks: Vec<&Task> = store.tasks().iter().filter(|t| t.status == column).collect();
        println!("## {} ({})", column.display_name(), tasks.len());
        for t in tasks {
            println!("{}", task_line(t));
        }
        println!();
    }

    Ok(())
}

fn task_line(t: &Task) -> String {
    let mut line = format!(
        "  [{}] {} | {} XP | {}",
        t.id,
        t.title,
        t.xp_value,
        t.priority.display_name()
    );
    if let Some(done_at) = t.completed_at {
        line.push_str(&format!(" | done {}", done_at.format("%Y-%m-%d")));
    } else if let Some(due) = t.due_date {
        line.push_str(&format!(" | due {}", to_rfc3339_utc(due)));
    }
    line
}

fn start(id: u32) -> Result<()> {
    let mut store = load_store()?;
    let task = store.set_task_status(id, TaskStatus::InProgress, Utc::now())?;
    save_store(&store)?;

    println!("Started: [{}] {}", task.id, task.title);
    Ok(())
}

fn done(id: u32) -> Result<()> {
    let cfg = load_config()?;
    let mut store = load_store()?;
    let now = Utc::now();

    let task = store.set_task_status(id, TaskStatus::Done, now)?;
    println!("Completed: [{}] {} (+{} XP)", task.id, task.title, task.xp_value.max(0));

    let report = sync_rewards(&mut store, &cfg.user.user_id, now)?;
    save_store(&store)?;

    let p = &report.progress;
    println!(
        "Level {} | {} XP total | {} into this level, {} to the next",
        p.current_level, p.total_xp, p.xp_into_level, p.xp_to_next_level
    );
    println!("Streak: {}", p.streak);
    for badge in &report.newly_unlocked {
        println!("Unlocked: {} ({})", badge.name, badge.requirement);
    }

    Ok(())
}

fn rm(id: u32) -> Result<()> {
    let mut store = load_store()?;
    let task = store.remove_task(id)?;
    save_store(&store)?;

    println!("Removed: [{}] {}", task.id, task.title);
    Ok(())
}

fn import(file: &Path) -> Result<()> {
    let cfg = load_config()?;
    let mut store = load_store()?;
    let now = Utc::now();

    let json = fs::read_to_string(file).with_context(|| format!("read {}", file.display()))?;
    let raws: Vec<RawTaskRecord> =
        serde_json::from_str(&json).with_context(|| format!("parse {}", file.display()))?;

    let count = store.import_raw_tasks(&raws, now);
    let report = sync_rewards(&mut store, &cfg.user.user_id, now)?;
    save_store(&store)?;

    println!("Imported {} task record(s) from {}", count, file.display());
    for badge in &report.newly_unlocked {
        println!("Unlocked: {} ({})", badge.name, badge.requirement);
    }

    Ok(())
}
