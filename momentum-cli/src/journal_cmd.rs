use anyhow::Result;
use clap::Subcommand;
use momentum_core::Priority;
use momentum_store::{
    Frequency, GenerationRule, JournalEntry, Project, ProjectStatus, ProjectTask, Resource,
    TaskTemplate,
};

use crate::state::{load_store, save_store};

#[derive(Subcommand, Debug)]
pub enum ProjectCommand {
    /// Create a project
    Add {
        name: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// List projects
    List,

    /// Set a project's status (active|paused|done)
    SetStatus { id: u32, status: String },

    /// Add a checklist item to a project
    AddTask { project: u32, title: String },

    /// Show a project's checklist
    Tasks { id: u32 },

    /// Check a checklist item off
    Check { task: u32 },

    /// Remove a checklist item
    RmTask { task: u32 },
}

pub fn run_project(cmd: ProjectCommand) -> Result<()> {
    match cmd {
        ProjectCommand::Add { name, description } => {
            let mut store = load_store()?;
            let mut project = Project::new(name);
            if !description.is_empty() {
                project = project.with_description(description);
            }
            let id = store.add_project(project);
            save_store(&store)?;
            println!("Added project {id}");
        }

        ProjectCommand::List => {
            let store = load_store()?;
            for p in store.projects() {
                println!(
                    "[{}] {} ({}) since {}",
                    p.id,
                    p.name,
                    p.status.display_name(),
                    p.created_at.format("%Y-%m-%d")
                );
            }
        }

        ProjectCommand::SetStatus { id, status } => {
            let mut store = load_store()?;
            let status: ProjectStatus = status.parse().map_err(anyhow::Error::msg)?;
            let project = store.project(id)?.clone().with_status(status);
            store.update_project(project)?;
            save_store(&store)?;
            println!("Project {id} is now {}", status.display_name());
        }

        ProjectCommand::AddTask { project, title } => {
            let mut store = load_store()?;
            store.project(project)?;
            let id = store.add_project_task(ProjectTask::new(project, title));
            save_store(&store)?;
            println!("Added checklist item {id}");
        }

        ProjectCommand::Tasks { id } => {
            let store = load_store()?;
            let project = store.project(id)?;
            let items = store.tasks_for_project(id);
            let done = items.iter().filter(|t| t.is_done()).count();
            println!("{}: {done}/{} done", project.name, items.len());
            for t in items.iter().filter(|t| !t.is_done()) {
                println!("  [ ] [{}] {}", t.id, t.title);
            }
            for t in items.iter().filter(|t| t.is_done()) {
                println!("  [x] [{}] {}", t.id, t.title);
            }
        }

        ProjectCommand::Check { task } => {
            let mut store = load_store()?;
            let item = store.complete_project_task(task)?;
            save_store(&store)?;
            println!("Checked off: {}", item.title);
        }

        ProjectCommand::RmTask { task } => {
            let mut store = load_store()?;
            let item = store.remove_project_task(task)?;
            save_store(&store)?;
            println!("Removed checklist item: {}", item.title);
        }
    }

    Ok(())
}

#[derive(Subcommand, Debug)]
pub enum JournalCommand {
    /// Write a journal entry
    Add {
        title: String,

        #[arg(long, default_value = "")]
        content: String,

        /// Attach to a project
        #[arg(long)]
        project: Option<u32>,
    },

    /// List entries, newest first; --project narrows to one project
    List {
        #[arg(long)]
        project: Option<u32>,
    },
}

pub fn run_journal(cmd: JournalCommand) -> Result<()> {
    match cmd {
        JournalCommand::Add {
            title,
            content,
            project,
        } => {
            let mut store = load_store()?;
            let mut entry = JournalEntry::new(title, content);
            if let Some(pid) = project {
                store.project(pid)?;
                entry = entry.with_project(pid);
            }
            let id = store.add_journal_entry(entry);
            save_store(&store)?;
            println!("Added journal entry {id}");
        }

        JournalCommand::List { project } => {
            let store = load_store()?;
            match project {
                Some(pid) => {
                    store.project(pid)?;
                    for e in store.entries_for_project(pid) {
                        print_entry(e);
                    }
                }
                None => {
                    let mut entries: Vec<&JournalEntry> = store.journal_entries().iter().collect();
                    entries.sort_by(|a, b| b.date.cmp(&a.date));
                    for e in entries {
                        print_entry(e);
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_entry(e: &JournalEntry) {
    let place = match e.project_id {
        Some(pid) => format!("project {pid}"),
        None => "no project".to_string(),
    };
    println!("[{}] {} | {} ({})", e.id, e.date.format("%Y-%m-%d"), e.title, place);
    if !e.content.is_empty() {
        println!("    {}", e.content);
    }
}

#[derive(Subcommand, Debug)]
pub enum ResourceCommand {
    /// Save a resource
    Add {
        title: String,

        #[arg(long)]
        url: String,

        /// Label like "article" or "video"
        #[arg(long, default_value = "article")]
        kind: String,
    },

    /// List resources
    List,
}

pub fn run_resource(cmd: ResourceCommand) -> Result<()> {
    match cmd {
        ResourceCommand::Add { title, url, kind } => {
            let mut store = load_store()?;
            let id = store.add_resource(Resource::new(title, url).with_kind(kind));
            save_store(&store)?;
            println!("Added resource {id}");
        }

        ResourceCommand::List => {
            let store = load_store()?;
            for r in store.resources() {
                println!("[{}] {} <{}> ({})", r.id, r.title, r.url, r.kind);
            }
        }
    }

    Ok(())
}

#[derive(Subcommand, Debug)]
pub enum RuleCommand {
    /// Define a task generation rule
    Add {
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Free-form matching criteria
        #[arg(long, default_value = "")]
        criteria: String,

        /// Title prefix for generated tasks
        #[arg(long, default_value = "")]
        title_prefix: String,

        /// XP for generated tasks
        #[arg(long, default_value_t = 20)]
        xp: i64,

        /// low | medium | high
        #[arg(long, default_value = "medium")]
        priority: String,

        /// daily | weekly | monthly
        #[arg(long, default_value = "weekly")]
        frequency: String,
    },

    /// List rule definitions
    List,
}

pub fn run_rule(cmd: RuleCommand) -> Result<()> {
    match cmd {
        RuleCommand::Add {
            name,
            description,
            criteria,
            title_prefix,
            xp,
            priority,
            frequency,
        } => {
            let mut store = load_store()?;
            let priority: Priority = priority.parse().map_err(anyhow::Error::msg)?;
            let frequency: Frequency = frequency.parse().map_err(anyhow::Error::msg)?;

            let template = TaskTemplate {
                title_prefix,
                xp_value: xp,
                priority,
            };
            let mut rule = GenerationRule::new(name, template, frequency);
            if !description.is_empty() {
                rule = rule.with_description(description);
            }
            if !criteria.is_empty() {
                rule = rule.with_criteria(criteria);
            }

            let id = store.add_generation_rule(rule);
            save_store(&store)?;
            println!("Added rule {id}");
        }

        RuleCommand::List => {
            let store = load_store()?;
            for r in store.generation_rules() {
                println!(
                    "[{}] {} ({}) -> \"{}\" {} XP {}",
                    r.id,
                    r.name,
                    r.frequency.display_name(),
                    r.task_template.title_prefix,
                    r.task_template.xp_value,
                    r.task_template.priority.display_name()
                );
                if !r.criteria.is_empty() {
                    println!("    criteria: {}", r.criteria);
                }
            }
        }
    }

    Ok(())
}
