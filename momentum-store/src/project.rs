//! Project records and their checklist items.

use chrono::{DateTime, Utc};
use momentum_core::TaskStatus;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::collection::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Paused,
    Done,
}

impl ProjectStatus {
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Done => "done",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            "done" => Ok(Self::Done),
            _ => Err(format!("unknown project status: {s} (active|paused|done)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// New active project, created now.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: String::new(),
            status: ProjectStatus::Active,
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }
}

impl Record for Project {
    const ENTITY: &'static str = "project";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// One checklist item on a project. These stay out of the XP flow; only
/// the main task list feeds the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectTask {
    pub id: u32,
    pub project_id: u32,
    pub title: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

impl ProjectTask {
    /// New todo item on a project, created now.
    pub fn new(project_id: u32, title: impl Into<String>) -> Self {
        Self {
            id: 0,
            project_id,
            title: title.into(),
            status: TaskStatus::Todo,
            created_at: Utc::now(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}

impl Record for ProjectTask {
    const ENTITY: &'static str = "project task";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}
