//! Project journal entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: u32,
    /// Entries may live outside any project.
    pub project_id: Option<u32>,
    pub title: String,
    pub content: String,
    pub date: DateTime<Utc>,
}

impl JournalEntry {
    /// New entry dated now.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: 0,
            project_id: None,
            title: title.into(),
            content: content.into(),
            date: Utc::now(),
        }
    }

    pub fn with_project(mut self, project_id: u32) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }
}

impl Record for JournalEntry {
    const ENTITY: &'static str = "journal entry";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}
