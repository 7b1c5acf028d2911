//! Task generation rule definitions.
//!
//! These are stored definitions only; nothing here schedules or emits
//! tasks.

use momentum_core::Priority;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::collection::Record;

/// How often a rule is meant to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(format!("unknown frequency: {s} (daily|weekly|monthly)")),
        }
    }
}

/// Template for the tasks a rule would emit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskTemplate {
    pub title_prefix: String,
    pub xp_value: i64,
    pub priority: Priority,
}

/// A stored task-generation rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRule {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Free-form matching criteria, interpreted by whoever runs the rule.
    pub criteria: String,
    pub task_template: TaskTemplate,
    pub frequency: Frequency,
}

impl GenerationRule {
    pub fn new(name: impl Into<String>, template: TaskTemplate, frequency: Frequency) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: String::new(),
            criteria: String::new(),
            task_template: template,
            frequency,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_criteria(mut self, criteria: impl Into<String>) -> Self {
        self.criteria = criteria.into();
        self
    }
}

impl Record for GenerationRule {
    const ENTITY: &'static str = "generation rule";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}
