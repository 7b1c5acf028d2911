//! Wire-shape task records and their one normalization point.
//!
//! Upstream exports arrive loosely shaped: camelCase or snake_case keys,
//! string or integer ids, fields missing outright. Everything is squared
//! into the canonical [`Task`] here, and nowhere else downstream.

use chrono::{DateTime, Utc};
use momentum_core::{Priority, Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// An id as it arrives: an integer, or a string holding one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    fn as_u32(&self) -> Option<u32> {
        match self {
            RawId::Number(n) => u32::try_from(*n).ok(),
            RawId::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// A task record as exported: every field optional, both naming styles
/// accepted. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTaskRecord {
    #[serde(alias = "Id")]
    pub id: Option<RawId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    #[serde(alias = "xpValue", alias = "xp")]
    pub xp_value: Option<i64>,
    #[serde(alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(alias = "completedAt")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(alias = "dueDate")]
    pub due_date: Option<DateTime<Utc>>,
}

/// Normalize one raw record into a canonical task.
///
/// Defensive defaults: empty title/description, status todo, priority
/// medium, 0 XP (negatives clamp to 0), `created_at` = `now`. A record
/// without a usable id gets `fallback_id`.
pub fn normalize(raw: &RawTaskRecord, fallback_id: u32, now: DateTime<Utc>) -> Task {
    Task {
        id: raw
            .id
            .as_ref()
            .and_then(RawId::as_u32)
            .unwrap_or(fallback_id),
        title: raw.title.clone().unwrap_or_default(),
        description: raw.description.clone().unwrap_or_default(),
        status: raw
            .status
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(TaskStatus::Todo),
        priority: raw
            .priority
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Priority::Medium),
        xp_value: raw.xp_value.unwrap_or(0).max(0),
        created_at: raw.created_at.unwrap_or(now),
        completed_at: raw.completed_at,
        due_date: raw.due_date,
    }
}
