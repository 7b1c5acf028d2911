//! Task model for the gamification engine.
//!
//! Ids are store-assigned; the engine only ever reads these fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(format!("unknown status: {s} (todo|in_progress|done)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("unknown priority: {s} (low|medium|high)")),
        }
    }
}

/// Core task record.
///
/// Note: we keep this small + serializable. Loose upstream shapes are
/// squared into this form at the store boundary, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,

    pub status: TaskStatus,
    pub priority: Priority,

    /// XP granted when the task is completed. Values below zero count as 0.
    pub xp_value: i64,

    pub created_at: DateTime<Utc>,

    /// Set when the task first moves to done; cleared when it leaves done.
    pub completed_at: Option<DateTime<Utc>>,

    /// Optional due date (UTC).
    pub due_date: Option<DateTime<Utc>>,
}

impl Task {
    /// New todo task: medium priority, 20 XP, created now.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: String::new(),
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            xp_value: 20,
            created_at: Utc::now(),
            completed_at: None,
            due_date: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_xp(mut self, xp_value: i64) -> Self {
        self.xp_value = xp_value;
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Transition the task. Moving to done stamps `completed_at` once (the
    /// first completion instant wins); leaving done clears it.
    pub fn set_status(&mut self, status: TaskStatus, now: DateTime<Utc>) {
        match status {
            TaskStatus::Done => {
                if self.completed_at.is_none() {
                    self.completed_at = Some(now);
                }
            }
            _ => self.completed_at = None,
        }
        self.status = status;
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Instant this task counts at for streaks: when it was completed,
    /// falling back to when it was created.
    pub fn completion_instant(&self) -> DateTime<Utc> {
        self.completed_at.unwrap_or(self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_set_status_stamps_completion_once() {
        let t0 = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap();

        let mut task = Task::new("write report");
        task.set_status(TaskStatus::Done, t0);
        assert_eq!(task.completed_at, Some(t0));

        // A second completion keeps the original instant.
        task.set_status(TaskStatus::Done, t1);
        assert_eq!(task.completed_at, Some(t0));
    }

    #[test]
    fn test_leaving_done_clears_completion() {
        let t0 = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();

        let mut task = Task::new("write report");
        task.set_status(TaskStatus::Done, t0);
        task.set_status(TaskStatus::InProgress, t0);

        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.completed_at, None);
        assert_eq!(task.completion_instant(), task.created_at);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
    }

    #[test]
    fn test_status_parses_back() {
        assert_eq!("in_progress".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
        assert_eq!("DONE".parse::<TaskStatus>(), Ok(TaskStatus::Done));
        assert!("finished".parse::<TaskStatus>().is_err());
        assert_eq!("High".parse::<Priority>(), Ok(Priority::High));
    }

    #[test]
    fn test_new_defaults() {
        let task = Task::new("read rfc").with_xp(35).with_priority(Priority::High);
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.xp_value, 35);
        assert_eq!(task.priority, Priority::High);
        assert!(task.completed_at.is_none());
    }
}
