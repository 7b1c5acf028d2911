//! The record store: every collection the app persists, one snapshot file.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use momentum_core::{default_catalog, Badge, LeaderboardEntry, Task, TaskStatus, UserProgress};
use serde::{Deserialize, Serialize};

use crate::collection::{Collection, Record};
use crate::error::StoreResult;
use crate::journal::JournalEntry;
use crate::project::{Project, ProjectTask};
use crate::record::{normalize, RawTaskRecord};
use crate::resource::Resource;
use crate::rules::GenerationRule;

impl Record for Task {
    const ENTITY: &'static str = "task";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl Record for Badge {
    const ENTITY: &'static str = "badge";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl Record for LeaderboardEntry {
    const ENTITY: &'static str = "leaderboard entry";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// One badge award. At most one per badge, ever.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBadge {
    pub id: u32,
    pub badge_id: u32,
    pub earned_at: DateTime<Utc>,
}

impl Record for UserBadge {
    const ENTITY: &'static str = "award";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// Everything the app persists, in one serializable unit.
///
/// The engine never touches this directly; callers hand it snapshots
/// (`tasks()`, `badges()`, ...) and write back results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordStore {
    tasks: Collection<Task>,
    badges: Collection<Badge>,
    awards: Collection<UserBadge>,
    leaderboard: Collection<LeaderboardEntry>,
    projects: Collection<Project>,
    project_tasks: Collection<ProjectTask>,
    journal: Collection<JournalEntry>,
    resources: Collection<Resource>,
    rules: Collection<GenerationRule>,
}

impl RecordStore {
    /// Fresh store with the built-in badge catalog seeded in.
    pub fn seeded() -> Self {
        let mut store = Self::default();
        for badge in default_catalog() {
            store.badges.upsert(badge);
        }
        store
    }

    /// Load a snapshot, or start a seeded store when none exists yet.
    pub fn load_or_seed(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            return Ok(Self::seeded());
        }
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Write the snapshot.
    pub fn save(&self, path: &Path) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    // ----- tasks -----

    pub fn tasks(&self) -> &[Task] {
        self.tasks.all()
    }

    pub fn task(&self, id: u32) -> StoreResult<&Task> {
        self.tasks.get(id)
    }

    pub fn add_task(&mut self, task: Task) -> u32 {
        self.tasks.insert(task)
    }

    pub fn update_task(&mut self, task: Task) -> StoreResult<()> {
        self.tasks.replace(task)
    }

    pub fn remove_task(&mut self, id: u32) -> StoreResult<Task> {
        self.tasks.remove(id)
    }

    /// Transition a task, stamping or clearing its completion instant
    /// (first completion wins). Returns the updated record.
    pub fn set_task_status(
        &mut self,
        id: u32,
        status: TaskStatus,
        now: DateTime<Utc>,
    ) -> StoreResult<Task> {
        let task = self.tasks.get_mut(id)?;
        task.set_status(status, now);
        Ok(task.clone())
    }

    /// Import loosely-shaped task records, normalizing each one. A record
    /// carrying an id replaces any task already under it; the rest get
    /// fresh ids. Returns how many records landed.
    pub fn import_raw_tasks(&mut self, raws: &[RawTaskRecord], now: DateTime<Utc>) -> usize {
        for raw in raws {
            let task = normalize(raw, self.tasks.next_id(), now);
            self.tasks.upsert(task);
        }
        raws.len()
    }

    // ----- badge catalog (admin CRUD) -----

    pub fn badges(&self) -> &[Badge] {
        self.badges.all()
    }

    pub fn badge(&self, id: u32) -> StoreResult<&Badge> {
        self.badges.get(id)
    }

    pub fn add_badge(&mut self, badge: Badge) -> u32 {
        self.badges.insert(badge)
    }

    pub fn update_badge(&mut self, badge: Badge) -> StoreResult<()> {
        self.badges.replace(badge)
    }

    pub fn remove_badge(&mut self, id: u32) -> StoreResult<Badge> {
        self.badges.remove(id)
    }

    // ----- awards -----

    pub fn awards(&self) -> &[UserBadge] {
        self.awards.all()
    }

    /// Ids of every badge already earned.
    pub fn awarded_ids(&self) -> HashSet<u32> {
        self.awards.iter().map(|a| a.badge_id).collect()
    }

    /// Record an award once. Returns false when the badge is already held;
    /// an unknown badge id is `NotFound`.
    pub fn award_badge(&mut self, badge_id: u32, earned_at: DateTime<Utc>) -> StoreResult<bool> {
        self.badges.get(badge_id)?;
        if self.awards.iter().any(|a| a.badge_id == badge_id) {
            return Ok(false);
        }
        self.awards.insert(UserBadge {
            id: 0,
            badge_id,
            earned_at,
        });
        Ok(true)
    }

    // ----- leaderboard -----

    pub fn leaderboard(&self) -> &[LeaderboardEntry] {
        self.leaderboard.all()
    }

    /// Upsert the user's score row from a progress report and touch
    /// `last_active`.
    pub fn update_user_score(
        &mut self,
        user_id: &str,
        progress: &UserProgress,
        badge_count: u64,
        now: DateTime<Utc>,
    ) {
        if let Some(entry) = self.leaderboard.iter_mut().find(|e| e.user_id == user_id) {
            entry.score = progress.total_xp;
            entry.badge_count = badge_count;
            entry.tasks_completed = progress.completed_tasks;
            entry.streak = progress.streak;
            entry.level = progress.current_level;
            entry.last_active = now;
        } else {
            self.leaderboard.insert(LeaderboardEntry {
                id: 0,
                user_id: user_id.to_string(),
                score: progress.total_xp,
                badge_count,
                tasks_completed: progress.completed_tasks,
                streak: progress.streak,
                level: progress.current_level,
                last_active: now,
            });
        }
    }

    // ----- projects -----

    pub fn projects(&self) -> &[Project] {
        self.projects.all()
    }

    pub fn project(&self, id: u32) -> StoreResult<&Project> {
        self.projects.get(id)
    }

    pub fn add_project(&mut self, project: Project) -> u32 {
        self.projects.insert(project)
    }

    pub fn update_project(&mut self, project: Project) -> StoreResult<()> {
        self.projects.replace(project)
    }

    pub fn remove_project(&mut self, id: u32) -> StoreResult<Project> {
        self.projects.remove(id)
    }

    // ----- project checklists -----

    pub fn project_tasks(&self) -> &[ProjectTask] {
        self.project_tasks.all()
    }

    pub fn project_task(&self, id: u32) -> StoreResult<&ProjectTask> {
        self.project_tasks.get(id)
    }

    pub fn add_project_task(&mut self, task: ProjectTask) -> u32 {
        self.project_tasks.insert(task)
    }

    pub fn update_project_task(&mut self, task: ProjectTask) -> StoreResult<()> {
        self.project_tasks.replace(task)
    }

    /// Check a checklist item off. Returns the updated record.
    pub fn complete_project_task(&mut self, id: u32) -> StoreResult<ProjectTask> {
        let task = self.project_tasks.get_mut(id)?;
        task.status = TaskStatus::Done;
        Ok(task.clone())
    }

    pub fn remove_project_task(&mut self, id: u32) -> StoreResult<ProjectTask> {
        self.project_tasks.remove(id)
    }

    /// Checklist items for one project, in insertion order.
    pub fn tasks_for_project(&self, project_id: u32) -> Vec<&ProjectTask> {
        self.project_tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .collect()
    }

    // ----- journal -----

    pub fn journal_entries(&self) -> &[JournalEntry] {
        self.journal.all()
    }

    pub fn journal_entry(&self, id: u32) -> StoreResult<&JournalEntry> {
        self.journal.get(id)
    }

    pub fn add_journal_entry(&mut self, entry: JournalEntry) -> u32 {
        self.journal.insert(entry)
    }

    pub fn update_journal_entry(&mut self, entry: JournalEntry) -> StoreResult<()> {
        self.journal.replace(entry)
    }

    pub fn remove_journal_entry(&mut self, id: u32) -> StoreResult<JournalEntry> {
        self.journal.remove(id)
    }

    /// Entries for one project, newest first.
    pub fn entries_for_project(&self, project_id: u32) -> Vec<&JournalEntry> {
        let mut entries: Vec<&JournalEntry> = self
            .journal
            .iter()
            .filter(|e| e.project_id == Some(project_id))
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    // ----- resources -----

    pub fn resources(&self) -> &[Resource] {
        self.resources.all()
    }

    pub fn resource(&self, id: u32) -> StoreResult<&Resource> {
        self.resources.get(id)
    }

    pub fn add_resource(&mut self, resource: Resource) -> u32 {
        self.resources.insert(resource)
    }

    pub fn update_resource(&mut self, resource: Resource) -> StoreResult<()> {
        self.resources.replace(resource)
    }

    pub fn remove_resource(&mut self, id: u32) -> StoreResult<Resource> {
        self.resources.remove(id)
    }

    // ----- generation rules -----

    pub fn generation_rules(&self) -> &[GenerationRule] {
        self.rules.all()
    }

    pub fn generation_rule(&self, id: u32) -> StoreResult<&GenerationRule> {
        self.rules.get(id)
    }

    pub fn add_generation_rule(&mut self, rule: GenerationRule) -> u32 {
        self.rules.insert(rule)
    }

    pub fn update_generation_rule(&mut self, rule: GenerationRule) -> StoreResult<()> {
        self.rules.replace(rule)
    }

    pub fn remove_generation_rule(&mut self, id: u32) -> StoreResult<GenerationRule> {
        self.rules.remove(id)
    }
}
