//! Badge award rules: one declarative table drives unlocking and progress.
//!
//! Every condition under which a badge is earned lives in [`BADGE_RULES`]
//! and nowhere else. Awarding and progress bars both read from it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::badges::Badge;
use crate::streak::completion_streak;
use crate::task::Task;
use crate::xp::total_xp;

/// Metric a badge rule tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleMetric {
    TasksCompleted,
    ConsecutiveCompletions,
    TotalXp,
}

/// The metrics rules are evaluated against, measured from one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneSnapshot {
    pub tasks_completed: u64,
    pub consecutive_completions: u64,
    pub total_xp: u64,
}

impl MilestoneSnapshot {
    /// Measure a task snapshot.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            tasks_completed: tasks.iter().filter(|t| t.is_done()).count() as u64,
            consecutive_completions: u64::from(completion_streak(tasks)),
            total_xp: total_xp(tasks),
        }
    }

    fn metric(&self, metric: RuleMetric) -> u64 {
        match metric {
            RuleMetric::TasksCompleted => self.tasks_completed,
            RuleMetric::ConsecutiveCompletions => self.consecutive_completions,
            RuleMetric::TotalXp => self.total_xp,
        }
    }
}

/// A single award condition: a metric reaching a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeRule {
    pub badge_id: u32,
    pub metric: RuleMetric,
    pub threshold: u64,
}

impl BadgeRule {
    pub const fn new(badge_id: u32, metric: RuleMetric, threshold: u64) -> Self {
        Self {
            badge_id,
            metric,
            threshold,
        }
    }

    /// Whether the snapshot satisfies this rule.
    pub fn is_met(&self, snapshot: &MilestoneSnapshot) -> bool {
        snapshot.metric(self.metric) >= self.threshold
    }

    /// Progress toward this rule, clamped at the threshold.
    pub fn progress(&self, snapshot: &MilestoneSnapshot) -> RuleProgress {
        RuleProgress {
            current: snapshot.metric(self.metric).min(self.threshold),
            threshold: self.threshold,
        }
    }
}

/// Every award condition, in evaluation order: the streak badge first, then
/// task-count milestones from smallest to largest, then XP totals.
pub const BADGE_RULES: &[BadgeRule] = &[
    BadgeRule::new(4, RuleMetric::ConsecutiveCompletions, 3),
    BadgeRule::new(1, RuleMetric::TasksCompleted, 1),
    BadgeRule::new(2, RuleMetric::TasksCompleted, 5),
    BadgeRule::new(5, RuleMetric::TasksCompleted, 10),
    BadgeRule::new(3, RuleMetric::TasksCompleted, 20),
    BadgeRule::new(6, RuleMetric::TotalXp, 500),
    BadgeRule::new(7, RuleMetric::TotalXp, 1000),
];

/// The rule behind a badge id, if the badge is rule-driven.
pub fn rule_for_badge(badge_id: u32) -> Option<&'static BadgeRule> {
    BADGE_RULES.iter().find(|r| r.badge_id == badge_id)
}

/// Progress toward one badge, clamped at its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleProgress {
    pub current: u64,
    pub threshold: u64,
}

impl RuleProgress {
    /// Completion fraction in [0, 1].
    pub fn fraction(&self) -> f64 {
        if self.threshold == 0 {
            1.0
        } else {
            self.current as f64 / self.threshold as f64
        }
    }
}

/// Evaluate every rule against a task snapshot, awarding each badge at most
/// once.
///
/// `awarded` holds the badge ids the user already earned; a newly satisfied
/// rule inserts its id and appends the catalog badge to the result, in rule
/// order. A rule whose badge id is missing from `catalog` awards nothing
/// and leaves `awarded` untouched.
pub fn evaluate_milestones(
    tasks: &[Task],
    catalog: &[Badge],
    awarded: &mut HashSet<u32>,
) -> Vec<Badge> {
    award_for_snapshot(&MilestoneSnapshot::from_tasks(tasks), catalog, awarded)
}

/// Rule evaluation over an already-measured snapshot.
pub fn award_for_snapshot(
    snapshot: &MilestoneSnapshot,
    catalog: &[Badge],
    awarded: &mut HashSet<u32>,
) -> Vec<Badge> {
    let mut unlocked = Vec::new();

    for rule in BADGE_RULES {
        if awarded.contains(&rule.badge_id) || !rule.is_met(snapshot) {
            continue;
        }
        if let Some(badge) = catalog.iter().find(|b| b.id == rule.badge_id) {
            awarded.insert(rule.badge_id);
            unlocked.push(badge.clone());
        }
    }

    unlocked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badges::default_catalog;
    use crate::task::TaskStatus;
    use chrono::{DateTime, TimeZone, Utc};

    fn done_at(xp: i64, at: DateTime<Utc>) -> Task {
        let mut t = Task::new("t").with_xp(xp);
        t.set_status(TaskStatus::Done, at);
        t
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, d, 18, 0, 0).unwrap()
    }

    /// n tasks done on consecutive days ending at day 20, `xp` each.
    fn consecutive_done(n: u32, xp: i64) -> Vec<Task> {
        (0..n).map(|i| done_at(xp, day(20 - i))).collect()
    }

    /// n tasks done three days apart (never consecutive), `xp` each.
    fn spread_done(n: u32, xp: i64) -> Vec<Task> {
        (0..n)
            .map(|i| {
                let at = Utc
                    .with_ymd_and_hms(2026, 1, 1, 12, 0, 0)
                    .unwrap()
                    + chrono::Duration::days(i64::from(i) * 3);
                done_at(xp, at)
            })
            .collect()
    }

    #[test]
    fn test_first_completion_awards_first_steps_only() {
        let catalog = default_catalog();
        let mut awarded = HashSet::new();
        let unlocked = evaluate_milestones(&consecutive_done(1, 20), &catalog, &mut awarded);

        let ids: Vec<u32> = unlocked.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1]);
        assert!(awarded.contains(&1));
    }

    #[test]
    fn test_no_completions_awards_nothing() {
        let catalog = default_catalog();
        let mut awarded = HashSet::new();
        let unlocked = evaluate_milestones(&[Task::new("open")], &catalog, &mut awarded);
        assert!(unlocked.is_empty());
        assert!(awarded.is_empty());
    }

    #[test]
    fn test_streak_badge_comes_first() {
        let catalog = default_catalog();
        let mut awarded = HashSet::new();
        let unlocked = evaluate_milestones(&consecutive_done(5, 20), &catalog, &mut awarded);

        let ids: Vec<u32> = unlocked.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![4, 1, 2]);
        assert_eq!(unlocked[0].name, "Streak Master");
    }

    #[test]
    fn test_spread_completions_skip_streak_badge() {
        let catalog = default_catalog();
        let mut awarded = HashSet::new();
        let unlocked = evaluate_milestones(&spread_done(5, 20), &catalog, &mut awarded);

        let ids: Vec<u32> = unlocked.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_twenty_tasks_unlocks_task_master_but_nineteen_does_not() {
        let catalog = default_catalog();

        let mut awarded = HashSet::new();
        evaluate_milestones(&spread_done(19, 10), &catalog, &mut awarded);
        assert!(!awarded.contains(&3));

        let mut awarded = HashSet::new();
        evaluate_milestones(&spread_done(20, 10), &catalog, &mut awarded);
        assert!(awarded.contains(&3));
    }

    #[test]
    fn test_xp_thresholds() {
        let catalog = default_catalog();

        let mut awarded = HashSet::new();
        evaluate_milestones(&spread_done(2, 250), &catalog, &mut awarded);
        assert!(awarded.contains(&6));
        assert!(!awarded.contains(&7));

        let mut awarded = HashSet::new();
        evaluate_milestones(&spread_done(4, 250), &catalog, &mut awarded);
        assert!(awarded.contains(&6));
        assert!(awarded.contains(&7));
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let catalog = default_catalog();
        let tasks = consecutive_done(5, 20);

        let mut awarded = HashSet::new();
        let first = evaluate_milestones(&tasks, &catalog, &mut awarded);
        assert!(!first.is_empty());

        let second = evaluate_milestones(&tasks, &catalog, &mut awarded);
        assert!(second.is_empty());
        assert_eq!(awarded.len(), first.len());
    }

    #[test]
    fn test_missing_catalog_entry_awards_nothing() {
        // Catalog without badge 1: the rule stays unsatisfied and re-eligible.
        let catalog: Vec<Badge> = default_catalog().into_iter().filter(|b| b.id != 1).collect();
        let mut awarded = HashSet::new();
        let unlocked = evaluate_milestones(&consecutive_done(1, 20), &catalog, &mut awarded);

        assert!(unlocked.is_empty());
        assert!(!awarded.contains(&1));
    }

    #[test]
    fn test_rule_progress_clamps_at_threshold() {
        let snapshot = MilestoneSnapshot {
            tasks_completed: 12,
            consecutive_completions: 0,
            total_xp: 0,
        };
        let rule = rule_for_badge(5).unwrap();
        let progress = rule.progress(&snapshot);

        assert_eq!(progress.current, 10);
        assert_eq!(progress.threshold, 10);
        assert!((progress.fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rule_progress_partial() {
        let snapshot = MilestoneSnapshot {
            tasks_completed: 3,
            consecutive_completions: 0,
            total_xp: 0,
        };
        let rule = rule_for_badge(2).unwrap();
        let progress = rule.progress(&snapshot);

        assert_eq!(progress.current, 3);
        assert_eq!(progress.threshold, 5);
        assert!((progress.fraction() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_every_rule_has_a_catalog_badge() {
        let catalog = default_catalog();
        for rule in BADGE_RULES {
            assert!(
                catalog.iter().any(|b| b.id == rule.badge_id),
                "rule for badge {} has no catalog entry",
                rule.badge_id
            );
        }
    }
}
