//! Per-user progress: one task snapshot in, levels, streaks and fresh
//! badge awards out.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::badges::Badge;
use crate::milestones::{award_for_snapshot, MilestoneSnapshot};
use crate::task::Task;
use crate::xp::level_progress;

/// Derived progress report. Never stored; recomputed from the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    pub completed_tasks: u64,
    pub total_xp: u64,
    pub current_level: u32,
    pub xp_into_level: u64,
    pub xp_to_next_level: u64,
    pub streak: u64,
}

/// Progress plus whatever the rule engine just unlocked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub progress: UserProgress,
    pub newly_unlocked: Vec<Badge>,
}

/// Compute the user's progress and award any newly earned badges.
///
/// `awarded` is the caller's set of already-earned badge ids; the only
/// mutation here is the rule engine's at-most-once insertion into it.
/// No clocks, no I/O.
pub fn aggregate(tasks: &[Task], catalog: &[Badge], awarded: &mut HashSet<u32>) -> ProgressReport {
    let snapshot = MilestoneSnapshot::from_tasks(tasks);
    let level = level_progress(snapshot.total_xp);

    ProgressReport {
        progress: UserProgress {
            completed_tasks: snapshot.tasks_completed,
            total_xp: level.total_xp,
            current_level: level.level,
            xp_into_level: level.xp_into_level,
            xp_to_next_level: level.xp_to_next_level,
            streak: snapshot.consecutive_completions,
        },
        newly_unlocked: award_for_snapshot(&snapshot, catalog, awarded),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badges::default_catalog;
    use crate::task::{Task, TaskStatus};
    use chrono::{TimeZone, Utc};

    fn done_on_day(d: u32, xp: i64) -> Task {
        let mut t = Task::new("t").with_xp(xp);
        t.set_status(
            TaskStatus::Done,
            Utc.with_ymd_and_hms(2026, 4, d, 17, 0, 0).unwrap(),
        );
        t
    }

    #[test]
    fn test_aggregate_composes_all_metrics() {
        let tasks = vec![
            done_on_day(10, 120),
            done_on_day(9, 100),
            Task::new("still open").with_xp(999),
        ];
        let catalog = default_catalog();
        let mut awarded = HashSet::new();

        let report = aggregate(&tasks, &catalog, &mut awarded);

        assert_eq!(report.progress.completed_tasks, 2);
        assert_eq!(report.progress.total_xp, 220);
        assert_eq!(report.progress.current_level, 2);
        assert_eq!(report.progress.xp_into_level, 20);
        assert_eq!(report.progress.xp_to_next_level, 180);
        assert_eq!(report.progress.streak, 2);
        assert_eq!(
            report.newly_unlocked.iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![1]
        );
    }

    #[test]
    fn test_aggregate_only_mutates_via_awards() {
        let tasks = vec![done_on_day(10, 50)];
        let catalog = default_catalog();
        let mut awarded = HashSet::from([1]);

        let report = aggregate(&tasks, &catalog, &mut awarded);

        assert!(report.newly_unlocked.is_empty());
        assert_eq!(awarded, HashSet::from([1]));
    }

    #[test]
    fn test_empty_snapshot() {
        let catalog = default_catalog();
        let mut awarded = HashSet::new();

        let report = aggregate(&[], &catalog, &mut awarded);

        assert_eq!(report.progress.completed_tasks, 0);
        assert_eq!(report.progress.total_xp, 0);
        assert_eq!(report.progress.current_level, 1);
        assert_eq!(report.progress.xp_to_next_level, 200);
        assert_eq!(report.progress.streak, 0);
        assert!(report.newly_unlocked.is_empty());
    }
}
