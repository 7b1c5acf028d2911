//! XP and level math over completed tasks.

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// XP span of every level. Level 1 starts at 0 XP.
pub const LEVEL_SIZE: u64 = 200;

/// Derived level summary for an XP total. Never stored; recomputed on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub total_xp: u64,
    pub level: u32,
    pub xp_into_level: u64,
    pub xp_to_next_level: u64,
}

/// Total XP over a task snapshot. Only done tasks count; XP below zero
/// counts as 0.
pub fn total_xp(tasks: &[Task]) -> u64 {
    tasks
        .iter()
        .filter(|t| t.is_done())
        .map(|t| t.xp_value.max(0) as u64)
        .sum()
}

/// Level for an XP total: one level per [`LEVEL_SIZE`] XP, starting at 1.
pub fn level_for_xp(total_xp: u64) -> u32 {
    (total_xp / LEVEL_SIZE) as u32 + 1
}

/// Full level summary for an XP total.
pub fn level_progress(total_xp: u64) -> LevelProgress {
    let xp_into_level = total_xp % LEVEL_SIZE;
    LevelProgress {
        total_xp,
        level: level_for_xp(total_xp),
        xp_into_level,
        xp_to_next_level: LEVEL_SIZE - xp_into_level,
    }
}

/// Level summary straight from a task snapshot.
pub fn compute_progress(tasks: &[Task]) -> LevelProgress {
    level_progress(total_xp(tasks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskStatus;
    use chrono::{TimeZone, Utc};

    fn done(xp: i64) -> Task {
        let mut t = Task::new("t").with_xp(xp);
        t.set_status(TaskStatus::Done, Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap());
        t
    }

    #[test]
    fn test_only_done_tasks_earn_xp() {
        let tasks = vec![
            done(50),
            Task::new("open").with_xp(500),
            {
                let mut t = Task::new("doing").with_xp(500);
                t.status = TaskStatus::InProgress;
                t
            },
        ];
        assert_eq!(total_xp(&tasks), 50);
    }

    #[test]
    fn test_negative_xp_counts_as_zero() {
        let tasks = vec![done(30), done(-10)];
        assert_eq!(total_xp(&tasks), 30);
    }

    #[test]
    fn test_total_is_order_independent() {
        let mut tasks = vec![done(10), done(25), done(40)];
        let forward = total_xp(&tasks);
        tasks.reverse();
        assert_eq!(total_xp(&tasks), forward);
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(199), 1);
        assert_eq!(level_for_xp(200), 2);
        assert_eq!(level_for_xp(399), 2);
        assert_eq!(level_for_xp(400), 3);
    }

    #[test]
    fn test_level_progress_mid_level() {
        let p = level_progress(450);
        assert_eq!(p.level, 3);
        assert_eq!(p.xp_into_level, 50);
        assert_eq!(p.xp_to_next_level, 150);
    }

    #[test]
    fn test_level_progress_at_boundary() {
        let p = level_progress(200);
        assert_eq!(p.level, 2);
        assert_eq!(p.xp_into_level, 0);
        assert_eq!(p.xp_to_next_level, 200);
    }

    #[test]
    fn test_compute_progress_from_snapshot() {
        let tasks = vec![done(120), done(100)];
        let p = compute_progress(&tasks);
        assert_eq!(p.total_xp, 220);
        assert_eq!(p.level, 2);
        assert_eq!(p.xp_into_level, 20);
        assert_eq!(p.xp_to_next_level, 180);
    }
}
