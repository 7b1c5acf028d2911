//! Completion streaks: how many tasks were finished back to back.

use chrono::Duration;

use crate::task::Task;

/// Count the current completion streak.
///
/// Done tasks are ordered by their effective instant (`completed_at`,
/// falling back to `created_at`), most recent first. The streak runs from
/// the most recent completion backwards while the gap to the next older one
/// is at most 24 hours; a strictly larger gap ends it. A gap of exactly
/// 24 hours still counts.
pub fn completion_streak(tasks: &[Task]) -> u32 {
    let mut instants: Vec<_> = tasks
        .iter()
        .filter(|t| t.is_done())
        .map(Task::completion_instant)
        .collect();

    if instants.is_empty() {
        return 0;
    }

    instants.sort_unstable_by(|a, b| b.cmp(a));

    let mut streak = 1;
    for pair in instants.windows(2) {
        if pair[0] - pair[1] > Duration::days(1) {
            break;
        }
        streak += 1;
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskStatus;
    use chrono::{DateTime, TimeZone, Utc};

    fn done_at(at: DateTime<Utc>) -> Task {
        let mut t = Task::new("t");
        t.set_status(TaskStatus::Done, at);
        t
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, d, 18, 30, 0).unwrap()
    }

    #[test]
    fn test_no_completions_no_streak() {
        assert_eq!(completion_streak(&[]), 0);
        assert_eq!(completion_streak(&[Task::new("open")]), 0);
    }

    #[test]
    fn test_single_completion_counts_one() {
        assert_eq!(completion_streak(&[done_at(day(10))]), 1);
    }

    #[test]
    fn test_three_consecutive_days() {
        let tasks = vec![done_at(day(10)), done_at(day(9)), done_at(day(8))];
        assert_eq!(completion_streak(&tasks), 3);
    }

    #[test]
    fn test_older_completion_beyond_gap_does_not_extend() {
        let tasks = vec![
            done_at(day(10)),
            done_at(day(9)),
            done_at(day(8)),
            done_at(day(4)),
        ];
        assert_eq!(completion_streak(&tasks), 3);
    }

    #[test]
    fn test_gap_of_exactly_one_day_continues() {
        let t0 = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        let t1 = Utc.with_ymd_and_hms(2026, 3, 9, 12, 0, 0).unwrap();
        assert_eq!(completion_streak(&[done_at(t0), done_at(t1)]), 2);
    }

    #[test]
    fn test_gap_just_over_one_day_breaks() {
        let t0 = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 1).unwrap();
        let t1 = Utc.with_ymd_and_hms(2026, 3, 9, 12, 0, 0).unwrap();
        assert_eq!(completion_streak(&[done_at(t0), done_at(t1)]), 1);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let tasks = vec![done_at(day(8)), done_at(day(10)), done_at(day(9))];
        assert_eq!(completion_streak(&tasks), 3);
    }

    #[test]
    fn test_falls_back_to_created_at() {
        // Marked done in bulk without explicit completion instants.
        let mut a = Task::new("a");
        a.status = TaskStatus::Done;
        a.created_at = day(10);
        let mut b = Task::new("b");
        b.status = TaskStatus::Done;
        b.created_at = day(9);

        assert_eq!(completion_streak(&[a, b]), 2);
    }

    #[test]
    fn test_same_day_completions_all_count() {
        let tasks = vec![
            done_at(Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap()),
            done_at(Utc.with_ymd_and_hms(2026, 3, 10, 13, 0, 0).unwrap()),
            done_at(Utc.with_ymd_and_hms(2026, 3, 10, 21, 0, 0).unwrap()),
        ];
        assert_eq!(completion_streak(&tasks), 3);
    }
}
