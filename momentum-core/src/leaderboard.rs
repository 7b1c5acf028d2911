//! Leaderboard records and the derived ranking view.
//!
//! Rank is never stored. Every read sorts by score and assigns positions;
//! identities are anonymized at the same point.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::anonymous_name;

/// One user's score row as the store keeps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: u32,
    pub user_id: String,
    /// Total XP at the last refresh.
    pub score: u64,
    pub badge_count: u64,
    pub tasks_completed: u64,
    pub streak: u64,
    pub level: u32,
    pub last_active: DateTime<Utc>,
}

/// A row ready for display: position assigned, identity anonymized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub anonymous_name: String,
    pub score: u64,
    pub badge_count: u64,
    pub tasks_completed: u64,
    pub streak: u64,
    pub level: u32,
    pub last_active: DateTime<Utc>,
}

fn ranked(index: usize, entry: &LeaderboardEntry) -> RankedEntry {
    RankedEntry {
        rank: index + 1,
        anonymous_name: anonymous_name(&entry.user_id),
        score: entry.score,
        badge_count: entry.badge_count,
        tasks_completed: entry.tasks_completed,
        streak: entry.streak,
        level: entry.level,
        last_active: entry.last_active,
    }
}

fn sorted_by_score(entries: &[LeaderboardEntry]) -> Vec<&LeaderboardEntry> {
    let mut sorted: Vec<&LeaderboardEntry> = entries.iter().collect();
    // Stable sort: equal scores keep their stored order.
    sorted.sort_by(|a, b| b.score.cmp(&a.score));
    sorted
}

/// Rank the whole board, best score first, positions starting at 1.
pub fn rank(entries: &[LeaderboardEntry]) -> Vec<RankedEntry> {
    sorted_by_score(entries)
        .into_iter()
        .enumerate()
        .map(|(i, e)| ranked(i, e))
        .collect()
}

/// The ranked row for one user, if they are on the board.
pub fn user_rank(entries: &[LeaderboardEntry], user_id: &str) -> Option<RankedEntry> {
    let sorted = sorted_by_score(entries);
    sorted
        .iter()
        .position(|e| e.user_id == user_id)
        .map(|i| ranked(i, sorted[i]))
}

/// The top `limit` rows of the board.
pub fn top_performers(entries: &[LeaderboardEntry], limit: usize) -> Vec<RankedEntry> {
    let mut all = rank(entries);
    all.truncate(limit);
    all
}
