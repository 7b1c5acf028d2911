//! momentum-core: pure computations for the Momentum gamification engine
//!
//! Everything here is a plain function over typed snapshots: no I/O, no
//! clocks, no interior state. Persistence lives in momentum-store.

pub mod badges;
pub mod identity;
pub mod leaderboard;
pub mod milestones;
pub mod progress;
pub mod streak;
pub mod task;
pub mod time;
pub mod xp;

pub use badges::{badge_def, default_catalog, Badge, BadgeCategory, BadgeDef, Rarity, BADGE_CATALOG};
pub use identity::anonymous_name;
pub use leaderboard::{rank, top_performers, user_rank, LeaderboardEntry, RankedEntry};
pub use milestones::{
    award_for_snapshot, evaluate_milestones, rule_for_badge, BadgeRule, MilestoneSnapshot,
    RuleMetric, RuleProgress, BADGE_RULES,
};
pub use progress::{aggregate, ProgressReport, UserProgress};
pub use streak::completion_streak;
pub use task::{Priority, Task, TaskStatus};
pub use time::{parse_local_due_to_utc, to_rfc3339_utc};
pub use xp::{compute_progress, level_for_xp, level_progress, total_xp, LevelProgress, LEVEL_SIZE};
