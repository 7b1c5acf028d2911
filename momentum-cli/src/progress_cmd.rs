use anyhow::Result;
use chrono::{DateTime, Utc};
use momentum_core::{
    aggregate, rule_for_badge, top_performers, user_rank, BadgeCategory, MilestoneSnapshot,
    ProgressReport,
};
use momentum_store::RecordStore;
use std::collections::HashMap;

use crate::config::load_config;
use crate::state::{load_store, save_store};

/// Recompute progress, persist any newly earned awards and refresh the
/// user's leaderboard row. The caller saves the store.
pub fn sync_rewards(
    store: &mut RecordStore,
    user_id: &str,
    now: DateTime<Utc>,
) -> Result<ProgressReport> {
    let mut awarded = store.awarded_ids();
    let report = aggregate(store.tasks(), store.badges(), &mut awarded);

    for badge in &report.newly_unlocked {
        store.award_badge(badge.id, now)?;
    }
    let badge_count = store.awards().len() as u64;
    store.update_user_score(user_id, &report.progress, badge_count, now);

    Ok(report)
}

pub fn progress() -> Result<()> {
    let cfg = load_config()?;
    let mut store = load_store()?;

    let report = sync_rewards(&mut store, &cfg.user.user_id, Utc::now())?;
    save_store(&store)?;

    let p = &report.progress;
    println!("Level {} | {} XP", p.current_level, p.total_xp);
    println!(
        "{} XP into this level, {} to the next",
        p.xp_into_level, p.xp_to_next_level
    );
    println!("Completed tasks: {}", p.completed_tasks);
    println!("Streak: {}", p.streak);

    // Edits made outside the completion flow can leave awards behind;
    // sync_rewards just caught those up.
    for badge in &report.newly_unlocked {
        println!("Unlocked: {} ({})", badge.name, badge.requirement);
    }

    println!("\n## Badges");
    let snapshot = MilestoneSnapshot::from_tasks(store.tasks());
    let earned = store.awarded_ids();
    for badge in store.badges() {
        let Some(rule) = rule_for_badge(badge.id) else {
            continue;
        };
        let prog = rule.progress(&snapshot);
        let mark = if earned.contains(&badge.id) { "x" } else { " " };
        println!(
            "[{}] {:<16} {} {}/{}",
            mark,
            badge.name,
            bar(prog.fraction(), cfg.display.bar_width),
            prog.current,
            prog.threshold
        );
    }

    Ok(())
}

fn bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction * width as f64).round() as usize).min(width);
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn badges(category: Option<String>) -> Result<()> {
    let store = load_store()?;
    let filter: Option<BadgeCategory> = category
        .as_deref()
        .map(str::parse)
        .transpose()
        .map_err(anyhow::Error::msg)?;

    let earned: HashMap<u32, DateTime<Utc>> = store
        .awards()
        .iter()
        .map(|a| (a.badge_id, a.earned_at))
        .collect();

    for badge in store.badges() {
        if filter.is_some_and(|f| f != badge.category) {
            continue;
        }
        match earned.get(&badge.id) {
            Some(at) => println!(
                "[x] {:<16} {:<10} {:<12} {} (earned {})",
                badge.name,
                badge.rarity.display_name(),
                badge.category.display_name(),
                badge.requirement,
                at.format("%Y-%m-%d")
            ),
            None => println!(
                "[ ] {:<16} {:<10} {:<12} {}",
                badge.name,
                badge.rarity.display_name(),
                badge.category.display_name(),
                badge.requirement
            ),
        }
    }

    Ok(())
}

pub fn leaderboard(limit: Option<usize>) -> Result<()> {
    let cfg = load_config()?;
    let store = load_store()?;
    let limit = limit.unwrap_or(cfg.display.leaderboard_limit);

    let rows = top_performers(store.leaderboard(), limit);
    if rows.is_empty() {
        println!("Leaderboard is empty. Complete a task first.");
        return Ok(());
    }

    println!(
        "{:>4}  {:<20} {:>6} {:>6} {:>6} {:>7}",
        "Rank", "Player", "Score", "Level", "Tasks", "Streak"
    );
    for r in &rows {
        println!(
            "{:>4}  {:<20} {:>6} {:>6} {:>6} {:>7}",
            r.rank, r.anonymous_name, r.score, r.level, r.tasks_completed, r.streak
        );
    }

    if let Some(me) = user_rank(store.leaderboard(), &cfg.user.user_id) {
        println!("\nYou are #{} as {}", me.rank, me.anonymous_name);
    }

    Ok(())
}
