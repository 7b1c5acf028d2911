//! Badge catalog: the unlockable rewards and their metadata.
//!
//! The built-in definitions live in a const table; the store serves owned
//! [`Badge`] records seeded from it (and may carry admin edits on top).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCategory {
    Milestone,
    Streak,
    Experience,
}

impl BadgeCategory {
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Milestone => "Milestone",
            Self::Streak => "Streak",
            Self::Experience => "Experience",
        }
    }
}

impl FromStr for BadgeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "milestone" => Ok(Self::Milestone),
            "streak" => Ok(Self::Streak),
            "experience" => Ok(Self::Experience),
            _ => Err(format!("unknown category: {s} (milestone|streak|experience)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }
}

/// A built-in badge definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeDef {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub requirement: &'static str,
    pub icon: &'static str,
    pub category: BadgeCategory,
    pub rarity: Rarity,
}

impl BadgeDef {
    pub const fn new(
        id: u32,
        name: &'static str,
        description: &'static str,
        requirement: &'static str,
        icon: &'static str,
        category: BadgeCategory,
        rarity: Rarity,
    ) -> Self {
        Self {
            id,
            name,
            description,
            requirement,
            icon,
            category,
            rarity,
        }
    }
}

/// The built-in catalog. Award conditions live in the rule table
/// (`milestones::BADGE_RULES`), keyed by these ids.
pub const BADGE_CATALOG: &[BadgeDef] = &[
    BadgeDef::new(
        1,
        "First Steps",
        "Completed your very first task",
        "Complete 1 task",
        "target",
        BadgeCategory::Milestone,
        Rarity::Common,
    ),
    BadgeDef::new(
        2,
        "Getting Momentum",
        "Five tasks down, plenty more to go",
        "Complete 5 tasks",
        "zap",
        BadgeCategory::Milestone,
        Rarity::Common,
    ),
    BadgeDef::new(
        3,
        "Task Master",
        "Twenty tasks conquered",
        "Complete 20 tasks",
        "award",
        BadgeCategory::Milestone,
        Rarity::Rare,
    ),
    BadgeDef::new(
        4,
        "Streak Master",
        "Three completions back to back",
        "Complete 3 tasks in a row",
        "flame",
        BadgeCategory::Streak,
        Rarity::Uncommon,
    ),
    BadgeDef::new(
        5,
        "Productive",
        "Ten tasks in the bag",
        "Complete 10 tasks",
        "check-circle",
        BadgeCategory::Milestone,
        Rarity::Uncommon,
    ),
    BadgeDef::new(
        6,
        "XP Hunter",
        "Five hundred experience points earned",
        "Earn 500 XP",
        "star",
        BadgeCategory::Experience,
        Rarity::Rare,
    ),
    BadgeDef::new(
        7,
        "XP Champion",
        "A thousand experience points strong",
        "Earn 1,000 XP",
        "trophy",
        BadgeCategory::Experience,
        Rarity::Epic,
    ),
];

/// Built-in definition for a badge id.
pub fn badge_def(id: u32) -> Option<&'static BadgeDef> {
    BADGE_CATALOG.iter().find(|b| b.id == id)
}

/// A badge record as the store serves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub requirement: String,
    pub icon: String,
    pub category: BadgeCategory,
    pub rarity: Rarity,
}

impl From<&BadgeDef> for Badge {
    fn from(def: &BadgeDef) -> Self {
        Self {
            id: def.id,
            name: def.name.to_string(),
            description: def.description.to_string(),
            requirement: def.requirement.to_string(),
            icon: def.icon.to_string(),
            category: def.category,
            rarity: def.rarity,
        }
    }
}

/// Owned records for the whole built-in catalog, ready to seed a store.
pub fn default_catalog() -> Vec<Badge> {
    BADGE_CATALOG.iter().map(Badge::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        for def in BADGE_CATALOG {
            let count = BADGE_CATALOG.iter().filter(|d| d.id == def.id).count();
            assert_eq!(count, 1, "duplicate id {}", def.id);
        }
    }

    #[test]
    fn test_badge_def_lookup() {
        let def = badge_def(4).unwrap();
        assert_eq!(def.name, "Streak Master");
        assert_eq!(def.category, BadgeCategory::Streak);
        assert!(badge_def(99).is_none());
    }

    #[test]
    fn test_default_catalog_mirrors_defs() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), BADGE_CATALOG.len());
        assert_eq!(catalog[0].name, "First Steps");
        assert_eq!(catalog[6].rarity, Rarity::Epic);
    }

    #[test]
    fn test_category_wire_names() {
        assert_eq!(
            serde_json::to_string(&BadgeCategory::Experience).unwrap(),
            "\"experience\""
        );
        assert_eq!(serde_json::to_string(&Rarity::Uncommon).unwrap(), "\"uncommon\"");
    }

    #[test]
    fn test_category_parses() {
        assert_eq!("streak".parse::<BadgeCategory>(), Ok(BadgeCategory::Streak));
        assert!("legendary".parse::<BadgeCategory>().is_err());
    }
}
