//! Deterministic anonymous names for leaderboard display.
//!
//! Same id, same name, in every process. Distinct ids can collide; the name
//! space is 16 adjectives x 16 nouns x 1000 numbers, and determinism is the
//! contract, not uniqueness.

use sha2::{Digest, Sha256};

const ADJECTIVES: [&str; 16] = [
    "Swift", "Clever", "Bold", "Sharp", "Bright", "Quick", "Smart", "Wise", "Keen", "Alert",
    "Agile", "Fast", "Rapid", "Nimble", "Witty", "Savvy",
];

const NOUNS: [&str; 16] = [
    "Builder", "Creator", "Maker", "Innovator", "Pioneer", "Achiever", "Champion", "Master",
    "Expert", "Guru", "Ninja", "Wizard", "Hero", "Legend", "Star", "Ace",
];

/// Derive the stable pseudonym for a user id, e.g. `SwiftBuilder042`.
///
/// The adjective, noun and zero-padded number come from disjoint slices of
/// the id's SHA-256 digest (bytes 0, 1 and 2..4).
pub fn anonymous_name(user_id: &str) -> String {
    let digest = Sha256::digest(user_id.as_bytes());

    let adjective = ADJECTIVES[digest[0] as usize % ADJECTIVES.len()];
    let noun = NOUNS[digest[1] as usize % NOUNS.len()];
    let number = u16::from_be_bytes([digest[2], digest[3]]) % 1000;

    format!("{adjective}{noun}{number:03}")
}
