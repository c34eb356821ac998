//! Streak badges

use serde::Serialize;

use crate::constants::STREAK_BADGES;

/// A badge and whether the user has earned it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: String,
    pub days_required: u32,
    /// Reached at some point: longest streak meets the threshold
    pub unlocked: bool,
    /// Held right now: unlocked and the current streak meets the threshold
    pub active: bool,
}

/// The full badge ladder evaluated against two streak lengths
pub fn badges(current_streak: u32, longest_streak: u32) -> Vec<Badge> {
    STREAK_BADGES
        .iter()
        .map(|&(id, name, days_required)| {
            let unlocked = longest_streak >= days_required;
            Badge {
                id,
                name,
                description: format!("Complete a {}-day streak", days_required),
                days_required,
                unlocked,
                active: unlocked && current_streak >= days_required,
            }
        })
        .collect()
}
