use crate::{Attribute, Card};
use std::collections::HashSet;

pub const FALSE_ENTRY_PENALTY: u32 = 5;
pub const HINT_PENALTY: u32 = 3;

/// Points for a scored triplet: the number of distinct attribute values
/// across all twelve values on the three cards. For a valid set this lies in
/// `4..=12`; each attribute contributes 1 when shared and 3 when not.
pub fn points_for(cards: &[Card; 3]) -> i64 {
    Attribute::ALL
        .iter()
        .map(|&attribute| {
            cards
                .iter()
                .map(|card| card.ordinal(attribute))
                .collect::<HashSet<_>>()
                .len() as i64
        })
        .sum()
}

pub fn apply_penalty(score: i64, penalty: u32) -> i64 {
    score.saturating_sub(i64::from(penalty))
}
