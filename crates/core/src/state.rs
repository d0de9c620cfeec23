use crate::CellView;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Playing,
    Over,
}

impl Phase {
    pub fn is_playing(self) -> bool {
        self == Phase::Playing
    }
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionView {
    pub phase: Phase,
    pub score: i64,
    pub high_score: i64,
    pub remaining_secs: i64,
    pub cells: Vec<CellView>,
}
