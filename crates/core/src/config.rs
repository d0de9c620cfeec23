use crate::{DEFAULT_BOARD_SIZE, FALSE_ENTRY_PENALTY, HINT_PENALTY, UNIVERSE_SIZE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GAME_TIME_SECS: i64 = 180;
pub const EXTENDED_GAME_TIME_SECS: i64 = 300;
pub const SET_SIZE: usize = 3;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size {0} must be between 3 and 81")]
    BoardSize(usize),
    #[error("game time must be positive, got {0}")]
    GameTime(i64),
    #[error("tick period must be positive")]
    TickPeriod,
    #[error("redraw budget must be at least 1")]
    RedrawBudget,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub game_time_secs: i64,
    pub tick_period_secs: u32,
    pub false_entry_penalty: u32,
    pub hint_penalty: u32,
    pub max_redraw_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            game_time_secs: GAME_TIME_SECS,
            tick_period_secs: 1,
            false_entry_penalty: FALSE_ENTRY_PENALTY,
            hint_penalty: HINT_PENALTY,
            max_redraw_attempts: 1000,
        }
    }
}

impl GameConfig {
    /// The longer five-minute game.
    pub fn extended() -> Self {
        Self {
            game_time_secs: EXTENDED_GAME_TIME_SECS,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(SET_SIZE..=UNIVERSE_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        if self.game_time_secs <= 0 {
            return Err(ConfigError::GameTime(self.game_time_secs));
        }
        if self.tick_period_secs == 0 {
            return Err(ConfigError::TickPeriod);
        }
        if self.max_redraw_attempts == 0 {
            return Err(ConfigError::RedrawBudget);
        }
        Ok(())
    }
}
