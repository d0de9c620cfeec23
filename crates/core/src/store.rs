use thiserror::Error;

/// Stored when no game has been recorded yet.
pub const NO_HIGH_SCORE: i64 = -1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("read failed: {0}")]
    Read(String),
    #[error("parse failed: {0}")]
    Parse(String),
    #[error("write failed: {0}")]
    Write(String),
}

/// Persistence for the single high-score value. `load` returns `Ok(None)`
/// when nothing has been recorded.
pub trait HighScoreStore {
    fn load(&mut self) -> Result<Option<i64>, StoreError>;
    fn save(&mut self, high_score: i64) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryHighScoreStore {
    value: Option<i64>,
}

impl MemoryHighScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: i64) -> Self {
        Self { value: Some(value) }
    }

    pub fn value(&self) -> Option<i64> {
        self.value
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&mut self) -> Result<Option<i64>, StoreError> {
        Ok(self.value)
    }

    fn save(&mut self, high_score: i64) -> Result<(), StoreError> {
        self.value = Some(high_score);
        Ok(())
    }
}
