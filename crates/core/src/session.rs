use crate::{
    find_all_sets, Board, BoardError, ConfigError, Deck, GameConfig, HighScoreStore, Phase,
    RngState, SessionView, NO_HIGH_SCORE,
};
use std::fmt;
use thiserror::Error;

mod clock;
mod intents;

pub use clock::TickOutcome;
pub use intents::SubmitOutcome;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error("cell {0} out of range")]
    CellOutOfRange(usize),
    #[error("cell {0} is empty")]
    EmptyCell(usize),
    #[error("selection is full")]
    SelectionFull,
    #[error("need three selected cells, have {0}")]
    IncompleteSelection(usize),
    #[error("no set on board")]
    NoSetOnBoard,
    #[error("board error: {0}")]
    Board(#[from] BoardError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl SessionError {
    /// Board errors mean the card bookkeeping is broken and the session
    /// should be dropped; everything else is a rejected intent that left the
    /// session untouched.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SessionError::Board(_))
    }
}

/// One game from start to game-over. The host owns it, forwards intents and
/// timer ticks into it, and drains the [`crate::EventBus`] afterwards.
pub struct GameSession {
    config: GameConfig,
    store: Box<dyn HighScoreStore>,
    rng: RngState,
    deck: Deck,
    board: Board,
    phase: Phase,
    score: i64,
    high_score: i64,
    remaining_secs: i64,
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("config", &self.config)
            .field("seed", &self.rng.seed())
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("high_score", &self.high_score)
            .field("remaining_secs", &self.remaining_secs)
            .finish_non_exhaustive()
    }
}

impl GameSession {
    pub fn new(
        config: GameConfig,
        store: Box<dyn HighScoreStore>,
        rng: RngState,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        let board = Board::new(config.board_size);
        let remaining_secs = config.game_time_secs;
        Ok(Self {
            config,
            store,
            rng,
            deck: Deck::default(),
            board,
            phase: Phase::NotStarted,
            score: 0,
            high_score: NO_HIGH_SCORE,
            remaining_secs,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn high_score(&self) -> i64 {
        self.high_score
    }

    pub fn remaining_secs(&self) -> i64 {
        self.remaining_secs
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn selected(&self) -> Vec<usize> {
        self.board.selected_indices()
    }

    pub fn sets_on_board(&self) -> Vec<[usize; 3]> {
        find_all_sets(&self.board)
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            phase: self.phase,
            score: self.score,
            high_score: self.high_score,
            remaining_secs: self.remaining_secs,
            cells: self.board.snapshot(),
        }
    }

    fn ensure_playing(&self) -> Result<(), SessionError> {
        if self.phase.is_playing() {
            Ok(())
        } else {
            Err(SessionError::InvalidPhase(self.phase))
        }
    }
}
