use super::*;
use crate::*;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Set { points: i64 },
    FalseEntry { penalty: u32 },
}

impl GameSession {
    /// Begins a fresh game. Starting while a game is running abandons it
    /// without recording its score.
    pub fn start(&mut self, events: &mut EventBus) -> Result<(), SessionError> {
        if self.phase.is_playing() {
            info!(score = self.score, "abandoning running game");
            events.push(Event::TimerStopped);
        }
        self.phase = Phase::NotStarted;

        self.high_score = match self.store.load() {
            Ok(Some(value)) => value,
            Ok(None) => NO_HIGH_SCORE,
            Err(err) => {
                warn!(error = %err, "could not load high score, starting without one");
                events.push(Event::HighScoreLoadFailed {
                    reason: err.to_string(),
                });
                NO_HIGH_SCORE
            }
        };
        self.score = 0;
        self.remaining_secs = self.config.game_time_secs;
        self.deck = Deck::construct(&mut self.rng);
        self.board = Board::new(self.config.board_size);

        let cells: Vec<usize> = (0..self.board.len()).collect();
        let replacement = self.board.replace_cells(
            &cells,
            &mut self.deck,
            &mut self.rng,
            self.config.max_redraw_attempts,
        )?;
        self.board.deselect_all();
        events.push(Event::CellsReplaced {
            cells,
            attempts: replacement.attempts,
        });

        self.phase = Phase::Playing;
        info!(
            seed = self.rng.seed(),
            high_score = self.high_score,
            remaining_secs = self.remaining_secs,
            "game started"
        );
        events.push(Event::GameStarted {
            high_score: self.high_score,
            remaining_secs: self.remaining_secs,
        });
        events.push(Event::TimerStarted {
            period_secs: self.config.tick_period_secs,
        });
        Ok(())
    }

    /// Flips the selected flag of `cell` and returns the new flag. Selecting
    /// a fourth cell is refused; deselecting is always allowed.
    pub fn toggle_select(&mut self, cell: usize) -> Result<bool, SessionError> {
        self.ensure_playing()?;
        let current = self
            .board
            .cell(cell)
            .ok_or(SessionError::CellOutOfRange(cell))?;
        if current.card.is_none() {
            return Err(SessionError::EmptyCell(cell));
        }
        if current.selected {
            self.board.deselect(cell)?;
            return Ok(false);
        }
        if self.board.selected_count() >= SET_SIZE {
            return Err(SessionError::SelectionFull);
        }
        self.board.select(cell)?;
        Ok(true)
    }

    /// Scores the three selected cells. A set is only credited once its
    /// cells have been redealt.
    pub fn submit_entry(&mut self, events: &mut EventBus) -> Result<SubmitOutcome, SessionError> {
        self.ensure_playing()?;
        let selected = self.board.selected_indices();
        let cards: [Card; 3] = self
            .board
            .cards_at(&selected)
            .and_then(|cards| cards.try_into().ok())
            .ok_or(SessionError::IncompleteSelection(selected.len()))?;
        let cells = [selected[0], selected[1], selected[2]];

        let outcome = if is_set(&cards) {
            let replacement = match self.board.replace_cells(
                &selected,
                &mut self.deck,
                &mut self.rng,
                self.config.max_redraw_attempts,
            ) {
                Ok(replacement) => replacement,
                Err(err) => {
                    self.board.deselect_all();
                    return Err(err.into());
                }
            };
            let points = points_for(&cards);
            self.score += points;
            debug!(?cells, points, score = self.score, "set scored");
            events.push(Event::SetScored {
                cells,
                points,
                score: self.score,
            });
            events.push(Event::CellsReplaced {
                cells: selected,
                attempts: replacement.attempts,
            });
            SubmitOutcome::Set { points }
        } else {
            let penalty = self.config.false_entry_penalty;
            self.score = apply_penalty(self.score, penalty);
            debug!(?cells, penalty, score = self.score, "false entry");
            events.push(Event::FalseEntry {
                penalty,
                score: self.score,
            });
            SubmitOutcome::FalseEntry { penalty }
        };
        self.board.deselect_all();
        Ok(outcome)
    }

    /// Selects one random member of one random set on the board, at a cost.
    pub fn hint(&mut self, events: &mut EventBus) -> Result<usize, SessionError> {
        self.ensure_playing()?;
        let sets = find_all_sets(&self.board);
        if sets.is_empty() {
            return Err(SessionError::NoSetOnBoard);
        }
        self.board.deselect_all();
        let penalty = self.config.hint_penalty;
        self.score = apply_penalty(self.score, penalty);

        let triplet = sets[self.rng.index(sets.len())];
        let cell = triplet[self.rng.index(triplet.len())];
        self.board.select(cell)?;
        debug!(cell, sets = sets.len(), score = self.score, "hint given");
        events.push(Event::HintGiven {
            cell,
            penalty,
            score: self.score,
        });
        Ok(cell)
    }
}
