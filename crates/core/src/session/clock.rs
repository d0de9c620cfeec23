use super::*;
use crate::*;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running { remaining_secs: i64 },
    Ended,
}

impl GameSession {
    /// Advances the countdown. The game ends the first time the remaining
    /// time drops below zero; later ticks are rejected.
    pub fn tick(
        &mut self,
        elapsed_secs: u32,
        events: &mut EventBus,
    ) -> Result<TickOutcome, SessionError> {
        self.ensure_playing()?;
        self.remaining_secs -= i64::from(elapsed_secs);
        events.push(Event::TimeTicked {
            remaining_secs: self.remaining_secs,
        });
        if self.remaining_secs < 0 {
            self.finish(EndReason::TimeUp, events);
            return Ok(TickOutcome::Ended);
        }
        Ok(TickOutcome::Running {
            remaining_secs: self.remaining_secs,
        })
    }

    pub fn end(&mut self, events: &mut EventBus) -> Result<(), SessionError> {
        self.ensure_playing()?;
        self.finish(EndReason::TimeUp, events);
        Ok(())
    }

    /// Player quits mid-game. The score still counts toward the high score.
    pub fn forfeit(&mut self, events: &mut EventBus) -> Result<(), SessionError> {
        self.ensure_playing()?;
        self.finish(EndReason::Forfeit, events);
        Ok(())
    }

    fn finish(&mut self, reason: EndReason, events: &mut EventBus) {
        self.phase = Phase::Over;
        self.board.deselect_all();
        events.push(Event::TimerStopped);

        let new_record = self.score > self.high_score;
        self.high_score = self.high_score.max(self.score);
        if let Err(err) = self.store.save(self.high_score) {
            warn!(error = %err, high_score = self.high_score, "failed to persist high score");
            events.push(Event::HighScoreSaveFailed {
                reason: err.to_string(),
            });
        }
        info!(
            score = self.score,
            high_score = self.high_score,
            new_record,
            ?reason,
            "game over"
        );
        events.push(Event::GameOver {
            final_score: self.score,
            high_score: self.high_score,
            new_record,
            reason,
        });
    }
}
