use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EndReason {
    TimeUp,
    Forfeit,
}

/// Notifications for the presentation layer. Queued while an intent runs and
/// drained by the host afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    GameStarted {
        high_score: i64,
        remaining_secs: i64,
    },
    TimerStarted { period_secs: u32 },
    TimerStopped,
    CellsReplaced { cells: Vec<usize>, attempts: u32 },
    SetScored {
        cells: [usize; 3],
        points: i64,
        score: i64,
    },
    FalseEntry { penalty: u32, score: i64 },
    HintGiven {
        cell: usize,
        penalty: u32,
        score: i64,
    },
    TimeTicked { remaining_secs: i64 },
    GameOver {
        final_score: i64,
        high_score: i64,
        new_record: bool,
        reason: EndReason,
    },
    HighScoreLoadFailed { reason: String },
    HighScoreSaveFailed { reason: String },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn pending(&self) -> &[Event] {
        &self.queue
    }
}
