use crate::{Card, RngState};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("draw and discard piles are both empty")]
    Exhausted,
}

#[derive(Debug, Default, Clone)]
pub struct Deck {
    /// Draw pile with the next card last.
    pub draw: Vec<Card>,
    pub discard: Vec<Card>,
}

impl Deck {
    /// Full universe in a uniformly random order, empty discard pile.
    pub fn construct(rng: &mut RngState) -> Self {
        let mut deck = Self {
            draw: Card::universe(),
            discard: Vec::new(),
        };
        deck.shuffle(rng);
        deck
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.draw);
    }

    /// Takes the top card of the draw pile, folding the discard pile back
    /// in first when the draw pile has run out.
    pub fn draw(&mut self, rng: &mut RngState) -> Result<Card, DeckError> {
        if self.draw.is_empty() {
            self.reshuffle_discard(rng);
        }
        self.draw.pop().ok_or(DeckError::Exhausted)
    }

    /// The card the next `draw` returns, if the draw pile is not empty.
    pub fn peek(&self) -> Option<&Card> {
        self.draw.last()
    }

    pub fn discard(&mut self, card: Card) {
        self.discard.push(card);
    }

    pub fn reshuffle_discard(&mut self, rng: &mut RngState) {
        if self.discard.is_empty() {
            return;
        }
        debug!(cards = self.discard.len(), "reshuffling discard pile");
        self.draw.append(&mut self.discard);
        rng.shuffle(&mut self.draw);
    }

    pub fn draw_len(&self) -> usize {
        self.draw.len()
    }

    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    pub fn outstanding(&self) -> usize {
        self.draw.len() + self.discard.len()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.draw.iter().chain(self.discard.iter())
    }
}
