use crate::{has_set, Card, Deck, DeckError, RngState};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

pub const DEFAULT_BOARD_SIZE: usize = 12;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell {index} out of range for board of {len}")]
    CellOutOfRange { index: usize, len: usize },
    #[error("no playable set after {attempts} redraws")]
    NoPlayableSet { attempts: u32 },
    #[error("deck error: {0}")]
    Deck(#[from] DeckError),
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cell {
    pub card: Option<Card>,
    pub selected: bool,
}

/// Read-only view of one cell handed to the presentation layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CellView {
    pub index: usize,
    pub card: Option<Card>,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacement {
    pub attempts: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![Cell::default(); size],
        }
    }

    /// Board holding exactly `cards`, one per cell, nothing selected.
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cells: cards
                .iter()
                .map(|card| Cell {
                    card: Some(*card),
                    selected: false,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn card(&self, index: usize) -> Option<Card> {
        self.cells.get(index).and_then(|cell| cell.card)
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cells.iter().filter_map(|cell| cell.card.as_ref())
    }

    /// Cards at the given cells, or `None` if any index is out of range or
    /// points at an empty cell.
    pub fn cards_at(&self, indices: &[usize]) -> Option<Vec<Card>> {
        indices.iter().map(|&idx| self.card(idx)).collect()
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.card.is_some()).count()
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.selected)
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.selected).count()
    }

    pub fn select(&mut self, index: usize) -> Result<(), BoardError> {
        self.cell_mut(index)?.selected = true;
        Ok(())
    }

    pub fn deselect(&mut self, index: usize) -> Result<(), BoardError> {
        self.cell_mut(index)?.selected = false;
        Ok(())
    }

    pub fn deselect_all(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| cell.selected) {
            cell.selected = false;
        }
    }

    pub fn snapshot(&self) -> Vec<CellView> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| CellView {
                index,
                card: cell.card,
                selected: cell.selected,
            })
            .collect()
    }

    /// Sends the occupants of `indices` to the discard pile and refills those
    /// cells from the deck, redrawing the same cells until the board holds at
    /// least one set. Gives up after `max_attempts` redraws.
    pub fn replace_cells(
        &mut self,
        indices: &[usize],
        deck: &mut Deck,
        rng: &mut RngState,
        max_attempts: u32,
    ) -> Result<Replacement, BoardError> {
        let len = self.len();
        if let Some(&index) = indices.iter().find(|&&idx| idx >= len) {
            return Err(BoardError::CellOutOfRange { index, len });
        }
        let mut targets = indices.to_vec();
        targets.sort_unstable();
        targets.dedup();
        if targets.is_empty() {
            return Ok(Replacement { attempts: 0 });
        }

        let mut attempts = 0u32;
        while attempts < max_attempts {
            attempts += 1;
            for &idx in &targets {
                let cell = &mut self.cells[idx];
                if let Some(card) = cell.card.take() {
                    deck.discard(card);
                }
                cell.card = Some(deck.draw(rng)?);
                cell.selected = false;
            }
            if has_set(self) {
                if attempts > 1 {
                    debug!(attempts, cells = targets.len(), "redrew board to reach a set");
                }
                return Ok(Replacement { attempts });
            }
        }
        error!(attempts, "board has no set after exhausting redraw budget");
        Err(BoardError::NoPlayableSet { attempts })
    }

    fn cell_mut(&mut self, index: usize) -> Result<&mut Cell, BoardError> {
        let len = self.cells.len();
        self.cells
            .get_mut(index)
            .ok_or(BoardError::CellOutOfRange { index, len })
    }
}
