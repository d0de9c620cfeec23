use crate::{Attribute, Board, Card};

/// Three cards form a set when, for every attribute, their values are all
/// equal or all different. With ordinals in `0..3` that is exactly the case
/// when each attribute sums to a multiple of three.
pub fn is_set(cards: &[Card; 3]) -> bool {
    Attribute::ALL.iter().all(|&attribute| {
        let sum: u8 = cards.iter().map(|card| card.ordinal(attribute)).sum();
        sum % 3 == 0
    })
}

pub fn is_set_slice(cards: &[Card]) -> bool {
    match cards {
        [a, b, c] => is_set(&[*a, *b, *c]),
        _ => false,
    }
}

/// Attribute ordinals of the only card that completes `a` and `b` into a set.
pub fn third_card(a: &Card, b: &Card) -> [u8; 4] {
    let (a, b) = (a.attributes(), b.attributes());
    let mut out = [0u8; 4];
    for idx in 0..4 {
        out[idx] = if a[idx] == b[idx] {
            a[idx]
        } else {
            3 - a[idx] - b[idx]
        };
    }
    out
}

/// Every set on the board as ascending cell-index triplets, in
/// lexicographic order. Empty cells are skipped.
pub fn find_all_sets(board: &Board) -> Vec<[usize; 3]> {
    let filled = filled_cells(board);
    let mut sets = Vec::new();
    for (i, &(a, card_a)) in filled.iter().enumerate() {
        for (j, &(b, card_b)) in filled.iter().enumerate().skip(i + 1) {
            for &(c, card_c) in filled.iter().skip(j + 1) {
                if is_set(&[card_a, card_b, card_c]) {
                    sets.push([a, b, c]);
                }
            }
        }
    }
    sets
}

pub fn has_set(board: &Board) -> bool {
    let filled = filled_cells(board);
    for (i, &(_, card_a)) in filled.iter().enumerate() {
        for (j, &(_, card_b)) in filled.iter().enumerate().skip(i + 1) {
            for &(_, card_c) in filled.iter().skip(j + 1) {
                if is_set(&[card_a, card_b, card_c]) {
                    return true;
                }
            }
        }
    }
    false
}

fn filled_cells(board: &Board) -> Vec<(usize, Card)> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter_map(|(idx, cell)| cell.card.map(|card| (idx, card)))
        .collect()
}
