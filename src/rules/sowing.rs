//! Sowing: distributing a pit's seeds one slot at a time.
//!
//! Two derivations of where the last seed lands:
//!
//! - `sow` walks the board seed by seed. This is the ground truth.
//! - `predict_end` uses pit arithmetic on the pre-move count. The mover's
//!   path never touches the opponent's store, so it is a cycle of 13 slots
//!   and the end position is `(start + n) mod 13` on that cycle.
//!
//! The engine computes the prediction before sowing and debug-asserts that
//! both agree; the tests below check every pit and every count up to 48.

use crate::core::{Board, Side, SLOT_COUNT};

/// Length of the mover's path around the board (opponent's store skipped).
const CYCLE: usize = SLOT_COUNT - 1;

/// Slot index where the mover's 13-slot cycle starts: the slot just past the
/// opponent's store.
fn cycle_origin(side: Side) -> usize {
    (side.opponent().store() + 1) % SLOT_COUNT
}

/// Sow every seed from `pit` for `side`, returning the slot that got the
/// last seed.
///
/// The pit is emptied first. If the walk comes all the way round, the pit is
/// an ordinary slot and receives a seed like any other. The caller has
/// already checked that the pit is non-empty and belongs to `side`.
pub(crate) fn sow(board: &mut Board, pit: usize, side: Side) -> usize {
    let skip = side.opponent().store();
    let seeds = board.take(pit);

    let mut index = pit;
    for _ in 0..seeds {
        index = (index + 1) % SLOT_COUNT;
        if index == skip {
            index = (index + 1) % SLOT_COUNT;
        }
        board.add(index, 1);
    }

    index
}

/// Closed-form end slot for sowing `seeds` from `pit` on behalf of `side`.
#[must_use]
pub fn predict_end(pit: usize, seeds: u8, side: Side) -> usize {
    let origin = cycle_origin(side);
    let position = (pit + SLOT_COUNT - origin) % SLOT_COUNT;
    let end_position = (position + usize::from(seeds)) % CYCLE;
    (end_position + origin) % SLOT_COUNT
}

/// Whether sowing `seeds` from `pit` ends in `side`'s own store.
#[must_use]
pub fn lands_in_store(pit: usize, seeds: u8, side: Side) -> bool {
    seeds > 0 && predict_end(pit, seeds, side) == side.store()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TOTAL_SEEDS;

    #[test]
    fn test_sow_from_start() {
        let mut board = Board::new();
        let end = sow(&mut board, 0, Side::Player0);

        assert_eq!(end, 4);
        assert_eq!(board.counts(), [0, 5, 5, 5, 5, 4, 0, 4, 4, 4, 4, 4, 4, 0]);
    }

    #[test]
    fn test_sow_into_store() {
        let mut board = Board::new();
        let end = sow(&mut board, 2, Side::Player0);

        assert_eq!(end, 6);
        assert_eq!(board.store(Side::Player0), 1);
    }

    #[test]
    fn test_sow_across_to_opponent() {
        let mut board = Board::from_counts([4, 4, 4, 4, 5, 4, 0, 4, 4, 4, 4, 4, 4, 0]);
        let end = sow(&mut board, 4, Side::Player0);

        assert_eq!(end, 9);
        assert_eq!(board.counts(), [4, 4, 4, 4, 0, 5, 1, 5, 5, 5, 4, 4, 4, 0]);
    }

    #[test]
    fn test_sow_skips_opponent_store() {
        // Player 0 from pit 5 with 9 seeds: 6..12, skip 13, then 0, 1
        let mut board = Board::from_counts([0, 0, 0, 0, 0, 9, 0, 0, 0, 0, 0, 0, 0, 0]);
        let end = sow(&mut board, 5, Side::Player0);

        assert_eq!(end, 1);
        assert_eq!(board.count(13), 0);
        assert_eq!(board.counts(), [1, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0]);

        // Player 1 from pit 12 with 9 seeds: 13, 0..5, skip 6, then 7, 8
        let mut board = Board::from_counts([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 9, 0]);
        let end = sow(&mut board, 12, Side::Player1);

        assert_eq!(end, 8);
        assert_eq!(board.count(6), 0);
        assert_eq!(board.counts(), [1, 1, 1, 1, 1, 1, 0, 1, 1, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_full_lap_refills_start_pit() {
        let mut board = Board::from_counts([0, 0, 13, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let end = sow(&mut board, 2, Side::Player0);

        assert_eq!(end, 2);
        assert_eq!(board.count(2), 1);
        assert_eq!(board.count(13), 0);
        assert_eq!(board.total(), 13);
    }

    #[test]
    fn test_two_laps() {
        let mut board = Board::from_counts([0, 0, 0, 0, 0, 0, 0, 0, 0, 27, 0, 0, 0, 0]);
        let end = sow(&mut board, 9, Side::Player1);

        // 27 = 2 * 13 + 1: every slot but store 6 gets two, then one more on pit 10
        assert_eq!(end, 10);
        assert_eq!(board.count(6), 0);
        assert_eq!(board.count(9), 2);
        assert_eq!(board.count(10), 3);
        assert_eq!(board.total(), 27);
    }

    #[test]
    fn test_prediction_matches_simulation_exhaustively() {
        for side in Side::ALL {
            for pit in side.pits() {
                for seeds in 1..=TOTAL_SEEDS as u8 {
                    let mut counts = [0u8; 14];
                    counts[pit] = seeds;
                    let mut board = Board::from_counts(counts);

                    let predicted = predict_end(pit, seeds, side);
                    let actual = sow(&mut board, pit, side);

                    assert_eq!(
                        predicted, actual,
                        "{} pit {} with {} seeds",
                        side, pit, seeds
                    );
                    assert_eq!(board.count(side.opponent().store()), 0);
                    assert_eq!(board.total(), u32::from(seeds));
                }
            }
        }
    }

    #[test]
    fn test_lands_in_store() {
        // Distance to own store from each pit
        assert!(lands_in_store(2, 4, Side::Player0));
        assert!(lands_in_store(5, 1, Side::Player0));
        assert!(lands_in_store(0, 6, Side::Player0));
        assert!(lands_in_store(7, 6, Side::Player1));
        assert!(lands_in_store(12, 1, Side::Player1));

        // One full lap later lands there again
        assert!(lands_in_store(2, 17, Side::Player0));
        assert!(lands_in_store(12, 14, Side::Player1));

        assert!(!lands_in_store(2, 5, Side::Player0));
        assert!(!lands_in_store(2, 0, Side::Player0));
        assert!(!lands_in_store(12, 8, Side::Player1));
    }
}
