use crate::board::Board;
use crate::types::Side;

/// A legal placement paired with the number of pieces it captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub row: usize,
    pub col: usize,
    pub score: usize,
}

/// Every legal move for `side`, sorted by capture score descending.
/// Ties keep row-major discovery order (the sort is stable); this ordering
/// is what the strategies' rank partitions and tie-breaks are defined over.
pub fn scored_moves(board: &Board, side: Side) -> Vec<ScoredMove> {
    let mut moves = Vec::new();
    for row in 0..board.size() {
        for col in 0..board.size() {
            let score = board.capture_score(row, col, side);
            if score > 0 {
                moves.push(ScoredMove { row, col, score });
            }
        }
    }

    moves.sort_by(|a, b| b.score.cmp(&a.score));
    moves
}
