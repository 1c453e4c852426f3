use log::info;
use rand::Rng;

use crate::ai::moves::{ScoredMove, scored_moves};
use crate::ai::search::strong_move;
use crate::board::Board;
use crate::types::{Difficulty, Position, Side, Turn};

/// Novice prefers low-impact moves: scores are inverted first, then the
/// bottom-ranked third carries the largest multiplier.
const NOVICE_WEIGHTS: [usize; 3] = [2, 3, 4];
/// Moderate leans on raw scores: best third 5x, middle 2x, worst third
/// gets no mass at all.
const MODERATE_WEIGHTS: [usize; 3] = [5, 2, 0];

/// Picks a move for the side to move at the given difficulty.
/// Caller contract: the game must not be finished and the side to move must
/// have at least one legal move.
pub fn choose_move<R: Rng>(board: &Board, difficulty: Difficulty, rng: &mut R) -> Position {
    let side = match board.turn() {
        Turn::ToMove(side) => side,
        Turn::Finished => panic!("choose_move called on a finished game"),
    };

    match difficulty {
        Difficulty::Weak => weak_move(board, side, rng),
        Difficulty::Novice => novice_move(board, side, rng),
        Difficulty::Moderate => moderate_move(board, side, rng),
        Difficulty::Strong => strong_move(board, side),
    }
}

/// Weak engine: a uniformly random legal move.
pub fn weak_move<R: Rng>(board: &Board, side: Side, rng: &mut R) -> Position {
    let moves = legal_moves(board, side);
    let pick = moves[rng.gen_range(0..moves.len())];
    info!("weak engine chose r{}c{}", pick.row, pick.col);
    to_position(pick)
}

/// Novice engine: weighted towards low-capture moves, but every legal move
/// keeps a nonzero weight.
pub fn novice_move<R: Rng>(board: &Board, side: Side, rng: &mut R) -> Position {
    let mut moves = legal_moves(board, side);

    // The list is sorted descending, so the top raw score is at the front.
    let top = moves[0].score;
    for m in &mut moves {
        m.score = top - m.score;
    }

    let pick = weight_thirds(&moves, NOVICE_WEIGHTS, rng);
    info!("novice engine chose r{}c{}", pick.row, pick.col);
    to_position(pick)
}

/// Moderate engine: weighted towards high-capture moves; the worst third is
/// only reachable when it is the sole group with any mass.
pub fn moderate_move<R: Rng>(board: &Board, side: Side, rng: &mut R) -> Position {
    let moves = legal_moves(board, side);
    let pick = weight_thirds(&moves, MODERATE_WEIGHTS, rng);
    info!("moderate engine chose r{}c{}", pick.row, pick.col);
    to_position(pick)
}

/// Inverse-CDF sampling over the rank-partitioned move list.
///
/// The score-sorted list is split into three contiguous rank groups of sizes
/// `len - 2g, g, g` with `g = len / 3` (the remainder folds into the top
/// group). Each move's score is multiplied by its group's weight and one
/// move is drawn proportionally to the result. When the total mass is zero
/// the last move is returned, matching a zero draw against an all-zero
/// cumulative table.
fn weight_thirds<R: Rng>(moves: &[ScoredMove], weights: [usize; 3], rng: &mut R) -> ScoredMove {
    let third = moves.len() / 3;
    let top = moves.len() - 2 * third;

    let mut total = 0usize;
    let mut cumulative = Vec::with_capacity(moves.len());
    for (rank, m) in moves.iter().enumerate() {
        let weight = if rank < top {
            weights[0]
        } else if rank < top + third {
            weights[1]
        } else {
            weights[2]
        };
        total += m.score * weight;
        cumulative.push(total);
    }

    if total == 0 {
        return moves[moves.len() - 1];
    }

    let draw = rng.gen_range(0..total);
    let at = cumulative
        .iter()
        .position(|&c| c > draw)
        .unwrap_or(moves.len() - 1);
    moves[at]
}

fn legal_moves(board: &Board, side: Side) -> Vec<ScoredMove> {
    let moves = scored_moves(board, side);
    assert!(
        !moves.is_empty(),
        "strategy invoked with no legal move for {side:?}"
    );
    moves
}

fn to_position(m: ScoredMove) -> Position {
    Position {
        row: m.row as u8,
        col: m.col as u8,
    }
}
