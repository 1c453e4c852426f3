use log::info;

use crate::ai::moves::scored_moves;
use crate::board::Board;
use crate::types::{Position, Side, Turn};

/// How many of the engine's own plies the strong engine examines.
/// Must be at least 1 for a top-level call; 0 is only the recursion's base.
pub const LOOKAHEAD_DEPTH: u8 = 3;

/// Strong engine: bounded-depth lookahead over the engine's own moves with
/// a greedy opponent model. Deterministic for a fixed board and depth.
/// Caller contract: `board` must have at least one legal move for `side`.
pub fn strong_move(board: &Board, side: Side) -> Position {
    debug_assert!(
        board.can_move(side),
        "strong_move() requires at least one legal move"
    );

    let (pick, _own_pieces) = search(board, side, LOOKAHEAD_DEPTH, None);
    match pick {
        Some(pick) => {
            info!("strong engine chose r{}c{}", pick.row, pick.col);
            pick
        }
        None => unreachable!("strong_move() called without legal moves"),
    }
}

/// One recursion level: branches over every legal `side` move, resolves the
/// opponent's replies greedily (its single best immediate capture, repeated
/// while the turn stays with the opponent), and keeps the candidate whose
/// branch ends with the most `side` pieces. Ties go to the candidate that
/// appeared first in descending-score order.
fn search(board: &Board, side: Side, depth: u8, last: Option<Position>) -> (Option<Position>, usize) {
    if depth == 0 {
        return (last, board.count(side));
    }

    let mut best: Option<(Position, usize)> = None;
    for candidate in scored_moves(board, side) {
        let mut next = board.clone();
        // Remaining depth is per branch: a terminal position shortens this
        // branch only, never its siblings.
        let mut remaining = depth;

        let _ = next.place(candidate.row, candidate.col, side);
        if next.turn() == Turn::Finished {
            remaining = 1;
        }
        while next.turn() == Turn::ToMove(side.opponent()) {
            let reply = scored_moves(&next, side.opponent())[0];
            let _ = next.place(reply.row, reply.col, side.opponent());
            if next.turn() == Turn::Finished {
                remaining = 1;
            }
        }

        let played = Position {
            row: candidate.row as u8,
            col: candidate.col as u8,
        };
        let (_, own_pieces) = search(&next, side, remaining - 1, Some(played));

        match best {
            Some((_, count)) if count >= own_pieces => {}
            _ => best = Some((played, own_pieces)),
        }
    }

    match best {
        Some((pick, count)) => (Some(pick), count),
        // No branch at all: evaluate in place, as if this were a leaf.
        None => (last, board.count(side)),
    }
}
