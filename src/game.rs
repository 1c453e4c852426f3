use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::ai::strategy::{moderate_move, novice_move, weak_move};
use crate::ai::search::strong_move;
use crate::board::Board;
use crate::types::{Difficulty, GameOutcome, GameResult, GameState, Position, Side, Turn};

/// The human always plays light and moves first; the engine plays dark.
pub const HUMAN_SIDE: Side = Side::Light;
pub const ENGINE_SIDE: Side = Side::Dark;

pub trait MoveSelector: Send + Sync {
    /// Picks a move for `side`, or `None` when `side` has no legal move.
    fn select_move(&mut self, board: &Board, side: Side) -> Option<Position>;
}

/// Difficulty-tiered selector with its own random source, so a session's
/// sampling is reproducible from a seed.
pub struct TieredSelector<R: Rng> {
    difficulty: Difficulty,
    rng: R,
}

impl<R: Rng> TieredSelector<R> {
    pub fn new(difficulty: Difficulty, rng: R) -> Self {
        Self { difficulty, rng }
    }
}

impl TieredSelector<StdRng> {
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self::new(difficulty, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send + Sync> MoveSelector for TieredSelector<R> {
    fn select_move(&mut self, board: &Board, side: Side) -> Option<Position> {
        if !board.can_move(side) {
            return None;
        }
        Some(match self.difficulty {
            Difficulty::Weak => weak_move(board, side, &mut self.rng),
            Difficulty::Novice => novice_move(board, side, &mut self.rng),
            Difficulty::Moderate => moderate_move(board, side, &mut self.rng),
            Difficulty::Strong => strong_move(board, side),
        })
    }
}

/// One human-versus-engine session. The board advances the turn itself
/// (including passes and termination), so the session only routes moves and
/// snapshots state for the boundary.
pub struct GameInstance {
    board: Board,
    flipped: Vec<Position>,
    selector: Box<dyn MoveSelector>,
}

impl GameInstance {
    pub fn new(size: usize, selector: Box<dyn MoveSelector>) -> Self {
        Self::from_board(Board::new(size), selector)
    }

    pub fn with_difficulty(size: usize, difficulty: Difficulty, seed: u64) -> Self {
        Self::new(size, Box::new(TieredSelector::seeded(difficulty, seed)))
    }

    /// Resumes a session from a reconstructed board (turn already supplied
    /// by the caller, per the reconstruction contract).
    pub fn from_board(board: Board, selector: Box<dyn MoveSelector>) -> Self {
        Self {
            board,
            flipped: Vec::new(),
            selector,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_game_over(&self) -> bool {
        self.board.turn() == Turn::Finished
    }

    /// Applies the human's move. A zero-capture rejection from the board
    /// surfaces as an error here.
    pub fn place(&mut self, row: u8, col: u8) -> Result<usize, String> {
        if self.is_game_over() {
            return Err("game is already over".to_string());
        }
        if self.board.turn() != Turn::ToMove(HUMAN_SIDE) {
            return Err("it is not the player's turn".to_string());
        }
        self.apply(row, col, HUMAN_SIDE)
    }

    /// Asks the selector for the engine's move and applies it, re-checking
    /// legality before trusting the selection.
    pub fn engine_move(&mut self) -> Result<Position, String> {
        if self.is_game_over() {
            return Err("game is already over".to_string());
        }
        if self.board.turn() != Turn::ToMove(ENGINE_SIDE) {
            return Err("it is not the engine's turn".to_string());
        }

        let selected = self
            .selector
            .select_move(&self.board, ENGINE_SIDE)
            .ok_or_else(|| "engine has no legal moves".to_string())?;

        let (row, col) = (selected.row as usize, selected.col as usize);
        if row >= self.board.size() || col >= self.board.size() {
            return Err("engine selected an out-of-range move".to_string());
        }
        if self.board.capture_score(row, col, ENGINE_SIDE) == 0 {
            return Err("engine selected an illegal move".to_string());
        }

        self.apply(selected.row, selected.col, ENGINE_SIDE)?;
        Ok(selected)
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            size: self.board.size() as u8,
            board: self.board.to_tags(),
            turn: self.board.turn().tag(),
            light_count: self.board.count(Side::Light) as u32,
            dark_count: self.board.count(Side::Dark) as u32,
            squares_remaining: self.board.squares_remaining() as u32,
            is_game_over: self.is_game_over(),
            flipped: self.flipped.clone(),
        }
    }

    /// Final result; `None` while the game is still live.
    pub fn to_game_result(&self) -> Option<GameResult> {
        let outcome = self.board.outcome()?;
        Some(GameResult {
            winner: match outcome {
                GameOutcome::Win(side) => side.tag(),
                GameOutcome::Draw => 2,
            },
            light_count: self.board.count(Side::Light) as u32,
            dark_count: self.board.count(Side::Dark) as u32,
        })
    }

    fn apply(&mut self, row: u8, col: u8, side: Side) -> Result<usize, String> {
        let (r, c) = (row as usize, col as usize);
        let flips = self.board.capture_cells(r, c, side);
        let captured = self.board.place(r, c, side);
        if captured == 0 {
            return Err(format!("illegal move r{row}c{col}"));
        }

        self.flipped = flips
            .into_iter()
            .map(|(fr, fc)| Position {
                row: fr as u8,
                col: fc as u8,
            })
            .collect();
        Ok(captured)
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board) {
        self.board = board;
        self.flipped.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn game(difficulty: Difficulty) -> GameInstance {
        GameInstance::with_difficulty(4, difficulty, 42)
    }

    #[test]
    fn initial_state_snapshot() {
        let game = game(Difficulty::Weak);
        let state = game.to_game_state();

        assert_eq!(state.size, 4);
        assert_eq!(state.turn, HUMAN_SIDE.tag());
        assert_eq!(state.light_count, 2);
        assert_eq!(state.dark_count, 2);
        assert_eq!(state.squares_remaining, 12);
        assert!(!state.is_game_over);
        assert!(state.flipped.is_empty());
        assert_eq!(game.to_game_result(), None);
    }

    #[test]
    fn t01_engine_cannot_move_before_the_player() {
        let mut game = game(Difficulty::Weak);
        let err = game.engine_move().unwrap_err();
        assert!(err.contains("not the engine's turn"));
    }

    #[test]
    fn t02_illegal_player_move_returns_error() {
        let mut game = game(Difficulty::Weak);
        let err = game.place(0, 0).unwrap_err();
        assert!(err.contains("illegal move"));
    }

    #[test]
    fn t03_player_move_records_flipped_cells() {
        let mut game = game(Difficulty::Weak);

        let captured = game.place(0, 2).expect("legal opening move");

        assert_eq!(captured, 1);
        let state = game.to_game_state();
        assert_eq!(state.flipped, vec![Position { row: 1, col: 2 }]);
        assert_eq!(state.turn, ENGINE_SIDE.tag());
    }

    #[test]
    fn t04_engine_replies_with_a_legal_move() {
        let mut game = game(Difficulty::Moderate);
        game.place(0, 2).expect("legal opening move");

        let reply = game.engine_move().expect("engine must find a move");

        // The reply was applied: the cell now belongs to the engine.
        assert_eq!(
            game.board().cell(reply.row as usize, reply.col as usize),
            ENGINE_SIDE.cell()
        );
        assert!(!game.to_game_state().flipped.is_empty());
    }

    #[test]
    fn t05_engine_errors_without_a_legal_move() {
        let mut game = game(Difficulty::Weak);
        // Dark to move with nothing to capture anywhere.
        let mut cells = vec![Cell::Empty; 16];
        cells[0] = Cell::Dark;
        game.set_board_for_test(Board::from_cells(cells, Turn::ToMove(ENGINE_SIDE)));

        let err = game.engine_move().unwrap_err();
        assert!(err.contains("no legal moves"));
    }

    #[test]
    fn t06_finished_game_rejects_both_entry_points() {
        let mut game = game(Difficulty::Weak);
        game.set_board_for_test(Board::from_cells(vec![Cell::Light; 16], Turn::Finished));

        assert!(game.place(0, 0).unwrap_err().contains("already over"));
        assert!(game.engine_move().unwrap_err().contains("already over"));
        assert_eq!(
            game.to_game_result(),
            Some(GameResult {
                winner: Side::Light.tag(),
                light_count: 16,
                dark_count: 0,
            })
        );
    }

    #[test]
    fn t07_seeded_sessions_play_identical_games() {
        let transcript = |seed: u64| -> Vec<(u8, u8)> {
            let mut game = GameInstance::with_difficulty(4, Difficulty::Weak, seed);
            let mut moves = Vec::new();
            while let Turn::ToMove(side) = game.board().turn() {
                if side == HUMAN_SIDE {
                    // Scripted human: first legal move in row-major order.
                    let pick = crate::ai::scored_moves(game.board(), HUMAN_SIDE)[0];
                    game.place(pick.row as u8, pick.col as u8).expect("legal");
                    moves.push((pick.row as u8, pick.col as u8));
                } else {
                    let pick = game.engine_move().expect("engine move");
                    moves.push((pick.row, pick.col));
                }
            }
            moves
        };

        assert_eq!(transcript(99), transcript(99));
    }

    #[test]
    fn full_game_against_each_tier_reaches_a_result() {
        for difficulty in [
            Difficulty::Weak,
            Difficulty::Novice,
            Difficulty::Moderate,
            Difficulty::Strong,
        ] {
            let mut game = GameInstance::with_difficulty(4, difficulty, 7);
            let mut plies = 0;
            while let Turn::ToMove(side) = game.board().turn() {
                if plies >= 64 {
                    break;
                }
                if side == HUMAN_SIDE {
                    let pick = crate::ai::scored_moves(game.board(), HUMAN_SIDE)[0];
                    game.place(pick.row as u8, pick.col as u8).expect("legal");
                } else {
                    game.engine_move().expect("engine move");
                }
                plies += 1;

                let state = game.to_game_state();
                assert_eq!(
                    state.light_count + state.dark_count + state.squares_remaining,
                    16
                );
            }
            assert!(
                game.to_game_result().is_some(),
                "{difficulty:?} game never finished"
            );
        }
    }
}
