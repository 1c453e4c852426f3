use log::info;

use crate::types::{Cell, GameOutcome, Side, Turn};

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Reversi board: an N×N grid of cells plus the turn state.
///
/// `Clone` is a plain value copy of the grid and turn, which is what the
/// lookahead search relies on for branch isolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    turn: Turn,
}

impl Board {
    /// Creates the initial position for an even board size:
    /// the NW–SE center diagonal is light, the NE–SW diagonal dark.
    /// Light moves first.
    pub fn new(size: usize) -> Self {
        debug_assert!(size >= 4 && size % 2 == 0, "board size must be even, >= 4");

        let mut cells = vec![Cell::Empty; size * size];
        let half = size / 2;
        cells[(half - 1) * size + half - 1] = Cell::Light;
        cells[half * size + half] = Cell::Light;
        cells[(half - 1) * size + half] = Cell::Dark;
        cells[half * size + half - 1] = Cell::Dark;

        Self {
            size,
            cells,
            turn: Turn::ToMove(Side::Light),
        }
    }

    /// Rebuilds a board from a serialized grid and an externally tracked
    /// turn. The turn is taken as given, never recomputed; keeping it
    /// consistent with the grid is the caller's contract.
    pub fn from_cells(cells: Vec<Cell>, turn: Turn) -> Self {
        let size = cells.len().isqrt();
        debug_assert_eq!(size * size, cells.len(), "grid must be square");
        Self { size, cells, turn }
    }

    /// Decodes a row-major tag grid (0 = light, 1 = dark, 2 = empty).
    /// Returns `None` for a non-square or odd-sized grid or an unknown tag.
    pub fn from_tags(tags: &[u8], turn: Turn) -> Option<Self> {
        let size = tags.len().isqrt();
        if size * size != tags.len() || size < 2 || size % 2 != 0 {
            return None;
        }
        let cells = tags
            .iter()
            .map(|&tag| Cell::from_tag(tag))
            .collect::<Option<Vec<_>>>()?;
        Some(Self::from_cells(cells, turn))
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    /// Number of opposing pieces `side` would capture by playing (row, col)
    /// right now. Zero means the placement is not a capture move (out of
    /// range and occupied cells included). Pure probe: ignores whose turn it
    /// is, never mutates, never logs.
    pub fn capture_score(&self, row: usize, col: usize, side: Side) -> usize {
        self.capture_cells(row, col, side).len()
    }

    /// Whether `side` has at least one legal capture anywhere on the grid.
    /// Pure query; turn advancement uses this for both sides.
    pub fn can_move(&self, side: Side) -> bool {
        for row in 0..self.size {
            for col in 0..self.size {
                if self.has_capture(row, col, side) {
                    return true;
                }
            }
        }
        false
    }

    /// Every cell `side` would flip by playing (row, col). The eight rays
    /// from the candidate are disjoint, so the union needs no dedup.
    pub fn capture_cells(&self, row: usize, col: usize, side: Side) -> Vec<(usize, usize)> {
        if row >= self.size || col >= self.size || self.cell(row, col) != Cell::Empty {
            return Vec::new();
        }

        let opponent = side.opponent().cell();
        let own = side.cell();
        let mut flips = Vec::new();

        for (dr, dc) in DIRECTIONS {
            let mut r = row as i32 + dr;
            let mut c = col as i32 + dc;
            let mut run = Vec::new();

            while self.in_bounds(r, c) {
                let cell = self.cell(r as usize, c as usize);
                if cell == opponent {
                    run.push((r as usize, c as usize));
                } else {
                    if cell == own {
                        flips.append(&mut run);
                    }
                    break;
                }
                r += dr;
                c += dc;
            }
        }

        flips
    }

    /// Places a piece for `side` and flips everything it captures.
    /// Returns the captured count; 0 means the move was rejected (out of
    /// range, occupied, not `side`'s turn, or no captures) and the board is
    /// untouched.
    pub fn place(&mut self, row: usize, col: usize, side: Side) -> usize {
        if self.turn != Turn::ToMove(side) {
            info!("move r{row}c{col} rejected: not {side:?}'s turn");
            return 0;
        }

        let flips = self.capture_cells(row, col, side);
        if flips.is_empty() {
            info!("move r{row}c{col} rejected: no captures for {side:?}");
            return 0;
        }

        self.cells[row * self.size + col] = side.cell();
        for &(r, c) in &flips {
            let at = r * self.size + c;
            self.cells[at] = self.cells[at].flipped();
        }
        self.advance_turn(side);

        flips.len()
    }

    /// Turn state machine, run after every successful placement: the
    /// opponent moves if able, otherwise the mover goes again (forced extra
    /// turn), otherwise the game is over.
    fn advance_turn(&mut self, mover: Side) {
        let opponent = mover.opponent();
        self.turn = if self.can_move(opponent) {
            Turn::ToMove(opponent)
        } else if self.can_move(mover) {
            info!("{opponent:?} has no legal move; {mover:?} moves again");
            Turn::ToMove(mover)
        } else {
            info!("no legal moves left; game over");
            Turn::Finished
        };
    }

    pub fn count(&self, side: Side) -> usize {
        let cell = side.cell();
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Number of empty cells.
    pub fn squares_remaining(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Number of placements made since the initial position.
    pub fn moves_made(&self) -> usize {
        self.size * self.size - 4 - self.squares_remaining()
    }

    /// Final standing. `None` while the game is still live; the caller must
    /// not read a winner out of an unfinished board.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.turn != Turn::Finished {
            return None;
        }

        let light = self.count(Side::Light);
        let dark = self.count(Side::Dark);
        Some(if light > dark {
            GameOutcome::Win(Side::Light)
        } else if dark > light {
            GameOutcome::Win(Side::Dark)
        } else {
            GameOutcome::Draw
        })
    }

    /// Encodes the grid as row-major tags (0 = light, 1 = dark, 2 = empty).
    pub fn to_tags(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.tag()).collect()
    }

    fn has_capture(&self, row: usize, col: usize, side: Side) -> bool {
        if self.cell(row, col) != Cell::Empty {
            return false;
        }

        let opponent = side.opponent().cell();
        let own = side.cell();

        for (dr, dc) in DIRECTIONS {
            let mut r = row as i32 + dr;
            let mut c = col as i32 + dc;
            let mut seen_opponent = false;

            while self.in_bounds(r, c) {
                let cell = self.cell(r as usize, c as usize);
                if cell == opponent {
                    seen_opponent = true;
                } else {
                    if cell == own && seen_opponent {
                        return true;
                    }
                    break;
                }
                r += dr;
                c += dc;
            }
        }

        false
    }

    fn in_bounds(&self, row: i32, col: i32) -> bool {
        (0..self.size as i32).contains(&row) && (0..self.size as i32).contains(&col)
    }
}
