use serde::Serialize;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Light,
    Dark,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Side::Light => Cell::Light,
            Side::Dark => Cell::Dark,
        }
    }

    /// Boundary tag: 0 = light, 1 = dark.
    pub fn tag(self) -> u8 {
        match self {
            Side::Light => 0,
            Side::Dark => 1,
        }
    }
}

/// State of a single grid cell.
///
/// Deliberately distinct from [`Turn`]: an empty cell and a finished game
/// are different facts and carry different types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Light,
    Dark,
    Empty,
}

impl Cell {
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Light => Some(Side::Light),
            Cell::Dark => Some(Side::Dark),
            Cell::Empty => None,
        }
    }

    /// Swaps light and dark; an empty cell is left as is.
    pub fn flipped(self) -> Cell {
        match self {
            Cell::Light => Cell::Dark,
            Cell::Dark => Cell::Light,
            Cell::Empty => Cell::Empty,
        }
    }

    /// Boundary tag: 0 = light, 1 = dark, 2 = empty.
    pub fn tag(self) -> u8 {
        match self {
            Cell::Light => 0,
            Cell::Dark => 1,
            Cell::Empty => 2,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Cell> {
        match tag {
            0 => Some(Cell::Light),
            1 => Some(Cell::Dark),
            2 => Some(Cell::Empty),
            _ => None,
        }
    }
}

/// Whose turn it is, or the end of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    ToMove(Side),
    Finished,
}

impl Turn {
    /// Boundary tag: 0 = light to move, 1 = dark to move, 2 = finished.
    pub fn tag(self) -> u8 {
        match self {
            Turn::ToMove(side) => side.tag(),
            Turn::Finished => 2,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Turn> {
        match tag {
            0 => Some(Turn::ToMove(Side::Light)),
            1 => Some(Turn::ToMove(Side::Dark)),
            2 => Some(Turn::Finished),
            _ => None,
        }
    }
}

/// Final standing of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Side),
    Draw,
}

/// Engine difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Weak,
    Novice,
    Moderate,
    Strong,
}

impl Difficulty {
    pub fn from_level(level: u8) -> Option<Difficulty> {
        match level {
            1 => Some(Difficulty::Weak),
            2 => Some(Difficulty::Novice),
            3 => Some(Difficulty::Moderate),
            4 => Some(Difficulty::Strong),
            _ => None,
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

/// Public game state returned to the orchestration layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub size: u8,
    /// Row-major cell tags: 0 = light, 1 = dark, 2 = empty.
    pub board: Vec<u8>,
    /// Turn tag: 0 = light to move, 1 = dark to move, 2 = finished.
    pub turn: u8,
    pub light_count: u32,
    pub dark_count: u32,
    pub squares_remaining: u32,
    pub is_game_over: bool,
    /// Contract:
    /// - Normal move: the cells flipped by the previous placement.
    /// - Before the first move: an empty list.
    pub flipped: Vec<Position>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// 0 = light, 1 = dark, 2 = draw.
    pub winner: u8,
    pub light_count: u32,
    pub dark_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_opponent_round_trips() {
        assert_eq!(Side::Light.opponent(), Side::Dark);
        assert_eq!(Side::Dark.opponent().opponent(), Side::Dark);
    }

    #[test]
    fn cell_tags_round_trip() {
        for cell in [Cell::Light, Cell::Dark, Cell::Empty] {
            assert_eq!(Cell::from_tag(cell.tag()), Some(cell));
        }
        assert_eq!(Cell::from_tag(3), None);
    }

    #[test]
    fn turn_tags_round_trip() {
        for turn in [
            Turn::ToMove(Side::Light),
            Turn::ToMove(Side::Dark),
            Turn::Finished,
        ] {
            assert_eq!(Turn::from_tag(turn.tag()), Some(turn));
        }
        assert_eq!(Turn::from_tag(9), None);
    }

    #[test]
    fn difficulty_levels_map_one_to_four() {
        assert_eq!(Difficulty::from_level(1), Some(Difficulty::Weak));
        assert_eq!(Difficulty::from_level(4), Some(Difficulty::Strong));
        assert_eq!(Difficulty::from_level(0), None);
        assert_eq!(Difficulty::from_level(5), None);
    }
}
