pub mod moves;
pub mod search;
pub mod strategy;

pub use moves::{ScoredMove, scored_moves};
pub use strategy::choose_move;
