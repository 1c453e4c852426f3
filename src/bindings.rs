//! WASM boundary: a single game session behind a global slot, with all
//! state crossing as serde-serialized snapshots.

use std::sync::Mutex;

use once_cell::sync::Lazy;
use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::game::GameInstance;
use crate::types::{Difficulty, Turn};

static SESSION: Lazy<Mutex<Option<GameInstance>>> = Lazy::new(|| Mutex::new(None));

/// Starts a fresh game. `level` is 1..=4 (weak..strong); `seed` fixes the
/// engine's random sampling so replays are reproducible.
#[wasm_bindgen]
pub fn new_game(size: u8, level: u8, seed: u64) -> Result<JsValue, JsValue> {
    let difficulty = parse_level(level)?;
    if size < 4 || size % 2 != 0 {
        return Err(JsValue::from_str("board size must be even and at least 4"));
    }

    let game = GameInstance::with_difficulty(size as usize, difficulty, seed);
    let state = game.to_game_state();
    store_session(game)?;
    to_js(&state)
}

/// Resumes a game from a serialized grid and an externally tracked turn tag
/// (0 = light to move, 1 = dark to move, 2 = finished). The turn is taken as
/// given, never recomputed from the grid.
#[wasm_bindgen]
pub fn load_game(board: &[u8], turn: u8, level: u8, seed: u64) -> Result<JsValue, JsValue> {
    let difficulty = parse_level(level)?;
    let turn = Turn::from_tag(turn).ok_or_else(|| JsValue::from_str("unknown turn tag"))?;
    let board = Board::from_tags(board, turn).ok_or_else(|| JsValue::from_str("malformed board grid"))?;

    let game = GameInstance::from_board(
        board,
        Box::new(crate::game::TieredSelector::seeded(difficulty, seed)),
    );
    let state = game.to_game_state();
    store_session(game)?;
    to_js(&state)
}

/// Applies the human player's move and returns the updated state.
#[wasm_bindgen]
pub fn play_move(row: u8, col: u8) -> Result<JsValue, JsValue> {
    with_session(|game| {
        game.place(row, col)?;
        Ok(game.to_game_state())
    })
}

/// Lets the engine move and returns the updated state.
#[wasm_bindgen]
pub fn engine_move() -> Result<JsValue, JsValue> {
    with_session(|game| {
        game.engine_move()?;
        Ok(game.to_game_state())
    })
}

/// Snapshot of the current session.
#[wasm_bindgen]
pub fn game_state() -> Result<JsValue, JsValue> {
    with_session(|game| Ok(game.to_game_state()))
}

/// Final result of the current session; an error while the game is live.
#[wasm_bindgen]
pub fn game_result() -> Result<JsValue, JsValue> {
    with_session(|game| {
        game.to_game_result()
            .ok_or_else(|| "game is not over yet".to_string())
    })
}

fn parse_level(level: u8) -> Result<Difficulty, JsValue> {
    Difficulty::from_level(level).ok_or_else(|| JsValue::from_str("unknown difficulty level"))
}

fn store_session(game: GameInstance) -> Result<(), JsValue> {
    let mut slot = lock_session()?;
    *slot = Some(game);
    Ok(())
}

fn with_session<T: serde::Serialize>(
    f: impl FnOnce(&mut GameInstance) -> Result<T, String>,
) -> Result<JsValue, JsValue> {
    let mut slot = lock_session()?;
    let game = slot
        .as_mut()
        .ok_or_else(|| JsValue::from_str("no game in progress"))?;
    let value = f(game).map_err(|e| JsValue::from_str(&e))?;
    to_js(&value)
}

fn lock_session() -> Result<std::sync::MutexGuard<'static, Option<GameInstance>>, JsValue> {
    SESSION
        .lock()
        .map_err(|_| JsValue::from_str("session lock poisoned"))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}
