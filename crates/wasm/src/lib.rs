//! blokie-wasm - WebAssembly entry points for the browser UI and its worker.
//!
//! Boards and pieces cross the boundary as `[u32, u32, u32]` arrays, game
//! states and search results as plain objects.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use blokie_core::{Bitset81, GameState, Hand};
use blokie_engine::random_centered_piece_set;
use blokie_search::{fitness_sample, AutoPlayer, Planner, Step};

#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn bitset_from_js(value: JsValue) -> Result<Bitset81, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn state_from_js(value: JsValue) -> Result<GameState, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn check_cell(row: usize, col: usize) -> Result<(), JsError> {
    if row >= Bitset81::SIZE || col >= Bitset81::SIZE {
        return Err(JsError::new(&format!("cell ({row}, {col}) is off the board")));
    }
    Ok(())
}

#[wasm_bindgen(js_name = newGame)]
pub fn new_game() -> Result<JsValue, JsError> {
    to_js(&blokie_search::new_game())
}

/// Three random pieces, centered for display.
#[wasm_bindgen(js_name = randomPieceSet)]
pub fn random_piece_set() -> Result<JsValue, JsError> {
    to_js(&random_centered_piece_set(&mut rand::thread_rng()))
}

#[wasm_bindgen(js_name = emptyPiece)]
pub fn empty_piece() -> Result<JsValue, JsError> {
    to_js(&Bitset81::EMPTY)
}

/// Plan a whole hand. Resolves to `{ evaluation, new_game_states }`.
#[wasm_bindgen(js_name = aiMakeMove)]
pub fn ai_make_move(state: JsValue, pieces: JsValue) -> Result<JsValue, JsError> {
    let game = state_from_js(state)?;
    let hand: Hand =
        serde_wasm_bindgen::from_value(pieces).map_err(|e| JsError::new(&e.to_string()))?;
    let result = blokie_search::ai_make_move(&game, hand)?;
    to_js(&result)
}

#[wasm_bindgen]
pub fn at(bb: JsValue, row: usize, col: usize) -> Result<bool, JsError> {
    check_cell(row, col)?;
    Ok(bitset_from_js(bb)?.at(row, col))
}

#[wasm_bindgen(js_name = isOver)]
pub fn is_over(state: JsValue) -> Result<bool, JsError> {
    Ok(state_from_js(state)?.is_over())
}

#[wasm_bindgen(js_name = toggleSquare)]
pub fn toggle_square(bb: JsValue, row: usize, col: usize) -> Result<JsValue, JsError> {
    check_cell(row, col)?;
    to_js(&blokie_search::toggle_square(bitset_from_js(bb)?, row, col))
}

#[wasm_bindgen(js_name = isEmpty)]
pub fn is_empty(bb: JsValue) -> Result<bool, JsError> {
    Ok(bitset_from_js(bb)?.is_empty())
}

/// Play a full game with random hands. Resolves to `{ score, num_moves }`.
#[wasm_bindgen(js_name = fitnessSample)]
pub fn js_fitness_sample() -> Result<JsValue, JsError> {
    let sample = fitness_sample(&Planner::default(), &mut rand::thread_rng())?;
    to_js(&sample)
}

/// Worker-side game loop. Each `step` does one unit of work so the worker
/// can post the current game back between steps.
#[wasm_bindgen]
pub struct JsAutoPlayer {
    inner: AutoPlayer,
    rng: StdRng,
}

#[wasm_bindgen]
impl JsAutoPlayer {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            inner: AutoPlayer::default(),
            rng,
        }
    }

    /// One of `"dealt"`, `"planned"`, `"applied"` or `"over"`.
    pub fn step(&mut self) -> Result<String, JsError> {
        let step = self.inner.step(&mut self.rng)?;
        Ok(match step {
            Step::Dealt => "dealt",
            Step::Planned => "planned",
            Step::Applied => "applied",
            Step::Over => "over",
        }
        .to_string())
    }

    #[wasm_bindgen(getter)]
    pub fn game(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.game)
    }

    #[wasm_bindgen(getter)]
    pub fn previous(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.previous)
    }

    #[wasm_bindgen(getter)]
    pub fn hand(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.hand)
    }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 {
        self.inner.game.score
    }
}
