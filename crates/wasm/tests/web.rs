use blokie_wasm::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn bitset(fields: [u32; 3]) -> JsValue {
    serde_wasm_bindgen::to_value(&fields).unwrap()
}

#[derive(Serialize)]
struct TestStateIn {
    board: [u32; 3],
    previous_piece_placement: [u32; 3],
    previous_piece: [u32; 3],
    previous_move_was_clear: bool,
    score: u32,
}

#[derive(Deserialize)]
struct TestState {
    board: [u32; 3],
    score: u32,
    previous_move_was_clear: bool,
}

#[derive(Deserialize)]
struct TestResult {
    evaluation: i32,
    new_game_states: Vec<TestState>,
}

#[wasm_bindgen_test]
fn test_new_game_is_empty() {
    let game: TestState = serde_wasm_bindgen::from_value(new_game().unwrap()).unwrap();
    assert_eq!(game.board, [0, 0, 0]);
    assert_eq!(game.score, 0);
    assert!(!is_over(new_game().unwrap()).unwrap());
}

#[wasm_bindgen_test]
fn test_toggle_and_inspect() {
    let board = toggle_square(empty_piece().unwrap(), 1, 2).unwrap();
    let fields: [u32; 3] = serde_wasm_bindgen::from_value(board.clone()).unwrap();
    assert_eq!(fields, [1 << 11, 0, 0]);
    assert!(at(board.clone(), 1, 2).unwrap());
    assert!(!is_empty(board).unwrap());
    assert!(is_empty(empty_piece().unwrap()).unwrap());
}

#[wasm_bindgen_test]
fn test_off_board_cell_is_error() {
    assert!(at(bitset([0, 0, 0]), 9, 0).is_err());
    assert!(toggle_square(bitset([0, 0, 0]), 0, 9).is_err());
}

#[wasm_bindgen_test]
fn test_malformed_board_is_error() {
    assert!(is_empty(bitset([1 << 27, 0, 0])).is_err());
    assert!(is_empty(JsValue::from_str("board")).is_err());
}

#[wasm_bindgen_test]
fn test_random_piece_set_has_three_pieces() {
    let pieces: Vec<[u32; 3]> = serde_wasm_bindgen::from_value(random_piece_set().unwrap()).unwrap();
    assert_eq!(pieces.len(), 3);
    assert!(pieces.iter().all(|p| *p != [0, 0, 0]));
}

#[wasm_bindgen_test]
fn test_ai_make_move_clears_row() {
    // row 0 missing its first cell
    let game = TestStateIn {
        board: [510, 0, 0],
        previous_piece_placement: [0, 0, 0],
        previous_piece: [0, 0, 0],
        previous_move_was_clear: false,
        score: 5,
    };
    let state = serde_wasm_bindgen::to_value(&game).unwrap();
    let pieces = serde_wasm_bindgen::to_value(&[[1u32, 0, 0], [0, 0, 0], [0, 0, 0]]).unwrap();

    let result: TestResult =
        serde_wasm_bindgen::from_value(ai_make_move(state, pieces).unwrap()).unwrap();
    assert_eq!(result.evaluation, 0);
    assert_eq!(result.new_game_states.len(), 3);
    let last = &result.new_game_states[2];
    assert_eq!(last.board, [0, 0, 0]);
    assert_eq!(last.score, 5 + 18);
    assert!(last.previous_move_was_clear);
}

#[wasm_bindgen_test]
fn test_auto_player_steps() {
    let mut player = JsAutoPlayer::new(Some(17));
    assert_eq!(player.step().unwrap(), "dealt");
    assert_eq!(player.step().unwrap(), "planned");
    assert_eq!(player.step().unwrap(), "applied");
    assert!(player.score() > 0);
    let hand: Vec<[u32; 3]> = serde_wasm_bindgen::from_value(player.hand().unwrap()).unwrap();
    assert_eq!(hand.iter().filter(|p| **p == [0, 0, 0]).count(), 1);
}
