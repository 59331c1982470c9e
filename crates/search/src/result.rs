use blokie_core::{Bitset81, GameState};
use serde::{Deserialize, Serialize};

/// Outcome of planning one hand: the heuristic value of the final board and
/// the state after each of the three placements, in play order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub evaluation: i32,
    pub new_game_states: [GameState; 3],
}

impl SearchResult {
    /// Result for a hand that cannot be played out: three full boards, so
    /// any driver checking `is_over` stops.
    pub fn game_over(score: u32) -> Self {
        let state = GameState {
            board: Bitset81::FULL,
            score,
            ..GameState::default()
        };
        Self {
            evaluation: i32::MAX,
            new_game_states: [state; 3],
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.new_game_states.iter().any(GameState::is_over)
    }

    /// State after the whole hand has been played.
    pub fn final_state(&self) -> GameState {
        self.new_game_states[2]
    }
}
