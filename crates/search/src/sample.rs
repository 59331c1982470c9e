//! Self-play runs used to compare planners and time the search.

use blokie_core::GameState;
use blokie_engine::random_piece_set;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::planner::Planner;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessSample {
    pub score: u32,
    pub num_moves: u32,
}

/// Play one game from an empty board to the end, a random hand per move.
pub fn fitness_sample<R: Rng + ?Sized>(
    planner: &Planner,
    rng: &mut R,
) -> Result<FitnessSample, SearchError> {
    let mut game = GameState::new();
    let mut num_moves = 0;
    while !game.is_over() {
        num_moves += 1;
        game = planner.ai_make_move(&game, random_piece_set(rng))?.final_state();
    }
    debug!("game over after {} hands with score {}", num_moves, game.score);
    Ok(FitnessSample {
        score: game.score,
        num_moves,
    })
}

/// Plan `moves` hands, starting a new game whenever one ends. Returns the
/// number of games that ended.
pub fn performance_sample<R: Rng + ?Sized>(
    planner: &Planner,
    rng: &mut R,
    moves: usize,
) -> Result<usize, SearchError> {
    let mut game = GameState::new();
    let mut games_over = 0;
    for _ in 0..moves {
        game = planner.ai_make_move(&game, random_piece_set(rng))?.final_state();
        if game.is_over() {
            games_over += 1;
            game = GameState::new();
        }
    }
    Ok(games_over)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_performance_sample_runs() {
        let mut rng = StdRng::seed_from_u64(1);
        let ended = performance_sample(&Planner::default(), &mut rng, 5).unwrap();
        assert!(ended <= 5);
    }

    #[test]
    fn test_performance_sample_zero_moves() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(performance_sample(&Planner::default(), &mut rng, 0).unwrap(), 0);
    }
}
