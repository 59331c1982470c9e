//! Hand-by-hand auto play: deal, plan, then apply one placement per step.

use std::collections::VecDeque;

use blokie_core::{Bitset81, GameState, Hand};
use blokie_engine::random_centered_piece_set;
use log::warn;
use rand::Rng;

use crate::error::SearchError;
use crate::planner::Planner;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// A fresh hand was dealt.
    Dealt,
    /// The hand was planned; its three states are queued.
    Planned,
    /// One queued state became the current game.
    Applied,
    /// The next queued state is a full board.
    Over,
}

#[derive(Clone, Debug)]
pub struct AutoPlayer {
    pub game: GameState,
    pub previous: GameState,
    pub hand: Hand,
    queued: VecDeque<GameState>,
    planner: Planner,
}

impl AutoPlayer {
    pub fn new(planner: Planner) -> Self {
        Self {
            game: GameState::new(),
            previous: GameState::new(),
            hand: Hand::EMPTY,
            queued: VecDeque::with_capacity(3),
            planner,
        }
    }

    pub fn queued(&self) -> impl Iterator<Item = &GameState> {
        self.queued.iter()
    }

    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Step, SearchError> {
        if self.hand.is_exhausted() {
            self.hand = random_centered_piece_set(rng);
            return Ok(Step::Dealt);
        }

        let Some(&next) = self.queued.front() else {
            let result = self.planner.ai_make_move(&self.game, self.hand)?;
            self.queued.extend(result.new_game_states);
            self.game.previous_piece_placement = Bitset81::EMPTY;
            return Ok(Step::Planned);
        };
        if next.is_over() {
            return Ok(Step::Over);
        }

        self.queued.pop_front();
        if self.hand.consume(next.previous_piece).is_none() && next.previous_piece.any() {
            warn!("played piece not in hand: {:?}", next.previous_piece);
        }
        self.previous = self.game;
        self.game = next;
        Ok(Step::Applied)
    }

    /// Step until the game ends. Returns the final game.
    pub fn run_to_end<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<GameState, SearchError> {
        while self.step(rng)? != Step::Over {}
        Ok(self.game)
    }
}

impl Default for AutoPlayer {
    fn default() -> Self {
        Self::new(Planner::default())
    }
}
