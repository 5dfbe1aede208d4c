use super::Strategy;
use crate::core::{Board, Coord, StrategyError};
use crate::logic::legal_moves;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Plays a uniformly random legal move.
pub struct RandomAI {
    rng: StdRng,
}

impl RandomAI {
    pub fn new() -> Self {
        Self::with_rng(super::seeded_rng(None))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        RandomAI { rng }
    }
}

impl Default for RandomAI {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomAI {
    fn suggest_move(&mut self, board: &Board) -> Result<Coord, StrategyError> {
        let moves = legal_moves(board);
        moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(StrategyError::NoLegalMoves)
    }

    fn name(&self) -> &str {
        "random"
    }
}
