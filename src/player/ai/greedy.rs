use super::Strategy;
use crate::core::{Board, Coord, StrategyError};
use crate::logic::{evaluate, legal_moves};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Takes the move that maximizes the immediate score differential, with no
/// look-ahead. Ties are broken at random.
pub struct GreedyAI {
    rng: StdRng,
}

impl GreedyAI {
    pub fn new() -> Self {
        Self::with_rng(super::seeded_rng(None))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        GreedyAI { rng }
    }

    /// Moves sharing the best one-ply score, in legal-move order.
    pub fn best_moves(board: &Board) -> Result<(i32, Vec<Coord>), StrategyError> {
        best_of(board, legal_moves(board))
    }
}

fn best_of(board: &Board, moves: Vec<Coord>) -> Result<(i32, Vec<Coord>), StrategyError> {
    if moves.is_empty() {
        return Err(StrategyError::NoLegalMoves);
    }

    let mover = board.to_move();
    let mut scratch = board.clone();
    let mut best_value = i32::MIN;
    let mut best_moves = Vec::new();

    for mv in moves {
        scratch
            .play(mv, mover)
            .map_err(|source| StrategyError::Rejected { source })?;
        let value = evaluate(&scratch, mover);
        scratch.undo_last_move();

        if value > best_value {
            best_value = value;
            best_moves.clear();
            best_moves.push(mv);
        } else if value == best_value {
            best_moves.push(mv);
        }
    }

    Ok((best_value, best_moves))
}

impl Default for GreedyAI {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for GreedyAI {
    fn suggest_move(&mut self, board: &Board) -> Result<Coord, StrategyError> {
        let (value, candidates) = Self::best_moves(board)?;
        let choice = candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or(StrategyError::NoLegalMoves)?;
        debug!(value, ties = candidates.len(), %choice, "greedy choice");
        Ok(choice)
    }

    fn name(&self) -> &str {
        "greedy"
    }
}
