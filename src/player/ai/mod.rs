pub mod calculating;
pub mod greedy;
pub mod random;

pub use calculating::CalculatingAI;
pub use greedy::GreedyAI;
pub use random::RandomAI;

use crate::core::{Board, Coord, StrategyError};
use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Something that can pick a move for the side to move.
///
/// Implementations never mutate the board they are given.
pub trait Strategy: Send {
    fn suggest_move(&mut self, board: &Board) -> Result<Coord, StrategyError>;

    fn name(&self) -> &str;
}

/// The strategies this crate ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiKind {
    /// Uniformly random legal moves.
    #[value(alias = "monkey")]
    Random,
    /// Best immediate score, no look-ahead.
    Greedy,
    /// Deep search (not available yet).
    Calculating,
}

impl AiKind {
    /// Builds the strategy, seeded for reproducible play when `seed` is given.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Strategy> {
        let rng = seeded_rng(seed);
        match self {
            AiKind::Random => Box::new(RandomAI::with_rng(rng)),
            AiKind::Greedy => Box::new(GreedyAI::with_rng(rng)),
            AiKind::Calculating => Box::new(CalculatingAI::new()),
        }
    }
}

pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, TileLayout, REFERENCE_PLACEMENTS};
    use crate::logic::{evaluate, legal_moves};
    use std::sync::Arc;

    fn opened_board() -> Board {
        let mut board = Board::new(&REFERENCE_PLACEMENTS).unwrap();
        board.play(Coord::new(4, 5), Color::Red).unwrap();
        board.play(Coord::new(4, 0), Color::Black).unwrap();
        board
    }

    #[test]
    fn test_random_picks_legal_moves() {
        let board = opened_board();
        let legal = legal_moves(&board);
        let mut ai = AiKind::Random.build(Some(3));
        for _ in 0..20 {
            assert!(legal.contains(&ai.suggest_move(&board).unwrap()));
        }
    }

    #[test]
    fn test_greedy_maximizes_score_diff() {
        let board = opened_board();
        let mover = board.to_move();
        let best = legal_moves(&board)
            .into_iter()
            .map(|mv| {
                let mut b = board.clone();
                b.play(mv, mover).unwrap();
                evaluate(&b, mover)
            })
            .max()
            .unwrap();

        let (value, candidates) = GreedyAI::best_moves(&board).unwrap();
        assert_eq!(value, best);
        let mut ai = AiKind::Greedy.build(Some(1));
        let choice = ai.suggest_move(&board).unwrap();
        assert!(candidates.contains(&choice));
    }

    #[test]
    fn test_strategies_never_touch_the_board() {
        let board = opened_board();
        let before = board.clone();
        for kind in [AiKind::Random, AiKind::Greedy] {
            kind.build(Some(9)).suggest_move(&board).unwrap();
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_seeded_strategies_repeat() {
        let board = opened_board();
        let picks = |seed| {
            let mut ai = AiKind::Random.build(Some(seed));
            (0..10)
                .map(|_| ai.suggest_move(&board).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(5), picks(5));
    }

    #[test]
    fn test_no_moves_and_unimplemented() {
        let layout = Arc::new(TileLayout::reference().unwrap());
        let mut board = Board::with_layout(layout, 1);
        board.play(Coord::new(4, 5), Color::Red).unwrap();
        board.play(Coord::new(4, 0), Color::Black).unwrap();

        for kind in [AiKind::Random, AiKind::Greedy] {
            assert_eq!(
                kind.build(None).suggest_move(&board),
                Err(StrategyError::NoLegalMoves)
            );
        }
        assert_eq!(
            AiKind::Calculating.build(None).suggest_move(&opened_board()),
            Err(StrategyError::NotImplemented {
                strategy: "calculating"
            })
        );
    }
}
