use super::Strategy;
use crate::core::{Board, Coord, StrategyError};

/// Search-based player. Reports [`StrategyError::NotImplemented`] instead of
/// quietly falling back to a weaker strategy.
// TODO: alpha-beta over Board::play/undo_last_move with a node budget.
#[derive(Debug, Default)]
pub struct CalculatingAI;

impl CalculatingAI {
    pub fn new() -> Self {
        CalculatingAI
    }
}

impl Strategy for CalculatingAI {
    fn suggest_move(&mut self, _board: &Board) -> Result<Coord, StrategyError> {
        Err(StrategyError::NotImplemented {
            strategy: "calculating",
        })
    }

    fn name(&self) -> &str {
        "calculating"
    }
}
