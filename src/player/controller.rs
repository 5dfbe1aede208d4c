use crate::core::{Board, Coord};

/// A seat at the table: picks the next move or resigns (`Ok(None)`).
pub trait PlayerController {
    fn choose_move(&mut self, board: &Board) -> anyhow::Result<Option<Coord>>;
    fn name(&self) -> &str;
    fn is_human(&self) -> bool;

    /// The board refused the last move this controller chose.
    fn reject(&mut self, _reason: &str) {}
}
