use crate::core::{Board, Coord};
use crate::player::ai::Strategy;
use crate::player::PlayerController;
use anyhow::Context;

/// Puts a [`Strategy`] in a seat.
pub struct AiPlayer {
    name: String,
    strategy: Box<dyn Strategy>,
}

impl AiPlayer {
    pub fn new(name: &str, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.to_string(),
            strategy,
        }
    }
}

impl PlayerController for AiPlayer {
    fn choose_move(&mut self, board: &Board) -> anyhow::Result<Option<Coord>> {
        let mv = self
            .strategy
            .suggest_move(board)
            .with_context(|| format!("{} AI failed to move", self.strategy.name()))?;
        Ok(Some(mv))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        false
    }
}
