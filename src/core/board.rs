use super::error::{LayoutError, MoveError};
use super::layout::TileLayout;
use super::scoring::{MajorityShift, ScoreLedger};
use super::tile::{TilePlacement, MARBLES_PER_PLAYER};
use super::types::{Cell, Color, Coord};
use std::sync::Arc;
use tracing::{debug, instrument};

/// One applied move and the ledger delta that undoes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub coord: Coord,
    shift: MajorityShift,
}

impl Placement {
    pub fn color(&self) -> Color {
        self.shift.color()
    }

    pub fn tile(&self) -> usize {
        self.shift.tile()
    }
}

/// Full state of a Kulami game.
///
/// Cloning is cheap: the layout is shared and only the marble grid, the
/// history and the ledger are copied. Strategies rely on this to try moves
/// without touching the caller's board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    layout: Arc<TileLayout>,
    /// Marble per cell, row-major.
    marbles: Vec<Option<Color>>,
    history: Vec<Placement>,
    ledger: ScoreLedger,
    max_moves: usize,
}

impl Board {
    /// Empty board with the standard marble count.
    pub fn new(placements: &[TilePlacement]) -> Result<Self, LayoutError> {
        let layout = TileLayout::new(placements)?;
        Ok(Self::with_layout(Arc::new(layout), MARBLES_PER_PLAYER))
    }

    pub fn with_layout(layout: Arc<TileLayout>, marbles_per_player: usize) -> Self {
        Board {
            marbles: vec![None; layout.rows() * layout.cols()],
            history: Vec::new(),
            ledger: ScoreLedger::new(layout.tiles().len()),
            max_moves: marbles_per_player.saturating_mul(2),
            layout,
        }
    }

    pub fn layout(&self) -> &TileLayout {
        &self.layout
    }

    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    pub fn cols(&self) -> usize {
        self.layout.cols()
    }

    /// Hard ceiling on the number of moves in a game.
    pub fn max_moves(&self) -> usize {
        self.max_moves
    }

    pub fn cell(&self, coord: Coord) -> Cell {
        if self.layout.tile_at(coord).is_none() {
            return Cell::OutOfBounds;
        }
        match self.marbles[self.layout.index(coord)] {
            Some(color) => Cell::Marble(color),
            None => Cell::Empty,
        }
    }

    pub fn tile_at(&self, coord: Coord) -> Option<usize> {
        self.layout.tile_at(coord)
    }

    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<&Placement> {
        self.history.last()
    }

    /// The move before the last one.
    pub fn previous_move(&self) -> Option<&Placement> {
        self.history.iter().rev().nth(1)
    }

    /// Color expected to play next. Red opens.
    pub fn to_move(&self) -> Color {
        self.last_move()
            .map(|p| p.color().opponent())
            .unwrap_or(Color::Red)
    }

    pub fn score(&self, color: Color) -> u32 {
        self.ledger.score(color)
    }

    pub fn red_score(&self) -> u32 {
        self.ledger.score(Color::Red)
    }

    pub fn black_score(&self) -> u32 {
        self.ledger.score(Color::Black)
    }

    /// Own score minus the opponent's.
    pub fn score_diff(&self, color: Color) -> i32 {
        self.score(color) as i32 - self.score(color.opponent()) as i32
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// Places a `color` marble on `coord`, if legal. On error nothing changes.
    #[instrument(level = "trace", skip(self), fields(moves = self.history.len()))]
    pub fn play(&mut self, coord: Coord, color: Color) -> Result<(), MoveError> {
        crate::logic::check_move(self, coord, color)?;

        let tile_index = self.layout.tile_at(coord).ok_or(MoveError::OutOfBounds { coord })?;
        let tile = self.layout.tiles()[tile_index];
        let cell = self.layout.index(coord);
        let shift = self.ledger.record(&tile, color);
        self.marbles[cell] = Some(color);
        self.history.push(Placement { coord, shift });

        debug!(
            %coord,
            %color,
            tile = tile_index,
            red = self.red_score(),
            black = self.black_score(),
            "marble placed"
        );
        Ok(())
    }

    /// Takes back the last move. Does nothing on an empty board.
    pub fn undo_last_move(&mut self) {
        let Some(placement) = self.history.pop() else {
            return;
        };
        let cell = self.layout.index(placement.coord);
        self.marbles[cell] = None;
        self.ledger.unwind(placement.shift);
    }
}
