//! Incremental per-tile majority accounting.
//!
//! Every recorded marble hands back a [`MajorityShift`]; unwinding that exact
//! value is the only way to take a marble back out of the ledger, so undo
//! never re-derives which total moved.

use super::tile::Tile;
use super::types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transfer {
    /// The tile became majority-held by `color`.
    Gained { color: Color, points: u32 },
    /// `color` lost its majority and the tile became tied.
    Lost { color: Color, points: u32 },
}

/// Inverse delta of one recorded marble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MajorityShift {
    tile: usize,
    color: Color,
    transfer: Option<Transfer>,
}

impl MajorityShift {
    pub fn tile(&self) -> usize {
        self.tile
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreLedger {
    /// Red marbles minus black marbles, per tile.
    majorities: Vec<i32>,
    red: u32,
    black: u32,
}

impl ScoreLedger {
    pub fn new(num_tiles: usize) -> Self {
        ScoreLedger {
            majorities: vec![0; num_tiles],
            red: 0,
            black: 0,
        }
    }

    /// Counts a `color` marble on `tile`. Only the move that first gives a
    /// color the majority scores the tile, and breaking a one-marble lead
    /// takes the tile away from the previous holder.
    pub fn record(&mut self, tile: &Tile, color: Color) -> MajorityShift {
        let prev = self.majorities[tile.index];
        let points = tile.points();
        let transfer = if prev == 0 {
            Some(Transfer::Gained { color, points })
        } else if prev == -color.step() {
            Some(Transfer::Lost {
                color: color.opponent(),
                points,
            })
        } else {
            None
        };

        match transfer {
            Some(Transfer::Gained { color, points }) => *self.total_mut(color) += points,
            Some(Transfer::Lost { color, points }) => *self.total_mut(color) -= points,
            None => {}
        }
        self.majorities[tile.index] += color.step();

        MajorityShift {
            tile: tile.index,
            color,
            transfer,
        }
    }

    /// Takes back the marble `shift` was recorded for.
    pub fn unwind(&mut self, shift: MajorityShift) {
        self.majorities[shift.tile] -= shift.color.step();
        match shift.transfer {
            Some(Transfer::Gained { color, points }) => *self.total_mut(color) -= points,
            Some(Transfer::Lost { color, points }) => *self.total_mut(color) += points,
            None => {}
        }
    }

    pub fn score(&self, color: Color) -> u32 {
        match color {
            Color::Red => self.red,
            Color::Black => self.black,
        }
    }

    /// Current majority counter of a tile.
    pub fn majority(&self, tile: usize) -> i32 {
        self.majorities[tile]
    }

    /// Holder of the majority on `tile`, if any.
    pub fn holder(&self, tile: usize) -> Option<Color> {
        match self.majorities[tile] {
            m if m > 0 => Some(Color::Red),
            m if m < 0 => Some(Color::Black),
            _ => None,
        }
    }

    /// Full recomputation of (red, black) from the counters.
    pub fn recount(&self, tiles: &[Tile]) -> (u32, u32) {
        tiles
            .iter()
            .fold((0, 0), |(red, black), tile| match self.holder(tile.index) {
                Some(Color::Red) => (red + tile.points(), black),
                Some(Color::Black) => (red, black + tile.points()),
                None => (red, black),
            })
    }

    fn total_mut(&mut self, color: Color) -> &mut u32 {
        match color {
            Color::Red => &mut self.red,
            Color::Black => &mut self.black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tile::{TilePlacement, TileSize};

    fn four() -> Tile {
        Tile::new(0, TileSize::Four, TilePlacement::portrait(0, 0))
    }

    #[test]
    fn test_first_marble_scores_the_tile() {
        let mut ledger = ScoreLedger::new(1);
        ledger.record(&four(), Color::Red);
        assert_eq!(ledger.score(Color::Red), 4);
        assert_eq!(ledger.score(Color::Black), 0);
    }

    #[test]
    fn test_reinforcing_does_not_rescore() {
        let mut ledger = ScoreLedger::new(1);
        ledger.record(&four(), Color::Red);
        ledger.record(&four(), Color::Red);
        assert_eq!(ledger.score(Color::Red), 4);
        assert_eq!(ledger.majority(0), 2);
    }

    #[test]
    fn test_tie_then_flip() {
        let tile = four();
        let mut ledger = ScoreLedger::new(1);
        ledger.record(&tile, Color::Red);
        ledger.record(&tile, Color::Black);
        // Tied: nobody holds it.
        assert_eq!((ledger.score(Color::Red), ledger.score(Color::Black)), (0, 0));
        ledger.record(&tile, Color::Black);
        assert_eq!((ledger.score(Color::Red), ledger.score(Color::Black)), (0, 4));
        assert_eq!(ledger.holder(0), Some(Color::Black));
    }

    #[test]
    fn test_unwind_restores_everything() {
        let tile = four();
        let mut ledger = ScoreLedger::new(1);
        let fresh = ledger.clone();
        let shifts: Vec<MajorityShift> = [Color::Red, Color::Black, Color::Black, Color::Red]
            .into_iter()
            .map(|c| ledger.record(&tile, c))
            .collect();
        for shift in shifts.into_iter().rev() {
            ledger.unwind(shift);
        }
        assert_eq!(ledger, fresh);
    }

    #[test]
    fn test_recount_agrees() {
        let tiles = [
            Tile::new(0, TileSize::Six, TilePlacement::portrait(0, 0)),
            Tile::new(1, TileSize::Two, TilePlacement::portrait(0, 2)),
        ];
        let mut ledger = ScoreLedger::new(2);
        ledger.record(&tiles[0], Color::Red);
        ledger.record(&tiles[1], Color::Black);
        ledger.record(&tiles[0], Color::Black);
        ledger.record(&tiles[0], Color::Black);
        assert_eq!(
            ledger.recount(&tiles),
            (ledger.score(Color::Red), ledger.score(Color::Black))
        );
        assert_eq!(ledger.recount(&tiles), (0, 8));
    }
}
