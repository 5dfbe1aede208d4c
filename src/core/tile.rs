use super::types::Coord;
use serde::{Deserialize, Serialize};

/// Number of tiles in a Kulami set.
pub const NUM_TILES: usize = 17;

/// Marbles each player holds in a standard set.
pub const MARBLES_PER_PLAYER: usize = 28;

/// Tile size classes, indexed by tile number.
pub const TILE_SIZES: [TileSize; NUM_TILES] = [
    TileSize::Six,
    TileSize::Six,
    TileSize::Six,
    TileSize::Six,
    TileSize::Four,
    TileSize::Four,
    TileSize::Four,
    TileSize::Four,
    TileSize::Four,
    TileSize::Three,
    TileSize::Three,
    TileSize::Three,
    TileSize::Three,
    TileSize::Two,
    TileSize::Two,
    TileSize::Two,
    TileSize::Two,
];

/// Tile size class, by number of holes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileSize {
    Six,
    Four,
    Three,
    Two,
}

impl TileSize {
    /// Points the tile is worth to the majority holder.
    pub fn points(self) -> u32 {
        match self {
            TileSize::Six => 6,
            TileSize::Four => 4,
            TileSize::Three => 3,
            TileSize::Two => 2,
        }
    }

    /// Footprint as (rows, cols). Landscape puts the long axis along the row.
    pub fn footprint(self, landscape: bool) -> (usize, usize) {
        match (self, landscape) {
            (TileSize::Six, true) => (2, 3),
            (TileSize::Six, false) => (3, 2),
            (TileSize::Four, _) => (2, 2),
            (TileSize::Three, true) => (1, 3),
            (TileSize::Three, false) => (3, 1),
            (TileSize::Two, true) => (1, 2),
            (TileSize::Two, false) => (2, 1),
        }
    }
}

/// Where a tile sits: upper-left corner plus orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TilePlacement {
    pub anchor: Coord,
    #[serde(default)]
    pub landscape: bool,
}

impl TilePlacement {
    pub const fn portrait(row: usize, col: usize) -> Self {
        TilePlacement {
            anchor: Coord::new(row, col),
            landscape: false,
        }
    }

    pub const fn landscape(row: usize, col: usize) -> Self {
        TilePlacement {
            anchor: Coord::new(row, col),
            landscape: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub index: usize,
    pub size: TileSize,
    pub placement: TilePlacement,
}

impl Tile {
    pub fn new(index: usize, size: TileSize, placement: TilePlacement) -> Self {
        Tile {
            index,
            size,
            placement,
        }
    }

    /// Lower-right corner (inclusive), `None` if it does not fit in `usize`.
    pub fn end(&self) -> Option<Coord> {
        let (rows, cols) = self.size.footprint(self.placement.landscape);
        let anchor = self.placement.anchor;
        Some(Coord::new(
            anchor.row.checked_add(rows - 1)?,
            anchor.col.checked_add(cols - 1)?,
        ))
    }

    /// Cells covered by the tile, row-major. Empty when [`Tile::end`] overflows.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let start = self.placement.anchor;
        self.end().into_iter().flat_map(move |end| {
            (start.row..=end.row)
                .flat_map(move |row| (start.col..=end.col).map(move |col| Coord::new(row, col)))
        })
    }

    pub fn points(&self) -> u32 {
        self.size.points()
    }
}

/// The board used by the reference game.
pub const REFERENCE_PLACEMENTS: [TilePlacement; NUM_TILES] = [
    // 6
    TilePlacement::portrait(4, 0),
    TilePlacement::landscape(6, 2),
    TilePlacement::landscape(4, 3),
    TilePlacement::portrait(1, 6),
    // 4
    TilePlacement::portrait(0, 4),
    TilePlacement::portrait(2, 4),
    TilePlacement::portrait(2, 2),
    TilePlacement::portrait(4, 6),
    TilePlacement::portrait(7, 5),
    // 3
    TilePlacement::landscape(1, 1),
    TilePlacement::portrait(2, 8),
    TilePlacement::landscape(5, 8),
    TilePlacement::landscape(6, 5),
    // 2
    TilePlacement::portrait(4, 2),
    TilePlacement::landscape(4, 9),
    TilePlacement::portrait(2, 0),
    TilePlacement::portrait(2, 1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footprint_matches_size() {
        for size in [TileSize::Six, TileSize::Four, TileSize::Three, TileSize::Two] {
            for landscape in [false, true] {
                let (rows, cols) = size.footprint(landscape);
                assert_eq!((rows * cols) as u32, size.points());
            }
        }
    }

    #[test]
    fn test_landscape_six_cells() {
        let tile = Tile::new(1, TileSize::Six, TilePlacement::landscape(6, 2));
        assert_eq!(tile.end(), Some(Coord::new(7, 4)));
        let cells: Vec<Coord> = tile.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Coord::new(6, 2));
        assert_eq!(cells[3], Coord::new(7, 2));
    }

    #[test]
    fn test_reference_size_multiset() {
        let count = |s: TileSize| TILE_SIZES.iter().filter(|&&t| t == s).count();
        assert_eq!(count(TileSize::Six), 4);
        assert_eq!(count(TileSize::Four), 5);
        assert_eq!(count(TileSize::Three), 4);
        assert_eq!(count(TileSize::Two), 4);
    }
}
