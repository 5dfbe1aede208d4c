use super::error::LayoutError;
use super::tile::{Tile, TilePlacement, NUM_TILES, REFERENCE_PLACEMENTS, TILE_SIZES};
use super::types::Coord;
use tracing::{debug, instrument};

/// Largest grid side a layout may span.
pub const MAX_EXTENT: usize = 64;

/// Tiles and the grid they cover. Fixed for the whole game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayout {
    tiles: Vec<Tile>,
    rows: usize,
    cols: usize,
    /// Owning tile per cell, row-major.
    cells: Vec<Option<usize>>,
}

impl TileLayout {
    /// Builds the layout from one placement per tile, in tile-index order.
    #[instrument(skip(placements), fields(count = placements.len()))]
    pub fn new(placements: &[TilePlacement]) -> Result<Self, LayoutError> {
        if placements.len() != NUM_TILES {
            return Err(LayoutError::TileCount {
                expected: NUM_TILES,
                got: placements.len(),
            });
        }

        let tiles: Vec<Tile> = placements
            .iter()
            .zip(TILE_SIZES)
            .enumerate()
            .map(|(index, (&placement, size))| Tile::new(index, size, placement))
            .collect();

        let (mut last_row, mut last_col) = (0, 0);
        for tile in &tiles {
            let end = tile
                .end()
                .filter(|end| end.row < MAX_EXTENT && end.col < MAX_EXTENT)
                .ok_or(LayoutError::Extent {
                    tile: tile.index,
                    limit: MAX_EXTENT,
                })?;
            last_row = last_row.max(end.row);
            last_col = last_col.max(end.col);
        }
        let (rows, cols) = (last_row + 1, last_col + 1);

        let mut cells = vec![None; rows * cols];
        for tile in &tiles {
            for cell in tile.cells() {
                let slot = &mut cells[cell.row * cols + cell.col];
                if let Some(first) = *slot {
                    return Err(LayoutError::Overlap {
                        cell,
                        first,
                        second: tile.index,
                    });
                }
                *slot = Some(tile.index);
            }
        }

        debug!(rows, cols, "tile layout built");
        Ok(TileLayout {
            tiles,
            rows,
            cols,
            cells,
        })
    }

    /// The layout of the reference game.
    pub fn reference() -> Result<Self, LayoutError> {
        Self::new(&REFERENCE_PLACEMENTS)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Inside the grid extent (the cell may still be uncovered).
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Tile covering `coord`, `None` when uncovered or outside the grid.
    pub fn tile_at(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            self.cells[self.index(coord)]
        } else {
            None
        }
    }

    pub(crate) fn index(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_extent() {
        let layout = TileLayout::reference().unwrap();
        assert_eq!(layout.rows(), 9);
        assert_eq!(layout.cols(), 11);
        assert_eq!(layout.tile_at(Coord::new(0, 4)), Some(4));
        assert_eq!(layout.tile_at(Coord::new(0, 0)), None);
        assert_eq!(layout.tile_at(Coord::new(4, 10)), Some(14));
        assert_eq!(layout.tile_at(Coord::new(9, 0)), None);
        let covered = (0..layout.rows())
            .flat_map(|r| (0..layout.cols()).map(move |c| Coord::new(r, c)))
            .filter(|&c| layout.tile_at(c).is_some())
            .count();
        assert_eq!(covered, 4 * 6 + 5 * 4 + 4 * 3 + 4 * 2);
    }

    #[test]
    fn test_overlap_names_both_tiles_and_cell() {
        let mut placements = REFERENCE_PLACEMENTS.to_vec();
        // Tile 16 (size 2, portrait at 2,1) moved onto tile 15 at 2,0.
        placements[16] = TilePlacement::landscape(3, 0);
        let err = TileLayout::new(&placements).unwrap_err();
        assert_eq!(
            err,
            LayoutError::Overlap {
                cell: Coord::new(3, 0),
                first: 15,
                second: 16,
            }
        );
    }

    #[test]
    fn test_extent_limit() {
        let mut placements = REFERENCE_PLACEMENTS.to_vec();
        placements[3] = TilePlacement::portrait(usize::MAX, 0);
        assert_eq!(
            TileLayout::new(&placements).unwrap_err(),
            LayoutError::Extent {
                tile: 3,
                limit: MAX_EXTENT
            }
        );

        placements[3] = TilePlacement::landscape(20, MAX_EXTENT - 2);
        assert_eq!(
            TileLayout::new(&placements).unwrap_err(),
            LayoutError::Extent {
                tile: 3,
                limit: MAX_EXTENT
            }
        );

        // Largest fitting corner.
        placements[3] = TilePlacement::landscape(MAX_EXTENT - 2, MAX_EXTENT - 3);
        let layout = TileLayout::new(&placements).unwrap();
        assert_eq!((layout.rows(), layout.cols()), (MAX_EXTENT, MAX_EXTENT));
    }

    #[test]
    fn test_tile_count_mismatch() {
        let short = &REFERENCE_PLACEMENTS[..16];
        assert_eq!(
            TileLayout::new(short).unwrap_err(),
            LayoutError::TileCount {
                expected: 17,
                got: 16
            }
        );

        let mut long = REFERENCE_PLACEMENTS.to_vec();
        long.push(TilePlacement::portrait(10, 10));
        assert_eq!(
            TileLayout::new(&long).unwrap_err(),
            LayoutError::TileCount {
                expected: 17,
                got: 18
            }
        );
    }
}
