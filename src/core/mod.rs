pub mod board;
pub mod error;
pub mod layout;
pub mod scoring;
pub mod tile;
pub mod types;

pub use board::{Board, Placement};
pub use error::{BlockedBy, LayoutError, MoveError, Obstruction, StrategyError};
pub use layout::{TileLayout, MAX_EXTENT};
pub use scoring::{MajorityShift, ScoreLedger};
pub use tile::{Tile, TilePlacement, TileSize, MARBLES_PER_PLAYER, NUM_TILES, REFERENCE_PLACEMENTS};
pub use types::{Cell, Color, Coord};
