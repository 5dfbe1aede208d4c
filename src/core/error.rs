//! Error types for the board and the strategies.

use super::types::{Color, Coord};
use derive_more::{Display, Error};

/// The tile layout cannot be turned into a board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum LayoutError {
    #[display("need exactly {expected} tile locations, got {got}")]
    TileCount { expected: usize, got: usize },

    /// `first` is the lower tile index.
    #[display("tiles {first} and {second} intersect on {cell}")]
    Overlap {
        cell: Coord,
        first: usize,
        second: usize,
    },

    #[display("tile {tile} reaches past the {limit}x{limit} grid limit")]
    Extent { tile: usize, limit: usize },
}

/// Why a cell cannot take a marble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Obstruction {
    #[display("no tile covers it")]
    NoTile,
    #[display("it already holds a {_0} marble")]
    Marble(Color),
    #[display("it is not in line with the last move {last}")]
    OffLine { last: Coord },
}

/// Whose earlier placement blocks a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BlockedBy {
    #[display("the other player")]
    Opponent,
    #[display("you")]
    Own,
}

/// A rejected move. The board is unchanged when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("it is now {expected}'s turn, not {attempted}'s")]
    Turn { attempted: Color, expected: Color },

    #[display("game is over, all {limit} marbles have been played")]
    GameOver { limit: usize },

    #[display("{coord} is outside the board")]
    OutOfBounds { coord: Coord },

    #[display("{coord} is not a legal move, {reason}")]
    Occupied { coord: Coord, reason: Obstruction },

    #[display("{coord} is not a legal move, tile {tile} is blocked by {by}")]
    TileBlocked {
        coord: Coord,
        tile: usize,
        by: BlockedBy,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum StrategyError {
    #[display("no legal moves")]
    NoLegalMoves,

    #[display("the {strategy} strategy is not implemented yet")]
    NotImplemented { strategy: &'static str },

    /// The board refused a move the generator produced.
    #[display("generated move was refused: {source}")]
    Rejected { source: MoveError },
}
