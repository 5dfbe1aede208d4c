use crate::core::{BlockedBy, Board, Cell, Color, Coord, MoveError, Obstruction};

/// Checks every placement rule without touching the board.
///
/// Rules are checked in a fixed order so the reported error is stable:
/// turn, marble supply, grid extent, free cell in line with the last move,
/// and finally the two blocked tiles.
pub fn check_move(board: &Board, coord: Coord, color: Color) -> Result<(), MoveError> {
    let last = board.last_move();

    if let Some(last) = last {
        if last.color() == color {
            return Err(MoveError::Turn {
                attempted: color,
                expected: color.opponent(),
            });
        }
    }

    if board.move_count() >= board.max_moves() {
        return Err(MoveError::GameOver {
            limit: board.max_moves(),
        });
    }

    if !board.layout().contains(coord) {
        return Err(MoveError::OutOfBounds { coord });
    }

    match board.cell(coord) {
        Cell::Empty => {}
        Cell::OutOfBounds => {
            return Err(MoveError::Occupied {
                coord,
                reason: Obstruction::NoTile,
            })
        }
        Cell::Marble(owner) => {
            return Err(MoveError::Occupied {
                coord,
                reason: Obstruction::Marble(owner),
            })
        }
    }

    let Some(last) = last else {
        return Ok(());
    };
    if !coord.in_line_with(last.coord) {
        return Err(MoveError::Occupied {
            coord,
            reason: Obstruction::OffLine { last: last.coord },
        });
    }

    let tile = board.tile_at(coord);
    if tile == Some(last.tile()) {
        return Err(MoveError::TileBlocked {
            coord,
            tile: last.tile(),
            by: BlockedBy::Opponent,
        });
    }
    if let Some(prev) = board.previous_move() {
        if tile == Some(prev.tile()) {
            return Err(MoveError::TileBlocked {
                coord,
                tile: prev.tile(),
                by: BlockedBy::Own,
            });
        }
    }

    Ok(())
}

/// All coordinates [`check_move`] accepts for the side to move.
///
/// Order is stable: the last move's column top to bottom, then its row left
/// to right. On an empty board every empty cell, row-major.
pub fn legal_moves(board: &Board) -> Vec<Coord> {
    let mut moves = Vec::new();
    if board.move_count() >= board.max_moves() {
        return moves;
    }

    let Some(last) = board.last_move() else {
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                let coord = Coord::new(row, col);
                if board.cell(coord) == Cell::Empty {
                    moves.push(coord);
                }
            }
        }
        return moves;
    };

    let blocked_last = Some(last.tile());
    let blocked_prev = board.previous_move().map(|p| p.tile());
    let open = |coord: Coord| {
        let tile = board.tile_at(coord);
        board.cell(coord) == Cell::Empty && tile != blocked_last && tile != blocked_prev
    };

    let anchor = last.coord;
    moves.extend(
        (0..board.rows())
            .map(|row| Coord::new(row, anchor.col))
            .filter(|&c| open(c)),
    );
    moves.extend(
        (0..board.cols())
            .map(|col| Coord::new(anchor.row, col))
            .filter(|&c| open(c)),
    );
    moves
}

/// No legal move is left (this includes running out of marbles).
pub fn is_game_over(board: &Board) -> bool {
    legal_moves(board).is_empty()
}

/// Score differential for `color`.
pub fn evaluate(board: &Board, color: Color) -> i32 {
    board.score_diff(color)
}
