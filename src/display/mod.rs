use crate::core::{Board, Cell, Color, Coord};
use crossterm::style::Stylize;
use crossterm::{cursor, execute, terminal};
use std::fmt::Write as _;
use std::io::{stdout, Write as _};

#[derive(Debug, Default)]
pub struct DisplayState {
    pub status_msg: Option<String>,
    /// Shown under the board, e.g. why the last input was rejected.
    pub notice: Option<String>,
}

/// Plain-text board: tile borders, `.` for empty holes, `x`/`o` for red and
/// black marbles (upper case for the last two moves), then the score line.
///
/// ```text
/// *     0   1   2   3
///         ---------
/// 0       | o   . |
///         |       -----
/// 1       | .   . | o |
///     ------------|   |
/// 2   | .   x   x | o |
///     ------------|   |
/// 3               | . |
///                 -----
/// ```
pub fn board_to_string(board: &Board) -> String {
    let tile = |row: usize, col: usize| board.tile_at(Coord::new(row, col));
    let recent: Vec<Coord> = board
        .history()
        .iter()
        .rev()
        .take(2)
        .map(|p| p.coord)
        .collect();
    let (rows, cols) = (board.rows(), board.cols());
    let (end_row, end_col) = (rows - 1, cols - 1);

    let mut res = String::new();
    res.push_str("*  ");
    for col in 0..cols {
        let _ = write!(res, "{:4}", col);
    }
    res.push('\n');

    for row in 0..rows {
        // Border line above the row.
        res.push_str("    ");
        for col in 0..cols {
            let t = tile(row, col);
            let top_edge = (row == 0 && t.is_some()) || (row != 0 && t != tile(row - 1, col));
            let left_edge = (col == 0 && t.is_some()) || (col != 0 && t != tile(row, col - 1));
            let piece = if top_edge {
                "----"
            } else if left_edge {
                if t.is_none() && (row == 0 || tile(row - 1, col - 1).is_none()) {
                    "-   "
                } else {
                    "|   "
                }
            } else if col != 0 && row != 0 && t.is_none() && tile(row - 1, col - 1).is_some() {
                "-   "
            } else {
                "    "
            };
            res.push_str(piece);
        }
        let right = tile(row, end_col);
        if right.is_some() || (row != 0 && tile(row - 1, end_col).is_some()) {
            // '|' only while still inside the same tile.
            if row != 0 && right == tile(row - 1, end_col) {
                res.push('|');
            } else {
                res.push('-');
            }
        }
        res.push('\n');

        // Cell contents.
        let _ = write!(res, "{:<4}", row);
        for col in 0..cols {
            let coord = Coord::new(row, col);
            let is_recent = recent.contains(&coord);
            let mark = match board.cell(coord) {
                Cell::OutOfBounds => " ",
                Cell::Empty => ".",
                Cell::Marble(Color::Red) if is_recent => "X",
                Cell::Marble(Color::Red) => "x",
                Cell::Marble(Color::Black) if is_recent => "O",
                Cell::Marble(Color::Black) => "o",
            };
            let left_edge =
                (col == 0 && tile(row, 0).is_some()) || (col != 0 && tile(row, col) != tile(row, col - 1));
            let sep = if left_edge { "|" } else { " " };
            let _ = write!(res, "{} {} ", sep, mark);
        }
        if right.is_some() {
            res.push('|');
        }
        res.push('\n');
    }

    // Closing line under the last row.
    res.push_str("    ");
    for col in 0..cols {
        if tile(end_row, col).is_some() {
            res.push_str("----");
        } else if col != 0 && tile(end_row, col - 1).is_some() {
            res.push_str("-   ");
        } else {
            res.push_str("    ");
        }
    }
    res.push('\n');
    let _ = write!(
        res,
        "\nScore:\t\tRed: {}\tBlack: {}\n",
        board.red_score(),
        board.black_score()
    );
    res
}

/// Clears the terminal and draws the board (raw-mode line endings).
pub fn render_board(board: &Board, state: &DisplayState) -> anyhow::Result<()> {
    let mut out = stdout();
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    print!("=== Kulami ===\r\n");
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    for line in board_to_string(board).lines() {
        if line.starts_with("Score:") {
            print!("{}\r\n", line.bold());
            continue;
        }
        for ch in line.chars() {
            match ch {
                'x' => print!("{}", ch.red()),
                'X' => print!("{}", ch.red().bold()),
                'o' => print!("{}", ch.cyan()),
                'O' => print!("{}", ch.cyan().bold()),
                _ => print!("{}", ch),
            }
        }
        print!("\r\n");
    }

    if let Some(notice) = &state.notice {
        print!("{}\r\n", notice.clone().red());
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::REFERENCE_PLACEMENTS;

    const SCENARIO: [(usize, usize); 13] = [
        (4, 5),
        (4, 0),
        (2, 0),
        (2, 7),
        (4, 7),
        (4, 3),
        (4, 1),
        (4, 6),
        (7, 6),
        (2, 6),
        (6, 6),
        (5, 6),
        (1, 6),
    ];

    const SCENARIO_RENDER: &str = concat!(
        "*     0   1   2   3   4   5   6   7   8   9  10\n",
        "                    ---------                   \n",
        "0                   | .   . |                   \n",
        "        ------------|       ---------           \n",
        "1       | .   .   . | .   . | X   . |           \n",
        "    ------------------------|       -----       \n",
        "2   | x | . | .   . | .   . | o   o | . |       \n",
        "    |   |   |       |       |       |   |       \n",
        "3   | . | . | .   . | .   . | .   . | . |       \n",
        "    --------------------------------|   ---------\n",
        "4   | o   x | . | o   .   x | o   x | . | .   . |\n",
        "    |       |   |           |       -------------\n",
        "5   | .   . | . | .   .   . | O   . | .   .   . |\n",
        "    |       -------------------------------------\n",
        "6   | .   . | .   .   . | .   x   . |           \n",
        "    --------|           -------------           \n",
        "7           | .   .   . | .   x |               \n",
        "            ------------|       |               \n",
        "8                       | .   . |               \n",
        "                        ---------               \n",
        "\n",
        "Score:\t\tRed: 9\tBlack: 10\n",
    );

    #[test]
    fn test_scenario_render() {
        let mut board = Board::new(&REFERENCE_PLACEMENTS).unwrap();
        let mut color = Color::Red;
        for (row, col) in SCENARIO {
            board.play(Coord::new(row, col), color).unwrap();
            color = color.opponent();
        }
        assert_eq!(board_to_string(&board), SCENARIO_RENDER);
    }

    #[test]
    fn test_empty_board_has_no_marbles() {
        let board = Board::new(&REFERENCE_PLACEMENTS).unwrap();
        let text = board_to_string(&board);
        assert!(text.ends_with("\nScore:\t\tRed: 0\tBlack: 0\n"));
        let grid: String = text.lines().take_while(|l| !l.is_empty()).collect();
        assert!(!grid.contains('x') && !grid.contains('o'));
        assert_eq!(grid.matches('.').count(), 64);
    }
}
