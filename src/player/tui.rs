use crate::core::{Board, Color, Coord};
use crate::display::{render_board, DisplayState};
use crate::player::PlayerController;
use crate::ui::{parse_command, read_line_raw, Command};

/// A human at the terminal, typing `row,col` or `resign`.
pub struct TuiController {
    color: Color,
    name: String,
    /// Shown above the next prompt, e.g. why the last move was refused.
    notice: Option<String>,
}

impl TuiController {
    pub fn new(color: Color, name: &str) -> Self {
        Self {
            color,
            name: name.to_string(),
            notice: None,
        }
    }
}

impl PlayerController for TuiController {
    fn choose_move(&mut self, board: &Board) -> anyhow::Result<Option<Coord>> {
        let mut state = DisplayState {
            status_msg: Some(format!("{}'s turn ({})", self.name, self.color)),
            notice: self.notice.take(),
        };

        loop {
            render_board(board, &state)?;
            print!("Enter Row,Col or 'resign' | [Esc]: Resign\r\n");

            let Some(line) = read_line_raw("> ")? else {
                return Ok(None);
            };
            match parse_command(&line) {
                Ok(Command::Play(coord)) => return Ok(Some(coord)),
                Ok(Command::Resign) => return Ok(None),
                Err(e) => state.notice = Some(e.to_string()),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }

    fn reject(&mut self, reason: &str) {
        self.notice = Some(reason.to_string());
    }
}
