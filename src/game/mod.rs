use crate::core::{Board, Color};
use crate::display::{render_board, DisplayState};
use crate::logic::legal_moves;
use crate::player::PlayerController;
use anyhow::Context;
use derive_more::Display;
use serde::Serialize;
use tracing::{debug, info};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum GameOutcome {
    #[display("{winner} wins {red} to {black}")]
    Won { winner: Color, red: u32, black: u32 },
    #[display("Draw at {score} points each")]
    Draw { score: u32 },
    #[display("{resigned} resigned, {} wins", resigned.opponent())]
    Resigned { resigned: Color },
}

impl GameOutcome {
    /// Outcome by score, for a board with no legal moves left.
    pub fn from_scores(board: &Board) -> Self {
        let (red, black) = (board.red_score(), board.black_score());
        match red.cmp(&black) {
            std::cmp::Ordering::Greater => GameOutcome::Won {
                winner: Color::Red,
                red,
                black,
            },
            std::cmp::Ordering::Less => GameOutcome::Won {
                winner: Color::Black,
                red,
                black,
            },
            std::cmp::Ordering::Equal => GameOutcome::Draw { score: red },
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match *self {
            GameOutcome::Won { winner, .. } => Some(winner),
            GameOutcome::Draw { .. } => None,
            GameOutcome::Resigned { resigned } => Some(resigned.opponent()),
        }
    }
}

pub struct Game {
    pub board: Board,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Game { board }
    }

    /// Current round; a round is one red and one black move.
    pub fn round(&self) -> usize {
        self.board.move_count() / 2 + 1
    }

    /// Plays to the end, drawing the board before every move.
    pub fn play(
        &mut self,
        red: &mut dyn PlayerController,
        black: &mut dyn PlayerController,
    ) -> anyhow::Result<GameOutcome> {
        self.run(red, black, true)
    }

    /// Same as [`Game::play`] without touching the terminal.
    pub fn play_silent(
        &mut self,
        red: &mut dyn PlayerController,
        black: &mut dyn PlayerController,
    ) -> anyhow::Result<GameOutcome> {
        self.run(red, black, false)
    }

    fn run(
        &mut self,
        red: &mut dyn PlayerController,
        black: &mut dyn PlayerController,
        render: bool,
    ) -> anyhow::Result<GameOutcome> {
        loop {
            if legal_moves(&self.board).is_empty() {
                let outcome = GameOutcome::from_scores(&self.board);
                info!(%outcome, moves = self.board.move_count(), "game over");
                return Ok(outcome);
            }

            let color = self.board.to_move();
            let seat: &mut dyn PlayerController = match color {
                Color::Red => &mut *red,
                Color::Black => &mut *black,
            };

            if render && !seat.is_human() {
                let state = DisplayState {
                    status_msg: Some(format!(
                        "Round {}: {} ({}) is thinking...",
                        self.round(),
                        seat.name(),
                        color
                    )),
                    notice: None,
                };
                render_board(&self.board, &state)?;
            }

            let Some(coord) = seat.choose_move(&self.board)? else {
                info!(%color, player = seat.name(), "resigned");
                return Ok(GameOutcome::Resigned { resigned: color });
            };

            match self.board.play(coord, color) {
                Ok(()) => debug!(round = self.round(), %coord, %color, "move accepted"),
                Err(e) if seat.is_human() => {
                    debug!(%coord, %color, error = %e, "move rejected");
                    seat.reject(&e.to_string());
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("{} chose an illegal move", seat.name()));
                }
            }
        }
    }
}
