//! Command-line interface.

use clap::{Parser, Subcommand};
use kulami::core::Color;
use kulami::player::AiKind;
use std::path::PathBuf;

/// Kulami in the terminal
#[derive(Parser, Debug)]
#[command(name = "kulami")]
#[command(about = "Play Kulami against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Defaults to `play` against the random AI
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Two humans sharing the keyboard
        #[arg(long)]
        hot_seat: bool,

        /// Opponent strategy
        #[arg(long, value_enum, default_value = "random")]
        ai: AiKind,

        /// Color the AI plays
        #[arg(long, value_enum, default_value = "black")]
        ai_color: Color,

        /// JSON tile layout (defaults to the reference board)
        #[arg(long)]
        layout: Option<PathBuf>,

        /// Seed for the AI
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pit two AIs against each other and print statistics
    Selfplay {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: usize,

        /// Strategy playing red
        #[arg(long, value_enum, default_value = "random")]
        red: AiKind,

        /// Strategy playing black
        #[arg(long, value_enum, default_value = "random")]
        black: AiKind,

        /// JSON tile layout (defaults to the reference board)
        #[arg(long)]
        layout: Option<PathBuf>,

        /// Base seed; game i uses seed + i
        #[arg(long)]
        seed: Option<u64>,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            hot_seat: false,
            ai: AiKind::Random,
            ai_color: Color::Black,
            layout: None,
            seed: None,
        }
    }
}
