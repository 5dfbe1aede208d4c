mod cli;

use clap::Parser;
use cli::{Cli, Command};
use crossterm::{execute, terminal};
use kulami::config::LayoutConfig;
use kulami::core::{Color, StrategyError};
use kulami::display::board_to_string;
use kulami::game::Game;
use kulami::player::{AiKind, AiPlayer, PlayerController, TuiController};
use kulami::selfplay::{run_selfplay, SelfPlayConfig};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let res = match cli.command.unwrap_or_default() {
        Command::Play {
            hot_seat,
            ai,
            ai_color,
            layout,
            seed,
        } => run_play(hot_seat, ai, ai_color, layout, seed),
        Command::Selfplay {
            games,
            red,
            black,
            layout,
            seed,
            json,
        } => run_batch(games, red, black, layout, seed, json),
    };

    // A missing strategy is a usage problem, not a crash.
    if let Err(err) = &res {
        if let Some(StrategyError::NotImplemented { strategy }) =
            err.chain().find_map(|e| e.downcast_ref::<StrategyError>())
        {
            eprintln!("The {} AI is not available yet, try --ai random or --ai greedy.", strategy);
            std::process::exit(2);
        }
    }
    res
}

fn run_play(
    hot_seat: bool,
    ai: AiKind,
    ai_color: Color,
    layout: Option<PathBuf>,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let config = LayoutConfig::load_or_default(layout.as_deref())?;
    let board = config.board()?;

    let (mut red, mut black): (Box<dyn PlayerController>, Box<dyn PlayerController>) = if hot_seat {
        (
            Box::new(TuiController::new(Color::Red, "Red")),
            Box::new(TuiController::new(Color::Black, "Black")),
        )
    } else {
        let name = format!("{:?} AI", ai);
        let computer: Box<dyn PlayerController> = Box::new(AiPlayer::new(&name, ai.build(seed)));
        let human: Box<dyn PlayerController> =
            Box::new(TuiController::new(ai_color.opponent(), "You"));
        match ai_color {
            Color::Red => (computer, human),
            Color::Black => (human, computer),
        }
    };
    info!(red = red.name(), black = black.name(), "starting game");

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), terminal::EnterAlternateScreen)?;

    let mut game = Game::new(board);
    let res = game.play(red.as_mut(), black.as_mut());

    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    let outcome = res?;
    print!("{}", board_to_string(&game.board));
    println!("{}", outcome);
    Ok(())
}

fn run_batch(
    games: usize,
    red: AiKind,
    black: AiKind,
    layout: Option<PathBuf>,
    seed: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let config = SelfPlayConfig {
        num_games: games,
        red,
        black,
        layout: LayoutConfig::load_or_default(layout.as_deref())?,
        seed,
    };
    let stats = run_selfplay(&config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", stats.summary());
    }
    Ok(())
}
