use crate::config::LayoutConfig;
use crate::core::Color;
use crate::game::{Game, GameOutcome};
use crate::player::{AiKind, AiPlayer};
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    pub num_games: usize,
    pub red: AiKind,
    pub black: AiKind,
    pub layout: LayoutConfig,
    /// Base seed; game `i` seeds its players from `seed + i`.
    pub seed: Option<u64>,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 100,
            red: AiKind::Random,
            black: AiKind::Random,
            layout: LayoutConfig::default(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResult {
    pub outcome: GameOutcome,
    pub moves: usize,
    pub red_score: u32,
    pub black_score: u32,
    pub time_ms: u128,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub red_wins: usize,
    pub black_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub avg_red_score: f64,
    pub avg_black_score: f64,
    pub red: String,
    pub black: String,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.outcome.winner() {
            Some(Color::Red) => self.red_wins += 1,
            Some(Color::Black) => self.black_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let n = self.games.len() as f64;
        let total_moves: usize = self.games.iter().map(|g| g.moves).sum();
        let total_red: u32 = self.games.iter().map(|g| g.red_score).sum();
        let total_black: u32 = self.games.iter().map(|g| g.black_score).sum();
        self.avg_moves = total_moves as f64 / n;
        self.avg_red_score = total_red as f64 / n;
        self.avg_black_score = total_black as f64 / n;
    }

    /// Human-readable summary.
    pub fn summary(&self) -> String {
        let pct = |n: usize| {
            if self.total_games == 0 {
                0.0
            } else {
                n as f64 / self.total_games as f64 * 100.0
            }
        };
        format!(
            "=== Self-Play: {} (red) vs {} (black), {} games ===\n\
             Red wins:   {} ({:.1}%)\n\
             Black wins: {} ({:.1}%)\n\
             Draws:      {} ({:.1}%)\n\
             Avg moves:  {:.1}\n\
             Avg score:  red {:.1} / black {:.1}\n",
            self.red,
            self.black,
            self.total_games,
            self.red_wins,
            pct(self.red_wins),
            self.black_wins,
            pct(self.black_wins),
            self.draws,
            pct(self.draws),
            self.avg_moves,
            self.avg_red_score,
            self.avg_black_score,
        )
    }
}

/// Plays `num_games` AI-vs-AI games in parallel, without rendering.
#[instrument(skip(config), fields(games = config.num_games, red = ?config.red, black = ?config.black))]
pub fn run_selfplay(config: &SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    // Validate once up front so every worker shares the same layout.
    let template = config.layout.board()?;

    let results: Vec<GameResult> = (0..config.num_games)
        .into_par_iter()
        .map(|index| {
            let seed = config.seed.map(|s| s.wrapping_add(index as u64));
            // Distinct streams for the two seats of one game.
            let black_seed = seed.map(|s| s ^ 0x9E37_79B9_7F4A_7C15);
            let mut red = AiPlayer::new("Red", config.red.build(seed));
            let mut black = AiPlayer::new("Black", config.black.build(black_seed));

            let start = Instant::now();
            let mut game = Game::new(template.clone());
            let outcome = game.play_silent(&mut red, &mut black)?;
            Ok(GameResult {
                outcome,
                moves: game.board.move_count(),
                red_score: game.board.red_score(),
                black_score: game.board.black_score(),
                time_ms: start.elapsed().as_millis(),
            })
        })
        .collect::<anyhow::Result<_>>()?;

    let mut stats = SelfPlayStats {
        red: format!("{:?}", config.red).to_lowercase(),
        black: format!("{:?}", config.black).to_lowercase(),
        ..SelfPlayStats::default()
    };
    for result in results {
        stats.add_result(result);
    }
    info!(
        red_wins = stats.red_wins,
        black_wins = stats.black_wins,
        draws = stats.draws,
        "self-play finished"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selfplay_counts_every_game() {
        let config = SelfPlayConfig {
            num_games: 12,
            red: AiKind::Greedy,
            black: AiKind::Random,
            seed: Some(7),
            ..SelfPlayConfig::default()
        };
        let stats = run_selfplay(&config).unwrap();

        assert_eq!(stats.total_games, 12);
        assert_eq!(stats.red_wins + stats.black_wins + stats.draws, 12);
        assert!(stats.avg_moves > 0.0 && stats.avg_moves <= 56.0);
        for game in &stats.games {
            assert_eq!(game.outcome.winner().is_none(), game.red_score == game.black_score);
        }
        assert_eq!(stats.red, "greedy");
    }

    #[test]
    fn test_seeded_selfplay_is_reproducible() {
        let config = SelfPlayConfig {
            num_games: 6,
            seed: Some(42),
            ..SelfPlayConfig::default()
        };
        let a = run_selfplay(&config).unwrap();
        let b = run_selfplay(&config).unwrap();
        let summary = |s: &SelfPlayStats| -> Vec<(usize, u32, u32)> {
            s.games
                .iter()
                .map(|g| (g.moves, g.red_score, g.black_score))
                .collect()
        };
        assert_eq!(summary(&a), summary(&b));
    }

    #[test]
    fn test_unimplemented_strategy_fails() {
        let config = SelfPlayConfig {
            num_games: 2,
            red: AiKind::Calculating,
            ..SelfPlayConfig::default()
        };
        let err = run_selfplay(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("not implemented"));
    }

    #[test]
    fn test_stats_json() {
        let mut stats = SelfPlayStats::default();
        stats.add_result(GameResult {
            outcome: GameOutcome::Draw { score: 20 },
            moves: 40,
            red_score: 20,
            black_score: 20,
            time_ms: 1,
        });
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["draws"], 1);
        assert_eq!(json["games"][0]["outcome"]["result"], "draw");
        assert_eq!(json["avg_red_score"], 20.0);
    }
}
