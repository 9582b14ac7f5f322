//! Self-play game generation.
//!
//! Plays full games with the engine on both sides. The first few
//! placements can be random so that games diverge; after that each side
//! uses the greedy placement search. Every turn is recorded along with the
//! end-of-game sweep and final scores, and games are written as JSON lines.

use std::io::Write;
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::board::Player;
use crate::protocol::cpn::encode_cpn;
use crate::protocol::notation::{format_point, format_square};
use crate::resolve::{GameState, Outcome};
use crate::search::{random_move, search};

/// Errors from running or recording self-play.
#[derive(Debug, Error)]
pub enum SelfPlayError {
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize game: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for self-play game generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Number of random placements at the start of each game.
    pub opening_plies: usize,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy). Game `i` uses `seed + i`.
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            opening_plies: 4,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

/// One turn: the claim made (if any) and the placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    pub player: Player,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim: Option<String>,
    pub claim_points: u32,
    pub placed: String,
    /// Heuristic total of the placement; absent for random openings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
}

/// A complete self-play game record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub game_id: usize,
    pub turns: Vec<TurnRecord>,
    pub red_sweep: u32,
    pub blue_sweep: u32,
    pub red_score: u32,
    pub blue_score: u32,
    pub winner: &'static str,
    /// CPN of the final position.
    pub final_position: String,
}

fn game_rng(seed: u64, game_id: usize) -> SmallRng {
    if seed == 0 {
        SmallRng::from_entropy()
    } else {
        SmallRng::seed_from_u64(seed.wrapping_add(game_id as u64))
    }
}

/// Plays a single game to completion.
pub fn play_game(config: &SelfPlayConfig, game_id: usize, rng: &mut SmallRng) -> GameRecord {
    let mut state = GameState::new();
    let mut turns = Vec::new();
    let mut tally = None;

    while tally.is_none() {
        let player = state.to_move;
        let claim = match state.claim() {
            Ok(c) => c,
            Err(e) => {
                warn!(game_id, "claim rejected: {}", e);
                break;
            }
        };

        let choice = if turns.len() < config.opening_plies {
            random_move(&state.grid, rng).map(|p| (p, None))
        } else {
            search(player, &state.grid, rng).map(|r| (r.point, Some(r.score.total())))
        };
        let Some((point, score)) = choice else {
            break;
        };

        tally = match state.place(point) {
            Ok(t) => t,
            Err(e) => {
                warn!(game_id, "placement rejected: {}", e);
                break;
            }
        };
        turns.push(TurnRecord {
            player,
            claim: claim.map(|c| format_square(&c.square)),
            claim_points: claim.map_or(0, |c| c.points),
            placed: format_point(point),
            score,
        });
    }

    let (red_sweep, blue_sweep) = tally.map_or((0, 0), |t| (t.red_sweep, t.blue_sweep));
    let outcome = state.outcome.unwrap_or(Outcome::decide(
        state.score(Player::Red),
        state.score(Player::Blue),
    ));

    GameRecord {
        game_id,
        turns,
        red_sweep,
        blue_sweep,
        red_score: state.score(Player::Red),
        blue_score: state.score(Player::Blue),
        winner: outcome.name(),
        final_position: encode_cpn(&state),
    }
}

fn play_logged(config: &SelfPlayConfig, game_id: usize) -> GameRecord {
    let start = Instant::now();
    let mut rng = game_rng(config.seed, game_id);
    let game = play_game(config, game_id, &mut rng);
    if !config.quiet {
        info!(
            "Game {}/{}: {} ({}-{}) in {:.2}s",
            game_id + 1,
            config.num_games,
            game.winner,
            game.red_score,
            game.blue_score,
            start.elapsed().as_secs_f64()
        );
    }
    game
}

/// Runs self-play generation, returning game records in game-id order.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_self_play(config: &SelfPlayConfig) -> Result<Vec<GameRecord>, SelfPlayError> {
    if config.threads <= 1 {
        return Ok((0..config.num_games)
            .map(|i| play_logged(config, i))
            .collect());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;
    Ok(pool.install(|| {
        (0..config.num_games)
            .into_par_iter()
            .map(|i| play_logged(config, i))
            .collect()
    }))
}

/// Writes games as JSON lines, one game per line.
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> Result<(), SelfPlayError> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

/// Aggregate results over a batch of games.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub games: usize,
    pub red_wins: usize,
    pub blue_wins: usize,
    pub ties: usize,
    pub avg_red_score: f64,
    pub avg_blue_score: f64,
}

/// Tallies wins and average scores.
pub fn summarize(games: &[GameRecord]) -> Summary {
    let mut s = Summary {
        games: games.len(),
        ..Summary::default()
    };
    if games.is_empty() {
        return s;
    }
    for g in games {
        match g.winner {
            "red" => s.red_wins += 1,
            "blue" => s.blue_wins += 1,
            _ => s.ties += 1,
        }
        s.avg_red_score += g.red_score as f64;
        s.avg_blue_score += g.blue_score as f64;
    }
    s.avg_red_score /= games.len() as f64;
    s.avg_blue_score /= games.len() as f64;
    s
}

/// Logs a one-line summary of the batch.
pub fn print_summary(games: &[GameRecord]) {
    let s = summarize(games);
    info!(
        "{} games: red {} / blue {} / tie {}, avg score red {:.1} blue {:.1}",
        s.games, s.red_wins, s.blue_wins, s.ties, s.avg_red_score, s.avg_blue_score
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CELL_COUNT;
    use crate::protocol::cpn::parse_cpn;

    fn config(num_games: usize, threads: usize, seed: u64) -> SelfPlayConfig {
        SelfPlayConfig {
            num_games,
            threads,
            seed,
            quiet: true,
            ..Default::default()
        }
    }

    #[test]
    fn game_fills_the_board() {
        let cfg = config(1, 1, 42);
        let mut rng = SmallRng::seed_from_u64(42);
        let game = play_game(&cfg, 0, &mut rng);
        assert_eq!(game.turns.len(), CELL_COUNT);
        assert_eq!(game.turns[0].player, Player::Red);
        assert_eq!(game.turns[1].player, Player::Blue);
        assert!(game.turns[..cfg.opening_plies].iter().all(|t| t.score.is_none()));
        assert!(game.turns[cfg.opening_plies..].iter().all(|t| t.score.is_some()));

        let state = parse_cpn(&game.final_position).unwrap();
        assert!(state.is_over());
        assert_eq!(state.scores, [game.red_score, game.blue_score]);
    }

    #[test]
    fn scores_add_up() {
        let cfg = config(1, 1, 3);
        let mut rng = SmallRng::seed_from_u64(3);
        let game = play_game(&cfg, 0, &mut rng);
        let claimed = |p: Player| -> u32 {
            game.turns
                .iter()
                .filter(|t| t.player == p)
                .map(|t| t.claim_points)
                .sum()
        };
        assert_eq!(game.red_score, claimed(Player::Red) + game.red_sweep);
        assert_eq!(game.blue_score, claimed(Player::Blue) + game.blue_sweep);
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let cfg = config(2, 1, 99);
        let a = run_self_play(&cfg).unwrap();
        let b = run_self_play(&cfg).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn parallel_matches_sequential() {
        let seq = run_self_play(&config(3, 1, 77)).unwrap();
        let par = run_self_play(&config(3, 2, 77)).unwrap();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq, par);
    }

    #[test]
    fn jsonl_output_is_valid() {
        let games = run_self_play(&config(2, 1, 55)).unwrap();
        let mut buf = Vec::new();
        write_jsonl(&games, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(v["game_id"].is_u64());
            assert_eq!(v["turns"].as_array().unwrap().len(), CELL_COUNT);
            assert!(v["final_position"].is_string());
            assert!(["red", "blue", "tie"].contains(&v["winner"].as_str().unwrap()));
            assert_eq!(v["turns"][0]["player"], "red");
        }
    }

    #[test]
    fn summary_counts_outcomes() {
        let mut games = run_self_play(&config(3, 1, 5)).unwrap();
        games[0].winner = "red";
        games[1].winner = "blue";
        games[2].winner = "tie";
        let s = summarize(&games);
        assert_eq!((s.red_wins, s.blue_wins, s.ties), (1, 1, 1));
        assert_eq!(summarize(&[]), Summary::default());
    }
}
