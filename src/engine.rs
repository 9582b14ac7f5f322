//! Engine state management.
//!
//! Holds the current game, engine options, and the RNG used by the search
//! fallback, and answers each CUI command with protocol output lines.

use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::board::{Player, Point};
use crate::protocol::cpn::{encode_cpn, parse_cpn, CpnError};
use crate::protocol::notation::{format_point, format_square};
use crate::resolve::GameState;
use crate::search::search;

/// Builds the RNG for a seed option value; 0 means entropy.
fn seeded_rng(seed: u64) -> SmallRng {
    if seed == 0 {
        SmallRng::from_entropy()
    } else {
        SmallRng::seed_from_u64(seed)
    }
}

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub state: GameState,
    pub options: HashMap<String, String>,
    rng: SmallRng,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

impl Engine {
    /// Creates an engine with a fresh game.
    pub fn new() -> Self {
        Engine {
            state: GameState::new(),
            options: HashMap::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Resets to a fresh game. Options are kept.
    pub fn new_game(&mut self) {
        self.state = GameState::new();
    }

    /// Sets the current position from a CPN string. The position is left
    /// unchanged on error.
    pub fn set_position(&mut self, cpn: &str) -> Result<(), CpnError> {
        self.state = parse_cpn(cpn)?;
        Ok(())
    }

    /// Sets an engine option. `Seed` reseeds the RNG immediately and is
    /// only recorded when its value parses.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        if name.eq_ignore_ascii_case("Seed") {
            let Some(Ok(seed)) = value.as_deref().map(str::parse::<u64>) else {
                warn!("invalid Seed value: {:?}", value);
                return;
            };
            self.rng = seeded_rng(seed);
        }
        self.options.insert(name, value.unwrap_or_default());
    }

    /// Handles the CUI handshake: writes id, options, protocol_version, and cuiok.
    pub fn handle_cui<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name corners")?;
        writeln!(out, "id author corners")?;
        writeln!(
            out,
            "option name Seed type spin default 0 min 0 max {}",
            u64::MAX
        )?;
        writeln!(out, "protocol_version 1")?;
        writeln!(out, "cuiok")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    fn report_error<W: Write>(out: &mut W, err: &impl fmt::Display) -> io::Result<()> {
        warn!("rejected: {}", err);
        writeln!(out, "error {}", err)?;
        out.flush()
    }

    /// Handles `position <cpn>`. Silent on success; a bad CPN is reported
    /// and the current position kept.
    pub fn handle_position<W: Write>(&mut self, cpn: &str, out: &mut W) -> io::Result<()> {
        match self.set_position(cpn) {
            Ok(()) => Ok(()),
            Err(e) => Self::report_error(out, &e),
        }
    }

    /// Answers a known command whose arguments did not parse.
    pub fn handle_invalid<W: Write>(&self, reason: &str, out: &mut W) -> io::Result<()> {
        Self::report_error(out, &reason)
    }

    /// Handles `claim`: claims the best square for the side to move.
    pub fn handle_claim<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self.state.claim() {
            Ok(Some(claim)) => writeln!(
                out,
                "claimed {} points {}",
                format_square(&claim.square),
                claim.points
            )?,
            Ok(None) => writeln!(out, "claimed none")?,
            Err(e) => return Self::report_error(out, &e),
        }
        out.flush()
    }

    /// Handles `pass`.
    pub fn handle_pass<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self.state.pass() {
            Ok(()) => writeln!(out, "passed")?,
            Err(e) => return Self::report_error(out, &e),
        }
        out.flush()
    }

    /// Handles `place <point>`, reporting the final sweep if the board fills.
    pub fn handle_place<W: Write>(&mut self, point: Point, out: &mut W) -> io::Result<()> {
        match self.state.place(point) {
            Ok(tally) => {
                writeln!(out, "placed {}", format_point(point))?;
                if let Some(t) = tally {
                    writeln!(out, "sweep {} {}", Player::Red.name(), t.red_sweep)?;
                    writeln!(out, "sweep {} {}", Player::Blue.name(), t.blue_sweep)?;
                    writeln!(
                        out,
                        "gameover red {} blue {} winner {}",
                        t.red_score,
                        t.blue_score,
                        t.outcome.name()
                    )?;
                }
            }
            Err(e) => return Self::report_error(out, &e),
        }
        out.flush()
    }

    /// Handles `go`: picks a placement for the side to move without
    /// applying it.
    pub fn handle_go<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.state.is_over() {
            writeln!(out, "bestmove none")?;
            return out.flush();
        }
        match search(self.state.to_move, &self.state.grid, &mut self.rng) {
            Some(result) => {
                debug!(score = ?result.score, "go");
                writeln!(
                    out,
                    "info evaluated {} score {}",
                    result.evaluated,
                    result.score.total()
                )?;
                writeln!(out, "bestmove {}", format_point(result.point))?;
            }
            None => writeln!(out, "bestmove none")?,
        }
        out.flush()
    }

    /// Handles `show`: prints the position and a status line.
    pub fn handle_show<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "position {}", encode_cpn(&self.state))?;
        if let Some(square) = &self.state.last_claim {
            writeln!(out, "lastclaim {}", format_square(square))?;
        }
        writeln!(out, "status {}", self.state.status())?;
        out.flush()
    }
}
