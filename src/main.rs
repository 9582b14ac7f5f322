//! Corners -- a Corners rules engine implementing the CUI protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! following the CUI (Corners Universal Interface) convention. Diagnostics
//! go to stderr through `tracing`.

use std::io::{self, BufRead};

use tracing_subscriber::EnvFilter;

use corners::engine::Engine;
use corners::protocol::parser::{parse_command, Command};

/// Runs the main CUI protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Cui => engine.handle_cui(&mut out)?,
            Command::IsReady => engine.handle_isready(&mut out)?,
            Command::SetOption { name, value } => engine.set_option(name, value),
            Command::NewGame => engine.new_game(),
            Command::Position { cpn } => engine.handle_position(&cpn, &mut out)?,
            Command::Claim => engine.handle_claim(&mut out)?,
            Command::Pass => engine.handle_pass(&mut out)?,
            Command::Place { point } => engine.handle_place(point, &mut out)?,
            Command::Go => engine.handle_go(&mut out)?,
            Command::Show => engine.handle_show(&mut out)?,
            Command::Invalid { reason } => engine.handle_invalid(&reason, &mut out)?,
            Command::Quit => break,
        }
    }

    Ok(())
}
