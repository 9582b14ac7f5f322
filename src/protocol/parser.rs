//! CUI command parser.
//!
//! Parses incoming CUI protocol commands from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

use tracing::warn;

use crate::board::Point;

use super::notation::parse_point;

/// A parsed driver-to-engine CUI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the CUI protocol handshake.
    Cui,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Reset to a fresh game.
    NewGame,

    /// Set the position from a CPN string.
    Position { cpn: String },

    /// Run the claim phase for the side to move.
    Claim,

    /// Skip the claim phase for the side to move.
    Pass,

    /// Place a mark for the side to move.
    Place { point: Point },

    /// Ask the engine to choose a placement for the side to move.
    Go,

    /// Print the current position and status.
    Show,

    /// Terminate the engine process.
    Quit,

    /// A known command whose arguments could not be parsed. The engine
    /// answers with `error <reason>`.
    Invalid { reason: String },
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Known commands
/// with malformed arguments become `Command::Invalid`.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&first, args) = tokens.split_first()?;

    let parsed = match first {
        "cui" => Ok(Command::Cui),
        "isready" => Ok(Command::IsReady),
        "quit" => Ok(Command::Quit),
        "newgame" => Ok(Command::NewGame),
        "claim" => Ok(Command::Claim),
        "pass" => Ok(Command::Pass),
        "go" => Ok(Command::Go),
        "show" => Ok(Command::Show),

        "setoption" => parse_setoption(args),
        "position" => parse_position(args),
        "place" => parse_place(args),

        other => {
            warn!("unknown command: {}", other);
            return None;
        }
    };

    Some(parsed.unwrap_or_else(|reason| {
        warn!("malformed {}: {}", first, reason);
        Command::Invalid { reason }
    }))
}

/// Parses the arguments of `setoption name <id> [value <x>]`. The name runs
/// up to the first `value` token; everything after it is the value.
fn parse_setoption(args: &[&str]) -> Result<Command, String> {
    let Some((&"name", rest)) = args.split_first() else {
        return Err("expected 'setoption name <id> [value <x>]'".to_string());
    };
    let mut sections = rest.splitn(2, |&t| t == "value");
    let name = sections.next().unwrap_or_default().join(" ");
    if name.is_empty() {
        return Err("option name is empty".to_string());
    }
    let value = sections
        .next()
        .map(|v| v.join(" "))
        .filter(|v| !v.is_empty());
    Ok(Command::SetOption { name, value })
}

/// Parses the argument of `position <cpn>`. CPN is a single token.
fn parse_position(args: &[&str]) -> Result<Command, String> {
    match args {
        [cpn] => Ok(Command::Position {
            cpn: cpn.to_string(),
        }),
        _ => Err("expected 'position <cpn>'".to_string()),
    }
}

/// Parses the argument of `place <point>`.
fn parse_place(args: &[&str]) -> Result<Command, String> {
    match args {
        [point] => parse_point(point)
            .map(|point| Command::Place { point })
            .map_err(|e| e.to_string()),
        _ => Err("expected 'place <point>'".to_string()),
    }
}
