//! Printing resolved games to stdout.

use std::io::{self, Write};

use crate::models::ResolvedGame;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// Game id on one line, then the human rendering of the game.
    #[default]
    Text,
    /// One `{"id": ..., "game": {...}}` object per line.
    Json,
}

pub fn write_game<W: Write>(
    out: &mut W,
    resolved: &ResolvedGame,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", resolved.id)?;
            writeln!(out, "{}", resolved.game)
        }
        OutputFormat::Json => {
            let line = serde_json::to_string(resolved).map_err(io::Error::other)?;
            writeln!(out, "{line}")
        }
    }
}

pub fn write_games<W: Write>(
    out: &mut W,
    games: &[ResolvedGame],
    format: OutputFormat,
) -> io::Result<()> {
    for game in games {
        write_game(out, game, format)?;
    }
    out.flush()
}
