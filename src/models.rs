//! Core data types that flow through the file and url pipelines.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::GameError;
use crate::game::Game;

/// Three document paths presumed to describe one game, plus the id the game
/// will be reported under (`YYYY-MM-DD-AWAY-HOME-N`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CandidateTriple {
    pub id: String,
    pub boxscore_path: PathBuf,
    pub roster_path: PathBuf,
    pub playbyplay_path: PathBuf,
}

impl CandidateTriple {
    pub fn paths(&self) -> [&PathBuf; 3] {
        [&self.boxscore_path, &self.roster_path, &self.playbyplay_path]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedGame {
    pub id: String,
    pub game: Game,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// One or more of the three documents is not on disk.
    MissingDocuments(Vec<PathBuf>),
    /// The documents parsed but the builder produced no game.
    NoGame,
}

/// What became of a single candidate.
#[derive(Debug)]
pub enum Outcome {
    Resolved(ResolvedGame),
    Skipped { id: String, reason: SkipReason },
    Failed { id: String, error: GameError },
}

/// A candidate that could not be resolved because of an error.
#[derive(Debug)]
pub struct TripleFailure {
    pub id: String,
    pub error: GameError,
}

/// Everything one batch produced. Sent as a single unit to the aggregator.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub games: Vec<ResolvedGame>,
    pub skipped: usize,
    pub failures: Vec<TripleFailure>,
}

impl BatchReport {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Resolved(game) => self.games.push(game),
            Outcome::Skipped { .. } => self.skipped += 1,
            Outcome::Failed { id, error } => self.failures.push(TripleFailure { id, error }),
        }
    }
}

/// Merged output of a file-mode run.
#[derive(Debug, Default)]
pub struct ResultSet {
    pub games: Vec<ResolvedGame>,
    pub candidates: usize,
    pub skipped: usize,
    pub failures: Vec<TripleFailure>,
    /// Batches whose worker panicked before reporting.
    pub lost_batches: usize,
}
