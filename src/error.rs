//! Error taxonomy shared by the file and url pipelines.
//!
//! Not every condition here is fatal to a run. A missing document in a game
//! folder is never an error at all (the candidate is skipped), and a reverse
//! team-code lookup that finds nothing is routine filtering. What remains
//! below is what callers actually have to handle.

use std::path::PathBuf;

use crate::document::ParseError;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The root directory handed to file mode does not exist.
    #[error("invalid input directory: {}", .0.display())]
    InvalidInputDirectory(PathBuf),

    /// Forward lookup of a team identifier that the registry does not know.
    #[error("unknown team: '{0}'")]
    UnknownTeam(String),

    #[error("could not parse date: '{0}'")]
    DateParse(String),

    /// A document failed to parse. `origin` names where the text came from
    /// (a file path or a URL).
    #[error("failed to parse {origin}: {error}")]
    Parse { origin: String, error: ParseError },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[error("request to {url} failed: {message}")]
    Fetch { url: String, message: String },

    /// The boxscore was found but a companion document was not.
    #[error("remote document not found: {0}")]
    MissingRemoteDocument(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl GameError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GameError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(origin: impl Into<String>, error: ParseError) -> Self {
        GameError::Parse {
            origin: origin.into(),
            error,
        }
    }
}
