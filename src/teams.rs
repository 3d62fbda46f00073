//! Team code registry.
//!
//! Maps the human team identifiers used on the command line and in game ids
//! (`NYY`, `BOS`, ...) to the three-letter codes the Gameday service uses in
//! folder names and URLs (`nya`, `bos`, ...).

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{GameError, GameResult};

/// (identifier, gameday code) for every club.
const MLB_TEAMS: &[(&str, &str)] = &[
    ("ARI", "ari"),
    ("ATL", "atl"),
    ("BAL", "bal"),
    ("BOS", "bos"),
    ("CHC", "chn"),
    ("CWS", "cha"),
    ("CIN", "cin"),
    ("CLE", "cle"),
    ("COL", "col"),
    ("DET", "det"),
    ("HOU", "hou"),
    ("KC", "kca"),
    ("LAA", "ana"),
    ("LAD", "lan"),
    ("MIA", "mia"),
    ("MIL", "mil"),
    ("MIN", "min"),
    ("NYM", "nyn"),
    ("NYY", "nya"),
    ("OAK", "oak"),
    ("PHI", "phi"),
    ("PIT", "pit"),
    ("SD", "sdn"),
    ("SEA", "sea"),
    ("SF", "sfn"),
    ("STL", "sln"),
    ("TB", "tba"),
    ("TEX", "tex"),
    ("TOR", "tor"),
    ("WSH", "was"),
];

/// Immutable bidirectional lookup between team identifiers and codes.
#[derive(Debug, Clone)]
pub struct TeamRegistry {
    codes: HashMap<&'static str, &'static str>,
    teams: HashMap<&'static str, &'static str>,
}

impl TeamRegistry {
    fn from_pairs(pairs: &[(&'static str, &'static str)]) -> Self {
        let codes = pairs.iter().copied().collect();
        let teams = pairs.iter().map(|&(team, code)| (code, team)).collect();
        Self { codes, teams }
    }

    /// The registry of major league clubs, built on first use.
    pub fn mlb() -> &'static TeamRegistry {
        static REGISTRY: OnceLock<TeamRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| TeamRegistry::from_pairs(MLB_TEAMS))
    }

    /// Forward lookup. Exact match only; an unknown identifier is an error.
    pub fn code_for(&self, team: &str) -> GameResult<&'static str> {
        self.codes
            .get(team)
            .copied()
            .ok_or_else(|| GameError::UnknownTeam(team.to_string()))
    }

    /// Reverse lookup. `None` is a normal answer here, used to filter out
    /// folders for teams outside the registry.
    pub fn team_for(&self, code: &str) -> Option<&'static str> {
        self.teams.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
