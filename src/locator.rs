//! Game locator: discovers candidate triples in a local Gameday mirror.
//!
//! The mirror follows the service's own layout:
//!
//! ```text
//! <root>/<YEAR>/month_<MM>/day_<DD>/gid_<Y>_<MM>_<DD>_<away>mlb_<home>mlb_<N>/
//!     boxscore.xml
//!     players.xml
//!     inning/inning_all.xml
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;
use walkdir::WalkDir;

use crate::dates::{days_inclusive, ymd};
use crate::error::{GameError, GameResult};
use crate::models::CandidateTriple;
use crate::teams::TeamRegistry;

pub const GAME_FOLDER_PREFIX: &str = "gid_";
pub const BOXSCORE_FILE: &str = "boxscore.xml";
pub const PLAYERS_FILE: &str = "players.xml";
pub const INNING_DIR: &str = "inning";
pub const INNING_ALL_FILE: &str = "inning_all.xml";

/// Length of the league suffix on folder team tokens (`nyamlb` -> `nya`).
const TEAM_SUFFIX_LEN: usize = 3;

/// Walk every date in `start..=end` under `root` and collect the game folders
/// whose teams are known to `registry` and whose folder is not empty.
///
/// Output is date-ascending, then in directory-listing order within a date.
pub fn locate_games(
    start: NaiveDate,
    end: NaiveDate,
    root: &Path,
    registry: &TeamRegistry,
) -> GameResult<Vec<CandidateTriple>> {
    if !root.exists() {
        return Err(GameError::InvalidInputDirectory(root.to_path_buf()));
    }

    let mut candidates = Vec::new();
    for date in days_inclusive(start, end) {
        let (year, month, day) = ymd(date);
        let day_dir = root
            .join(&year)
            .join(format!("month_{month}"))
            .join(format!("day_{day}"));
        if !day_dir.is_dir() {
            continue;
        }
        debug!(dir = %day_dir.display(), "scanning day");

        for entry in WalkDir::new(&day_dir).min_depth(1).max_depth(1) {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy();
            if !name.starts_with(GAME_FOLDER_PREFIX) {
                continue;
            }
            let Some((away_code, home_code, game_number)) = split_folder_name(&name) else {
                debug!(folder = %name, "unrecognized game folder name");
                continue;
            };
            let (Some(away), Some(home)) =
                (registry.team_for(away_code), registry.team_for(home_code))
            else {
                debug!(folder = %name, "skipping folder for unknown teams");
                continue;
            };

            let folder = entry.path();
            if !has_entries(folder) {
                debug!(folder = %name, "skipping empty game folder");
                continue;
            }

            candidates.push(CandidateTriple {
                id: format!("{year}-{month}-{day}-{away}-{home}-{game_number}"),
                boxscore_path: folder.join(BOXSCORE_FILE),
                roster_path: folder.join(PLAYERS_FILE),
                playbyplay_path: folder.join(INNING_DIR).join(INNING_ALL_FILE),
            });
        }
    }

    Ok(candidates)
}

/// Pull `(away_code, home_code, game_number)` out of the trailing three
/// `_`-separated tokens of a game folder name.
fn split_folder_name(name: &str) -> Option<(&str, &str, &str)> {
    let mut tokens = name.rsplit('_');
    let game_number = tokens.next()?;
    let home = tokens.next()?;
    let away = tokens.next()?;
    Some((strip_suffix(away)?, strip_suffix(home)?, game_number))
}

fn strip_suffix(token: &str) -> Option<&str> {
    let cut = token.len().checked_sub(TEAM_SUFFIX_LEN)?;
    token.get(..cut)
}

fn has_entries(dir: &Path) -> bool {
    std::fs::read_dir(dir)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}

/// The folder a game would live in, for a given date and pair of codes.
pub fn game_folder(
    root: &Path,
    date: NaiveDate,
    away_code: &str,
    home_code: &str,
    game_number: &str,
) -> PathBuf {
    let (year, month, day) = ymd(date);
    root.join(&year)
        .join(format!("month_{month}"))
        .join(format!("day_{day}"))
        .join(format!(
            "{GAME_FOLDER_PREFIX}{year}_{month}_{day}_{away_code}mlb_{home_code}mlb_{game_number}"
        ))
}
