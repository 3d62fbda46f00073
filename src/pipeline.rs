//! File-mode orchestration: locate, partition, resolve in parallel.

use std::num::NonZeroUsize;
use std::path::Path;

use tracing::{info, warn};

use crate::aggregate::resolve_in_parallel;
use crate::dates::parse_date;
use crate::error::{GameError, GameResult};
use crate::game::GameBuilder;
use crate::locator::locate_games;
use crate::models::ResultSet;
use crate::partition::partition;
use crate::teams::TeamRegistry;

/// Resolve every game stored under `input_dir` between `start` and `end`
/// (inclusive). Games come back batch by batch; see
/// [`resolve_in_parallel`](crate::aggregate::resolve_in_parallel).
pub fn games_from_files<B>(
    start: &str,
    end: &str,
    input_dir: &Path,
    workers: NonZeroUsize,
    builder: &B,
) -> GameResult<ResultSet>
where
    B: GameBuilder + ?Sized,
{
    if !input_dir.exists() {
        return Err(GameError::InvalidInputDirectory(input_dir.to_path_buf()));
    }
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    if start > end {
        warn!(%start, %end, "start date is after end date; nothing to do");
    }

    let candidates = locate_games(start, end, input_dir, TeamRegistry::mlb())?;
    info!(
        candidates = candidates.len(),
        workers = workers.get(),
        "located game folders"
    );

    let batches = partition(candidates, workers);
    let result = resolve_in_parallel(batches, builder);
    info!(
        candidates = result.candidates,
        resolved = result.games.len(),
        skipped = result.skipped,
        failed = result.failures.len(),
        lost_batches = result.lost_batches,
        "file run complete"
    );
    Ok(result)
}
