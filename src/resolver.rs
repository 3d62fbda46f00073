//! Batch resolver: turns candidate triples into games, one batch at a time.
//!
//! Missing documents are routine (in-progress mirrors, rained-out games) and
//! only skip the triple. A document that fails to read or parse fails that
//! triple alone; the rest of the batch carries on.

use std::path::Path;

use tracing::{debug, warn};

use crate::document::{parse_document, Document};
use crate::error::{GameError, GameResult};
use crate::game::GameBuilder;
use crate::models::{BatchReport, CandidateTriple, Outcome, ResolvedGame, SkipReason};

/// Resolve one candidate. Filesystem reads only.
pub fn resolve_triple<B>(triple: CandidateTriple, builder: &B) -> Outcome
where
    B: GameBuilder + ?Sized,
{
    let missing: Vec<_> = triple
        .paths()
        .into_iter()
        .filter(|p| !p.is_file())
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Outcome::Skipped {
            id: triple.id,
            reason: SkipReason::MissingDocuments(missing),
        };
    }

    let documents = load(&triple.boxscore_path).and_then(|boxscore| {
        Ok((
            boxscore,
            load(&triple.roster_path)?,
            load(&triple.playbyplay_path)?,
        ))
    });
    let (boxscore, roster, plays) = match documents {
        Ok(docs) => docs,
        Err(error) => {
            return Outcome::Failed {
                id: triple.id,
                error,
            }
        }
    };

    match builder.build(&boxscore, &roster, &plays) {
        Some(game) => Outcome::Resolved(ResolvedGame {
            id: triple.id,
            game,
        }),
        None => Outcome::Skipped {
            id: triple.id,
            reason: SkipReason::NoGame,
        },
    }
}

fn load(path: &Path) -> GameResult<Document> {
    let text = std::fs::read_to_string(path).map_err(|e| GameError::io(path, e))?;
    parse_document(&text).map_err(|e| GameError::parse(path.display().to_string(), e))
}

/// Resolve every triple of a batch in order.
pub fn resolve_batch<B>(batch: Vec<CandidateTriple>, builder: &B) -> BatchReport
where
    B: GameBuilder + ?Sized,
{
    let mut report = BatchReport::default();
    for triple in batch {
        let outcome = resolve_triple(triple, builder);
        match &outcome {
            Outcome::Resolved(_) => {}
            Outcome::Skipped { id, reason } => debug!(%id, ?reason, "skipped candidate"),
            Outcome::Failed { id, error } => warn!(%id, %error, "failed to resolve candidate"),
        }
        report.record(outcome);
    }
    report
}
