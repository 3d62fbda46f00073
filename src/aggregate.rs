//! Parallel aggregation of batch results.
//!
//! One scoped worker thread per batch. Each worker owns its batch outright,
//! shares nothing but the read-only builder, and sends its whole
//! [`BatchReport`] down a single channel exactly once. The orchestrator joins
//! every worker before draining the channel, then orders reports by batch
//! index so the merged list reads batch by batch.

use std::sync::mpsc;
use std::thread;

use tracing::{debug, error};

use crate::game::GameBuilder;
use crate::models::{BatchReport, CandidateTriple, ResultSet};
use crate::resolver::resolve_batch;

pub fn resolve_in_parallel<B>(batches: Vec<Vec<CandidateTriple>>, builder: &B) -> ResultSet
where
    B: GameBuilder + ?Sized,
{
    let batch_count = batches.len();
    let candidates: usize = batches.iter().map(Vec::len).sum();
    let (tx, rx) = mpsc::channel::<(usize, BatchReport)>();

    thread::scope(|scope| {
        let workers: Vec<_> = batches
            .into_iter()
            .enumerate()
            .map(|(index, batch)| {
                let tx = tx.clone();
                let handle = scope.spawn(move || {
                    debug!(batch = index, size = batch.len(), "worker started");
                    let report = resolve_batch(batch, builder);
                    // The receiver outlives the scope, so this cannot fail.
                    let _ = tx.send((index, report));
                });
                (index, handle)
            })
            .collect();

        for (index, handle) in workers {
            if handle.join().is_err() {
                error!(batch = index, "worker panicked; its batch is lost");
            }
        }
    });
    drop(tx);

    let mut reports: Vec<(usize, BatchReport)> = rx.into_iter().collect();
    reports.sort_by_key(|(index, _)| *index);

    let mut merged = ResultSet {
        candidates,
        lost_batches: batch_count - reports.len(),
        ..ResultSet::default()
    };
    for (_, report) in reports {
        merged.games.extend(report.games);
        merged.skipped += report.skipped;
        merged.failures.extend(report.failures);
    }
    merged
}
