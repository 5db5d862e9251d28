//! Remote reconciliation service.
//!
//! A cycle fetches the remote snapshot, merges quotes that don't already
//! exist locally, and persists the additions. The merge is append-only:
//! nothing is ever updated or removed, and any pair differing by even one
//! character counts as a distinct quote. Pushes of newly added local quotes
//! are best-effort and never retried.

use std::time::{Duration, Instant};

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::{PushOutcome, Quote, Result, Severity, SyncConfig, SyncOutcome, SyncReport};
use crate::infrastructure::RemoteClient;

use super::formatter::format_notice;
use super::notifier::Notifier;
use super::quote_store::QuoteStore;

/// Result of merging a remote snapshot into a local one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    /// The local sequence with non-duplicate remote quotes appended.
    pub merged: Vec<Quote>,
    /// True iff at least one quote was appended.
    pub changed: bool,
}

/// Append every remote quote that has no exact (text, category) match in
/// `local`.
///
/// Duplicates inside the remote batch itself are also collapsed, since each
/// candidate is checked against the growing result. Idempotent: re-running
/// with the same remote input yields `changed = false`.
#[must_use]
pub fn merge(local: &[Quote], remote: Vec<Quote>) -> MergeResult {
    let mut merged = local.to_vec();
    let mut changed = false;

    for candidate in remote {
        if !merged.contains(&candidate) {
            merged.push(candidate);
            changed = true;
        }
    }

    MergeResult { merged, changed }
}

/// Service driving fetch, merge and push against the remote endpoints.
pub struct SyncService {
    client: RemoteClient,
}

impl SyncService {
    /// Build the service from the sync configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be constructed.
    pub fn new(config: &SyncConfig) -> Result<Self> {
        Ok(Self {
            client: RemoteClient::new(config)?,
        })
    }

    /// Run one reconciliation cycle against the store.
    ///
    /// The local collection is snapshotted once before merging so an
    /// interleaved cycle cannot skew the membership test. Fetch failures
    /// leave local state untouched and report `Unreachable`.
    ///
    /// # Errors
    /// Returns error only if persisting the additions fails; network
    /// failures are folded into the outcome.
    pub async fn run_cycle(
        &self,
        store: &mut QuoteStore,
        notifier: &mut Notifier,
    ) -> Result<SyncReport> {
        let started = Instant::now();
        notifier.notify("Syncing with server...", Severity::Info);

        // Snapshot once per cycle
        let local = store.quotes().to_vec();

        let remote = match self.client.fetch_quotes().await {
            Ok(remote) => remote,
            Err(e) => {
                tracing::warn!(error = %e, "Remote fetch failed, staying on local state");
                notifier.notify("Server unreachable - working offline.", Severity::Error);
                return Ok(report(
                    SyncOutcome::Unreachable {
                        reason: e.to_string(),
                    },
                    started,
                ));
            }
        };

        let MergeResult { merged, changed } = merge(&local, remote);

        let outcome = if changed {
            let additions = merged[local.len()..].to_vec();
            let added = additions.len();
            store.append_many(additions)?;
            notifier.notify("New quotes merged from server.", Severity::Success);
            SyncOutcome::Merged { added }
        } else {
            notifier.notify("No new quotes on server.", Severity::Info);
            SyncOutcome::NoChange
        };

        let elapsed = started.elapsed();
        tracing::info!(
            outcome = ?outcome,
            duration_ms = elapsed.as_millis(),
            "Sync cycle completed"
        );

        Ok(report(outcome, started))
    }

    /// Best-effort push of one newly added quote to the remote sink.
    ///
    /// A failure is logged and reported in the return value, never as an
    /// error, and is not retried.
    pub async fn push_one(&self, quote: &Quote) -> PushOutcome {
        match self.client.push_quote(quote).await {
            Ok(()) => PushOutcome::Delivered,
            Err(e) => {
                tracing::warn!(error = %e, "Push failed, quote kept locally");
                PushOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

fn report(outcome: SyncOutcome, started: Instant) -> SyncReport {
    SyncReport {
        outcome,
        completed_at: Utc::now(),
        duration_ms: started.elapsed().as_millis(),
    }
}

/// Handle to a running background sync loop.
pub struct SyncHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SyncHandle {
    /// Stop the loop and wait for the in-flight cycle to finish.
    pub async fn stop(self) {
        // Receivers dropping is fine; the loop also exits on send error.
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}

/// Start the recurring sync loop: one cycle immediately, then one per
/// interval until the handle is stopped.
///
/// The task owns the store and notifier for its lifetime; notices are
/// printed as cycles complete.
#[must_use]
pub fn spawn_sync_loop(
    service: SyncService,
    mut store: QuoteStore,
    mut notifier: Notifier,
    interval: Duration,
) -> SyncHandle {
    let (shutdown, mut shutdown_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // First tick fires immediately, giving the startup cycle.
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match service.run_cycle(&mut store, &mut notifier).await {
                        Ok(_report) => {
                            if let Some(notice) = notifier.current(Instant::now()) {
                                println!("{}", format_notice(notice));
                            }
                        }
                        Err(e) => tracing::error!(error = %e, "Sync cycle failed to persist"),
                    }
                }
                _ = shutdown_rx.changed() => break,
            }
        }
    });

    SyncHandle { shutdown, task }
}
