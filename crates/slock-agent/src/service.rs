//! Command service owning the in-memory record and its durable store.

use slock_core::{Decision, LockRecord, Response, RouteError, Verdict, router};
use slock_store::StateStore;
use tracing::{error, info, warn};

/// Owns the lock record and applies inbound commands to it.
///
/// Exactly one `LockService` exists per lock, owned by the transport event
/// loop task. Commands are handled to completion, one at a time, in arrival
/// order; there is never a second mutation in flight against the record.
#[derive(Debug)]
pub struct LockService {
    record: LockRecord,
    store: StateStore,
}

impl LockService {
    /// Create a service around an already-loaded record.
    pub fn new(record: LockRecord, store: StateStore) -> Self {
        Self { record, store }
    }

    /// Current in-memory record.
    #[must_use]
    pub fn record(&self) -> &LockRecord {
        &self.record
    }

    /// Handle one inbound (topic, payload) message and return the response
    /// string to publish.
    ///
    /// Granted commands are persisted before they are committed in memory or
    /// acknowledged. If the save fails the in-memory record is left
    /// untouched and the command is reported as failed: a success response
    /// must always have a durable record behind it.
    pub fn handle(&mut self, topic: &str, payload: &[u8]) -> Result<&'static str, RouteError> {
        let Decision { command, verdict } = router::dispatch(&self.record, topic, payload)?;

        let response = match verdict {
            Verdict::Denied => {
                warn!(?command, "command denied");
                Response::Denied { command }
            },
            Verdict::Granted { redundant, next } => match self.store.save(&next) {
                Ok(()) => {
                    self.record = next;
                    info!(?command, redundant, "command applied");
                    Response::Granted { command, redundant }
                },
                Err(err) => {
                    // The mutation never became durable, so it must not be
                    // reported as a success.
                    error!(?command, error = %err, "state save failed");
                    Response::Denied { command }
                },
            },
        };

        Ok(response.as_str())
    }
}
