//! Lock and temp-credential state machines.
//!
//! Both machines are pure: they take the current record and produce a
//! [`Decision`] carrying the authorization verdict and, for granted
//! commands, the successor record to persist. The caller persists the
//! successor before committing it in memory or publishing, so a failed save
//! never leaves a success response without a durable record behind it.
//!
//! # State machines
//!
//! ```text
//! lock dimension                   temp-credential dimension
//!
//! ┌────────┐  Unlock  ┌──────────┐   ┌────────┐ Deactivate ┌──────────┐
//! │ Locked │─────────>│ Unlocked │   │ Active │──────────>│ Inactive │
//! │        │<─────────│          │   │        │<──────────│          │
//! └────────┘   Lock   └──────────┘   └────────┘  Activate └──────────┘
//!                                         │                    ▲
//!                                         └─── temp unlock ────┘
//! ```
//!
//! The dimensions are coupled by one rule: an unlock that actually toggles
//! the lock using the temporary credential also deactivates that credential
//! (the credential is consumed by use). A redundant unlock does not fire the
//! rule, matching the post-toggle gate in the reference behavior.

use crate::{
    command::Command,
    credential::{CredentialKind, classify},
    record::LockRecord,
    response::Response,
};

/// Outcome of applying a command to the current record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// The command that was applied.
    pub command: Command,
    /// Whether it was granted, and the successor record if so.
    pub verdict: Verdict,
}

/// Authorization verdict for a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Credential rejected. No state change, nothing to persist.
    Denied,

    /// Credential accepted. The successor record must be persisted before
    /// the success response is published - even for redundant commands, so
    /// persistence stays idempotent rather than skipped.
    Granted {
        /// The requested end-state already held.
        redundant: bool,
        /// Record to persist and commit.
        next: LockRecord,
    },
}

impl Decision {
    /// Response to publish once the decision has been executed.
    ///
    /// Denied decisions map to the failure response for their command;
    /// granted ones to the success response with the `Already`/`Now`
    /// prefix.
    #[must_use]
    pub fn response(&self) -> Response {
        match self.verdict {
            Verdict::Denied => Response::Denied { command: self.command },
            Verdict::Granted { redundant, .. } => {
                Response::Granted { command: self.command, redundant }
            },
        }
    }
}

/// Apply a command with a presented credential to the current record.
#[must_use]
pub fn apply(record: &LockRecord, command: Command, presented: &[u8]) -> Decision {
    let kind = classify(record, presented);

    let verdict = match command {
        Command::Lock => apply_lock(record, true, kind),
        Command::Unlock => apply_lock(record, false, kind),
        Command::ActivateTemp => apply_temp(record, true, kind),
        Command::DeactivateTemp => apply_temp(record, false, kind),
    };

    Decision { command, verdict }
}

/// Lock/unlock: any classified credential is authorized.
fn apply_lock(record: &LockRecord, engage: bool, kind: CredentialKind) -> Verdict {
    if kind == CredentialKind::None {
        return Verdict::Denied;
    }

    let redundant = record.locked == engage;
    let mut next = record.clone();

    if !redundant {
        next.locked = engage;

        // Using the temporary credential to actually disengage the lock
        // consumes it. Redundant unlocks never reach this branch.
        if kind == CredentialKind::Temporary && !next.locked {
            next.temp_active = false;
        }
    }

    Verdict::Granted { redundant, next }
}

/// Activate/deactivate the temporary credential: permanent credential only.
///
/// A valid `Temporary` classification is rejected here so the temporary
/// credential can never manage itself.
fn apply_temp(record: &LockRecord, activate: bool, kind: CredentialKind) -> Verdict {
    if kind != CredentialKind::Permanent {
        return Verdict::Denied;
    }

    let redundant = record.temp_active == activate;
    let mut next = record.clone();

    if !redundant {
        next.temp_active = activate;
    }

    Verdict::Granted { redundant, next }
}
