//! Core decision logic for the slock smart lock.
//!
//! Every inbound command is reduced to a [`Decision`] by pure functions over
//! the current [`LockRecord`]: no I/O, no clock, no logging. The runtime
//! that owns the record executes the decision - persist the successor
//! record, commit it in memory, then publish the response. This keeps the
//! authentication and state-transition rules deterministic and testable
//! without a broker or a filesystem.
//!
//! # Components
//!
//! - [`credential`]: constant-time credential classification
//! - [`record`]: the durable lock record
//! - [`machine`]: the lock and temp-credential state machines
//! - [`response`]: the closed response vocabulary
//! - [`command`]: command enumeration and topic names
//! - [`router`]: inbound (topic, payload) dispatch

pub mod command;
pub mod credential;
pub mod machine;
pub mod record;
pub mod response;
pub mod router;

pub use command::Command;
pub use credential::{CredentialKind, Secret, classify};
pub use machine::{Decision, Verdict, apply};
pub use record::LockRecord;
pub use response::Response;
pub use router::{RouteError, dispatch};
