//! Inbound (topic, payload) dispatch.
//!
//! Maps each inbound message onto the closed [`Command`] enumeration and
//! runs the state machines against the current record. The payload bytes
//! are the presented credential.

use thiserror::Error;

use crate::{
    command::Command,
    machine::{self, Decision},
    record::LockRecord,
};

/// Routing failure for inbound messages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// The topic is not one of the command topics. The transport only
    /// forwards subscribed topics, so seeing this indicates a subscription
    /// or broker misconfiguration.
    #[error("no command mapped to topic {topic:?}")]
    UnknownTopic {
        /// The unrecognized topic.
        topic: String,
    },
}

/// Dispatch an inbound message to the state machines.
pub fn dispatch(
    record: &LockRecord,
    topic: &str,
    payload: &[u8],
) -> Result<Decision, RouteError> {
    let command = Command::from_topic(topic)
        .ok_or_else(|| RouteError::UnknownTopic { topic: topic.to_string() })?;

    Ok(machine::apply(record, command, payload))
}
