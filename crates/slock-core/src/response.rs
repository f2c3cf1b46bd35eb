//! The closed response vocabulary.
//!
//! Every handled command terminates in exactly one of these fixed strings,
//! published on [`crate::command::RESPONSE_TOPIC`]. Consumers of the
//! response channel match on them verbatim, so the strings are fixed at
//! compile time and no other output is possible.

use std::fmt;

use crate::command::Command;

/// Formatted outcome of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// The command was authorized and its effect is durable (the effect may
    /// have been redundant).
    Granted {
        /// The command that was granted.
        command: Command,
        /// The requested end-state already held.
        redundant: bool,
    },

    /// The command was rejected, or its effect could not be made durable.
    Denied {
        /// The command that was denied.
        command: Command,
    },
}

impl Response {
    /// The exact wire string for this response.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Granted { command: Command::Lock, redundant: false } => {
                "Success: Lock Now Engaged"
            },
            Self::Granted { command: Command::Lock, redundant: true } => {
                "Success: Lock Already Engaged"
            },
            Self::Granted { command: Command::Unlock, redundant: false } => {
                "Success: Lock Now Disengaged"
            },
            Self::Granted { command: Command::Unlock, redundant: true } => {
                "Success: Lock Already Disengaged"
            },
            Self::Granted { command: Command::ActivateTemp, redundant: false } => {
                "Success: Temp Password Now Activated"
            },
            Self::Granted { command: Command::ActivateTemp, redundant: true } => {
                "Success: Temp Password Already Activated"
            },
            Self::Granted { command: Command::DeactivateTemp, redundant: false } => {
                "Success: Temp Password Now Deactivated"
            },
            Self::Granted { command: Command::DeactivateTemp, redundant: true } => {
                "Success: Temp Password Already Deactivated"
            },
            Self::Denied { command: Command::Lock } => "Failure: Locking Failed",
            Self::Denied { command: Command::Unlock } => "Failure: Unlocking Failed",
            Self::Denied { command: Command::ActivateTemp } => {
                "Failure: Temp Password Activation Failed"
            },
            Self::Denied { command: Command::DeactivateTemp } => {
                "Failure: Temp Password Deactivation Failed"
            },
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
