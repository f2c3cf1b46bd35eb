//! Command enumeration and topic names.
//!
//! The lock accepts exactly four commands, one per subscribed topic. The
//! message payload on each topic is the presented credential.

/// Topic on which the lock publishes responses and its last will.
pub const RESPONSE_TOPIC: &str = "lock/update";

/// Topic for engaging the lock.
pub const TOPIC_LOCK: &str = "lock/lock";

/// Topic for disengaging the lock.
pub const TOPIC_UNLOCK: &str = "lock/unlock";

/// Topic for activating the temporary credential.
pub const TOPIC_TEMP_ACTIVATE: &str = "lock/password/temp/activate";

/// Topic for deactivating the temporary credential.
pub const TOPIC_TEMP_DEACTIVATE: &str = "lock/password/temp/deactivate";

/// The commands the lock accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Engage the lock.
    Lock,
    /// Disengage the lock.
    Unlock,
    /// Activate the temporary credential.
    ActivateTemp,
    /// Deactivate the temporary credential.
    DeactivateTemp,
}

impl Command {
    /// Map an inbound topic to its command.
    ///
    /// Returns `None` for topics the lock does not subscribe to.
    #[must_use]
    pub fn from_topic(topic: &str) -> Option<Self> {
        match topic {
            TOPIC_LOCK => Some(Self::Lock),
            TOPIC_UNLOCK => Some(Self::Unlock),
            TOPIC_TEMP_ACTIVATE => Some(Self::ActivateTemp),
            TOPIC_TEMP_DEACTIVATE => Some(Self::DeactivateTemp),
            _ => None,
        }
    }

    /// All topics the lock subscribes to.
    #[must_use]
    pub const fn topics() -> [&'static str; 4] {
        [TOPIC_LOCK, TOPIC_UNLOCK, TOPIC_TEMP_ACTIVATE, TOPIC_TEMP_DEACTIVATE]
    }
}
