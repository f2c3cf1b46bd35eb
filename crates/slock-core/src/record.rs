//! The durable lock record.

use serde::{Deserialize, Serialize};

use crate::credential::Secret;

/// The single durable record owned by the lock.
///
/// Loaded once at startup, held in memory as the sole source of truth, and
/// replaced wholesale after every granted command. `locked` and
/// `temp_active` are independent flags except for the retirement rule in
/// [`crate::machine`]: an unlock that actually toggles the lock using the
/// temporary credential also clears `temp_active`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockRecord {
    /// Current engagement state of the lock.
    pub locked: bool,

    /// Temporary credential value. Ignored entirely while `temp_active` is
    /// false.
    pub temp_password: Secret,

    /// Whether the temporary credential currently grants access.
    pub temp_active: bool,

    /// Permanent credential value. Immutable for the core's lifetime;
    /// managed externally.
    pub permanent_password: Secret,

    /// Transport QoS used when publishing responses (0, 1 or 2). Carried
    /// through for the transport layer, never interpreted here.
    pub qos: u8,
}
