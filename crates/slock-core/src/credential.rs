//! Credential classification.
//!
//! Presented credentials are compared against the record's secrets in
//! constant time, so a mismatch reveals nothing about the stored value
//! through timing. Comparison takes raw bytes: a non-UTF-8 payload is
//! simply a credential that matches nothing, not an error path.

use std::fmt;

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::record::LockRecord;

/// A credential value held by the lock.
///
/// Wraps the plaintext so it never appears in `Debug` output and so every
/// comparison goes through [`Secret::matches`] rather than ad-hoc string
/// equality. Upgrading to hashed credentials later only touches this type;
/// the state machines never see the raw value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    /// Wrap a plaintext credential value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Constant-time comparison against presented bytes.
    #[must_use]
    pub fn matches(&self, presented: &[u8]) -> bool {
        self.0.as_bytes().ct_eq(presented).into()
    }

    /// The plaintext value, for handing to the transport's authenticator.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Classification of a presented credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    /// Matches nothing the lock knows about.
    None,
    /// The permanent credential.
    Permanent,
    /// The temporary credential, which is currently active.
    Temporary,
}

/// Classify `presented` against the record's credentials.
///
/// The temporary credential only classifies as
/// [`CredentialKind::Temporary`] while `temp_active` is set; otherwise it is
/// indistinguishable from any other wrong credential.
#[must_use]
pub fn classify(record: &LockRecord, presented: &[u8]) -> CredentialKind {
    if record.permanent_password.matches(presented) {
        CredentialKind::Permanent
    } else if record.temp_active && record.temp_password.matches(presented) {
        CredentialKind::Temporary
    } else {
        CredentialKind::None
    }
}
