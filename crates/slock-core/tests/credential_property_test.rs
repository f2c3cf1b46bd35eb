//! Property tests for credential classification.
//!
//! Generates arbitrary presented credentials and verifies that nothing but
//! the permanent value and the active temporary value ever classifies.

use proptest::prelude::*;
use slock_core::{CredentialKind, LockRecord, Secret, classify};

const PERM: &[u8] = b"correct horse battery staple";
const TEMP: &[u8] = b"1234";

fn record(temp_active: bool) -> LockRecord {
    LockRecord {
        locked: true,
        temp_password: Secret::new("1234"),
        temp_active,
        permanent_password: Secret::new("correct horse battery staple"),
        qos: 1,
    }
}

proptest! {
    #[test]
    fn wrong_credentials_classify_as_none(presented in proptest::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(presented.as_slice() != PERM);
        prop_assume!(presented.as_slice() != TEMP);

        prop_assert_eq!(classify(&record(true), &presented), CredentialKind::None);
    }

    #[test]
    fn inactive_temp_rejects_everything_but_permanent(presented in proptest::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(presented.as_slice() != PERM);

        // With the temporary credential inactive, even its own value must
        // classify as None.
        prop_assert_eq!(classify(&record(false), &presented), CredentialKind::None);
    }

    #[test]
    fn permanent_always_classifies(temp_active in any::<bool>()) {
        prop_assert_eq!(classify(&record(temp_active), PERM), CredentialKind::Permanent);
    }
}
