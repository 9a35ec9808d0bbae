//! Staking status derivation.
//!
//! Pure function of three inputs: wallet lock state, sync state, connection
//! count. A locked wallet cannot sign stakes at all; an unlocked (or
//! never-encrypted) wallet stakes once the chain is caught up and at least
//! one peer is connected. The coordinator recomputes this whenever any input
//! changes.

use meridian_models::{EncryptionStatus, StakingStatus};

pub fn derive(lock: EncryptionStatus, synced: bool, connections: usize) -> StakingStatus {
    if lock == EncryptionStatus::Locked {
        return StakingStatus::Disabled;
    }
    if synced && connections > 0 {
        StakingStatus::Staking
    } else {
        StakingStatus::NotStaking
    }
}

/// Tooltip line explaining the derived status.
pub fn reason(lock: EncryptionStatus, synced: bool, connections: usize) -> &'static str {
    if lock == EncryptionStatus::Locked {
        "Not staking because the wallet is locked"
    } else if connections == 0 {
        "Not staking because the wallet is offline"
    } else if !synced {
        "Not staking because the wallet is synchronizing"
    } else {
        "Staking"
    }
}
