//! Wallet model boundary: encryption states, staking states, and the
//! operations the shell may ask the wallet backend to perform.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("passphrase rejected by wallet")]
    PassphraseRejected,

    #[error("wallet is already encrypted")]
    AlreadyEncrypted,

    #[error("wallet is not encrypted")]
    NotEncrypted,

    #[error("backend unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Wallet encryption status as reported by the backend.
///
/// Encryption is irreversible in this domain: once a wallet has been
/// encrypted there is no path back to `Unencrypted`, only `Locked` and
/// `Unlocked` remain reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncryptionStatus {
    /// Wallet has never been encrypted; no passphrase exists.
    Unencrypted,
    /// Wallet is encrypted and the keys are currently sealed.
    Locked,
    /// Wallet is encrypted and the passphrase has been entered.
    Unlocked,
}

impl EncryptionStatus {
    /// Whether a passphrase exists at all (`Locked` or `Unlocked`).
    pub fn is_encrypted(&self) -> bool {
        !matches!(self, EncryptionStatus::Unencrypted)
    }

    /// Tooltip/status-bar text for the encryption indicator.
    pub fn display_string(&self) -> &'static str {
        match self {
            EncryptionStatus::Unencrypted => "Wallet is not encrypted",
            EncryptionStatus::Locked => "Wallet is encrypted and currently locked",
            EncryptionStatus::Unlocked => "Wallet is encrypted and currently unlocked",
        }
    }
}

/// Staking status shown next to the encryption indicator.
///
/// Derived state: the shell recomputes it from lock state, sync state, and
/// connection count; backends never report it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StakingStatus {
    /// Minting blocks.
    Staking,
    /// Eligible but waiting (offline or still synchronizing).
    NotStaking,
    /// Structurally prevented, e.g. the wallet is locked.
    Disabled,
}

impl StakingStatus {
    pub fn display_string(&self) -> &'static str {
        match self {
            StakingStatus::Staking => "Staking",
            StakingStatus::NotStaking => "Not staking",
            StakingStatus::Disabled => "Staking disabled",
        }
    }
}

/// Operations the shell may request from the wallet backend.
///
/// Every passphrase-taking call validates against the real keystore; the
/// shell transitions its own lock state machine only after the backend
/// confirms. Implementations are called on the interactive thread and must
/// not block on user input themselves.
pub trait WalletBackend: Send + Sync {
    /// Current encryption status, read on demand (e.g. when the shell
    /// attaches to a wallet that was created earlier).
    fn encryption_status(&self) -> EncryptionStatus;

    /// Encrypt a never-encrypted wallet with `passphrase`.
    fn encrypt(&self, passphrase: &str) -> Result<(), BackendError>;

    /// Unseal the keys of a locked wallet.
    fn unlock(&self, passphrase: &str) -> Result<(), BackendError>;

    /// Seal the keys again.
    fn lock(&self) -> Result<(), BackendError>;

    /// Re-key the keystore; valid whenever a passphrase exists.
    fn change_passphrase(&self, old: &str, new: &str) -> Result<(), BackendError>;

    /// Write a backup of the wallet file to `destination`.
    fn backup(&self, destination: &Path) -> Result<(), BackendError>;

    /// Number of transactions in the wallet history.
    fn transaction_count(&self) -> usize;
}
