//! Wallet lock/encryption state machine.
//!
//! Three states, driven only by explicit user actions and by backend
//! confirmations of those actions: `Unencrypted → encrypt → Locked →
//! unlock → Unlocked → lock → Locked`. Encryption is irreversible, so
//! nothing ever leads back to `Unencrypted`. Every operation asks the
//! wallet backend first and transitions only on success; a rejected
//! passphrase or an invalid transition leaves the state exactly where it
//! was.

use crate::error::ShellError;
use meridian_models::{EncryptionStatus, WalletBackend};

pub struct LockStateMachine {
    status: EncryptionStatus,
}

impl LockStateMachine {
    pub fn new(initial: EncryptionStatus) -> Self {
        Self { status: initial }
    }

    pub fn status(&self) -> EncryptionStatus {
        self.status
    }

    pub fn is_encrypted(&self) -> bool {
        self.status.is_encrypted()
    }

    /// Encrypt a never-encrypted wallet. Ends `Locked` on success.
    pub fn encrypt(
        &mut self,
        wallet: &dyn WalletBackend,
        passphrase: &str,
    ) -> Result<bool, ShellError> {
        if self.status.is_encrypted() {
            return Err(ShellError::WalletAlreadyEncrypted);
        }
        wallet.encrypt(passphrase)?;
        self.status = EncryptionStatus::Locked;
        log::info!("🔐 Wallet encrypted; keys are now locked");
        Ok(true)
    }

    /// Unseal a locked wallet. Returns whether the state changed; an
    /// already-unlocked wallet is a no-op.
    pub fn unlock(
        &mut self,
        wallet: &dyn WalletBackend,
        passphrase: &str,
    ) -> Result<bool, ShellError> {
        match self.status {
            EncryptionStatus::Unencrypted => Err(ShellError::WalletNotEncrypted),
            EncryptionStatus::Unlocked => Ok(false),
            EncryptionStatus::Locked => {
                wallet.unlock(passphrase)?;
                self.status = EncryptionStatus::Unlocked;
                log::info!("🔓 Wallet unlocked");
                Ok(true)
            }
        }
    }

    /// Seal the keys again. Returns whether the state changed; an
    /// already-locked wallet is a no-op.
    pub fn lock(&mut self, wallet: &dyn WalletBackend) -> Result<bool, ShellError> {
        match self.status {
            EncryptionStatus::Unencrypted => Err(ShellError::WalletNotEncrypted),
            EncryptionStatus::Locked => Ok(false),
            EncryptionStatus::Unlocked => {
                wallet.lock()?;
                self.status = EncryptionStatus::Locked;
                log::info!("🔒 Wallet locked");
                Ok(true)
            }
        }
    }

    /// Re-key the keystore. Valid whenever a passphrase exists; never moves
    /// the state.
    pub fn change_passphrase(
        &self,
        wallet: &dyn WalletBackend,
        old: &str,
        new: &str,
    ) -> Result<(), ShellError> {
        if !self.status.is_encrypted() {
            return Err(ShellError::WalletNotEncrypted);
        }
        wallet.change_passphrase(old, new)?;
        log::info!("🔑 Wallet passphrase changed");
        Ok(())
    }

    /// Ingest an `encryptionStatusChanged` confirmation from the backend.
    /// Returns whether the state changed. A claim that an encrypted wallet
    /// went back to `Unencrypted` is a backend bug and is ignored.
    pub fn apply_backend_status(&mut self, status: EncryptionStatus) -> bool {
        if status == self.status {
            return false;
        }
        if self.status.is_encrypted() && status == EncryptionStatus::Unencrypted {
            log::warn!("backend reported an encrypted wallet as unencrypted; ignoring");
            return false;
        }
        log::info!(
            "wallet encryption status: {:?} -> {:?}",
            self.status,
            status
        );
        self.status = status;
        true
    }
}
