//! Shell error taxonomy.
//!
//! Nothing here is fatal: the coordinator surfaces backend failures to the
//! user and drops ignored updates on the floor with a log line. Errors are
//! never retried automatically — retry is always a fresh user action.

use crate::nav::Page;
use meridian_models::BackendError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    /// Navigation to a page no view was registered for. Programmer error,
    /// additionally asserted in debug builds.
    #[error("no view registered for page {0:?}")]
    InvalidPage(Page),

    /// The network height estimate moved backwards. The update is ignored.
    #[error("sync total regressed from {previous} to {proposed}")]
    SyncTotalRegression { previous: u64, proposed: u64 },

    /// A backend reported an inserted range with start > end.
    #[error("invalid insert range {start}..={end}")]
    InvalidRange { start: usize, end: usize },

    /// The wallet backend refused the supplied passphrase.
    #[error("passphrase rejected by wallet")]
    PassphraseRejected,

    /// Lock, unlock or change-passphrase on a never-encrypted wallet.
    #[error("wallet is not encrypted")]
    WalletNotEncrypted,

    /// Encrypt on a wallet that already has a passphrase.
    #[error("wallet is already encrypted")]
    WalletAlreadyEncrypted,

    /// A wallet operation was requested before a wallet model was attached.
    #[error("no wallet attached")]
    NoWallet,

    /// Any other backend failure, surfaced verbatim.
    #[error("wallet backend: {0}")]
    Backend(BackendError),
}

impl From<BackendError> for ShellError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::PassphraseRejected => ShellError::PassphraseRejected,
            BackendError::AlreadyEncrypted => ShellError::WalletAlreadyEncrypted,
            BackendError::NotEncrypted => ShellError::WalletNotEncrypted,
            other => ShellError::Backend(other),
        }
    }
}
