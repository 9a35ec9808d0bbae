//! Events the backend models emit toward the window shell.
//!
//! Backends run on worker threads; the shell hands each of them a cloned
//! sender and drains the channel on the interactive thread. Everything here
//! is fire-and-forget — the one synchronous backend-to-shell call (fee
//! confirmation) deliberately does not travel this path.

use crate::wallet::EncryptionStatus;

/// Which backend list grew, for notification purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertKind {
    Transaction,
    Message,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CoreEvent {
    /// Peer count changed.
    ConnectionCountChanged(usize),

    /// Local chain height and/or the network height estimate changed.
    /// `total` of 0 means no peer has reported an estimate yet.
    BlockCountChanged { current: u64, total: u64 },

    /// The wallet confirmed an encryption-state change.
    EncryptionStatusChanged(EncryptionStatus),

    /// A contiguous run of new items appeared in a backend list.
    /// `start..=end` are insertion-order indices under `scope`.
    RangeInserted {
        kind: InsertKind,
        scope: String,
        start: usize,
        end: usize,
    },

    /// The OS handed us a payment URI ("open with" integration). Parsing is
    /// the send view's job; the shell only navigates and prefills.
    UriReceived(String),

    /// A backend wants the user to see an error. `modal` selects a blocking
    /// dialog over a passive notification.
    BackendAlert {
        title: String,
        message: String,
        modal: bool,
    },
}
