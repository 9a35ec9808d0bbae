//! Encrypted-message store boundary.
//!
//! Incoming messages reach the shell as `RangeInserted` events, exactly like
//! incoming transactions; this trait covers the few reads the shell performs
//! directly.

pub trait MessageBackend: Send + Sync {
    /// Number of messages in the store.
    fn message_count(&self) -> usize;

    /// Number of messages not yet read by the user.
    fn unread_count(&self) -> usize;
}
