//! Frontend seams.
//!
//! The shell never talks to a widget toolkit directly. Everything that
//! needs a screen goes through these traits, so the coordinator runs the
//! same under a real UI and under the test fakes.

use crate::notify::NotificationBatch;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowVisibility {
    Visible,
    Minimized,
    Hidden,
}

/// What the caller should do with a close request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Window hidden, app keeps running.
    Hidden,
    /// Really shut down.
    Quit,
}

/// Modal prompts. Every method blocks until the user answers; `None`
/// means they cancelled.
pub trait DialogService: Send {
    /// Ask whether to pay `amount` (base units) in transaction fees.
    fn confirm_fee(&mut self, amount: u64) -> bool;

    /// Prompt for a fresh passphrase when encrypting.
    fn ask_new_passphrase(&mut self) -> Option<String>;

    /// Prompt for the current passphrase to unlock.
    fn ask_unlock_passphrase(&mut self) -> Option<String>;

    /// Prompt for (current, new) passphrases.
    fn ask_passphrase_change(&mut self) -> Option<(String, String)>;

    /// Pick a destination for a wallet backup.
    fn ask_backup_path(&mut self) -> Option<PathBuf>;

    fn show_error(&mut self, title: &str, message: &str);
}

/// Non-modal surfaces: tray balloons, toasts, status-bar text.
pub trait AlertSink: Send {
    fn notify(&mut self, batch: &NotificationBatch);

    fn error(&mut self, title: &str, message: &str);
}

/// Minimal handle on the native window.
pub trait WindowHandle: Send {
    fn show_and_raise(&mut self);

    fn hide(&mut self);

    fn quit(&mut self);
}
