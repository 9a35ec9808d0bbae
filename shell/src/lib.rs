//! Meridian Wallet Shell
//!
//! The headless core of the desktop wallet's main window: it keeps the
//! on-screen status indicators consistent with the asynchronous network and
//! wallet backends, coalesces incoming-item notifications, runs the wallet
//! lock state machine, and arbitrates the one cross-thread blocking decision
//! (fee confirmation). Widgets, tray integration, and the backends
//! themselves live elsewhere and reach this crate only through the traits in
//! [`frontend`] and `meridian-models`.

pub mod actions;
pub mod config;
pub mod confirm;
pub mod error;
pub mod frontend;
pub mod lock;
pub mod nav;
pub mod notify;
pub mod shell;
pub mod staking;
pub mod status;

pub use actions::{action_table, ActionContext, ActionId, ActionSpec};
pub use config::{AmountDisplay, ShellConfig};
pub use confirm::{fee_confirmation_channel, FeeConfirmationInbox, FeeConfirmer, FeeRequest};
pub use error::ShellError;
pub use frontend::{AlertSink, CloseOutcome, DialogService, WindowHandle, WindowVisibility};
pub use lock::LockStateMachine;
pub use nav::{NavParam, Navigator, Page, PageView};
pub use notify::{Coalescer, NotificationBatch};
pub use shell::{Indicator, Shell};
pub use status::{StatusRegistry, SyncProgress};
