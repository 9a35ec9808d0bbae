//! Meridian Backend Model Interfaces
//!
//! The window shell talks to three backend subsystems: the network client,
//! the wallet, and the encrypted-message store. All of them live on their own
//! worker threads and are reached from the shell only through the traits and
//! event types declared here. The shell never owns a backend; it holds
//! non-owning handles good for two things: receiving change notifications and
//! reading current state on demand.

pub mod client;
pub mod events;
pub mod messages;
pub mod wallet;

pub use client::ClientBackend;
pub use events::{CoreEvent, InsertKind};
pub use messages::MessageBackend;
pub use wallet::{BackendError, EncryptionStatus, StakingStatus, WalletBackend};
