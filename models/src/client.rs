//! Network client model boundary.
//!
//! The client is the wallet-agnostic part of the core: peer connections and
//! block synchronization. The shell receives its changes as [`CoreEvent`]s
//! and uses this trait only for on-demand reads, mainly to pull an initial
//! snapshot at attach time.
//!
//! [`CoreEvent`]: crate::events::CoreEvent

use chrono::{DateTime, Utc};

pub trait ClientBackend: Send + Sync {
    /// Number of peers currently connected.
    fn connection_count(&self) -> usize;

    /// Height of the local best chain.
    fn block_count(&self) -> u64;

    /// Best estimate of the network chain height, 0 while no peer has
    /// reported one yet.
    fn total_block_estimate(&self) -> u64;

    /// Timestamp of the most recent block on the local best chain, `None`
    /// before the first block arrives.
    fn last_block_time(&self) -> Option<DateTime<Utc>>;
}
