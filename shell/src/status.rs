//! Status registry: the last-known value of every independently-updating
//! status dimension the window displays.
//!
//! Connection count and sync progress arrive as backend events; the registry
//! validates them, keeps the accepted values, and reports whether the
//! displayed value actually changed so the coordinator can skip redundant
//! indicator work. Nothing in here blocks and every operation is idempotent
//! for repeated identical input.

use crate::error::ShellError;
use chrono::{DateTime, Utc};

/// Local chain height against the network height estimate.
///
/// `total` is `None` until the first peer reports an estimate (backends send
/// 0 for "unknown"). Once known, the total never decreases: a smaller value
/// is a backend error and the update is rejected, while a `current` above
/// the estimate raises the estimate instead — the peer guess was low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncProgress {
    current: u64,
    total: Option<u64>,
}

impl SyncProgress {
    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// Percentage toward the known total, `None` while the total is unknown.
    pub fn percent(&self) -> Option<f32> {
        self.total
            .map(|total| (self.current as f32 / total as f32 * 100.0).clamp(0.0, 100.0))
    }

    /// Caught up with the network height estimate?
    pub fn is_synced(&self) -> bool {
        matches!(self.total, Some(total) if self.current >= total)
    }

    /// Text for the progress label.
    pub fn display_string(&self) -> String {
        match self.total {
            None => format!("{} blocks processed", self.current),
            Some(_) if self.is_synced() => format!("Up to date ({} blocks)", self.current),
            Some(total) => format!(
                "Synchronizing: {} of {} blocks ({:.0}%)",
                self.current,
                total,
                self.percent().unwrap_or(0.0)
            ),
        }
    }
}

pub struct StatusRegistry {
    connections: usize,
    sync: SyncProgress,
    /// Last estimate the backend itself reported, before clamping. The
    /// regression check compares against this, not the displayed total:
    /// once `current` has raised the displayed total above the estimate,
    /// the backend repeating its own unchanged estimate is not a
    /// regression and must not freeze the height.
    reported_total: Option<u64>,
    last_block_at: Option<DateTime<Utc>>,
}

impl StatusRegistry {
    pub fn new() -> Self {
        Self {
            connections: 0,
            sync: SyncProgress {
                current: 0,
                total: None,
            },
            reported_total: None,
            last_block_at: None,
        }
    }

    /// Record the peer count. Returns whether the displayed value changed.
    pub fn set_connections(&mut self, count: usize) -> bool {
        if self.connections == count {
            return false;
        }
        self.connections = count;
        true
    }

    pub fn connections(&self) -> usize {
        self.connections
    }

    /// Tooltip text for the connections indicator.
    pub fn connections_label(&self) -> String {
        match self.connections {
            1 => "1 active connection to the Meridian network".to_string(),
            n => format!("{} active connections to the Meridian network", n),
        }
    }

    /// Record a block-count update. `total` of 0 means the backend has no
    /// network height estimate yet; it never erases a previously known one.
    ///
    /// Returns whether the displayed progress changed, or
    /// [`ShellError::SyncTotalRegression`] when the estimate moved backwards
    /// (the update is not applied).
    pub fn set_sync_progress(&mut self, current: u64, total: u64) -> Result<bool, ShellError> {
        let proposed = if total == 0 { None } else { Some(total) };

        if let (Some(previous), Some(proposed)) = (self.reported_total, proposed) {
            if proposed < previous {
                return Err(ShellError::SyncTotalRegression {
                    previous,
                    proposed,
                });
            }
        }
        if proposed.is_some() {
            self.reported_total = proposed;
        }

        // Displayed total is monotonic: the larger of the known total and
        // the new estimate, raised further if `current` overtakes it.
        let mut new_total = match (self.sync.total, proposed) {
            (Some(known), Some(estimate)) => Some(known.max(estimate)),
            (known, estimate) => known.or(estimate),
        };
        if let Some(total) = new_total {
            if current > total {
                new_total = Some(current);
            }
        }

        let updated = SyncProgress {
            current,
            total: new_total,
        };
        if updated == self.sync {
            return Ok(false);
        }
        self.sync = updated;
        Ok(true)
    }

    pub fn sync(&self) -> SyncProgress {
        self.sync
    }

    /// Note when the tip last advanced, for the block-age display.
    pub fn record_block_time(&mut self, when: DateTime<Utc>) {
        self.last_block_at = Some(when);
    }

    pub fn last_block_at(&self) -> Option<DateTime<Utc>> {
        self.last_block_at
    }

    /// "Last received block was generated N ago" text, `None` before the
    /// first block.
    pub fn block_age_string(&self, now: DateTime<Utc>) -> Option<String> {
        let last = self.last_block_at?;
        let seconds = (now - last).num_seconds().max(0);
        let text = if seconds < 60 {
            plural(seconds, "second")
        } else if seconds < 3600 {
            plural(seconds / 60, "minute")
        } else if seconds < 86_400 {
            plural(seconds / 3600, "hour")
        } else {
            plural(seconds / 86_400, "day")
        };
        Some(format!("Last received block was generated {} ago", text))
    }
}

impl Default for StatusRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}
