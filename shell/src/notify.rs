//! Notification coalescing.
//!
//! Backends report newly-inserted transactions and messages as index ranges,
//! not single items; one reported range becomes exactly one user-visible
//! alert no matter how many items it covers, so an initial sync or a bulk
//! import cannot flood the tray. Duplicate ranges stay duplicates — spotting
//! them is the emitting model's job, not ours.

use crate::error::ShellError;
use meridian_models::InsertKind;

/// One alert's worth of newly-arrived items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationBatch {
    pub kind: InsertKind,
    /// Which backend list the indices refer to.
    pub scope: String,
    pub start: usize,
    pub end: usize,
}

impl NotificationBatch {
    pub fn count(&self) -> usize {
        self.end - self.start + 1
    }

    /// Balloon title.
    pub fn title(&self) -> &'static str {
        match self.kind {
            InsertKind::Transaction => "Incoming transactions",
            InsertKind::Message => "Incoming messages",
        }
    }

    /// Balloon body, e.g. "5 new transactions".
    pub fn summary(&self) -> String {
        let noun = match self.kind {
            InsertKind::Transaction => "transaction",
            InsertKind::Message => "message",
        };
        match self.count() {
            1 => format!("1 new {}", noun),
            n => format!("{} new {}s", n, noun),
        }
    }
}

pub struct Coalescer {
    /// Alert even while the window is visible and focused. Off by default:
    /// the visible list updating is feedback enough.
    notify_when_active: bool,
}

impl Coalescer {
    pub fn new(notify_when_active: bool) -> Self {
        Self { notify_when_active }
    }

    /// Turn one reported insertion range into at most one batch.
    ///
    /// Returns `Ok(None)` when the alert is suppressed because the window is
    /// active, and [`ShellError::InvalidRange`] for a backwards range (a
    /// backend bug the caller logs and drops).
    pub fn coalesce(
        &self,
        kind: InsertKind,
        scope: &str,
        start: usize,
        end: usize,
        window_active: bool,
    ) -> Result<Option<NotificationBatch>, ShellError> {
        if start > end {
            return Err(ShellError::InvalidRange { start, end });
        }
        if window_active && !self.notify_when_active {
            return Ok(None);
        }
        Ok(Some(NotificationBatch {
            kind,
            scope: scope.to_string(),
            start,
            end,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_range_becomes_one_batch() {
        let coalescer = Coalescer::new(false);
        let batch = coalescer
            .coalesce(InsertKind::Transaction, "txlist", 5, 9, false)
            .unwrap()
            .expect("alert expected while window inactive");
        assert_eq!(batch.count(), 5);
        assert_eq!(batch.summary(), "5 new transactions");
    }

    #[test]
    fn single_item_summary_is_singular() {
        let coalescer = Coalescer::new(false);
        let batch = coalescer
            .coalesce(InsertKind::Message, "inbox", 3, 3, false)
            .unwrap()
            .unwrap();
        assert_eq!(batch.count(), 1);
        assert_eq!(batch.summary(), "1 new message");
        assert_eq!(batch.title(), "Incoming messages");
    }

    #[test]
    fn active_window_suppresses_unless_configured() {
        let quiet = Coalescer::new(false);
        assert!(quiet
            .coalesce(InsertKind::Transaction, "txlist", 0, 2, true)
            .unwrap()
            .is_none());

        let loud = Coalescer::new(true);
        assert!(loud
            .coalesce(InsertKind::Transaction, "txlist", 0, 2, true)
            .unwrap()
            .is_some());
    }

    #[test]
    fn backwards_range_is_an_error() {
        let coalescer = Coalescer::new(false);
        let err = coalescer
            .coalesce(InsertKind::Transaction, "txlist", 9, 5, false)
            .unwrap_err();
        assert!(matches!(err, ShellError::InvalidRange { start: 9, end: 5 }));
    }

    #[test]
    fn duplicate_ranges_are_not_deduplicated() {
        let coalescer = Coalescer::new(false);
        for _ in 0..2 {
            let batch = coalescer
                .coalesce(InsertKind::Message, "inbox", 1, 4, false)
                .unwrap();
            assert!(batch.is_some());
        }
    }
}
