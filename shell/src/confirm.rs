//! Cross-thread fee confirmation.
//!
//! A wallet worker preparing a spend must not commit until the user has
//! accepted the required network fee, and only the interactive thread can
//! ask. [`FeeConfirmer`] is the worker-side handle: it enqueues the request
//! and blocks on a one-shot answer slot until the interactive thread has
//! responded. [`FeeConfirmationInbox`] is the interactive side: the
//! coordinator answers requests strictly one at a time, so concurrent
//! requests queue behind the open dialog instead of racing it, and no answer
//! can be lost or delivered to the wrong caller.
//!
//! Teardown is the one forced resolution: closing or dropping the inbox
//! resolves every outstanding and queued request to `false` (decline), and
//! any later call on a surviving handle returns `false` immediately. A
//! worker can therefore never stay blocked past the window's lifetime.

use tokio::sync::{mpsc, oneshot};

/// A pending "pay fee F?" question with its write-once answer slot.
///
/// Responding consumes the request; dropping it unanswered resolves the
/// caller to `false`.
#[derive(Debug)]
pub struct FeeRequest {
    amount: u64,
    answer: oneshot::Sender<bool>,
}

impl FeeRequest {
    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// Deliver the user's decision to the waiting worker.
    pub fn respond(self, pay: bool) {
        // The worker may have given up at teardown; nothing left to do then.
        let _ = self.answer.send(pay);
    }
}

/// Worker-side handle. Cheap to clone, safe to send to backend threads.
#[derive(Debug, Clone)]
pub struct FeeConfirmer {
    queue: mpsc::UnboundedSender<FeeRequest>,
}

impl FeeConfirmer {
    /// Ask whether to pay `amount` and block until the user has answered.
    ///
    /// Callable from any thread that is allowed to block; async callers use
    /// [`confirm_fee`](Self::confirm_fee) instead. Returns `false` without
    /// an answer when the window is (or goes) away.
    pub fn request_fee_confirmation(&self, amount: u64) -> bool {
        let (tx, rx) = oneshot::channel();
        if self
            .queue
            .send(FeeRequest { amount, answer: tx })
            .is_err()
        {
            return false;
        }
        rx.blocking_recv().unwrap_or(false)
    }

    /// Async variant of [`request_fee_confirmation`](Self::request_fee_confirmation).
    pub async fn confirm_fee(&self, amount: u64) -> bool {
        let (tx, rx) = oneshot::channel();
        if self
            .queue
            .send(FeeRequest { amount, answer: tx })
            .is_err()
        {
            return false;
        }
        rx.await.unwrap_or(false)
    }
}

/// Interactive-side queue of pending confirmations, drained by the shell.
#[derive(Debug)]
pub struct FeeConfirmationInbox {
    queue: mpsc::UnboundedReceiver<FeeRequest>,
}

impl FeeConfirmationInbox {
    /// Next pending request, if any. Never blocks.
    pub fn try_next(&mut self) -> Option<FeeRequest> {
        self.queue.try_recv().ok()
    }

    /// Stop accepting requests and decline everything still queued.
    pub fn close(&mut self) {
        self.queue.close();
        while let Ok(request) = self.queue.try_recv() {
            log::warn!(
                "💸 Declining queued fee confirmation ({} units) at teardown",
                request.amount()
            );
            drop(request);
        }
    }
}

/// Build the two halves of the confirmation channel.
pub fn fee_confirmation_channel() -> (FeeConfirmer, FeeConfirmationInbox) {
    let (tx, rx) = mpsc::unbounded_channel();
    (FeeConfirmer { queue: tx }, FeeConfirmationInbox { queue: rx })
}
