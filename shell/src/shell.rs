//! Shell coordinator: the one component that knows all the others.
//!
//! Owns the status registry, navigator, coalescer, lock state machine and
//! derived staking status for the lifetime of the main window, and is the
//! single entry point backends and the widget layer call into. Backend
//! events arrive on a channel and are drained on the interactive thread by
//! [`Shell::pump`], which also answers queued fee confirmations one modal
//! dialog at a time. The coordinator never repaints anything itself; it
//! records which indicators changed and lets the widget layer collect them
//! with [`Shell::take_dirty`].

use crate::actions::{self, ActionContext, ActionId};
use crate::config::{AmountDisplay, ShellConfig};
use crate::confirm::{fee_confirmation_channel, FeeConfirmationInbox, FeeConfirmer};
use crate::error::ShellError;
use crate::frontend::{AlertSink, CloseOutcome, DialogService, WindowHandle, WindowVisibility};
use crate::lock::LockStateMachine;
use crate::nav::{NavParam, Navigator, Page, PageView};
use crate::notify::Coalescer;
use crate::staking;
use crate::status::StatusRegistry;
use chrono::Utc;
use meridian_models::{
    ClientBackend, CoreEvent, EncryptionStatus, MessageBackend, StakingStatus, WalletBackend,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Status-bar indicators the widget layer can refresh individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Connections,
    SyncProgress,
    Encryption,
    Staking,
}

pub struct Shell {
    config: ShellConfig,

    status: StatusRegistry,
    nav: Navigator,
    coalescer: Coalescer,
    lock: LockStateMachine,
    staking: StakingStatus,

    visibility: WindowVisibility,
    window_active: bool,
    shutting_down: bool,

    client: Option<Arc<dyn ClientBackend>>,
    wallet: Option<Arc<dyn WalletBackend>>,
    messages: Option<Arc<dyn MessageBackend>>,

    events: mpsc::UnboundedReceiver<CoreEvent>,
    events_tx: mpsc::UnboundedSender<CoreEvent>,
    fee_inbox: FeeConfirmationInbox,
    fee_handle: FeeConfirmer,

    dialogs: Box<dyn DialogService>,
    alerts: Box<dyn AlertSink>,
    window: Box<dyn WindowHandle>,

    dirty: Vec<Indicator>,
}

impl Shell {
    pub fn new(
        config: ShellConfig,
        dialogs: Box<dyn DialogService>,
        alerts: Box<dyn AlertSink>,
        window: Box<dyn WindowHandle>,
    ) -> Self {
        let (events_tx, events) = mpsc::unbounded_channel();
        let (fee_handle, fee_inbox) = fee_confirmation_channel();
        let coalescer = Coalescer::new(config.notify_when_active);

        Self {
            config,
            status: StatusRegistry::new(),
            nav: Navigator::new(),
            coalescer,
            lock: LockStateMachine::new(EncryptionStatus::Unencrypted),
            staking: StakingStatus::NotStaking,
            visibility: WindowVisibility::Visible,
            window_active: true,
            shutting_down: false,
            client: None,
            wallet: None,
            messages: None,
            events,
            events_tx,
            fee_inbox,
            fee_handle,
            dialogs,
            alerts,
            window,
            dirty: Vec::new(),
        }
    }

    /// Sender half of the event channel, cloned into each backend.
    pub fn event_sender(&self) -> mpsc::UnboundedSender<CoreEvent> {
        self.events_tx.clone()
    }

    /// Worker-side fee confirmation handle, cloned into the wallet backend.
    pub fn fee_confirmer(&self) -> FeeConfirmer {
        self.fee_handle.clone()
    }

    // ---- backend attachment -------------------------------------------

    /// Attach the network client and pull its current state immediately, so
    /// the indicators are right before the first event arrives.
    pub fn attach_client(&mut self, client: Arc<dyn ClientBackend>) {
        self.client = Some(client);
        self.refresh_from_client();
        log::info!(
            "🔗 Client attached: {} peers, block {} of {:?}",
            self.status.connections(),
            self.status.sync().current(),
            self.status.sync().total()
        );
    }

    /// Re-read the client snapshot, e.g. when the window is restored after
    /// being hidden for a while.
    pub fn refresh_from_client(&mut self) {
        let Some(client) = self.client.clone() else {
            return;
        };
        if self.status.set_connections(client.connection_count()) {
            self.mark_dirty(Indicator::Connections);
        }
        match self
            .status
            .set_sync_progress(client.block_count(), client.total_block_estimate())
        {
            Ok(true) => self.mark_dirty(Indicator::SyncProgress),
            Ok(false) => {}
            Err(err) => log::warn!("client snapshot rejected: {}", err),
        }
        if let Some(when) = client.last_block_time() {
            self.status.record_block_time(when);
        }
        self.recompute_staking();
    }

    /// Attach the wallet and read its encryption status.
    pub fn attach_wallet(&mut self, wallet: Arc<dyn WalletBackend>) {
        let status = wallet.encryption_status();
        self.wallet = Some(wallet);
        self.lock = LockStateMachine::new(status);
        self.mark_dirty(Indicator::Encryption);
        self.recompute_staking();
        log::info!("👛 Wallet attached, encryption status {:?}", status);
    }

    pub fn attach_messages(&mut self, messages: Arc<dyn MessageBackend>) {
        log::info!(
            "✉️ Message store attached, {} unread",
            messages.unread_count()
        );
        self.messages = Some(messages);
    }

    // ---- event pipeline -----------------------------------------------

    /// Drain pending backend events and answer queued fee confirmations.
    /// Called from the interactive thread's tick; never blocks on backends,
    /// only on the modal dialogs it opens.
    pub fn pump(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
        }
        // Strictly one dialog at a time: later requests stay queued until
        // the user has answered the one on screen.
        while let Some(request) = self.fee_inbox.try_next() {
            let amount = request.amount();
            let pay = self.dialogs.confirm_fee(amount);
            log::info!(
                "💸 Fee confirmation for {} units: {}",
                amount,
                if pay { "accepted" } else { "declined" }
            );
            request.respond(pay);
        }
    }

    pub fn handle_event(&mut self, event: CoreEvent) {
        match event {
            CoreEvent::ConnectionCountChanged(count) => {
                if self.status.set_connections(count) {
                    self.mark_dirty(Indicator::Connections);
                    self.recompute_staking();
                }
            }
            CoreEvent::BlockCountChanged { current, total } => {
                let tip_before = self.status.sync().current();
                match self.status.set_sync_progress(current, total) {
                    Ok(true) => {
                        // Only a new block resets the age display; an update
                        // that moved nothing but the estimate does not.
                        if self.status.sync().current() > tip_before {
                            self.status.record_block_time(Utc::now());
                        }
                        self.mark_dirty(Indicator::SyncProgress);
                        self.recompute_staking();
                    }
                    Ok(false) => {}
                    Err(err) => log::warn!("ignoring block update: {}", err),
                }
            }
            CoreEvent::EncryptionStatusChanged(status) => {
                if self.lock.apply_backend_status(status) {
                    self.mark_dirty(Indicator::Encryption);
                    self.recompute_staking();
                }
            }
            CoreEvent::RangeInserted {
                kind,
                scope,
                start,
                end,
            } => {
                let active = self.window_active && self.visibility == WindowVisibility::Visible;
                match self.coalescer.coalesce(kind, &scope, start, end, active) {
                    Ok(Some(batch)) => self.alerts.notify(&batch),
                    Ok(None) => {}
                    Err(err) => log::warn!("ignoring inserted range: {}", err),
                }
            }
            CoreEvent::UriReceived(uri) => self.handle_uri(uri),
            CoreEvent::BackendAlert {
                title,
                message,
                modal,
            } => self.report_error(&title, &message, modal),
        }
    }

    fn recompute_staking(&mut self) {
        let derived = staking::derive(
            self.lock.status(),
            self.status.sync().is_synced(),
            self.status.connections(),
        );
        if derived != self.staking {
            self.staking = derived;
            self.mark_dirty(Indicator::Staking);
        }
    }

    fn mark_dirty(&mut self, indicator: Indicator) {
        if !self.dirty.contains(&indicator) {
            self.dirty.push(indicator);
        }
    }

    /// Indicators that changed since the last call; the widget layer
    /// refreshes exactly these.
    pub fn take_dirty(&mut self) -> Vec<Indicator> {
        std::mem::take(&mut self.dirty)
    }

    // ---- navigation ---------------------------------------------------

    pub fn register_view(&mut self, page: Page, view: Box<dyn PageView>) {
        self.nav.register(page, view);
    }

    pub fn go_to(&mut self, page: Page, param: Option<NavParam>) -> Result<bool, ShellError> {
        self.nav.go_to(page, param)
    }

    pub fn current_page(&self) -> Page {
        self.nav.current()
    }

    /// Navigate to the send page with a payment URI prefill; the send view
    /// does the parsing.
    pub fn handle_uri(&mut self, uri: String) {
        if let Err(err) = self.nav.go_to(Page::Send, Some(NavParam::Uri(uri))) {
            log::warn!("dropping received URI: {}", err);
        }
    }

    // ---- action table -------------------------------------------------

    fn action_context(&self) -> ActionContext {
        ActionContext {
            encryption: self.lock.status(),
            wallet_attached: self.wallet.is_some(),
        }
    }

    pub fn is_enabled(&self, id: ActionId) -> bool {
        (actions::spec(id).enabled)(&self.action_context())
    }

    /// Uniform dispatch for every menu/toolbar row. Disabled actions are
    /// silently ignored, matching a greyed-out menu entry.
    pub fn trigger(&mut self, id: ActionId) {
        if !self.is_enabled(id) {
            log::debug!("ignoring disabled action {:?}", id);
            return;
        }
        match id {
            ActionId::Show(page) => {
                if let Err(err) = self.go_to(page, None) {
                    log::warn!("navigation failed: {}", err);
                }
            }
            ActionId::EncryptWallet => self.encrypt_wallet(),
            ActionId::BackupWallet => self.backup_wallet(),
            ActionId::ChangePassphrase => self.change_passphrase(),
            ActionId::LockUnlockWallet => self.toggle_wallet_lock(),
            ActionId::ToggleHidden => self.toggle_hidden(),
            ActionId::Quit => self.quit(),
        }
    }

    // ---- wallet actions -----------------------------------------------
    //
    // Every action collects its input through the dialog service, calls the
    // backend exactly once, and surfaces failure as a non-retrying error
    // notification. Cancelling a prompt is a no-op.

    pub fn encrypt_wallet(&mut self) {
        let Some(wallet) = self.wallet.clone() else {
            self.surface(ShellError::NoWallet);
            return;
        };
        let Some(passphrase) = self.dialogs.ask_new_passphrase() else {
            return;
        };
        match self.lock.encrypt(wallet.as_ref(), &passphrase) {
            Ok(_) => {
                self.mark_dirty(Indicator::Encryption);
                self.recompute_staking();
            }
            Err(err) => self.surface(err),
        }
    }

    pub fn toggle_wallet_lock(&mut self) {
        match self.lock.status() {
            EncryptionStatus::Unencrypted => self.surface(ShellError::WalletNotEncrypted),
            EncryptionStatus::Locked => self.unlock_wallet(),
            EncryptionStatus::Unlocked => self.lock_wallet(),
        }
    }

    pub fn unlock_wallet(&mut self) {
        let Some(wallet) = self.wallet.clone() else {
            self.surface(ShellError::NoWallet);
            return;
        };
        let Some(passphrase) = self.dialogs.ask_unlock_passphrase() else {
            return;
        };
        match self.lock.unlock(wallet.as_ref(), &passphrase) {
            Ok(true) => {
                self.mark_dirty(Indicator::Encryption);
                self.recompute_staking();
            }
            Ok(false) => {}
            Err(err) => self.surface(err),
        }
    }

    pub fn lock_wallet(&mut self) {
        let Some(wallet) = self.wallet.clone() else {
            self.surface(ShellError::NoWallet);
            return;
        };
        match self.lock.lock(wallet.as_ref()) {
            Ok(true) => {
                self.mark_dirty(Indicator::Encryption);
                self.recompute_staking();
            }
            Ok(false) => {}
            Err(err) => self.surface(err),
        }
    }

    pub fn change_passphrase(&mut self) {
        let Some(wallet) = self.wallet.clone() else {
            self.surface(ShellError::NoWallet);
            return;
        };
        let Some((old, new)) = self.dialogs.ask_passphrase_change() else {
            return;
        };
        if let Err(err) = self.lock.change_passphrase(wallet.as_ref(), &old, &new) {
            self.surface(err);
        }
    }

    pub fn backup_wallet(&mut self) {
        let Some(wallet) = self.wallet.clone() else {
            self.surface(ShellError::NoWallet);
            return;
        };
        let Some(destination) = self.dialogs.ask_backup_path() else {
            return;
        };
        match wallet.backup(&destination) {
            Ok(()) => log::info!("💾 Wallet backed up to {}", destination.display()),
            Err(err) => self.surface(ShellError::from(err)),
        }
    }

    fn surface(&mut self, err: ShellError) {
        log::warn!("wallet action failed: {}", err);
        self.alerts.error("Wallet", &err.to_string());
    }

    /// Route a backend-reported error to the right surface.
    pub fn report_error(&mut self, title: &str, message: &str, modal: bool) {
        if modal {
            self.dialogs.show_error(title, message);
        } else {
            self.alerts.error(title, message);
        }
    }

    // ---- visibility ---------------------------------------------------

    pub fn visibility(&self) -> WindowVisibility {
        self.visibility
    }

    /// Tell the shell whether the window currently has focus; gates the
    /// notification suppression policy.
    pub fn set_window_active(&mut self, active: bool) {
        self.window_active = active;
    }

    /// Restore a minimized or hidden window. A no-op while already visible.
    pub fn show_normal_if_minimized(&mut self) {
        if self.visibility == WindowVisibility::Visible {
            return;
        }
        self.window.show_and_raise();
        self.visibility = WindowVisibility::Visible;
    }

    /// Tray-icon click: hide a visible window, restore anything else.
    pub fn toggle_hidden(&mut self) {
        if self.visibility == WindowVisibility::Visible {
            self.window.hide();
            self.visibility = WindowVisibility::Hidden;
        } else {
            self.show_normal_if_minimized();
        }
    }

    /// The window manager minimized the window; with minimize-to-tray set
    /// it disappears from the taskbar entirely.
    pub fn minimized(&mut self) {
        if self.config.minimize_to_tray {
            self.window.hide();
            self.visibility = WindowVisibility::Hidden;
        } else {
            self.visibility = WindowVisibility::Minimized;
        }
    }

    /// The user clicked the close button. Per configuration this either
    /// hides the window (app keeps running in the tray) or quits.
    pub fn close_requested(&mut self) -> CloseOutcome {
        if self.config.minimize_on_close && !self.shutting_down {
            self.window.hide();
            self.visibility = WindowVisibility::Hidden;
            CloseOutcome::Hidden
        } else {
            self.quit();
            CloseOutcome::Quit
        }
    }

    /// Tear down. Any worker still blocked in a fee confirmation gets
    /// `false` back instead of waiting on a window that no longer exists.
    pub fn quit(&mut self) {
        if self.shutting_down {
            return;
        }
        self.shutting_down = true;
        self.fee_inbox.close();
        self.window.quit();
        log::info!("👋 Shell shut down");
    }

    // ---- reads for the widget layer -----------------------------------

    pub fn status(&self) -> &StatusRegistry {
        &self.status
    }

    pub fn encryption_status(&self) -> EncryptionStatus {
        self.lock.status()
    }

    pub fn staking_status(&self) -> StakingStatus {
        self.staking
    }

    pub fn staking_reason(&self) -> &'static str {
        staking::reason(
            self.lock.status(),
            self.status.sync().is_synced(),
            self.status.connections(),
        )
    }

    /// Unread message count for the messages tab badge.
    pub fn unread_messages(&self) -> usize {
        self.messages
            .as_ref()
            .map(|store| store.unread_count())
            .unwrap_or(0)
    }

    /// Transaction count shown on the history tab, read on demand.
    pub fn wallet_transaction_count(&self) -> usize {
        self.wallet
            .as_ref()
            .map(|wallet| wallet.transaction_count())
            .unwrap_or(0)
    }

    pub fn amount_display(&self) -> AmountDisplay {
        self.config.amount_display
    }

    /// Flip between native and fiat amount rendering and persist the choice.
    pub fn toggle_amount_display(&mut self) {
        self.config.amount_display = match self.config.amount_display {
            AmountDisplay::Coin => AmountDisplay::Fiat,
            AmountDisplay::Fiat => AmountDisplay::Coin,
        };
        if let Err(err) = self.config.save() {
            log::warn!("could not persist config: {}", err);
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }
}

impl Drop for Shell {
    fn drop(&mut self) {
        // Dropping the inbox would decline pending requests anyway, but
        // closing explicitly also logs what was abandoned.
        self.fee_inbox.close();
    }
}
