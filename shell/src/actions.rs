//! Declarative action table.
//!
//! Menu and toolbar entries are rows in one table built once at startup:
//! identifier, label, and an enablement predicate over the shell snapshot.
//! The coordinator dispatches every row through a single `trigger`, so
//! adding an action means adding a row, not another slot/wiring pair.

use crate::nav::Page;
use meridian_models::EncryptionStatus;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    /// Switch the central stack to a page.
    Show(Page),
    EncryptWallet,
    BackupWallet,
    ChangePassphrase,
    LockUnlockWallet,
    ToggleHidden,
    Quit,
}

/// The slice of shell state enablement predicates may look at.
#[derive(Debug, Clone, Copy)]
pub struct ActionContext {
    pub encryption: EncryptionStatus,
    pub wallet_attached: bool,
}

pub struct ActionSpec {
    pub id: ActionId,
    pub label: &'static str,
    pub enabled: fn(&ActionContext) -> bool,
}

fn always(_: &ActionContext) -> bool {
    true
}

fn has_wallet(cx: &ActionContext) -> bool {
    cx.wallet_attached
}

fn wallet_unencrypted(cx: &ActionContext) -> bool {
    cx.wallet_attached && !cx.encryption.is_encrypted()
}

fn wallet_encrypted(cx: &ActionContext) -> bool {
    cx.wallet_attached && cx.encryption.is_encrypted()
}

static TABLE: OnceLock<Vec<ActionSpec>> = OnceLock::new();

/// The full action table, built on first use.
pub fn action_table() -> &'static [ActionSpec] {
    TABLE
        .get_or_init(|| {
            let mut table: Vec<ActionSpec> = Page::ALL
                .iter()
                .map(|page| ActionSpec {
                    id: ActionId::Show(*page),
                    label: page.title(),
                    enabled: always,
                })
                .collect();
            table.push(ActionSpec {
                id: ActionId::EncryptWallet,
                label: "Encrypt Wallet...",
                enabled: wallet_unencrypted,
            });
            table.push(ActionSpec {
                id: ActionId::BackupWallet,
                label: "Backup Wallet...",
                enabled: has_wallet,
            });
            table.push(ActionSpec {
                id: ActionId::ChangePassphrase,
                label: "Change Passphrase...",
                enabled: wallet_encrypted,
            });
            table.push(ActionSpec {
                id: ActionId::LockUnlockWallet,
                label: "Unlock or Lock Wallet",
                enabled: wallet_encrypted,
            });
            table.push(ActionSpec {
                id: ActionId::ToggleHidden,
                label: "Show / Hide",
                enabled: always,
            });
            table.push(ActionSpec {
                id: ActionId::Quit,
                label: "Exit",
                enabled: always,
            });
            table
        })
        .as_slice()
}

/// Look up one row. The table covers every `ActionId` by construction.
pub fn spec(id: ActionId) -> &'static ActionSpec {
    action_table()
        .iter()
        .find(|spec| spec.id == id)
        .expect("action table covers every ActionId")
}
