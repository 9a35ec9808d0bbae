//! Page navigation: one page enum, one view registry, one `go_to`.
//!
//! Every page of the window is a [`Page`] variant; the views behind them are
//! registered once at startup into an arena-style map. Switching pages is a
//! purely local view change — backend state never gates navigation, and
//! business rules like "can't send while locked" belong to the target page.

use crate::error::ShellError;
use std::collections::HashMap;

/// Every page the central widget stack can show. Exactly one is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Overview,
    Statistics,
    BlockBrowser,
    Chat,
    History,
    AddressBook,
    Receive,
    Messages,
    Send,
    SignMessage,
    VerifyMessage,
    Settings,
}

impl Page {
    pub const ALL: [Page; 12] = [
        Page::Overview,
        Page::Statistics,
        Page::BlockBrowser,
        Page::Chat,
        Page::History,
        Page::AddressBook,
        Page::Receive,
        Page::Messages,
        Page::Send,
        Page::SignMessage,
        Page::VerifyMessage,
        Page::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Statistics => "Statistics",
            Page::BlockBrowser => "Block Browser",
            Page::Chat => "Chat",
            Page::History => "Transactions",
            Page::AddressBook => "Address Book",
            Page::Receive => "Receive Coins",
            Page::Messages => "Messages",
            Page::Send => "Send Coins",
            Page::SignMessage => "Sign Message",
            Page::VerifyMessage => "Verify Message",
            Page::Settings => "Settings",
        }
    }
}

/// Optional payload delivered to the target view on navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavParam {
    /// Prefill an address field (sign/verify message tabs).
    Address(String),
    /// Prefill the send page from a payment URI; parsing happens there.
    Uri(String),
}

/// A registered page view. Implemented by the widget layer; the shell only
/// ever calls `activate`, on the interactive thread.
pub trait PageView {
    /// Called when the page becomes current, and again whenever a parameter
    /// is delivered to an already-current page.
    fn activate(&mut self, param: Option<&NavParam>);
}

pub struct Navigator {
    current: Page,
    views: HashMap<Page, Box<dyn PageView>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: Page::Overview,
            views: HashMap::new(),
        }
    }

    /// Register the view behind `page`. Registering twice replaces the view.
    pub fn register(&mut self, page: Page, view: Box<dyn PageView>) {
        self.views.insert(page, view);
    }

    pub fn current(&self) -> Page {
        self.current
    }

    /// Make `page` current. Returns whether the current page changed.
    ///
    /// Navigating to the already-current page is a no-op, except that a
    /// parameter is still delivered. A page without a registered view fails
    /// with [`ShellError::InvalidPage`] and leaves the current page alone;
    /// that is a wiring bug, so debug builds assert.
    pub fn go_to(&mut self, page: Page, param: Option<NavParam>) -> Result<bool, ShellError> {
        let Some(view) = self.views.get_mut(&page) else {
            debug_assert!(false, "no view registered for page {:?}", page);
            return Err(ShellError::InvalidPage(page));
        };

        if page != self.current {
            self.current = page;
            view.activate(param.as_ref());
            log::debug!("switched to page {:?}", page);
            Ok(true)
        } else {
            if param.is_some() {
                view.activate(param.as_ref());
            }
            Ok(false)
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::{Arc, Mutex};

    /// Records every activation it receives.
    struct RecordingView {
        log: Arc<Mutex<Vec<Option<NavParam>>>>,
    }

    impl PageView for RecordingView {
        fn activate(&mut self, param: Option<&NavParam>) {
            self.log.lock().unwrap().push(param.cloned());
        }
    }

    fn navigator_with(pages: &[Page]) -> (Navigator, Arc<Mutex<Vec<Option<NavParam>>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut nav = Navigator::new();
        for page in pages {
            nav.register(*page, Box::new(RecordingView { log: log.clone() }));
        }
        (nav, log)
    }

    #[test]
    fn switching_changes_current_page() {
        let (mut nav, log) = navigator_with(&[Page::Overview, Page::Send]);
        assert_eq!(nav.current(), Page::Overview);

        assert!(nav.go_to(Page::Send, None).unwrap());
        assert_eq!(nav.current(), Page::Send);
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn repeated_go_to_is_idempotent() {
        let (mut nav, log) = navigator_with(&[Page::Overview, Page::History]);
        nav.go_to(Page::History, None).unwrap();
        assert!(!nav.go_to(Page::History, None).unwrap());
        assert_eq!(nav.current(), Page::History);
        // one activation, not two
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn param_is_applied_even_on_current_page() {
        let (mut nav, log) = navigator_with(&[Page::Overview, Page::SignMessage]);
        nav.go_to(Page::SignMessage, None).unwrap();

        let param = NavParam::Address("MERaddr".to_string());
        assert!(!nav.go_to(Page::SignMessage, Some(param.clone())).unwrap());

        let seen = log.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1], Some(param));
    }

    #[test]
    fn unregistered_page_asserts_and_leaves_state() {
        let (mut nav, _log) = navigator_with(&[Page::Overview]);
        let result = catch_unwind(AssertUnwindSafe(|| nav.go_to(Page::Chat, None)));
        if cfg!(debug_assertions) {
            assert!(result.is_err());
        } else {
            assert!(matches!(result, Ok(Err(ShellError::InvalidPage(Page::Chat)))));
        }
        assert_eq!(nav.current(), Page::Overview);
    }

    #[test]
    fn every_page_has_a_title() {
        for page in Page::ALL {
            assert!(!page.title().is_empty());
        }
    }
}
