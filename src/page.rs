//! Page Effects
//!
//! The side effects handlers are allowed to have on the page. The browser
//! implementation writes to the page store; tests record the calls.

use leptos::prelude::*;

use crate::models::{ResourceId, ResourceKind};
use crate::store::{store_remove_resource, PageStore, PageStateStoreFields};

pub trait Page {
    /// Remove a resource container from the rendered page
    fn remove_container(&self, kind: ResourceKind, id: ResourceId);
    /// Full page navigation
    fn navigate(&self, url: &str);
    /// Blocking message box
    fn alert(&self, message: &str);
    /// Hide the reorder form's submit control
    fn hide_reorder_control(&self);
}

#[derive(Clone, Copy)]
pub struct BrowserPage {
    store: PageStore,
}

impl BrowserPage {
    pub fn new(store: PageStore) -> Self {
        Self { store }
    }
}

impl Page for BrowserPage {
    fn remove_container(&self, kind: ResourceKind, id: ResourceId) {
        if !store_remove_resource(&self.store, kind, id) {
            tracing::debug!(%kind, %id, "container already gone");
        }
    }

    fn navigate(&self, url: &str) {
        let Some(win) = web_sys::window() else { return };
        if let Err(err) = win.location().set_href(url) {
            tracing::warn!(?err, url, "navigation failed");
        }
    }

    fn alert(&self, message: &str) {
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(message);
        }
    }

    fn hide_reorder_control(&self) {
        self.store.reorder_visible().set(false);
    }
}
