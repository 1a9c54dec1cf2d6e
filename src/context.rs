//! Page Context
//!
//! Shared services provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::UiConfig;
use crate::events::{DeletionNotice, EventBus, Subscription};

/// Page-wide services handed to every widget
#[derive(Clone)]
pub struct AppContext {
    /// Deletion notices between widgets
    pub bus: EventBus<DeletionNotice>,
    pub config: UiConfig,
    /// CSRF token echoed in every background form
    pub csrf_token: String,
}

impl AppContext {
    pub fn new(bus: EventBus<DeletionNotice>, config: UiConfig, csrf_token: String) -> Self {
        Self { bus, config, csrf_token }
    }

    /// Subscribe for the lifetime of the calling component
    pub fn on_deletion(&self, listener: impl Fn(&DeletionNotice) + Send + Sync + 'static) -> Subscription {
        let subscription = self.bus.subscribe(listener);
        let bus = self.bus.clone();
        on_cleanup(move || {
            bus.unsubscribe(subscription);
        });
        subscription
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
