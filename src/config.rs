//! UI Configuration
//!
//! Tunables read from the `config` key of the page bootstrap JSON.
//! Every field has a default so the server may omit any of them.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_FEEDBACK_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long the reorder success/failure indicator stays visible
    pub feedback_timeout_ms: u64,
    /// Alert shown when a delete fails for any reason other than 401
    pub permission_denied_message: String,
    /// Alert shown when a reorder is submitted with an empty list
    pub nothing_to_sort_message: String,
    /// Append `ajax=true` to delete payloads so the server answers 204 instead of redirecting
    pub mark_ajax: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            feedback_timeout_ms: DEFAULT_FEEDBACK_TIMEOUT_MS,
            permission_denied_message: "You do not have the appropriate permissions to perform that operation.".to_string(),
            nothing_to_sort_message: "There is nothing to sort.".to_string(),
            mark_ajax: true,
        }
    }
}

impl UiConfig {
    pub fn feedback_timeout(&self) -> Duration {
        Duration::from_millis(self.feedback_timeout_ms)
    }
}
