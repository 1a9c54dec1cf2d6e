//! Delete-and-Notify
//!
//! Background deletion of a resource container. Only a 204 counts as a
//! deletion; only then is the container removed and a [`DeletionNotice`]
//! published.

use tracing::{debug, info, warn};

use crate::config::UiConfig;
use crate::events::{DeletionNotice, EventBus};
use crate::form::FormFields;
use crate::http::{Transport, NO_CONTENT, UNAUTHORIZED};
use crate::models::Resource;
use crate::page::Page;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// 204: container removed and notice published
    Removed(DeletionNotice),
    /// 401: sent to the login page named in the response body
    Redirected(String),
    /// Anything else, transport failures included
    Denied,
}

pub struct DeleteHandler<T> {
    transport: T,
    bus: EventBus<DeletionNotice>,
    config: UiConfig,
}

impl<T: Transport> DeleteHandler<T> {
    pub fn new(transport: T, bus: EventBus<DeletionNotice>, config: UiConfig) -> Self {
        Self { transport, bus, config }
    }

    /// Submit the delete form of `resource` with the form's own `fields`
    pub async fn submit(&self, resource: &Resource, mut fields: FormFields, page: &dyn Page) -> DeleteOutcome {
        if self.config.mark_ajax {
            fields.push("ajax", "true");
        }
        debug!(kind = %resource.kind, id = %resource.id, url = %resource.delete_url, "deleting");

        let response = match self.transport.post_form(&resource.delete_url, &fields).await {
            Ok(response) => response,
            Err(err) => {
                // Reported like a refusal; no separate message for network trouble
                warn!(%err, "delete request failed");
                page.alert(&self.config.permission_denied_message);
                return DeleteOutcome::Denied;
            }
        };

        match response.status {
            NO_CONTENT => {
                page.remove_container(resource.kind, resource.id);
                let notice = DeletionNotice {
                    resource_name: resource.name.clone(),
                    resource_type: resource.kind,
                };
                let delivered = self.bus.publish(&notice);
                info!(kind = %resource.kind, id = %resource.id, listeners = delivered, "resource deleted");
                DeleteOutcome::Removed(notice)
            }
            UNAUTHORIZED => {
                let target = response.body.trim().to_string();
                info!(%target, "session expired, redirecting");
                page.navigate(&target);
                DeleteOutcome::Redirected(target)
            }
            status => {
                warn!(status, "delete refused");
                page.alert(&self.config.permission_denied_message);
                DeleteOutcome::Denied
            }
        }
    }
}
