//! Reorder Submission
//!
//! Turns the displayed order of the question list into the hidden order
//! inputs of the reorder form and posts it in the background. The input at
//! position `i` carries the id of the row displayed at position `i`.

use tracing::{debug, info, warn};

use crate::config::UiConfig;
use crate::error::ReorderError;
use crate::feedback::{Feedback, Indicator, Scheduler};
use crate::form::FormFields;
use crate::http::Transport;
use crate::models::{ReorderSetup, ResourceId};
use crate::page::Page;

/// Hidden input of the reorder form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderInput {
    pub name: String,
    pub value: Option<ResourceId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderForm {
    pub action: String,
    pub csrf_token: String,
    inputs: Vec<OrderInput>,
}

impl ReorderForm {
    pub fn new(action: impl Into<String>, csrf_token: impl Into<String>, input_names: &[String]) -> Self {
        Self {
            action: action.into(),
            csrf_token: csrf_token.into(),
            inputs: input_names
                .iter()
                .map(|name| OrderInput { name: name.clone(), value: None })
                .collect(),
        }
    }

    pub fn from_setup(setup: &ReorderSetup, csrf_token: &str) -> Self {
        Self::new(setup.action.clone(), csrf_token, &setup.input_names)
    }

    pub fn inputs(&self) -> &[OrderInput] {
        &self.inputs
    }

    /// Reconcile the inputs with the rows displayed in `order` and fill them in.
    ///
    /// Surplus trailing inputs (rows deleted since the form was rendered) are
    /// dropped. With fewer inputs than rows only the first inputs are filled.
    pub fn prepare(&mut self, order: &[ResourceId]) -> Result<FormFields, ReorderError> {
        if order.is_empty() {
            return Err(ReorderError::NothingToSort);
        }
        if self.inputs.len() > order.len() {
            debug!(dropped = self.inputs.len() - order.len(), "dropping surplus order inputs");
            self.inputs.truncate(order.len());
        }
        for (input, id) in self.inputs.iter_mut().zip(order) {
            input.value = Some(*id);
        }
        Ok(self.fields())
    }

    pub fn fields(&self) -> FormFields {
        let mut fields = FormFields::with_csrf(&self.csrf_token);
        for input in &self.inputs {
            let value = input.value.map(|id| id.to_string()).unwrap_or_default();
            fields.push(input.name.clone(), value);
        }
        fields
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderOutcome {
    Saved,
    Failed,
    /// Empty list; nothing was sent
    NothingToSort,
}

pub struct ReorderHandler<T> {
    transport: T,
    config: UiConfig,
}

impl<T: Transport> ReorderHandler<T> {
    pub fn new(transport: T, config: UiConfig) -> Self {
        Self { transport, config }
    }

    pub async fn submit<S: Scheduler>(
        &self,
        form: &mut ReorderForm,
        order: &[ResourceId],
        page: &dyn Page,
        feedback: &Feedback<S>,
    ) -> ReorderOutcome {
        match form.prepare(order) {
            Ok(fields) => self.send(&form.action, &fields, feedback).await,
            Err(ReorderError::NothingToSort) => {
                self.abort(page);
                ReorderOutcome::NothingToSort
            }
        }
    }

    /// Empty list: hide the submit control and tell the user. No retry.
    pub fn abort(&self, page: &dyn Page) {
        info!("reorder submitted with an empty list");
        page.hide_reorder_control();
        page.alert(&self.config.nothing_to_sort_message);
    }

    pub async fn send<S: Scheduler>(&self, action: &str, fields: &FormFields, feedback: &Feedback<S>) -> ReorderOutcome {
        match self.transport.post_form(action, fields).await {
            Ok(response) if response.is_success() => {
                info!(status = response.status, "order saved");
                feedback.show(Indicator::Success);
                ReorderOutcome::Saved
            }
            Ok(response) => {
                warn!(status = response.status, "order rejected");
                feedback.show(Indicator::Failure);
                ReorderOutcome::Failed
            }
            Err(err) => {
                warn!(%err, "reorder request failed");
                feedback.show(Indicator::Failure);
                ReorderOutcome::Failed
            }
        }
    }
}
