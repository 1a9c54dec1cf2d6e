//! Test doubles for the handler seams.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::feedback::Scheduler;
use crate::form::FormFields;
use crate::http::{HttpResponse, Transport};
use crate::models::{ResourceId, ResourceKind};
use crate::page::Page;

/// Answers requests from a queue and records what was sent
#[derive(Default)]
pub struct FakeTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    pub sent: RefCell<Vec<(String, FormFields)>>,
}

impl FakeTransport {
    pub fn replying(replies: Vec<Result<HttpResponse, TransportError>>) -> Self {
        Self { replies: RefCell::new(replies.into()), sent: RefCell::default() }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self::replying(vec![Ok(HttpResponse::new(status, body))])
    }

    pub fn request_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn post_form(&self, url: &str, fields: &FormFields) -> Result<HttpResponse, TransportError> {
        self.sent.borrow_mut().push((url.to_string(), fields.clone()));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no reply queued".into())))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCall {
    Removed(ResourceKind, ResourceId),
    Navigated(String),
    Alerted(String),
    ReorderHidden,
}

#[derive(Default)]
pub struct RecordingPage {
    pub calls: RefCell<Vec<PageCall>>,
}

impl RecordingPage {
    pub fn calls(&self) -> Vec<PageCall> {
        self.calls.borrow().clone()
    }
}

impl Page for RecordingPage {
    fn remove_container(&self, kind: ResourceKind, id: ResourceId) {
        self.calls.borrow_mut().push(PageCall::Removed(kind, id));
    }

    fn navigate(&self, url: &str) {
        self.calls.borrow_mut().push(PageCall::Navigated(url.to_string()));
    }

    fn alert(&self, message: &str) {
        self.calls.borrow_mut().push(PageCall::Alerted(message.to_string()));
    }

    fn hide_reorder_control(&self) {
        self.calls.borrow_mut().push(PageCall::ReorderHidden);
    }
}

type Pending = (Duration, Box<dyn FnOnce()>);

/// Timers that only fire when the test advances the clock
#[derive(Clone, Default)]
pub struct ManualScheduler {
    now: Rc<RefCell<Duration>>,
    pending: Rc<RefCell<Vec<Pending>>>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Move the clock forward, firing due timers in deadline order
    pub fn advance(&self, by: Duration) {
        let target = *self.now.borrow() + by;
        loop {
            let next = {
                let mut pending = self.pending.borrow_mut();
                let due = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _))| *at <= target)
                    .min_by_key(|(_, (at, _))| *at)
                    .map(|(i, _)| i);
                due.map(|i| pending.remove(i))
            };
            let Some((at, fire)) = next else { break };
            *self.now.borrow_mut() = at;
            fire();
        }
        *self.now.borrow_mut() = target;
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let at = *self.now.borrow() + delay;
        self.pending.borrow_mut().push((at, task));
    }
}
