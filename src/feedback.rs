//! Transient Feedback Indicators
//!
//! Success/failure indicators of the reorder form. Showing one hides the
//! other right away; each hides itself after a fixed delay.
//!
//! Auto-hide timers are fire-and-forget. A timer left over from an earlier
//! submission still fires, and may hide an indicator of the same kind that
//! a later submission showed.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

pub trait Scheduler {
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Longest delay `setTimeout` honors; larger ones fire immediately
const MAX_TIMEOUT_MS: u32 = i32::MAX as u32;

fn timeout_millis(delay: Duration) -> u32 {
    delay.as_millis().min(MAX_TIMEOUT_MS as u128) as u32
}

/// `setTimeout` scheduler
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(timeout_millis(delay), task).forget();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedbackState {
    pub success: bool,
    pub failure: bool,
}

impl FeedbackState {
    fn set(&mut self, indicator: Indicator, visible: bool) {
        match indicator {
            Indicator::Success => self.success = visible,
            Indicator::Failure => self.failure = visible,
        }
    }
}

struct Shared {
    state: Cell<FeedbackState>,
    observer: Box<dyn Fn(FeedbackState)>,
}

impl Shared {
    fn update(&self, f: impl FnOnce(&mut FeedbackState)) {
        let mut state = self.state.get();
        f(&mut state);
        self.state.set(state);
        (self.observer)(state);
    }
}

pub struct Feedback<S> {
    shared: Rc<Shared>,
    scheduler: S,
    timeout: Duration,
}

impl<S: Clone> Clone for Feedback<S> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
            scheduler: self.scheduler.clone(),
            timeout: self.timeout,
        }
    }
}

impl<S: Scheduler> Feedback<S> {
    /// `observer` sees every state change, e.g. to mirror it into a signal
    pub fn new(scheduler: S, timeout: Duration, observer: impl Fn(FeedbackState) + 'static) -> Self {
        Self {
            shared: Rc::new(Shared {
                state: Cell::new(FeedbackState::default()),
                observer: Box::new(observer),
            }),
            scheduler,
            timeout,
        }
    }

    pub fn state(&self) -> FeedbackState {
        self.shared.state.get()
    }

    pub fn show(&self, indicator: Indicator) {
        let other = match indicator {
            Indicator::Success => Indicator::Failure,
            Indicator::Failure => Indicator::Success,
        };
        self.shared.update(|s| {
            s.set(other, false);
            s.set(indicator, true);
        });

        let shared = Rc::clone(&self.shared);
        self.scheduler.after(
            self.timeout,
            Box::new(move || shared.update(|s| s.set(indicator, false))),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ManualScheduler;
    use std::cell::RefCell;

    fn feedback() -> (Feedback<ManualScheduler>, ManualScheduler, Rc<RefCell<Vec<FeedbackState>>>) {
        let scheduler = ManualScheduler::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let fb = Feedback::new(scheduler.clone(), Duration::from_secs(10), move |s| sink.borrow_mut().push(s));
        (fb, scheduler, seen)
    }

    #[test]
    fn test_indicator_auto_hides() {
        let (fb, clock, _) = feedback();
        fb.show(Indicator::Success);
        assert_eq!(fb.state(), FeedbackState { success: true, failure: false });

        clock.advance(Duration::from_millis(9_999));
        assert!(fb.state().success);
        clock.advance(Duration::from_millis(1));
        assert_eq!(fb.state(), FeedbackState::default());
    }

    #[test]
    fn test_new_outcome_supersedes_previous() {
        let (fb, clock, seen) = feedback();
        fb.show(Indicator::Failure);
        clock.advance(Duration::from_secs(3));
        fb.show(Indicator::Success);
        assert_eq!(fb.state(), FeedbackState { success: true, failure: false });

        // The failure timer still fires but finds nothing to hide
        clock.advance(Duration::from_secs(7));
        assert_eq!(fb.state(), FeedbackState { success: true, failure: false });
        clock.advance(Duration::from_secs(3));
        assert_eq!(fb.state(), FeedbackState::default());
        assert_eq!(seen.borrow().first(), Some(&FeedbackState { success: false, failure: true }));
    }

    #[test]
    fn test_timers_are_not_deduplicated() {
        let (fb, clock, _) = feedback();
        fb.show(Indicator::Success);
        clock.advance(Duration::from_secs(6));
        fb.show(Indicator::Success);
        assert_eq!(clock.pending(), 2);

        // The first submission's timer hides the second submission's indicator early
        clock.advance(Duration::from_secs(4));
        assert!(!fb.state().success);
        clock.advance(Duration::from_secs(6));
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_timeout_delay_clamped() {
        assert_eq!(timeout_millis(Duration::from_secs(10)), 10_000);
        assert_eq!(timeout_millis(Duration::from_millis(i32::MAX as u64)), i32::MAX as u32);
        assert_eq!(timeout_millis(Duration::from_millis(u64::MAX)), i32::MAX as u32);
    }
}
