use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::{debug, warn};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};
use yew::prelude::*;

use crate::config;
use crate::navigation::{NavState, ScrollTarget};

/// The parts of the browser viewport the coordinator drives.
pub trait Viewport {
    fn scroll_to_top(&self);

    /// Smooth-scrolls the element with id `anchor` into view. Returns `false`
    /// when no such element is mounted.
    fn scroll_to_anchor(&self, anchor: &str) -> bool;
}

pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            let mut options = ScrollToOptions::new();
            options.top(0.0).behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }

    fn scroll_to_anchor(&self, anchor: &str) -> bool {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(anchor));
        match element {
            Some(element) => {
                let mut options = ScrollIntoViewOptions::new();
                options
                    .behavior(ScrollBehavior::Smooth)
                    .block(ScrollLogicalPosition::Start);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollOutcome {
    Scrolled,
    AnchorMissing,
}

pub fn perform(viewport: &impl Viewport, target: ScrollTarget) -> ScrollOutcome {
    match target {
        ScrollTarget::Top => {
            viewport.scroll_to_top();
            ScrollOutcome::Scrolled
        }
        ScrollTarget::Anchor(anchor) => {
            if viewport.scroll_to_anchor(anchor) {
                ScrollOutcome::Scrolled
            } else {
                ScrollOutcome::AnchorMissing
            }
        }
    }
}

/// Bounded exponential backoff for anchors that are not mounted yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total lookups, including the first one made right after render.
    pub max_attempts: u32,
    pub initial_delay_ms: u32,
    pub max_delay_ms: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            initial_delay_ms: 16,
            max_delay_ms: 250,
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `retry` (0-based), or `None` once the
    /// attempts are used up.
    pub fn delay_for(&self, retry: u32) -> Option<u32> {
        if retry.saturating_add(1) >= self.max_attempts {
            return None;
        }
        let factor = 1u32.checked_shl(retry).unwrap_or(u32::MAX);
        Some(self.initial_delay_ms.saturating_mul(factor).min(self.max_delay_ms))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Done,
    RetryAfter(u32),
    GaveUp,
}

/// One pending scroll request. Each `step` makes one lookup.
#[derive(Debug)]
pub struct ScrollJob {
    target: ScrollTarget,
    policy: RetryPolicy,
    attempts: u32,
}

impl ScrollJob {
    pub fn new(target: ScrollTarget, policy: RetryPolicy) -> Self {
        Self {
            target,
            policy,
            attempts: 0,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn step(&mut self, viewport: &impl Viewport) -> Step {
        let retry = self.attempts;
        self.attempts += 1;
        match perform(viewport, self.target) {
            ScrollOutcome::Scrolled => Step::Done,
            ScrollOutcome::AnchorMissing => match self.policy.delay_for(retry) {
                Some(delay) => Step::RetryAfter(delay),
                None => Step::GaveUp,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobOutcome {
    Scrolled,
    GaveUp,
    Cancelled,
}

/// Steps `job` until it scrolls or runs out of attempts, awaiting `sleep`
/// between lookups. Once `cancelled` is set no further lookup is made.
pub async fn drive<V, S, F>(
    job: &mut ScrollJob,
    viewport: &V,
    cancelled: &Cell<bool>,
    mut sleep: S,
) -> JobOutcome
where
    V: Viewport,
    S: FnMut(u32) -> F,
    F: Future<Output = ()>,
{
    loop {
        if cancelled.get() {
            return JobOutcome::Cancelled;
        }
        match job.step(viewport) {
            Step::Done => return JobOutcome::Scrolled,
            Step::GaveUp => return JobOutcome::GaveUp,
            Step::RetryAfter(delay) => {
                debug!("{:?} not mounted yet, retrying in {}ms", job.target, delay);
                sleep(delay).await;
            }
        }
    }
}

/// Runs the scroll for the current navigation after each render commit.
///
/// Keyed on `(page, generation)`, so repeating a navigation scrolls again.
/// Teardown, including the one caused by a newer navigation, cancels any
/// retry still waiting.
#[hook]
pub fn use_scroll_coordinator(nav: &NavState) {
    let target = nav.scroll_target();
    use_effect_with_deps(
        move |&(page, _)| {
            let cancelled = Rc::new(Cell::new(false));
            {
                let cancelled = cancelled.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let mut job = ScrollJob::new(target, config::anchor_retry_policy());
                    let outcome = drive(&mut job, &BrowserViewport, &cancelled, |delay| {
                        TimeoutFuture::new(delay)
                    })
                    .await;
                    match outcome {
                        JobOutcome::Scrolled => {
                            debug!("Scrolled to {:?} for {:?} after {} attempts", target, page, job.attempts())
                        }
                        JobOutcome::GaveUp => warn!(
                            "Scroll target {:?} still missing after {} attempts",
                            target,
                            job.attempts()
                        ),
                        JobOutcome::Cancelled => debug!("Scroll to {:?} superseded", target),
                    }
                });
            }
            move || cancelled.set(true)
        },
        (nav.current, nav.generation),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{scroll_target, Page, ABOUT_ANCHOR, CONTACT_ANCHOR};
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Debug, PartialEq)]
    enum Call {
        Top,
        Anchor(String),
    }

    /// Anchor shows up after `mount_after` failed lookups.
    struct FakeViewport {
        anchors: Vec<&'static str>,
        mount_after: Cell<u32>,
        calls: RefCell<Vec<Call>>,
    }

    impl FakeViewport {
        fn with_anchors(anchors: Vec<&'static str>) -> Self {
            Self {
                anchors,
                mount_after: Cell::new(0),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn scrolled(&self) -> Vec<Call> {
            self.calls.take()
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_to_top(&self) {
            self.calls.borrow_mut().push(Call::Top);
        }

        fn scroll_to_anchor(&self, anchor: &str) -> bool {
            if self.mount_after.get() > 0 {
                self.mount_after.set(self.mount_after.get() - 1);
                return false;
            }
            if self.anchors.contains(&anchor) {
                self.calls.borrow_mut().push(Call::Anchor(anchor.to_string()));
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn home_always_scrolls_to_top() {
        let viewport = FakeViewport::with_anchors(vec![]);
        assert_eq!(perform(&viewport, scroll_target(Page::Home)), ScrollOutcome::Scrolled);
        assert_eq!(viewport.scrolled(), vec![Call::Top]);
    }

    #[test]
    fn about_scrolls_to_its_anchor() {
        let viewport = FakeViewport::with_anchors(vec![ABOUT_ANCHOR, CONTACT_ANCHOR]);
        let mut job = ScrollJob::new(scroll_target(Page::About), RetryPolicy::default());
        assert_eq!(job.step(&viewport), Step::Done);
        assert_eq!(viewport.scrolled(), vec![Call::Anchor("about-section".into())]);
    }

    #[test]
    fn missing_anchor_retries_then_gives_up_without_scrolling() {
        let viewport = FakeViewport::with_anchors(vec![]);
        let policy = RetryPolicy::default();
        let mut job = ScrollJob::new(scroll_target(Page::About), policy);

        let mut step = job.step(&viewport);
        while let Step::RetryAfter(_) = step {
            step = job.step(&viewport);
        }
        assert_eq!(step, Step::GaveUp);
        assert_eq!(job.attempts(), policy.max_attempts);
        assert!(viewport.scrolled().is_empty());
    }

    #[test]
    fn late_anchor_is_scrolled_once_mounted() {
        let viewport = FakeViewport::with_anchors(vec![CONTACT_ANCHOR]);
        viewport.mount_after.set(2);
        let mut job = ScrollJob::new(scroll_target(Page::Contact), RetryPolicy::default());

        assert_eq!(job.step(&viewport), Step::RetryAfter(16));
        assert_eq!(job.step(&viewport), Step::RetryAfter(32));
        assert_eq!(job.step(&viewport), Step::Done);
        assert_eq!(viewport.scrolled(), vec![Call::Anchor("contact-section".into())]);
    }

    #[test]
    fn backoff_doubles_and_caps() {
        let policy = RetryPolicy {
            max_attempts: 8,
            initial_delay_ms: 50,
            max_delay_ms: 300,
        };
        let delays: Vec<_> = (0..8).map(|retry| policy.delay_for(retry)).collect();
        assert_eq!(
            delays,
            vec![
                Some(50),
                Some(100),
                Some(200),
                Some(300),
                Some(300),
                Some(300),
                Some(300),
                None
            ]
        );
    }

    #[test]
    fn single_attempt_policy_never_retries() {
        let policy = RetryPolicy {
            max_attempts: 1,
            ..RetryPolicy::default()
        };
        assert_eq!(policy.delay_for(0), None);
    }

    #[test]
    fn large_retry_index_does_not_overflow() {
        let policy = RetryPolicy {
            max_attempts: u32::MAX,
            initial_delay_ms: 10,
            max_delay_ms: 1_000,
        };
        assert_eq!(policy.delay_for(40), Some(1_000));
    }

    #[test]
    fn driver_retries_until_the_anchor_mounts() {
        let viewport = FakeViewport::with_anchors(vec![CONTACT_ANCHOR]);
        viewport.mount_after.set(2);
        let mut job = ScrollJob::new(scroll_target(Page::Contact), RetryPolicy::default());
        let cancelled = Cell::new(false);
        let mut slept = Vec::new();

        let outcome = block_on(drive(&mut job, &viewport, &cancelled, |delay| {
            slept.push(delay);
            async {}
        }));
        assert_eq!(outcome, JobOutcome::Scrolled);
        assert_eq!(slept, vec![16, 32]);
        assert_eq!(viewport.scrolled(), vec![Call::Anchor("contact-section".into())]);
    }

    #[test]
    fn teardown_during_a_retry_stops_the_scroll() {
        let viewport = FakeViewport::with_anchors(vec![ABOUT_ANCHOR]);
        viewport.mount_after.set(1);
        let mut job = ScrollJob::new(scroll_target(Page::About), RetryPolicy::default());
        let cancelled = Cell::new(false);

        let outcome = block_on(drive(&mut job, &viewport, &cancelled, |_| {
            cancelled.set(true);
            async {}
        }));
        assert_eq!(outcome, JobOutcome::Cancelled);
        assert_eq!(job.attempts(), 1);
        assert!(viewport.scrolled().is_empty());
    }

    #[test]
    fn newer_navigation_supersedes_a_pending_retry() {
        let viewport = FakeViewport::with_anchors(vec![ABOUT_ANCHOR, CONTACT_ANCHOR]);
        viewport.mount_after.set(1);
        let mut about = ScrollJob::new(scroll_target(Page::About), RetryPolicy::default());
        let about_cancelled = Cell::new(false);
        let mut contact = ScrollJob::new(scroll_target(Page::Contact), RetryPolicy::default());

        let outcome = block_on(drive(&mut about, &viewport, &about_cancelled, |_| {
            // Navigating to Contact tears down the About effect and starts a new job.
            about_cancelled.set(true);
            assert_eq!(contact.step(&viewport), Step::Done);
            async {}
        }));
        assert_eq!(outcome, JobOutcome::Cancelled);
        assert_eq!(viewport.scrolled(), vec![Call::Anchor("contact-section".into())]);
    }
}
