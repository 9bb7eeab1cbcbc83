use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};
use yew::prelude::*;

const FRAME_MS: u32 = 1000 / 60;

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Value shown on `frame` of a count-up that lands on `target` at `total_frames`.
pub fn count_at(frame: u32, total_frames: u32, target: u32) -> u32 {
    if total_frames == 0 || frame >= total_frames {
        return target;
    }
    let progress = frame as f64 / total_frames as f64;
    (ease_out_cubic(progress) * target as f64).round() as u32
}

/// True once an element's top edge has risen above `start_fraction` of the viewport.
pub fn has_entered(top: f64, viewport_height: f64, start_fraction: f64) -> bool {
    top <= viewport_height * start_fraction
}

/// 0.0 while the element's top is below `start_fraction` of the viewport,
/// 1.0 once it reaches `end_fraction`, linear in between.
pub fn scrub_progress(top: f64, viewport_height: f64, start_fraction: f64, end_fraction: f64) -> f64 {
    let start = viewport_height * start_fraction;
    let end = viewport_height * end_fraction;
    if (start - end).abs() < f64::EPSILON {
        return if top <= end { 1.0 } else { 0.0 };
    }
    ((start - top) / (start - end)).clamp(0.0, 1.0)
}

/// Window scroll listener that unregisters itself when dropped.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn Fn()>,
}

impl ScrollListener {
    /// Runs `handler` once immediately, then on every scroll.
    pub fn attach(handler: impl Fn() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        handler();
        let callback = Closure::<dyn Fn()>::new(handler);
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

fn measure(node: &NodeRef) -> Option<(f64, f64)> {
    let element = node.cast::<Element>()?;
    let viewport_height = web_sys::window()?.inner_height().ok()?.as_f64()?;
    Some((element.get_bounding_client_rect().top(), viewport_height))
}

/// Whether `node` is past its reveal line. Reverts when scrolled back above it.
#[hook]
pub fn use_scroll_reveal(node: NodeRef, start_fraction: f64) -> bool {
    let visible = use_state_eq(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let node = node.clone();
                let listener = ScrollListener::attach(move || {
                    if let Some((top, viewport_height)) = measure(&node) {
                        visible.set(has_entered(top, viewport_height, start_fraction));
                    }
                });
                move || drop(listener)
            },
            node,
        );
    }
    *visible
}

#[hook]
pub fn use_scroll_progress(node: NodeRef, start_fraction: f64, end_fraction: f64) -> f64 {
    let progress = use_state_eq(|| 0.0);
    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let node = node.clone();
                let listener = ScrollListener::attach(move || {
                    if let Some((top, viewport_height)) = measure(&node) {
                        // Two decimals is plenty for a transform and avoids a render per pixel.
                        let value = scrub_progress(top, viewport_height, start_fraction, end_fraction);
                        progress.set((value * 100.0).round() / 100.0);
                    }
                });
                move || drop(listener)
            },
            node,
        );
    }
    *progress
}

/// True once the page has scrolled past `threshold` pixels.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = ScrollListener::attach(move || {
                    if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                        scrolled.set(y > threshold);
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }
    *scrolled
}

/// Counts from 0 to `target` over `duration_ms` once `active` turns true.
#[hook]
pub fn use_count_up(target: u32, duration_ms: u32, active: bool) -> u32 {
    let count = use_state_eq(|| 0u32);
    {
        let count = count.clone();
        use_effect_with_deps(
            move |&(target, active)| {
                let cancelled = Rc::new(Cell::new(false));
                if active {
                    let cancelled = cancelled.clone();
                    let total_frames = (duration_ms / FRAME_MS).max(1);
                    wasm_bindgen_futures::spawn_local(async move {
                        for frame in 1..=total_frames {
                            TimeoutFuture::new(FRAME_MS).await;
                            if cancelled.get() {
                                return;
                            }
                            count.set(count_at(frame, total_frames, target));
                        }
                    });
                }
                move || cancelled.set(true)
            },
            (target, active),
        );
    }
    *count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_cubic_is_clamped_and_monotonic() {
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        let samples: Vec<f64> = (0..=10).map(|i| ease_out_cubic(i as f64 / 10.0)).collect();
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
        // Decelerates: more than half the distance in the first half.
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn count_up_lands_on_target() {
        let total = 90;
        assert_eq!(count_at(0, total, 25), 0);
        assert_eq!(count_at(total, total, 25), 25);
        assert_eq!(count_at(total + 5, total, 25), 25);
        assert_eq!(count_at(3, 0, 25), 25);
        let mid = count_at(total / 2, total, 25);
        assert!(mid > 12 && mid < 25);
    }

    #[test]
    fn reveal_line_is_a_viewport_fraction() {
        assert!(!has_entered(700.0, 800.0, 0.85));
        assert!(has_entered(680.0, 800.0, 0.85));
        assert!(has_entered(-200.0, 800.0, 0.85));
    }

    #[test]
    fn scrub_progress_is_linear_between_lines() {
        // start at 85% (680px), end at 40% (320px) of an 800px viewport
        assert_eq!(scrub_progress(900.0, 800.0, 0.85, 0.4), 0.0);
        assert_eq!(scrub_progress(680.0, 800.0, 0.85, 0.4), 0.0);
        assert!((scrub_progress(500.0, 800.0, 0.85, 0.4) - 0.5).abs() < 1e-9);
        assert_eq!(scrub_progress(320.0, 800.0, 0.85, 0.4), 1.0);
        assert_eq!(scrub_progress(-50.0, 800.0, 0.85, 0.4), 1.0);
    }

    #[test]
    fn degenerate_scrub_range_acts_as_a_switch() {
        assert_eq!(scrub_progress(100.0, 800.0, 0.5, 0.5), 1.0);
        assert_eq!(scrub_progress(500.0, 800.0, 0.5, 0.5), 0.0);
    }
}
