//! Scroll state of the page
//!
//! Scroll events fire far more often than the header needs them. Samples pass
//! through a [`SampleThrottle`] (one sample per window plus a trailing one, so
//! the position the user settles on is always observed) and feed a
//! [`ScrollState`] that flips `is_scrolled` at [`SCROLL_THRESHOLD_PX`].
//!
//! Time is passed in as milliseconds so the same code runs against
//! `performance.now()` in the browser and fixed values in tests.

use super::observable::{Observable, Subscription};

/// Offset from the top, in pixels, past which the page counts as scrolled
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Minimum spacing between two scroll samples
pub const SCROLL_SAMPLE_INTERVAL_MS: f64 = 100.0;

/// What the caller should do with an incoming event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sample {
    /// Sample immediately
    Now,
    /// Sample after the given delay, then call [`SampleThrottle::complete_trailing`]
    Schedule(u32),
    /// A trailing sample is already pending; drop the event
    AlreadyScheduled,
}

/// Leading + trailing throttle over a fixed window
#[derive(Debug, Clone)]
pub struct SampleThrottle {
    interval_ms: f64,
    last_sample: Option<f64>,
    trailing_pending: bool,
}

impl SampleThrottle {
    pub fn new() -> Self {
        Self::with_interval(SCROLL_SAMPLE_INTERVAL_MS)
    }

    pub fn with_interval(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_sample: None,
            trailing_pending: false,
        }
    }

    /// Offer an event that happened at `now_ms`
    pub fn offer(&mut self, now_ms: f64) -> Sample {
        if self.trailing_pending {
            return Sample::AlreadyScheduled;
        }
        match self.last_sample {
            Some(last) if now_ms - last < self.interval_ms => {
                self.trailing_pending = true;
                let wait = (self.interval_ms - (now_ms - last)).ceil().max(0.0);
                Sample::Schedule(wait as u32)
            }
            _ => {
                self.last_sample = Some(now_ms);
                Sample::Now
            }
        }
    }

    /// The scheduled trailing sample ran at `now_ms`
    pub fn complete_trailing(&mut self, now_ms: f64) {
        self.trailing_pending = false;
        self.last_sample = Some(now_ms);
    }

    pub fn is_trailing_pending(&self) -> bool {
        self.trailing_pending
    }

    pub fn reset(&mut self) {
        self.last_sample = None;
        self.trailing_pending = false;
    }
}

impl Default for SampleThrottle {
    fn default() -> Self {
        Self::new()
    }
}

/// Derived `is_scrolled` flag
#[derive(Clone)]
pub struct ScrollState {
    threshold_px: f64,
    scrolled: Observable<bool>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::with_threshold(SCROLL_THRESHOLD_PX)
    }

    pub fn with_threshold(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            scrolled: Observable::new(false),
        }
    }

    /// Feed a vertical offset; returns whether `is_scrolled` flipped
    pub fn observe(&self, offset_px: f64) -> bool {
        let scrolled = offset_px > self.threshold_px;
        let changed = self.scrolled.set(scrolled);
        if changed {
            tracing::trace!(offset_px, scrolled, "scroll state flipped");
        }
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled.get()
    }

    /// Listen for flips of `is_scrolled`
    pub fn subscribe(&self, listener: impl Fn(bool) + Send + Sync + 'static) -> Subscription {
        self.scrolled.subscribe(move |value| listener(*value))
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_threshold_boundary() {
        let state = ScrollState::new();

        state.observe(10.0);
        assert!(!state.is_scrolled());

        state.observe(10.5);
        assert!(state.is_scrolled());

        state.observe(0.0);
        assert!(!state.is_scrolled());
    }

    #[test]
    fn test_notifies_only_on_flip() {
        let state = ScrollState::new();
        let flips = Arc::new(AtomicUsize::new(0));
        let counter = flips.clone();
        let _sub = state.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        for offset in [0.0, 5.0, 11.0, 50.0, 300.0, 9.0, 2.0] {
            state.observe(offset);
        }

        assert_eq!(flips.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_first_event_samples_immediately() {
        let mut throttle = SampleThrottle::new();
        assert_eq!(throttle.offer(0.0), Sample::Now);
    }

    #[test]
    fn test_burst_gets_one_trailing_sample() {
        let mut throttle = SampleThrottle::new();

        assert_eq!(throttle.offer(1000.0), Sample::Now);
        assert_eq!(throttle.offer(1030.0), Sample::Schedule(70));
        assert_eq!(throttle.offer(1060.0), Sample::AlreadyScheduled);
        assert_eq!(throttle.offer(1090.0), Sample::AlreadyScheduled);
        assert!(throttle.is_trailing_pending());

        throttle.complete_trailing(1100.0);
        assert!(!throttle.is_trailing_pending());

        // Window restarts from the trailing sample
        assert_eq!(throttle.offer(1150.0), Sample::Schedule(50));
    }

    #[test]
    fn test_spaced_events_all_sample() {
        let mut throttle = SampleThrottle::new();

        assert_eq!(throttle.offer(0.0), Sample::Now);
        assert_eq!(throttle.offer(100.0), Sample::Now);
        assert_eq!(throttle.offer(250.0), Sample::Now);
    }

    #[test]
    fn test_reset_clears_pending() {
        let mut throttle = SampleThrottle::with_interval(50.0);
        throttle.offer(0.0);
        throttle.offer(10.0);

        throttle.reset();

        assert!(!throttle.is_trailing_pending());
        assert_eq!(throttle.offer(20.0), Sample::Now);
    }
}
