//! Mobile/desktop breakpoint state

use super::observable::{Observable, Subscription};

/// Media query matching the mobile layout
pub const MOBILE_QUERY: &str = "(max-width: 1023.5px)";

/// Widest viewport, in CSS pixels, still laid out as mobile
pub const MOBILE_MAX_WIDTH_PX: f64 = 1023.5;

/// Derived `is_mobile` flag, recomputed on resize
#[derive(Clone, Default)]
pub struct ViewportState {
    mobile: Observable<bool>,
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the result of matching [`MOBILE_QUERY`]; returns whether it flipped
    pub fn observe_match(&self, matches: bool) -> bool {
        let changed = self.mobile.set(matches);
        if changed {
            tracing::debug!(is_mobile = matches, "viewport breakpoint crossed");
        }
        changed
    }

    /// Feed a raw viewport width when media queries are unavailable
    pub fn observe_width(&self, width_px: f64) -> bool {
        self.observe_match(is_mobile_width(width_px))
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile.get()
    }

    pub fn subscribe(&self, listener: impl Fn(bool) + Send + Sync + 'static) -> Subscription {
        self.mobile.subscribe(move |value| listener(*value))
    }
}

pub fn is_mobile_width(width_px: f64) -> bool {
    width_px <= MOBILE_MAX_WIDTH_PX
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_breakpoint_widths() {
        assert!(is_mobile_width(375.0));
        assert!(is_mobile_width(1023.0));
        assert!(!is_mobile_width(1024.0));
        assert!(!is_mobile_width(1440.0));
    }

    #[test]
    fn test_resize_notifies_subscriber() {
        let viewport = ViewportState::new();
        let last = Arc::new(AtomicBool::new(false));
        let sink = last.clone();
        let _sub = viewport.subscribe(move |mobile| sink.store(mobile, Ordering::SeqCst));

        assert!(viewport.observe_width(800.0));
        assert!(last.load(Ordering::SeqCst));

        assert!(!viewport.observe_width(900.0));

        assert!(viewport.observe_width(1280.0));
        assert!(!last.load(Ordering::SeqCst));
        assert!(!viewport.is_mobile());
    }
}
