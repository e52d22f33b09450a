//! Browser access used by the header and pages
//!
//! Every helper degrades to a neutral value on the server or when the DOM
//! handle it needs is missing; nothing here panics.

use crate::core::menu::ScrollLock;

#[cfg(not(feature = "ssr"))]
use leptos::logging::warn;

const SCROLL_LOCK_CLASS: &str = "overflow-hidden";

/// Locks page scrolling by toggling `overflow-hidden` on `<body>`
#[derive(Debug, Default, Clone, Copy)]
pub struct BodyScrollLock;

impl ScrollLock for BodyScrollLock {
    fn lock(&mut self) {
        set_body_class(SCROLL_LOCK_CLASS, true);
    }

    fn unlock(&mut self) {
        set_body_class(SCROLL_LOCK_CLASS, false);
    }
}

#[cfg(not(feature = "ssr"))]
fn set_body_class(class: &str, on: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        warn!("no <body> available, skipping `{}` toggle", class);
        return;
    };

    let classes = body.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(err) = result {
        warn!("failed to toggle `{}` on <body>: {:?}", class, err);
    }
}

#[cfg(feature = "ssr")]
fn set_body_class(_class: &str, _on: bool) {}

/// Milliseconds from `performance.now()`
pub fn now_ms() -> f64 {
    #[cfg(not(feature = "ssr"))]
    {
        web_sys::window()
            .and_then(|window| window.performance())
            .map(|performance| performance.now())
            .unwrap_or_default()
    }
    #[cfg(feature = "ssr")]
    {
        0.0
    }
}

/// Vertical scroll offset of the window
pub fn scroll_offset() -> f64 {
    #[cfg(not(feature = "ssr"))]
    {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or_default()
    }
    #[cfg(feature = "ssr")]
    {
        0.0
    }
}

/// Whether the viewport is in the mobile layout.
///
/// Uses the media query when available and the inner width otherwise.
pub fn is_mobile_viewport() -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::viewport::{MOBILE_QUERY, is_mobile_width};

        let Some(window) = web_sys::window() else {
            warn!("no window available, assuming desktop layout");
            return false;
        };
        if let Ok(Some(query)) = window.match_media(MOBILE_QUERY) {
            return query.matches();
        }
        window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .map(is_mobile_width)
            .unwrap_or(false)
    }
    #[cfg(feature = "ssr")]
    {
        false
    }
}

/// Step back in the session history
pub fn history_back() {
    #[cfg(not(feature = "ssr"))]
    {
        match web_sys::window().map(|window| window.history()) {
            Some(Ok(history)) => {
                if let Err(err) = history.back() {
                    warn!("history.back() failed: {:?}", err);
                }
            }
            _ => warn!("no history available"),
        }
    }
}
