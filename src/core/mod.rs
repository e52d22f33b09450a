//! View-state logic and static content of the BoostLyx site
//!
//! Nothing in here touches the DOM, so it builds and tests on the host.

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod links;
pub mod menu;
pub mod motion;
pub mod observable;
pub mod routes;
pub mod scroll;
pub mod section;
pub mod selector;
pub mod seo;
pub mod typewriter;
pub mod viewport;
#[cfg(test)]
mod tests;

pub use links::{Link, LinkTarget};
pub use menu::{MobileMenu, ScrollLock};
pub use motion::{Easing, Motion, Transition};
pub use observable::{Observable, Subscription};
pub use routes::SiteRoute;
pub use scroll::{SampleThrottle, ScrollState};
pub use section::{
    Align, ButtonSpec, ButtonVariant, LayoutParseError, SectionConfig, TextBlock, WidthMode,
};
pub use selector::{Language, Selector, SelectorOption, ThemeChoice};
pub use typewriter::RevealTask;
pub use viewport::ViewportState;
