pub mod browser;
pub mod footer;
pub mod header;
pub mod icon;
pub mod link;
pub mod listbox;
pub mod motion;
pub mod pages;
pub mod section;

pub use footer::Footer;
pub use header::Header;
pub use icon::{Icon, icons};
pub use link::SiteLink;
pub use listbox::Listbox;
pub use motion::MotionStyles;
pub use pages::{HomePage, NotAllowedPage, NotFoundPage, RouteFallback};
pub use section::Section;
