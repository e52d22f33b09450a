//! Application pages module
//!
//! - Home page
//! - "Not Allowed" page for `/public` paths
//! - 404 page for everything else

mod home;
mod not_allowed;
mod not_found;

pub use home::HomePage;
pub use not_allowed::NotAllowedPage;
pub use not_found::NotFoundPage;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::core::routes::SiteRoute;

/// Renders the page for a path the router did not match
#[component]
pub fn RouteFallback() -> impl IntoView {
    let pathname = use_location().pathname;
    let route = Memo::new(move |_| SiteRoute::resolve(&pathname.get()));

    #[cfg(feature = "ssr")]
    set_response_status(route.get_untracked());

    move || match route.get() {
        SiteRoute::Home => view! { <HomePage /> }.into_any(),
        SiteRoute::Blocked => view! { <NotAllowedPage /> }.into_any(),
        SiteRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[cfg(feature = "ssr")]
fn set_response_status(route: SiteRoute) {
    use axum::http::StatusCode;

    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        let status = StatusCode::from_u16(route.status_code()).unwrap_or(StatusCode::NOT_FOUND);
        response.set_status(status);
    }
}
