//! Page served for `/public` and everything below it

use leptos::prelude::*;
use leptos_meta::Title;

/// Fixed "Not Allowed" content, never the home page
#[component]
pub fn NotAllowedPage() -> impl IntoView {
    view! {
        <Title text="BoostLyx - Not Allowed" />
        <h1>"Not Allowed"</h1>
    }
}
