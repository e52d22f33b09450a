//! Anchor that applies the external-link policy

use leptos::prelude::*;

use crate::core::links::LinkTarget;

/// Plain `<a>`; absolute URLs open in a new tab without opener or referrer
#[component]
pub fn SiteLink(
    href: &'static str,
    #[prop(into, default = String::new())] class: String,
    /// Accessible name; external links get " (opens in new tab)" appended
    #[prop(optional)]
    label: Option<&'static str>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let target = LinkTarget::of(href);
    let aria_label = match target {
        LinkTarget::External => label.and_then(|label| target.aria_label(label)),
        LinkTarget::Internal => label.map(str::to_string),
    };

    view! {
        <a
            href=href
            class=class
            style=style
            target=target.target_attr()
            rel=target.rel_attr()
            aria-label=aria_label
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {children()}
        </a>
    }
}
