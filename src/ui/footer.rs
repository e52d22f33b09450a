//! Site footer: link columns, language/theme selectors, social links and
//! the copyright bar

use chrono::Datelike;
use leptos::prelude::*;

use crate::core::content::{FOOTER_COLUMNS, LOGO_ALT, LOGO_SRC, LinkColumn, SOCIAL_LINKS, SITE_NAME};
use crate::core::selector::{Language, Selector, ThemeChoice};
use crate::ui::icon::Icon;
use crate::ui::link::SiteLink;
use crate::ui::listbox::Listbox;

/// Footer component
#[component]
pub fn Footer() -> impl IntoView {
    // Local to the footer; the choice is not applied anywhere
    let language = RwSignal::new(Selector::<Language>::new());
    let theme = RwSignal::new(Selector::<ThemeChoice>::new());
    let year = chrono::Utc::now().year();

    view! {
        <footer class="relative bg-white border-t border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-12">
                    {FOOTER_COLUMNS
                        .iter()
                        .map(|column| view! { <FooterColumn column=*column /> })
                        .collect_view()}

                    <div class="space-y-8">
                        <Listbox label="LANGUAGE" selector=language />
                        <Listbox label="THEME" selector=theme />

                        <div>
                            <h3 class="text-lg font-bold text-indigo-600 mb-4">"FOLLOW US"</h3>
                            <div class="flex space-x-4">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|social| {
                                        view! {
                                            <SiteLink
                                                href=social.href
                                                label=social.platform.label()
                                                class="bx-rise text-gray-600 hover:text-indigo-600 transition-colors"
                                            >
                                                <Icon name=social.icon class="h-5 w-5" />
                                            </SiteLink>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>

                <div class="mt-16 pt-8 border-t border-gray-200 flex flex-col md:flex-row justify-between items-center">
                    <SiteLink href="/" class="mb-4 md:mb-0">
                        <img src=LOGO_SRC alt=LOGO_ALT class="h-8" />
                    </SiteLink>
                    <div class="text-sm text-gray-500">
                        {format!("© {} {}. All rights reserved.", year, SITE_NAME)}
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterColumn(column: LinkColumn) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-lg font-bold text-indigo-600 mb-6">{column.heading}</h3>
            <ul class="space-y-4">
                {column
                    .links
                    .iter()
                    .map(|link| {
                        view! {
                            <li class="bx-nudge">
                                <SiteLink
                                    href=link.href
                                    class="text-base font-medium text-gray-800 hover:text-indigo-600 transition-colors"
                                >
                                    {link.label}
                                </SiteLink>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
