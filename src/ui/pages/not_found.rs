//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::section::{ButtonSpec, SectionConfig, TextBlock};
use crate::ui::browser;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::link::SiteLink;
use crate::ui::motion::MotionStyles;
use crate::ui::section::Section;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let config = SectionConfig::new()
        .padding("py-32 px-4 sm:px-6 lg:px-8")
        .title(TextBlock::new("404").with_class("text-6xl font-bold text-indigo-600"))
        .subtitle(TextBlock::new("Page Not Found").with_class("text-2xl font-semibold mt-4"))
        .paragraph(
            TextBlock::new("The page you're looking for doesn't exist or has been moved.")
                .with_class("text-gray-600 mt-4 mb-4 max-w-md"),
        )
        .button(ButtonSpec::secondary("Go Back").on_click(browser::history_back));

    view! {
        <Title text="BoostLyx - Page Not Found" />
        <MotionStyles />
        <Header />
        <main class="min-h-[60vh]">
            <Section config=config>
                <SiteLink
                    href="/"
                    class="bx-press mt-6 px-8 py-3 text-lg font-medium rounded-full bg-indigo-600 text-white hover:bg-indigo-700 transition-colors"
                >
                    "Go Home"
                </SiteLink>
            </Section>
        </main>
        <Footer />
    }
}
