//! Site header
//!
//! Sticky bar with the logo, inline navigation on desktop and a full-screen
//! menu on mobile. It compacts its padding once the page is scrolled.

use leptos::prelude::*;

use crate::core::content::{LOGO_ALT, LOGO_SRC, NAV_ITEMS, SIGN_IN};
use crate::core::menu::MobileMenu;
use crate::core::motion::{Easing, Transition};
use crate::ui::browser::BodyScrollLock;
use crate::ui::icon::{Icon, icons};
use crate::ui::link::SiteLink;

const HEADER_PADDING: &str = "0.5rem";
const HEADER_PADDING_COMPACT: &str = "0rem";

/// Spring used for the padding change
const HEADER_SPRING: Easing = Easing::Spring {
    stiffness: 100.0,
    damping: 20.0,
};

/// Header component with scroll-reactive padding and mobile menu
#[component]
pub fn Header() -> impl IntoView {
    let menu = RwSignal::new(MobileMenu::new(BodyScrollLock));
    let is_mobile = RwSignal::new(false);
    let is_scrolled = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    watch_viewport_and_scroll(menu, is_mobile, is_scrolled);

    let menu_open = Memo::new(move |_| menu.with(|menu| menu.is_open()));
    let toggle_menu = move |_| menu.update(|menu| menu.toggle());
    let close_menu = Callback::new(move |_: ()| menu.update(|menu| menu.close()));

    let padding_transition = Transition::fade()
        .with_duration(500)
        .with_easing(HEADER_SPRING)
        .transition_css("padding");
    let header_style = move || {
        let padding = if is_scrolled.get() {
            HEADER_PADDING_COMPACT
        } else {
            HEADER_PADDING
        };
        format!(
            "padding-top: {padding}; padding-bottom: {padding}; {}",
            padding_transition
        )
    };

    view! {
        <header
            class="sticky top-0 left-0 right-0 z-50 bg-white shadow-sm"
            style=header_style
        >
            <div class="container mx-auto px-4 sm:px-6 py-2">
                <div class="flex items-center justify-between">
                    <div class="bx-lift">
                        <SiteLink
                            href="/"
                            class="flex items-center"
                            label="BoostLyx Home"
                            on_click=close_menu
                        >
                            <img
                                src=LOGO_SRC
                                alt=LOGO_ALT
                                class="h-12 sm:h-14 md:h-16 w-auto transition-transform duration-200 hover:scale-105"
                                loading="lazy"
                            />
                        </SiteLink>
                    </div>

                    <Show when=move || !is_mobile.get()>
                        <DesktopNav />
                    </Show>

                    <Show when=move || is_mobile.get()>
                        <button
                            type="button"
                            class="p-2 cursor-pointer rounded-md text-gray-800 focus:outline-none focus:ring-2 focus:ring-indigo-500 z-50"
                            on:click=toggle_menu
                            aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                            aria-expanded=move || menu_open.get().to_string()
                        >
                            {move || {
                                if menu_open.get() {
                                    view! { <Icon name=icons::X_MARK class="w-8 h-8" /> }.into_any()
                                } else {
                                    view! { <Icon name=icons::BARS_3 class="w-8 h-8" /> }.into_any()
                                }
                            }}
                        </button>
                    </Show>
                </div>

                <Show when=move || is_mobile.get() && menu_open.get()>
                    <MobileMenuPanel on_navigate=close_menu />
                </Show>
            </div>
        </header>
    }
}

#[component]
fn DesktopNav() -> impl IntoView {
    view! {
        <nav class="flex items-center space-x-6 xl:space-x-8">
            <ul class="flex space-x-6 xl:space-x-8">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="bx-lift">
                                <SiteLink
                                    href=item.href
                                    label=item.label
                                    class="text-gray-800 hover:text-indigo-600 font-medium text-lg transition-colors duration-200 relative group"
                                >
                                    {item.label}
                                    <span class="absolute left-0 bottom-0 h-0.5 bg-indigo-600 w-0 group-hover:w-full transition-all duration-300"></span>
                                </SiteLink>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <div class="bx-lift">
                <SiteLink
                    href=SIGN_IN.href
                    label=SIGN_IN.label
                    class="ml-6 px-6 py-3 bg-gradient-to-r from-indigo-600 to-purple-600 text-white font-semibold rounded-full shadow-lg hover:shadow-xl transition-all duration-300 hover:from-indigo-700 hover:to-purple-700"
                >
                    {SIGN_IN.label}
                </SiteLink>
            </div>
        </nav>
    }
}

#[component]
fn MobileMenuPanel(on_navigate: Callback<()>) -> impl IntoView {
    let entrance = Transition::new(crate::core::motion::Motion::FadeSlide { offset_px: -20 })
        .with_duration(300)
        .with_easing(Easing::EaseOut)
        .style();

    view! {
        <div class="fixed inset-0 z-40 pt-20 bg-white" style=entrance>
            <div class="relative h-[calc(100vh-5rem)] flex flex-col justify-between">
                <div class="container mx-auto px-4 sm:px-6 py-8 overflow-y-auto">
                    <ul class="flex flex-col items-center space-y-6">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <li class="w-full text-center">
                                        <SiteLink
                                            href=item.href
                                            label=item.label
                                            class="text-2xl font-medium text-gray-800 hover:text-indigo-600 transition-colors duration-200 block py-3"
                                            on_click=on_navigate
                                        >
                                            {item.label}
                                        </SiteLink>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="container mx-auto px-4 sm:px-6 pb-8">
                    <SiteLink
                        href=SIGN_IN.href
                        label=SIGN_IN.label
                        class="block px-8 py-4 bg-gradient-to-r from-indigo-600 to-purple-600 text-white font-semibold rounded-full shadow-lg hover:shadow-xl transition-all duration-300 text-lg w-full text-center"
                        on_click=on_navigate
                    >
                        {SIGN_IN.label}
                    </SiteLink>
                </div>
            </div>
        </div>
    }
}

/// Subscribe the header to viewport and scroll changes for its lifetime.
///
/// Initial sampling happens in an effect so hydration sees the same markup
/// the server rendered.
#[cfg(not(feature = "ssr"))]
fn watch_viewport_and_scroll(
    menu: RwSignal<MobileMenu<BodyScrollLock>>,
    is_mobile: RwSignal<bool>,
    is_scrolled: RwSignal<bool>,
) {
    use std::time::Duration;

    use leptos::ev;
    use leptos::logging::warn;

    use crate::core::scroll::{Sample, SampleThrottle, ScrollState};
    use crate::core::viewport::ViewportState;
    use crate::ui::browser;

    let viewport = ViewportState::new();
    let scroll = ScrollState::new();
    let throttle = StoredValue::new(SampleThrottle::new());
    let trailing = StoredValue::new(None::<TimeoutHandle>);

    let viewport_sub = viewport.subscribe(move |mobile| {
        is_mobile.set(mobile);
        menu.update(|menu| menu.on_viewport_change(mobile));
    });
    let scroll_sub = scroll.subscribe(move |scrolled| is_scrolled.set(scrolled));

    let resize_handle = window_event_listener(ev::resize, {
        let viewport = viewport.clone();
        move |_| {
            viewport.observe_match(browser::is_mobile_viewport());
        }
    });

    let scroll_handle = window_event_listener(ev::scroll, {
        let scroll = scroll.clone();
        move |_| {
            let now = browser::now_ms();
            match throttle.try_update_value(|throttle| throttle.offer(now)) {
                Some(Sample::Now) => {
                    scroll.observe(browser::scroll_offset());
                }
                Some(Sample::Schedule(wait_ms)) => {
                    let scroll = scroll.clone();
                    let scheduled = set_timeout_with_handle(
                        move || {
                            throttle.try_update_value(|throttle| {
                                throttle.complete_trailing(browser::now_ms())
                            });
                            trailing.try_set_value(None);
                            scroll.observe(browser::scroll_offset());
                        },
                        Duration::from_millis(u64::from(wait_ms)),
                    );
                    match scheduled {
                        Ok(handle) => trailing.set_value(Some(handle)),
                        Err(err) => {
                            warn!("could not schedule trailing scroll sample: {:?}", err);
                            throttle.update_value(SampleThrottle::reset);
                        }
                    }
                }
                Some(Sample::AlreadyScheduled) | None => {}
            }
        }
    });

    Effect::new(move |_| {
        viewport.observe_match(browser::is_mobile_viewport());
        scroll.observe(browser::scroll_offset());
    });

    on_cleanup(move || {
        resize_handle.remove();
        scroll_handle.remove();
        if let Some(Some(handle)) = trailing.try_get_value() {
            handle.clear();
        }
        drop(viewport_sub);
        drop(scroll_sub);
        menu.try_update(|menu| menu.close());
    });
}
