//! Home page
//!
//! Fixed composition, top to bottom:
//! - decorative background shapes
//! - hero with the typewriter tagline
//! - services grid
//! - "Why BoostLyx?" stats
//! - pricing tiers and the custom plan prompt
//! - community forum call to action

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::content::{
    CUSTOM_PLAN, CUSTOM_PLAN_PROMPT, EXPLORE_SERVICES, FORUM_BLURB, FORUM_JOIN, FORUM_NAME,
    FORUM_PERKS, FORUM_TOUR, HERO_ACCENT, HERO_HEADLINE, HERO_PRIMARY, HERO_SECONDARY,
    HERO_TAGLINE, HOME_DESCRIPTION, HOME_TITLE, LOGO_ALT, LOGO_SRC, PRICING_ACCENT,
    PRICING_SUBTITLE, PRICING_TIERS, PRICING_TITLE, PricingTier, SERVICE_STAGGER_MS, SERVICES,
    SITE_URL, STAT_STAGGER_MS, STATS, STATS_DISCLAIMER, Service, Stat, TIER_STAGGER_MS,
    WHY_US_LINK, featured_flags,
};
use crate::core::motion::{Easing, Motion, Transition};
use crate::core::section::{SectionConfig, TextBlock};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::icon::{Icon, icons};
use crate::ui::link::SiteLink;
use crate::ui::motion::MotionStyles;
use crate::ui::section::{Section, staggered};

/// Spring of the card entrances
const CARD_SPRING: Easing = Easing::Spring {
    stiffness: 100.0,
    damping: 10.0,
};

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SeoMeta />
        <MotionStyles />
        <Header />
        <BackgroundShapes />
        <main>
            <Hero />
            <Services />
            <WhyUs />
            <Pricing />
            <Forum />
        </main>
        <Footer />
    }
}

/// SEO meta tags and structured data
#[component]
fn SeoMeta() -> impl IntoView {
    let structured_data = match crate::core::seo::home_structured_data() {
        Ok(json) => Some(json),
        Err(err) => {
            tracing::warn!(%err, "failed to serialize structured data");
            None
        }
    };
    let og_image = format!("{}/logos/banner-color-purple-white.svg", SITE_URL);

    view! {
        <Title text=HOME_TITLE />
        <Meta name="description" content=HOME_DESCRIPTION />
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=SITE_URL />
        <Meta property="og:title" content=HOME_TITLE />
        <Meta property="og:description" content=HOME_DESCRIPTION />
        <Meta property="og:image" content=og_image.clone() />
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=HOME_TITLE />
        <Meta name="twitter:description" content=HOME_DESCRIPTION />
        <Meta name="twitter:image" content=og_image />
        {structured_data.map(|json| {
            view! { <script type="application/ld+json" inner_html=json></script> }
        })}
    }
}

/// Float loop of a decorative shape
fn drift(lift_px: u32, duration_ms: u32) -> String {
    Transition::float(lift_px, 1.0)
        .with_duration(duration_ms)
        .style()
}

/// Breathing scale loop of an SVG circle
fn pulse(scale: f32, duration_ms: u32, delay_ms: u32) -> String {
    Transition::float(0, scale)
        .with_duration(duration_ms)
        .with_delay(delay_ms)
        .style()
}

fn appear(delay_ms: u32) -> String {
    Transition::fade().with_delay(delay_ms).style()
}

/// Slow-moving shapes behind all content
#[component]
fn BackgroundShapes() -> impl IntoView {
    let slide_in = Transition::new(Motion::SlideX { offset_px: -20 })
        .with_delay(500)
        .style();

    view! {
        <div class="fixed inset-0 w-screen h-screen pointer-events-none overflow-hidden z-0" aria-hidden="true">
            // Growth arrow
            <div class="absolute top-[8vh] left-[5vw] opacity-20" style=drift(50, 8000)>
                <svg width="200" height="200" viewBox="0 0 200 200" style=appear(300)>
                    <path d="M30 170L170 30" stroke="#4F46E5" stroke-width="1.5" fill="none" />
                    <path d="M160 40L170 30L155 25" stroke="#F59E0B" stroke-width="1.5" fill="none" />
                    <circle class="bx-svg-origin" cx="30" cy="170" r="5" fill="#4F46E5" style=pulse(1.1, 4000, 0) />
                </svg>
            </div>

            // Connection nodes
            <div class="absolute top-[10vh] right-[5vw] opacity-20">
                <svg width="180" height="180" viewBox="0 0 180 180" style=appear(400)>
                    <circle class="bx-svg-origin" cx="30" cy="30" r="4" fill="#7C3AED" style=pulse(1.4, 5000, 500) />
                    <circle class="bx-svg-origin" cx="90" cy="60" r="4" fill="#F59E0B" style=pulse(1.4, 6000, 700) />
                    <circle class="bx-svg-origin" cx="150" cy="30" r="4" fill="#4F46E5" style=pulse(1.4, 4000, 600) />
                    <path d="M34 34L86 56" stroke="#7C3AED" stroke-width="1.5" stroke-dasharray="3,2" />
                    <path d="M94 56L146 34" stroke="#4F46E5" stroke-width="1.5" stroke-dasharray="3,2" />
                </svg>
            </div>

            // Growth curve
            <div class="absolute bottom-[10vh] left-[5vw] opacity-20">
                <svg width="200" height="100" viewBox="0 0 220 120" style=slide_in>
                    <path d="M20 100C60 40 160 40 200 100" stroke="url(#growthGradient)" stroke-width="1.5" fill="none" />
                    <defs>
                        <linearGradient id="growthGradient" x1="0%" y1="0%" x2="100%" y2="0%">
                            <stop offset="0%" stop-color="#4F46E5" />
                            <stop offset="50%" stop-color="#F59E0B" />
                            <stop offset="100%" stop-color="#7C3AED" />
                        </linearGradient>
                    </defs>
                </svg>
            </div>

            // Breathing circles
            <div class="absolute bottom-[8vh] right-[5vw] opacity-20">
                <svg width="180" height="180" viewBox="0 0 180 180" style=appear(600)>
                    <circle class="bx-svg-origin" cx="90" cy="90" r="30" stroke="#4F46E5" stroke-width="1.5" fill="none" style=pulse(1.5, 8000, 0) />
                    <circle class="bx-svg-origin" cx="90" cy="90" r="15" stroke="#7C3AED" stroke-width="1.5" fill="none" style=pulse(1.1, 6000, 500) />
                    <circle class="bx-svg-origin" cx="90" cy="90" r="6" fill="#F59E0B" style=pulse(1.2, 4000, 1000) />
                </svg>
            </div>
        </div>
    }
}

/// Hero with the typewriter tagline
#[component]
fn Hero() -> impl IntoView {
    let tagline = RwSignal::new(String::new());

    #[cfg(not(feature = "ssr"))]
    type_tagline(tagline);

    view! {
        <section class="relative bg-transparent overflow-hidden">
            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24 md:py-32 z-10">
                <div class="text-center" style=Transition::fade_slide().style()>
                    <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold tracking-tight text-gray-900">
                        <span class="block">{HERO_HEADLINE}</span>
                        <span class="block text-indigo-600">{HERO_ACCENT}</span>
                    </h1>

                    <p
                        class="mt-6 text-xl sm:text-2xl font-medium text-gray-600 max-w-3xl mx-auto"
                        style=appear(100)
                        aria-label=HERO_TAGLINE
                    >
                        {move || tagline.get()}
                        <span class="inline-block w-1 h-6 bg-gray-600 ml-1 animate-pulse" aria-hidden="true"></span>
                    </p>

                    <div class="mt-10 flex flex-col sm:flex-row justify-center gap-4" style=appear(200)>
                        <SiteLink
                            href=HERO_PRIMARY.href
                            class="bx-press px-6 py-3 sm:px-8 sm:py-3 text-lg font-bold bg-indigo-600 text-white rounded-full hover:bg-indigo-700 transition-colors"
                        >
                            {HERO_PRIMARY.label}
                        </SiteLink>
                        <SiteLink
                            href=HERO_SECONDARY.href
                            class="bx-press px-6 py-3 sm:px-8 sm:py-3 text-lg font-bold bg-white text-[#ffac33] border-2 border-[#ffac33] rounded-full hover:bg-[#fff9ef] transition-colors"
                        >
                            {HERO_SECONDARY.label}
                        </SiteLink>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Drive the tagline typewriter while the hero is mounted.
///
/// Starts from empty on every mount; the interval is cleared when the text is
/// complete and the task is cancelled on unmount.
#[cfg(not(feature = "ssr"))]
fn type_tagline(tagline: RwSignal<String>) {
    use std::time::Duration;

    use leptos::logging::warn;

    use crate::core::typewriter::{HERO_TYPING_INTERVAL_MS, RevealTask};

    let task = StoredValue::new(RevealTask::start(HERO_TAGLINE));
    let interval = StoredValue::new(None::<IntervalHandle>);

    Effect::new(move |_| {
        task.set_value(RevealTask::start(HERO_TAGLINE));
        tagline.set(String::new());

        let started = set_interval_with_handle(
            move || match task.try_update_value(|task| task.tick().map(str::to_string)) {
                Some(Some(visible)) => tagline.set(visible),
                _ => {
                    if let Some(Some(handle)) = interval.try_get_value() {
                        handle.clear();
                    }
                }
            },
            Duration::from_millis(HERO_TYPING_INTERVAL_MS),
        );
        match started {
            Ok(handle) => {
                interval.set_value(Some(handle));
                on_cleanup(move || {
                    handle.clear();
                    task.try_update_value(RevealTask::cancel);
                });
            }
            Err(err) => {
                warn!("could not start typewriter: {:?}", err);
                tagline.set(HERO_TAGLINE.to_string());
            }
        }
    });
}

#[component]
fn Services() -> impl IntoView {
    let card_entrance = Transition::fade_slide()
        .with_duration(400)
        .with_easing(CARD_SPRING);

    view! {
        <section class="relative bg-transparent overflow-hidden">
            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24 md:py-32 z-10">
                <div style=Transition::fade_slide().with_duration(300).style()>
                    <h2 class="text-4xl sm:text-5xl lg:text-6xl font-bold tracking-tight text-left mb-12 md:mb-16">
                        <span class="block text-[#ffac33]">"Premium"</span>
                        <span class="block text-gray-900">
                            "Growth " <span class="text-indigo-600">"Services"</span>
                        </span>
                    </h2>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8 md:gap-10">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(index, service)| {
                            let style = staggered(card_entrance, 0, SERVICE_STAGGER_MS, index);
                            view! { <ServiceCard service=*service style=style /> }
                        })
                        .collect_view()}
                </div>

                <div class="mt-20 text-center" style=appear(800)>
                    <SiteLink
                        href=EXPLORE_SERVICES.href
                        class="bx-press inline-block px-8 py-4 text-lg font-bold bg-indigo-600 text-white rounded-full hover:bg-indigo-700 transition-colors shadow-lg hover:shadow-xl"
                    >
                        {EXPLORE_SERVICES.label}
                    </SiteLink>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: Service, style: String) -> impl IntoView {
    view! {
        <div
            class="bg-white bg-opacity-90 hover:cursor-pointer backdrop-blur-sm rounded-2xl p-8 border-2 border-[#4F46E54D] hover:border-indigo-600 transition-all duration-300"
            style=style
        >
            <div class="w-14 h-14 flex items-center justify-center bg-indigo-100 text-indigo-600 rounded-xl mb-6">
                <Icon name=service.icon class="w-7 h-7" />
            </div>
            <h3 class="text-2xl font-bold text-gray-900 mb-4">{service.title}</h3>
            <p class="text-gray-600 text-lg mb-6">{service.description}</p>
            <SiteLink
                href=service.href
                class="bx-nudge inline-flex items-center justify-center text-indigo-600 font-semibold group hover:underline"
            >
                "Learn more"
            </SiteLink>
        </div>
    }
}

#[component]
fn WhyUs() -> impl IntoView {
    let stat_entrance = Transition::fade_slide().with_easing(CARD_SPRING);

    view! {
        <section class="relative bg-transparent overflow-hidden">
            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24 md:py-32 z-10">
                <div class="flex flex-col items-center mb-20" style=Transition::fade().style()>
                    <div class="flex items-center">
                        <h2 class="text-4xl sm:text-5xl font-bold text-gray-900 mr-4">"Why"</h2>
                        <div class="bx-lift flex items-center">
                            <SiteLink href=WHY_US_LINK label=LOGO_ALT>
                                <img
                                    src=LOGO_SRC
                                    alt=LOGO_ALT
                                    class="h-12 mt-1 mr-0 pr-0 sm:h-14 md:h-16 w-auto"
                                />
                            </SiteLink>
                        </div>
                        <h2 class="text-4xl sm:text-5xl font-bold text-gray-900 ml-4">"?"</h2>
                    </div>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                    {STATS
                        .iter()
                        .enumerate()
                        .map(|(index, stat)| {
                            let style = staggered(stat_entrance, 0, STAT_STAGGER_MS, index);
                            view! { <StatTile stat=*stat style=style /> }
                        })
                        .collect_view()}
                </div>

                <p class="text-center text-sm text-gray-500 mt-12">{STATS_DISCLAIMER}</p>
            </div>
        </section>
    }
}

#[component]
fn StatTile(stat: Stat, style: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center" style=style>
            <div class=format!("w-24 h-24 {} rounded-full flex items-center justify-center mb-4", stat.color)>
                <Icon name=stat.icon class="w-10 h-10" />
            </div>
            <div class="text-center">
                <div class="text-3xl font-bold text-gray-900">{stat.value}</div>
                <h3 class="text-lg font-semibold text-gray-800 mt-2">{stat.title}</h3>
                <p class="text-sm text-gray-500 mt-1">{stat.caption}</p>
            </div>
        </div>
    }
}

#[component]
fn Pricing() -> impl IntoView {
    let config = SectionConfig::new()
        .background("bg-transparent")
        .padding("py-24 md:py-32 px-4 sm:px-6 lg:px-8")
        .entrance(Transition::none())
        .title(
            TextBlock::new(PRICING_TITLE)
                .with_accent(PRICING_ACCENT, "text-[#ffac33]")
                .with_class("text-4xl sm:text-5xl font-bold text-gray-900"),
        )
        .subtitle(
            TextBlock::new(PRICING_SUBTITLE)
                .with_class("mt-6 mb-20 text-xl text-gray-600 max-w-3xl mx-auto"),
        );

    let featured = featured_flags(&PRICING_TIERS);
    let tier_entrance = Transition::new(Motion::FadeSlide { offset_px: 40 }).with_easing(CARD_SPRING);

    view! {
        <Section config=config>
            <div class="flex flex-col lg:flex-row justify-center gap-12 lg:gap-8 xl:gap-12 w-full text-left">
                {PRICING_TIERS
                    .iter()
                    .zip(featured.iter().copied())
                    .enumerate()
                    .map(|(index, (tier, featured))| {
                        let style = staggered(tier_entrance, 0, TIER_STAGGER_MS, index);
                        view! { <PricingCard tier=*tier featured=featured style=style /> }
                    })
                    .collect_view()}
            </div>

            <div class="mt-20 text-center" style=appear(600)>
                <div class="inline-flex items-center bg-white rounded-full px-6 py-3 shadow-sm border border-gray-200">
                    <Icon name=icons::LIGHT_BULB class="w-5 h-5 mr-2" />
                    <p class="text-gray-700">
                        {CUSTOM_PLAN_PROMPT} " "
                        <SiteLink href=CUSTOM_PLAN.href class="text-indigo-600 font-semibold hover:underline">
                            {CUSTOM_PLAN.label}
                        </SiteLink>
                    </p>
                </div>
            </div>
        </Section>
    }
}

/// One pricing tier; `featured` is decided by the caller so at most one
/// card carries the badge
#[component]
fn PricingCard(tier: PricingTier, featured: bool, style: String) -> impl IntoView {
    let float = Transition::float(tier.float.lift_px, tier.float.scale).style();
    let offset_class = if featured { "lg:mt-0" } else { "lg:mt-8" };
    let cta_class = if featured {
        "bx-press mt-auto w-full py-3 rounded-full font-bold text-lg text-center block bg-gradient-to-r from-[#ffac33] to-indigo-600 text-white"
    } else {
        "bx-press mt-auto w-full py-3 rounded-full font-bold text-lg text-center block bg-white text-indigo-600 border border-indigo-200 hover:border-indigo-300"
    };

    let badge_entrance = Transition::new(Motion::Scale { from: 0.8 })
        .with_duration(300)
        .with_delay(400)
        .with_easing(Easing::EaseOut)
        .style();

    view! {
        <div class=format!("flex-1 max-w-md {}", offset_class) style=style>
            <div
                class=format!("{} rounded-2xl p-8 border-2 border-white shadow-lg hover:shadow-xl transition-all h-full flex flex-col", tier.color)
                style=float
            >
                {featured.then(|| view! {
                    <div
                        style=badge_entrance
                        class="bg-gradient-to-r from-[#ffac33] to-indigo-600 text-white text-xs font-bold px-4 py-1 rounded-full inline-block self-start mb-4">
                        "MOST POPULAR"
                    </div>
                })}

                <div class="flex items-center mb-6">
                    <div class="w-14 h-14 rounded-full bg-white flex items-center justify-center mr-4">
                        <Icon name=tier.icon class="w-7 h-7" />
                    </div>
                    <div>
                        <h3 class="text-2xl font-bold text-gray-900">{tier.name}</h3>
                        <p class="text-3xl font-bold text-indigo-600">{tier.price}</p>
                    </div>
                </div>

                <ul class="space-y-3 mb-8 flex-grow">
                    {tier
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <li class="flex items-start">
                                    <Icon name=icons::CHECK class="w-5 h-5 mr-2 mt-0.5 flex-shrink-0" />
                                    <span class="text-gray-700">{*feature}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <SiteLink href=tier.cta.href class=cta_class>
                    {tier.cta.label}
                </SiteLink>
            </div>
        </div>
    }
}

#[component]
fn Forum() -> impl IntoView {
    let heading = Transition::new(Motion::SlideX { offset_px: -20 }).style();
    let perk_entrance = Transition::fade_slide();

    view! {
        <section class="relative bg-transparent overflow-hidden py-24 md:py-32">
            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 z-10">
                <div class="relative bg-gradient-to-br from-indigo-50 to-[#fff4e0] rounded-3xl p-8 md:p-12 lg:p-16 shadow-lg border-2 border-white overflow-hidden">
                    <div class="absolute top-0 right-0 w-32 h-32 bg-indigo-200 rounded-full filter blur-3xl opacity-30"></div>
                    <div class="absolute bottom-0 left-0 w-40 h-40 bg-[#ffac33] rounded-full filter blur-3xl opacity-20"></div>

                    <div class="relative flex flex-col lg:flex-row items-center gap-12">
                        <div class="flex-shrink-0 text-center lg:text-left">
                            <div class="inline-flex flex-col items-center">
                                <div class="w-40 h-40 bg-white rounded-2xl border-2 border-indigo-100 shadow-md flex items-center justify-center mb-6">
                                    <Icon name=icons::CHAT_BUBBLES class="w-24 h-24" />
                                </div>
                                <h3 class="text-2xl font-bold text-indigo-600">{FORUM_NAME}</h3>
                            </div>
                        </div>

                        <div class="flex-grow">
                            <h2 class="text-3xl sm:text-4xl font-bold text-gray-900 mb-6" style=heading>
                                "Join Our " <span class="text-[#ffac33]">"Vibrant"</span> " Forum"
                            </h2>

                            <p class="text-xl text-gray-700 mb-8 max-w-2xl" style=appear(200)>
                                {FORUM_BLURB}
                            </p>

                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 mb-8">
                                {FORUM_PERKS
                                    .iter()
                                    .enumerate()
                                    .map(|(index, perk)| {
                                        view! {
                                            <div
                                                class="flex items-center bg-white bg-opacity-80 rounded-xl p-3 shadow-sm"
                                                style=staggered(perk_entrance, 300, 100, index)
                                            >
                                                <Icon name=perk.icon class="w-6 h-6 mr-3" />
                                                <span class="text-gray-700">{perk.text}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            <div class="flex flex-col sm:flex-row gap-4" style=appear(600)>
                                <SiteLink
                                    href=FORUM_JOIN.href
                                    label=FORUM_JOIN.label
                                    class="bx-press px-6 py-3 bg-gradient-to-r from-indigo-600 to-purple-600 text-white font-bold rounded-full text-center shadow-lg hover:shadow-xl transition-all"
                                >
                                    {FORUM_JOIN.label}
                                </SiteLink>
                                <SiteLink
                                    href=FORUM_TOUR.href
                                    label=FORUM_TOUR.label
                                    class="bx-press px-6 py-3 bg-white text-gray-800 font-bold rounded-full text-center border-2 border-gray-200 hover:border-indigo-300 transition-all"
                                >
                                    {FORUM_TOUR.label}
                                </SiteLink>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
