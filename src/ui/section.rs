//! Generic content section
//!
//! Renders a [`SectionConfig`]: optional background layer, then title,
//! subtitle, paragraphs, buttons, cards, images, lists, icon rows and finally
//! any children, each only when present.

use leptos::prelude::*;

use crate::core::section::{
    ButtonSpec, CardSpec, DEFAULT_PARAGRAPH_CLASS, DEFAULT_SUBTITLE_CLASS, DEFAULT_TITLE_CLASS,
    IconRow, ImageSpec, ListBlock, ListStyle, RevealTarget, SectionConfig, TextBlock,
};
use crate::core::motion::Transition;
use crate::ui::icon::{Icon, icons};

/// Configuration-driven content block
#[component]
pub fn Section(
    config: SectionConfig,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let plan = config.reveal_plan();
    let section_class = config.section_classes();
    let container_class = config.container_classes();
    let column_class = config.column_classes();
    let group_class = config.button_group_classes();
    let collections_class = config.arrangement.classes();
    let has_collections = config.has_collections();
    let entrance = config.entrance.style();
    let background = config.has_background().then(|| {
        let background_class = config.background_classes();
        let background_style = config.background_style();
        let overlay_class = config.overlay_classes();
        let overlay_style = config.overlay_style();
        view! {
            <div class="absolute inset-0 z-0" aria-hidden="true">
                <div class=background_class style=background_style></div>
                <div class=overlay_class style=overlay_style></div>
            </div>
        }
    });

    let SectionConfig {
        id,
        layout,
        title,
        subtitle,
        paragraphs,
        buttons,
        cards,
        images,
        lists,
        icons: icon_rows,
        ..
    } = config;

    // Without an image the color sits on the section itself
    let section_class = if layout.background_image.is_none() {
        format!("{} {}", section_class, layout.background_color)
    } else {
        section_class
    };

    let title_view = title.map(|block| {
        let style = block.style_with(&plan.transition(RevealTarget::Title));
        view! {
            <h1 class=block.class_or(DEFAULT_TITLE_CLASS).to_string() style=style>
                <TextContent block=block.clone() />
            </h1>
        }
    });

    let subtitle_view = subtitle.map(|block| {
        let style = block.style_with(&plan.transition(RevealTarget::Subtitle));
        view! {
            <h2 class=block.class_or(DEFAULT_SUBTITLE_CLASS).to_string() style=style>
                <TextContent block=block.clone() />
            </h2>
        }
    });

    let paragraph_views = paragraphs
        .into_iter()
        .enumerate()
        .map(|(index, block)| {
            let style = block.style_with(&plan.transition(RevealTarget::Paragraph(index)));
            view! {
                <p class=block.class_or(DEFAULT_PARAGRAPH_CLASS).to_string() style=style>
                    <TextContent block=block.clone() />
                </p>
            }
        })
        .collect_view();

    let buttons_view = (!buttons.is_empty()).then(|| {
        let style = plan.transition(RevealTarget::Buttons).style();
        view! {
            <div class=group_class style=style>
                {buttons
                    .into_iter()
                    .map(|button| view! { <SectionButton button=button /> })
                    .collect_view()}
            </div>
        }
    });

    let collections_view = has_collections.then(|| {
        view! {
            <div class=collections_class>
                {cards.into_iter().map(|card| view! { <Card card=card /> }).collect_view()}
                {images.into_iter().map(|image| view! { <SectionImage image=image /> }).collect_view()}
                {lists.into_iter().map(|list| view! { <SectionList list=list /> }).collect_view()}
                {icon_rows.into_iter().map(|row| view! { <IconRowView row=row /> }).collect_view()}
            </div>
        }
    });

    view! {
        <section id=id class=section_class style=entrance>
            {background}
            <div class=container_class>
                <div class=column_class>
                    {title_view}
                    {subtitle_view}
                    {paragraph_views}
                    {buttons_view}
                    {collections_view}
                    {children.map(|children| children())}
                </div>
            </div>
        </section>
    }
}

/// Text of a block, with its accent words in their own span
#[component]
fn TextContent(block: TextBlock) -> impl IntoView {
    view! {
        {block.text}
        {block.accent.map(|(accent, class)| {
            view! {
                " "
                <span class=class>{accent}</span>
            }
        })}
    }
}

#[component]
fn SectionButton(button: ButtonSpec) -> impl IntoView {
    let class = format!("{} rounded-full bx-press", button.class_list());
    let kind = button.kind.as_str();
    let style = button.style.clone();
    let text = button.text.clone();

    view! {
        <button type=kind class=class style=style on:click=move |_| button.click()>
            {text}
        </button>
    }
}

#[component]
fn Card(card: CardSpec) -> impl IntoView {
    let class = card
        .class
        .clone()
        .unwrap_or_else(|| "bg-white rounded-2xl p-8 border-2 border-indigo-100 shadow-sm".to_string());

    view! {
        <div class=class>
            {card.image.map(|image| view! { <SectionImage image=image /> })}
            {card.title.map(|title| view! { <h3 class="text-2xl font-bold mt-4 mb-2">{title}</h3> })}
            {card.text.map(|text| view! { <p class="text-gray-600 text-lg">{text}</p> })}
            {(!card.buttons.is_empty()).then(|| {
                view! {
                    <div class="flex gap-4 mt-6">
                        {card
                            .buttons
                            .into_iter()
                            .map(|button| view! { <SectionButton button=button /> })
                            .collect_view()}
                    </div>
                }
            })}
        </div>
    }
}

#[component]
fn SectionImage(image: ImageSpec) -> impl IntoView {
    let class = image.class_list();
    view! {
        <img src=image.src alt=image.alt class=class loading=image.loading.as_str() />
    }
}

#[component]
fn SectionList(list: ListBlock) -> impl IntoView {
    let with_icons = list.style == ListStyle::Icon;

    view! {
        <div class="text-left">
            {list.title.map(|title| view! { <h3 class="text-xl font-semibold mb-4">{title}</h3> })}
            <ul class=if with_icons { "space-y-3" } else { "list-disc pl-6 space-y-2" }>
                {list
                    .items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li class="flex items-start">
                                {with_icons.then(|| view! {
                                    <Icon name=icons::CHECK class="w-5 h-5 text-green-500 mr-2 mt-0.5 flex-shrink-0" />
                                })}
                                <span>{item}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn IconRowView(row: IconRow) -> impl IntoView {
    let class = row.class.unwrap_or_else(|| "flex justify-center gap-6".to_string());
    view! {
        <div class=class>
            {row
                .icons
                .into_iter()
                .map(|name| view! { <Icon name=name class="w-8 h-8" /> })
                .collect_view()}
        </div>
    }
}

/// Inline style for an element revealed `index` steps into a stagger
pub fn staggered(base: Transition, first_delay_ms: u32, step_ms: u32, index: usize) -> String {
    base.with_delay(first_delay_ms + step_ms * index as u32).style()
}
