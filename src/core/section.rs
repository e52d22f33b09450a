//! Configuration of the generic content section
//!
//! A [`SectionConfig`] describes one content block: layout, optional text
//! blocks, buttons and richer collections (cards, images, lists, icon rows).
//! Everything except the text of a block or button has a default, so a config
//! built with nothing but [`SectionConfig::new`] renders an empty, valid
//! section.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use derive_more::Display;

use super::motion::{Transition, stagger};

/// Default classes of a section title
pub const DEFAULT_TITLE_CLASS: &str = "text-4xl sm:text-5xl lg:text-6xl font-medium tracking-tight";
/// Default classes of a section subtitle
pub const DEFAULT_SUBTITLE_CLASS: &str = "text-xl sm:text-2xl lg:text-3xl font-normal mt-6 max-w-3xl";
/// Default classes of a section paragraph
pub const DEFAULT_PARAGRAPH_CLASS: &str = "text-lg sm:text-xl mt-6 max-w-2xl";
/// Default classes of a section button
pub const DEFAULT_BUTTON_CLASS: &str = "px-8 py-3 text-lg font-medium transition-colors";

/// Delay of the first revealed element
pub const REVEAL_FIRST_DELAY_MS: u32 = 100;
/// Delay added for every following revealed element
pub const REVEAL_STEP_MS: u32 = 100;

/// Error parsing a layout keyword
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutParseError {
    #[error("unknown alignment `{0}`, expected left, center or right")]
    UnknownAlignment(String),
    #[error("unknown width mode `{0}`, expected contained or full")]
    UnknownWidth(String),
}

/// Horizontal alignment of the section content
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
pub enum Align {
    #[display("left")]
    Left,
    #[default]
    #[display("center")]
    Center,
    #[display("right")]
    Right,
}

impl Align {
    pub const ALL: [Align; 3] = [Align::Left, Align::Center, Align::Right];

    /// Text and flex item alignment classes
    pub fn classes(self) -> &'static str {
        match self {
            Align::Left => "text-left items-start",
            Align::Center => "text-center items-center",
            Align::Right => "text-right items-end",
        }
    }
}

impl FromStr for Align {
    type Err = LayoutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Align::Left),
            "center" => Ok(Align::Center),
            "right" => Ok(Align::Right),
            other => Err(LayoutParseError::UnknownAlignment(other.to_string())),
        }
    }
}

/// Width of the section content
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
pub enum WidthMode {
    #[default]
    #[display("contained")]
    Contained,
    #[display("full")]
    Full,
}

impl WidthMode {
    pub const ALL: [WidthMode; 2] = [WidthMode::Contained, WidthMode::Full];

    pub fn classes(self) -> &'static str {
        match self {
            WidthMode::Contained => "max-w-7xl mx-auto",
            WidthMode::Full => "w-full",
        }
    }
}

impl FromStr for WidthMode {
    type Err = LayoutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contained" | "contain" => Ok(WidthMode::Contained),
            "full" => Ok(WidthMode::Full),
            other => Err(LayoutParseError::UnknownWidth(other.to_string())),
        }
    }
}

/// Overlay opacity in percent, clamped to 0..=100
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Opacity(u8);

impl Opacity {
    pub fn percent(percent: u8) -> Self {
        Self(percent.min(100))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// CSS `opacity` value, e.g. `0.35`
    pub fn css(self) -> String {
        (f32::from(self.0) / 100.0).to_string()
    }
}

/// A run of text with optional class and style overrides
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    pub text: String,
    /// Highlighted trailing words and their classes
    pub accent: Option<(String, String)>,
    pub class: Option<String>,
    pub style: Option<String>,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            accent: None,
            class: None,
            style: None,
        }
    }

    pub fn with_accent(mut self, text: impl Into<String>, class: impl Into<String>) -> Self {
        self.accent = Some((text.into(), class.into()));
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// The override class, or `default` when none is set
    pub fn class_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.class.as_deref().unwrap_or(default)
    }

    /// Entrance animation followed by the caller's own style
    pub fn style_with(&self, transition: &Transition) -> String {
        join_style(transition.style(), self.style.as_deref())
    }
}

fn join_style(animation: String, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => {
            if animation.is_empty() {
                extra.to_string()
            } else {
                format!("{} {}", animation, extra)
            }
        }
        _ => animation,
    }
}

/// Visual variant of a section button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled, high contrast
    Primary,
    /// Outlined
    Secondary,
    /// Caller classes only
    #[default]
    Plain,
}

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-indigo-600 text-white hover:bg-indigo-700",
            ButtonVariant::Secondary => {
                "bg-transparent text-indigo-600 hover:bg-indigo-50 border border-indigo-600"
            }
            ButtonVariant::Plain => "",
        }
    }
}

/// HTML `type` of a section button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
pub enum ButtonType {
    #[default]
    #[display("button")]
    Button,
    #[display("submit")]
    Submit,
    #[display("reset")]
    Reset,
}

impl ButtonType {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// Click handler attached to a button
#[derive(Clone)]
pub struct Action(Arc<dyn Fn() + Send + Sync>);

impl Action {
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn run(&self) {
        (self.0)()
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

/// One button of a section or card
#[derive(Clone, Debug)]
pub struct ButtonSpec {
    pub text: String,
    pub variant: ButtonVariant,
    pub action: Option<Action>,
    pub kind: ButtonType,
    pub class: Option<String>,
    pub style: Option<String>,
}

impl ButtonSpec {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variant: ButtonVariant::default(),
            action: None,
            kind: ButtonType::default(),
            class: None,
            style: None,
        }
    }

    pub fn primary(text: impl Into<String>) -> Self {
        Self::new(text).with_variant(ButtonVariant::Primary)
    }

    pub fn secondary(text: impl Into<String>) -> Self {
        Self::new(text).with_variant(ButtonVariant::Secondary)
    }

    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn on_click(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.action = Some(Action::new(f));
        self
    }

    pub fn with_type(mut self, kind: ButtonType) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Base classes (override or default) plus the variant's classes
    pub fn class_list(&self) -> String {
        let base = self.class.as_deref().unwrap_or(DEFAULT_BUTTON_CLASS);
        let variant = self.variant.classes();
        if variant.is_empty() {
            base.to_string()
        } else {
            format!("{} {}", base, variant)
        }
    }

    /// Run the click action; a button without one is inert
    pub fn click(&self) {
        if let Some(action) = &self.action {
            action.run();
        }
    }
}

/// Image loading hint
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Loading {
    #[default]
    Lazy,
    Eager,
}

impl Loading {
    pub fn as_str(self) -> &'static str {
        match self {
            Loading::Lazy => "lazy",
            Loading::Eager => "eager",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageSpec {
    pub src: String,
    pub alt: String,
    pub class: Option<String>,
    pub loading: Loading,
    pub full_width: bool,
}

impl ImageSpec {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            class: None,
            loading: Loading::default(),
            full_width: false,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn eager(mut self) -> Self {
        self.loading = Loading::Eager;
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    pub fn class_list(&self) -> String {
        let base = self.class.as_deref().unwrap_or("rounded-2xl shadow-md");
        if self.full_width {
            format!("{} w-full", base)
        } else {
            base.to_string()
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CardSpec {
    pub title: Option<String>,
    pub text: Option<String>,
    pub image: Option<ImageSpec>,
    pub buttons: Vec<ButtonSpec>,
    pub class: Option<String>,
}

impl CardSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_image(mut self, image: ImageSpec) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_button(mut self, button: ButtonSpec) -> Self {
        self.buttons.push(button);
        self
    }
}

/// Bullet style of a list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListStyle {
    #[default]
    Plain,
    /// Check-mark icon bullets
    Icon,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListBlock {
    pub style: ListStyle,
    pub title: Option<String>,
    pub items: Vec<String>,
}

impl ListBlock {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            style: ListStyle::Plain,
            title: None,
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_icons(mut self) -> Self {
        self.style = ListStyle::Icon;
        self
    }
}

/// A row of icons, by icon name
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IconRow {
    pub icons: Vec<&'static str>,
    pub class: Option<String>,
}

/// How cards, images, lists and icons are arranged
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Arrangement {
    #[default]
    Stack,
    /// Grid with the given column classes, e.g. `grid-cols-1 md:grid-cols-3`
    Grid { cols: String },
    Flex,
}

impl Arrangement {
    pub fn classes(&self) -> String {
        match self {
            Arrangement::Stack => "flex flex-col gap-8 mt-12 w-full".to_string(),
            Arrangement::Grid { cols } => format!("grid {} gap-8 mt-12 w-full", cols),
            Arrangement::Flex => "flex flex-wrap justify-center gap-8 mt-12 w-full".to_string(),
        }
    }
}

/// Section chrome: colors, background, spacing and content placement
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub background_color: String,
    pub text_color: String,
    pub padding: String,
    pub background_image: Option<String>,
    pub overlay_color: String,
    pub overlay_opacity: Opacity,
    pub align: Align,
    pub width: WidthMode,
    pub class: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            background_color: "bg-white".to_string(),
            text_color: "text-gray-900".to_string(),
            padding: "py-12 px-4 sm:px-6 lg:px-8".to_string(),
            background_image: None,
            overlay_color: "bg-black".to_string(),
            overlay_opacity: Opacity::default(),
            align: Align::default(),
            width: WidthMode::default(),
            class: String::new(),
        }
    }
}

/// An element of the section that takes part in the staggered reveal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTarget {
    Title,
    Subtitle,
    Paragraph(usize),
    Buttons,
}

/// Entrance transitions of the revealed elements, in document order
#[derive(Clone, Debug, PartialEq)]
pub struct RevealPlan(Vec<(RevealTarget, Transition)>);

impl RevealPlan {
    pub fn iter(&self) -> impl Iterator<Item = &(RevealTarget, Transition)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Transition of `target`, or a static one if it is not part of the plan
    pub fn transition(&self, target: RevealTarget) -> Transition {
        self.0
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, transition)| *transition)
            .unwrap_or_else(Transition::none)
    }
}

/// Full description of one content block
#[derive(Clone, Debug, Default)]
pub struct SectionConfig {
    pub id: Option<String>,
    pub layout: Layout,
    /// Entrance of the whole section
    pub entrance: Transition,
    pub title: Option<TextBlock>,
    pub subtitle: Option<TextBlock>,
    pub paragraphs: Vec<TextBlock>,
    pub buttons: Vec<ButtonSpec>,
    pub cards: Vec<CardSpec>,
    pub images: Vec<ImageSpec>,
    pub lists: Vec<ListBlock>,
    pub icons: Vec<IconRow>,
    pub arrangement: Arrangement,
}

impl SectionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.layout.align = align;
        self
    }

    pub fn width(mut self, width: WidthMode) -> Self {
        self.layout.width = width;
        self
    }

    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.layout.background_color = color.into();
        self
    }

    pub fn background_image(mut self, src: impl Into<String>) -> Self {
        self.layout.background_image = Some(src.into());
        self
    }

    pub fn overlay(mut self, color: impl Into<String>, opacity: Opacity) -> Self {
        self.layout.overlay_color = color.into();
        self.layout.overlay_opacity = opacity;
        self
    }

    pub fn padding(mut self, padding: impl Into<String>) -> Self {
        self.layout.padding = padding.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.layout.class = class.into();
        self
    }

    pub fn entrance(mut self, transition: Transition) -> Self {
        self.entrance = transition;
        self
    }

    pub fn title(mut self, title: TextBlock) -> Self {
        self.title = Some(title);
        self
    }

    pub fn subtitle(mut self, subtitle: TextBlock) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn paragraph(mut self, paragraph: TextBlock) -> Self {
        self.paragraphs.push(paragraph);
        self
    }

    pub fn button(mut self, button: ButtonSpec) -> Self {
        self.buttons.push(button);
        self
    }

    pub fn card(mut self, card: CardSpec) -> Self {
        self.cards.push(card);
        self
    }

    pub fn image(mut self, image: ImageSpec) -> Self {
        self.images.push(image);
        self
    }

    pub fn list(mut self, list: ListBlock) -> Self {
        self.lists.push(list);
        self
    }

    pub fn icon_row(mut self, row: IconRow) -> Self {
        self.icons.push(row);
        self
    }

    pub fn arrangement(mut self, arrangement: Arrangement) -> Self {
        self.arrangement = arrangement;
        self
    }

    /// Classes of the outer `<section>`
    pub fn section_classes(&self) -> String {
        let layout = &self.layout;
        let mut classes = format!("relative {}", layout.padding);
        if !layout.class.is_empty() {
            classes.push(' ');
            classes.push_str(&layout.class);
        }
        classes.push(' ');
        classes.push_str(&layout.text_color);
        classes.push_str(" overflow-hidden");
        classes
    }

    /// Classes of the width-constrained container
    pub fn container_classes(&self) -> String {
        format!("relative z-10 {}", self.layout.width.classes())
    }

    /// Classes of the aligned content column
    pub fn column_classes(&self) -> String {
        format!("flex flex-col {}", self.layout.align.classes())
    }

    pub fn button_group_classes(&self) -> &'static str {
        if self.buttons.len() > 1 {
            "flex space-x-4 mt-8"
        } else {
            "flex mt-8"
        }
    }

    /// Whether the background layer (image, wash and overlay) is rendered
    pub fn has_background(&self) -> bool {
        self.layout.background_image.is_some()
    }

    /// Classes of the background layer.
    ///
    /// The color and the image share one element so the image paints over
    /// the color; only the overlay sits above it.
    pub fn background_classes(&self) -> String {
        format!("absolute inset-0 bg-cover bg-center {}", self.layout.background_color)
    }

    /// Inline style carrying the background image, if any
    pub fn background_style(&self) -> Option<String> {
        self.layout
            .background_image
            .as_ref()
            .map(|src| format!("background-image: url('{}');", src))
    }

    pub fn overlay_classes(&self) -> String {
        format!("absolute inset-0 {}", self.layout.overlay_color)
    }

    pub fn overlay_style(&self) -> String {
        format!("opacity: {};", self.layout.overlay_opacity.css())
    }

    pub fn has_collections(&self) -> bool {
        !(self.cards.is_empty()
            && self.images.is_empty()
            && self.lists.is_empty()
            && self.icons.is_empty())
    }

    /// Staggered entrance of title, subtitle, paragraphs and button group.
    ///
    /// Only present elements take a slot, and each slot starts
    /// [`REVEAL_STEP_MS`] after the previous one.
    pub fn reveal_plan(&self) -> RevealPlan {
        let mut targets = Vec::with_capacity(self.paragraphs.len() + 3);
        if self.title.is_some() {
            targets.push(RevealTarget::Title);
        }
        if self.subtitle.is_some() {
            targets.push(RevealTarget::Subtitle);
        }
        targets.extend((0..self.paragraphs.len()).map(RevealTarget::Paragraph));
        if !self.buttons.is_empty() {
            targets.push(RevealTarget::Buttons);
        }

        let transitions = stagger(
            Transition::fade_slide(),
            REVEAL_FIRST_DELAY_MS,
            REVEAL_STEP_MS,
            targets.len(),
        );
        RevealPlan(targets.into_iter().zip(transitions).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_alignment_classes() {
        assert_eq!(Align::Left.classes(), "text-left items-start");
        assert_eq!(Align::Center.classes(), "text-center items-center");
        assert_eq!(Align::Right.classes(), "text-right items-end");
    }

    #[test]
    fn test_width_classes() {
        assert_eq!(WidthMode::Contained.classes(), "max-w-7xl mx-auto");
        assert_eq!(WidthMode::Full.classes(), "w-full");
    }

    #[test]
    fn test_every_layout_combination_selects_its_pair() {
        for align in Align::ALL {
            for width in WidthMode::ALL {
                let config = SectionConfig::new().align(align).width(width);

                assert_eq!(
                    config.column_classes(),
                    format!("flex flex-col {}", align.classes())
                );
                assert_eq!(
                    config.container_classes(),
                    format!("relative z-10 {}", width.classes())
                );
            }
        }
    }

    #[test]
    fn test_parse_alignment() {
        assert_eq!("left".parse::<Align>(), Ok(Align::Left));
        assert_eq!("center".parse::<Align>(), Ok(Align::Center));
        assert_eq!("right".parse::<Align>(), Ok(Align::Right));
        assert_eq!(
            "justify".parse::<Align>(),
            Err(LayoutParseError::UnknownAlignment("justify".to_string()))
        );
    }

    #[test]
    fn test_parse_width() {
        assert_eq!("contain".parse::<WidthMode>(), Ok(WidthMode::Contained));
        assert_eq!("contained".parse::<WidthMode>(), Ok(WidthMode::Contained));
        assert_eq!("full".parse::<WidthMode>(), Ok(WidthMode::Full));
        assert!(matches!(
            "wide".parse::<WidthMode>(),
            Err(LayoutParseError::UnknownWidth(_))
        ));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for align in Align::ALL {
            assert_eq!(align.to_string().parse::<Align>(), Ok(align));
        }
    }

    #[test]
    fn test_defaults() {
        let config = SectionConfig::new();

        assert_eq!(config.layout.align, Align::Center);
        assert_eq!(config.layout.width, WidthMode::Contained);
        assert_eq!(config.layout.overlay_opacity.value(), 0);
        assert!(!config.has_background());
        assert!(!config.has_collections());
        assert!(config.reveal_plan().is_empty());
        assert_eq!(
            config.section_classes(),
            "relative py-12 px-4 sm:px-6 lg:px-8 text-gray-900 overflow-hidden"
        );
    }

    #[test]
    fn test_opacity_is_clamped() {
        assert_eq!(Opacity::percent(40).value(), 40);
        assert_eq!(Opacity::percent(250).value(), 100);
    }

    #[test]
    fn test_reveal_plan_follows_document_order() {
        let config = SectionConfig::new()
            .title(TextBlock::new("Title"))
            .subtitle(TextBlock::new("Subtitle"))
            .paragraph(TextBlock::new("one"))
            .paragraph(TextBlock::new("two"))
            .paragraph(TextBlock::new("three"))
            .button(ButtonSpec::primary("Go"));

        let plan = config.reveal_plan();
        let targets: Vec<RevealTarget> = plan.iter().map(|(t, _)| *t).collect();

        assert_eq!(
            targets,
            vec![
                RevealTarget::Title,
                RevealTarget::Subtitle,
                RevealTarget::Paragraph(0),
                RevealTarget::Paragraph(1),
                RevealTarget::Paragraph(2),
                RevealTarget::Buttons,
            ]
        );

        let delays: Vec<u32> = plan.iter().map(|(_, t)| t.delay_ms).collect();
        assert!(delays.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(delays[0], REVEAL_FIRST_DELAY_MS);
    }

    #[test]
    fn test_reveal_plan_skips_absent_elements() {
        let config = SectionConfig::new()
            .paragraph(TextBlock::new("only"))
            .button(ButtonSpec::new("a"));

        let plan = config.reveal_plan();

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.transition(RevealTarget::Paragraph(0)).delay_ms, 100);
        assert_eq!(plan.transition(RevealTarget::Buttons).delay_ms, 200);
        assert_eq!(plan.transition(RevealTarget::Title), Transition::none());
    }

    #[test]
    fn test_empty_text_is_not_malformed() {
        let config = SectionConfig::new().title(TextBlock::new(""));

        assert_eq!(config.reveal_plan().len(), 1);
        assert_eq!(config.title.as_ref().map(|t| t.text.as_str()), Some(""));
    }

    #[test]
    fn test_button_variant_classes() {
        assert_eq!(
            ButtonSpec::primary("Go").class_list(),
            "px-8 py-3 text-lg font-medium transition-colors bg-indigo-600 text-white hover:bg-indigo-700"
        );
        assert!(ButtonSpec::secondary("Go").class_list().contains("border-indigo-600"));
        assert_eq!(
            ButtonSpec::new("Go").with_class("my-btn").class_list(),
            "my-btn"
        );
    }

    #[test]
    fn test_button_group_spacing() {
        let one = SectionConfig::new().button(ButtonSpec::new("a"));
        let two = one.clone().button(ButtonSpec::new("b"));

        assert_eq!(one.button_group_classes(), "flex mt-8");
        assert_eq!(two.button_group_classes(), "flex space-x-4 mt-8");
    }

    #[test]
    fn test_button_without_action_is_inert() {
        let button = ButtonSpec::primary("Nothing");
        button.click();
        assert_eq!(button.kind.as_str(), "button");
    }

    #[test]
    fn test_button_action_runs_on_click() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();
        let button = ButtonSpec::primary("Count").on_click(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        button.click();
        button.click();

        assert_eq!(clicks.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_text_block_style_merges_animation() {
        let block = TextBlock::new("Hi").with_style("color: red;");
        let style = block.style_with(&Transition::fade());

        assert!(style.starts_with("animation: bx-fade"));
        assert!(style.ends_with("color: red;"));
        assert_eq!(block.style_with(&Transition::none()), "color: red;");
    }

    #[test]
    fn test_arrangement_classes() {
        let grid = Arrangement::Grid {
            cols: "grid-cols-1 md:grid-cols-3".to_string(),
        };

        assert_eq!(grid.classes(), "grid grid-cols-1 md:grid-cols-3 gap-8 mt-12 w-full");
        assert!(Arrangement::Stack.classes().starts_with("flex flex-col"));
    }

    #[test]
    fn test_image_class_list() {
        let image = ImageSpec::new("/team.png", "Team");
        assert_eq!(image.class_list(), "rounded-2xl shadow-md");
        assert_eq!(image.loading, Loading::Lazy);

        let wide = ImageSpec::new("/team.png", "Team")
            .with_class("rounded-none")
            .full_width()
            .eager();
        assert_eq!(wide.class_list(), "rounded-none w-full");
        assert_eq!(wide.loading.as_str(), "eager");
        assert_eq!(Loading::Lazy.as_str(), "lazy");
    }

    #[test]
    fn test_list_block_styles() {
        let plain = ListBlock::new(["One", "Two"]);
        assert_eq!(plain.style, ListStyle::Plain);
        assert_eq!(plain.items, vec!["One".to_string(), "Two".to_string()]);
        assert_eq!(plain.title, None);

        let checked = ListBlock::new(vec![String::from("Fast")])
            .with_title("Perks")
            .with_icons();
        assert_eq!(checked.style, ListStyle::Icon);
        assert_eq!(checked.title.as_deref(), Some("Perks"));
    }

    #[test]
    fn test_collections_are_detected() {
        assert!(!SectionConfig::new().has_collections());

        let config = SectionConfig::new()
            .card(CardSpec::new().with_title("Plan").with_text("Details"))
            .arrangement(Arrangement::Flex);
        assert!(config.has_collections());
        assert_eq!(config.cards[0].title.as_deref(), Some("Plan"));
        assert!(SectionConfig::new().list(ListBlock::new(["a"])).has_collections());
        assert!(SectionConfig::new().image(ImageSpec::new("/a.png", "a")).has_collections());
        assert!(
            SectionConfig::new()
                .icon_row(IconRow {
                    icons: vec!["bolt"],
                    class: None,
                })
                .has_collections()
        );
    }

    #[test]
    fn test_opacity_css() {
        assert_eq!(Opacity::percent(0).css(), "0");
        assert_eq!(Opacity::percent(35).css(), "0.35");
        assert_eq!(Opacity::percent(250).css(), "1");
    }

    #[test]
    fn test_background_image_sits_with_its_color() {
        let config = SectionConfig::new()
            .background_image("/hero.jpg")
            .overlay("bg-indigo-900", Opacity::percent(40));

        assert!(config.has_background());
        assert_eq!(
            config.background_classes(),
            "absolute inset-0 bg-cover bg-center bg-white"
        );
        assert_eq!(
            config.background_style().as_deref(),
            Some("background-image: url('/hero.jpg');")
        );
        assert_eq!(config.overlay_classes(), "absolute inset-0 bg-indigo-900");
        assert_eq!(config.overlay_style(), "opacity: 0.4;");
        assert_eq!(SectionConfig::new().background_style(), None);
    }
}
