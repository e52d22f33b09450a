use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name, without the .svg extension
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable="false"
        />
    }
}

/// Names of the bundled icons
#[allow(dead_code)]
pub mod icons {
    pub const ARROW_TRENDING_UP: &str = "arrow-trending-up";
    pub const BARS_3: &str = "bars-3";
    pub const BOLT: &str = "bolt";
    pub const BUILDING_OFFICE: &str = "building-office";
    pub const CHART_BAR: &str = "chart-bar";
    pub const CHAT_BUBBLES: &str = "chat-bubbles";
    pub const CHECK: &str = "check";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const LIGHT_BULB: &str = "light-bulb";
    pub const PAINT_BRUSH: &str = "paint-brush";
    pub const PAPER_AIRPLANE: &str = "paper-airplane";
    pub const SPARKLES: &str = "sparkles";
    pub const USER_GROUP: &str = "user-group";
    pub const X_MARK: &str = "x-mark";

    pub const INSTAGRAM: &str = "instagram";
    pub const LINKEDIN: &str = "linkedin";
    pub const X_TWITTER: &str = "x-twitter";

    pub const ALL: &[&str] = &[
        ARROW_TRENDING_UP,
        BARS_3,
        BOLT,
        BUILDING_OFFICE,
        CHART_BAR,
        CHAT_BUBBLES,
        CHECK,
        CHEVRON_DOWN,
        LIGHT_BULB,
        PAINT_BRUSH,
        PAPER_AIRPLANE,
        SPARKLES,
        USER_GROUP,
        X_MARK,
        INSTAGRAM,
        LINKEDIN,
        X_TWITTER,
    ];
}

#[cfg(test)]
mod tests {
    use super::icons;
    use crate::core::content::{FORUM_PERKS, PRICING_TIERS, SERVICES, SOCIAL_LINKS, STATS};

    #[test]
    fn test_content_icons_exist() {
        let used = SERVICES
            .iter()
            .map(|s| s.icon)
            .chain(STATS.iter().map(|s| s.icon))
            .chain(PRICING_TIERS.iter().map(|t| t.icon))
            .chain(FORUM_PERKS.iter().map(|p| p.icon))
            .chain(SOCIAL_LINKS.iter().map(|s| s.icon));

        for name in used {
            assert!(icons::ALL.contains(&name), "missing icon {}", name);
        }
    }
}
