//! Static copy, links and plans shown on the site
//!
//! Icon fields hold names understood by `ui::icon::Icon`.

use super::links::Link;

pub const SITE_NAME: &str = "BoostLyx";
pub const SITE_URL: &str = "https://www.boostlyx.com";
pub const LOGO_SRC: &str = "/logos/banner-color-purple-white.svg";
pub const LOGO_ALT: &str = "BoostLyx Logo";
pub const HOME_TITLE: &str = "BoostLyx - Home";
pub const HOME_DESCRIPTION: &str =
    "Premium growth services for businesses and influencers. Plan, publish and analyse your social presence with BoostLyx.";

pub const SIGN_IN: Link = Link::new("Sign In", "https://www.dash.boostlyx.com/accounts/sign-in");

/// Header navigation, in display order
pub const NAV_ITEMS: [Link; 5] = [
    Link::new("Services", "/services"),
    Link::new("Pricing", "/pricing"),
    Link::new("About", "/about"),
    Link::new("Contact", "/contact"),
    Link::new("Blog", "https://blog.boostlyx.com"),
];

/// One titled column of footer links
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkColumn {
    pub heading: &'static str,
    pub links: &'static [Link],
}

pub const FOOTER_COLUMNS: [LinkColumn; 3] = [
    LinkColumn {
        heading: "PRODUCT",
        links: &[
            Link::new("Services", "/services"),
            Link::new("Pricing", "/pricing"),
            Link::new("Integrations", "/integrations"),
        ],
    },
    LinkColumn {
        heading: "RESOURCES",
        links: &[
            Link::new("Blog", "/blog"),
            Link::new("Guides", "/docs/guides"),
            Link::new("Help Center", "/help-center"),
        ],
    },
    LinkColumn {
        heading: "COMPANY",
        links: &[
            Link::new("About", "/about"),
            Link::new("Contact", "/contact"),
            Link::new("Legal", "/legal"),
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialPlatform {
    X,
    Instagram,
    LinkedIn,
}

impl SocialPlatform {
    pub fn label(self) -> &'static str {
        match self {
            SocialPlatform::X => "X",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::LinkedIn => "LinkedIn",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        platform: SocialPlatform::X,
        href: "https://x.com/BoostLyx",
        icon: "x-twitter",
    },
    SocialLink {
        platform: SocialPlatform::Instagram,
        href: "https://instagram.com/boostlyx",
        icon: "instagram",
    },
    SocialLink {
        platform: SocialPlatform::LinkedIn,
        href: "https://linkedin.com/boostlyx",
        icon: "linkedin",
    },
];

/// Hero copy
pub const HERO_HEADLINE: &str = "Elevate Your Digital";
pub const HERO_ACCENT: &str = "Growth Potential";
pub const HERO_TAGLINE: &str = "Premium growth services for businesses and influencers.";
pub const HERO_PRIMARY: Link = Link::new("Get Started", "/start");
pub const HERO_SECONDARY: Link = Link::new("Learn More", "/services");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        title: "Content Planner",
        description: "Plan, schedule, and automatically publish posts with ease.",
        href: "/services/content-planner",
        icon: "light-bulb",
    },
    Service {
        title: "Smart Analytics",
        description: "Track growth, engagement, and audience insights.",
        href: "/services/smart-analytics",
        icon: "arrow-trending-up",
    },
    Service {
        title: "Link-in-Bio",
        description: "Create a custom, branded page with all your links in minutes.",
        href: "/services/link-in-bio",
        icon: "paper-airplane",
    },
    Service {
        title: "Team Access",
        description: "Add team members with different roles and limits.",
        href: "/services/team-access",
        icon: "user-group",
    },
    Service {
        title: "Bookings & Invoices",
        description: "Accept payments and manage client calls and emails.",
        href: "/services/bookings-and-invoices",
        icon: "building-office",
    },
    Service {
        title: "Brand Kit",
        description: "Store logos, colors, and use ready-to-go templates.",
        href: "/services/brand-kit",
        icon: "paint-brush",
    },
];

pub const EXPLORE_SERVICES: Link = Link::new("Explore All Services", "/services");

/// Delay between two service cards
pub const SERVICE_STAGGER_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub title: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const WHY_US_LINK: &str = "/about#why-boostlyx";

pub const STATS: [Stat; 4] = [
    Stat {
        title: "Easy To Use",
        value: "95%*",
        caption: "User Satisfaction",
        icon: "bolt",
        color: "bg-indigo-600",
    },
    Stat {
        title: "Faster Growth",
        value: "2x*",
        caption: "Average Results",
        icon: "arrow-trending-up",
        color: "bg-emerald-500",
    },
    Stat {
        title: "Time Saved",
        value: "10+*",
        caption: "Hours Weekly",
        icon: "sparkles",
        color: "bg-amber-500",
    },
    Stat {
        title: "Reliable",
        value: "99%*",
        caption: "Uptime",
        icon: "chart-bar",
        color: "bg-purple-600",
    },
];

/// Delay between two stats
pub const STAT_STAGGER_MS: u32 = 150;

pub const STATS_DISCLAIMER: &str =
    "*Results may vary based on individual usage and subscription plan";

pub const PRICING_TITLE: &str = "Pick Your";
pub const PRICING_ACCENT: &str = "Power-Up";
pub const PRICING_SUBTITLE: &str = "Choose the perfect boost for your growth journey";
pub const CUSTOM_PLAN_PROMPT: &str = "Need custom solutions?";
pub const CUSTOM_PLAN: Link = Link::new("Let's build it", "/pricing/custom");

/// Vertical float loop of a pricing card
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Float {
    pub lift_px: u32,
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    /// Numeric price in USD for structured data, `None` for quoted plans
    pub amount_usd: Option<u32>,
    pub features: &'static [&'static str],
    pub cta: Link,
    pub popular: bool,
    pub color: &'static str,
    pub icon: &'static str,
    pub float: Float,
}

pub const PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Starter Pack",
        price: "$29",
        amount_usd: Some(29),
        features: &[
            "3 social accounts",
            "500 scheduled posts",
            "Basic analytics",
            "Email support",
        ],
        cta: Link::new(
            "Start Flying",
            "https://www.dash.boostlyx.com/accounts/start?plan=starter&ref=home",
        ),
        popular: false,
        color: "bg-indigo-100",
        icon: "sparkles",
        float: Float {
            lift_px: 15,
            scale: 1.0,
        },
    },
    PricingTier {
        name: "Pro Boost",
        price: "$99",
        amount_usd: Some(99),
        features: &[
            "10 social accounts",
            "Unlimited posts",
            "Advanced analytics",
            "Priority support",
            "Team access",
        ],
        cta: Link::new(
            "Go Turbo",
            "https://www.dash.boostlyx.com/accounts/start?plan=pro&ref=home",
        ),
        popular: true,
        color: "bg-[#ffebc2]",
        icon: "bolt",
        float: Float {
            lift_px: 20,
            scale: 1.05,
        },
    },
    PricingTier {
        name: "Enterprise",
        price: "Custom",
        amount_usd: None,
        features: &[
            "Unlimited accounts",
            "Dedicated manager",
            "Custom solutions",
            "API access",
            "White-label options",
        ],
        cta: Link::new("Build Yours", "/enterprise"),
        popular: false,
        color: "bg-purple-100",
        icon: "user-group",
        float: Float {
            lift_px: 10,
            scale: 1.0,
        },
    },
];

/// Delay between two pricing cards
pub const TIER_STAGGER_MS: u32 = 150;

/// Index of the tier that carries the popular badge: the first one flagged
pub fn badge_holder(tiers: &[PricingTier]) -> Option<usize> {
    tiers.iter().position(|tier| tier.popular)
}

/// Per-tier featured flag, true for at most one tier
pub fn featured_flags(tiers: &[PricingTier]) -> Vec<bool> {
    let holder = badge_holder(tiers);
    (0..tiers.len()).map(|i| Some(i) == holder).collect()
}

pub const FORUM_NAME: &str = "BoostLyx Community";
pub const FORUM_BLURB: &str = "Connect with fellow growth enthusiasts, share strategies, and get expert advice in our buzzing community.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Perk {
    pub text: &'static str,
    pub icon: &'static str,
}

pub const FORUM_PERKS: [Perk; 4] = [
    Perk {
        text: "10,000+ members",
        icon: "user-group",
    },
    Perk {
        text: "Daily discussions",
        icon: "bolt",
    },
    Perk {
        text: "Exclusive content",
        icon: "sparkles",
    },
    Perk {
        text: "Growth challenges",
        icon: "arrow-trending-up",
    },
];

pub const FORUM_JOIN: Link = Link::new("Join Now - It's Free!", "https://www.forum.boostlyx.com");
pub const FORUM_TOUR: Link = Link::new("Take a Tour", "https://www.forum.boostlyx.com/preview");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_popular_tier_on_home() {
        assert_eq!(badge_holder(&PRICING_TIERS), Some(1));
        assert_eq!(featured_flags(&PRICING_TIERS), vec![false, true, false]);
    }

    #[test]
    fn test_first_popular_tier_wins() {
        let mut tiers = PRICING_TIERS;
        tiers[2].popular = true;

        assert_eq!(featured_flags(&tiers), vec![false, true, false]);
    }

    #[test]
    fn test_no_popular_tier() {
        let mut tiers = PRICING_TIERS;
        tiers[1].popular = false;

        assert_eq!(badge_holder(&tiers), None);
        assert!(featured_flags(&tiers).iter().all(|f| !f));
    }

    #[test]
    fn test_external_destinations() {
        assert!(SIGN_IN.is_external());
        assert!(FORUM_JOIN.is_external());
        assert!(FORUM_TOUR.is_external());
        assert!(SOCIAL_LINKS.iter().all(|s| s.href.starts_with("https://")));

        let external: Vec<&str> = NAV_ITEMS
            .iter()
            .filter(|l| l.is_external())
            .map(|l| l.label)
            .collect();
        assert_eq!(external, vec!["Blog"]);
    }

    #[test]
    fn test_services_have_unique_routes() {
        let mut hrefs: Vec<&str> = SERVICES.iter().map(|s| s.href).collect();
        hrefs.sort_unstable();
        hrefs.dedup();

        assert_eq!(hrefs.len(), SERVICES.len());
        assert!(SERVICES.iter().all(|s| s.href.starts_with("/services/")));
    }

    #[test]
    fn test_footer_columns() {
        let headings: Vec<&str> = FOOTER_COLUMNS.iter().map(|c| c.heading).collect();
        assert_eq!(headings, vec!["PRODUCT", "RESOURCES", "COMPANY"]);
        assert!(FOOTER_COLUMNS.iter().all(|c| c.links.len() == 3));
    }
}
