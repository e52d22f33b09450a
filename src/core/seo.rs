//! Structured data (JSON-LD) for the home page

use serde::Serialize;

use super::content::{HOME_DESCRIPTION, LOGO_SRC, PRICING_TIERS, PricingTier, SITE_NAME, SITE_URL};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Organization {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    url: &'static str,
    logo: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Offer {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price_currency: Option<&'static str>,
    url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WebApplication {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    application_category: &'static str,
    operating_system: &'static str,
    description: &'static str,
    url: &'static str,
    publisher: Organization,
    offers: Vec<Offer>,
}

fn absolute(href: &str) -> String {
    if super::links::is_absolute_url(href) {
        href.to_string()
    } else {
        format!("{}{}", SITE_URL, href)
    }
}

fn offer(tier: &PricingTier) -> Offer {
    Offer {
        kind: "Offer",
        name: tier.name,
        price: tier.amount_usd.map(|amount| amount.to_string()),
        price_currency: tier.amount_usd.map(|_| "USD"),
        url: absolute(tier.cta.href),
    }
}

/// JSON-LD document describing the product and its plans
pub fn home_structured_data() -> Result<String, serde_json::Error> {
    let document = WebApplication {
        context: "https://schema.org",
        kind: "WebApplication",
        name: SITE_NAME,
        application_category: "BusinessApplication",
        operating_system: "Web",
        description: HOME_DESCRIPTION,
        url: SITE_URL,
        publisher: Organization {
            kind: "Organization",
            name: SITE_NAME,
            url: SITE_URL,
            logo: absolute(LOGO_SRC),
        },
        offers: PRICING_TIERS.iter().map(offer).collect(),
    };
    serde_json::to_string(&document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_structured_data_lists_every_plan() {
        let json = home_structured_data().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "WebApplication");

        let offers = value["offers"].as_array().unwrap();
        assert_eq!(offers.len(), PRICING_TIERS.len());
        assert_eq!(offers[0]["price"], "29");
        assert_eq!(offers[0]["priceCurrency"], "USD");
    }

    #[test]
    fn test_quoted_plan_has_no_price() {
        let json = home_structured_data().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let enterprise = &value["offers"][2];

        assert_eq!(enterprise["name"], "Enterprise");
        assert!(enterprise.get("price").is_none());
        assert_eq!(enterprise["url"], "https://www.boostlyx.com/enterprise");
    }

    #[test]
    fn test_logo_is_absolute() {
        let json = home_structured_data().unwrap();
        assert!(json.contains("https://www.boostlyx.com/logos/banner-color-purple-white.svg"));
    }
}
