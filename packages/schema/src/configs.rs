//! # Section Config Payloads
//!
//! One struct per section kind. Every field is optional: the admin
//! inspector writes only what the author touched, and the public renderer
//! supplies default copy for the rest.
//!
//! Field names serialize as camelCase, which is the wire contract shared
//! with the page-builder UI.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroVariant {
    Carousel,
    Static,
    Video,
    Split,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<HeroVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_funded_deals: Option<bool>,
}

/// A single value/label pair shown in the trust strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustStat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustIndicatorsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_years_in_business: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_total_funded: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_states_served: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_active_loans: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_stats: Vec<TrustStat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStyle {
    Default,
    Compact,
    Detailed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanProductsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_style: Option<CardStyle>,
    #[serde(
        rename = "showDSCR",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub show_dscr: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_fix_flip: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_construction: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub quote: String,
    /// Out of 5; fractional ratings fill the whole stars only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestimonialsLayout {
    Carousel,
    Grid,
    List,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub testimonials: Vec<Testimonial>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<TestimonialsLayout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_ratings: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FaqLayout {
    Accordion,
    TwoColumn,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<FaqItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<FaqLayout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureLayout {
    Grid,
    List,
    Cards,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureHighlightsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,
    /// 2, 3 or 4; anything else renders as 3
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<FeatureLayout>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaBannerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadFormConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_phone: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_loan_amount: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_property_type: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentlyFundedConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_rate: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_close_time: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scroll: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateMapConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_loan_volume: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomContentConfig {
    /// Emitted verbatim by the renderer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsBarConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stats: Vec<Stat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cta_banner_camel_case_fields() {
        let json = r##"{
            "headline": "Ready?",
            "ctaText": "Go",
            "ctaLink": "/get-quote",
            "backgroundColor": "#112233"
        }"##;

        let config: CtaBannerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.headline.as_deref(), Some("Ready?"));
        assert_eq!(config.cta_text.as_deref(), Some("Go"));
        assert_eq!(config.background_color.as_deref(), Some("#112233"));
        assert_eq!(config.text_color, None);
    }

    #[test]
    fn test_loan_products_dscr_flag_name() {
        let config: LoanProductsConfig =
            serde_json::from_str(r#"{ "showDSCR": false, "cardStyle": "compact" }"#).unwrap();
        assert_eq!(config.show_dscr, Some(false));
        assert_eq!(config.card_style, Some(CardStyle::Compact));

        let out = serde_json::to_value(&config).unwrap();
        assert_eq!(out["showDSCR"], false);
    }

    #[test]
    fn test_faq_two_column_layout() {
        let config: FaqConfig = serde_json::from_str(r#"{ "layout": "two-column" }"#).unwrap();
        assert_eq!(config.layout, Some(FaqLayout::TwoColumn));
        assert!(config.items.is_empty());
    }

    #[test]
    fn test_empty_config_serializes_to_empty_object() {
        let out = serde_json::to_string(&HeroConfig::default()).unwrap();
        assert_eq!(out, "{}");
    }
}
