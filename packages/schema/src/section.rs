//! # Page Sections
//!
//! A page is an ordered list of [`PageSection`]s. Each section carries a
//! [`SectionConfig`], a closed tagged union whose arm is picked by the
//! persisted `type` tag.
//!
//! ## Wire format
//!
//! ```json
//! { "id": "s1", "type": "cta_banner", "order": 0, "isVisible": true,
//!   "config": { "headline": "Ready?", "ctaText": "Get Your Quote" } }
//! ```
//!
//! A `type` this crate does not know is kept as [`SectionConfig::Unknown`]
//! with its raw payload, so the page round-trips unchanged and the renderer
//! can show a placeholder instead of failing the whole page. A known `type`
//! whose stored config no longer matches its schema is loaded the same way,
//! as [`SectionConfig::Invalid`]; one bad section never fails a page.

use crate::configs::*;
use crate::error::SchemaError;
use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Closed set of section kinds the page builder knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Hero,
    TrustIndicators,
    LoanProducts,
    Testimonials,
    Faq,
    FeatureHighlights,
    CtaBanner,
    LeadForm,
    RecentlyFunded,
    StateMap,
    CustomContent,
    StatsBar,
}

impl SectionType {
    pub const ALL: [SectionType; 12] = [
        SectionType::Hero,
        SectionType::TrustIndicators,
        SectionType::LoanProducts,
        SectionType::Testimonials,
        SectionType::Faq,
        SectionType::FeatureHighlights,
        SectionType::CtaBanner,
        SectionType::LeadForm,
        SectionType::RecentlyFunded,
        SectionType::StateMap,
        SectionType::CustomContent,
        SectionType::StatsBar,
    ];

    /// Persisted tag
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Hero => "hero",
            SectionType::TrustIndicators => "trust_indicators",
            SectionType::LoanProducts => "loan_products",
            SectionType::Testimonials => "testimonials",
            SectionType::Faq => "faq",
            SectionType::FeatureHighlights => "feature_highlights",
            SectionType::CtaBanner => "cta_banner",
            SectionType::LeadForm => "lead_form",
            SectionType::RecentlyFunded => "recently_funded",
            SectionType::StateMap => "state_map",
            SectionType::CustomContent => "custom_content",
            SectionType::StatsBar => "stats_bar",
        }
    }

    /// Short label used by the section library
    pub fn label(&self) -> &'static str {
        match self {
            SectionType::Hero => "Hero",
            SectionType::TrustIndicators => "Trust",
            SectionType::LoanProducts => "Products",
            SectionType::Testimonials => "Testimonials",
            SectionType::Faq => "FAQ",
            SectionType::FeatureHighlights => "Features",
            SectionType::CtaBanner => "CTA",
            SectionType::LeadForm => "Lead Form",
            SectionType::RecentlyFunded => "Funded",
            SectionType::StateMap => "Map",
            SectionType::CustomContent => "Content",
            SectionType::StatsBar => "Stats",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownSectionType(s.to_string()))
    }
}

/// Type-specific payload of a section
#[derive(Debug, Clone, PartialEq)]
pub enum SectionConfig {
    Hero(HeroConfig),
    TrustIndicators(TrustIndicatorsConfig),
    LoanProducts(LoanProductsConfig),
    Testimonials(TestimonialsConfig),
    Faq(FaqConfig),
    FeatureHighlights(FeatureHighlightsConfig),
    CtaBanner(CtaBannerConfig),
    LeadForm(LeadFormConfig),
    RecentlyFunded(RecentlyFundedConfig),
    StateMap(StateMapConfig),
    CustomContent(CustomContentConfig),
    StatsBar(StatsBarConfig),
    /// A `type` tag this build does not recognize, payload kept verbatim
    Unknown { type_name: String, raw: Value },
    /// A known `type` whose stored payload does not decode, kept verbatim
    Invalid {
        section_type: SectionType,
        raw: Value,
        error: String,
    },
}

impl SectionConfig {
    /// Empty config a freshly added section of `section_type` starts with
    pub fn default_for(section_type: SectionType) -> Self {
        match section_type {
            SectionType::Hero => SectionConfig::Hero(HeroConfig::default()),
            SectionType::TrustIndicators => {
                SectionConfig::TrustIndicators(TrustIndicatorsConfig::default())
            }
            SectionType::LoanProducts => SectionConfig::LoanProducts(LoanProductsConfig::default()),
            SectionType::Testimonials => SectionConfig::Testimonials(TestimonialsConfig::default()),
            SectionType::Faq => SectionConfig::Faq(FaqConfig::default()),
            SectionType::FeatureHighlights => {
                SectionConfig::FeatureHighlights(FeatureHighlightsConfig::default())
            }
            SectionType::CtaBanner => SectionConfig::CtaBanner(CtaBannerConfig::default()),
            SectionType::LeadForm => SectionConfig::LeadForm(LeadFormConfig::default()),
            SectionType::RecentlyFunded => {
                SectionConfig::RecentlyFunded(RecentlyFundedConfig::default())
            }
            SectionType::StateMap => SectionConfig::StateMap(StateMapConfig::default()),
            SectionType::CustomContent => {
                SectionConfig::CustomContent(CustomContentConfig::default())
            }
            SectionType::StatsBar => SectionConfig::StatsBar(StatsBarConfig::default()),
        }
    }

    /// Decode a raw `config` payload according to its `type` tag.
    ///
    /// `section_id` is only used to make errors point at the offending section.
    pub fn from_parts(section_id: &str, type_name: &str, raw: Value) -> Result<Self, SchemaError> {
        let section_type = match SectionType::from_str(type_name) {
            Ok(section_type) => section_type,
            Err(_) => {
                return Ok(SectionConfig::Unknown {
                    type_name: type_name.to_string(),
                    raw,
                })
            }
        };

        let raw = match raw {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };

        let config = match section_type {
            SectionType::Hero => SectionConfig::Hero(decode(section_id, type_name, raw)?),
            SectionType::TrustIndicators => {
                SectionConfig::TrustIndicators(decode(section_id, type_name, raw)?)
            }
            SectionType::LoanProducts => {
                SectionConfig::LoanProducts(decode(section_id, type_name, raw)?)
            }
            SectionType::Testimonials => {
                SectionConfig::Testimonials(decode(section_id, type_name, raw)?)
            }
            SectionType::Faq => SectionConfig::Faq(decode(section_id, type_name, raw)?),
            SectionType::FeatureHighlights => {
                SectionConfig::FeatureHighlights(decode(section_id, type_name, raw)?)
            }
            SectionType::CtaBanner => SectionConfig::CtaBanner(decode(section_id, type_name, raw)?),
            SectionType::LeadForm => SectionConfig::LeadForm(decode(section_id, type_name, raw)?),
            SectionType::RecentlyFunded => {
                SectionConfig::RecentlyFunded(decode(section_id, type_name, raw)?)
            }
            SectionType::StateMap => SectionConfig::StateMap(decode(section_id, type_name, raw)?),
            SectionType::CustomContent => {
                SectionConfig::CustomContent(decode(section_id, type_name, raw)?)
            }
            SectionType::StatsBar => SectionConfig::StatsBar(decode(section_id, type_name, raw)?),
        };

        Ok(config)
    }

    /// Like [`SectionConfig::from_parts`], but a payload that does not
    /// decode becomes [`SectionConfig::Invalid`] instead of an error.
    ///
    /// Used when loading stored pages.
    pub fn from_stored(section_id: &str, type_name: &str, raw: Value) -> Self {
        match SectionConfig::from_parts(section_id, type_name, raw.clone()) {
            Ok(config) => config,
            Err(err) => {
                warn!(section_id, section_type = type_name, error = %err, "Keeping undecodable section config");
                match SectionType::from_str(type_name) {
                    Ok(section_type) => SectionConfig::Invalid {
                        section_type,
                        raw,
                        error: err.to_string(),
                    },
                    Err(_) => SectionConfig::Unknown {
                        type_name: type_name.to_string(),
                        raw,
                    },
                }
            }
        }
    }

    /// `None` for [`SectionConfig::Unknown`]
    pub fn section_type(&self) -> Option<SectionType> {
        Some(match self {
            SectionConfig::Hero(_) => SectionType::Hero,
            SectionConfig::TrustIndicators(_) => SectionType::TrustIndicators,
            SectionConfig::LoanProducts(_) => SectionType::LoanProducts,
            SectionConfig::Testimonials(_) => SectionType::Testimonials,
            SectionConfig::Faq(_) => SectionType::Faq,
            SectionConfig::FeatureHighlights(_) => SectionType::FeatureHighlights,
            SectionConfig::CtaBanner(_) => SectionType::CtaBanner,
            SectionConfig::LeadForm(_) => SectionType::LeadForm,
            SectionConfig::RecentlyFunded(_) => SectionType::RecentlyFunded,
            SectionConfig::StateMap(_) => SectionType::StateMap,
            SectionConfig::CustomContent(_) => SectionType::CustomContent,
            SectionConfig::StatsBar(_) => SectionType::StatsBar,
            SectionConfig::Invalid { section_type, .. } => *section_type,
            SectionConfig::Unknown { .. } => return None,
        })
    }

    /// Persisted `type` tag, including unrecognized ones
    pub fn type_name(&self) -> &str {
        match self {
            SectionConfig::Unknown { type_name, .. } => type_name,
            known => known.section_type().map(|t| t.as_str()).unwrap_or_default(),
        }
    }
}

fn decode<T: DeserializeOwned>(section_id: &str, type_name: &str, raw: Value) -> Result<T, SchemaError> {
    serde_json::from_value(raw)
        .map_err(|e| SchemaError::invalid_config(section_id, type_name, e.to_string()))
}

impl Serialize for SectionConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SectionConfig::Hero(c) => c.serialize(serializer),
            SectionConfig::TrustIndicators(c) => c.serialize(serializer),
            SectionConfig::LoanProducts(c) => c.serialize(serializer),
            SectionConfig::Testimonials(c) => c.serialize(serializer),
            SectionConfig::Faq(c) => c.serialize(serializer),
            SectionConfig::FeatureHighlights(c) => c.serialize(serializer),
            SectionConfig::CtaBanner(c) => c.serialize(serializer),
            SectionConfig::LeadForm(c) => c.serialize(serializer),
            SectionConfig::RecentlyFunded(c) => c.serialize(serializer),
            SectionConfig::StateMap(c) => c.serialize(serializer),
            SectionConfig::CustomContent(c) => c.serialize(serializer),
            SectionConfig::StatsBar(c) => c.serialize(serializer),
            SectionConfig::Unknown { raw, .. } | SectionConfig::Invalid { raw, .. } => {
                raw.serialize(serializer)
            }
        }
    }
}

/// One visual block of a composed page
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawSection")]
pub struct PageSection {
    /// Stable, assigned at creation, never reused
    pub id: String,
    /// Display position; equals the array index after any editor mutation
    pub order: i32,
    /// Hidden sections stay in the draft but are never rendered
    pub is_visible: bool,
    pub config: SectionConfig,
}

impl PageSection {
    /// Visible section at order 0
    pub fn new(id: impl Into<String>, config: SectionConfig) -> Self {
        Self {
            id: id.into(),
            order: 0,
            is_visible: true,
            config,
        }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.is_visible = false;
        self
    }

    pub fn section_type(&self) -> Option<SectionType> {
        self.config.section_type()
    }

    pub fn type_name(&self) -> &str {
        self.config.type_name()
    }
}

impl Serialize for PageSection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PageSection", 5)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("type", self.type_name())?;
        state.serialize_field("order", &self.order)?;
        state.serialize_field("isVisible", &self.is_visible)?;
        state.serialize_field("config", &self.config)?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSection {
    id: String,
    #[serde(rename = "type")]
    section_type: String,
    #[serde(default)]
    order: i32,
    #[serde(default = "default_visible")]
    is_visible: bool,
    #[serde(default)]
    config: Value,
}

fn default_visible() -> bool {
    true
}

impl From<RawSection> for PageSection {
    fn from(raw: RawSection) -> Self {
        let config = SectionConfig::from_stored(&raw.id, &raw.section_type, raw.config);
        Self {
            id: raw.id,
            order: raw.order,
            is_visible: raw.is_visible,
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_section_type_tags() {
        for section_type in SectionType::ALL {
            let parsed: SectionType = section_type.as_str().parse().unwrap();
            assert_eq!(parsed, section_type);

            let json = serde_json::to_value(section_type).unwrap();
            assert_eq!(json, json!(section_type.as_str()));
        }

        assert!("carousel".parse::<SectionType>().is_err());
    }

    #[test]
    fn test_deserialize_known_section() {
        let section: PageSection = serde_json::from_value(json!({
            "id": "s1",
            "type": "cta_banner",
            "order": 3,
            "isVisible": false,
            "config": { "headline": "Ready?", "ctaLink": "/apply" }
        }))
        .unwrap();

        assert_eq!(section.id, "s1");
        assert_eq!(section.order, 3);
        assert!(!section.is_visible);
        assert_eq!(section.section_type(), Some(SectionType::CtaBanner));

        match &section.config {
            SectionConfig::CtaBanner(c) => {
                assert_eq!(c.headline.as_deref(), Some("Ready?"));
                assert_eq!(c.cta_link.as_deref(), Some("/apply"));
            }
            other => panic!("Expected cta banner config, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_is_preserved() {
        let input = json!({
            "id": "x",
            "type": "unknown_type_xyz",
            "order": 0,
            "isVisible": true,
            "config": { "anything": [1, 2, 3] }
        });

        let section: PageSection = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(section.section_type(), None);
        assert_eq!(section.type_name(), "unknown_type_xyz");

        let out = serde_json::to_value(&section).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn test_unknown_type_keeps_null_config() {
        let input = json!({
            "id": "legacy",
            "type": "legacy_widget",
            "order": 2,
            "isVisible": true,
            "config": null
        });

        let section: PageSection = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(
            section.config,
            SectionConfig::Unknown {
                type_name: "legacy_widget".to_string(),
                raw: Value::Null,
            }
        );
        assert_eq!(serde_json::to_value(&section).unwrap(), input);
    }

    #[test]
    fn test_null_config_on_known_type_is_empty() {
        let section: PageSection =
            serde_json::from_value(json!({ "id": "f", "type": "faq", "config": null })).unwrap();
        assert_eq!(section.config, SectionConfig::Faq(FaqConfig::default()));
    }

    #[test]
    fn test_from_parts_rejects_mismatched_config() {
        let err = SectionConfig::from_parts("s9", "faq", json!({ "items": "not a list" }))
            .unwrap_err()
            .to_string();

        assert!(err.contains("s9"), "{}", err);
        assert!(err.contains("faq"), "{}", err);
    }

    #[test]
    fn test_stored_mismatched_config_is_kept_as_invalid() {
        let input = json!({
            "id": "s9",
            "type": "faq",
            "order": 1,
            "isVisible": false,
            "config": { "items": "not a list", "layout": "carousel" }
        });

        let section: PageSection = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(section.section_type(), Some(SectionType::Faq));
        assert_eq!(section.type_name(), "faq");

        match &section.config {
            SectionConfig::Invalid { section_type, error, .. } => {
                assert_eq!(*section_type, SectionType::Faq);
                assert!(error.contains("s9"), "{}", error);
            }
            other => panic!("Expected invalid config, got {:?}", other),
        }

        assert_eq!(serde_json::to_value(&section).unwrap(), input);
    }

    #[test]
    fn test_missing_fields_default() {
        let section: PageSection =
            serde_json::from_value(json!({ "id": "h", "type": "hero" })).unwrap();
        assert_eq!(section.order, 0);
        assert!(section.is_visible);
        assert_eq!(section.config, SectionConfig::Hero(HeroConfig::default()));
    }

    #[test]
    fn test_default_config_matches_type() {
        for section_type in SectionType::ALL {
            let config = SectionConfig::default_for(section_type);
            assert_eq!(config.section_type(), Some(section_type));
            assert_eq!(config.type_name(), section_type.as_str());
        }
    }
}
