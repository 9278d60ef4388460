//! # Section Style Variants
//!
//! A variant is a named bundle of presentational tokens (spacing,
//! typography, background, ...) selectable per section type.
//!
//! ## Resolution order
//!
//! ```text
//! explicit override → page variants config → built-in default → variantA → fallback bundle
//! ```
//!
//! Resolution is pure and total: an unknown variant name or a section type
//! with no registry entry degrades to the next step, never to an error.

use crate::error::SchemaError;
use crate::section::SectionType;
use crate::variant_registry;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Section types that have a style variant registry.
///
/// This overlaps with [`SectionType`] but is not the same set: process
/// steps and product comparison blocks are styled through the registry
/// even though the page builder composes them elsewhere, while lead forms,
/// funded carousels, maps and custom content have no variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantSectionType {
    Hero,
    FeatureHighlights,
    Testimonials,
    CtaBanner,
    StatsBar,
    TrustIndicators,
    ProcessSteps,
    Faq,
    LoanProducts,
    ProductComparison,
}

impl VariantSectionType {
    pub const ALL: [VariantSectionType; 10] = [
        VariantSectionType::Hero,
        VariantSectionType::FeatureHighlights,
        VariantSectionType::Testimonials,
        VariantSectionType::CtaBanner,
        VariantSectionType::StatsBar,
        VariantSectionType::TrustIndicators,
        VariantSectionType::ProcessSteps,
        VariantSectionType::Faq,
        VariantSectionType::LoanProducts,
        VariantSectionType::ProductComparison,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VariantSectionType::Hero => "hero",
            VariantSectionType::FeatureHighlights => "feature_highlights",
            VariantSectionType::Testimonials => "testimonials",
            VariantSectionType::CtaBanner => "cta_banner",
            VariantSectionType::StatsBar => "stats_bar",
            VariantSectionType::TrustIndicators => "trust_indicators",
            VariantSectionType::ProcessSteps => "process_steps",
            VariantSectionType::Faq => "faq",
            VariantSectionType::LoanProducts => "loan_products",
            VariantSectionType::ProductComparison => "product_comparison",
        }
    }

    /// Variant registry for a page section type, if it has one
    pub fn from_section_type(section_type: SectionType) -> Option<Self> {
        match section_type {
            SectionType::Hero => Some(VariantSectionType::Hero),
            SectionType::TrustIndicators => Some(VariantSectionType::TrustIndicators),
            SectionType::LoanProducts => Some(VariantSectionType::LoanProducts),
            SectionType::Testimonials => Some(VariantSectionType::Testimonials),
            SectionType::Faq => Some(VariantSectionType::Faq),
            SectionType::FeatureHighlights => Some(VariantSectionType::FeatureHighlights),
            SectionType::CtaBanner => Some(VariantSectionType::CtaBanner),
            SectionType::StatsBar => Some(VariantSectionType::StatsBar),
            SectionType::LeadForm
            | SectionType::RecentlyFunded
            | SectionType::StateMap
            | SectionType::CustomContent => None,
        }
    }

    fn definitions(&self) -> &'static [VariantDefinition; 3] {
        match self {
            VariantSectionType::Hero => &variant_registry::HERO,
            VariantSectionType::FeatureHighlights => &variant_registry::FEATURE_HIGHLIGHTS,
            VariantSectionType::Testimonials => &variant_registry::TESTIMONIALS,
            VariantSectionType::CtaBanner => &variant_registry::CTA_BANNER,
            VariantSectionType::StatsBar => &variant_registry::STATS_BAR,
            VariantSectionType::TrustIndicators => &variant_registry::TRUST_INDICATORS,
            VariantSectionType::ProcessSteps => &variant_registry::PROCESS_STEPS,
            VariantSectionType::Faq => &variant_registry::FAQ,
            VariantSectionType::LoanProducts => &variant_registry::LOAN_PRODUCTS,
            VariantSectionType::ProductComparison => &variant_registry::PRODUCT_COMPARISON,
        }
    }

    /// Built-in default when no override or config entry applies
    pub fn default_variant(&self) -> StyleVariant {
        match self {
            VariantSectionType::StatsBar => StyleVariant::A,
            _ => StyleVariant::C,
        }
    }
}

impl fmt::Display for VariantSectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantSectionType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VariantSectionType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownVariantSectionType(s.to_string()))
    }
}

/// Named style variant. Names outside the registry are kept as
/// [`StyleVariant::Other`] so a stale config never fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleVariant {
    A,
    B,
    C,
    Other(String),
}

impl StyleVariant {
    pub fn as_str(&self) -> &str {
        match self {
            StyleVariant::A => "variantA",
            StyleVariant::B => "variantB",
            StyleVariant::C => "variantC",
            StyleVariant::Other(name) => name,
        }
    }

    fn index(&self) -> Option<usize> {
        match self {
            StyleVariant::A => Some(0),
            StyleVariant::B => Some(1),
            StyleVariant::C => Some(2),
            StyleVariant::Other(_) => None,
        }
    }
}

impl From<&str> for StyleVariant {
    fn from(s: &str) -> Self {
        match s {
            "variantA" => StyleVariant::A,
            "variantB" => StyleVariant::B,
            "variantC" => StyleVariant::C,
            other => StyleVariant::Other(other.to_string()),
        }
    }
}

impl From<String> for StyleVariant {
    fn from(s: String) -> Self {
        StyleVariant::from(s.as_str())
    }
}

impl From<StyleVariant> for String {
    fn from(v: StyleVariant) -> Self {
        v.as_str().to_string()
    }
}

impl fmt::Display for StyleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StyleVariant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StyleVariant {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(StyleVariant::from)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Typography {
    pub headline: &'static str,
    pub body: &'static str,
}

/// Presentational token bundle for one section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariantStyles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<&'static str>,
    pub spacing: &'static str,
    pub typography: Typography,
    pub background: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<&'static str>,
    #[serde(skip_serializing_if = "no_special", serialize_with = "serialize_special")]
    pub special: &'static [(&'static str, &'static str)],
}

impl VariantStyles {
    pub(crate) const fn new(
        layout: &'static str,
        spacing: &'static str,
        headline: &'static str,
        body: &'static str,
        background: &'static str,
    ) -> Self {
        Self {
            layout: Some(layout),
            spacing,
            typography: Typography { headline, body },
            background,
            card: None,
            icon: None,
            animation: None,
            special: &[],
        }
    }

    pub(crate) const fn card(mut self, card: &'static str) -> Self {
        self.card = Some(card);
        self
    }

    pub(crate) const fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub(crate) const fn animation(mut self, animation: &'static str) -> Self {
        self.animation = Some(animation);
        self
    }

    pub(crate) const fn special(mut self, special: &'static [(&'static str, &'static str)]) -> Self {
        self.special = special;
        self
    }

    /// Look up a variant-specific token such as `overlay` or `avatar`
    pub fn special_token(&self, key: &str) -> Option<&'static str> {
        self.special
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

fn no_special(special: &&'static [(&'static str, &'static str)]) -> bool {
    special.is_empty()
}

fn serialize_special<S: Serializer>(
    special: &&'static [(&'static str, &'static str)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(special.len()))?;
    for (key, value) in special.iter() {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

/// Tokens used when neither the requested nor the default variant exists
pub static FALLBACK_STYLES: VariantStyles = VariantStyles {
    layout: None,
    spacing: "py-16 md:py-24",
    typography: Typography {
        headline: "text-3xl md:text-4xl font-bold",
        body: "text-base text-muted-foreground",
    },
    background: "bg-background",
    card: None,
    icon: None,
    animation: None,
    special: &[],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariantDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub styles: VariantStyles,
}

/// Page- or site-level mapping from section type to its chosen variant.
///
/// Keys are kept as plain strings so configs naming section types this
/// build does not know still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantsConfig(BTreeMap<String, StyleVariant>);

impl VariantsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in defaults, one entry per variant section type
    pub fn builtin() -> Self {
        VariantSectionType::ALL
            .iter()
            .map(|t| (*t, t.default_variant()))
            .collect()
    }

    /// Default variants for a site template.
    ///
    /// Unknown slugs get the `upcrunch` mapping.
    pub fn for_template(slug: &str) -> Self {
        match slug {
            "nestly" => Self::uniform(StyleVariant::A),
            "summit-capital" => Self::uniform(StyleVariant::B),
            "blueprint-pro" => Self::uniform(StyleVariant::C),
            _ => {
                let mut config = Self::uniform(StyleVariant::C);
                config.set(VariantSectionType::StatsBar, StyleVariant::A);
                config
            }
        }
    }

    fn uniform(variant: StyleVariant) -> Self {
        VariantSectionType::ALL
            .iter()
            .map(|t| (*t, variant.clone()))
            .collect()
    }

    pub fn get(&self, section_type: VariantSectionType) -> Option<&StyleVariant> {
        self.0.get(section_type.as_str())
    }

    pub fn set(&mut self, section_type: VariantSectionType, variant: StyleVariant) {
        self.0.insert(section_type.as_str().to_string(), variant);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(VariantSectionType, StyleVariant)> for VariantsConfig {
    fn from_iter<I: IntoIterator<Item = (VariantSectionType, StyleVariant)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(t, v)| (t.as_str().to_string(), v))
                .collect(),
        )
    }
}

/// Registry entry for one type + variant, if it exists
pub fn get_variant_definition(
    section_type: VariantSectionType,
    variant: &StyleVariant,
) -> Option<&'static VariantDefinition> {
    variant
        .index()
        .map(|index| &section_type.definitions()[index])
}

/// All registered variants for a type, in `variantA..variantC` order
pub fn variants_for(section_type: VariantSectionType) -> impl Iterator<Item = (StyleVariant, &'static VariantDefinition)> {
    [StyleVariant::A, StyleVariant::B, StyleVariant::C]
        .into_iter()
        .zip(section_type.definitions().iter())
}

/// Resolve the style tokens for a variant section type
pub fn resolve_variant(
    section_type: VariantSectionType,
    override_variant: Option<&StyleVariant>,
    config: Option<&VariantsConfig>,
) -> &'static VariantStyles {
    let default_variant = section_type.default_variant();
    let requested = override_variant
        .or_else(|| config.and_then(|c| c.get(section_type)))
        .unwrap_or(&default_variant);

    if let Some(definition) = get_variant_definition(section_type, requested) {
        debug!(section_type = %section_type, variant = %requested, "Resolved section variant");
        return &definition.styles;
    }

    warn!(
        section_type = %section_type,
        variant = %requested,
        "Unknown style variant, falling back to variantA"
    );

    get_variant_definition(section_type, &StyleVariant::A)
        .map(|definition| &definition.styles)
        .unwrap_or(&FALLBACK_STYLES)
}

/// Resolve the style tokens for a page section.
///
/// Section types without a variant registry get [`FALLBACK_STYLES`].
pub fn resolve_section_styles(
    section_type: Option<SectionType>,
    override_variant: Option<&StyleVariant>,
    config: Option<&VariantsConfig>,
) -> &'static VariantStyles {
    match section_type.and_then(VariantSectionType::from_section_type) {
        Some(variant_type) => resolve_variant(variant_type, override_variant, config),
        None => &FALLBACK_STYLES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_default_is_variant_c() {
        let styles = resolve_variant(VariantSectionType::Faq, None, None);
        assert_eq!(styles.typography.headline, "text-xl font-bold");
        assert_eq!(styles.special_token("leftPanel"), Some("md:col-span-3 space-y-1"));
    }

    #[test]
    fn test_stats_bar_defaults_to_variant_a() {
        let styles = resolve_variant(VariantSectionType::StatsBar, None, None);
        assert_eq!(styles.layout, Some("grid grid-cols-2 md:grid-cols-4 gap-4 text-center"));
    }

    #[test]
    fn test_override_beats_config() {
        let mut config = VariantsConfig::new();
        config.set(VariantSectionType::Hero, StyleVariant::B);

        let from_config = resolve_variant(VariantSectionType::Hero, None, Some(&config));
        assert_eq!(from_config.animation, Some("slide-in-left"));

        let overridden =
            resolve_variant(VariantSectionType::Hero, Some(&StyleVariant::A), Some(&config));
        assert_eq!(overridden.animation, Some("fade-in"));
    }

    #[test]
    fn test_config_without_entry_uses_builtin_default() {
        let mut config = VariantsConfig::new();
        config.set(VariantSectionType::Hero, StyleVariant::A);

        let styles = resolve_variant(VariantSectionType::CtaBanner, None, Some(&config));
        assert_eq!(styles, &variant_registry::CTA_BANNER[2].styles);
    }

    #[test]
    fn test_unknown_variant_degrades_to_variant_a() {
        let requested = StyleVariant::from("variantZ");
        let styles = resolve_variant(VariantSectionType::Testimonials, Some(&requested), None);
        assert_eq!(styles, &variant_registry::TESTIMONIALS[0].styles);
    }

    #[test]
    fn test_types_without_registry_use_fallback() {
        let styles = resolve_section_styles(Some(SectionType::LeadForm), None, None);
        assert_eq!(styles, &FALLBACK_STYLES);
        assert_eq!(styles.spacing, "py-16 md:py-24");
        assert_eq!(styles.layout, None);

        let unknown = resolve_section_styles(None, Some(&StyleVariant::B), None);
        assert_eq!(unknown, &FALLBACK_STYLES);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let config = VariantsConfig::for_template("summit-capital");
        let first = resolve_variant(VariantSectionType::LoanProducts, None, Some(&config));
        let second = resolve_variant(VariantSectionType::LoanProducts, None, Some(&config));
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_template_presets() {
        let nestly = VariantsConfig::for_template("nestly");
        assert_eq!(nestly.get(VariantSectionType::Faq), Some(&StyleVariant::A));

        let fallback = VariantsConfig::for_template("does-not-exist");
        assert_eq!(fallback, VariantsConfig::for_template("upcrunch"));
        assert_eq!(fallback.get(VariantSectionType::StatsBar), Some(&StyleVariant::A));
        assert_eq!(fallback.get(VariantSectionType::Hero), Some(&StyleVariant::C));
        assert_eq!(fallback, VariantsConfig::builtin());
    }

    #[test]
    fn test_variants_config_json() {
        let config: VariantsConfig =
            serde_json::from_str(r#"{ "hero": "variantB", "partner_badges": "variantX" }"#)
                .unwrap();
        assert_eq!(config.get(VariantSectionType::Hero), Some(&StyleVariant::B));

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["partner_badges"], "variantX");
    }

    #[test]
    fn test_variants_listing() {
        let listed: Vec<_> = variants_for(VariantSectionType::ProcessSteps).collect();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].0, StyleVariant::A);
        assert_eq!(listed[0].1.name, "Timeline Vertical");
        assert_eq!(listed[2].1.name, "Accordion Checklist");
    }

    #[test]
    fn test_styles_serialize_special_as_map() {
        let styles = resolve_variant(VariantSectionType::Hero, Some(&StyleVariant::B), None);
        let json = serde_json::to_value(styles).unwrap();
        assert_eq!(json["special"]["overlay"], "bg-black/60");
        assert_eq!(json["typography"]["body"], "text-lg md:text-xl");
        assert!(json.get("card").is_none());
    }
}
