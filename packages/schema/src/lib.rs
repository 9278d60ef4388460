//! # Pagekit Schema
//!
//! Data model shared by the page editor and the public renderer:
//!
//! - [`PageSection`] / [`SectionConfig`]: the persisted section records
//! - [`variants`]: style variant registry and resolver
//! - [`PageLayout`]: a stored page document
//! - [`SectionIdGenerator`]: ids for newly added sections

pub mod configs;
pub mod error;
pub mod id_generator;
pub mod page;
pub mod section;
mod variant_registry;
pub mod variants;

pub use configs::*;
pub use error::{SchemaError, SchemaResult};
pub use id_generator::{get_page_seed, SectionIdGenerator};
pub use page::PageLayout;
pub use section::{PageSection, SectionConfig, SectionType};
pub use variants::{
    get_variant_definition, resolve_section_styles, resolve_variant, variants_for, StyleVariant,
    Typography, VariantDefinition, VariantSectionType, VariantStyles, VariantsConfig,
    FALLBACK_STYLES,
};
