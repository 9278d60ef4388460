//! Persisted page layout document.

use crate::error::SchemaResult;
use crate::section::PageSection;
use crate::variants::VariantsConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// A page as stored by the site: identity, ordered sections and an
/// optional per-page variants mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sections: Vec<PageSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_variants: Option<VariantsConfig>,
}

impl PageLayout {
    pub fn new(id: impl Into<String>, name: impl Into<String>, sections: Vec<PageSection>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sections,
            section_variants: None,
        }
    }

    pub fn from_json(source: &str) -> SchemaResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_json(&self) -> SchemaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> SchemaResult<Self> {
        let source = std::fs::read_to_string(path)?;
        let page = Self::from_json(&source)?;
        info!(page_id = %page.id, sections = page.sections.len(), path = %path.display(), "Loaded page");
        Ok(page)
    }

    pub fn save(&self, path: &Path) -> SchemaResult<()> {
        std::fs::write(path, self.to_json()?)?;
        info!(page_id = %self.id, path = %path.display(), "Saved page");
        Ok(())
    }
}
