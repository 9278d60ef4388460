//! # Editor Commands
//!
//! Serializable form of every store operation, for scripted edits and for
//! hosts that talk to the editor over JSON.
//!
//! ```json
//! [
//!   { "op": "addSection", "section": { "id": "s9", "type": "faq" }, "atIndex": 0 },
//!   { "op": "updateSectionConfig", "sectionId": "s9", "config": { "title": "Questions" } },
//!   { "op": "checkpoint" },
//!   { "op": "undo" }
//! ]
//! ```
//!
//! Unlike the store methods, which silently ignore stale ids, commands are
//! validated first and report what was wrong.

use crate::errors::EditorError;
use crate::store::{EditorStore, SectionPatch};
use pagekit_schema::{PageSection, SectionConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum EditorCommand {
    SelectSection {
        #[serde(default)]
        section_id: Option<String>,
    },

    /// Merge visibility and/or config into a section (checkpoints)
    UpdateSection {
        section_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        is_visible: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        config: Option<Value>,
    },

    /// Replace a section's config (no checkpoint)
    UpdateSectionConfig {
        section_id: String,
        config: Value,
    },

    AddSection {
        section: PageSection,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        at_index: Option<usize>,
    },

    RemoveSection {
        section_id: String,
    },

    ReorderSections {
        from_index: usize,
        to_index: usize,
    },

    ToggleSectionVisibility {
        section_id: String,
    },

    Undo,
    Redo,
    Checkpoint,
    MarkClean,
}

impl EditorCommand {
    /// Parse a JSON array of commands
    pub fn parse_script(source: &str) -> Result<Vec<EditorCommand>, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Apply to the store, failing without side effects if invalid
    pub fn apply(&self, store: &mut EditorStore) -> Result<(), EditorError> {
        self.validate(store)?;
        debug!(op = self.name(), "Applying editor command");

        match self {
            EditorCommand::SelectSection { section_id } => {
                store.select_section(section_id.as_deref());
            }

            EditorCommand::UpdateSection {
                section_id,
                is_visible,
                config,
            } => {
                let mut patch = SectionPatch::new();
                patch.is_visible = *is_visible;
                if let Some(raw) = config {
                    patch.config = Some(decode_config(store, section_id, raw)?);
                }
                store.update_section(section_id, patch);
            }

            EditorCommand::UpdateSectionConfig { section_id, config } => {
                let config = decode_config(store, section_id, config)?;
                store.update_section_config(section_id, config);
            }

            EditorCommand::AddSection { section, at_index } => {
                store.add_section(section.clone(), *at_index);
            }

            EditorCommand::RemoveSection { section_id } => {
                store.remove_section(section_id);
            }

            EditorCommand::ReorderSections {
                from_index,
                to_index,
            } => {
                store.reorder_sections(*from_index, *to_index);
            }

            EditorCommand::ToggleSectionVisibility { section_id } => {
                store.toggle_section_visibility(section_id);
            }

            EditorCommand::Undo => {
                store.undo();
            }

            EditorCommand::Redo => {
                store.redo();
            }

            EditorCommand::Checkpoint => {
                store.checkpoint();
            }

            EditorCommand::MarkClean => store.mark_clean(),
        }

        Ok(())
    }

    /// Check the command against the store without applying it
    pub fn validate(&self, store: &EditorStore) -> Result<(), EditorError> {
        if store.page_id().is_none() {
            return Err(EditorError::NoPageLoaded);
        }

        match self {
            EditorCommand::SelectSection {
                section_id: Some(section_id),
            }
            | EditorCommand::UpdateSection { section_id, .. }
            | EditorCommand::UpdateSectionConfig { section_id, .. }
            | EditorCommand::RemoveSection { section_id }
            | EditorCommand::ToggleSectionVisibility { section_id } => {
                require_section(store, section_id)
            }

            EditorCommand::AddSection { section, .. } => {
                if store.section(&section.id).is_some() {
                    Err(EditorError::DuplicateSectionId(section.id.clone()))
                } else {
                    Ok(())
                }
            }

            EditorCommand::ReorderSections {
                from_index,
                to_index,
            } => {
                let len = store.draft_sections().len();
                for &index in [from_index, to_index] {
                    if index >= len {
                        return Err(EditorError::IndexOutOfRange { index, len });
                    }
                }
                Ok(())
            }

            EditorCommand::Undo if !store.can_undo() => Err(EditorError::NothingToUndo),
            EditorCommand::Redo if !store.can_redo() => Err(EditorError::NothingToRedo),

            _ => Ok(()),
        }
    }

    /// Wire name of the command
    pub fn name(&self) -> &'static str {
        match self {
            EditorCommand::SelectSection { .. } => "selectSection",
            EditorCommand::UpdateSection { .. } => "updateSection",
            EditorCommand::UpdateSectionConfig { .. } => "updateSectionConfig",
            EditorCommand::AddSection { .. } => "addSection",
            EditorCommand::RemoveSection { .. } => "removeSection",
            EditorCommand::ReorderSections { .. } => "reorderSections",
            EditorCommand::ToggleSectionVisibility { .. } => "toggleSectionVisibility",
            EditorCommand::Undo => "undo",
            EditorCommand::Redo => "redo",
            EditorCommand::Checkpoint => "checkpoint",
            EditorCommand::MarkClean => "markClean",
        }
    }
}

fn require_section(store: &EditorStore, section_id: &str) -> Result<(), EditorError> {
    match store.section(section_id) {
        Some(_) => Ok(()),
        None => Err(EditorError::SectionNotFound(section_id.to_string())),
    }
}

/// Decode a raw config against the target section's type
fn decode_config(
    store: &EditorStore,
    section_id: &str,
    raw: &Value,
) -> Result<SectionConfig, EditorError> {
    let section = store
        .section(section_id)
        .ok_or_else(|| EditorError::SectionNotFound(section_id.to_string()))?;
    Ok(SectionConfig::from_parts(
        section_id,
        section.type_name(),
        raw.clone(),
    )?)
}
