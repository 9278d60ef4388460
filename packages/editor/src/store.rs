//! # Editor Store
//!
//! In-memory authoring state for one page's sections.
//!
//! ## Lifecycle
//!
//! ```text
//! Empty ──set_page──▶ Loaded(clean) ──edit──▶ Loaded(dirty) ──mark_clean──▶ Loaded(clean)
//!   ▲                                                                     │
//!   └──────────────────────────────── reset ◀─────────────────────────────┘
//! ```
//!
//! ## Checkpoints
//!
//! Structural edits (add, remove, reorder, toggle visibility, update
//! section) each push a history snapshot. Config edits do not: live text
//! editing would flood the history with one entry per keystroke. Callers
//! mark the end of a run of config edits with [`EditorStore::checkpoint`]
//! (typically on field blur); otherwise they are folded into the next
//! structural edit's snapshot.
//!
//! ## Stale ids
//!
//! Every method is total. Operations naming a section that does not exist,
//! or an index past the end, leave the store untouched and return `false`.
//! Scripted callers that want an error instead go through
//! [`EditorCommand`](crate::EditorCommand).
//!
//! Persistence is not the store's business: a save collaborator reads
//! [`EditorStore::draft_layout`] and drives `set_saving` / `set_last_saved_at`
//! / `mark_clean` around its own request.

use crate::history::{History, HistoryEntry};
use chrono::{DateTime, Utc};
use pagekit_schema::{PageLayout, PageSection, SectionConfig, SectionIdGenerator, SectionType};
use std::sync::Arc;
use tracing::{debug, info};

/// Partial update merged into a section by [`EditorStore::update_section`].
///
/// `id` and `order` are not patchable: ids are permanent and order always
/// follows position in the draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionPatch {
    pub is_visible: Option<bool>,
    pub config: Option<SectionConfig>,
}

impl SectionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(mut self, is_visible: bool) -> Self {
        self.is_visible = Some(is_visible);
        self
    }

    pub fn config(mut self, config: SectionConfig) -> Self {
        self.config = Some(config);
        self
    }

    fn apply_to(self, section: &mut PageSection) {
        if let Some(is_visible) = self.is_visible {
            section.is_visible = is_visible;
        }
        if let Some(config) = self.config {
            section.config = config;
        }
    }
}

/// Authoring state for the page currently open in the editor
#[derive(Debug, Clone, Default)]
pub struct EditorStore {
    page_id: Option<String>,
    page_name: Option<String>,
    draft_sections: Vec<Arc<PageSection>>,
    selected_section_id: Option<String>,
    is_dirty: bool,
    is_saving: bool,
    last_saved_at: Option<DateTime<Utc>>,
    history: History,
    id_generator: Option<SectionIdGenerator>,
}

impl EditorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose history keeps at most `max_levels` snapshots
    pub fn with_history_limit(max_levels: usize) -> Self {
        Self {
            history: History::with_max_levels(max_levels),
            ..Self::default()
        }
    }

    /// Load a page, replacing all state.
    ///
    /// Orders are renumbered to match position, history is reset to one
    /// snapshot and the dirty, selection, saving and last-saved state is
    /// cleared.
    pub fn set_page(
        &mut self,
        page_id: impl Into<String>,
        page_name: impl Into<String>,
        sections: Vec<PageSection>,
    ) {
        let page_id = page_id.into();
        let mut sections: Vec<Arc<PageSection>> = sections.into_iter().map(Arc::new).collect();
        normalize_order(&mut sections);

        info!(page_id = %page_id, sections = sections.len(), "Editor page loaded");

        self.history.reset(sections.clone());
        self.id_generator = Some(SectionIdGenerator::for_page(&page_id));
        self.page_id = Some(page_id);
        self.page_name = Some(page_name.into());
        self.draft_sections = sections;
        self.selected_section_id = None;
        self.is_dirty = false;
        self.is_saving = false;
        self.last_saved_at = None;
    }

    /// [`EditorStore::set_page`] from a stored layout
    pub fn set_page_layout(&mut self, layout: PageLayout) {
        self.set_page(layout.id, layout.name, layout.sections);
    }

    /// Replace the draft wholesale. Marks dirty, does not checkpoint.
    pub fn set_draft_sections(&mut self, sections: Vec<PageSection>) {
        self.draft_sections = sections.into_iter().map(Arc::new).collect();
        normalize_order(&mut self.draft_sections);
        self.is_dirty = true;
    }

    /// Focus a section in the UI. No effect on dirty state or history.
    pub fn select_section(&mut self, section_id: Option<&str>) {
        self.selected_section_id = section_id.map(str::to_string);
    }

    /// Merge `patch` into the matching section and checkpoint
    pub fn update_section(&mut self, section_id: &str, patch: SectionPatch) -> bool {
        let Some(index) = self.position(section_id) else {
            return false;
        };

        patch.apply_to(Arc::make_mut(&mut self.draft_sections[index]));
        debug!(section_id, "Section updated");
        self.touch_and_checkpoint();
        true
    }

    /// Replace the matching section's config. Marks dirty, does not checkpoint.
    pub fn update_section_config(&mut self, section_id: &str, config: SectionConfig) -> bool {
        let Some(index) = self.position(section_id) else {
            return false;
        };

        Arc::make_mut(&mut self.draft_sections[index]).config = config;
        debug!(section_id, "Section config updated");
        self.is_dirty = true;
        true
    }

    /// Insert `section` at `at_index` (default: end), select it and checkpoint.
    ///
    /// Indices past the end append.
    pub fn add_section(&mut self, section: PageSection, at_index: Option<usize>) {
        let insert_index = at_index
            .unwrap_or(self.draft_sections.len())
            .min(self.draft_sections.len());

        debug!(section_id = %section.id, section_type = section.type_name(), insert_index, "Section added");

        self.selected_section_id = Some(section.id.clone());
        self.draft_sections.insert(insert_index, Arc::new(section));
        normalize_order(&mut self.draft_sections);
        self.touch_and_checkpoint();
    }

    /// Build a new section of `section_type` with a fresh id and empty config
    pub fn new_section(&mut self, section_type: SectionType) -> PageSection {
        let page_id = self.page_id.as_deref().unwrap_or("draft");
        let id = self
            .id_generator
            .get_or_insert_with(|| SectionIdGenerator::for_page(page_id))
            .new_id();
        PageSection::new(id, SectionConfig::default_for(section_type))
    }

    /// Delete the matching section and checkpoint
    pub fn remove_section(&mut self, section_id: &str) -> bool {
        let Some(index) = self.position(section_id) else {
            return false;
        };

        self.draft_sections.remove(index);
        normalize_order(&mut self.draft_sections);

        if self.selected_section_id.as_deref() == Some(section_id) {
            self.selected_section_id = None;
        }

        debug!(section_id, "Section removed");
        self.touch_and_checkpoint();
        true
    }

    /// Move one section, splice style: `from_index` is a position before
    /// removal, `to_index` a position after it.
    pub fn reorder_sections(&mut self, from_index: usize, to_index: usize) -> bool {
        let len = self.draft_sections.len();
        if from_index >= len || to_index >= len {
            return false;
        }

        let moved = self.draft_sections.remove(from_index);
        self.draft_sections.insert(to_index, moved);
        normalize_order(&mut self.draft_sections);

        debug!(from_index, to_index, "Sections reordered");
        self.touch_and_checkpoint();
        true
    }

    /// Flip the matching section's visibility and checkpoint
    pub fn toggle_section_visibility(&mut self, section_id: &str) -> bool {
        let Some(index) = self.position(section_id) else {
            return false;
        };

        let section = Arc::make_mut(&mut self.draft_sections[index]);
        section.is_visible = !section.is_visible;

        debug!(section_id, is_visible = section.is_visible, "Section visibility toggled");
        self.touch_and_checkpoint();
        true
    }

    pub fn set_saving(&mut self, is_saving: bool) {
        self.is_saving = is_saving;
    }

    pub fn set_last_saved_at(&mut self, saved_at: DateTime<Utc>) {
        self.last_saved_at = Some(saved_at);
    }

    pub fn mark_clean(&mut self) {
        self.is_dirty = false;
    }

    /// Append the current draft as a snapshot, discarding any redo branch
    pub fn push_history(&mut self) {
        self.history.push(self.draft_sections.clone());
    }

    /// Push a snapshot only if the draft has drifted from the one under the
    /// cursor. Returns whether a snapshot was taken.
    pub fn checkpoint(&mut self) -> bool {
        if !self.has_pending_changes() {
            return false;
        }
        debug!("Checkpoint");
        self.push_history();
        true
    }

    /// Draft differs from the snapshot under the history cursor
    pub fn has_pending_changes(&self) -> bool {
        match self.history.current() {
            Some(entry) => entry.sections != self.draft_sections,
            None => !self.draft_sections.is_empty(),
        }
    }

    /// Restore the previous snapshot. Marks dirty; no-op at the oldest.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(entry) => {
                self.draft_sections = entry.sections.clone();
                self.is_dirty = true;
                debug!(history_index = ?self.history.index(), "Undo");
                true
            }
            None => false,
        }
    }

    /// Restore the next snapshot. Marks dirty; no-op at the newest.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(entry) => {
                self.draft_sections = entry.sections.clone();
                self.is_dirty = true;
                debug!(history_index = ?self.history.index(), "Redo");
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Back to the empty initial state, keeping the history limit
    pub fn reset(&mut self) {
        let max_levels = self.history.max_levels();
        *self = Self::with_history_limit(max_levels);
    }

    pub fn page_id(&self) -> Option<&str> {
        self.page_id.as_deref()
    }

    pub fn page_name(&self) -> Option<&str> {
        self.page_name.as_deref()
    }

    pub fn draft_sections(&self) -> &[Arc<PageSection>] {
        &self.draft_sections
    }

    pub fn section(&self, section_id: &str) -> Option<&PageSection> {
        self.position(section_id)
            .map(|index| self.draft_sections[index].as_ref())
    }

    pub fn selected_section_id(&self) -> Option<&str> {
        self.selected_section_id.as_deref()
    }

    pub fn selected_section(&self) -> Option<&PageSection> {
        self.selected_section_id
            .as_deref()
            .and_then(|id| self.section(id))
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn last_saved_at(&self) -> Option<DateTime<Utc>> {
        self.last_saved_at
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    pub fn history_index(&self) -> Option<usize> {
        self.history.index()
    }

    /// The draft as a page document, for the save collaborator
    pub fn draft_layout(&self) -> Option<PageLayout> {
        let page_id = self.page_id.as_ref()?;
        Some(PageLayout::new(
            page_id.clone(),
            self.page_name.clone().unwrap_or_default(),
            self.draft_sections
                .iter()
                .map(|s| s.as_ref().clone())
                .collect(),
        ))
    }

    fn position(&self, section_id: &str) -> Option<usize> {
        self.draft_sections.iter().position(|s| s.id == section_id)
    }

    fn touch_and_checkpoint(&mut self) {
        self.is_dirty = true;
        self.push_history();
    }
}

/// Renumber `order` to match position. Sections already in place stay
/// shared with earlier snapshots.
fn normalize_order(sections: &mut [Arc<PageSection>]) {
    for (index, section) in sections.iter_mut().enumerate() {
        let order = index as i32;
        if section.order != order {
            Arc::make_mut(section).order = order;
        }
    }
}
