//! # Pagekit Editor
//!
//! Authoring state for the page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ schema: PageSection / SectionConfig / JSON  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: draft sections + history            │
//! │  - Load a page, edit a working copy         │
//! │  - Snapshot undo/redo (capped at 50)        │
//! │  - Dirty / saving / last-saved bookkeeping  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: draft → preview HTML         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Drafts are values**: Snapshots share untouched sections via `Arc`
//! 2. **Stale ids are harmless**: Store methods ignore them and change nothing
//! 3. **Order follows position**: `order` is renumbered after every reorder
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagekit_editor::{EditorStore, SectionPatch};
//!
//! let mut store = EditorStore::new();
//! store.set_page(page.id, page.name, page.sections);
//!
//! store.toggle_section_visibility("hero-1");
//! store.update_section_config("faq-1", new_config);
//! store.checkpoint();
//!
//! store.undo();
//! assert!(store.is_dirty());
//! ```

mod commands;
mod errors;
mod history;
mod store;

pub use commands::EditorCommand;
pub use errors::EditorError;
pub use history::{History, HistoryEntry, MAX_HISTORY_LENGTH};
pub use store::{EditorStore, SectionPatch};
