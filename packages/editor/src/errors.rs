//! Error types for the editor

use pagekit_schema::SchemaError;
use thiserror::Error;

/// Raised by [`EditorCommand::apply`](crate::EditorCommand::apply).
///
/// The store methods themselves never fail; they ignore stale ids and
/// out-of-range indices. Commands validate first and report those cases.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Section id already exists: {0}")]
    DuplicateSectionId(String),

    #[error("Index {index} out of range for {len} sections")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Nothing to redo")]
    NothingToRedo,

    #[error("No page loaded")]
    NoPageLoaded,

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}
