//! # Pagekit HTML Compiler
//!
//! Renders page sections to static HTML for the public site and the
//! editor preview.
//!
//! ```rust,ignore
//! use pagekit_compiler_html::{render_sections, CompileOptions};
//!
//! let html = render_sections(store.draft_sections(), &CompileOptions::default());
//! ```

mod compiler;
mod defaults;
mod sections;

pub use compiler::{compile_page, compile_to_html, render_sections, CompileError, CompileOptions};

#[cfg(test)]
mod tests;
