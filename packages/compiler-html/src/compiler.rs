use crate::sections::compile_section;
use pagekit_schema::{PageLayout, PageSection, SchemaError, VariantsConfig};
use std::borrow::Borrow;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during HTML compilation
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Invalid page: {0}")]
    InvalidPage(#[from] SchemaError),
}

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Wrap the sections in a full HTML document
    pub document: bool,
    /// Document title; defaults to the page name
    pub title: Option<String>,
    /// Style variants per section type, used when the page has none
    pub variants: Option<VariantsConfig>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            document: false,
            title: None,
            variants: None,
        }
    }
}

pub(crate) struct Context<'a> {
    options: &'a CompileOptions,
    pub(crate) variants: Option<&'a VariantsConfig>,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a CompileOptions, variants: Option<&'a VariantsConfig>) -> Self {
        Self {
            options,
            variants,
            depth: 0,
            buffer: String::new(),
        }
    }

    pub(crate) fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub(crate) fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    pub(crate) fn indent(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    /// Write an opening tag line and indent
    pub(crate) fn open(&mut self, tag: &str) {
        self.add_line(tag);
        self.indent();
    }

    /// Dedent and write `</name>`
    pub(crate) fn close(&mut self, name: &str) {
        self.dedent();
        self.add_line(&format!("</{}>", name));
    }

    /// `<name class="...">text</name>` on one line, text escaped
    pub(crate) fn element(&mut self, name: &str, class: &str, text: &str) {
        self.add_line(&format!(
            "<{name}{}>{}</{name}>",
            class_attr(class),
            escape_html(text),
        ));
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Render the visible sections, ordered by `order`.
///
/// Hidden sections are skipped entirely. Sections sharing an `order` keep
/// their input order. Unknown section types render as a placeholder block.
pub fn render_sections<S: Borrow<PageSection>>(sections: &[S], options: &CompileOptions) -> String {
    let mut ctx = Context::new(options, options.variants.as_ref());
    compile_sections(sections, &mut ctx);
    ctx.get_output()
}

/// Compile a page layout to HTML.
///
/// The page's own `sectionVariants` take precedence over
/// [`CompileOptions::variants`].
pub fn compile_to_html(layout: &PageLayout, options: &CompileOptions) -> String {
    let variants = layout
        .section_variants
        .as_ref()
        .or(options.variants.as_ref());
    let mut ctx = Context::new(options, variants);

    if !options.document {
        compile_sections(&layout.sections, &mut ctx);
        return ctx.get_output();
    }

    let title = options.title.as_deref().unwrap_or(&layout.name);

    ctx.add_line("<!DOCTYPE html>");
    ctx.open("<html lang=\"en\">");

    ctx.open("<head>");
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape_html(title)));
    ctx.close("head");

    ctx.open(&format!(
        "<body data-page-id=\"{}\">",
        escape_html(&layout.id)
    ));
    ctx.open("<main>");
    compile_sections(&layout.sections, &mut ctx);
    ctx.close("main");
    ctx.close("body");

    ctx.close("html");

    ctx.get_output()
}

fn compile_sections<S: Borrow<PageSection>>(sections: &[S], ctx: &mut Context) {
    let mut visible: Vec<&PageSection> = sections
        .iter()
        .map(|section| Borrow::<PageSection>::borrow(section))
        .filter(|section| section.is_visible)
        .collect();
    visible.sort_by_key(|section| section.order);

    for section in &visible {
        compile_section(section, ctx);
    }

    info!(
        total = sections.len(),
        rendered = visible.len(),
        "Rendered sections"
    );
}

/// Parse a page document and compile it
pub fn compile_page(source: &str, options: &CompileOptions) -> Result<String, CompileError> {
    let layout = PageLayout::from_json(source)?;
    Ok(compile_to_html(&layout, options))
}

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// ` class="..."`, or nothing for an empty class list
pub(crate) fn class_attr(class: &str) -> String {
    let class = class.trim();
    if class.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", escape_html(class))
    }
}

/// Join the non-empty class fragments with single spaces
pub(crate) fn classes(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
