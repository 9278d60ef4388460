use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use pagekit_compiler_html::{compile_to_html, CompileOptions};
use pagekit_schema::PageLayout;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Page JSON document
    pub page: String,

    /// Output file (defaults to <outDir>/<page>.html)
    #[arg(short, long)]
    pub out: Option<String>,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Emit only the sections, without the document wrapper
    #[arg(long)]
    pub fragment: bool,

    /// Site template preset used when the page has no sectionVariants
    #[arg(short, long)]
    pub template: Option<String>,

    /// Disable pretty printing
    #[arg(long)]
    pub compact: bool,
}

pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let page_path = PathBuf::from(cwd).join(&args.page);

    if !page_path.exists() {
        return Err(anyhow!("Page does not exist: {}", page_path.display()));
    }

    let layout = PageLayout::load(&page_path)
        .with_context(|| format!("Failed to load {}", args.page))?;

    let options = CompileOptions {
        pretty: !args.compact,
        document: !args.fragment,
        variants: config.variants(args.template.as_deref()),
        ..Default::default()
    };
    let html = compile_to_html(&layout, &options);

    if args.stdout {
        println!("{}", html);
        return Ok(());
    }

    let output_file = match &args.out {
        Some(out) => PathBuf::from(cwd).join(out),
        None => default_output_path(&config, cwd, &page_path),
    };

    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_file, html)?;

    let visible = layout.sections.iter().filter(|s| s.is_visible).count();
    println!(
        "  {} {} → {} ({} of {} sections)",
        "✓".green(),
        args.page,
        output_file.display(),
        visible,
        layout.sections.len()
    );

    Ok(())
}

fn default_output_path(config: &Config, cwd: &str, page_path: &Path) -> PathBuf {
    let stem = page_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("page");
    config.get_out_dir(cwd).join(stem).with_extension("html")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_schema::{PageSection, SectionConfig, SectionType};

    fn write_page(dir: &Path) {
        let layout = PageLayout::new(
            "about",
            "About",
            vec![
                PageSection::new("faq", SectionConfig::default_for(SectionType::Faq)),
                PageSection::new("hero", SectionConfig::default_for(SectionType::Hero))
                    .with_order(1)
                    .hidden(),
            ],
        );
        fs::create_dir_all(dir.join("pages")).unwrap();
        layout.save(&dir.join("pages/about.json")).unwrap();
    }

    fn args(out: Option<&str>) -> RenderArgs {
        RenderArgs {
            page: "pages/about.json".to_string(),
            out: out.map(str::to_string),
            stdout: false,
            fragment: false,
            template: None,
            compact: false,
        }
    }

    #[test]
    fn test_render_to_default_output() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();
        write_page(dir.path());

        render(args(None), cwd).unwrap();

        let html = fs::read_to_string(dir.path().join("dist/about.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>About</title>"));
        assert!(html.contains("data-section-id=\"faq\""));
        assert!(!html.contains("data-section-id=\"hero\""));
    }

    #[test]
    fn test_render_fragment_to_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();
        write_page(dir.path());

        let mut render_args = args(Some("out/fragment.html"));
        render_args.fragment = true;
        render(render_args, cwd).unwrap();

        let html = fs::read_to_string(dir.path().join("out/fragment.html")).unwrap();
        assert!(html.starts_with("<section "));
    }

    #[test]
    fn test_render_missing_page() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();

        let err = render(args(None), cwd).unwrap_err();
        assert!(err.to_string().contains("Page does not exist"));
    }
}
