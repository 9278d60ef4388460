use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use pagekit_editor::{EditorCommand, EditorStore};
use pagekit_schema::PageLayout;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Page JSON document
    pub page: String,

    /// JSON array of editor commands
    #[arg(short, long)]
    pub script: String,

    /// Output file (defaults to overwriting the page)
    #[arg(short, long)]
    pub out: Option<String>,
}

pub fn edit(args: EditArgs, cwd: &str) -> Result<()> {
    let page_path = PathBuf::from(cwd).join(&args.page);
    let script_path = PathBuf::from(cwd).join(&args.script);

    let layout = PageLayout::load(&page_path)
        .with_context(|| format!("Failed to load {}", args.page))?;
    let section_variants = layout.section_variants.clone();

    let script = fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read {}", args.script))?;
    let commands = EditorCommand::parse_script(&script)
        .with_context(|| format!("Invalid command script {}", args.script))?;

    println!(
        "{} {} ({} commands)",
        "✏️ Editing".bright_blue().bold(),
        args.page,
        commands.len()
    );

    let mut store = EditorStore::new();
    store.set_page_layout(layout);

    for (index, command) in commands.iter().enumerate() {
        command
            .apply(&mut store)
            .with_context(|| format!("Command {} ({}) failed", index + 1, command.name()))?;
        println!("  {} {}", "✓".green(), command.name());
    }

    let mut edited = store
        .draft_layout()
        .ok_or_else(|| anyhow!("No page loaded"))?;
    edited.section_variants = section_variants;

    let output_file = match &args.out {
        Some(out) => PathBuf::from(cwd).join(out),
        None => page_path,
    };
    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)?;
    }
    edited.save(&output_file)?;

    let visible = edited.sections.iter().filter(|s| s.is_visible).count();
    println!();
    println!(
        "  Sections: {} ({} visible)",
        edited.sections.len(),
        visible
    );
    println!(
        "  History:  {} snapshots, undo {}, redo {}",
        store.history().len(),
        yes_no(store.can_undo()),
        yes_no(store.can_redo())
    );
    println!("  Dirty:    {}", yes_no(store.is_dirty()));
    println!();
    println!("{} Wrote {}", "✅".green(), output_file.display());

    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_schema::{
        PageSection, SectionConfig, SectionType, StyleVariant, VariantSectionType, VariantsConfig,
    };
    use std::path::Path;

    fn write_page(dir: &Path) {
        let mut variants = VariantsConfig::new();
        variants.set(VariantSectionType::Faq, StyleVariant::A);

        let mut layout = PageLayout::new(
            "home",
            "Home",
            vec![
                PageSection::new("hero", SectionConfig::default_for(SectionType::Hero)),
                PageSection::new("faq", SectionConfig::default_for(SectionType::Faq)).with_order(1),
            ],
        );
        layout.section_variants = Some(variants);
        layout.save(&dir.join("home.json")).unwrap();
    }

    fn args(script: &str, out: Option<&str>) -> EditArgs {
        EditArgs {
            page: "home.json".to_string(),
            script: script.to_string(),
            out: out.map(str::to_string),
        }
    }

    #[test]
    fn test_edit_applies_script() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();
        write_page(dir.path());
        fs::write(
            dir.path().join("script.json"),
            r#"[
                { "op": "reorderSections", "fromIndex": 1, "toIndex": 0 },
                { "op": "toggleSectionVisibility", "sectionId": "hero" }
            ]"#,
        )
        .unwrap();

        edit(args("script.json", Some("edited.json")), cwd).unwrap();

        let edited = PageLayout::load(&dir.path().join("edited.json")).unwrap();
        let ids: Vec<&str> = edited.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["faq", "hero"]);
        assert_eq!(edited.sections[1].order, 1);
        assert!(!edited.sections[1].is_visible);
        assert!(edited.section_variants.is_some());

        let original = PageLayout::load(&dir.path().join("home.json")).unwrap();
        assert_eq!(original.sections[0].id, "hero");
    }

    #[test]
    fn test_edit_stops_on_failed_command() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();
        write_page(dir.path());
        fs::write(
            dir.path().join("script.json"),
            r#"[{ "op": "removeSection", "sectionId": "ghost" }]"#,
        )
        .unwrap();

        let err = edit(args("script.json", None), cwd).unwrap_err();
        assert!(err.to_string().contains("removeSection"));

        let untouched = PageLayout::load(&dir.path().join("home.json")).unwrap();
        assert_eq!(untouched.sections.len(), 2);
    }
}
