use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagekit_schema::{
    CtaBannerConfig, FaqConfig, HeroConfig, PageLayout, PageSection, SectionConfig,
    SectionIdGenerator, SectionType,
};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Site template preset (nestly, summit-capital, upcrunch, blueprint-pro)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Pages directory
    #[arg(short, long, default_value = "pages")]
    pub src_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Pagekit site...".bright_blue().bold());

    let config = Config {
        src_dir: args.src_dir.clone(),
        template: args.template.clone(),
        ..Config::default()
    };

    // Create pages directory if it doesn't exist
    let src_dir = config.get_src_dir(cwd);
    if !src_dir.exists() {
        fs::create_dir_all(&src_dir)?;
        println!("  {} Created {}/", "✓".green(), args.src_dir);
    }

    // Create sample page
    let home_file = src_dir.join("home.json");
    if !home_file.exists() {
        sample_page().save(&home_file)?;
        println!("  {} Created {}/home.json", "✓".green(), args.src_dir);
    }

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Site initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}/home.json", args.src_dir);
    println!("  2. Run: pagekit render {}/home.json", args.src_dir);
    println!("  3. Check output in {}/", config.out_dir);

    Ok(())
}

fn sample_page() -> PageLayout {
    let mut ids = SectionIdGenerator::for_page("home");

    let sections = vec![
        PageSection::new(
            ids.new_id(),
            SectionConfig::Hero(HeroConfig {
                headline: Some("Funding Solutions.".to_string()),
                cta_text: Some("Apply Now".to_string()),
                ..Default::default()
            }),
        ),
        PageSection::new(ids.new_id(), SectionConfig::default_for(SectionType::TrustIndicators)),
        PageSection::new(ids.new_id(), SectionConfig::default_for(SectionType::LoanProducts)),
        PageSection::new(ids.new_id(), SectionConfig::default_for(SectionType::Testimonials)),
        PageSection::new(ids.new_id(), SectionConfig::Faq(FaqConfig::default())),
        PageSection::new(
            ids.new_id(),
            SectionConfig::CtaBanner(CtaBannerConfig {
                headline: Some("Ready to Get Started?".to_string()),
                ..Default::default()
            }),
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, section)| section.with_order(i as i32))
    .collect();

    PageLayout::new("home", "Home", sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(force: bool) -> InitArgs {
        InitArgs {
            template: Some("nestly".to_string()),
            src_dir: "pages".to_string(),
            force,
        }
    }

    #[test]
    fn test_init_writes_config_and_page() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();

        init(args(false), cwd).unwrap();

        let config = Config::load(cwd).unwrap();
        assert_eq!(config.template.as_deref(), Some("nestly"));

        let page = PageLayout::load(&dir.path().join("pages/home.json")).unwrap();
        assert_eq!(page.id, "home");
        assert_eq!(page.sections.len(), 6);
        assert_eq!(page.sections[0].section_type(), Some(SectionType::Hero));
    }

    #[test]
    fn test_init_keeps_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{ "outDir": "site" }"#).unwrap();

        init(args(false), cwd).unwrap();
        assert_eq!(Config::load(cwd).unwrap().out_dir, "site");

        init(args(true), cwd).unwrap();
        assert_eq!(Config::load(cwd).unwrap().out_dir, "dist");
    }
}
