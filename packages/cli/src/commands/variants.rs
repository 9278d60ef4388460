use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagekit_schema::{
    get_variant_definition, resolve_variant, variants_for, StyleVariant, VariantSectionType,
    VariantStyles, VariantsConfig,
};

#[derive(Debug, Args)]
pub struct VariantsArgs {
    /// Section type to show in detail (e.g. hero, faq, stats_bar)
    pub section_type: Option<String>,

    /// Site template preset to resolve against
    #[arg(short, long)]
    pub template: Option<String>,
}

pub fn variants(args: VariantsArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let site_variants = config.variants(args.template.as_deref());

    match &args.section_type {
        Some(name) => {
            let section_type: VariantSectionType = name.parse()?;
            print_section_variants(section_type, site_variants.as_ref());
        }
        None => print_overview(site_variants.as_ref()),
    }

    Ok(())
}

fn selected_variant(
    section_type: VariantSectionType,
    site_variants: Option<&VariantsConfig>,
) -> StyleVariant {
    site_variants
        .and_then(|v| v.get(section_type))
        .cloned()
        .unwrap_or_else(|| section_type.default_variant())
}

fn print_overview(site_variants: Option<&VariantsConfig>) {
    println!("{}", "🎨 Section variants".bright_blue().bold());
    println!();

    for section_type in VariantSectionType::ALL {
        let selected = selected_variant(section_type, site_variants);
        let name = get_variant_definition(section_type, &selected)
            .map(|definition| definition.name)
            .unwrap_or("(unknown, falls back to variantA)");

        println!(
            "  {:<20} {:<10} {}",
            section_type.as_str().bright_white(),
            selected.as_str().green(),
            name
        );
    }
}

fn print_section_variants(section_type: VariantSectionType, site_variants: Option<&VariantsConfig>) {
    let selected = selected_variant(section_type, site_variants);

    println!(
        "{} {}",
        "🎨 Variants for".bright_blue().bold(),
        section_type.as_str().bright_white().bold()
    );
    println!();

    for (variant, definition) in variants_for(section_type) {
        let marker = if variant == selected {
            "●".green()
        } else {
            "○".dimmed()
        };
        println!("  {} {:<10} {}", marker, variant.as_str(), definition.name.bold());
        println!("    {}", definition.description.dimmed());
    }

    println!();
    println!("Resolved tokens ({}):", selected.as_str().green());
    print_styles(resolve_variant(section_type, Some(&selected), None));
}

fn print_styles(styles: &VariantStyles) {
    if let Some(layout) = styles.layout {
        println!("  layout      {}", layout);
    }
    println!("  spacing     {}", styles.spacing);
    println!("  background  {}", styles.background);
    println!("  headline    {}", styles.typography.headline);
    println!("  body        {}", styles.typography.body);
    for (label, token) in [("card", styles.card), ("icon", styles.icon), ("animation", styles.animation)] {
        if let Some(token) = token {
            println!("  {:<11} {}", label, token);
        }
    }
    for (key, token) in styles.special {
        println!("  {:<11} {}", key, token);
    }
}
