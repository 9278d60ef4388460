use anyhow::Result;
use colored::Colorize;
use pagekit_schema::{SectionType, VariantSectionType};

/// List the section library
pub fn sections() -> Result<()> {
    println!("{}", "📚 Section library".bright_blue().bold());
    println!();

    for section_type in SectionType::ALL {
        let styled = if VariantSectionType::from_section_type(section_type).is_some() {
            "3 variants".green()
        } else {
            "fixed style".dimmed()
        };
        println!(
            "  {:<20} {:<14} {}",
            section_type.as_str().bright_white(),
            section_type.label(),
            styled
        );
    }

    Ok(())
}
