use crate::{compile_page, compile_to_html, render_sections, CompileError, CompileOptions};
use pagekit_schema::{
    CustomContentConfig, PageLayout, PageSection, SectionConfig, SectionType, StyleVariant,
    VariantSectionType, VariantsConfig,
};
use std::sync::Arc;

fn sections_from_json(source: &str) -> Vec<PageSection> {
    serde_json::from_str(source).expect("Failed to parse sections")
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("{:?} not found in:\n{}", needle, html))
}

#[test]
fn test_visible_sections_sorted_by_order() {
    let sections = sections_from_json(
        r#"[
            { "id": "a", "type": "faq", "order": 2, "isVisible": true, "config": {} },
            { "id": "b", "type": "hero", "order": 0, "isVisible": false, "config": {} },
            { "id": "c", "type": "cta_banner", "order": 1, "isVisible": true, "config": {} }
        ]"#,
    );

    let html = render_sections(&sections, &CompileOptions::default());

    println!("Generated HTML:\n{}", html);

    assert_eq!(html.matches("<section ").count(), 2);
    assert!(position(&html, "data-section-type=\"cta_banner\"") < position(&html, "data-section-type=\"faq\""));
    assert!(!html.contains("data-section-type=\"hero\""));
    assert!(!html.contains("section-placeholder"));
}

#[test]
fn test_unknown_type_renders_placeholder() {
    let sections = sections_from_json(
        r#"[{ "id": "x", "type": "unknown_type_xyz", "order": 0, "isVisible": true, "config": {} }]"#,
    );

    let html = render_sections(&sections, &CompileOptions::default());

    assert!(html.contains("data-testid=\"section-placeholder-unknown_type_xyz\""));
    assert!(html.contains("Section type \"unknown_type_xyz\" coming soon"));
}

#[test]
fn test_equal_orders_keep_input_order() {
    let sections = vec![
        PageSection::new("first", SectionConfig::default_for(SectionType::StateMap)),
        PageSection::new("second", SectionConfig::default_for(SectionType::LeadForm)),
    ];

    let html = render_sections(&sections, &CompileOptions::default());

    assert!(position(&html, "data-section-id=\"first\"") < position(&html, "data-section-id=\"second\""));
}

#[test]
fn test_renders_arc_sections() {
    let sections: Vec<Arc<PageSection>> = vec![Arc::new(PageSection::new(
        "stats",
        SectionConfig::default_for(SectionType::StatsBar),
    ))];

    let html = render_sections(&sections, &CompileOptions::default());

    assert!(html.contains("data-section-id=\"stats\""));
}

#[test]
fn test_every_section_type_renders() {
    let sections: Vec<PageSection> = SectionType::ALL
        .iter()
        .enumerate()
        .map(|(i, section_type)| {
            PageSection::new(
                format!("s{}", i),
                SectionConfig::default_for(*section_type),
            )
            .with_order(i as i32)
        })
        .collect();

    let html = render_sections(&sections, &CompileOptions::default());

    for section_type in SectionType::ALL {
        assert!(
            html.contains(&format!("data-section-type=\"{}\"", section_type)),
            "missing {}",
            section_type
        );
    }
    assert!(!html.contains("coming soon"));
}

#[test]
fn test_default_copy_fills_empty_config() {
    let sections = sections_from_json(
        r#"[
            { "id": "faq", "type": "faq" },
            { "id": "quotes", "type": "testimonials", "order": 1 },
            { "id": "stats", "type": "stats_bar", "order": 2 },
            { "id": "features", "type": "feature_highlights", "order": 3 }
        ]"#,
    );

    let html = render_sections(&sections, &CompileOptions::default());

    assert!(html.contains("Frequently Asked Questions"));
    assert!(html.contains("What is a DSCR loan?"));
    assert!(html.contains("Michael Chen"));
    assert!(html.contains("$250M"));
    assert!(html.contains("Why Investors Choose Us"));
    assert!(html.contains("Same-Day Approvals"));
}

#[test]
fn test_config_content_replaces_defaults() {
    let sections = sections_from_json(
        r#"[{
            "id": "faq",
            "type": "faq",
            "config": {
                "title": "Ask Us",
                "items": [{ "question": "Do you lend in Ohio?", "answer": "Yes." }],
                "layout": "two-column"
            }
        }]"#,
    );

    let html = render_sections(&sections, &CompileOptions::default());

    assert!(html.contains("Ask Us"));
    assert!(html.contains("Do you lend in Ohio?"));
    assert!(!html.contains("What is a DSCR loan?"));
    assert!(html.contains("faq-grid"));
    assert!(!html.contains("<details"));
}

#[test]
fn test_text_is_escaped() {
    let sections = sections_from_json(
        r#"[{
            "id": "cta",
            "type": "cta_banner",
            "config": { "headline": "<script>alert('x')</script>", "ctaLink": "/apply?a=1&b=2" }
        }]"#,
    );

    let html = render_sections(&sections, &CompileOptions::default());

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    assert!(html.contains("href=\"/apply?a=1&amp;b=2\""));
}

#[test]
fn test_custom_content_is_verbatim() {
    let sections = vec![PageSection::new(
        "custom",
        SectionConfig::CustomContent(CustomContentConfig {
            html_content: Some("<div class=\"promo\"><b>Rates</b> are down</div>".to_string()),
            css_class: Some("promo-wrap".to_string()),
            padding_top: Some("1rem".to_string()),
            ..Default::default()
        }),
    )];

    let html = render_sections(&sections, &CompileOptions::default());

    assert!(html.contains("<div class=\"promo\"><b>Rates</b> are down</div>"));
    assert!(html.contains("class=\"promo-wrap\""));
    assert!(html.contains("padding-top: 1rem; padding-bottom: 3rem;"));
}

#[test]
fn test_trust_indicators_respect_toggles() {
    let sections = sections_from_json(
        r#"[{
            "id": "trust",
            "type": "trust_indicators",
            "config": { "showTotalFunded": false, "showStatesServed": false }
        }]"#,
    );

    let html = render_sections(&sections, &CompileOptions::default());

    assert!(!html.contains("Loans Funded"));
    assert!(!html.contains("States + DC Licensed"));
    assert!(html.contains("Investors Served"));
}

#[test]
fn test_trust_indicators_with_nothing_to_show() {
    let sections = sections_from_json(
        r#"[{
            "id": "trust",
            "type": "trust_indicators",
            "config": {
                "showTotalFunded": false,
                "showActiveLoans": false,
                "showYearsInBusiness": false,
                "showStatesServed": false
            }
        }]"#,
    );

    let html = render_sections(&sections, &CompileOptions::default());

    assert!(html.is_empty());
}

#[test]
fn test_variant_tokens_applied() {
    let sections = vec![PageSection::new(
        "faq",
        SectionConfig::default_for(SectionType::Faq),
    )];

    let mut variants = VariantsConfig::new();
    variants.set(VariantSectionType::Faq, StyleVariant::A);
    let styles_a = pagekit_schema::resolve_variant(VariantSectionType::Faq, Some(&StyleVariant::A), None);

    let options = CompileOptions {
        variants: Some(variants),
        ..Default::default()
    };
    let html = render_sections(&sections, &options);

    assert!(html.contains(styles_a.spacing));
    assert!(html.contains(styles_a.typography.headline));
}

#[test]
fn test_page_variants_take_precedence() {
    let mut page_variants = VariantsConfig::new();
    page_variants.set(VariantSectionType::CtaBanner, StyleVariant::B);

    let mut layout = PageLayout::new(
        "home",
        "Home",
        vec![PageSection::new("cta", SectionConfig::default_for(SectionType::CtaBanner))],
    );
    layout.section_variants = Some(page_variants);

    let mut option_variants = VariantsConfig::new();
    option_variants.set(VariantSectionType::CtaBanner, StyleVariant::A);
    let options = CompileOptions {
        variants: Some(option_variants),
        ..Default::default()
    };

    let styles_b = pagekit_schema::resolve_variant(VariantSectionType::CtaBanner, Some(&StyleVariant::B), None);
    let html = compile_to_html(&layout, &options);

    assert!(html.contains(styles_b.background));
}

#[test]
fn test_compile_document() {
    let layout = PageLayout::new(
        "home",
        "Home & Garden",
        vec![PageSection::new("hero", SectionConfig::default_for(SectionType::Hero))],
    );
    let options = CompileOptions {
        document: true,
        ..Default::default()
    };

    let html = compile_to_html(&layout, &options);

    println!("Generated HTML:\n{}", html);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Home &amp; Garden</title>"));
    assert!(html.contains("    <main>\n      <section data-section-id=\"hero\""));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_compact_output() {
    let sections = vec![PageSection::new(
        "cta",
        SectionConfig::default_for(SectionType::CtaBanner),
    )];
    let options = CompileOptions {
        pretty: false,
        ..Default::default()
    };

    let html = render_sections(&sections, &options);

    assert!(!html.contains('\n'));
    assert!(html.starts_with("<section "));
    assert!(html.ends_with("</section>"));
}

#[test]
fn test_compile_page_reports_invalid_json() {
    let result = compile_page(r#"{ "id": "home", "name": "Home", "sections": [ "#, &CompileOptions::default());

    match result {
        Err(CompileError::InvalidPage(err)) => assert!(err.to_string().contains("JSON")),
        Ok(html) => panic!("expected an error, got {}", html),
    }
}

#[test]
fn test_bad_section_config_does_not_break_page() {
    let html = compile_page(
        r#"{
            "id": "home",
            "name": "Home",
            "sections": [
                { "id": "a", "type": "cta_banner", "order": 0, "config": { "headline": "Still here" } },
                { "id": "b", "type": "faq", "order": 1, "config": { "items": 3 } },
                { "id": "c", "type": "hero", "order": 2, "isVisible": false, "config": { "variant": "parallax" } },
                { "id": "d", "type": "stats_bar", "order": 3 }
            ]
        }"#,
        &CompileOptions::default(),
    )
    .unwrap();

    assert!(html.contains("Still here"));
    assert!(html.contains("data-section-id=\"d\""));
    assert!(html.contains("data-testid=\"section-placeholder-faq\""));
    assert!(html.contains("Section type \"faq\" could not be displayed"));
    assert!(!html.contains("data-section-id=\"c\""));

    let faq = position(&html, "section-placeholder-faq");
    assert!(position(&html, "Still here") < faq);
    assert!(faq < position(&html, "data-section-id=\"d\""));
}

#[test]
fn test_fractional_rating_fills_whole_stars() {
    let html = compile_page(
        r#"{
            "id": "home",
            "name": "Home",
            "sections": [
                { "id": "b", "type": "testimonials", "config": {
                    "testimonials": [{ "name": "Dana", "quote": "Fast close", "rating": 4.5 }]
                } }
            ]
        }"#,
        &CompileOptions::default(),
    )
    .unwrap();

    assert!(html.contains("aria-label=\"4.5 out of 5 stars\">★★★★</div>"));
    assert!(html.contains("Fast close"));
}
