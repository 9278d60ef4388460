use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagekit_compiler_html::{compile_to_html, render_sections, CompileOptions};
use pagekit_schema::{PageLayout, PageSection, SectionConfig, SectionType, VariantsConfig};

fn every_section_type() -> Vec<PageSection> {
    SectionType::ALL
        .iter()
        .enumerate()
        .map(|(i, section_type)| {
            PageSection::new(format!("s{}", i), SectionConfig::default_for(*section_type))
                .with_order(i as i32)
        })
        .collect()
}

fn render_single_section(c: &mut Criterion) {
    let sections = vec![PageSection::new(
        "faq",
        SectionConfig::default_for(SectionType::Faq),
    )];
    let options = CompileOptions::default();

    c.bench_function("render_single_section", |b| {
        b.iter(|| render_sections(black_box(&sections), &options))
    });
}

fn render_full_page(c: &mut Criterion) {
    let layout = PageLayout::new("home", "Home", every_section_type());
    let options = CompileOptions {
        document: true,
        variants: Some(VariantsConfig::for_template("summit-capital")),
        ..Default::default()
    };

    c.bench_function("render_full_page", |b| {
        b.iter(|| compile_to_html(black_box(&layout), &options))
    });
}

fn render_large_page(c: &mut Criterion) {
    let mut sections = Vec::new();
    for _ in 0..20 {
        sections.extend(every_section_type());
    }
    // Reverse order so the sort does real work
    let len = sections.len();
    for (i, section) in sections.iter_mut().enumerate() {
        section.order = (len - i) as i32;
    }
    let options = CompileOptions {
        pretty: false,
        ..Default::default()
    };

    c.bench_function("render_large_page", |b| {
        b.iter(|| render_sections(black_box(&sections), &options))
    });
}

criterion_group!(
    benches,
    render_single_section,
    render_full_page,
    render_large_page
);
criterion_main!(benches);
