//! Per-type section markup.
//!
//! Every known section is wrapped in
//! `<section data-section-id=".." data-section-type=".." class="<background> <spacing>">`
//! with an inner container; the variant's typography tokens go on headings
//! and body copy. Content the author left empty falls back to [`defaults`].
//!
//! Live data (funded deals, state volumes) and form submission are wired up
//! client side, so those sections render a container with `data-*` options.
//!
//! [`defaults`]: crate::defaults

use crate::compiler::{class_attr, classes, escape_html, Context};
use crate::defaults;
use pagekit_schema::{
    CardStyle, CtaBannerConfig, CustomContentConfig, FaqConfig, FaqLayout,
    FeatureHighlightsConfig, FeatureLayout, HeroConfig, HeroVariant, LeadFormConfig,
    LoanProductsConfig, PageSection, RecentlyFundedConfig, SectionConfig, StateMapConfig,
    StatsBarConfig, TestimonialsConfig, TestimonialsLayout, TrustIndicatorsConfig,
    VariantStyles, resolve_section_styles,
};
use tracing::{debug, warn};

pub(crate) fn compile_section(section: &PageSection, ctx: &mut Context) {
    let styles = resolve_section_styles(section.section_type(), None, ctx.variants);
    debug!(section_id = %section.id, section_type = section.type_name(), "Compiling section");

    match &section.config {
        SectionConfig::Hero(config) => compile_hero(section, config, styles, ctx),
        SectionConfig::TrustIndicators(config) => {
            compile_trust_indicators(section, config, styles, ctx)
        }
        SectionConfig::LoanProducts(config) => compile_loan_products(section, config, styles, ctx),
        SectionConfig::Testimonials(config) => compile_testimonials(section, config, styles, ctx),
        SectionConfig::Faq(config) => compile_faq(section, config, styles, ctx),
        SectionConfig::FeatureHighlights(config) => {
            compile_feature_highlights(section, config, styles, ctx)
        }
        SectionConfig::CtaBanner(config) => compile_cta_banner(section, config, styles, ctx),
        SectionConfig::LeadForm(config) => compile_lead_form(section, config, styles, ctx),
        SectionConfig::RecentlyFunded(config) => {
            compile_recently_funded(section, config, styles, ctx)
        }
        SectionConfig::StateMap(config) => compile_state_map(section, config, styles, ctx),
        SectionConfig::CustomContent(config) => compile_custom_content(section, config, ctx),
        SectionConfig::StatsBar(config) => compile_stats_bar(section, config, styles, ctx),
        SectionConfig::Unknown { type_name, .. } => {
            warn!(section_id = %section.id, section_type = %type_name, "Unknown section type");
            compile_placeholder(section, type_name, "coming soon", ctx);
        }
        SectionConfig::Invalid { error, .. } => {
            warn!(section_id = %section.id, section_type = section.type_name(), error = %error, "Invalid section config");
            compile_placeholder(section, section.type_name(), "could not be displayed", ctx);
        }
    }
}

fn open_section(section: &PageSection, class: &str, style: Option<String>, ctx: &mut Context) {
    let style = style
        .filter(|style| !style.is_empty())
        .map(|style| format!(" style=\"{}\"", escape_html(&style)))
        .unwrap_or_default();

    ctx.open(&format!(
        "<section data-section-id=\"{}\" data-section-type=\"{}\"{}{}>",
        escape_html(&section.id),
        escape_html(section.type_name()),
        class_attr(class),
        style,
    ));
}

fn close_section(ctx: &mut Context) {
    ctx.close("section");
}

fn open_container(styles: &VariantStyles, ctx: &mut Context) {
    ctx.open(&format!(
        "<div{}>",
        class_attr(&classes(&["container mx-auto px-4", styles.layout.unwrap_or("")]))
    ));
}

fn section_class(styles: &VariantStyles) -> String {
    classes(&[styles.background, styles.spacing])
}

fn text_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    match value.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => fallback,
    }
}

fn link(href: &str, class: &str, text: &str, ctx: &mut Context) {
    ctx.add_line(&format!(
        "<a href=\"{}\"{}>{}</a>",
        escape_html(href),
        class_attr(class),
        escape_html(text),
    ));
}

fn compile_hero(section: &PageSection, config: &HeroConfig, styles: &VariantStyles, ctx: &mut Context) {
    let variant = match config.variant.unwrap_or(HeroVariant::Carousel) {
        HeroVariant::Carousel => "carousel",
        HeroVariant::Static => "static",
        HeroVariant::Video => "video",
        HeroVariant::Split => "split",
    };

    open_section(
        section,
        &classes(&[&format!("hero hero-{}", variant), &section_class(styles)]),
        None,
        ctx,
    );
    open_container(styles, ctx);

    ctx.element(
        "h1",
        styles.typography.headline,
        text_or(&config.headline, defaults::HERO_HEADLINE),
    );
    ctx.element(
        "p",
        styles.typography.body,
        text_or(&config.subheadline, defaults::HERO_SUBHEADLINE),
    );
    link(
        text_or(&config.cta_link, defaults::QUOTE_LINK),
        "btn btn-primary",
        text_or(&config.cta_text, defaults::HERO_CTA_TEXT),
        ctx,
    );

    if config.show_funded_deals.unwrap_or(true) && variant == "carousel" {
        ctx.add_line("<div class=\"hero-funded-deals\" data-funded-deals=\"carousel\"></div>");
    }

    ctx.close("div");
    close_section(ctx);
}

fn compile_trust_indicators(
    section: &PageSection,
    config: &TrustIndicatorsConfig,
    styles: &VariantStyles,
    ctx: &mut Context,
) {
    let stats: Vec<(&str, &str)> = if config.custom_stats.is_empty() {
        let gates = [
            config.show_total_funded,
            config.show_active_loans,
            config.show_years_in_business,
            config.show_states_served,
        ];
        defaults::TRUST_STATS
            .iter()
            .zip(gates)
            .filter(|(_, shown)| *shown != Some(false))
            .map(|(stat, _)| *stat)
            .collect()
    } else {
        config
            .custom_stats
            .iter()
            .map(|stat| (stat.value.as_str(), stat.label.as_str()))
            .collect()
    };

    // Every default stat switched off and nothing custom: render nothing
    if stats.is_empty() {
        debug!(section_id = %section.id, "Trust strip has no stats");
        return;
    }

    open_section(section, &classes(&["trust-indicators", &section_class(styles)]), None, ctx);
    open_container(styles, ctx);
    ctx.open("<dl class=\"trust-stats\">");
    for (value, label) in stats {
        ctx.open(&format!("<div{}>", class_attr(&classes(&["trust-stat", styles.card.unwrap_or("")]))));
        ctx.element("dt", styles.typography.headline, value);
        ctx.element("dd", styles.typography.body, label);
        ctx.close("div");
    }
    ctx.close("dl");
    ctx.close("div");
    close_section(ctx);
}

fn compile_loan_products(
    section: &PageSection,
    config: &LoanProductsConfig,
    styles: &VariantStyles,
    ctx: &mut Context,
) {
    let card_style = match config.card_style.unwrap_or(CardStyle::Default) {
        CardStyle::Default => "default",
        CardStyle::Compact => "compact",
        CardStyle::Detailed => "detailed",
    };

    open_section(section, &classes(&["loan-products", &section_class(styles)]), None, ctx);
    open_container(styles, ctx);

    ctx.element(
        "h2",
        styles.typography.headline,
        text_or(&config.custom_title, defaults::LOAN_PRODUCTS_TITLE),
    );
    ctx.element(
        "p",
        styles.typography.body,
        text_or(&config.custom_description, defaults::LOAN_PRODUCTS_DESCRIPTION),
    );

    ctx.open(&format!("<div class=\"loan-product-grid\" data-card-style=\"{}\">", card_style));
    for product in &defaults::LOAN_PRODUCTS {
        let shown = match product.key {
            "dscr" => config.show_dscr,
            "fixflip" => config.show_fix_flip,
            _ => config.show_construction,
        };
        if shown == Some(false) {
            continue;
        }

        ctx.open(&format!(
            "<article data-product=\"{}\"{}>",
            product.key,
            class_attr(&classes(&["loan-product", styles.card.unwrap_or("")]))
        ));
        ctx.element("h3", "", product.title);
        if card_style != "compact" {
            ctx.element("p", styles.typography.body, product.description);
        }
        link(product.link, "loan-product-link", "Learn More", ctx);
        ctx.close("article");
    }
    ctx.close("div");

    ctx.close("div");
    close_section(ctx);
}

fn compile_testimonials(
    section: &PageSection,
    config: &TestimonialsConfig,
    styles: &VariantStyles,
    ctx: &mut Context,
) {
    // (name, role, quote, rating, location)
    let testimonials: Vec<(&str, Option<&str>, &str, Option<f64>, Option<&str>)> =
        if config.testimonials.is_empty() {
            defaults::TESTIMONIALS
                .iter()
                .map(|(name, role, quote)| (*name, Some(*role), *quote, Some(5.0), None))
                .collect()
        } else {
            config
                .testimonials
                .iter()
                .map(|t| {
                    (
                        t.name.as_str(),
                        t.role.as_deref(),
                        t.quote.as_str(),
                        t.rating,
                        t.location.as_deref(),
                    )
                })
                .collect()
        };

    let layout = match config.layout.unwrap_or(TestimonialsLayout::Carousel) {
        TestimonialsLayout::Carousel => "carousel",
        TestimonialsLayout::Grid => "grid",
        TestimonialsLayout::List => "list",
    };
    let show_ratings = config.show_ratings.unwrap_or(true);

    open_section(section, &classes(&["testimonials", &section_class(styles)]), None, ctx);
    open_container(styles, ctx);
    ctx.element("h2", styles.typography.headline, defaults::TESTIMONIALS_TITLE);

    ctx.open(&format!("<div class=\"testimonial-list testimonials-{}\">", layout));
    for (name, role, quote, rating, location) in testimonials {
        ctx.open(&format!(
            "<figure{}>",
            class_attr(&classes(&["testimonial", styles.card.unwrap_or("")]))
        ));
        if show_ratings {
            if let Some(rating) = rating.filter(|r| r.is_finite()) {
                let rating = rating.clamp(0.0, 5.0);
                ctx.add_line(&format!(
                    "<div class=\"rating\" aria-label=\"{} out of 5 stars\">{}</div>",
                    rating,
                    "★".repeat(rating.floor() as usize)
                ));
            }
        }
        ctx.element("blockquote", styles.typography.body, quote);
        ctx.open("<figcaption>");
        ctx.element("span", "testimonial-name", name);
        if let Some(role) = role {
            ctx.element("span", "testimonial-role", role);
        }
        if let Some(location) = location {
            ctx.element("span", "testimonial-location", location);
        }
        ctx.close("figcaption");
        ctx.close("figure");
    }
    ctx.close("div");

    ctx.close("div");
    close_section(ctx);
}

fn compile_faq(section: &PageSection, config: &FaqConfig, styles: &VariantStyles, ctx: &mut Context) {
    let items: Vec<(&str, &str)> = if config.items.is_empty() {
        defaults::FAQS.to_vec()
    } else {
        config
            .items
            .iter()
            .map(|item| (item.question.as_str(), item.answer.as_str()))
            .collect()
    };
    let layout = config.layout.unwrap_or(FaqLayout::Accordion);

    open_section(section, &classes(&["faq", &section_class(styles)]), None, ctx);
    open_container(styles, ctx);

    ctx.element("h2", styles.typography.headline, text_or(&config.title, defaults::FAQ_TITLE));
    if let Some(description) = config.description.as_deref().filter(|d| !d.is_empty()) {
        ctx.element("p", styles.typography.body, description);
    }

    match layout {
        FaqLayout::Accordion => {
            ctx.open("<div class=\"faq-accordion\">");
            for (question, answer) in items {
                ctx.open("<details class=\"faq-item\">");
                ctx.element("summary", "", question);
                ctx.element("p", styles.typography.body, answer);
                ctx.close("details");
            }
            ctx.close("div");
        }
        FaqLayout::TwoColumn => {
            ctx.open("<div class=\"faq-grid grid md:grid-cols-2 gap-6\">");
            for (question, answer) in items {
                ctx.open(&format!(
                    "<div{}>",
                    class_attr(&classes(&["faq-item", styles.card.unwrap_or("")]))
                ));
                ctx.element("h3", "", question);
                ctx.element("p", styles.typography.body, answer);
                ctx.close("div");
            }
            ctx.close("div");
        }
    }

    ctx.close("div");
    close_section(ctx);
}

fn compile_feature_highlights(
    section: &PageSection,
    config: &FeatureHighlightsConfig,
    styles: &VariantStyles,
    ctx: &mut Context,
) {
    let features: Vec<(&str, &str, &str)> = if config.features.is_empty() {
        defaults::FEATURES.to_vec()
    } else {
        config
            .features
            .iter()
            .map(|f| {
                (
                    f.icon.as_deref().unwrap_or(defaults::FEATURE_ICON),
                    f.title.as_str(),
                    f.description.as_str(),
                )
            })
            .collect()
    };

    let grid = match config.columns.unwrap_or(3) {
        2 => "md:grid-cols-2",
        4 => "md:grid-cols-2 lg:grid-cols-4",
        _ => "md:grid-cols-3",
    };
    let layout = match config.layout.unwrap_or(FeatureLayout::Grid) {
        FeatureLayout::Grid => "grid",
        FeatureLayout::List => "list",
        FeatureLayout::Cards => "cards",
    };
    let list_class = if layout == "list" {
        "feature-list space-y-4".to_string()
    } else {
        format!("feature-{} grid grid-cols-1 {} gap-6", layout, grid)
    };

    open_section(
        section,
        &classes(&["feature-highlights", &section_class(styles)]),
        None,
        ctx,
    );
    open_container(styles, ctx);
    ctx.element(
        "h2",
        styles.typography.headline,
        text_or(&config.title, defaults::FEATURES_TITLE),
    );

    ctx.open(&format!("<div class=\"{}\">", list_class));
    for (icon, title, description) in features {
        let card = if layout == "cards" { styles.card.unwrap_or("") } else { "" };
        ctx.open(&format!("<div{}>", class_attr(&classes(&["feature", card]))));
        ctx.add_line(&format!(
            "<span data-icon=\"{}\"{}></span>",
            escape_html(icon),
            class_attr(styles.icon.unwrap_or("feature-icon"))
        ));
        ctx.element("h3", "", title);
        ctx.element("p", styles.typography.body, description);
        ctx.close("div");
    }
    ctx.close("div");

    ctx.close("div");
    close_section(ctx);
}

fn compile_cta_banner(
    section: &PageSection,
    config: &CtaBannerConfig,
    styles: &VariantStyles,
    ctx: &mut Context,
) {
    let mut style = String::new();
    if let Some(color) = config.background_color.as_deref().filter(|c| !c.is_empty()) {
        style.push_str(&format!("background-color: {};", color));
    }
    if let Some(color) = config.text_color.as_deref().filter(|c| !c.is_empty()) {
        if !style.is_empty() {
            style.push(' ');
        }
        style.push_str(&format!("color: {};", color));
    }

    open_section(section, &classes(&["cta-banner", &section_class(styles)]), Some(style), ctx);
    open_container(styles, ctx);
    ctx.element(
        "h2",
        styles.typography.headline,
        text_or(&config.headline, defaults::CTA_HEADLINE),
    );
    ctx.element(
        "p",
        styles.typography.body,
        text_or(&config.description, defaults::CTA_DESCRIPTION),
    );
    link(
        text_or(&config.cta_link, defaults::QUOTE_LINK),
        "btn btn-primary",
        text_or(&config.cta_text, defaults::CTA_TEXT),
        ctx,
    );
    ctx.close("div");
    close_section(ctx);
}

fn form_field(name: &str, label: &str, input: &str, ctx: &mut Context) {
    ctx.open("<label class=\"form-field\">");
    ctx.element("span", "form-label", label);
    ctx.add_line(&format!("<input name=\"{}\" {}>", name, input));
    ctx.close("label");
}

fn compile_lead_form(
    section: &PageSection,
    config: &LeadFormConfig,
    styles: &VariantStyles,
    ctx: &mut Context,
) {
    let style = config
        .background_color
        .as_deref()
        .map(|color| format!("background-color: {};", color));

    open_section(section, &classes(&["lead-form", &section_class(styles)]), style, ctx);
    open_container(styles, ctx);
    ctx.element(
        "h2",
        styles.typography.headline,
        text_or(&config.title, defaults::LEAD_FORM_TITLE),
    );
    ctx.element(
        "p",
        styles.typography.body,
        text_or(&config.description, defaults::LEAD_FORM_DESCRIPTION),
    );

    ctx.open("<form data-testid=\"form-lead\" method=\"post\" action=\"/api/leads\">");
    form_field("name", "Full Name *", "type=\"text\" required placeholder=\"John Smith\"", ctx);
    form_field(
        "email",
        "Email *",
        "type=\"email\" required placeholder=\"john@example.com\"",
        ctx,
    );
    if config.show_phone != Some(false) {
        form_field("phone", "Phone *", "type=\"tel\" required placeholder=\"(555) 123-4567\"", ctx);
    }

    ctx.open("<label class=\"form-field\">");
    ctx.element("span", "form-label", "Loan Type *");
    ctx.open("<select name=\"loanType\" required>");
    for loan_type in ["DSCR", "Fix & Flip", "New Construction", "Hard Money", "Other"] {
        let label = if loan_type == "DSCR" { "DSCR Loan" } else { loan_type };
        ctx.add_line(&format!(
            "<option value=\"{}\">{}</option>",
            escape_html(loan_type),
            escape_html(label)
        ));
    }
    ctx.close("select");
    ctx.close("label");

    if config.show_loan_amount == Some(true) {
        form_field(
            "propertyValue",
            "Estimated Property Value",
            "type=\"text\" placeholder=\"$500,000\"",
            ctx,
        );
    }
    if config.show_property_type == Some(true) {
        ctx.open("<label class=\"form-field\">");
        ctx.element("span", "form-label", "Additional Details");
        ctx.add_line("<textarea name=\"message\" placeholder=\"Tell us about your project...\"></textarea>");
        ctx.close("label");
    }

    ctx.element(
        "button",
        "btn btn-primary",
        text_or(&config.cta_text, defaults::LEAD_FORM_CTA_TEXT),
    );
    ctx.close("form");

    ctx.close("div");
    close_section(ctx);
}

fn compile_recently_funded(
    section: &PageSection,
    config: &RecentlyFundedConfig,
    styles: &VariantStyles,
    ctx: &mut Context,
) {
    let max_items = config
        .max_items
        .filter(|n| *n > 0)
        .unwrap_or(defaults::RECENTLY_FUNDED_MAX_ITEMS);

    open_section(section, &classes(&["recently-funded", &section_class(styles)]), None, ctx);
    open_container(styles, ctx);
    ctx.element(
        "h2",
        styles.typography.headline,
        text_or(&config.title, defaults::RECENTLY_FUNDED_TITLE),
    );
    ctx.add_line(&format!(
        "<div class=\"funded-deals\" data-max-items=\"{}\" data-show-rate=\"{}\" data-show-close-time=\"{}\" data-auto-scroll=\"{}\"></div>",
        max_items,
        config.show_rate != Some(false),
        config.show_close_time != Some(false),
        config.auto_scroll != Some(false),
    ));
    ctx.close("div");
    close_section(ctx);
}

fn compile_state_map(
    section: &PageSection,
    config: &StateMapConfig,
    styles: &VariantStyles,
    ctx: &mut Context,
) {
    open_section(section, &classes(&["state-map", &section_class(styles)]), None, ctx);
    open_container(styles, ctx);
    ctx.element(
        "h2",
        styles.typography.headline,
        text_or(&config.title, defaults::STATE_MAP_TITLE),
    );
    if let Some(description) = config.description.as_deref().filter(|d| !d.is_empty()) {
        ctx.element("p", styles.typography.body, description);
    }
    ctx.add_line(&format!(
        "<div class=\"state-map-canvas\" data-show-loan-volume=\"{}\"></div>",
        config.show_loan_volume != Some(false)
    ));
    ctx.close("div");
    close_section(ctx);
}

/// Author-supplied markup goes out unescaped; only the wrapper is ours
fn compile_custom_content(section: &PageSection, config: &CustomContentConfig, ctx: &mut Context) {
    let style = format!(
        "padding-top: {}; padding-bottom: {};",
        text_or(&config.padding_top, defaults::CUSTOM_CONTENT_PADDING),
        text_or(&config.padding_bottom, defaults::CUSTOM_CONTENT_PADDING),
    );

    open_section(
        section,
        config.css_class.as_deref().unwrap_or(""),
        Some(style),
        ctx,
    );
    if let Some(html) = config.html_content.as_deref() {
        ctx.add_line(html);
    }
    close_section(ctx);
}

fn compile_stats_bar(
    section: &PageSection,
    config: &StatsBarConfig,
    styles: &VariantStyles,
    ctx: &mut Context,
) {
    // (value, label, prefix, suffix)
    let stats: Vec<(&str, &str, &str, &str)> = if config.stats.is_empty() {
        defaults::STATS.to_vec()
    } else {
        config
            .stats
            .iter()
            .map(|stat| {
                (
                    stat.value.as_str(),
                    stat.label.as_str(),
                    stat.prefix.as_deref().unwrap_or(""),
                    stat.suffix.as_deref().unwrap_or(""),
                )
            })
            .collect()
    };
    let style = config
        .background_color
        .as_deref()
        .map(|color| format!("background-color: {};", color));

    open_section(section, &classes(&["stats-bar", &section_class(styles)]), style, ctx);
    open_container(styles, ctx);
    ctx.open("<div class=\"stats\">");
    for (value, label, prefix, suffix) in stats {
        ctx.open("<div class=\"stat\">");
        ctx.element(
            "span",
            &classes(&["stat-value", styles.typography.headline]),
            &format!("{}{}{}", prefix, value, suffix),
        );
        ctx.element("span", &classes(&["stat-label", styles.typography.body]), label);
        ctx.close("div");
    }
    ctx.close("div");
    ctx.close("div");
    close_section(ctx);
}

fn compile_placeholder(section: &PageSection, type_name: &str, status: &str, ctx: &mut Context) {
    let type_name = escape_html(type_name);
    ctx.open(&format!(
        "<div data-testid=\"section-placeholder-{}\" data-section-id=\"{}\" class=\"py-12 text-center text-muted-foreground\">",
        type_name,
        escape_html(&section.id),
    ));
    ctx.add_line(&format!("<p>Section type \"{}\" {}</p>", type_name, status));
    ctx.close("div");
}
