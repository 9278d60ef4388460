//! Built-in style variant definitions, three per section type.

use crate::variants::{VariantDefinition, VariantStyles};

const fn def(
    name: &'static str,
    description: &'static str,
    styles: VariantStyles,
) -> VariantDefinition {
    VariantDefinition {
        name,
        description,
        styles,
    }
}

const fn styles(
    layout: &'static str,
    spacing: &'static str,
    headline: &'static str,
    body: &'static str,
    background: &'static str,
) -> VariantStyles {
    VariantStyles::new(layout, spacing, headline, body, background)
}

pub(crate) static HERO: [VariantDefinition; 3] = [
    def(
        "Clean & Minimal",
        "Large centered headline with generous whitespace, single prominent CTA",
        styles(
            "centered single-column max-w-4xl mx-auto",
            "py-24 md:py-32",
            "text-4xl md:text-5xl lg:text-6xl font-light tracking-tight",
            "text-lg md:text-xl text-muted-foreground max-w-2xl mx-auto",
            "bg-background",
        )
        .animation("fade-in"),
    ),
    def(
        "Bold & Dynamic",
        "Split-screen layout with strong color overlays and animated backgrounds",
        styles(
            "grid md:grid-cols-2 gap-8 items-center",
            "py-20 md:py-28",
            "text-4xl md:text-5xl lg:text-6xl font-extrabold tracking-tight",
            "text-lg md:text-xl",
            "bg-gradient-to-br from-primary/10 via-background to-secondary/10",
        )
        .animation("slide-in-left")
        .special(&[("overlay", "bg-black/60"), ("pattern", "opacity-20")]),
    ),
    def(
        "Professional & Structured",
        "Traditional layout with photography background and clear hierarchy",
        styles(
            "max-w-3xl",
            "py-16 md:py-24",
            "text-3xl md:text-4xl lg:text-5xl font-semibold",
            "text-base md:text-lg text-muted-foreground",
            "bg-muted/50",
        )
        .special(&[("overlay", "bg-black/50"), ("trustBadges", "inline-flex")]),
    ),
];

pub(crate) static FEATURE_HIGHLIGHTS: [VariantDefinition; 3] = [
    def(
        "Card Grid - Clean",
        "3-column grid with subtle card borders and minimal shadows",
        styles(
            "grid md:grid-cols-3 gap-6",
            "py-16 md:py-20",
            "text-xl font-semibold",
            "text-sm text-muted-foreground",
            "bg-background",
        )
        .card("bg-card border border-border rounded-lg p-6 hover:-translate-y-1 transition-transform")
        .icon("w-10 h-10 text-primary"),
    ),
    def(
        "Highlight Boxes - Bold",
        "Alternating left/right layout with accent colors and large icons",
        styles(
            "space-y-12 md:space-y-16",
            "py-12 md:py-16",
            "text-2xl md:text-3xl font-bold",
            "text-lg",
            "bg-gradient-to-r from-primary/5 to-secondary/5",
        )
        .icon("w-16 h-16 text-primary")
        .special(&[("alternating", "even:flex-row-reverse"), ("pattern", "opacity-10")]),
    ),
    def(
        "List-Based - Professional",
        "Vertical list with checkmarks, grouped by category",
        styles(
            "max-w-3xl mx-auto space-y-4",
            "py-8 md:py-12",
            "text-lg font-semibold",
            "text-sm text-muted-foreground",
            "bg-background",
        )
        .icon("w-5 h-5 text-green-500")
        .special(&[("dividers", "border-b border-border")]),
    ),
];

pub(crate) static TESTIMONIALS: [VariantDefinition; 3] = [
    def(
        "Minimal Cards",
        "3-column grid of simple quote cards with avatars",
        styles(
            "grid md:grid-cols-3 gap-6",
            "py-16 md:py-20",
            "text-sm font-semibold",
            "text-base italic",
            "bg-background",
        )
        .card("bg-card border border-border rounded-lg p-6")
        .special(&[("avatar", "w-12 h-12 rounded-full"), ("stars", "text-amber-400")]),
    ),
    def(
        "Featured Carousel",
        "Large single testimonial with rotation and navigation",
        styles(
            "max-w-4xl mx-auto text-center",
            "py-20 md:py-28",
            "text-lg font-bold",
            "text-xl md:text-2xl",
            "bg-gradient-to-b from-muted/30 to-background",
        )
        .animation("fade-in")
        .special(&[
            ("avatar", "w-20 h-20 md:w-24 md:h-24 rounded-full mx-auto"),
            ("navigation", "flex justify-center gap-2 mt-8"),
        ]),
    ),
    def(
        "Grid with Metrics",
        "Compact grid with integrated loan metrics and badges",
        styles(
            "grid md:grid-cols-2 lg:grid-cols-3 gap-4",
            "py-12 md:py-16",
            "text-xs font-semibold",
            "text-sm",
            "bg-muted/30",
        )
        .card("bg-card rounded-md p-4")
        .special(&[
            ("avatar", "w-10 h-10 rounded-full"),
            ("metrics", "text-lg font-bold text-primary"),
            ("badge", "rounded-full px-2 py-0.5 text-xs bg-primary/10 text-primary"),
        ]),
    ),
];

pub(crate) static CTA_BANNER: [VariantDefinition; 3] = [
    def(
        "Centered Minimal",
        "Single centered headline with one prominent button",
        styles(
            "max-w-2xl mx-auto text-center",
            "py-16 md:py-24",
            "text-3xl md:text-4xl font-bold text-white",
            "text-lg text-white/80",
            "bg-gradient-to-r from-primary to-primary/80",
        )
        .special(&[("button", "bg-white text-primary hover:bg-white/90 px-8 py-4 text-lg")]),
    ),
    def(
        "Split with Visual",
        "50/50 split with message and visual element",
        styles(
            "grid md:grid-cols-2 gap-8 md:gap-12 items-center",
            "py-20 md:py-28",
            "text-3xl font-bold",
            "text-lg",
            "bg-gradient-to-br from-secondary/10 to-primary/10",
        )
        .special(&[("visual", "w-80 h-80"), ("buttons", "flex gap-4")]),
    ),
    def(
        "Form-Integrated",
        "Inline lead capture form with benefits list",
        styles(
            "grid md:grid-cols-5 gap-8 items-start",
            "py-12 md:py-16",
            "text-2xl font-semibold",
            "text-base",
            "bg-card border border-border rounded-lg p-8",
        )
        .special(&[
            ("benefitsList", "md:col-span-3 space-y-3"),
            ("form", "md:col-span-2"),
            ("checkmark", "text-green-500 w-5 h-5"),
        ]),
    ),
];

pub(crate) static STATS_BAR: [VariantDefinition; 3] = [
    def(
        "Horizontal Minimal",
        "4-column inline stats with large numbers",
        styles(
            "grid grid-cols-2 md:grid-cols-4 gap-4 text-center",
            "py-8 md:py-12",
            "text-3xl md:text-4xl font-bold text-primary",
            "text-sm text-muted-foreground",
            "bg-card border-y border-border",
        ),
    ),
    def(
        "Badge Grid",
        "Logo-style badges or certification icons",
        styles(
            "flex flex-wrap justify-center gap-6 md:gap-8",
            "py-6 md:py-8",
            "",
            "text-xs text-muted-foreground text-center",
            "bg-muted/50",
        )
        .special(&[(
            "badge",
            "w-20 h-20 md:w-24 md:h-24 opacity-70 hover:opacity-100 transition-opacity",
        )]),
    ),
    def(
        "Feature Stats",
        "2-row layout with icons and detailed descriptions",
        styles(
            "grid grid-cols-2 md:grid-cols-3 gap-4",
            "py-4",
            "text-2xl font-bold",
            "text-sm font-semibold",
            "bg-card rounded-lg shadow-sm",
        )
        .icon("w-8 h-8 text-primary")
        .special(&[("description", "text-xs text-muted-foreground")]),
    ),
];

pub(crate) static TRUST_INDICATORS: [VariantDefinition; 3] = [
    def(
        "Clean Row",
        "Horizontal badges layout with even spacing",
        styles(
            "flex flex-wrap justify-center items-center gap-6 md:gap-8",
            "py-6 md:py-8",
            "",
            "",
            "bg-muted/30",
        )
        .special(&[(
            "logo",
            "h-8 md:h-10 opacity-60 hover:opacity-100 transition-opacity grayscale hover:grayscale-0",
        )]),
    ),
    def(
        "Featured Badges",
        "Large badges with descriptions",
        styles(
            "grid grid-cols-2 md:grid-cols-4 gap-6",
            "py-8 md:py-12",
            "text-sm font-semibold",
            "text-xs text-muted-foreground",
            "bg-gradient-to-r from-primary/5 to-transparent",
        )
        .card("text-center p-4")
        .special(&[("logo", "h-12 mx-auto mb-2")]),
    ),
    def(
        "Compact Strip",
        "Single-line compact display",
        styles(
            "flex items-center justify-center gap-4 overflow-x-auto",
            "py-4",
            "",
            "text-xs text-muted-foreground whitespace-nowrap",
            "bg-muted/20 border-y border-border",
        )
        .special(&[("logo", "h-6 opacity-50"), ("separator", "w-px h-4 bg-border")]),
    ),
];

pub(crate) static PROCESS_STEPS: [VariantDefinition; 3] = [
    def(
        "Timeline Vertical",
        "Vertical timeline with connecting line and numbered circles",
        styles(
            "max-w-2xl mx-auto relative",
            "py-12 md:py-16",
            "text-lg font-semibold",
            "text-base text-muted-foreground",
            "bg-background",
        )
        .special(&[
            ("timeline", "absolute left-6 top-0 bottom-0 w-0.5 bg-border"),
            (
                "number",
                "w-12 h-12 rounded-full bg-primary text-primary-foreground flex items-center justify-center font-bold",
            ),
            ("step", "pl-20 pb-8 relative"),
        ]),
    ),
    def(
        "Card Grid Horizontal",
        "3-4 column grid with large step numbers and arrows",
        styles(
            "grid md:grid-cols-3 lg:grid-cols-4 gap-4",
            "py-12 md:py-16",
            "text-xl font-semibold",
            "text-sm text-muted-foreground",
            "bg-background",
        )
        .card("bg-card rounded-lg p-6 relative")
        .icon("w-12 h-12 text-primary")
        .special(&[
            ("number", "text-6xl font-extrabold text-primary/10 absolute top-2 right-4"),
            (
                "arrow",
                "hidden md:block absolute -right-4 top-1/2 -translate-y-1/2 text-muted-foreground",
            ),
        ]),
    ),
    def(
        "Accordion Checklist",
        "Expandable accordion with checkmarks and progress indicator",
        styles(
            "max-w-3xl mx-auto",
            "py-8 md:py-12",
            "text-lg font-semibold",
            "text-sm text-muted-foreground",
            "bg-background",
        )
        .special(&[
            ("progress", "h-2 bg-muted rounded-full overflow-hidden mb-6"),
            ("progressFill", "h-full bg-primary transition-all"),
            ("item", "border-b border-border py-4 hover:bg-muted/50 transition-colors"),
            ("checkmark", "w-5 h-5 text-green-500"),
        ]),
    ),
];

pub(crate) static FAQ: [VariantDefinition; 3] = [
    def(
        "Simple Accordion",
        "Clean accordion with +/- icons and smooth animations",
        styles(
            "max-w-3xl mx-auto",
            "py-12 md:py-16",
            "text-base font-semibold",
            "text-sm text-muted-foreground",
            "bg-background",
        )
        .special(&[
            ("item", "border-b border-border"),
            ("trigger", "py-4 hover:bg-muted/50 transition-colors"),
            ("icon", "w-5 h-5 transition-transform"),
        ]),
    ),
    def(
        "Category Tabs",
        "Tabbed interface by category with 2-column grid",
        styles(
            "max-w-4xl mx-auto",
            "py-12 md:py-16",
            "text-sm font-semibold",
            "text-xs text-muted-foreground",
            "bg-background",
        )
        .card("bg-card rounded-md p-4")
        .special(&[
            ("tabs", "flex gap-2 mb-6 overflow-x-auto pb-2"),
            ("tab", "px-4 py-2 rounded-full text-sm font-medium"),
            ("tabActive", "bg-primary text-primary-foreground"),
            ("grid", "grid md:grid-cols-2 gap-4"),
            ("icon", "w-6 h-6 text-primary"),
        ]),
    ),
    def(
        "Split Panel",
        "Question list on left, answer panel on right with sticky scroll",
        styles(
            "grid md:grid-cols-10 gap-8",
            "py-8 md:py-12",
            "text-xl font-bold",
            "text-base",
            "bg-background",
        )
        .special(&[
            ("leftPanel", "md:col-span-3 space-y-1"),
            ("rightPanel", "md:col-span-7 bg-card rounded-lg p-8"),
            (
                "question",
                "text-sm py-2 px-3 rounded-md cursor-pointer hover:bg-muted transition-colors",
            ),
            ("questionActive", "bg-primary text-primary-foreground"),
        ]),
    ),
];

pub(crate) static LOAN_PRODUCTS: [VariantDefinition; 3] = [
    def(
        "Clean Cards",
        "Simple product cards with subtle styling",
        styles(
            "grid md:grid-cols-3 gap-6",
            "py-12 md:py-16",
            "text-xl font-semibold",
            "text-sm text-muted-foreground",
            "bg-background",
        )
        .card("bg-card border border-border rounded-lg p-6 hover:shadow-md transition-shadow"),
    ),
    def(
        "Featured Products",
        "Bold product cards with gradient accents",
        styles(
            "grid md:grid-cols-3 gap-8",
            "py-16 md:py-24",
            "text-2xl font-bold",
            "text-base",
            "bg-gradient-to-b from-muted/30 to-background",
        )
        .card("bg-card rounded-xl p-8 shadow-lg hover:-translate-y-2 transition-transform")
        .special(&[(
            "badge",
            "bg-primary text-primary-foreground px-3 py-1 rounded-full text-xs font-medium",
        )]),
    ),
    def(
        "Comparison Cards",
        "Structured cards with feature lists",
        styles(
            "grid md:grid-cols-3 gap-4",
            "py-8 md:py-12",
            "text-lg font-semibold",
            "text-sm",
            "bg-muted/20",
        )
        .card("bg-card border border-border rounded-md p-6")
        .special(&[
            ("featureList", "space-y-2 mt-4"),
            ("checkmark", "w-4 h-4 text-green-500 inline-block mr-2"),
        ]),
    ),
];

pub(crate) static PRODUCT_COMPARISON: [VariantDefinition; 3] = [
    def(
        "Clean Table",
        "Simple comparison table with minimal styling",
        styles(
            "max-w-5xl mx-auto overflow-x-auto",
            "py-12 md:py-16",
            "text-sm font-medium",
            "text-sm",
            "bg-background",
        )
        .special(&[
            ("table", "w-full border-collapse"),
            ("header", "bg-muted/50 border-b border-border"),
            ("row", "border-b border-border hover:bg-muted/30 transition-colors"),
            ("cell", "py-3 px-4 text-left"),
        ]),
    ),
    def(
        "Feature Matrix",
        "Bold matrix with checkmarks and highlighted differences",
        styles(
            "max-w-6xl mx-auto",
            "py-16 md:py-20",
            "text-base font-bold",
            "text-sm",
            "bg-gradient-to-b from-muted/20 to-background",
        )
        .special(&[
            ("table", "w-full"),
            ("header", "bg-card sticky top-0"),
            ("featured", "ring-2 ring-primary"),
            ("check", "w-5 h-5 text-green-500"),
            ("x", "w-5 h-5 text-muted-foreground/30"),
        ]),
    ),
    def(
        "Side-by-Side",
        "Professional side-by-side comparison cards",
        styles(
            "grid md:grid-cols-3 gap-6",
            "py-8 md:py-12",
            "text-lg font-semibold text-center",
            "text-sm",
            "bg-background",
        )
        .card("bg-card border border-border rounded-lg overflow-hidden")
        .special(&[
            ("header", "bg-muted/50 p-4 border-b border-border"),
            ("body", "p-6"),
            ("featureRow", "py-2 border-b border-border last:border-0"),
        ]),
    ),
];
