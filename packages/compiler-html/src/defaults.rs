//! Copy shown when an author leaves a section's content empty

pub(crate) const HERO_HEADLINE: &str = "Funding Solutions.";
pub(crate) const HERO_SUBHEADLINE: &str = "For Investors. By Investors.";
pub(crate) const HERO_CTA_TEXT: &str = "Apply Now";
pub(crate) const QUOTE_LINK: &str = "/get-quote";

/// (value, label), gated in this order by `showTotalFunded`,
/// `showActiveLoans`, `showYearsInBusiness` and `showStatesServed`
pub(crate) const TRUST_STATS: [(&str, &str); 4] = [
    ("$500M+", "Loans Funded"),
    ("1,500+", "Investors Served"),
    ("48 hrs", "Fastest Closing"),
    ("48", "States + DC Licensed"),
];

pub(crate) const LOAN_PRODUCTS_TITLE: &str = "Our Loan Products";
pub(crate) const LOAN_PRODUCTS_DESCRIPTION: &str =
    "Flexible financing solutions for every stage of your investment journey";

pub(crate) struct LoanProduct {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

pub(crate) const LOAN_PRODUCTS: [LoanProduct; 3] = [
    LoanProduct {
        key: "dscr",
        title: "DSCR Loans",
        description: "Rental financing with no W2 required",
        link: "/dscr-loans",
    },
    LoanProduct {
        key: "fixflip",
        title: "Fix & Flip",
        description: "Fast bridge financing for flip projects",
        link: "/fix-flip",
    },
    LoanProduct {
        key: "construction",
        title: "New Construction",
        description: "Ground-up construction financing",
        link: "/new-construction",
    },
];

pub(crate) const TESTIMONIALS_TITLE: &str = "What Our Investors Say";

/// (name, role, quote); all rated 5
pub(crate) const TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "Michael Chen",
        "Fix & Flip Investor",
        "Closed my hard money loan in 6 days. The team was incredibly responsive and made the process seamless. Already on my third property with them!",
    ),
    (
        "Sarah Johnson",
        "Rental Property Owner",
        "No tax returns, no W2s needed. Got approved for a DSCR loan based purely on my property's rental income. Game changer for my portfolio!",
    ),
    (
        "David Rodriguez",
        "Multi-Family Investor",
        "Financed 3 apartment buildings in 6 months. Their rates are competitive and the loan officers really understand the investment business.",
    ),
];

pub(crate) const FAQ_TITLE: &str = "Frequently Asked Questions";

pub(crate) const FAQS: [(&str, &str); 6] = [
    (
        "What is a DSCR loan?",
        "A DSCR (Debt Service Coverage Ratio) loan is a type of mortgage that qualifies borrowers based on the property's rental income rather than personal income. This makes it ideal for real estate investors who may not have traditional W-2 income documentation.",
    ),
    (
        "How quickly can I close on a loan?",
        "Our fastest closings have been completed in as little as 48 hours for bridge loans. DSCR loans typically close in 2-3 weeks. The timeline depends on property type, loan amount, and how quickly we receive required documentation.",
    ),
    (
        "What credit score do I need?",
        "Minimum credit scores vary by loan type. DSCR loans require a minimum 620 FICO, while Fix & Flip loans may be available with scores as low as 660. Higher credit scores typically qualify for better rates.",
    ),
    (
        "Do you require tax returns?",
        "No! Our DSCR and bridge loan programs do not require personal tax returns or W-2s. We qualify you based on the property's income potential and your real estate investment experience.",
    ),
    (
        "What states do you lend in?",
        "We are licensed to lend in 48 states plus Washington D.C. Contact us to confirm availability in your specific area.",
    ),
    (
        "Can I finance renovation costs?",
        "Yes! Our Fix & Flip and Construction loans include renovation financing. We fund up to 100% of renovation costs and release funds through a draw process as work is completed.",
    ),
];

pub(crate) const FEATURES_TITLE: &str = "Why Investors Choose Us";
pub(crate) const FEATURE_ICON: &str = "CheckCircle2";

/// (icon, title, description)
pub(crate) const FEATURES: [(&str, &str, &str); 6] = [
    ("Clock", "Fast Closings", "Close in as few as 5 days with our streamlined process"),
    ("Shield", "No Prepayment Penalty", "Pay off early with no fees or penalties"),
    ("Users", "Dedicated Support", "Personal loan specialist assigned to your deal"),
    ("DollarSign", "Competitive Rates", "Industry-leading rates starting at 5.75%"),
    ("Zap", "Same-Day Approvals", "Quick decisions to keep your deals moving"),
    ("Target", "Flexible Terms", "Customized loan structures for your needs"),
];

pub(crate) const CTA_HEADLINE: &str = "Ready to Get Started?";
pub(crate) const CTA_DESCRIPTION: &str = "Get your personalized rate quote in minutes";
pub(crate) const CTA_TEXT: &str = "Get Your Quote";

pub(crate) const LEAD_FORM_TITLE: &str = "Get Your Free Quote";
pub(crate) const LEAD_FORM_DESCRIPTION: &str =
    "Fill out the form below and we'll get back to you within 24 hours.";
pub(crate) const LEAD_FORM_CTA_TEXT: &str = "Submit";

pub(crate) const RECENTLY_FUNDED_TITLE: &str = "Recently Funded Deals";
pub(crate) const RECENTLY_FUNDED_MAX_ITEMS: u32 = 8;

pub(crate) const STATE_MAP_TITLE: &str = "Where We Lend";

pub(crate) const CUSTOM_CONTENT_PADDING: &str = "3rem";

/// (value, label, prefix, suffix)
pub(crate) const STATS: [(&str, &str, &str, &str); 4] = [
    ("500", "Loans Closed Annually", "", "+"),
    ("250", "Million Funded", "$", "M"),
    ("7", "Day Average Close", "", " Days"),
    ("47", "States Served", "", ""),
];
