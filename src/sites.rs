//! Built-in table of known site password rules.
//!
//! Rows are written with `const fn` builders so the table lives in static
//! memory; [`crate::PolicyStore`] turns it into [`Policy`] values once.

use crate::policy::Policy;

/// One row of a site table: a canonical key and its rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SitePolicy {
    key: &'static str,
    min: Option<u32>,
    max: Option<u32>,
    no_sym: bool,
    req_sym: bool,
    req_num: bool,
    req_cap: bool,
    req_lower: bool,
    hint: Option<&'static str>,
}

/// Starts a row for `key` with no rules.
pub const fn site(key: &'static str) -> SitePolicy {
    SitePolicy {
        key,
        min: None,
        max: None,
        no_sym: false,
        req_sym: false,
        req_num: false,
        req_cap: false,
        req_lower: false,
        hint: None,
    }
}

impl SitePolicy {
    /// Minimum length.
    pub const fn min(mut self, min: u32) -> Self {
        self.min = Some(min);
        self
    }

    /// Maximum length.
    pub const fn max(mut self, max: u32) -> Self {
        self.max = Some(max);
        self
    }

    /// Symbols are not accepted.
    pub const fn no_sym(mut self) -> Self {
        self.no_sym = true;
        self
    }

    /// A symbol is required.
    pub const fn req_sym(mut self) -> Self {
        self.req_sym = true;
        self
    }

    /// A digit is required.
    pub const fn req_num(mut self) -> Self {
        self.req_num = true;
        self
    }

    /// An uppercase letter is required.
    pub const fn req_cap(mut self) -> Self {
        self.req_cap = true;
        self
    }

    /// A lowercase letter is required.
    pub const fn req_lower(mut self) -> Self {
        self.req_lower = true;
        self
    }

    /// Human-readable summary shown next to the form.
    pub const fn hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    /// The canonical key of this row.
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Builds the [`Policy`] this row describes.
    pub fn to_policy(&self) -> Policy {
        Policy::new()
            .with_min(self.min)
            .with_max(self.max)
            .with_ban_symbols(self.no_sym)
            .with_require_symbol(self.req_sym)
            .with_require_number(self.req_num)
            .with_require_uppercase(self.req_cap)
            .with_require_lowercase(self.req_lower)
            .with_hint(self.hint.map(str::to_string))
    }
}

/// Known sites, keyed by canonical site key.
#[rustfmt::skip]
pub const SITE_POLICIES: &[SitePolicy] = &[
    // financial
    site("chase").max(32).no_sym().req_cap().req_num().hint("32 max, no symbols"),
    site("bankofamerica").min(8).max(20).req_cap().req_num().hint("8-20 chars"),
    site("bofa").min(8).max(20).req_cap().req_num().hint("8-20 chars"),
    site("wellsfargo").min(8).max(32).req_cap().req_num().req_sym().hint("8-32, symbol required"),
    site("paypal").min(8).max(20).req_cap().req_num().req_sym().hint("8-20, symbol required"),
    site("venmo").min(8).max(20).req_cap().req_num().req_sym().hint("8-20, symbol required"),
    site("fidelity").min(6).max(20).no_sym().hint("6-20, no symbols"),
    site("schwab").min(8).max(20).req_cap().req_num().hint("8-20 chars"),
    site("vanguard").min(8).max(20).req_cap().req_num().hint("8-20 chars"),
    site("capitalone").min(8).max(50).req_cap().req_num().req_sym().hint("8-50, symbol required"),
    site("americanexpress").min(8).max(20).req_cap().req_num().hint("8-20 chars"),
    site("amex").min(8).max(20).req_cap().req_num().hint("8-20 chars"),
    site("discover").min(8).max(32).req_cap().req_num().req_sym().hint("8-32, symbol required"),
    site("usbank").min(8).max(24).req_cap().req_num().hint("8-24 chars"),
    site("citibank").min(8).max(50).req_cap().req_num().hint("8-50 chars"),
    site("citi").min(8).max(50).req_cap().req_num().hint("8-50 chars"),

    // tech / big platforms
    site("apple").min(8).req_cap().req_num().hint("8+ chars"),
    site("icloud").min(8).req_cap().req_num().hint("8+ chars"),
    site("google").min(8).hint("8+ chars"),
    site("gmail").min(8).hint("8+ chars"),
    site("youtube").min(8).hint("8+ chars"),
    site("microsoft").min(8).req_cap().req_lower().req_num().req_sym().hint("8+, mixed case, num, symbol"),
    site("outlook").min(8).req_cap().req_lower().req_num().req_sym().hint("8+, mixed case, num, symbol"),
    site("live").min(8).req_cap().req_lower().req_num().req_sym().hint("8+, mixed case, num, symbol"),
    site("amazon").min(8).max(128).req_cap().req_num().hint("8-128 chars"),
    site("aws").min(8).max(128).req_cap().req_num().req_sym().hint("8-128, symbol required"),

    // social
    site("facebook").min(6).hint("6+ chars"),
    site("meta").min(6).hint("6+ chars"),
    site("instagram").min(6).hint("6+ chars"),
    site("twitter").min(8).hint("8+ chars"),
    site("x").min(8).hint("8+ chars"),
    site("linkedin").min(8).req_cap().req_num().req_sym().hint("8+, mixed requirements"),
    site("reddit").min(8).hint("8+ chars"),
    site("tiktok").min(8).max(20).req_cap().req_num().req_sym().hint("8-20, symbol required"),
    site("pinterest").min(6).hint("6+ chars"),
    site("snapchat").min(8).hint("8+ chars"),
    site("discord").min(8).max(72).hint("8-72 chars"),

    // streaming / entertainment
    site("netflix").min(4).max(60).hint("4-60 chars"),
    site("hulu").min(8).hint("8+ chars"),
    site("disneyplus").min(8).req_cap().req_num().req_sym().hint("8+, symbol required"),
    site("disney").min(8).req_cap().req_num().req_sym().hint("8+, symbol required"),
    site("hbomax").min(8).max(16).req_cap().req_num().hint("8-16 chars"),
    site("max").min(8).max(16).req_cap().req_num().hint("8-16 chars"),
    site("spotify").min(8).hint("8+ chars"),
    site("twitch").min(8).max(72).hint("8-72 chars"),
    site("steam").min(8).req_cap().req_num().hint("8+, upper and number"),
    site("playstation").min(8).max(30).req_cap().req_num().hint("8-30 chars"),
    site("psn").min(8).max(30).req_cap().req_num().hint("8-30 chars"),
    site("xbox").min(8).req_cap().req_num().req_sym().hint("8+, symbol required"),
    site("epicgames").min(7).req_cap().req_num().req_sym().hint("7+, symbol required"),

    // shopping
    site("ebay").min(8).req_cap().req_num().req_sym().hint("8+, symbol required"),
    site("etsy").min(8).hint("8+ chars"),
    site("walmart").min(8).max(100).req_cap().req_num().hint("8-100 chars"),
    site("target").min(8).req_cap().req_num().hint("8+ chars"),
    site("costco").min(8).max(20).req_cap().req_num().hint("8-20 chars"),
    site("bestbuy").min(8).req_cap().req_num().hint("8+ chars"),
    site("homedepot").min(8).max(12).req_cap().req_num().hint("8-12 chars"),
    site("lowes").min(8).max(20).req_cap().req_num().hint("8-20 chars"),

    // travel
    site("airbnb").min(8).hint("8+ chars"),
    site("expedia").min(8).req_cap().req_num().req_sym().hint("8+, symbol required"),
    site("booking").min(8).hint("8+ chars"),
    site("delta").min(8).max(20).req_cap().req_num().hint("8-20 chars"),
    site("united").min(8).max(32).req_cap().req_num().req_sym().hint("8-32, symbol required"),
    site("southwest").min(8).max(16).req_cap().req_num().hint("8-16 chars"),
    site("american").min(8).max(16).req_cap().req_num().hint("8-16 chars (airline)"),
    site("marriott").min(8).max(20).req_cap().req_num().req_sym().hint("8-20, symbol required"),
    site("hilton").min(8).max(32).req_cap().req_num().hint("8-32 chars"),

    // productivity / work
    site("dropbox").min(8).hint("8+ chars"),
    site("slack").min(8).hint("8+ chars"),
    site("zoom").min(8).max(99).req_cap().req_lower().req_num().hint("8-99, upper+lower+num"),
    site("github").min(8).req_num().hint("8+, include number"),
    site("gitlab").min(8).hint("8+ chars"),
    site("bitbucket").min(8).hint("8+ chars"),
    site("atlassian").min(8).hint("8+ chars"),
    site("jira").min(8).hint("8+ chars"),
    site("notion").min(8).hint("8+ chars"),
    site("trello").min(8).hint("8+ chars"),
    site("asana").min(8).hint("8+ chars"),
    site("evernote").min(8).hint("8+ chars"),
    site("todoist").min(8).hint("8+ chars"),

    // utilities / services
    site("comcast").min(8).max(16).req_cap().req_num().hint("8-16 chars"),
    site("xfinity").min(8).max(16).req_cap().req_num().hint("8-16 chars"),
    site("att").min(8).max(24).req_cap().req_num().hint("8-24 chars"),
    site("verizon").min(8).max(20).req_cap().req_num().hint("8-20 chars"),
    site("tmobile").min(8).max(32).req_cap().req_num().hint("8-32 chars"),

    // food / delivery
    site("doordash").min(8).hint("8+ chars"),
    site("ubereats").min(8).hint("8+ chars"),
    site("uber").min(8).hint("8+ chars"),
    site("grubhub").min(8).req_cap().req_num().hint("8+, upper and number"),
    site("instacart").min(8).hint("8+ chars"),
    site("starbucks").min(8).max(25).req_cap().req_num().hint("8-25 chars"),
    site("chipotle").min(8).max(25).req_cap().req_num().req_sym().hint("8-25, symbol required"),

    // news / media
    site("nytimes").min(8).hint("8+ chars"),
    site("washingtonpost").min(8).hint("8+ chars"),
    site("wsj").min(8).req_cap().req_num().hint("8+, upper and number"),
    site("medium").min(8).hint("8+ chars"),
    site("substack").min(8).hint("8+ chars"),

    // education
    site("coursera").min(8).req_cap().req_num().req_sym().hint("8+, symbol required"),
    site("udemy").min(6).hint("6+ chars"),
    site("khanacademy").min(8).hint("8+ chars"),
    site("duolingo").min(8).hint("8+ chars"),
];

/// Alternate keys for known sites: `(canonical, aliases)`.
///
/// An alias that is already a key of [`SITE_POLICIES`] keeps its own row.
pub const SITE_ALIASES: &[(&str, &[&str])] = &[
    ("bankofamerica", &["boa", "bofa"]),
    ("capitalone", &["capital-one"]),
    ("americanexpress", &["amex"]),
    ("disneyplus", &["disney+"]),
    ("hbomax", &["max"]),
    ("playstation", &["psn", "ps"]),
    ("comcast", &["xfinity"]),
    ("nytimes", &["newyorktimes", "nyt"]),
];
