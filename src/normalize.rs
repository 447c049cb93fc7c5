//! Maps free-text site input to the key used for policy lookup.
//!
//! Users type a domain, paste a URL or enter a display name. All three are
//! reduced by the same fixed pipeline, applied once and in order:
//!
//! 1. lowercase and trim
//! 2. strip a leading `http://` or `https://`
//! 3. strip one leading label from [`STRIPPED_LABELS`]
//! 4. drop everything from the first `/`
//! 5. strip one trailing suffix from [`STRIPPED_SUFFIXES`]
//! 6. drop every remaining non-alphanumeric character
//!
//! ```
//! use pwdhash_policy::normalize;
//!
//! assert_eq!(normalize("secure.chase.com").as_str(), "chase");
//! assert_eq!(normalize("https://www.bankofamerica.com/login").as_str(), "bankofamerica");
//! assert_eq!(normalize("Capital One").as_str(), "capitalone");
//! assert!(normalize("   ").is_empty());
//! ```

use std::fmt;

/// Schemes removed by step 2.
const SCHEMES: [&str; 2] = ["https://", "http://"];

/// Leading host labels removed by step 3. At most one is removed.
pub const STRIPPED_LABELS: [&str; 8] = [
    "www", "secure", "login", "auth", "account", "my", "signin", "signon",
];

/// Trailing suffixes removed by step 5, in priority order.
///
/// The first suffix that matches a whole trailing label sequence wins, so
/// compound suffixes such as `co.uk` are listed before their last label.
pub const STRIPPED_SUFFIXES: [&str; 40] = [
    // compound
    "co.uk", "org.uk", "ac.uk", "gov.uk", "me.uk", "com.au", "net.au", "org.au", "co.nz",
    "co.jp", "co.in", "co.za", "com.br", "com.mx", "com.cn", "com.sg",
    // generic
    "com", "net", "org", "edu", "gov", "mil", "io", "co", "app", "dev", "me", "tv", "info",
    "biz",
    // country
    "us", "uk", "ca", "de", "fr", "jp", "au", "in", "nz", "eu",
];

/// A canonical site key.
///
/// Only produced by [`normalize`]. The key is lowercase ASCII alphanumerics,
/// or empty when the input held nothing usable. An empty key never matches
/// a stored policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SiteKey(String);

impl SiteKey {
    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the empty key.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the key, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for SiteKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Reduces site text to its canonical key.
pub fn normalize(input: &str) -> SiteKey {
    let lowered = input.trim().to_lowercase();

    let host = strip_scheme(&lowered);
    let host = strip_label(host);
    let host = host.split('/').next().unwrap_or_default();
    let host = strip_suffix(host);

    SiteKey(host.chars().filter(|c| c.is_ascii_alphanumeric()).collect())
}

fn strip_scheme(s: &str) -> &str {
    SCHEMES
        .iter()
        .find_map(|scheme| s.strip_prefix(scheme))
        .unwrap_or(s)
}

fn strip_label(s: &str) -> &str {
    STRIPPED_LABELS
        .iter()
        .find_map(|label| s.strip_prefix(label)?.strip_prefix('.'))
        .unwrap_or(s)
}

fn strip_suffix(s: &str) -> &str {
    STRIPPED_SUFFIXES
        .iter()
        .find_map(|suffix| s.strip_suffix(suffix)?.strip_suffix('.'))
        .unwrap_or(s)
}
