//! Share-link codec: a [`Policy`] and its site text as query parameters.
//!
//! Parameter names are fixed: `site`, `nosym`, `reqnum`, `reqsym`, `reqcap`,
//! `reqlower`, `min`, `max` and `hint`. Flags are written as `t` when set and
//! removed otherwise; lengths are written in decimal and removed when unset.
//! Parameters with other names pass through untouched.
//!
//! ```
//! use pwdhash_policy::{decode, decode_site, encode, Policy, QueryParams};
//!
//! let policy = Policy::new().max_length(32).ban_symbols().require_uppercase();
//! let query = encode(&policy, "chase.com", None).to_query_string();
//! assert_eq!(query, "site=chase.com&nosym=t&reqcap=t&max=32");
//!
//! let params = QueryParams::parse(&query);
//! assert_eq!(decode(&params), policy);
//! assert_eq!(decode_site(&params).as_deref(), Some("chase.com"));
//! ```

use std::fmt;

use crate::error::{DecodeError, DecodeErrorKind};
use crate::policy::Policy;

/// Site text parameter.
pub const PARAM_SITE: &str = "site";
/// Legacy spelling of [`PARAM_SITE`], read but never written.
pub const PARAM_KEYWORD: &str = "keyword";
/// Ban symbols flag.
pub const PARAM_NO_SYMBOLS: &str = "nosym";
/// Require number flag.
pub const PARAM_REQUIRE_NUMBER: &str = "reqnum";
/// Require symbol flag.
pub const PARAM_REQUIRE_SYMBOL: &str = "reqsym";
/// Require uppercase flag.
pub const PARAM_REQUIRE_UPPERCASE: &str = "reqcap";
/// Require lowercase flag.
pub const PARAM_REQUIRE_LOWERCASE: &str = "reqlower";
/// Minimum length.
pub const PARAM_MIN: &str = "min";
/// Maximum length.
pub const PARAM_MAX: &str = "max";
/// Free-text hint.
pub const PARAM_HINT: &str = "hint";

/// Largest `min` or `max` a share link can carry. Larger values clamp to it.
///
/// Lengths come from untrusted links, and a huge minimum would make
/// [`transform`](crate::transform) double the secret up to that size.
pub const MAX_DECODED_LENGTH: u32 = 4096;

const FLAG_SET: &str = "t";

/// An ordered list of query parameters.
///
/// Names may repeat; [`get`](Self::get) returns the first value and
/// [`set`](Self::set) collapses repeats into one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    /// The first value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Sets `name` to `value`.
    ///
    /// The first existing entry keeps its position, later repeats are
    /// dropped, and a missing name is appended.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        let mut found = false;
        self.pairs.retain_mut(|(k, v)| {
            if k.as_str() != name {
                return true;
            }
            if found {
                return false;
            }
            v.clone_from(&value);
            found = true;
            true
        });
        if !found {
            self.pairs.push((name.to_string(), value));
        }
    }

    /// Removes every entry named `name`.
    pub fn remove(&mut self, name: &str) {
        self.pairs.retain(|(k, _)| k != name);
    }

    /// Returns `true` if `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == name)
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serializes the entries as an `application/x-www-form-urlencoded`
    /// string, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// Encodes `policy` and `site` into a fresh parameter list.
///
/// `hint` overrides the policy's own hint when given.
pub fn encode(policy: &Policy, site: &str, hint: Option<&str>) -> QueryParams {
    let mut params = QueryParams::new();
    encode_into(&mut params, policy, site, hint);
    params
}

/// Writes `policy` and `site` into an existing parameter list.
///
/// Unknown parameters are kept. An empty `site` leaves any existing site
/// parameter in place. Flags that are off, unset lengths and empty hints
/// are removed.
pub fn encode_into(params: &mut QueryParams, policy: &Policy, site: &str, hint: Option<&str>) {
    if !site.is_empty() {
        params.set(PARAM_SITE, site);
    }

    set_flag(params, PARAM_NO_SYMBOLS, policy.bans_symbols());
    set_flag(params, PARAM_REQUIRE_NUMBER, policy.requires_number());
    set_flag(params, PARAM_REQUIRE_SYMBOL, policy.requires_symbol());
    set_flag(params, PARAM_REQUIRE_UPPERCASE, policy.requires_uppercase());
    set_flag(params, PARAM_REQUIRE_LOWERCASE, policy.requires_lowercase());
    set_length(params, PARAM_MIN, policy.min());
    set_length(params, PARAM_MAX, policy.max());

    match hint.or(policy.hint_text()).filter(|h| !h.is_empty()) {
        Some(hint) => params.set(PARAM_HINT, hint),
        None => params.remove(PARAM_HINT),
    }
}

fn set_flag(params: &mut QueryParams, name: &str, on: bool) {
    if on {
        params.set(name, FLAG_SET);
    } else {
        params.remove(name);
    }
}

fn set_length(params: &mut QueryParams, name: &str, value: Option<u32>) {
    match value {
        Some(n) => params.set(name, n.to_string()),
        None => params.remove(name),
    }
}

/// Decodes a policy from share-link parameters.
///
/// Missing flags are off. Missing, malformed, negative or non-finite lengths
/// are unset. Never fails; see [`decode_strict`] to learn about dropped
/// values.
pub fn decode(params: &QueryParams) -> Policy {
    let length = |name: &'static str| match read_length(params, name) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(param = err.param(), reason = %err.kind(), "dropping malformed length");
            None
        }
    };

    let min = length(PARAM_MIN);
    let max = length(PARAM_MAX);
    decode_flags(params).with_min(min).with_max(max)
}

/// Decodes a policy, reporting the first malformed length parameter.
///
/// # Errors
///
/// Returns [`DecodeError`] if `min` or `max` is present and non-empty but
/// not a finite, non-negative number.
pub fn decode_strict(params: &QueryParams) -> Result<Policy, DecodeError> {
    let min = read_length(params, PARAM_MIN)?;
    let max = read_length(params, PARAM_MAX)?;
    Ok(decode_flags(params).with_min(min).with_max(max))
}

/// The site text of a share link, from `site` or the legacy `keyword`.
pub fn decode_site(params: &QueryParams) -> Option<String> {
    [PARAM_SITE, PARAM_KEYWORD]
        .into_iter()
        .filter_map(|name| params.get(name))
        .find(|site| !site.is_empty())
        .map(str::to_string)
}

fn decode_flags(params: &QueryParams) -> Policy {
    let flag = |name: &str| params.get(name) == Some(FLAG_SET);

    Policy::new()
        .with_ban_symbols(flag(PARAM_NO_SYMBOLS))
        .with_require_number(flag(PARAM_REQUIRE_NUMBER))
        .with_require_symbol(flag(PARAM_REQUIRE_SYMBOL))
        .with_require_uppercase(flag(PARAM_REQUIRE_UPPERCASE))
        .with_require_lowercase(flag(PARAM_REQUIRE_LOWERCASE))
        .with_hint(params.get(PARAM_HINT).map(str::to_string))
}

fn read_length(params: &QueryParams, name: &'static str) -> Result<Option<u32>, DecodeError> {
    let Some(raw) = params.get(name).map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    parse_length(raw)
        .map(Some)
        .map_err(|kind| DecodeError::new(name, kind))
}

/// Parses a length: a decimal integer, or a finite non-negative decimal
/// truncated toward zero. Values past [`MAX_DECODED_LENGTH`] clamp to it.
fn parse_length(raw: &str) -> Result<u32, DecodeErrorKind> {
    if let Ok(n) = raw.parse::<u64>() {
        return Ok(n.min(u64::from(MAX_DECODED_LENGTH)) as u32);
    }

    let value: f64 = raw.parse().map_err(|_| DecodeErrorKind::NotANumber)?;
    if !value.is_finite() {
        return Err(DecodeErrorKind::NonFinite);
    }
    if value < 0.0 {
        return Err(DecodeErrorKind::Negative);
    }
    Ok(value.min(f64::from(MAX_DECODED_LENGTH)) as u32)
}
