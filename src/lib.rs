//! Site password policies for derived passwords.
//!
//! A password page derives a full-entropy secret per site. Many sites reject
//! such secrets: too long, symbols not allowed, a digit missing. This crate
//! rewrites the raw secret so it fits the site's rules, finds those rules for
//! well-known sites, and packs them into a shareable link.
//!
//! - **Normalization**: [`normalize`] reduces site text (`https://secure.chase.com/`)
//!   to a canonical [`SiteKey`] (`chase`)
//! - **Lookup**: [`PolicyStore`] maps keys and their aliases to a [`Policy`]
//! - **Enforcement**: [`transform`] rewrites a raw secret under a policy
//! - **Sharing**: [`encode`] and [`decode`] map a policy to and from query
//!   parameters
//!
//! # Core Types
//!
//! - [`Policy`]: length bounds and character class rules of a site
//! - [`Secret<T>`]: Wrapper that redacts generated passwords in logs/output
//! - [`SecretPair`]: Raw secret kept next to the password derived from it
//! - [`QueryParams`]: Ordered share-link parameters
//!
//! # Examples
//!
//! ```
//! use pwdhash_policy::{decode, encode, normalize, transform, PolicyStore, QueryParams};
//!
//! let key = normalize("www.bankofamerica.com");
//! assert_eq!(key.as_str(), "bankofamerica");
//!
//! let policy = PolicyStore::global().lookup(key.as_str()).expect("known site");
//! let derived = transform("q7#xv", policy);
//! assert!(derived.chars().count() >= 8);
//! assert!(derived.chars().any(|c| c.is_ascii_uppercase()));
//!
//! let link = encode(policy, "www.bankofamerica.com", None).to_query_string();
//! assert_eq!(&decode(&QueryParams::parse(&link)), policy);
//! ```
//!
//! Nothing here performs I/O, blocks or keeps mutable state. The global store
//! is built once and only read afterwards.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod codec;
mod derive;
mod engine;
mod error;
mod normalize;
mod policy;
mod secret;
mod sites;
mod store;

#[cfg(test)]
mod test_utils;

pub use codec::{
    decode, decode_site, decode_strict, encode, encode_into, QueryParams, MAX_DECODED_LENGTH,
    PARAM_HINT,
    PARAM_KEYWORD, PARAM_MAX, PARAM_MIN, PARAM_NO_SYMBOLS, PARAM_REQUIRE_LOWERCASE,
    PARAM_REQUIRE_NUMBER, PARAM_REQUIRE_SYMBOL, PARAM_REQUIRE_UPPERCASE, PARAM_SITE,
};
pub use derive::{derive_for_site, derive_with, policy_for_site};
pub use engine::{
    enforce_classes, filter_symbols, is_feasible, required_type_count, shape_length, transform,
    FALLBACK_TAG,
};
pub use error::{DecodeError, DecodeErrorKind};
pub use normalize::{normalize, SiteKey, STRIPPED_LABELS, STRIPPED_SUFFIXES};
pub use policy::{CharClass, Policy};
pub use secret::{Secret, SecretPair};
pub use sites::{site, SitePolicy, SITE_ALIASES, SITE_POLICIES};
pub use store::{lookup, PolicyStore};
