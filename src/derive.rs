//! End-to-end derivation for a site.
//!
//! Ties the pieces together the way a password page uses them:
//! 1. the site text is normalized to a [`SiteKey`](crate::SiteKey)
//! 2. the key is looked up in a [`PolicyStore`]
//! 3. the raw secret is rewritten under the policy found, if any
//!
//! ```
//! use pwdhash_policy::derive_for_site;
//!
//! // chase.com: max 32, no symbols, uppercase and number required
//! let derived = derive_for_site("xk#9a-mq", "https://secure.chase.com");
//! assert_eq!(derived, "Xk9amq");
//!
//! // unknown sites keep the raw secret
//! assert_eq!(derive_for_site("xk#9a-mq", "example.org"), "xk#9a-mq");
//! ```

use crate::engine::transform;
use crate::normalize::normalize;
use crate::policy::Policy;
use crate::store::PolicyStore;

/// Finds the policy for free-text site input in the process-wide store.
pub fn policy_for_site(site_text: &str) -> Option<&'static Policy> {
    PolicyStore::global().lookup_site(site_text)
}

/// Derives the password for `site_text` from `raw` using the built-in table.
///
/// Sites without a known policy get `raw` back unchanged.
pub fn derive_for_site(raw: &str, site_text: &str) -> String {
    derive_with(PolicyStore::global(), raw, site_text)
}

/// Like [`derive_for_site`], against a caller-provided store.
pub fn derive_with(store: &PolicyStore, raw: &str, site_text: &str) -> String {
    let key = normalize(site_text);
    match store.lookup(key.as_str()) {
        Some(policy) => transform(raw, policy),
        None => {
            tracing::debug!(%key, "no site policy, keeping raw secret");
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::site;

    #[test]
    fn known_site_is_rewritten() {
        // bankofamerica: 8-20, uppercase and number
        let derived = derive_for_site("abcdef", "www.bankofamerica.com");
        assert_eq!(derived, "Abcdefabcdef2");
    }

    #[test]
    fn alias_resolves_through_normalizer() {
        assert_eq!(
            derive_for_site("abcdef", "boa"),
            derive_for_site("abcdef", "bankofamerica.com")
        );
    }

    #[test]
    fn unknown_and_empty_sites_keep_raw() {
        assert_eq!(derive_for_site("a#b", "nowhere.test"), "a#b");
        assert_eq!(derive_for_site("a#b", "  "), "a#b");
    }

    #[test]
    fn custom_store_is_used() {
        let store = PolicyStore::from_tables(&[site("acme").max(3)], &[]);
        assert_eq!(derive_with(&store, "abcdef", "login.acme.io"), "abc");
    }

    #[test]
    fn policy_for_site_uses_global_store() {
        let policy = policy_for_site("https://www.github.com/login").expect("github listed");
        assert!(policy.requires_number());
        assert_eq!(policy.min(), Some(8));
    }
}
