use std::collections::HashMap;
use std::sync::OnceLock;

use crate::normalize::normalize;
use crate::policy::Policy;
use crate::sites::{SitePolicy, SITE_ALIASES, SITE_POLICIES};

/// Read-only map from canonical site key to [`Policy`].
///
/// Built once from a literal table and an alias table, then never mutated.
/// Every alias is bound to the same `Policy` as its canonical key, so
/// lookups through an alias return the identical reference. An alias that
/// is already a key of its own keeps its own entry.
///
/// # Examples
///
/// ```
/// use pwdhash_policy::PolicyStore;
///
/// let store = PolicyStore::global();
///
/// let chase = store.lookup("chase").expect("known site");
/// assert_eq!(chase.max(), Some(32));
/// assert!(chase.bans_symbols());
///
/// let boa = store.lookup("boa").expect("alias");
/// let bank = store.lookup("bankofamerica").expect("known site");
/// assert!(std::ptr::eq(boa, bank));
///
/// assert!(store.lookup("").is_none());
/// ```
#[derive(Debug)]
pub struct PolicyStore {
    policies: Vec<Policy>,
    index: HashMap<String, usize>,
}

impl PolicyStore {
    /// Builds a store from the built-in site tables.
    pub fn builtin() -> Self {
        Self::from_tables(SITE_POLICIES, SITE_ALIASES)
    }

    /// Builds a store from caller-supplied tables.
    ///
    /// For duplicate literal keys the first row wins. Aliases are bound only
    /// when they are not already keys and their canonical key exists.
    pub fn from_tables(entries: &[SitePolicy], aliases: &[(&str, &[&str])]) -> Self {
        let mut policies = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());

        for entry in entries {
            if index.contains_key(entry.key()) {
                continue;
            }
            index.insert(entry.key().to_string(), policies.len());
            policies.push(entry.to_policy());
        }

        let mut bound = 0usize;
        for (canonical, alternates) in aliases {
            let Some(&slot) = index.get(*canonical) else {
                continue;
            };
            for alias in alternates.iter() {
                if !index.contains_key(*alias) {
                    index.insert((*alias).to_string(), slot);
                    bound += 1;
                }
            }
        }

        tracing::debug!(
            sites = policies.len(),
            aliases = bound,
            "built site policy store"
        );

        Self { policies, index }
    }

    /// The process-wide store over the built-in tables.
    ///
    /// Built on first use and shared for the rest of the process.
    pub fn global() -> &'static PolicyStore {
        static STORE: OnceLock<PolicyStore> = OnceLock::new();
        STORE.get_or_init(PolicyStore::builtin)
    }

    /// Exact-match lookup of a canonical key.
    ///
    /// Misses, including the empty key, return `None`.
    pub fn lookup(&self, key: &str) -> Option<&Policy> {
        if key.is_empty() {
            return None;
        }
        let found = self.index.get(key).map(|&slot| &self.policies[slot]);
        tracing::debug!(key, hit = found.is_some(), "site policy lookup");
        found
    }

    /// Normalizes free-text site input and looks up the resulting key.
    pub fn lookup_site(&self, site_text: &str) -> Option<&Policy> {
        self.lookup(normalize(site_text).as_str())
    }

    /// Returns `true` if `key` resolves to a policy.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of keys, aliases included.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All keys, aliases included, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }
}

/// Looks up `key` in the process-wide store.
pub fn lookup(key: &str) -> Option<&'static Policy> {
    PolicyStore::global().lookup(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::site;

    #[test]
    fn chase_policy_matches_table() {
        let store = PolicyStore::builtin();
        let chase = store.lookup("chase").expect("chase is listed");

        assert_eq!(chase.max(), Some(32));
        assert_eq!(chase.min(), None);
        assert!(chase.bans_symbols());
        assert!(chase.requires_uppercase());
        assert!(chase.requires_number());
        assert!(!chase.requires_symbol());
        assert_eq!(chase.hint_text(), Some("32 max, no symbols"));
    }

    #[test]
    fn alias_shares_the_canonical_policy() {
        let store = PolicyStore::builtin();
        let canonical = store.lookup("bankofamerica").expect("listed");
        let alias = store.lookup("boa").expect("alias");

        assert!(std::ptr::eq(canonical, alias));
    }

    #[test]
    fn existing_key_is_not_replaced_by_alias() {
        let store = PolicyStore::builtin();
        let bofa = store.lookup("bofa").expect("listed");
        let bank = store.lookup("bankofamerica").expect("listed");

        // same contents, but its own entry
        assert_eq!(bofa, bank);
        assert!(!std::ptr::eq(bofa, bank));

        let max = store.lookup("max").expect("listed");
        let hbomax = store.lookup("hbomax").expect("listed");
        assert!(!std::ptr::eq(max, hbomax));
    }

    #[test]
    fn aliases_outside_the_table_are_bound() {
        let store = PolicyStore::builtin();

        for (alias, canonical) in [
            ("capital-one", "capitalone"),
            ("disney+", "disneyplus"),
            ("ps", "playstation"),
            ("newyorktimes", "nytimes"),
            ("nyt", "nytimes"),
        ] {
            let a = store.lookup(alias).expect("alias bound");
            let c = store.lookup(canonical).expect("listed");
            assert!(std::ptr::eq(a, c), "{alias} should share {canonical}");
        }
    }

    #[test]
    fn miss_and_empty_key_return_none() {
        let store = PolicyStore::builtin();
        assert!(store.lookup("nosuchsite").is_none());
        assert!(store.lookup("").is_none());
        assert!(store.lookup("Chase").is_none());
    }

    #[test]
    fn lookup_site_normalizes_first() {
        let store = PolicyStore::builtin();
        let policy = store
            .lookup_site("https://secure.chase.com/web/auth")
            .expect("normalizes to chase");
        assert_eq!(policy.max(), Some(32));
        assert!(store.lookup_site("   ").is_none());
    }

    #[test]
    fn first_literal_row_wins() {
        let entries = [
            site("acme").min(6),
            site("acme").min(12),
            site("other").max(10),
        ];
        let store = PolicyStore::from_tables(&entries, &[]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.lookup("acme").and_then(Policy::min), Some(6));
    }

    #[test]
    fn alias_to_missing_canonical_is_skipped() {
        let entries = [site("acme").min(6)];
        let aliases: &[(&str, &[&str])] = &[("ghost", &["spook"]), ("acme", &["acmecorp"])];
        let store = PolicyStore::from_tables(&entries, aliases);

        assert!(!store.contains_key("spook"));
        assert!(store.contains_key("acmecorp"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn first_alias_binding_wins() {
        let entries = [site("one").min(1), site("two").min(2)];
        let aliases: &[(&str, &[&str])] = &[("one", &["shared"]), ("two", &["shared"])];
        let store = PolicyStore::from_tables(&entries, aliases);

        assert_eq!(store.lookup("shared").and_then(Policy::min), Some(1));
    }

    #[test]
    fn global_store_is_built_once() {
        let a = PolicyStore::global();
        let b = PolicyStore::global();
        assert!(std::ptr::eq(a, b));
        assert!(!a.is_empty());
        assert!(lookup("chase").is_some());
    }

    #[test]
    fn keys_include_aliases() {
        let store = PolicyStore::builtin();
        let keys: Vec<&str> = store.keys().collect();
        assert!(keys.contains(&"boa"));
        assert!(keys.contains(&"chase"));
        assert_eq!(keys.len(), store.len());
    }
}
