use std::fmt;

use crate::engine::transform;
use crate::policy::Policy;

/// A wrapper that keeps generated passwords out of logs and debug output.
///
/// Both halves of a [`SecretPair`] are held in a `Secret<String>`. The
/// wrapped value can only be read through the explicit
/// [`expose_secret`](Self::expose_secret) method.
///
/// # Security Properties
///
/// - Does NOT implement `Deref`, `AsRef`, `Borrow`, `Clone`, or `Copy`
/// - Debug and Display output is always `[REDACTED]`
/// - No type information is leaked in formatted output
///
/// # Examples
///
/// ```
/// use pwdhash_policy::Secret;
///
/// let raw = Secret::new("Kj8#mQ2z".to_string());
///
/// assert_eq!(format!("{:?}", raw), "[REDACTED]");
/// assert_eq!(format!("{}", raw), "[REDACTED]");
/// assert_eq!(raw.expose_secret(), "Kj8#mQ2z");
/// ```
// Do NOT add Clone, Copy, or Default derives; they would let passwords be
// duplicated past the redaction boundary.
pub struct Secret<T> {
    inner: T,
}

impl<T> Secret<T> {
    /// Wraps a sensitive value.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Explicitly exposes the secret value.
    ///
    /// The name is deliberately loud; the result must not be logged.
    pub fn expose_secret(&self) -> &T {
        &self.inner
    }
}

impl<T> fmt::Debug for Secret<T> {
    // MUST unconditionally print "[REDACTED]" (CWE-532).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl<T> fmt::Display for Secret<T> {
    // MUST unconditionally print "[REDACTED]" (CWE-532).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// A raw generated secret together with the password derived from it.
///
/// The raw secret is never modified. Every call to [`apply`](Self::apply)
/// derives again from the raw secret, so switching policies back and forth
/// never compounds earlier rewrites.
///
/// # Examples
///
/// ```
/// use pwdhash_policy::{Policy, SecretPair};
///
/// let mut pair = SecretPair::new("Kj8#mQ2z".to_string());
/// assert_eq!(pair.derived().expose_secret(), "Kj8#mQ2z");
///
/// pair.apply(&Policy::new().ban_symbols());
/// assert_eq!(pair.derived().expose_secret(), "Kj8mQ2z");
///
/// pair.apply(&Policy::new().max_length(4));
/// assert_eq!(pair.derived().expose_secret(), "Kj8#");
/// assert_eq!(pair.raw().expose_secret(), "Kj8#mQ2z");
/// ```
#[derive(Debug)]
pub struct SecretPair {
    raw: Secret<String>,
    derived: Secret<String>,
}

impl SecretPair {
    /// Starts a pair whose derived half equals the raw secret.
    pub fn new(raw: String) -> Self {
        let derived = Secret::new(raw.clone());
        Self {
            raw: Secret::new(raw),
            derived,
        }
    }

    /// Starts a pair and immediately derives under `policy`.
    pub fn with_policy(raw: String, policy: &Policy) -> Self {
        let mut pair = Self::new(raw);
        pair.apply(policy);
        pair
    }

    /// Re-derives from the raw secret under `policy`.
    pub fn apply(&mut self, policy: &Policy) {
        let derived = transform(self.raw.expose_secret(), policy);
        tracing::debug!(
            raw_len = self.raw.expose_secret().chars().count(),
            derived_len = derived.chars().count(),
            "derived secret updated"
        );
        self.derived = Secret::new(derived);
    }

    /// The untouched raw secret.
    pub fn raw(&self) -> &Secret<String> {
        &self.raw
    }

    /// The current derived secret.
    pub fn derived(&self) -> &Secret<String> {
        &self.derived
    }

    /// Consumes the pair, returning the derived secret.
    pub fn into_derived(self) -> Secret<String> {
        self.derived
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_secret_redacted_in_debug() {
        let raw = Secret::new(String::from("q7#xvQ7#xv"));
        let debug_output = format!("{raw:?}");

        assert_eq!(debug_output, "[REDACTED]");
        assert!(!debug_output.contains("q7#"));
    }

    #[test]
    fn secret_redacts_display() {
        let derived = Secret::new("Kj8mQ2z");
        let display_output = format!("{}", derived);

        assert_eq!(display_output, "[REDACTED]");
        assert!(!display_output.contains("Kj8"));
    }

    #[test]
    fn secret_exposes_when_explicit() {
        let secret = Secret::new(42);
        assert_eq!(*secret.expose_secret(), 42);
    }

    #[test]
    fn pair_debug_redacts_both_halves() {
        let pair = SecretPair::with_policy("ab12".to_string(), &Policy::new().min_length(8));
        let debug_output = format!("{:?}", pair);

        assert!(!debug_output.contains("ab12"));
        assert_eq!(debug_output.matches("[REDACTED]").count(), 2);
    }

    #[test]
    fn pair_always_derives_from_raw() {
        let mut pair = SecretPair::new("abcdefgh".to_string());

        pair.apply(&Policy::new().max_length(3));
        assert_eq!(pair.derived().expose_secret(), "abc");

        // would be "abcabc" if derived from the previous output
        pair.apply(&Policy::new().min_length(6));
        assert_eq!(pair.derived().expose_secret(), "abcdefgh");
        assert_eq!(pair.raw().expose_secret(), "abcdefgh");
    }

    #[test]
    fn into_derived_returns_current_value() {
        let pair = SecretPair::with_policy("1234".to_string(), &Policy::new().require_uppercase());
        assert_eq!(pair.into_derived().expose_secret(), "1234X");
    }
}
