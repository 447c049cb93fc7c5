//! Rewrites a raw generated secret so that it satisfies a [`Policy`].
//!
//! The work is an ordered pipeline of pure stages. Each stage takes the
//! previous stage's output and returns a new string:
//!
//! 1. [`shape_length`]: double up to the minimum, then truncate to the maximum
//! 2. [`filter_symbols`]: drop non-alphanumerics when symbols are banned,
//!    then shape the length again
//! 3. [`is_feasible`]: skip class enforcement when the maximum length cannot
//!    hold one character of every required class
//! 4. [`enforce_classes`]: add or overwrite characters so each required
//!    class is present, in the order uppercase, lowercase, number, symbol
//!
//! The raw secret is never modified. Identical inputs always produce
//! identical output, and no stage can fail.
//!
//! # Examples
//!
//! ```
//! use pwdhash_policy::{transform, Policy};
//!
//! assert_eq!(transform("ab12", &Policy::new().min_length(8)), "ab12ab12");
//! assert_eq!(transform("Kj8#mQ2z", &Policy::new().ban_symbols()), "Kj8mQ2z");
//! ```

use crate::policy::{CharClass, Policy};

/// Prefix of the replacement used when the symbol ban leaves nothing.
///
/// The full replacement is the tag followed by the character count of the
/// raw secret, e.g. `Res12`.
pub const FALLBACK_TAG: &str = "Res";

const UPPERCASE: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
const SYMBOLS: &[u8; 8] = b"!@#$%^&*";

/// Derives a policy-compliant secret from `raw`.
///
/// Never fails. An empty `raw` yields an empty string. When the policy is
/// infeasible (a maximum length smaller than the number of required classes)
/// only the length and symbol stages apply.
pub fn transform(raw: &str, policy: &Policy) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let shaped = shape_length(raw, policy);
    let filtered = filter_symbols(&shaped, raw, policy);

    if !is_feasible(policy) {
        tracing::debug!(
            required = required_type_count(policy),
            max = ?policy.max(),
            "policy infeasible at this length, skipping class enforcement"
        );
        return filtered;
    }

    enforce_classes(&filtered, raw, policy)
}

/// Applies the length bounds of `policy` to `s`.
///
/// Below the minimum the string is concatenated with itself until it is long
/// enough, so `ab12` with a minimum of 6 becomes `ab12ab12`. Above the maximum
/// it is cut to the first `max` characters. An empty string is never doubled.
pub fn shape_length(s: &str, policy: &Policy) -> String {
    let mut out = s.to_string();
    let mut len = out.chars().count();

    if let Some(min) = policy.min() {
        let min = min as usize;
        while len > 0 && len < min {
            out = out.repeat(2);
            len *= 2;
        }
    }

    if let Some(max) = policy.max() {
        let max = max as usize;
        if len > max {
            out = out.chars().take(max).collect();
        }
    }

    out
}

/// Removes every character outside `[A-Za-z0-9]` when `policy` bans symbols.
///
/// If nothing survives, the result is [`FALLBACK_TAG`] followed by the
/// character count of `raw`. The result is passed through [`shape_length`]
/// again since filtering can undo the length bounds.
pub fn filter_symbols(s: &str, raw: &str, policy: &Policy) -> String {
    if !policy.bans_symbols() {
        return s.to_string();
    }

    let mut filtered: String = s.chars().filter(char::is_ascii_alphanumeric).collect();
    if filtered.is_empty() {
        tracing::debug!("symbol ban left nothing, using fallback tag");
        filtered = format!("{}{}", FALLBACK_TAG, raw.chars().count());
    }

    shape_length(&filtered, policy)
}

/// Number of character classes `policy` requires.
///
/// A symbol requirement is not counted while symbols are banned.
pub fn required_type_count(policy: &Policy) -> usize {
    policy.required_classes().len()
}

/// Returns `false` when the maximum length is smaller than the number of
/// required classes.
pub fn is_feasible(policy: &Policy) -> bool {
    match policy.max() {
        Some(max) => max as usize >= required_type_count(policy),
        None => true,
    }
}

/// Makes every required class of `policy` present in `s`.
///
/// Classes are handled in the order uppercase, lowercase, number, symbol. For
/// each missing class:
///
/// - If the class is a letter case and the opposite case is not required, the
///   first letter of the opposite case is converted in place.
/// - Otherwise a representative character is appended, or, when `s` is
///   already at the maximum length, written over the first character that
///   belongs to none of the classes handled earlier in the pass (the last
///   character if all are protected).
///
/// With a very small maximum this can still leave a class missing.
pub fn enforce_classes(s: &str, raw: &str, policy: &Policy) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    let max = policy.max().map(|m| m as usize);
    let mut enforced: Vec<CharClass> = Vec::with_capacity(4);

    for class in policy.required_classes() {
        if chars.iter().any(|c| class.contains(*c)) {
            tracing::trace!(%class, "class already present");
        } else if convert_case(&mut chars, class, policy, &enforced) {
            tracing::trace!(%class, "converted opposite case in place");
        } else {
            let rep = representative(class, &chars, raw);
            place(&mut chars, rep, max, &enforced);
            tracing::trace!(%class, len = chars.len(), "placed representative character");
        }
        enforced.push(class);
    }

    chars.into_iter().collect()
}

/// Converts the first letter of the opposite case, if allowed.
fn convert_case(
    chars: &mut [char],
    class: CharClass,
    policy: &Policy,
    enforced: &[CharClass],
) -> bool {
    let complement = match class {
        CharClass::Uppercase => CharClass::Lowercase,
        CharClass::Lowercase => CharClass::Uppercase,
        CharClass::Digit | CharClass::Symbol => return false,
    };

    if policy.requires(complement) || enforced.contains(&complement) {
        return false;
    }

    match chars.iter().position(|c| complement.contains(*c)) {
        Some(idx) => {
            chars[idx] = match class {
                CharClass::Uppercase => chars[idx].to_ascii_uppercase(),
                _ => chars[idx].to_ascii_lowercase(),
            };
            true
        }
        None => false,
    }
}

/// Picks the character inserted for a missing class.
///
/// Letters are chosen from the first character of the raw secret, the digit
/// from the current length, the symbol from the current first character.
fn representative(class: CharClass, chars: &[char], raw: &str) -> char {
    let code = |c: Option<char>| c.map_or(0, u32::from) as usize;

    match class {
        CharClass::Uppercase => char::from(UPPERCASE[code(raw.chars().next()) % UPPERCASE.len()]),
        CharClass::Lowercase => char::from(LOWERCASE[code(raw.chars().next()) % LOWERCASE.len()]),
        CharClass::Digit => char::from(b'0' + (chars.len() % 10) as u8),
        CharClass::Symbol => char::from(SYMBOLS[code(chars.first().copied()) % SYMBOLS.len()]),
    }
}

/// Appends `rep` below the cap; at the cap overwrites the first unprotected
/// position, falling back to the last one.
fn place(chars: &mut Vec<char>, rep: char, max: Option<usize>, protected: &[CharClass]) {
    if max.map_or(true, |max| chars.len() < max) {
        chars.push(rep);
        return;
    }

    let Some(last) = chars.len().checked_sub(1) else {
        return;
    };

    let idx = chars
        .iter()
        .position(|c| !protected.iter().any(|class| class.contains(*c)))
        .unwrap_or(last);
    chars[idx] = rep;
}
