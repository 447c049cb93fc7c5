use std::fmt;

/// A character class a site may require in its passwords.
///
/// Membership is ASCII-based. [`CharClass::Symbol`] is everything outside
/// `[A-Za-z0-9]`, which is also exactly what the symbol ban removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `A`-`Z`
    Uppercase,
    /// `a`-`z`
    Lowercase,
    /// `0`-`9`
    Digit,
    /// Anything that is not an ASCII letter or digit
    Symbol,
}

impl CharClass {
    /// All classes in enforcement order.
    pub const ENFORCEMENT_ORDER: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    /// Returns `true` if `c` belongs to this class.
    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Symbol => !c.is_ascii_alphanumeric(),
        }
    }

    /// Returns `true` if any character of `s` belongs to this class.
    pub fn is_present_in(self, s: &str) -> bool {
        s.chars().any(|c| self.contains(c))
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharClass::Uppercase => write!(f, "uppercase"),
            CharClass::Lowercase => write!(f, "lowercase"),
            CharClass::Digit => write!(f, "number"),
            CharClass::Symbol => write!(f, "symbol"),
        }
    }
}

/// The password rules of a site.
///
/// A `Policy` describes the allowed length and the required or banned
/// character classes of a derived password. It is an immutable value: the
/// builder methods consume `self` and return the updated policy.
///
/// `require_symbol` and `ban_symbols` may both be set. The symbol requirement
/// is then void; see [`Policy::required_classes`].
///
/// # Examples
///
/// ```
/// use pwdhash_policy::{CharClass, Policy};
///
/// let policy = Policy::new()
///     .min_length(8)
///     .max_length(20)
///     .require_uppercase()
///     .require_number()
///     .hint("8-20 chars");
///
/// assert_eq!(policy.min(), Some(8));
/// assert_eq!(policy.max(), Some(20));
/// assert_eq!(
///     policy.required_classes(),
///     vec![CharClass::Uppercase, CharClass::Digit]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    min_length: Option<u32>,
    max_length: Option<u32>,
    ban_symbols: bool,
    require_number: bool,
    require_symbol: bool,
    require_uppercase: bool,
    require_lowercase: bool,
    hint: Option<String>,
}

impl Policy {
    /// Creates an empty policy: no bounds, no requirements, no hint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum length.
    pub fn min_length(mut self, min: u32) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Sets the maximum length.
    pub fn max_length(mut self, max: u32) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Sets or clears the minimum length.
    pub fn with_min(mut self, min: Option<u32>) -> Self {
        self.min_length = min;
        self
    }

    /// Sets or clears the maximum length.
    pub fn with_max(mut self, max: Option<u32>) -> Self {
        self.max_length = max;
        self
    }

    /// Bans every character outside `[A-Za-z0-9]`.
    pub fn ban_symbols(self) -> Self {
        self.with_ban_symbols(true)
    }

    /// Requires at least one digit.
    pub fn require_number(self) -> Self {
        self.with_require_number(true)
    }

    /// Requires at least one symbol (void while symbols are banned).
    pub fn require_symbol(self) -> Self {
        self.with_require_symbol(true)
    }

    /// Requires at least one uppercase letter.
    pub fn require_uppercase(self) -> Self {
        self.with_require_uppercase(true)
    }

    /// Requires at least one lowercase letter.
    pub fn require_lowercase(self) -> Self {
        self.with_require_lowercase(true)
    }

    /// Sets the symbol ban flag.
    pub fn with_ban_symbols(mut self, on: bool) -> Self {
        self.ban_symbols = on;
        self
    }

    /// Sets the number requirement flag.
    pub fn with_require_number(mut self, on: bool) -> Self {
        self.require_number = on;
        self
    }

    /// Sets the symbol requirement flag.
    pub fn with_require_symbol(mut self, on: bool) -> Self {
        self.require_symbol = on;
        self
    }

    /// Sets the uppercase requirement flag.
    pub fn with_require_uppercase(mut self, on: bool) -> Self {
        self.require_uppercase = on;
        self
    }

    /// Sets the lowercase requirement flag.
    pub fn with_require_lowercase(mut self, on: bool) -> Self {
        self.require_lowercase = on;
        self
    }

    /// Attaches a free-text hint describing the rules.
    pub fn hint(self, hint: impl Into<String>) -> Self {
        self.with_hint(Some(hint.into()))
    }

    /// Sets or clears the hint. An empty hint clears it.
    pub fn with_hint(mut self, hint: Option<String>) -> Self {
        self.hint = hint.filter(|h| !h.is_empty());
        self
    }

    /// Minimum length, if set.
    pub fn min(&self) -> Option<u32> {
        self.min_length
    }

    /// Maximum length, if set.
    pub fn max(&self) -> Option<u32> {
        self.max_length
    }

    /// Whether symbols are banned.
    pub fn bans_symbols(&self) -> bool {
        self.ban_symbols
    }

    /// Whether a digit is required.
    pub fn requires_number(&self) -> bool {
        self.require_number
    }

    /// Whether a symbol is requested. See [`Policy::requires`] for the
    /// effective value.
    pub fn requires_symbol(&self) -> bool {
        self.require_symbol
    }

    /// Whether an uppercase letter is required.
    pub fn requires_uppercase(&self) -> bool {
        self.require_uppercase
    }

    /// Whether a lowercase letter is required.
    pub fn requires_lowercase(&self) -> bool {
        self.require_lowercase
    }

    /// The hint, if any.
    pub fn hint_text(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Returns `true` if the class must be present in a derived password.
    ///
    /// A symbol requirement counts only while symbols are not banned.
    pub fn requires(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.require_uppercase,
            CharClass::Lowercase => self.require_lowercase,
            CharClass::Digit => self.require_number,
            CharClass::Symbol => self.require_symbol && !self.ban_symbols,
        }
    }

    /// The classes to enforce, in enforcement order.
    pub fn required_classes(&self) -> Vec<CharClass> {
        CharClass::ENFORCEMENT_ORDER
            .into_iter()
            .filter(|class| self.requires(*class))
            .collect()
    }

    /// Returns `true` if the policy neither bounds nor constrains anything.
    ///
    /// The hint is ignored; it never changes a derived password.
    pub fn is_unconstrained(&self) -> bool {
        self.min_length.is_none()
            && self.max_length.is_none()
            && !self.ban_symbols
            && self.required_classes().is_empty()
    }
}
