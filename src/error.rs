use std::fmt;

/// Error returned by [`decode_strict`](crate::decode_strict) when a numeric
/// share-link parameter cannot be used.
///
/// The lenient [`decode`](crate::decode) treats the same values as unset.
/// The error names the parameter but never echoes its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    param: &'static str,
    kind: DecodeErrorKind,
}

impl DecodeError {
    /// Creates a new decode error for `param`.
    pub fn new(param: &'static str, kind: DecodeErrorKind) -> Self {
        Self { param, kind }
    }

    /// The offending parameter name.
    pub fn param(&self) -> &'static str {
        self.param
    }

    /// Why the value was rejected.
    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value for '{}': {}", self.param, self.kind)
    }
}

impl std::error::Error for DecodeError {}

/// The reason a numeric parameter was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The value is not a number
    NotANumber,
    /// The value is below zero
    Negative,
    /// The value is infinite or NaN
    NonFinite,
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber => write!(f, "not a number"),
            Self::Negative => write!(f, "negative"),
            Self::NonFinite => write!(f, "not finite"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_accessors() {
        let err = DecodeError::new("min", DecodeErrorKind::Negative);
        assert_eq!(err.param(), "min");
        assert_eq!(err.kind(), DecodeErrorKind::Negative);
    }

    #[test]
    fn decode_error_display() {
        let err = DecodeError::new("max", DecodeErrorKind::NotANumber);
        assert_eq!(err.to_string(), "invalid value for 'max': not a number");
    }

    #[test]
    fn kinds_display() {
        assert_eq!(DecodeErrorKind::NotANumber.to_string(), "not a number");
        assert_eq!(DecodeErrorKind::Negative.to_string(), "negative");
        assert_eq!(DecodeErrorKind::NonFinite.to_string(), "not finite");
    }
}
