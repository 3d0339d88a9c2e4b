//! Error types for the address library.
//!
//! Two kinds of failure exist: text that does not describe an address
//! ([`ParseError`]) and arguments that are well-formed values but invalid
//! for the requested operation ([`InvalidArgument`]). Both are local and
//! terminal for the call that produced them.

use thiserror::Error;

/// Convenience type alias for Results using [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error covering every failure the library reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// Malformed CIDR text.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A value or token that the operation cannot accept.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
}

/// Failure to parse CIDR text.
///
/// Preserves the rejected input so callers reading address lists can
/// report the offending line verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {family} CIDR {input:?}: {kind}")]
pub struct ParseError {
    /// Family name of the grammar that rejected the input ("IPv4" or "IPv6").
    pub family: &'static str,
    /// The rejected text.
    pub input: String,
    /// What was wrong with it.
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(family: &'static str, input: &str, kind: ParseErrorKind) -> Self {
        Self {
            family,
            input: input.to_owned(),
            kind,
        }
    }
}

/// The specific reason a CIDR string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// Input was empty or whitespace only.
    #[error("empty input")]
    Empty,

    /// A dotted-quad octet was missing, non-decimal, or above 255.
    #[error("invalid octet {0:?}")]
    InvalidOctet(String),

    /// A hex group was missing, non-hex, or longer than four digits.
    #[error("invalid hex group {0:?}")]
    InvalidHexGroup(String),

    /// A dotted mask octet that does not describe a contiguous prefix.
    #[error("invalid mask octet {0}")]
    InvalidMaskOctet(u8),

    /// The address does not have the number of groups its family requires.
    #[error("expected {expected} groups, found {found}")]
    WrongGroupCount {
        /// Groups required by the family.
        expected: usize,
        /// Groups present in the input.
        found: usize,
    },

    /// More than one `::` in an IPv6 address.
    #[error("more than one '::'")]
    MultipleCompressions,

    /// The prefix part was not a decimal integer or a mask.
    #[error("invalid prefix {0:?}")]
    InvalidPrefix(String),

    /// The prefix length exceeded the family width.
    #[error("prefix length {prefix} exceeds {width}")]
    PrefixOutOfRange {
        /// The parsed prefix length.
        prefix: u32,
        /// The family width in bits.
        width: u8,
    },

    /// Characters left over after a complete address.
    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),
}

/// An argument that is not acceptable to the operation it was passed to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InvalidArgument {
    /// Presentation token that names no known presentation.
    #[error("unknown presentation {0:?}")]
    UnknownPresentation(String),

    /// Known presentation that the family cannot render.
    #[error("{family} does not support the {presentation} presentation")]
    UnsupportedPresentation {
        /// Family name.
        family: &'static str,
        /// Requested presentation token.
        presentation: &'static str,
    },

    /// Enumeration kind token that names no known element type.
    #[error("unknown element type {0:?}")]
    UnknownElement(String),

    /// Aggregation order token that names no known order.
    #[error("unknown input order {0:?}")]
    UnknownOrder(String),

    /// Values of different families were combined.
    #[error("mixed address families: {left} and {right}")]
    MixedFamily {
        /// Family of the first value.
        left: &'static str,
        /// Family of the conflicting value.
        right: &'static str,
    },

    /// Address bits wider than the family allows.
    #[error("address bits {bits:#x} exceed {width} bits")]
    BitsOutOfRange {
        /// The rejected bits.
        bits: u128,
        /// The family width.
        width: u8,
    },

    /// Prefix length wider than the family allows.
    #[error("prefix length {prefix} exceeds {width}")]
    PrefixOutOfRange {
        /// The rejected prefix length.
        prefix: u8,
        /// The family width.
        width: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParseError::new("IPv4", "10.0.0.256", ParseErrorKind::InvalidOctet("256".into()));
        assert_eq!(
            err.to_string(),
            "invalid IPv4 CIDR \"10.0.0.256\": invalid octet \"256\""
        );

        let err = InvalidArgument::MixedFamily {
            left: "IPv4",
            right: "IPv6",
        };
        assert_eq!(err.to_string(), "mixed address families: IPv4 and IPv6");
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = InvalidArgument::UnknownOrder("wombat".into()).into();
        assert!(matches!(
            err,
            Error::InvalidArgument(InvalidArgument::UnknownOrder(_))
        ));

        let err: Error = ParseError::new("IPv6", "", ParseErrorKind::Empty).into();
        assert!(matches!(err, Error::Parse(_)));
        // transparent forwarding keeps the inner message
        assert_eq!(err.to_string(), "invalid IPv6 CIDR \"\": empty input");
    }

    #[test]
    fn test_group_count_display() {
        let kind = ParseErrorKind::WrongGroupCount {
            expected: 8,
            found: 9,
        };
        assert_eq!(kind.to_string(), "expected 8 groups, found 9");
    }
}
