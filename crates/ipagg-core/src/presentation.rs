//! Presentation, enumeration, and rendering tokens.

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidArgument;

/// How an address-derived value is presented to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Presentation {
    /// The raw integer bits.
    Bits,
    /// The family's default text form (dotted quad, or RFC 5952 for IPv6).
    #[default]
    String,
    /// RFC 5952 compressed text. IPv6 only; identical to `String` there.
    Compressed,
    /// Eight unpadded hex groups without `::`. IPv6 only.
    Uncompressed,
    /// Eight hex groups zero-padded to four digits. IPv6 only.
    Full,
}

impl Presentation {
    /// The token naming this presentation.
    pub fn as_str(self) -> &'static str {
        match self {
            Presentation::Bits => "bits",
            Presentation::String => "string",
            Presentation::Compressed => "compressed",
            Presentation::Uncompressed => "uncompressed",
            Presentation::Full => "full",
        }
    }
}

impl FromStr for Presentation {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bits" => Ok(Presentation::Bits),
            "string" => Ok(Presentation::String),
            "compressed" => Ok(Presentation::Compressed),
            "uncompressed" => Ok(Presentation::Uncompressed),
            "full" => Ok(Presentation::Full),
            other => Err(InvalidArgument::UnknownPresentation(other.to_owned())),
        }
    }
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value rendered in some [`Presentation`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rendered {
    /// Result of [`Presentation::Bits`].
    Bits(u128),
    /// Result of any text presentation.
    Text(String),
}

impl Rendered {
    /// The integer bits, if this was rendered as bits.
    pub fn as_bits(&self) -> Option<u128> {
        match self {
            Rendered::Bits(bits) => Some(*bits),
            Rendered::Text(_) => None,
        }
    }

    /// The text, if this was rendered as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Rendered::Bits(_) => None,
            Rendered::Text(text) => Some(text),
        }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Bits(bits) => write!(f, "{}", bits),
            Rendered::Text(text) => f.write_str(text),
        }
    }
}

/// Which members of a range [`Cidr::enumerate`](crate::Cidr::enumerate) yields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Element {
    /// Every address from network to broadcast inclusive.
    Address,
    /// Usable host addresses: network and broadcast are excluded unless the
    /// range is point-to-point.
    #[default]
    Host,
}

impl FromStr for Element {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "address" => Ok(Element::Address),
            "host" => Ok(Element::Host),
            other => Err(InvalidArgument::UnknownElement(other.to_owned())),
        }
    }
}
