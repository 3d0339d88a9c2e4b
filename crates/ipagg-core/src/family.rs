//! Protocol families.
//!
//! [`Family`] carries everything that differs between IPv4 and IPv6: the
//! address width and the text grammar. All bit arithmetic in
//! [`Cidr`](crate::Cidr) is written once against this trait.

use std::fmt::Debug;
use std::hash::Hash;

use crate::codec::{v4, v6};
use crate::error::{InvalidArgument, ParseErrorKind};
use crate::presentation::Presentation;

/// An IP protocol version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IpVersion {
    /// Internet Protocol version 4.
    V4,
    /// Internet Protocol version 6.
    V6,
}

impl IpVersion {
    /// The version number, 4 or 6.
    #[inline]
    pub fn version_number(self) -> u8 {
        match self {
            IpVersion::V4 => 4,
            IpVersion::V6 => 6,
        }
    }

    /// Is this IPv4?
    #[inline]
    pub fn is_v4(self) -> bool {
        self == IpVersion::V4
    }

    /// Is this IPv6?
    #[inline]
    pub fn is_v6(self) -> bool {
        self == IpVersion::V6
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A protocol family: the width of its addresses and its text grammar.
///
/// Implemented only by [`V4`] and [`V6`]. The implementors are uninhabited;
/// they exist purely at the type level.
pub trait Family:
    Sized + Clone + Copy + Debug + Eq + Hash + Ord + Send + Sync + sealed::Sealed + 'static
{
    /// The protocol version.
    const VERSION: IpVersion;

    /// Address width in bits.
    const BITS: u8;

    /// "IPv4" or "IPv6".
    const NAME: &'static str;

    /// All address bits set.
    const MAX: u128;

    /// Parse the address part of a CIDR string into raw bits.
    fn parse_address(text: &str) -> Result<u128, ParseErrorKind>;

    /// Whether the prefix part is written as a mask rather than a length.
    fn is_mask_form(text: &str) -> bool;

    /// Decode a mask written in address form into a prefix length.
    fn parse_mask(text: &str) -> Result<u8, ParseErrorKind>;

    /// Whether this family can render `presentation` as text.
    fn supports(presentation: Presentation) -> bool;

    /// Render `bits` as text. `prefix` is the prefix length of the value the
    /// bits were derived from; IPv6 uses it to recognise IPv4-mapped values.
    fn render_text(bits: u128, prefix: u8, presentation: Presentation) -> String;

    /// Render `bits` in a text presentation, rejecting presentations the
    /// family does not support and the non-text [`Presentation::Bits`].
    fn render(bits: u128, prefix: u8, presentation: Presentation) -> Result<String, InvalidArgument> {
        if presentation == Presentation::Bits || !Self::supports(presentation) {
            return Err(InvalidArgument::UnsupportedPresentation {
                family: Self::NAME,
                presentation: presentation.as_str(),
            });
        }
        Ok(Self::render_text(bits, prefix, presentation))
    }
}

/// IPv4: 32-bit addresses written as dotted quads.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum V4 {}

impl sealed::Sealed for V4 {}

impl Family for V4 {
    const VERSION: IpVersion = IpVersion::V4;
    const BITS: u8 = 32;
    const NAME: &'static str = "IPv4";
    const MAX: u128 = u32::MAX as u128;

    fn parse_address(text: &str) -> Result<u128, ParseErrorKind> {
        v4::parse_address(text).map(u128::from)
    }

    fn is_mask_form(text: &str) -> bool {
        text.contains('.')
    }

    fn parse_mask(text: &str) -> Result<u8, ParseErrorKind> {
        v4::parse_dotted_mask(text)
    }

    fn supports(presentation: Presentation) -> bool {
        matches!(presentation, Presentation::Bits | Presentation::String)
    }

    fn render_text(bits: u128, _prefix: u8, _presentation: Presentation) -> String {
        // Callers only pass bits that fit in the family width.
        v4::format_dotted_quad(bits as u32)
    }
}

/// IPv6: 128-bit addresses written as colon-separated hex groups.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum V6 {}

impl sealed::Sealed for V6 {}

impl Family for V6 {
    const VERSION: IpVersion = IpVersion::V6;
    const BITS: u8 = 128;
    const NAME: &'static str = "IPv6";
    const MAX: u128 = u128::MAX;

    fn parse_address(text: &str) -> Result<u128, ParseErrorKind> {
        v6::parse_address(text)
    }

    fn is_mask_form(text: &str) -> bool {
        text.contains(':')
    }

    fn parse_mask(text: &str) -> Result<u8, ParseErrorKind> {
        v6::parse_grouped_mask(text)
    }

    fn supports(_presentation: Presentation) -> bool {
        true
    }

    fn render_text(bits: u128, prefix: u8, presentation: Presentation) -> String {
        match presentation {
            Presentation::Full => v6::format_full(bits),
            Presentation::Uncompressed => v6::format_uncompressed(bits),
            _ if v6::is_ipv4_mapped(bits, prefix) => v6::format_mapped(bits),
            _ => v6::format_compressed(bits),
        }
    }
}

/// Ones in the high `prefix` bits of a `F::BITS`-wide value.
///
/// `prefix` must not exceed `F::BITS`.
#[inline]
pub fn mask_bits<F: Family>(prefix: u8) -> u128 {
    F::MAX & !F::MAX.checked_shr(u32::from(prefix)).unwrap_or(0)
}
