//! The address-with-prefix value type.
//!
//! A [`Cidr`] is an immutable pair of raw address bits and a prefix length,
//! parametrized by its [`Family`]. Network, broadcast, and mask values are
//! derived on demand and never stored.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::codec;
use crate::codec::v6;
use crate::error::{InvalidArgument, ParseError};
use crate::family::{mask_bits, Family, V4, V6};
use crate::presentation::{Element, Presentation, Rendered};

use super::iter::Enumerate;

/// An IP address with a CIDR prefix length.
///
/// Equality and ordering consider both the address bits and the prefix
/// length, address first. Use [`Cidr::cmp_address`] to compare addresses
/// alone.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cidr<F: Family> {
    bits: u128,
    prefix: u8,
    family: PhantomData<F>,
}

/// An IPv4 address with prefix.
pub type Ipv4Cidr = Cidr<V4>;

/// An IPv6 address with prefix.
pub type Ipv6Cidr = Cidr<V6>;

impl<F: Family> Cidr<F> {
    /// Create a value from raw address bits and a prefix length.
    ///
    /// # Example
    ///
    /// ```
    /// use ipagg_core::Ipv4Cidr;
    ///
    /// let net = Ipv4Cidr::new(0xc0a8_0000, 24).unwrap();
    /// assert_eq!(net.to_string(), "192.168.0.0/24");
    /// assert!(Ipv4Cidr::new(0x1_0000_0000, 24).is_err());
    /// ```
    pub fn new(bits: u128, prefix: u8) -> Result<Self, InvalidArgument> {
        if bits > F::MAX {
            return Err(InvalidArgument::BitsOutOfRange {
                bits,
                width: F::BITS,
            });
        }
        if prefix > F::BITS {
            return Err(InvalidArgument::PrefixOutOfRange {
                prefix,
                width: F::BITS,
            });
        }
        Ok(Self::from_parts_unchecked(bits, prefix))
    }

    /// Construct without range checks. Callers guarantee the invariants.
    #[inline]
    pub(crate) fn from_parts_unchecked(bits: u128, prefix: u8) -> Self {
        debug_assert!(bits <= F::MAX && prefix <= F::BITS);
        Self {
            bits,
            prefix,
            family: PhantomData,
        }
    }

    /// Parse CIDR text: `addr/len`, `addr/mask`, or a bare `addr`.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let (bits, prefix) = codec::parse_cidr::<F>(text)?;
        Ok(Self::from_parts_unchecked(bits, prefix))
    }

    /// The raw address bits.
    #[inline]
    pub fn address_bits(&self) -> u128 {
        self.bits
    }

    /// The prefix length.
    #[inline]
    pub fn prefix_len(&self) -> u8 {
        self.prefix
    }

    /// Ones in the prefix bits, zeros in the host bits.
    #[inline]
    pub fn mask_bits(&self) -> u128 {
        mask_bits::<F>(self.prefix)
    }

    /// Lowest address in the range.
    #[inline]
    pub fn network_bits(&self) -> u128 {
        self.bits & self.mask_bits()
    }

    /// Highest address in the range.
    #[inline]
    pub fn broadcast_bits(&self) -> u128 {
        self.network_bits() | (F::MAX & !self.mask_bits())
    }

    /// Number of addresses in the range, or `None` for the whole IPv6 space
    /// (2^128 does not fit in a `u128`).
    pub fn host_count(&self) -> Option<u128> {
        1u128.checked_shl(u32::from(self.host_count_log2()))
    }

    /// Number of host bits, the base-2 logarithm of the range size.
    #[inline]
    pub fn host_count_log2(&self) -> u8 {
        F::BITS - self.prefix
    }

    /// True for a full-width prefix, a zero prefix, or when host bits are set.
    pub fn is_host(&self) -> bool {
        self.prefix == F::BITS || self.prefix == 0 || self.bits != self.network_bits()
    }

    /// True when the host bits are clear and the prefix is strictly between
    /// zero and the family width. The boundary prefixes are never networks.
    pub fn is_network(&self) -> bool {
        !self.is_host()
    }

    /// The network value: `self` when already a network, otherwise a new
    /// value with the host bits cleared and the same prefix.
    pub fn network(&self) -> Self {
        if self.is_network() {
            *self
        } else {
            Self::from_parts_unchecked(self.network_bits(), self.prefix)
        }
    }

    /// The broadcast value, with every host bit set and the same prefix.
    pub fn broadcast(&self) -> Self {
        let broadcast = self.broadcast_bits();
        if self.bits == broadcast {
            *self
        } else {
            Self::from_parts_unchecked(broadcast, self.prefix)
        }
    }

    fn present(&self, bits: u128, presentation: Presentation) -> Result<Rendered, InvalidArgument> {
        match presentation {
            Presentation::Bits => Ok(Rendered::Bits(bits)),
            _ => F::render(bits, self.prefix, presentation).map(Rendered::Text),
        }
    }

    /// The address in the requested presentation.
    ///
    /// # Example
    ///
    /// ```
    /// use ipagg_core::{Ipv6Cidr, Presentation};
    ///
    /// let ip: Ipv6Cidr = "2001:470:1f09:553::1/64".parse().unwrap();
    /// let full = ip.address(Presentation::Full).unwrap();
    /// assert_eq!(full.to_string(), "2001:0470:1f09:0553:0000:0000:0000:0001");
    /// ```
    pub fn address(&self, presentation: Presentation) -> Result<Rendered, InvalidArgument> {
        self.present(self.bits, presentation)
    }

    /// The network address in the requested presentation.
    pub fn network_as(&self, presentation: Presentation) -> Result<Rendered, InvalidArgument> {
        self.present(self.network_bits(), presentation)
    }

    /// The broadcast address in the requested presentation.
    pub fn broadcast_as(&self, presentation: Presentation) -> Result<Rendered, InvalidArgument> {
        self.present(self.broadcast_bits(), presentation)
    }

    /// The mask in the requested presentation.
    pub fn mask(&self, presentation: Presentation) -> Result<Rendered, InvalidArgument> {
        self.present(self.mask_bits(), presentation)
    }

    /// Whether `other` lies within this range.
    ///
    /// A host is included when its address is in range; a network only when
    /// its whole range is enclosed.
    pub fn includes(&self, other: &Self) -> bool {
        if other.is_host() {
            self.network_bits() <= other.bits && other.bits <= self.broadcast_bits()
        } else {
            self.network_bits() <= other.network_bits()
                && self.broadcast_bits() >= other.broadcast_bits()
        }
    }

    /// Whether `other`'s range starts immediately after this one ends.
    ///
    /// Never true when this range ends at the top of the address space.
    pub fn precedes(&self, other: &Self) -> bool {
        self.broadcast_bits() < F::MAX && self.broadcast_bits() + 1 == other.network_bits()
    }

    /// Whether this range starts immediately after `other`'s ends.
    #[inline]
    pub fn follows(&self, other: &Self) -> bool {
        other.precedes(self)
    }

    /// Whether the two ranges touch without overlapping.
    #[inline]
    pub fn adjacent(&self, other: &Self) -> bool {
        self.precedes(other) || self.follows(other)
    }

    /// Compare by address bits alone, ignoring the prefix length.
    #[inline]
    pub fn cmp_address(&self, other: &Self) -> Ordering {
        self.bits.cmp(&other.bits)
    }

    /// Iterate the range in ascending address order.
    ///
    /// A host value yields itself once whatever `element` is.
    pub fn enumerate(&self, element: Element) -> Enumerate<F> {
        Enumerate::new(self, element)
    }

    /// Shorthand for `enumerate(Element::Host)`.
    pub fn hosts(&self) -> Enumerate<F> {
        self.enumerate(Element::Host)
    }

    /// Shorthand for `enumerate(Element::Address)`.
    pub fn addresses(&self) -> Enumerate<F> {
        self.enumerate(Element::Address)
    }
}

impl<F: Family> fmt::Debug for Cidr<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Cidr({})", F::NAME, self)
    }
}

impl Cidr<V4> {
    /// The address as a standard library value.
    pub fn ip(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.bits as u32)
    }

    /// The IPv4-mapped IPv6 equivalent: `::ffff:a.b.c.d` with the prefix
    /// extended by 96.
    ///
    /// Families are never mixed implicitly; this is the explicit promotion.
    pub fn to_v6(&self) -> Cidr<V6> {
        Cidr::from_parts_unchecked((0xffff << 32) | self.bits, self.prefix + 96)
    }
}

impl Cidr<V6> {
    /// The address as a standard library value.
    pub fn ip(&self) -> Ipv6Addr {
        Ipv6Addr::from(self.bits)
    }

    /// True when the prefix covers at least the top 96 bits and those bits
    /// are `::ffff:0:0`.
    pub fn is_ipv4_mapped(&self) -> bool {
        v6::is_ipv4_mapped(self.bits, self.prefix)
    }
}

impl From<Ipv4Addr> for Cidr<V4> {
    fn from(addr: Ipv4Addr) -> Self {
        Self::from_parts_unchecked(u128::from(u32::from(addr)), V4::BITS)
    }
}

impl From<Ipv6Addr> for Cidr<V6> {
    fn from(addr: Ipv6Addr) -> Self {
        Self::from_parts_unchecked(u128::from(addr), V6::BITS)
    }
}
