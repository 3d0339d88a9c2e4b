//! Family-erased values.
//!
//! [`IpCidr`] holds either family and is what callers get when they parse
//! text without knowing its family up front. Operations that relate two
//! values fail with [`InvalidArgument::MixedFamily`] when the families
//! differ; promotion of IPv4 to IPv6 only ever happens through
//! [`IpCidr::to_v6`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::aggregate::{AggregateStats, Aggregator, Order};
use crate::cidr::{Cidr, Ipv4Cidr, Ipv6Cidr};
use crate::error::{InvalidArgument, ParseError};
use crate::family::{Family, IpVersion, V4, V6};
use crate::presentation::{Presentation, Rendered};

/// An IPv4 or IPv6 address with prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum IpCidr {
    /// An IPv4 value.
    V4(Ipv4Cidr),
    /// An IPv6 value.
    V6(Ipv6Cidr),
}

impl IpCidr {
    /// Parse CIDR text of either family. Text containing a colon is IPv6.
    ///
    /// # Example
    ///
    /// ```
    /// use ipagg_core::{IpCidr, IpVersion};
    ///
    /// assert_eq!(IpCidr::parse("fc00::/7").unwrap().version(), IpVersion::V6);
    /// assert_eq!(IpCidr::parse("10.0.0.0/8").unwrap().version(), IpVersion::V4);
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if text.contains(':') {
            Ipv6Cidr::parse(text).map(IpCidr::V6)
        } else {
            Ipv4Cidr::parse(text).map(IpCidr::V4)
        }
    }

    /// The protocol version.
    pub fn version(&self) -> IpVersion {
        match self {
            IpCidr::V4(_) => V4::VERSION,
            IpCidr::V6(_) => V6::VERSION,
        }
    }

    fn family_name(&self) -> &'static str {
        match self {
            IpCidr::V4(_) => V4::NAME,
            IpCidr::V6(_) => V6::NAME,
        }
    }

    /// The raw address bits.
    pub fn address_bits(&self) -> u128 {
        match self {
            IpCidr::V4(c) => c.address_bits(),
            IpCidr::V6(c) => c.address_bits(),
        }
    }

    /// The lowest address of the range.
    pub fn network_bits(&self) -> u128 {
        match self {
            IpCidr::V4(c) => c.network_bits(),
            IpCidr::V6(c) => c.network_bits(),
        }
    }

    /// The prefix length.
    pub fn prefix_len(&self) -> u8 {
        match self {
            IpCidr::V4(c) => c.prefix_len(),
            IpCidr::V6(c) => c.prefix_len(),
        }
    }

    /// See [`Cidr::is_host`].
    pub fn is_host(&self) -> bool {
        match self {
            IpCidr::V4(c) => c.is_host(),
            IpCidr::V6(c) => c.is_host(),
        }
    }

    /// See [`Cidr::is_network`].
    pub fn is_network(&self) -> bool {
        !self.is_host()
    }

    /// The address in the requested presentation.
    pub fn address(&self, presentation: Presentation) -> Result<Rendered, InvalidArgument> {
        match self {
            IpCidr::V4(c) => c.address(presentation),
            IpCidr::V6(c) => c.address(presentation),
        }
    }

    /// The network value of the same family.
    pub fn network(&self) -> Self {
        match self {
            IpCidr::V4(c) => IpCidr::V4(c.network()),
            IpCidr::V6(c) => IpCidr::V6(c.network()),
        }
    }

    /// The broadcast value of the same family.
    pub fn broadcast(&self) -> Self {
        match self {
            IpCidr::V4(c) => IpCidr::V4(c.broadcast()),
            IpCidr::V6(c) => IpCidr::V6(c.broadcast()),
        }
    }

    /// The IPv6 form: IPv4 values become IPv4-mapped, IPv6 values are
    /// returned as they are.
    pub fn to_v6(&self) -> Ipv6Cidr {
        match self {
            IpCidr::V4(c) => c.to_v6(),
            IpCidr::V6(c) => *c,
        }
    }

    fn mixed(&self, other: &Self) -> InvalidArgument {
        InvalidArgument::MixedFamily {
            left: self.family_name(),
            right: other.family_name(),
        }
    }

    /// Compare addresses. Fails when the families differ.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, InvalidArgument> {
        match (self, other) {
            (IpCidr::V4(a), IpCidr::V4(b)) => Ok(a.cmp_address(b)),
            (IpCidr::V6(a), IpCidr::V6(b)) => Ok(a.cmp_address(b)),
            _ => Err(self.mixed(other)),
        }
    }

    /// See [`Cidr::includes`]. Fails when the families differ.
    pub fn try_includes(&self, other: &Self) -> Result<bool, InvalidArgument> {
        match (self, other) {
            (IpCidr::V4(a), IpCidr::V4(b)) => Ok(a.includes(b)),
            (IpCidr::V6(a), IpCidr::V6(b)) => Ok(a.includes(b)),
            _ => Err(self.mixed(other)),
        }
    }

    /// See [`Cidr::adjacent`]. Fails when the families differ.
    pub fn try_adjacent(&self, other: &Self) -> Result<bool, InvalidArgument> {
        match (self, other) {
            (IpCidr::V4(a), IpCidr::V4(b)) => Ok(a.adjacent(b)),
            (IpCidr::V6(a), IpCidr::V6(b)) => Ok(a.adjacent(b)),
            _ => Err(self.mixed(other)),
        }
    }
}

impl fmt::Display for IpCidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpCidr::V4(c) => fmt::Display::fmt(c, f),
            IpCidr::V6(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl FromStr for IpCidr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IpCidr::parse(s)
    }
}

impl From<Ipv4Cidr> for IpCidr {
    fn from(cidr: Ipv4Cidr) -> Self {
        IpCidr::V4(cidr)
    }
}

impl From<Ipv6Cidr> for IpCidr {
    fn from(cidr: Ipv6Cidr) -> Self {
        IpCidr::V6(cidr)
    }
}

/// Pull every value of one family out of `addresses`, or report the first
/// value of another family.
fn uniform<F: Family>(
    addresses: &[IpCidr],
    pick: impl Fn(&IpCidr) -> Option<Cidr<F>>,
) -> Result<Vec<Cidr<F>>, InvalidArgument> {
    addresses
        .iter()
        .map(|ip| {
            pick(ip).ok_or(InvalidArgument::MixedFamily {
                left: F::NAME,
                right: ip.family_name(),
            })
        })
        .collect()
}

/// Aggregate values of a single, runtime-determined family.
///
/// Fails with [`InvalidArgument::MixedFamily`] when `addresses` holds both
/// IPv4 and IPv6 values; nothing is promoted implicitly.
pub fn aggregate_mixed(
    addresses: &[IpCidr],
    order: Order,
) -> Result<Vec<IpCidr>, InvalidArgument> {
    aggregate_mixed_with_stats(addresses, order).map(|(aggregates, _)| aggregates)
}

/// [`aggregate_mixed`], also reporting what the run did.
pub fn aggregate_mixed_with_stats(
    addresses: &[IpCidr],
    order: Order,
) -> Result<(Vec<IpCidr>, AggregateStats), InvalidArgument> {
    let aggregator = Aggregator::new(order);
    match addresses.first() {
        None => Ok((Vec::new(), AggregateStats::default())),
        Some(IpCidr::V4(_)) => {
            let v4 = uniform::<V4>(addresses, |ip| match ip {
                IpCidr::V4(c) => Some(*c),
                IpCidr::V6(_) => None,
            })?;
            let (aggregates, stats) = aggregator.aggregate_with_stats(&v4);
            Ok((aggregates.into_iter().map(IpCidr::V4).collect(), stats))
        }
        Some(IpCidr::V6(_)) => {
            let v6 = uniform::<V6>(addresses, |ip| match ip {
                IpCidr::V6(c) => Some(*c),
                IpCidr::V4(_) => None,
            })?;
            let (aggregates, stats) = aggregator.aggregate_with_stats(&v6);
            Ok((aggregates.into_iter().map(IpCidr::V6).collect(), stats))
        }
    }
}
