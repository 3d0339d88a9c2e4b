//! CIDR aggregation (summarization).
//!
//! Reduces a list of same-family values to the smallest equivalent list
//! covering exactly the same address space. Two rules are applied to each
//! neighbouring pair of a list sorted by network address:
//!
//! - **containment**: the left value includes the right one, which is dropped;
//! - **adjacency**: two equal-sized ranges where the left immediately precedes
//!   the right are replaced by their parent range, provided the left network
//!   address is aligned to the parent prefix.
//!
//! A merge can enable a further merge with the next neighbour, so the scan
//! stays on the merged value, and the whole pass repeats until it makes no
//! merge at all.
//!
//! # Example
//!
//! ```
//! use ipagg_core::{aggregate, Ipv4Cidr, Order};
//!
//! let nets: Vec<Ipv4Cidr> = ["192.168.0.0/30", "192.168.0.4/31", "192.168.0.6/31"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! let merged = aggregate(&nets, Order::Unsorted);
//! assert_eq!(merged, vec!["192.168.0.0/29".parse::<Ipv4Cidr>().unwrap()]);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::cidr::Cidr;
use crate::error::InvalidArgument;
use crate::family::{mask_bits, Family};

/// Order of the input handed to the aggregator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// Sort a working copy by network address first.
    #[default]
    Unsorted,
    /// The caller guarantees the input is already sorted by network address.
    Presorted,
}

impl Order {
    /// The token naming this order.
    pub fn as_str(self) -> &'static str {
        match self {
            Order::Unsorted => "unsorted",
            Order::Presorted => "presorted",
        }
    }
}

impl FromStr for Order {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unsorted" => Ok(Order::Unsorted),
            "presorted" => Ok(Order::Presorted),
            other => Err(InvalidArgument::UnknownOrder(other.to_owned())),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters describing one aggregation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AggregateStats {
    /// Number of values passed in.
    pub input: usize,
    /// Number of values returned.
    pub output: usize,
    /// Successful merges performed.
    pub merges: usize,
    /// Full passes over the working list, including the final merge-free one.
    pub sweeps: usize,
}

/// A reusable aggregator configured with an input [`Order`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Aggregator {
    /// How the input is ordered.
    pub order: Order,
}

impl Aggregator {
    /// Create an aggregator for input in the given order.
    pub fn new(order: Order) -> Self {
        Self { order }
    }

    /// Aggregate `addresses`. See the [module documentation](self).
    pub fn aggregate<F: Family>(&self, addresses: &[Cidr<F>]) -> Vec<Cidr<F>> {
        self.aggregate_with_stats(addresses).0
    }

    /// Aggregate `addresses`, also reporting what the run did.
    pub fn aggregate_with_stats<F: Family>(
        &self,
        addresses: &[Cidr<F>],
    ) -> (Vec<Cidr<F>>, AggregateStats) {
        let mut stats = AggregateStats {
            input: addresses.len(),
            ..AggregateStats::default()
        };

        // The working copy is ours; the caller's slice is never touched.
        let mut aggregates = addresses.to_vec();
        if aggregates.len() < 2 {
            stats.output = aggregates.len();
            return (aggregates, stats);
        }

        if self.order == Order::Unsorted {
            // Stable; the wider prefix first among equal network addresses,
            // so a container always precedes what it contains.
            aggregates.sort_by_key(|cidr| (cidr.network_bits(), cidr.prefix_len()));
        }

        loop {
            stats.sweeps += 1;
            let merges = sweep(&mut aggregates);
            stats.merges += merges;
            if merges == 0 {
                break;
            }
        }

        stats.output = aggregates.len();
        (aggregates, stats)
    }
}

/// One left-to-right pass, compacting in place. The value at `write` is the
/// current left side; it absorbs right neighbours until a pair fails to merge.
fn sweep<F: Family>(aggregates: &mut Vec<Cidr<F>>) -> usize {
    let mut merges = 0;
    let mut write = 0;

    for read in 1..aggregates.len() {
        match try_merge(&aggregates[write], &aggregates[read]) {
            Some(merged) => {
                aggregates[write] = merged;
                merges += 1;
            }
            None => {
                write += 1;
                aggregates[write] = aggregates[read];
            }
        }
    }

    aggregates.truncate(write + 1);
    merges
}

/// Merge `right` into `left` if one of the two rules applies.
fn try_merge<F: Family>(left: &Cidr<F>, right: &Cidr<F>) -> Option<Cidr<F>> {
    if left.includes(right) {
        return Some(left.network());
    }

    if left.precedes(right) && left.prefix_len() == right.prefix_len() {
        let network = left.network_bits();
        let prefix = left.prefix_len().checked_sub(1)?;
        // Merging a misaligned pair would start the parent below `left`.
        if network & mask_bits::<F>(prefix) == network {
            return Some(Cidr::from_parts_unchecked(network, prefix));
        }
    }

    None
}

/// Aggregate `addresses` with a default-configured [`Aggregator`] for `order`.
pub fn aggregate<F: Family>(addresses: &[Cidr<F>], order: Order) -> Vec<Cidr<F>> {
    Aggregator::new(order).aggregate(addresses)
}

impl<F: Family> Cidr<F> {
    /// Aggregate a list of values of this family.
    ///
    /// Shorthand for [`aggregate`].
    pub fn aggregate(addresses: &[Self], order: Order) -> Vec<Self> {
        aggregate(addresses, order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ipv4Cidr, Ipv6Cidr};

    fn v4s(list: &[&str]) -> Vec<Ipv4Cidr> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn v6s(list: &[&str]) -> Vec<Ipv6Cidr> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_order_tokens() {
        assert_eq!("unsorted".parse::<Order>(), Ok(Order::Unsorted));
        assert_eq!("presorted".parse::<Order>(), Ok(Order::Presorted));
        assert_eq!(
            "wombat".parse::<Order>(),
            Err(InvalidArgument::UnknownOrder("wombat".into()))
        );
        assert_eq!(Order::default(), Order::Unsorted);
    }

    #[test]
    fn test_short_input_unchanged() {
        let one = v4s(&["192.168.0.1/24"]);
        assert_eq!(aggregate(&one, Order::Unsorted), one);
        assert!(aggregate::<crate::V6>(&[], Order::Presorted).is_empty());
    }

    #[test]
    fn test_try_merge_rules() {
        let a = v4s(&["192.168.0.0/24", "192.168.0.64/28"]);
        assert_eq!(try_merge(&a[0], &a[1]), Some(a[0]));

        let a = v4s(&["192.168.0.0/28", "192.168.0.16/28"]);
        assert_eq!(try_merge(&a[0], &a[1]).unwrap().to_string(), "192.168.0.0/27");

        // adjacent but misaligned
        let a = v4s(&["192.168.0.16/28", "192.168.0.32/28"]);
        assert_eq!(try_merge(&a[0], &a[1]), None);

        // adjacent but different sizes
        let a = v4s(&["192.168.0.0/28", "192.168.0.16/29"]);
        assert_eq!(try_merge(&a[0], &a[1]), None);
    }

    #[test]
    fn test_containment_of_host_yields_network() {
        let a = v4s(&["192.168.0.5/24", "192.168.0.9"]);
        assert_eq!(try_merge(&a[0], &a[1]).unwrap().to_string(), "192.168.0.0/24");
    }

    #[test]
    fn test_stats() {
        let nets = v4s(&["192.168.0.0/30", "192.168.0.4/31", "192.168.0.6/31"]);
        let (out, stats) = Aggregator::default().aggregate_with_stats(&nets);
        assert_eq!(out, v4s(&["192.168.0.0/29"]));
        assert_eq!(stats.input, 3);
        assert_eq!(stats.output, 1);
        assert_eq!(stats.merges, 2);
        assert_eq!(stats.sweeps, 3);
    }

    #[test]
    fn test_presorted_keeps_caller_order() {
        // Out of order and declared presorted: nothing adjacent, nothing merged.
        let nets = v4s(&["192.168.0.16/28", "192.168.0.0/28"]);
        assert_eq!(aggregate(&nets, Order::Presorted), nets);
        assert_eq!(
            aggregate(&nets, Order::Unsorted),
            v4s(&["192.168.0.0/27"])
        );
    }

    #[test]
    fn test_equal_network_wider_first() {
        let nets = v6s(&["fc00::/16", "fc00::/8"]);
        assert_eq!(aggregate(&nets, Order::Unsorted), v6s(&["fc00::/8"]));
    }

    #[test]
    fn test_whole_space() {
        let nets = v4s(&["0.0.0.0/1", "128.0.0.0/1"]);
        let out = aggregate(&nets, Order::Unsorted);
        assert_eq!(out, v4s(&["0.0.0.0/0"]));

        let nets = v4s(&["0.0.0.0/0", "10.0.0.0/8"]);
        assert_eq!(aggregate(&nets, Order::Unsorted), v4s(&["0.0.0.0/0"]));
    }
}
