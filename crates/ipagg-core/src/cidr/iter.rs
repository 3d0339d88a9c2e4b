//! Lazy enumeration of the addresses in a range.

use std::iter::FusedIterator;

use crate::family::Family;
use crate::presentation::Element;

use super::types::Cidr;

/// Iterator over members of a [`Cidr`] range, in ascending address order.
///
/// Every yielded value keeps the prefix length of the range it came from.
/// Cloning the iterator (or calling [`Cidr::enumerate`] again) restarts it.
#[derive(Clone, Debug)]
pub struct Enumerate<F: Family> {
    front: u128,
    back: u128,
    prefix: u8,
    done: bool,
    origin: Cidr<F>,
}

impl<F: Family> Enumerate<F> {
    pub(crate) fn new(cidr: &Cidr<F>, element: Element) -> Self {
        let (front, back) = if cidr.is_host() {
            (cidr.address_bits(), cidr.address_bits())
        } else {
            let network = cidr.network_bits();
            let broadcast = cidr.broadcast_bits();
            match element {
                // point-to-point ranges have no network/broadcast distinction
                Element::Host if broadcast - network > 1 => (network + 1, broadcast - 1),
                _ => (network, broadcast),
            }
        };
        Self {
            front,
            back,
            prefix: cidr.prefix_len(),
            done: false,
            origin: *cidr,
        }
    }

    fn remaining(&self) -> u128 {
        if self.done {
            0
        } else {
            // a non-host range never spans the whole 128-bit space
            self.back - self.front + 1
        }
    }

    fn make(&self, bits: u128) -> Cidr<F> {
        if bits == self.origin.address_bits() {
            self.origin
        } else {
            Cidr::from_parts_unchecked(bits, self.prefix)
        }
    }
}

impl<F: Family> Iterator for Enumerate<F> {
    type Item = Cidr<F>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let bits = self.front;
        if self.front == self.back {
            self.done = true;
        } else {
            self.front += 1;
        }
        Some(self.make(bits))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<F: Family> DoubleEndedIterator for Enumerate<F> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let bits = self.back;
        if self.front == self.back {
            self.done = true;
        } else {
            self.back -= 1;
        }
        Some(self.make(bits))
    }
}

impl<F: Family> FusedIterator for Enumerate<F> {}

#[cfg(test)]
mod tests {
    use crate::presentation::Element;
    use crate::{Ipv4Cidr, Ipv6Cidr};

    fn v6(s: &str) -> Ipv6Cidr {
        s.parse().unwrap()
    }

    #[test]
    fn test_addresses_include_endpoints() {
        let got: Vec<_> = v6("fc00::/126").enumerate(Element::Address).collect();
        let want: Vec<_> = (0..4).map(|i| v6(&format!("fc00::{}/126", i))).collect();
        assert_eq!(got, want);
    }

    #[test]
    fn test_hosts_exclude_endpoints() {
        let got: Vec<_> = v6("fc00::/126").hosts().collect();
        assert_eq!(got, vec![v6("fc00::1/126"), v6("fc00::2/126")]);
        assert!(got.iter().all(|ip| ip.prefix_len() == 126));
    }

    #[test]
    fn test_point_to_point_hosts() {
        let ptp: Ipv4Cidr = "10.0.0.0/31".parse().unwrap();
        let got: Vec<String> = ptp.hosts().map(|ip| ip.to_string()).collect();
        assert_eq!(got, vec!["10.0.0.0/31", "10.0.0.1/31"]);

        let ptp = v6("fc00::/127");
        assert_eq!(ptp.hosts().count(), 2);
    }

    #[test]
    fn test_host_yields_itself_once() {
        let ip = v6("::1/128");
        let got: Vec<_> = ip.enumerate(Element::Address).collect();
        assert_eq!(got, vec![ip]);
        assert_eq!(ip.hosts().collect::<Vec<_>>(), vec![ip]);

        // host bits set: still a host, still yields itself
        let ip: Ipv4Cidr = "192.168.0.5/24".parse().unwrap();
        assert_eq!(ip.addresses().collect::<Vec<_>>(), vec![ip]);
    }

    #[test]
    fn test_restartable_and_reversible() {
        let net: Ipv4Cidr = "192.168.0.0/29".parse().unwrap();
        let iter = net.hosts();
        assert_eq!(iter.size_hint(), (6, Some(6)));
        assert_eq!(iter.clone().count(), 6);
        assert_eq!(iter.clone().count(), 6);

        let last = net.hosts().next_back().unwrap();
        assert_eq!(last.to_string(), "192.168.0.6/29");

        let mut iter = net.hosts();
        iter.next();
        iter.next_back();
        assert_eq!(iter.count(), 4);
    }

    #[test]
    fn test_huge_range_size_hint() {
        let net = v6("fc00::/8");
        let (low, high) = net.addresses().size_hint();
        assert_eq!(low, usize::MAX);
        assert_eq!(high, None);
        assert_eq!(net.addresses().next(), Some(net));
    }
}
