//! # ipagg-core
//!
//! IPv4 and IPv6 address-with-prefix values, their text forms, and CIDR
//! aggregation.
//!
//! ## Features
//!
//! - Parsing of `addr/len`, `addr/mask`, and bare addresses for both families
//! - RFC 5952 compressed, uncompressed, and fully padded IPv6 rendering
//! - IPv4-mapped IPv6 addresses rendered with a dotted-quad tail
//! - Network, broadcast, and mask derivation with range predicates
//! - Lazy host and address enumeration
//! - Aggregation of a list of ranges into the smallest equivalent list
//! - Optional serde support (`serde` feature) and proptest strategies
//!   (`proptest` feature)

#![deny(clippy::all)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ### Parsing and rendering
//!
//! ```rust
//! use ipagg_core::{Ipv4Cidr, Ipv6Cidr, Presentation};
//!
//! let net: Ipv4Cidr = "192.168.0.77/255.255.255.240".parse().unwrap();
//! assert_eq!(net.to_string(), "192.168.0.77/28");
//! assert_eq!(net.network().to_string(), "192.168.0.64/28");
//!
//! let ip: Ipv6Cidr = "2001:0db8:0000:0000:0000:0000:0000:0001/64".parse().unwrap();
//! assert_eq!(ip.to_string(), "2001:db8::1/64");
//! assert_eq!(
//!     ip.mask(Presentation::String).unwrap().to_string(),
//!     "ffff:ffff:ffff:ffff::"
//! );
//! ```
//!
//! ### Aggregating
//!
//! ```rust
//! use ipagg_core::{Ipv6Cidr, Order};
//!
//! let nets: Vec<Ipv6Cidr> = ["fd00::/8", "fc00::/8", "fc00::1"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! let merged = Ipv6Cidr::aggregate(&nets, Order::Unsorted);
//! assert_eq!(merged.len(), 1);
//! assert_eq!(merged[0].to_string(), "fc00::/7");
//! ```

pub mod aggregate;
#[cfg(feature = "proptest")]
pub mod arbitrary;
pub mod cidr;
mod codec;
pub mod error;
pub mod family;
pub mod ip;
pub mod presentation;

pub use self::aggregate::{aggregate, AggregateStats, Aggregator, Order};
pub use self::cidr::{Cidr, Enumerate, Ipv4Cidr, Ipv6Cidr};
pub use self::error::{Error, InvalidArgument, ParseError, ParseErrorKind, Result};
pub use self::family::{mask_bits, Family, IpVersion, V4, V6};
pub use self::ip::{aggregate_mixed, aggregate_mixed_with_stats, IpCidr};
pub use self::presentation::{Element, Presentation, Rendered};
