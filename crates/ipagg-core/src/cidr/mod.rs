//! Address-with-prefix values.

mod iter;
mod serialize;
mod types;

pub use self::iter::Enumerate;
pub use self::types::{Cidr, Ipv4Cidr, Ipv6Cidr};
