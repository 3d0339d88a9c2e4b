use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::family::Family;
use crate::presentation::Presentation;

use super::types::Cidr;

impl<F: Family> fmt::Display for Cidr<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let address = F::render_text(self.address_bits(), self.prefix_len(), Presentation::String);
        write!(f, "{}/{}", address, self.prefix_len())
    }
}

impl<F: Family> FromStr for Cidr<F> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cidr::parse(s)
    }
}

#[cfg(feature = "serde")]
impl<F: Family> serde::Serialize for Cidr<F> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, F: Family> serde::Deserialize<'de> for Cidr<F> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
