//! CIDR text codec.
//!
//! Per-family grammars live in [`v4`] and [`v6`]; this module splits
//! `"<addr>/<prefix>"` and decodes the prefix part, which may be a decimal
//! length or a mask written in the family's address form.

pub(crate) mod v4;
pub(crate) mod v6;

use nom::{character::complete::digit1, combinator::all_consuming};

use crate::error::{ParseError, ParseErrorKind};
use crate::family::Family;

/// Parse CIDR text into `(bits, prefix_len)` using the grammar of `F`.
///
/// A missing prefix means a single host (`F::BITS`).
pub(crate) fn parse_cidr<F: Family>(text: &str) -> Result<(u128, u8), ParseError> {
    let fail = |kind| ParseError::new(F::NAME, text, kind);

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(fail(ParseErrorKind::Empty));
    }

    let (address, prefix) = match trimmed.split_once('/') {
        Some((address, prefix)) => (address, Some(prefix)),
        None => (trimmed, None),
    };
    if address.is_empty() {
        return Err(fail(ParseErrorKind::Empty));
    }

    let bits = F::parse_address(address).map_err(fail)?;
    let prefix = match prefix {
        None => F::BITS,
        Some(mask) if F::is_mask_form(mask) => F::parse_mask(mask).map_err(fail)?,
        Some(len) => parse_prefix_len::<F>(len).map_err(fail)?,
    };

    Ok((bits, prefix))
}

/// Decimal prefix length, bounded by the family width.
fn parse_prefix_len<F: Family>(text: &str) -> Result<u8, ParseErrorKind> {
    let digits = all_consuming(digit1::<&str, nom::error::Error<&str>>)(text)
        .map(|(_, digits)| digits)
        .map_err(|_| ParseErrorKind::InvalidPrefix(text.to_owned()))?;

    let prefix: u32 = digits
        .parse()
        .map_err(|_| ParseErrorKind::InvalidPrefix(text.to_owned()))?;
    if prefix > u32::from(F::BITS) {
        return Err(ParseErrorKind::PrefixOutOfRange {
            prefix,
            width: F::BITS,
        });
    }

    Ok(prefix as u8)
}
