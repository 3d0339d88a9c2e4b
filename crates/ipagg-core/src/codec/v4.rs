//! IPv4 text grammar: dotted quads and dotted masks.

use std::net::Ipv4Addr;

use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{all_consuming, map_res},
    sequence::{preceded, tuple},
    IResult,
};

use crate::error::ParseErrorKind;

/// One decimal octet, 1 to 3 digits, at most 255.
fn octet(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(1, 3, |c: char| c.is_ascii_digit()),
        |digits: &str| digits.parse::<u8>(),
    )(input)
}

fn dotted_quad(input: &str) -> IResult<&str, [u8; 4]> {
    let (rest, (a, b, c, d)) = tuple((
        octet,
        preceded(char('.'), octet),
        preceded(char('.'), octet),
        preceded(char('.'), octet),
    ))(input)?;
    Ok((rest, [a, b, c, d]))
}

/// Parse four dotted decimal octets.
pub(crate) fn parse_octets(text: &str) -> Result<[u8; 4], ParseErrorKind> {
    match all_consuming(dotted_quad)(text) {
        Ok((_, octets)) => Ok(octets),
        Err(_) => Err(diagnose(text)),
    }
}

/// Parse a dotted quad into its 32 address bits.
pub(crate) fn parse_address(text: &str) -> Result<u32, ParseErrorKind> {
    parse_octets(text).map(u32::from_be_bytes)
}

/// Work out why `text` is not a dotted quad.
fn diagnose(text: &str) -> ParseErrorKind {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != 4 {
        return ParseErrorKind::WrongGroupCount {
            expected: 4,
            found: parts.len(),
        };
    }
    parts
        .iter()
        .find(|part| all_consuming(octet)(**part).is_err())
        .map(|part| ParseErrorKind::InvalidOctet((*part).to_owned()))
        .unwrap_or_else(|| ParseErrorKind::TrailingInput(text.to_owned()))
}

/// Decode a dotted mask such as `255.255.240.0` into a prefix length.
///
/// Every leading `255` contributes 8 bits; the first other octet contributes
/// its count of leading ones and must be a contiguous run (128, 192, ...,
/// 254) or zero. All octets after it must be zero.
pub(crate) fn parse_dotted_mask(text: &str) -> Result<u8, ParseErrorKind> {
    let octets = parse_octets(text)?;
    let mut prefix = 0u8;
    let mut ended = false;

    for octet in octets {
        if ended {
            if octet != 0 {
                return Err(ParseErrorKind::InvalidMaskOctet(octet));
            }
            continue;
        }
        let ones = octet.leading_ones();
        if ones + octet.trailing_zeros() != 8 {
            return Err(ParseErrorKind::InvalidMaskOctet(octet));
        }
        prefix += ones as u8;
        ended = ones < 8;
    }

    Ok(prefix)
}

/// Render 32 address bits as a dotted quad.
pub(crate) fn format_dotted_quad(bits: u32) -> String {
    Ipv4Addr::from(bits).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("192.168.0.1"), Ok(0xc0a8_0001));
        assert_eq!(parse_address("0.0.0.0"), Ok(0));
        assert_eq!(parse_address("255.255.255.255"), Ok(u32::MAX));
        assert_eq!(parse_address("010.0.0.1"), Ok(0x0a00_0001));
    }

    #[test]
    fn test_parse_address_errors() {
        assert_eq!(
            parse_address("192.168.0"),
            Err(ParseErrorKind::WrongGroupCount {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            parse_address("192.168.0.256"),
            Err(ParseErrorKind::InvalidOctet("256".into()))
        );
        assert_eq!(
            parse_address("192.168..1"),
            Err(ParseErrorKind::InvalidOctet("".into()))
        );
        assert_eq!(
            parse_address("192.168.0.1x"),
            Err(ParseErrorKind::InvalidOctet("1x".into()))
        );
        assert_eq!(
            parse_address("192.168.0.+1"),
            Err(ParseErrorKind::InvalidOctet("+1".into()))
        );
    }

    #[test]
    fn test_dotted_mask() {
        assert_eq!(parse_dotted_mask("255.255.255.240"), Ok(28));
        assert_eq!(parse_dotted_mask("255.255.255.255"), Ok(32));
        assert_eq!(parse_dotted_mask("255.0.0.0"), Ok(8));
        assert_eq!(parse_dotted_mask("0.0.0.0"), Ok(0));
        assert_eq!(parse_dotted_mask("254.0.0.0"), Ok(7));
        assert_eq!(parse_dotted_mask("255.255.128.0"), Ok(17));
    }

    // A mask with ones after its first hole is rejected outright instead of
    // being read up to the hole.
    #[test]
    fn test_dotted_mask_rejects_holes() {
        assert_eq!(
            parse_dotted_mask("255.255.253.0"),
            Err(ParseErrorKind::InvalidMaskOctet(253))
        );
        assert_eq!(
            parse_dotted_mask("255.0.255.0"),
            Err(ParseErrorKind::InvalidMaskOctet(255))
        );
        assert_eq!(
            parse_dotted_mask("255.240.0.1"),
            Err(ParseErrorKind::InvalidMaskOctet(1))
        );
    }

    #[test]
    fn test_format() {
        assert_eq!(format_dotted_quad(0xc0a8_0010), "192.168.0.16");
        assert_eq!(format_dotted_quad(0), "0.0.0.0");
    }
}
