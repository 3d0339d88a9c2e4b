//! IPv6 text grammar and RFC 5952 rendering.
//!
//! # Reference
//! - RFC 4291 Section 2.2: Text representation of addresses
//! - RFC 5952 Section 4: A recommendation for IPv6 text representation

use std::fmt::Write;

use nom::{
    bytes::complete::take_while_m_n,
    combinator::{all_consuming, map_res},
    IResult,
};
use smallvec::SmallVec;

use super::v4;
use crate::error::ParseErrorKind;

const GROUPS: usize = 8;

/// Top 96 bits of an IPv4-mapped address (`::ffff:0:0/96`).
const MAPPED_PREFIX: u128 = 0xffff;

type Groups = SmallVec<[u16; GROUPS]>;

/// One hex group, 1 to 4 digits, either case.
fn hex_group(input: &str) -> IResult<&str, u16> {
    map_res(
        take_while_m_n(1, 4, |c: char| c.is_ascii_hexdigit()),
        |digits: &str| u16::from_str_radix(digits, 16),
    )(input)
}

/// Parse the groups on one side of a `::` (or the whole address when there
/// is none). When `embedded_v4` is set the final piece may be a dotted quad,
/// which contributes two groups.
fn parse_side(text: &str, embedded_v4: bool) -> Result<Groups, ParseErrorKind> {
    let mut groups = Groups::new();
    if text.is_empty() {
        return Ok(groups);
    }

    let mut pieces = text.split(':').peekable();
    while let Some(piece) = pieces.next() {
        let last = pieces.peek().is_none();
        if last && embedded_v4 && piece.contains('.') {
            // Any quad error other than a bad octet is a bad final group.
            let quad = v4::parse_address(piece).map_err(|kind| match kind {
                ParseErrorKind::InvalidOctet(octet) => ParseErrorKind::InvalidOctet(octet),
                _ => ParseErrorKind::InvalidHexGroup(piece.to_owned()),
            })?;
            groups.push((quad >> 16) as u16);
            groups.push(quad as u16);
            continue;
        }
        match all_consuming(hex_group)(piece) {
            Ok((_, group)) => groups.push(group),
            Err(_) => return Err(ParseErrorKind::InvalidHexGroup(piece.to_owned())),
        }
    }

    Ok(groups)
}

/// Parse IPv6 address text into its 128 bits.
///
/// Accepts eight groups, or fewer with exactly one `::` standing for at
/// least one zero group, optionally ending in an embedded dotted quad.
pub(crate) fn parse_address(text: &str) -> Result<u128, ParseErrorKind> {
    let groups = match text.split_once("::") {
        Some((head, tail)) => {
            if tail.contains("::") {
                return Err(ParseErrorKind::MultipleCompressions);
            }
            let head = parse_side(head, false)?;
            let tail = parse_side(tail, true)?;
            let found = head.len() + tail.len();
            if found >= GROUPS {
                return Err(ParseErrorKind::WrongGroupCount {
                    expected: GROUPS,
                    found,
                });
            }
            let mut groups = head;
            groups.extend(std::iter::repeat(0).take(GROUPS - found));
            groups.extend(tail);
            groups
        }
        None => {
            let groups = parse_side(text, true)?;
            if groups.len() != GROUPS {
                return Err(ParseErrorKind::WrongGroupCount {
                    expected: GROUPS,
                    found: groups.len(),
                });
            }
            groups
        }
    };

    Ok(groups
        .iter()
        .fold(0u128, |bits, &group| (bits << 16) | u128::from(group)))
}

/// Decode a mask written as an IPv6 address (`ffff:ffff:ff00::`) into a
/// prefix length. The ones must be contiguous from the top.
pub(crate) fn parse_grouped_mask(text: &str) -> Result<u8, ParseErrorKind> {
    let bits = parse_address(text)?;
    let ones = bits.leading_ones();
    if ones + bits.trailing_zeros() < 128 {
        return Err(ParseErrorKind::InvalidPrefix(text.to_owned()));
    }
    Ok(ones as u8)
}

/// Split 128 bits into eight 16-bit groups, most significant first.
fn groups(bits: u128) -> [u16; GROUPS] {
    let mut out = [0u16; GROUPS];
    for (i, group) in out.iter_mut().enumerate() {
        *group = (bits >> (16 * (GROUPS - 1 - i))) as u16;
    }
    out
}

fn join_groups(out: &mut String, groups: &[u16]) {
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push(':');
        }
        let _ = write!(out, "{:x}", group);
    }
}

/// Eight hex groups, each zero-padded to four digits.
pub(crate) fn format_full(bits: u128) -> String {
    let mut out = String::with_capacity(39);
    for (i, group) in groups(bits).iter().enumerate() {
        if i > 0 {
            out.push(':');
        }
        let _ = write!(out, "{:04x}", group);
    }
    out
}

/// Eight hex groups without padding or `::`.
pub(crate) fn format_uncompressed(bits: u128) -> String {
    let mut out = String::with_capacity(39);
    join_groups(&mut out, &groups(bits));
    out
}

/// Find the run of zero groups to replace with `::`.
///
/// Returns `(start, len)` of the longest run of two or more zero groups,
/// the leftmost one on ties, or `None` when no such run exists.
pub(crate) fn longest_zero_run(groups: &[u16]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut run_start = 0;
    let mut run_len = 0;

    for (i, &group) in groups.iter().enumerate() {
        if group == 0 {
            if run_len == 0 {
                run_start = i;
            }
            run_len += 1;
        } else {
            run_len = 0;
        }
        // Strictly longer only: an equal later run never displaces the first.
        if run_len >= 2 && best.map_or(true, |(_, len)| run_len > len) {
            best = Some((run_start, run_len));
        }
    }

    best
}

fn write_compressed(out: &mut String, groups: &[u16]) {
    match longest_zero_run(groups) {
        Some((start, len)) => {
            join_groups(out, &groups[..start]);
            out.push_str("::");
            join_groups(out, &groups[start + len..]);
        }
        None => join_groups(out, groups),
    }
}

/// RFC 5952 canonical text.
pub(crate) fn format_compressed(bits: u128) -> String {
    let mut out = String::with_capacity(39);
    write_compressed(&mut out, &groups(bits));
    out
}

/// Whether a value with these bits and prefix is IPv4-mapped: the top 96
/// bits are `::ffff:0:0` and the prefix does not reach above them.
#[inline]
pub(crate) fn is_ipv4_mapped(bits: u128, prefix: u8) -> bool {
    prefix >= 96 && bits >> 32 == MAPPED_PREFIX
}

/// IPv4-mapped text: the upper six groups compressed as usual, then the low
/// 32 bits as a dotted quad.
pub(crate) fn format_mapped(bits: u128) -> String {
    let mut out = String::with_capacity(22);
    write_compressed(&mut out, &groups(bits)[..6]);
    out.push(':');
    out.push_str(&v4::format_dotted_quad(bits as u32));
    out
}
