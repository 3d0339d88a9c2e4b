//! List-file reading.
//!
//! One CIDR per line. A `#` line whose remainder is a CIDR declares an
//! expected aggregation result; any other `#` line is a comment.

use crate::error::DriverError;
use ipagg_core::IpCidr;
use std::path::Path;
use tracing::debug;

/// Parsed contents of a list file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddressList {
    /// Values to aggregate, in file order.
    pub addresses: Vec<IpCidr>,
    /// Declared expected results, in file order.
    pub expected: Vec<IpCidr>,
    /// Comment lines seen.
    pub comments: usize,
}

impl AddressList {
    /// Parse list-file text. Line numbers in errors are 1-based.
    pub fn parse(text: &str) -> Result<Self, DriverError> {
        let mut list = AddressList::default();

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(comment) = line.strip_prefix('#') {
                match comment.trim().parse::<IpCidr>() {
                    Ok(expected) => list.expected.push(expected),
                    Err(_) => {
                        debug!(line = index + 1, "Skipping comment");
                        list.comments += 1;
                    }
                }
                continue;
            }

            let address = line.parse::<IpCidr>().map_err(|source| DriverError::InvalidLine {
                line: index + 1,
                source,
            })?;
            list.addresses.push(address);
        }

        Ok(list)
    }

    /// Read and parse a list file.
    pub fn read(path: &Path) -> Result<Self, DriverError> {
        let text = std::fs::read_to_string(path).map_err(|source| DriverError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> IpCidr {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_list() {
        let text = "\
# two /28s that merge
192.168.0.0/28
  192.168.0.16/28

#192.168.0.0/27
";
        let list = AddressList::parse(text).unwrap();
        assert_eq!(list.addresses, vec![ip("192.168.0.0/28"), ip("192.168.0.16/28")]);
        assert_eq!(list.expected, vec![ip("192.168.0.0/27")]);
        assert_eq!(list.comments, 1);
    }

    #[test]
    fn test_invalid_line_reports_number() {
        let err = AddressList::parse("10.0.0.0/8\n\n10.0.0.0/88\n").unwrap_err();
        match err {
            DriverError::InvalidLine { line, source } => {
                assert_eq!(line, 3);
                assert_eq!(source.input, "10.0.0.0/88");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_empty_list() {
        let list = AddressList::parse("").unwrap();
        assert!(list.addresses.is_empty());
        assert!(list.expected.is_empty());
    }
}
