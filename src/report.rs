//! Result rendering and comparison against declared expectations.

use crate::error::DriverError;
use ipagg_core::{AggregateStats, InvalidArgument, IpCidr, Presentation};
use std::collections::HashSet;
use std::io::Write;

/// Render one result as `<address>/<prefix>` in `presentation`.
pub fn render(cidr: &IpCidr, presentation: Presentation) -> Result<String, InvalidArgument> {
    Ok(format!("{}/{}", cidr.address(presentation)?, cidr.prefix_len()))
}

/// Write every result, one per line.
pub fn write_results<W: Write>(
    out: &mut W,
    results: &[IpCidr],
    presentation: Presentation,
) -> Result<(), DriverError> {
    for cidr in results {
        let line = render(cidr, presentation).map_err(DriverError::Render)?;
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Write the stats comment line.
pub fn write_stats<W: Write>(
    out: &mut W,
    stats: &AggregateStats,
    iterations: u32,
) -> std::io::Result<()> {
    writeln!(
        out,
        "# input={} output={} merges={} sweeps={} iterations={}",
        stats.input, stats.output, stats.merges, stats.sweeps, iterations
    )
}

/// Differences between declared and actual results.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Mismatch {
    /// Declared but not produced.
    pub missing: Vec<IpCidr>,
    /// Produced but not declared.
    pub unexpected: Vec<IpCidr>,
}

impl Mismatch {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

/// Compare results with expectations, ignoring order.
pub fn compare(expected: &[IpCidr], results: &[IpCidr]) -> Mismatch {
    let expected_set: HashSet<&IpCidr> = expected.iter().collect();
    let result_set: HashSet<&IpCidr> = results.iter().collect();

    Mismatch {
        missing: expected
            .iter()
            .filter(|cidr| !result_set.contains(cidr))
            .copied()
            .collect(),
        unexpected: results
            .iter()
            .filter(|cidr| !expected_set.contains(cidr))
            .copied()
            .collect(),
    }
}
