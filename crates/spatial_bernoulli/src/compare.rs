//! Side-by-side comparison of two networks.
use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::network::{Network, NetworkStats};

/// Column headers, in report order.
pub const COLUMNS: [&str; 5] = [
    "Density",
    "Mean Degree",
    "Mean Closeness",
    "Mean Betweenness",
    "Largest Component Size",
];

/// One labeled row of a [`ComparisonReport`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonRow {
    pub label: String,
    pub stats: NetworkStats,
}

impl ComparisonRow {
    /// Statistic values in [`COLUMNS`] order.
    pub fn values(&self) -> [f64; 5] {
        self.stats.values()
    }
}

/// Two rows (one per network) by five statistic columns.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonReport {
    rows: [ComparisonRow; 2],
}

impl ComparisonReport {
    pub fn columns(&self) -> &'static [&'static str; 5] {
        &COLUMNS
    }

    pub fn rows(&self) -> &[ComparisonRow; 2] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&ComparisonRow> {
        self.rows.get(index)
    }

    /// Row-major values: `values()[row][column]`.
    pub fn values(&self) -> [[f64; 5]; 2] {
        [self.rows[0].values(), self.rows[1].values()]
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0);

        write!(f, "{:label_width$}", "")?;
        for column in COLUMNS {
            write!(f, "  {column:>w$}", w = column.len().max(10))?;
        }
        for row in &self.rows {
            writeln!(f)?;
            write!(f, "{:label_width$}", row.label)?;
            for (column, value) in COLUMNS.iter().zip(row.values()) {
                let w = column.len().max(10);
                if *column == "Largest Component Size" {
                    write!(f, "  {:>w$}", row.stats.largest_component_size)?;
                } else {
                    write!(f, "  {value:>w$.4}")?;
                }
            }
        }
        Ok(())
    }
}

/// Compute the five statistics for each network independently and tabulate them.
///
/// Fails with [`Error::InvalidInput`] if either network has no nodes.
pub fn compare(
    net1: &Network,
    net2: &Network,
    label1: impl Into<String>,
    label2: impl Into<String>,
) -> Result<ComparisonReport> {
    let label1 = label1.into();
    let label2 = label2.into();
    for (label, net) in [(&label1, net1), (&label2, net2)] {
        if net.is_empty() {
            return Err(Error::InvalidInput(format!(
                "network '{label}' has no nodes"
            )));
        }
    }

    let report = ComparisonReport {
        rows: [
            ComparisonRow {
                label: label1,
                stats: NetworkStats::of(net1),
            },
            ComparisonRow {
                label: label2,
                stats: NetworkStats::of(net2),
            },
        ],
    };
    debug!("Compared networks:\n{}", report);
    Ok(report)
}
