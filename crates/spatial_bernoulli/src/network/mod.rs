//! Undirected simple graphs derived from point patterns.
//!
//! - [`builder`]: distance matrix -> tie probabilities -> thresholded adjacency
//! - [`config`]: interaction function, parameters, threshold
//! - [`events`]: observation hooks for network construction
//! - [`stats`]: density, degree, closeness, betweenness, components
use std::fmt;

use glam::DVec2;

use crate::error::{Error, Result};
use crate::points::PointPatternKind;

pub mod builder;
pub mod config;
pub mod events;
pub mod stats;

pub use builder::{build_network, build_network_with_events, probability_matrix, NetworkBuilder};
pub use config::NetworkConfig;
pub use stats::NetworkStats;

/// Undirected simple graph: no self loops, no parallel edges, unweighted.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    /// Sorted neighbor lists, one per node.
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
    positions: Option<Vec<DVec2>>,
    pattern: Option<PointPatternKind>,
    config: Option<NetworkConfig>,
}

impl Network {
    /// Build a network with `node_count` nodes from an edge list.
    ///
    /// Self loops and duplicate edges (in either orientation) are dropped. Fails with
    /// [`Error::InvalidInput`] if an edge references a node outside `0..node_count`.
    pub fn from_edges<I>(node_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut adjacency = vec![Vec::new(); node_count];
        for (a, b) in edges {
            if a >= node_count || b >= node_count {
                return Err(Error::InvalidInput(format!(
                    "edge ({a}, {b}) references a node outside 0..{node_count}"
                )));
            }
            if a == b {
                continue;
            }
            adjacency[a].push(b);
            adjacency[b].push(a);
        }
        for neighbors in &mut adjacency {
            neighbors.sort_unstable();
            neighbors.dedup();
        }
        Ok(Self::from_adjacency(adjacency))
    }

    /// Neighbor lists must be sorted, deduplicated, symmetric and loop-free.
    pub(crate) fn from_adjacency(adjacency: Vec<Vec<usize>>) -> Self {
        let degree_sum: usize = adjacency.iter().map(Vec::len).sum();
        Self {
            adjacency,
            edge_count: degree_sum / 2,
            positions: None,
            pattern: None,
            config: None,
        }
    }

    pub(crate) fn with_origin(
        mut self,
        positions: Vec<DVec2>,
        pattern: PointPatternKind,
        config: NetworkConfig,
    ) -> Self {
        self.positions = Some(positions);
        self.pattern = Some(pattern);
        self.config = Some(config);
        self
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Sorted neighbors of `node`.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    pub fn degree(&self, node: usize) -> usize {
        self.adjacency[node].len()
    }

    pub fn degrees(&self) -> Vec<usize> {
        self.adjacency.iter().map(Vec::len).collect()
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|n| n.binary_search(&b).is_ok())
    }

    /// Edges as `(lower, higher)` index pairs in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(i, neighbors)| {
            neighbors
                .iter()
                .copied()
                .filter(move |&j| j > i)
                .map(move |j| (i, j))
        })
    }

    /// Dense 0/1 adjacency matrix.
    pub fn adjacency_matrix(&self) -> Vec<Vec<u8>> {
        let n = self.node_count();
        let mut matrix = vec![vec![0u8; n]; n];
        for (i, neighbors) in self.adjacency.iter().enumerate() {
            for &j in neighbors {
                matrix[i][j] = 1;
            }
        }
        matrix
    }

    /// Node positions, when the network was built from a point set.
    pub fn positions(&self) -> Option<&[DVec2]> {
        self.positions.as_deref()
    }

    /// Strategy of the point pattern the network was built from.
    pub fn pattern(&self) -> Option<PointPatternKind> {
        self.pattern
    }

    /// Configuration the network was built with.
    pub fn config(&self) -> Option<&NetworkConfig> {
        self.config.as_ref()
    }

    pub fn stats(&self) -> NetworkStats {
        NetworkStats::of(self)
    }

    pub fn summary(&self) -> NetworkSummary {
        NetworkSummary {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            pattern: self.pattern,
            config: self.config,
            stats: self.stats(),
        }
    }
}

/// Printable overview of a [`Network`].
#[derive(Debug, Clone)]
pub struct NetworkSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub pattern: Option<PointPatternKind>,
    pub config: Option<NetworkConfig>,
    pub stats: NetworkStats,
}

impl fmt::Display for NetworkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Spatial Bernoulli network: {} nodes, {} edges",
            self.node_count, self.edge_count
        )?;
        if let Some(pattern) = self.pattern {
            writeln!(f, "  point pattern:     {pattern:?}")?;
        }
        if let Some(cfg) = &self.config {
            writeln!(
                f,
                "  interaction:       {} (base_prob={}, scale={}, power={}, threshold={})",
                cfg.sif, cfg.params.base_prob, cfg.params.scale, cfg.params.power, cfg.threshold
            )?;
        }
        writeln!(f, "  density:           {:.4}", self.stats.density)?;
        writeln!(f, "  mean degree:       {:.4}", self.stats.mean_degree)?;
        writeln!(f, "  mean closeness:    {:.4}", self.stats.mean_closeness)?;
        writeln!(f, "  mean betweenness:  {:.4}", self.stats.mean_betweenness)?;
        write!(
            f,
            "  largest component: {}",
            self.stats.largest_component_size
        )
    }
}
