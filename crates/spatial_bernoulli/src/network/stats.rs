//! Graph statistics used to summarize and compare networks.
//!
//! Conventions (unweighted shortest paths, every edge has length 1):
//! - closeness of `v` is `1 / Σ dist(v, u)` over nodes `u ≠ v` reachable from `v`;
//!   a node with no reachable peers has closeness 0
//! - betweenness is Brandes' unnormalized count over unordered node pairs
//! - density is `m / (n(n-1)/2)`, and 0 for fewer than two nodes
use std::collections::VecDeque;

use crate::network::Network;

/// The five statistics reported for each network in a comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkStats {
    pub density: f64,
    pub mean_degree: f64,
    pub mean_closeness: f64,
    pub mean_betweenness: f64,
    pub largest_component_size: usize,
}

impl NetworkStats {
    pub fn of(network: &Network) -> Self {
        Self {
            density: density(network),
            mean_degree: mean_degree(network),
            mean_closeness: mean(&closeness_centrality(network)),
            mean_betweenness: mean(&betweenness_centrality(network)),
            largest_component_size: largest_component_size(network),
        }
    }

    /// Values in column order: density, mean degree, mean closeness, mean betweenness,
    /// largest component size.
    pub fn values(&self) -> [f64; 5] {
        [
            self.density,
            self.mean_degree,
            self.mean_closeness,
            self.mean_betweenness,
            self.largest_component_size as f64,
        ]
    }
}

pub fn density(network: &Network) -> f64 {
    let n = network.node_count();
    if n < 2 {
        return 0.0;
    }
    let possible = (n * (n - 1)) as f64 / 2.0;
    network.edge_count() as f64 / possible
}

pub fn mean_degree(network: &Network) -> f64 {
    let n = network.node_count();
    if n == 0 {
        return 0.0;
    }
    (2 * network.edge_count()) as f64 / n as f64
}

/// Hop distances from `source`; `None` for unreachable nodes.
pub fn shortest_path_lengths(network: &Network, source: usize) -> Vec<Option<usize>> {
    let mut dist = vec![None; network.node_count()];
    let mut queue = VecDeque::new();
    dist[source] = Some(0);
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        let next = dist[v].map_or(0, |d| d + 1);
        for &w in network.neighbors(v) {
            if dist[w].is_none() {
                dist[w] = Some(next);
                queue.push_back(w);
            }
        }
    }

    dist
}

pub fn closeness_centrality(network: &Network) -> Vec<f64> {
    (0..network.node_count())
        .map(|v| {
            let total: usize = shortest_path_lengths(network, v).into_iter().flatten().sum();
            if total == 0 {
                0.0
            } else {
                1.0 / total as f64
            }
        })
        .collect()
}

/// Brandes' algorithm for unweighted undirected graphs.
pub fn betweenness_centrality(network: &Network) -> Vec<f64> {
    let n = network.node_count();
    let mut centrality = vec![0.0; n];

    let mut stack = Vec::with_capacity(n);
    let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut sigma = vec![0.0f64; n];
    let mut dist: Vec<Option<usize>> = vec![None; n];
    let mut delta = vec![0.0f64; n];
    let mut queue = VecDeque::with_capacity(n);

    for s in 0..n {
        stack.clear();
        for p in &mut preds {
            p.clear();
        }
        sigma.fill(0.0);
        dist.fill(None);
        delta.fill(0.0);

        sigma[s] = 1.0;
        dist[s] = Some(0);
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            stack.push(v);
            let dv = dist[v].unwrap_or(0);
            for &w in network.neighbors(v) {
                if dist[w].is_none() {
                    dist[w] = Some(dv + 1);
                    queue.push_back(w);
                }
                if dist[w] == Some(dv + 1) {
                    sigma[w] += sigma[v];
                    preds[w].push(v);
                }
            }
        }

        while let Some(w) = stack.pop() {
            for &v in &preds[w] {
                delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
            }
            if w != s {
                centrality[w] += delta[w];
            }
        }
    }

    // Each unordered pair was counted from both endpoints.
    for c in &mut centrality {
        *c /= 2.0;
    }
    centrality
}

/// Connected components, each sorted ascending, ordered by their smallest node.
pub fn connected_components(network: &Network) -> Vec<Vec<usize>> {
    let n = network.node_count();
    let mut seen = vec![false; n];
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for start in 0..n {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        queue.push_back(start);
        let mut component = Vec::new();
        while let Some(v) = queue.pop_front() {
            component.push(v);
            for &w in network.neighbors(v) {
                if !seen[w] {
                    seen[w] = true;
                    queue.push_back(w);
                }
            }
        }
        component.sort_unstable();
        components.push(component);
    }

    components
}

pub fn largest_component_size(network: &Network) -> usize {
    connected_components(network)
        .iter()
        .map(Vec::len)
        .max()
        .unwrap_or(0)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
