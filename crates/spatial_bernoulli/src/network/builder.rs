//! Builds networks from point sets by thresholding tie probabilities.
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::matrix::ProbabilityMatrix;
use crate::network::config::NetworkConfig;
use crate::network::events::{EventSink, NetworkEvent, NetworkEventKind};
use crate::network::Network;
use crate::points::PointSet;

/// Reusable builder holding a validated [`NetworkConfig`].
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    /// Configuration applied to every build.
    pub config: NetworkConfig,
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self {
            config: NetworkConfig::default(),
        }
    }
}

impl NetworkBuilder {
    pub fn try_new(config: NetworkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Builds a network over `points`.
    pub fn build(&self, points: &PointSet) -> Result<Network> {
        build_network(points, &self.config)
    }

    pub fn build_with_events(
        &self,
        points: &PointSet,
        sink: &mut dyn EventSink,
    ) -> Result<Network> {
        build_network_with_events(points, &self.config, sink)
    }
}

/// Tie probabilities for every ordered pair of points, diagonal included.
pub fn probability_matrix(points: &PointSet, config: &NetworkConfig) -> Result<ProbabilityMatrix> {
    ensure_buildable(points, config)?;
    Ok(points
        .distance_matrix()
        .map(|distance| config.probability(distance)))
}

/// Derive an undirected simple network from `points`.
///
/// Edge `(i, j)` exists iff `i != j` and the tie probability at their distance is strictly
/// greater than `config.threshold`.
pub fn build_network(points: &PointSet, config: &NetworkConfig) -> Result<Network> {
    build_network_with_events(points, config, &mut ())
}

pub fn build_network_with_events(
    points: &PointSet,
    config: &NetworkConfig,
    sink: &mut dyn EventSink,
) -> Result<Network> {
    ensure_buildable(points, config)?;

    let n = points.len();
    debug!(
        "Building network over {} points with {} (base_prob={}, scale={}, power={}, threshold={}).",
        n,
        config.sif,
        config.params.base_prob,
        config.params.scale,
        config.params.power,
        config.threshold
    );
    if sink.wants(NetworkEventKind::BuildStarted) {
        sink.send(NetworkEvent::BuildStarted {
            node_count: n,
            config: *config,
        });
    }

    let distances = points.distance_matrix();
    let probabilities = distances.map(|distance| config.probability(distance));

    // Rows are visited in ascending order, so neighbor lists come out sorted.
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
    for i in 0..n {
        // Self loops are never materialized, even when the distance-zero probability
        // clears the threshold.
        let self_probability = probabilities.get(i, i);
        if self_probability > config.threshold
            && sink.wants(NetworkEventKind::SelfLoopDropped)
        {
            sink.send(NetworkEvent::SelfLoopDropped {
                node: i,
                probability: self_probability,
            });
        }

        for j in (i + 1)..n {
            let probability = probabilities.get(i, j);
            if probability > config.threshold {
                adjacency[i].push(j);
                adjacency[j].push(i);
                if sink.wants(NetworkEventKind::EdgeAdded) {
                    sink.send(NetworkEvent::EdgeAdded {
                        source: i,
                        target: j,
                        distance: distances.get(i, j),
                        probability,
                    });
                }
            }
        }
    }

    let network = Network::from_adjacency(adjacency).with_origin(
        points.positions().to_vec(),
        points.kind(),
        *config,
    );

    if network.edge_count() == 0 && n > 1 {
        warn!(
            "No pair of the {} points clears threshold {}; network has no edges.",
            n, config.threshold
        );
        if sink.wants(NetworkEventKind::Warning) {
            sink.send(NetworkEvent::Warning {
                context: "build_network".into(),
                message: format!("no pair clears threshold {}", config.threshold),
            });
        }
    }

    info!(
        "Built network: {} nodes, {} edges.",
        network.node_count(),
        network.edge_count()
    );
    if sink.wants(NetworkEventKind::BuildFinished) {
        sink.send(NetworkEvent::BuildFinished {
            node_count: network.node_count(),
            edge_count: network.edge_count(),
        });
    }

    Ok(network)
}

fn ensure_buildable(points: &PointSet, config: &NetworkConfig) -> Result<()> {
    if points.is_empty() {
        return Err(Error::InvalidInput(
            "cannot build a network from an empty point set".into(),
        ));
    }
    config.validate()
}
