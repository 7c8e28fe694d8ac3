#![forbid(unsafe_code)]
//! spatial_bernoulli: spatial point patterns turned into Bernoulli networks.
//!
//! Modules:
//! - boundary: planar regions (holes allowed) with an optional EPSG code
//! - sampling: point patterns inside a boundary (Poisson process, Halton sequence)
//! - points / matrix: sampled point sets and their pairwise distance matrices
//! - sif: spatial interaction functions mapping distance to tie probability
//! - network: threshold-based network construction, events, graph statistics
//! - compare: two-network comparison reports
pub mod boundary;
pub mod compare;
pub mod error;
pub mod matrix;
pub mod network;
pub mod points;
pub mod sampling;
pub mod sif;

/// Convenient re-exports for common types. Import with `use spatial_bernoulli::prelude::*;`.
pub mod prelude {
    pub use crate::boundary::{BoundingBox, Boundary};
    pub use crate::compare::{compare, ComparisonReport, ComparisonRow, COLUMNS};
    pub use crate::error::{Error, Result};
    pub use crate::matrix::{DistanceMatrix, ProbabilityMatrix, SquareMatrix};
    pub use crate::network::events::{
        EventSink, FnSink, MultiSink, NetworkEvent, NetworkEventKind, VecSink,
    };
    pub use crate::network::{
        build_network, build_network_with_events, probability_matrix, Network, NetworkBuilder,
        NetworkConfig, NetworkStats, NetworkSummary,
    };
    pub use crate::points::{PointPatternKind, PointSet};
    pub use crate::sampling::{
        sample_points, HaltonSampling, PointCount, PointSampling, PoissonSampling,
    };
    pub use crate::sif::{SifParams, SpatialInteraction};
}
