//! Sampled point patterns.
use std::sync::Arc;

use glam::DVec2;
use mint::Vector2;

use crate::boundary::Boundary;
use crate::error::{Error, Result};
use crate::matrix::DistanceMatrix;

/// Which generation strategy produced a [`PointSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointPatternKind {
    /// Homogeneous spatial Poisson process.
    Poisson,
    /// Halton low-discrepancy sequence filtered to the boundary.
    Halton,
}

/// Ordered set of 2D points lying within (or on the edge of) a [`Boundary`].
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    positions: Vec<DVec2>,
    boundary: Arc<Boundary>,
    kind: PointPatternKind,
    requested: usize,
}

impl PointSet {
    /// Create a point set from explicit positions.
    ///
    /// Fails with [`Error::InvalidInput`] if any position is non-finite or lies outside
    /// the boundary.
    pub fn new(
        boundary: Arc<Boundary>,
        positions: Vec<DVec2>,
        kind: PointPatternKind,
    ) -> Result<Self> {
        if let Some((i, p)) = positions
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite() || !boundary.contains(**p))
        {
            return Err(Error::InvalidInput(format!(
                "point {i} at ({}, {}) lies outside the boundary",
                p.x, p.y
            )));
        }
        let requested = positions.len();
        Ok(Self {
            positions,
            boundary,
            kind,
            requested,
        })
    }

    /// Like [`PointSet::new`], accepting any vector type convertible into [`DVec2`]
    /// (e.g. `mint::Vector2<f64>` or `[f64; 2]`).
    pub fn from_positions<I, P>(
        boundary: Arc<Boundary>,
        positions: I,
        kind: PointPatternKind,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<DVec2>,
    {
        Self::new(
            boundary,
            positions.into_iter().map(Into::into).collect(),
            kind,
        )
    }

    /// Samplers filter against the boundary themselves.
    pub(crate) fn from_sampler(
        boundary: Arc<Boundary>,
        positions: Vec<DVec2>,
        kind: PointPatternKind,
        requested: usize,
    ) -> Self {
        debug_assert!(positions.iter().all(|p| boundary.contains(*p)));
        Self {
            positions,
            boundary,
            kind,
            requested,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[DVec2] {
        &self.positions
    }

    pub fn boundary(&self) -> &Arc<Boundary> {
        &self.boundary
    }

    pub fn kind(&self) -> PointPatternKind {
        self.kind
    }

    /// Number of points asked for; Halton sets may realize fewer.
    pub fn requested(&self) -> usize {
        self.requested
    }

    pub fn to_mint(&self) -> Vec<Vector2<f64>> {
        self.positions.iter().copied().map(Into::into).collect()
    }

    /// Pairwise Euclidean distances between all points.
    pub fn distance_matrix(&self) -> DistanceMatrix {
        DistanceMatrix::euclidean(&self.positions)
    }
}
