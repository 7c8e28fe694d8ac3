//! Sampling strategies for generating point patterns inside a [`Boundary`].
//!
//! Two strategies are provided: a homogeneous spatial Poisson process
//! ([`PoissonSampling`]) and a Halton low-discrepancy sequence filtered to the boundary
//! ([`HaltonSampling`]). [`sample_points`] picks one by [`PointPatternKind`] and seeds the
//! random stream.
use std::sync::Arc;

use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::boundary::{Boundary, BoundingBox};
use crate::error::{Error, Result};
use crate::points::{PointPatternKind, PointSet};

pub mod halton;
pub mod poisson;

pub use halton::HaltonSampling;
pub use poisson::{PointCount, PoissonSampling};

/// Trait for point pattern generation inside a boundary.
pub trait PointSampling: Send + Sync {
    /// Strategy tag stored on produced point sets.
    fn kind(&self) -> PointPatternKind;

    fn sample(&self, boundary: Arc<Boundary>, rng: &mut dyn Rng) -> Result<PointSet>;
}

/// Sample `count` points inside `boundary` with the chosen strategy.
///
/// With `Some(seed)` the random stream is reproducible; with `None` a fresh seed is drawn
/// (and logged at debug level so a run can be replayed). Halton sampling is deterministic
/// and does not consume the stream.
pub fn sample_points(
    boundary: Arc<Boundary>,
    count: usize,
    strategy: PointPatternKind,
    seed: Option<u64>,
) -> Result<PointSet> {
    let seed = seed.unwrap_or_else(rand::random);
    debug!(
        "Sampling {} points ({:?}) with seed {}.",
        count, strategy, seed
    );
    let mut rng = StdRng::seed_from_u64(seed);

    match strategy {
        PointPatternKind::Poisson => PoissonSampling::new(count).sample(boundary, &mut rng),
        PointPatternKind::Halton => HaltonSampling::new(count).sample(boundary, &mut rng),
    }
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Map unit-square coordinates onto a bounding box.
#[inline]
pub(crate) fn lerp_box(bbox: &BoundingBox, u: f64, v: f64) -> DVec2 {
    DVec2::new(
        bbox.min.x + u * bbox.width(),
        bbox.min.y + v * bbox.height(),
    )
}

pub(crate) fn ensure_count(count: usize) -> Result<()> {
    if count == 0 {
        return Err(Error::InvalidInput("point count must be > 0".into()));
    }
    Ok(())
}
