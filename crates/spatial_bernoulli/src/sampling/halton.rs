//! Halton sequence point sampling.
use std::sync::Arc;

use rand::Rng;
use tracing::{debug, warn};

use crate::boundary::Boundary;
use crate::error::{Error, Result};
use crate::points::{PointPatternKind, PointSet};
use crate::sampling::{ensure_count, lerp_box, rand01, PointSampling};

/// Halton low-discrepancy sampling over the boundary's bounding box.
///
/// `count` points are generated in the bounding rectangle and those falling outside the
/// (possibly irregular) boundary are discarded, so the realized count may be lower.
#[derive(Debug, Clone)]
pub struct HaltonSampling {
    /// Number of sequence points to generate.
    pub count: usize,
    /// Bases for the 2D Halton sequence. Defaults to `(2, 3)`.
    pub bases: (u32, u32),
    /// Starting index into the sequence.
    pub start_index: u32,
    /// If true, apply Cranley–Patterson rotation with random offsets from the RNG.
    pub rotate: bool,
}

impl HaltonSampling {
    /// Construct a Halton sampler with default bases (2, 3), start_index = 1, no rotation.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            bases: (2, 3),
            start_index: 1,
            rotate: false,
        }
    }

    /// Construct with rotation flag (CP rotation), using default bases (2, 3) and start_index = 1.
    pub fn with_rotation(count: usize, rotate: bool) -> Self {
        Self {
            rotate,
            ..Self::new(count)
        }
    }

    /// Construct with custom bases and rotation flag; start_index defaults to 1.
    ///
    /// Fails with [`Error::InvalidInput`] if either base is less than 2.
    pub fn with_bases(count: usize, bases: (u32, u32), rotate: bool) -> Result<Self> {
        ensure_bases(bases)?;
        Ok(Self {
            bases,
            rotate,
            ..Self::new(count)
        })
    }

    /// Set the starting index (builder-style).
    pub fn with_start_index(mut self, start_index: u32) -> Self {
        self.start_index = start_index;
        self
    }
}

impl PointSampling for HaltonSampling {
    fn kind(&self) -> PointPatternKind {
        PointPatternKind::Halton
    }

    fn sample(&self, boundary: Arc<Boundary>, rng: &mut dyn Rng) -> Result<PointSet> {
        ensure_count(self.count)?;
        ensure_bases(self.bases)?;

        if boundary.is_degenerate() {
            warn!("Halton sampling on a zero-area boundary; returning no points.");
            return Ok(PointSet::from_sampler(
                boundary,
                Vec::new(),
                self.kind(),
                self.count,
            ));
        }

        let (b1, b2) = self.bases;

        // Cranley–Patterson rotation offsets in [0,1) if enabled.
        let (dx, dy) = if self.rotate {
            (rand01(rng), rand01(rng))
        } else {
            (0.0, 0.0)
        };

        let bbox = boundary.bounding_box();
        let mut out = Vec::with_capacity(self.count);
        let start = self.start_index as u64;

        for i in 0..self.count {
            let idx = start + i as u64;

            let u = frac(radical_inverse(idx, b1) + dx);
            let v = frac(radical_inverse(idx, b2) + dy);

            let p = lerp_box(&bbox, u, v);
            if boundary.contains(p) {
                out.push(p);
            }
        }

        if out.len() < self.count {
            debug!(
                "Halton sampling kept {} of {} points inside the boundary.",
                out.len(),
                self.count
            );
        }

        Ok(PointSet::from_sampler(boundary, out, self.kind(), self.count))
    }
}

/// Bases 0 and 1 have no radical inverse.
fn ensure_bases(bases: (u32, u32)) -> Result<()> {
    if bases.0 < 2 || bases.1 < 2 {
        return Err(Error::InvalidInput(format!(
            "Halton bases must be >= 2, got ({}, {})",
            bases.0, bases.1
        )));
    }
    Ok(())
}

#[inline]
fn frac(x: f64) -> f64 {
    x - x.floor()
}

/// Compute the radical inverse of `n` in the given `base`.
fn radical_inverse(mut n: u64, base: u32) -> f64 {
    debug_assert!(base >= 2);
    let b = base as u64;
    let inv_b = 1.0 / base as f64;

    let mut f = inv_b;
    let mut result = 0.0_f64;

    while n > 0 {
        result += (n % b) as f64 * f;
        n /= b;
        f *= inv_b;
    }

    result
}
