//! Homogeneous spatial Poisson process sampling.
use std::sync::Arc;

use rand::Rng;
use tracing::{debug, warn};

use crate::boundary::Boundary;
use crate::error::{Error, Result};
use crate::points::{PointPatternKind, PointSet};
use crate::sampling::{ensure_count, lerp_box, rand01, PointSampling};

/// Default number of bounding-box draws allowed per requested point.
pub const DEFAULT_MAX_ATTEMPTS_PER_POINT: usize = 10_000;

/// Largest expected point count accepted in intensity mode.
pub const MAX_INTENSITY_MEAN: f64 = 1.0e8;

/// How many points a Poisson realization contains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointCount {
    /// Exactly this many points (a binomial process conditioned on the count).
    Fixed(
        /// Number of points to place.
        usize,
    ),
    /// Points per unit area; the count is drawn from `Poisson(intensity * area)`.
    Intensity(
        /// Expected points per unit area.
        f64,
    ),
}

/// Uniform placement over the boundary area by rejection from its bounding box.
#[derive(Debug, Clone)]
pub struct PoissonSampling {
    /// Fixed count or intensity.
    pub count: PointCount,
    /// Bounding-box draws allowed per requested point before giving up.
    pub max_attempts_per_point: usize,
}

impl PoissonSampling {
    /// Sampler producing exactly `count` points.
    pub fn new(count: usize) -> Self {
        Self {
            count: PointCount::Fixed(count),
            max_attempts_per_point: DEFAULT_MAX_ATTEMPTS_PER_POINT,
        }
    }

    /// Sampler whose count follows a Poisson distribution with mean `intensity * area`.
    pub fn with_intensity(intensity: f64) -> Self {
        Self {
            count: PointCount::Intensity(intensity),
            max_attempts_per_point: DEFAULT_MAX_ATTEMPTS_PER_POINT,
        }
    }

    /// Set the rejection budget (builder-style).
    pub fn with_max_attempts_per_point(mut self, attempts: usize) -> Self {
        self.max_attempts_per_point = attempts.max(1);
        self
    }

    /// Checks the count parameters that do not depend on the boundary.
    fn validate(&self) -> Result<()> {
        match self.count {
            PointCount::Fixed(n) => ensure_count(n),
            PointCount::Intensity(lambda) if !lambda.is_finite() || lambda <= 0.0 => Err(
                Error::InvalidInput(format!("intensity must be finite and > 0, got {lambda}")),
            ),
            PointCount::Intensity(_) => Ok(()),
        }
    }

    fn resolve_count(&self, boundary: &Boundary, rng: &mut dyn Rng) -> Result<usize> {
        match self.count {
            PointCount::Fixed(n) => Ok(n),
            PointCount::Intensity(lambda) => {
                let mean = lambda * boundary.area();
                if !mean.is_finite() || mean > MAX_INTENSITY_MEAN {
                    return Err(Error::InvalidInput(format!(
                        "expected point count {mean} (intensity {lambda} x area {}) \
                         exceeds {MAX_INTENSITY_MEAN}",
                        boundary.area()
                    )));
                }
                Ok(poisson_count(mean, rng) as usize)
            }
        }
    }
}

impl PointSampling for PoissonSampling {
    fn kind(&self) -> PointPatternKind {
        PointPatternKind::Poisson
    }

    fn sample(&self, boundary: Arc<Boundary>, rng: &mut dyn Rng) -> Result<PointSet> {
        self.validate()?;
        if boundary.is_degenerate() {
            return Err(Error::DegenerateGeometry(format!(
                "boundary area is {}; cannot place Poisson points",
                boundary.area()
            )));
        }

        let count = self.resolve_count(&boundary, rng)?;
        if count == 0 {
            debug!("Poisson realization drew zero points.");
            return Ok(PointSet::from_sampler(boundary, Vec::new(), self.kind(), 0));
        }

        let bbox = boundary.bounding_box();
        let budget = count.saturating_mul(self.max_attempts_per_point);
        let mut out = Vec::with_capacity(count);
        let mut attempts = 0usize;

        while out.len() < count {
            if attempts >= budget {
                warn!(
                    "Poisson sampling placed {} of {} points after {} attempts.",
                    out.len(),
                    count,
                    attempts
                );
                return Err(Error::DegenerateGeometry(format!(
                    "placed only {} of {count} points within {attempts} attempts",
                    out.len()
                )));
            }
            attempts += 1;

            let u = rand01(rng);
            let v = rand01(rng);
            let p = lerp_box(&bbox, u, v);
            if boundary.contains(p) {
                out.push(p);
            }
        }

        debug!(
            "Poisson sampling placed {} points in {} attempts.",
            count, attempts
        );
        Ok(PointSet::from_sampler(boundary, out, self.kind(), count))
    }
}

/// Largest mean handled by a single Knuth pass; `exp(-mean)` stays representable.
const KNUTH_CHUNK: f64 = 500.0;

/// Draw from `Poisson(mean)`; large means are split into independent chunks.
fn poisson_count(mean: f64, rng: &mut dyn Rng) -> u64 {
    if !mean.is_finite() || mean <= 0.0 {
        return 0;
    }

    let mut remaining = mean;
    let mut total = 0u64;
    while remaining > KNUTH_CHUNK {
        total += poisson_knuth(KNUTH_CHUNK, rng);
        remaining -= KNUTH_CHUNK;
    }
    total + poisson_knuth(remaining, rng)
}

fn poisson_knuth(lambda: f64, rng: &mut dyn Rng) -> u64 {
    if lambda <= 0.0 {
        return 0;
    }

    let l = (-lambda).exp();
    let mut k: u64 = 0;
    let mut p: f64 = 1.0;

    loop {
        k += 1;
        p *= rand01(rng);
        if p <= l {
            return k - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use geo::LineString;
    use geo::Polygon;
    use glam::DVec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn triangle() -> Arc<Boundary> {
        let ring = LineString::from(vec![(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
        Arc::new(Boundary::new(Polygon::new(ring, vec![])).unwrap())
    }

    #[test]
    fn places_exact_count_inside_irregular_boundary() {
        let mut rng = StdRng::seed_from_u64(7);
        let boundary = triangle();
        let set = PoissonSampling::new(200)
            .sample(boundary.clone(), &mut rng)
            .unwrap();
        assert_eq!(set.len(), 200);
        assert_eq!(set.requested(), 200);
        assert!(set.positions().iter().all(|p| boundary.contains(*p)));
        assert!(set.positions().iter().all(|p| p.x + p.y <= 10.0 + 1e-9));
    }

    #[test]
    fn determinism_for_same_seed() {
        let s = PoissonSampling::new(32);
        let boundary = Arc::new(Boundary::square(10.0).unwrap());

        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);
        let pa = s.sample(boundary.clone(), &mut rng_a).unwrap();
        let pb = s.sample(boundary.clone(), &mut rng_b).unwrap();
        assert_eq!(pa, pb);

        let mut rng_c = StdRng::seed_from_u64(456);
        let pc = s.sample(boundary, &mut rng_c).unwrap();
        assert_ne!(pa.positions(), pc.positions());
    }

    #[test]
    fn zero_count_is_invalid_input() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = PoissonSampling::new(0)
            .sample(Arc::new(Boundary::square(1.0).unwrap()), &mut rng)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn degenerate_boundary_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let flat = Boundary::rectangle(DVec2::ZERO, DVec2::new(5.0, 0.0)).unwrap();
        let err = PoissonSampling::new(3)
            .sample(Arc::new(flat), &mut rng)
            .unwrap_err();
        assert!(matches!(err, Error::DegenerateGeometry(_)));
    }

    #[test]
    fn exhausted_budget_is_an_error() {
        // A thin diagonal sliver covers a tiny share of its bounding box.
        let ring = LineString::from(vec![(0.0, 0.0), (1000.0, 1000.0), (1000.0, 1000.001)]);
        let sliver = Arc::new(Boundary::new(Polygon::new(ring, vec![])).unwrap());
        let mut rng = StdRng::seed_from_u64(5);
        let err = PoissonSampling::new(50)
            .with_max_attempts_per_point(1)
            .sample(sliver, &mut rng)
            .unwrap_err();
        assert!(matches!(err, Error::DegenerateGeometry(_)));
    }

    #[test]
    fn intensity_mode_scales_with_area() {
        let mut rng = StdRng::seed_from_u64(99);
        let boundary = Arc::new(Boundary::square(20.0).unwrap());
        let set = PoissonSampling::with_intensity(0.5)
            .sample(boundary, &mut rng)
            .unwrap();
        // Mean 200, standard deviation ~14.
        assert!(set.len() > 120 && set.len() < 280, "got {}", set.len());
    }

    #[test]
    fn intensity_must_be_positive() {
        let mut rng = StdRng::seed_from_u64(1);
        let boundary = Arc::new(Boundary::square(1.0).unwrap());
        for bad in [0.0, -1.0, f64::NAN] {
            let err = PoissonSampling::with_intensity(bad)
                .sample(boundary.clone(), &mut rng)
                .unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)));
        }
    }

    #[test]
    fn zero_count_on_degenerate_boundary_is_invalid_input() {
        let mut rng = StdRng::seed_from_u64(1);
        let flat = Arc::new(Boundary::rectangle(DVec2::ZERO, DVec2::new(5.0, 0.0)).unwrap());
        let err = PoissonSampling::new(0)
            .sample(flat.clone(), &mut rng)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let err = PoissonSampling::with_intensity(-1.0)
            .sample(flat, &mut rng)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn oversized_expected_count_is_invalid_input() {
        let mut rng = StdRng::seed_from_u64(1);
        let boundary = Arc::new(Boundary::square(10.0).unwrap());
        // f64::MAX * 100 overflows to infinity; 1e15 is finite but far above the cap.
        for intensity in [f64::MAX, 1.0e13] {
            let err = PoissonSampling::with_intensity(intensity)
                .sample(boundary.clone(), &mut rng)
                .unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "intensity {intensity}");
        }

        // Means below the cap are still drawn.
        let small = Arc::new(Boundary::square(1.0).unwrap());
        let set = PoissonSampling::with_intensity(10.0)
            .sample(small, &mut rng)
            .unwrap();
        assert_eq!(set.kind(), PointPatternKind::Poisson);
    }

    #[test]
    fn poisson_count_handles_large_means() {
        let mut rng = StdRng::seed_from_u64(3);
        let n = poisson_count(5_000.0, &mut rng);
        // Mean 5000, standard deviation ~71.
        assert!((4_600..5_400).contains(&n), "got {n}");
        assert_eq!(poisson_count(0.0, &mut rng), 0);
        assert_eq!(poisson_count(f64::INFINITY, &mut rng), 0);
    }
}
