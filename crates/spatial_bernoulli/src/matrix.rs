//! Dense square matrices used for pairwise distances and tie probabilities.
use glam::DVec2;

/// Row-major `n x n` matrix of `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix {
    n: usize,
    data: Vec<f64>,
}

/// Pairwise Euclidean distances; symmetric with a zero diagonal.
pub type DistanceMatrix = SquareMatrix;

/// Tie probabilities obtained by applying an interaction function to a [`DistanceMatrix`].
pub type ProbabilityMatrix = SquareMatrix;

impl SquareMatrix {
    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(f(i, j));
            }
        }
        Self { n, data }
    }

    /// Euclidean distance matrix over `positions`.
    pub fn euclidean(positions: &[DVec2]) -> Self {
        let n = positions.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = positions[i].distance(positions[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { n, data }
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Apply `f` elementwise, producing a new matrix of the same shape.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            n: self.n,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        (0..self.n).all(|i| {
            ((i + 1)..self.n).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tolerance)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_is_symmetric_with_zero_diagonal() {
        let pts = [
            DVec2::new(0.0, 0.0),
            DVec2::new(3.0, 4.0),
            DVec2::new(-1.0, 2.0),
        ];
        let d = SquareMatrix::euclidean(&pts);
        assert_eq!(d.len(), 3);
        assert!(d.is_symmetric(0.0));
        for i in 0..3 {
            assert_eq!(d.get(i, i), 0.0);
        }
        assert_eq!(d.get(0, 1), 5.0);
        assert!(d.as_slice().iter().all(|v| *v >= 0.0));
    }

    #[test]
    fn map_preserves_shape() {
        let d = SquareMatrix::from_fn(2, |i, j| (i + j) as f64);
        let doubled = d.map(|v| v * 2.0);
        assert_eq!(doubled.row(1), &[2.0, 4.0]);
    }

    #[test]
    fn empty_matrix() {
        let d = SquareMatrix::euclidean(&[]);
        assert!(d.is_empty());
        assert!(d.is_symmetric(0.0));
    }
}
