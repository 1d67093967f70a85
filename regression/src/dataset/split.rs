use ndarray::{Array1, Array2, ArrayView1, s};

use super::{NoiseBank, Sample};
use crate::{RegressionErr, Result};

/// One partition of a dataset (training or test).
///
/// Holds the informative predictor, the targets and the partition's own
/// noise bank. A `Split` is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    x: Array1<f64>,
    y: Array1<f64>,
    noise: NoiseBank,
}

impl Split {
    /// Creates a new `Split`.
    ///
    /// # Arguments
    /// * `x` - The informative predictor of every sample.
    /// * `y` - The target of every sample.
    /// * `noise` - One row of noise predictors per sample.
    ///
    /// # Returns
    /// A `SizeMismatch` error if the three inputs disagree on the sample count.
    pub fn new(x: Array1<f64>, y: Array1<f64>, noise: NoiseBank) -> Result<Self> {
        if y.len() != x.len() {
            return Err(RegressionErr::SizeMismatch {
                a: "targets",
                b: "predictors",
                got: y.len(),
                expected: x.len(),
            });
        }

        if noise.rows() != x.len() {
            return Err(RegressionErr::SizeMismatch {
                a: "noise rows",
                b: "predictors",
                got: noise.rows(),
                expected: x.len(),
            });
        }

        Ok(Self { x, y, noise })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> ArrayView1<'_, f64> {
        self.x.view()
    }

    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }

    pub fn noise(&self) -> &NoiseBank {
        &self.noise
    }

    /// The largest predictor count this split can build a design matrix for.
    pub fn max_predictors(&self) -> usize {
        self.noise.width() + 1
    }

    /// Fetches a sample by index.
    ///
    /// # Returns
    /// An `OutOfBounds` error if `index` is past the end.
    pub fn sample(&self, index: usize) -> Result<Sample> {
        if index >= self.len() {
            return Err(RegressionErr::OutOfBounds {
                index,
                len: self.len(),
            });
        }

        let features = std::iter::once(self.x[index])
            .chain(self.noise.row(index).iter().copied())
            .collect();

        Ok(Sample::new(features, self.y[index]))
    }

    /// Builds the `(len, k)` design matrix: the informative predictor followed
    /// by the first `k - 1` noise predictors of each sample.
    ///
    /// # Returns
    /// An `InvalidArgument` error if `k` is zero or wider than the noise bank allows.
    pub fn design_matrix(&self, k: usize) -> Result<Array2<f64>> {
        let max = self.max_predictors();
        if k == 0 || k > max {
            return Err(RegressionErr::InvalidArgument {
                arg: "k",
                got: k,
                min: 1,
                max,
            });
        }

        let mut matrix = Array2::zeros((self.len(), k));
        matrix.column_mut(0).assign(&self.x);
        matrix
            .slice_mut(s![.., 1..])
            .assign(&self.noise.leading(k - 1));

        Ok(matrix)
    }
}
