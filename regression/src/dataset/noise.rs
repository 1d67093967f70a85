use ndarray::{Array2, ArrayView1, ArrayView2, s};

/// Precomputed irrelevant predictors, one row per sample.
///
/// The bank is drawn once so that fits with different predictor counts see
/// the same noise columns, each count extending the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseBank {
    values: Array2<f64>,
}

impl NoiseBank {
    /// Creates a new `NoiseBank` from a `(samples, width)` matrix.
    pub fn new(values: Array2<f64>) -> Self {
        Self { values }
    }

    /// A bank with `rows` samples and no noise columns.
    pub fn empty(rows: usize) -> Self {
        Self::new(Array2::zeros((rows, 0)))
    }

    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    /// The amount of noise predictors available per sample.
    pub fn width(&self) -> usize {
        self.values.ncols()
    }

    pub fn row(&self, index: usize) -> ArrayView1<'_, f64> {
        self.values.row(index)
    }

    /// The first `n` noise columns of every sample.
    ///
    /// # Panics
    /// If `n` exceeds `width()`.
    pub fn leading(&self, n: usize) -> ArrayView2<'_, f64> {
        self.values.slice(s![.., ..n])
    }
}
