use ndarray::{Array1, ArrayView1};

use super::LossFn;

/// Mean squared error loss function.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mse {
    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        (&y_pred - &y)
            .mapv(|x| x.powi(2))
            .mean()
            .unwrap_or_default()
    }

    fn loss_prime(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> Array1<f64> {
        (&y_pred - &y) * (2.0 / y_pred.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn mean_of_squared_residuals() {
        let y_pred = array![1., 2., 3., 4.];
        let y = array![1., 0., 3., 5.];

        assert_eq!(Mse.loss(y_pred.view(), y.view()), 1.25);
    }

    #[test]
    fn empty_is_zero() {
        let empty = ndarray::Array1::<f64>::zeros(0);
        assert_eq!(Mse.loss(empty.view(), empty.view()), 0.);
    }

    #[test]
    fn derivative() {
        let y_pred = array![2., 0.];
        let y = array![1., 1.];

        assert_eq!(Mse.loss_prime(y_pred.view(), y.view()), array![1., -1.]);
    }
}
