use log::{debug, trace};
use ndarray::{Array1, ArrayView1};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::{
    RegressionErr, Result,
    config::DescentConfig,
    loss::{LossFn, Mse},
    optimization::{GradientDescent, Optimizer},
};

/// A one predictor linear model, `y = weight * x + bias`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearModel {
    pub weight: f64,
    pub bias: f64,
}

impl LinearModel {
    pub fn new(weight: f64, bias: f64) -> Self {
        Self { weight, bias }
    }

    /// A model with `weight` in `[-2, 2)` and `bias` in `[-1, 1)`.
    pub fn random<R: Rng>(rng: &mut R) -> Result<Self> {
        let weight = Uniform::new(-2., 2.)?.sample(rng);
        let bias = Uniform::new(-1., 1.)?.sample(rng);
        Ok(Self::new(weight, bias))
    }

    pub fn predict(&self, x: ArrayView1<f64>) -> Array1<f64> {
        x.mapv(|x| self.weight * x + self.bias)
    }
}

/// Full batch gradient descent for a `LinearModel`.
pub struct DescentTrainer<O: Optimizer, L: LossFn> {
    optimizer: O,
    loss: L,
    epochs: usize,
}

impl DescentTrainer<GradientDescent, Mse> {
    pub fn from_config(config: DescentConfig) -> Self {
        Self::new(GradientDescent::new(config.learning_rate), Mse, config.epochs)
    }
}

impl<O: Optimizer, L: LossFn> DescentTrainer<O, L> {
    pub fn new(optimizer: O, loss: L, epochs: usize) -> Self {
        Self {
            optimizer,
            loss,
            epochs,
        }
    }

    /// Trains `model` in place on the samples `(x, y)`.
    ///
    /// # Returns
    /// The loss after the last epoch, or a `SizeMismatch` error if `x` and `y`
    /// disagree on the sample count.
    pub fn train(
        &mut self,
        model: &mut LinearModel,
        x: ArrayView1<f64>,
        y: ArrayView1<f64>,
    ) -> Result<f64> {
        if y.len() != x.len() {
            return Err(RegressionErr::SizeMismatch {
                a: "targets",
                b: "predictors",
                got: y.len(),
                expected: x.len(),
            });
        }

        let mut params = [model.weight, model.bias];

        for epoch in 0..self.epochs {
            let y_pred = x.mapv(|x| params[0] * x + params[1]);
            let delta = self.loss.loss_prime(y_pred.view(), y);
            let grad = [delta.dot(&x), delta.sum()];

            self.optimizer.update_params(&mut params, &grad);
            trace!(epoch = epoch, weight = params[0], bias = params[1]; "descent step");
        }

        *model = LinearModel::new(params[0], params[1]);
        let loss = self.loss.loss(model.predict(x).view(), y);

        debug!(
            epochs = self.epochs,
            weight = model.weight,
            bias = model.bias,
            loss = loss;
            "descent finished"
        );

        Ok(loss)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn converges_on_exact_line() {
        let x: Array1<f64> = (0..30).map(|i| i as f64 * 10. / 29.).collect();
        let y = x.mapv(|x| 2. * x + 1.);

        let mut model = LinearModel::default();
        let mut trainer = DescentTrainer::new(GradientDescent::new(0.01), Mse, 5000);
        let loss = trainer.train(&mut model, x.view(), y.view()).unwrap();

        assert!((model.weight - 2.).abs() < 1e-6, "{model:?}");
        assert!((model.bias - 1.).abs() < 1e-6, "{model:?}");
        assert!(loss < 1e-10);
    }

    #[test]
    fn loss_decreases() {
        let x = array![0., 1., 2., 3.];
        let y = array![1., 3., 5., 7.];
        let mut model = LinearModel::random(&mut StdRng::seed_from_u64(42)).unwrap();
        let initial = Mse.loss(model.predict(x.view()).view(), y.view());

        let mut trainer = DescentTrainer::from_config(DescentConfig::default());
        let loss = trainer.train(&mut model, x.view(), y.view()).unwrap();

        assert!(loss < initial);
    }

    #[test]
    fn zero_epochs_keeps_model() {
        let x = array![1., 2.];
        let y = array![2., 4.];
        let mut model = LinearModel::new(0.5, 0.25);

        let mut trainer = DescentTrainer::new(GradientDescent::new(0.1), Mse, 0);
        trainer.train(&mut model, x.view(), y.view()).unwrap();

        assert_eq!(model, LinearModel::new(0.5, 0.25));
    }

    #[test]
    fn random_model_in_range() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let model = LinearModel::random(&mut rng).unwrap();
            assert!((-2. ..2.).contains(&model.weight));
            assert!((-1. ..1.).contains(&model.bias));
        }
    }

    #[test]
    fn mismatched_lengths() {
        let mut trainer = DescentTrainer::from_config(DescentConfig::default());
        let res = trainer.train(
            &mut LinearModel::default(),
            array![1., 2.].view(),
            array![1.].view(),
        );

        assert!(matches!(res, Err(RegressionErr::SizeMismatch { .. })));
    }
}
