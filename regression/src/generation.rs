use log::info;
use ndarray::{Array1, Array2};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::{
    Result,
    config::GeneratorConfig,
    dataset::{Dataset, NoiseBank, Split},
};

/// Draws the fixed training and test splits of the overfitting demonstration.
///
/// Every split is `y = true_weight * x + e` with `e` uniform in
/// `[-noise_amplitude, noise_amplitude]`; each split gets its own noise bank.
pub struct DatasetGenerator {
    config: GeneratorConfig,
    train_x: Uniform<f64>,
    test_x: Uniform<f64>,
    target_noise: Uniform<f64>,
    noise_predictor: Uniform<f64>,
}

impl DatasetGenerator {
    /// Creates a new `DatasetGenerator`.
    ///
    /// # Arguments
    /// * `config` - The shape and noise model of the generated dataset.
    ///
    /// # Returns
    /// An `InvalidDistribution` error if any range is empty or not finite.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let (train_low, train_high) = config.train_range;
        let (test_low, test_high) = config.test_range;
        let (noise_low, noise_high) = config.noise_predictor_range;
        let amplitude = config.noise_amplitude;

        Ok(Self {
            config,
            train_x: Uniform::new(train_low, train_high)?,
            test_x: Uniform::new(test_low, test_high)?,
            target_noise: Uniform::new_inclusive(-amplitude, amplitude)?,
            noise_predictor: Uniform::new(noise_low, noise_high)?,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a new dataset.
    ///
    /// Both splits are drawn first, then the training noise bank and finally
    /// the test noise bank, so nothing in the test split derives from the
    /// training split.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Dataset> {
        let train_size = self.config.train_size.get();
        let test_size = self.config.test_size.get();
        let width = self.config.max_predictors.get() - 1;

        let (train_x, train_y) = self.targets(rng, &self.train_x, train_size);
        let (test_x, test_y) = self.targets(rng, &self.test_x, test_size);
        let train_noise = self.noise_bank(rng, train_size, width);
        let test_noise = self.noise_bank(rng, test_size, width);

        let dataset = Dataset::new(
            Split::new(train_x, train_y, train_noise)?,
            Split::new(test_x, test_y, test_noise)?,
        );

        info!(
            train = train_size,
            test = test_size,
            width = width;
            "generated dataset"
        );

        Ok(dataset)
    }

    fn targets<R: Rng>(
        &self,
        rng: &mut R,
        distribution: &Uniform<f64>,
        n: usize,
    ) -> (Array1<f64>, Array1<f64>) {
        let x: Array1<f64> = (0..n).map(|_| distribution.sample(rng)).collect();
        let y = x.mapv(|x| self.config.true_weight * x + self.target_noise.sample(rng));
        (x, y)
    }

    fn noise_bank<R: Rng>(&self, rng: &mut R, rows: usize, width: usize) -> NoiseBank {
        let values =
            Array2::from_shape_simple_fn((rows, width), || self.noise_predictor.sample(rng));
        NoiseBank::new(values)
    }
}
