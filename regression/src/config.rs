use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::{RegressionErr, Result};

const DEFAULT_MAX_PREDICTORS: NonZeroUsize = NonZeroUsize::new(15).unwrap();
const DEFAULT_TRAIN_SIZE: NonZeroUsize = NonZeroUsize::new(20).unwrap();
const DEFAULT_TEST_SIZE: NonZeroUsize = NonZeroUsize::new(100).unwrap();

/// Numerical settings of a `RidgeFitter`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitterConfig {
    /// The largest predictor count that may be fitted.
    pub max_predictors: NonZeroUsize,
    /// Added to every diagonal entry of the Gram matrix.
    pub ridge: f64,
    /// Pivots smaller than this in magnitude leave their column unreduced.
    pub pivot_epsilon: f64,
}

impl Default for FitterConfig {
    fn default() -> Self {
        Self {
            max_predictors: DEFAULT_MAX_PREDICTORS,
            ridge: 1e-3,
            pivot_epsilon: 1e-8,
        }
    }
}

impl FitterConfig {
    /// Checks every field against its domain.
    ///
    /// # Returns
    /// An `InvalidConfig` error naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !self.ridge.is_finite() || self.ridge < 0. {
            return Err(RegressionErr::InvalidConfig(format!(
                "ridge must be finite and non negative, got {}",
                self.ridge
            )));
        }

        if !self.pivot_epsilon.is_finite() || self.pivot_epsilon <= 0. {
            return Err(RegressionErr::InvalidConfig(format!(
                "pivot_epsilon must be finite and positive, got {}",
                self.pivot_epsilon
            )));
        }

        Ok(())
    }
}

/// Shape and noise model of a generated `Dataset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub train_size: NonZeroUsize,
    pub test_size: NonZeroUsize,
    /// Slope of the single informative predictor.
    pub true_weight: f64,
    pub train_range: (f64, f64),
    pub test_range: (f64, f64),
    /// Targets are perturbed by uniform noise in `[-noise_amplitude, noise_amplitude]`.
    pub noise_amplitude: f64,
    pub noise_predictor_range: (f64, f64),
    /// The noise banks hold `max_predictors - 1` columns.
    pub max_predictors: NonZeroUsize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            train_size: DEFAULT_TRAIN_SIZE,
            test_size: DEFAULT_TEST_SIZE,
            true_weight: 3.,
            train_range: (-1., 1.),
            test_range: (-1.2, 1.2),
            noise_amplitude: 0.4,
            noise_predictor_range: (-1., 1.),
            max_predictors: DEFAULT_MAX_PREDICTORS,
        }
    }
}

/// Settings of the gradient descent baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescentConfig {
    pub learning_rate: f64,
    pub epochs: usize,
}

impl Default for DescentConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            epochs: 1000,
        }
    }
}
