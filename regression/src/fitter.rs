use std::sync::Arc;

use log::{debug, info};
use ndarray::Array1;
use parking_lot::Mutex;

use crate::{
    RegressionErr, Result,
    config::FitterConfig,
    dataset::Dataset,
    loss::{LossFn, Mse},
    solver,
};

/// The outcome of fitting a fixed amount of predictors.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    /// One weight per predictor, the informative one first.
    pub weights: Array1<f64>,
    pub train_err: f64,
    pub test_err: f64,
}

impl FitResult {
    pub fn predictors(&self) -> usize {
        self.weights.len()
    }

    /// Whether the model does worse on unseen data than on the data it was fitted on.
    pub fn is_overfitting(&self) -> bool {
        self.test_err > self.train_err
    }

    pub fn overfit_gap(&self) -> f64 {
        self.test_err - self.train_err
    }
}

type Slot = Mutex<Option<Arc<FitResult>>>;

/// Fits linear models with a growing amount of predictors over a fixed dataset.
///
/// The fit for a predictor count is computed at most once: every count owns a
/// slot in the cache and the first caller computes while holding the slot's
/// lock. The cache lives as long as the dataset it was computed from.
#[derive(Debug)]
pub struct RidgeFitter<L: LossFn = Mse> {
    dataset: Dataset,
    config: FitterConfig,
    loss: L,
    cache: Box<[Slot]>,
}

impl RidgeFitter {
    /// Creates a new `RidgeFitter` scored with the mean squared error.
    ///
    /// # Arguments
    /// * `dataset` - The training and test splits, fixed for the fitter's lifetime.
    /// * `config` - The numerical settings.
    ///
    /// # Returns
    /// An `InvalidConfig` error if the config is invalid or the dataset can't
    /// provide `max_predictors` predictors.
    pub fn new(dataset: Dataset, config: FitterConfig) -> Result<Self> {
        Self::with_loss(dataset, config, Mse)
    }
}

impl<L: LossFn> RidgeFitter<L> {
    /// Creates a new `RidgeFitter` that reports errors using `loss`.
    pub fn with_loss(dataset: Dataset, config: FitterConfig, loss: L) -> Result<Self> {
        config.validate()?;
        validate_dataset(&dataset, &config)?;

        let cache = (0..config.max_predictors.get())
            .map(|_| Mutex::new(None))
            .collect();

        info!(
            max_predictors = config.max_predictors.get(),
            train = dataset.train().len(),
            test = dataset.test().len();
            "built ridge fitter"
        );

        Ok(Self {
            dataset,
            config,
            loss,
            cache,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &FitterConfig {
        &self.config
    }

    pub fn max_predictors(&self) -> usize {
        self.config.max_predictors.get()
    }

    /// Fits the first `k` predictors and scores the fit on both splits.
    ///
    /// Repeated calls with the same `k` return the same shared result.
    ///
    /// # Returns
    /// An `InvalidArgument` error if `k` is outside `[1, max_predictors]`.
    pub fn fit(&self, k: usize) -> Result<Arc<FitResult>> {
        let mut slot = self.slot(k)?.lock();

        if let Some(result) = slot.as_ref() {
            debug!(k = k; "fit cache hit");
            return Ok(Arc::clone(result));
        }

        debug!(k = k; "fit cache miss");
        let result = Arc::new(self.compute(k)?);
        *slot = Some(Arc::clone(&result));

        Ok(result)
    }

    /// Returns the cached fit for `k` without computing it.
    pub fn cached(&self, k: usize) -> Option<Arc<FitResult>> {
        let slot = k.checked_sub(1).and_then(|i| self.cache.get(i))?;
        slot.lock().clone()
    }

    /// Swaps in a regenerated dataset and drops every cached fit.
    ///
    /// # Returns
    /// An `InvalidConfig` error if the dataset can't provide `max_predictors`
    /// predictors, in which case the fitter is left untouched.
    pub fn replace_dataset(&mut self, dataset: Dataset) -> Result<()> {
        validate_dataset(&dataset, &self.config)?;

        self.dataset = dataset;
        for slot in self.cache.iter_mut() {
            *slot.get_mut() = None;
        }

        info!("replaced dataset, fit cache cleared");
        Ok(())
    }

    fn slot(&self, k: usize) -> Result<&Slot> {
        let max = self.max_predictors();
        if k == 0 || k > max {
            return Err(RegressionErr::InvalidArgument {
                arg: "k",
                got: k,
                min: 1,
                max,
            });
        }

        Ok(&self.cache[k - 1])
    }

    fn compute(&self, k: usize) -> Result<FitResult> {
        let train = self.dataset.train();
        let test = self.dataset.test();

        let x_train = train.design_matrix(k)?;
        let x_test = test.design_matrix(k)?;

        let (xtx, xty) =
            solver::normal_equations(x_train.view(), train.y(), self.config.ridge)?;
        let weights =
            solver::gaussian_solve(xtx.view(), xty.view(), self.config.pivot_epsilon)?;

        let train_err = self.loss.loss(x_train.dot(&weights).view(), train.y());
        let test_err = self.loss.loss(x_test.dot(&weights).view(), test.y());

        Ok(FitResult {
            weights,
            train_err,
            test_err,
        })
    }
}

fn validate_dataset(dataset: &Dataset, config: &FitterConfig) -> Result<()> {
    if dataset.train().is_empty() || dataset.test().is_empty() {
        return Err(RegressionErr::InvalidConfig(
            "both the training and the test split need samples".to_string(),
        ));
    }

    let available = dataset.max_predictors();
    let max = config.max_predictors.get();
    if available < max {
        return Err(RegressionErr::InvalidConfig(format!(
            "the dataset provides {available} predictors but {max} are configured"
        )));
    }

    Ok(())
}
