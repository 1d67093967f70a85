use std::sync::Arc;

use log::{info, warn};
use rayon::prelude::*;

use crate::{FitResult, Result, RidgeFitter, loss::LossFn};

/// Every fit of a fitter, ordered by predictor count.
#[derive(Debug, Clone)]
pub struct Sweep {
    fits: Vec<Arc<FitResult>>,
}

impl Sweep {
    /// All fits, the `i`-th one using `i + 1` predictors.
    pub fn fits(&self) -> &[Arc<FitResult>] {
        &self.fits
    }

    pub fn len(&self) -> usize {
        self.fits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fits.is_empty()
    }

    /// The fit using `k` predictors, if it was part of the sweep.
    pub fn fit(&self, k: usize) -> Option<&Arc<FitResult>> {
        self.fits.get(k.checked_sub(1)?)
    }

    pub fn overfit_gap(&self, k: usize) -> Option<f64> {
        self.fit(k).map(|fit| fit.overfit_gap())
    }

    /// The fit with the lowest test error, the fewest predictors winning ties.
    pub fn best(&self) -> Option<&Arc<FitResult>> {
        self.fits
            .iter()
            .min_by(|a, b| a.test_err.total_cmp(&b.test_err))
    }
}

impl<L: LossFn + Sync> RidgeFitter<L> {
    /// Fits every predictor count from 1 to `max_predictors`.
    ///
    /// Counts are fitted in parallel through the shared cache, so fits computed
    /// earlier are reused and later calls to `fit` are cache hits.
    pub fn sweep(&self) -> Result<Sweep> {
        let fits = (1..=self.max_predictors())
            .into_par_iter()
            .map(|k| self.fit(k))
            .collect::<Result<Vec<_>>>()?;

        let sweep = Sweep { fits };

        if let Some(best) = sweep.best() {
            info!(
                best = best.predictors(),
                test_err = best.test_err;
                "sweep finished"
            );

            if sweep.len() > 1 && best.predictors() == sweep.len() {
                warn!("test error is lowest with every predictor, no overfitting to show");
            }
        }

        Ok(sweep)
    }
}
