pub mod config;
pub mod error;
pub mod report;

use log::info;
use rand::{SeedableRng, rngs::StdRng};
use regression::{
    DatasetGenerator, RidgeFitter,
    training::{DescentTrainer, LinearModel},
};

use config::AppConfig;
use report::Report;

pub use error::{AppErr, Result};

/// Generates a dataset, fits every predictor count and trains the gradient
/// descent baseline on the training split.
///
/// # Errors
/// Returns an `AppErr::Regression` if the configuration is rejected by the
/// generator or the fitter.
pub fn run(config: &AppConfig) -> Result<Report> {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    info!(seed = seed; "generating dataset");

    let dataset = DatasetGenerator::new(config.generator)?.generate(&mut rng)?;
    let fitter = RidgeFitter::new(dataset, config.fitter)?;
    let sweep = fitter.sweep()?;

    let train = fitter.dataset().train();
    let mut model = LinearModel::random(&mut rng)?;
    let loss =
        DescentTrainer::from_config(config.descent).train(&mut model, train.x(), train.y())?;

    Ok(Report::new(seed, &sweep, model, loss))
}
