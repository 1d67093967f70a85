pub mod config;
pub mod dataset;
pub mod error;
pub mod fitter;
pub mod generation;
pub mod loss;
pub mod optimization;
pub mod solver;
pub mod sweep;
mod test;
pub mod training;

pub use config::{DescentConfig, FitterConfig, GeneratorConfig};
pub use error::{RegressionErr, Result};
pub use fitter::{FitResult, RidgeFitter};
pub use generation::DatasetGenerator;
pub use sweep::Sweep;
