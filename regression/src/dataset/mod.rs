mod noise;
mod sample;
mod split;

pub use noise::NoiseBank;
pub use sample::Sample;
pub use split::Split;

/// A training split and a test split generated under the same noise model.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    train: Split,
    test: Split,
}

impl Dataset {
    pub fn new(train: Split, test: Split) -> Self {
        Self { train, test }
    }

    pub fn train(&self) -> &Split {
        &self.train
    }

    pub fn test(&self) -> &Split {
        &self.test
    }

    /// The largest predictor count both splits can provide.
    pub fn max_predictors(&self) -> usize {
        self.train.max_predictors().min(self.test.max_predictors())
    }
}
