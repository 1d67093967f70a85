/// A single observation: the full feature vector and its target.
///
/// `features[0]` is the informative predictor, the rest are the sample's
/// noise predictors in bank order.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    features: Vec<f64>,
    target: f64,
}

impl Sample {
    pub fn new(features: Vec<f64>, target: f64) -> Self {
        Self { features, target }
    }

    pub fn features(&self) -> &[f64] {
        &self.features
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}
