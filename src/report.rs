use std::fmt::Write;

use regression::{Sweep, training::LinearModel};
use serde::Serialize;

use crate::{config::OutputFormat, error::Result};

const BAR_WIDTH: usize = 15;

/// One predictor count of the sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub predictors: usize,
    pub train_err: f64,
    pub test_err: f64,
    pub overfitting: bool,
    pub weights: Vec<f64>,
}

/// The gradient descent fit of `y = w x + b` on the training split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Baseline {
    pub weight: f64,
    pub bias: f64,
    pub loss: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub seed: u64,
    /// Predictor count with the lowest test error.
    pub best: Option<usize>,
    pub rows: Vec<ReportRow>,
    pub baseline: Baseline,
}

impl Report {
    pub fn new(seed: u64, sweep: &Sweep, model: LinearModel, loss: f64) -> Self {
        let rows = sweep
            .fits()
            .iter()
            .map(|fit| ReportRow {
                predictors: fit.predictors(),
                train_err: fit.train_err,
                test_err: fit.test_err,
                overfitting: fit.is_overfitting(),
                weights: fit.weights.to_vec(),
            })
            .collect();

        Self {
            seed,
            best: sweep.best().map(|fit| fit.predictors()),
            rows,
            baseline: Baseline {
                weight: model.weight,
                bias: model.bias,
                loss,
            },
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(self.table()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn table(&self) -> String {
        let max = self.rows.len().max(1);
        let mut out = String::new();

        let _ = writeln!(out, "seed {}", self.seed);
        let _ = writeln!(
            out,
            "{:>3}  {:>9}  {:>9}  {:<width$}  verdict",
            "k",
            "train mse",
            "test mse",
            "predictors",
            width = BAR_WIDTH
        );

        for row in &self.rows {
            let filled = (row.predictors * BAR_WIDTH).div_ceil(max).min(BAR_WIDTH);
            let bar = format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled));
            let verdict = if row.overfitting {
                "over-fitting evident"
            } else {
                "generalises fine"
            };
            let marker = if self.best == Some(row.predictors) { " *" } else { "" };

            let _ = writeln!(
                out,
                "{:>3}  {:>9.4}  {:>9.4}  {bar}  {verdict}{marker}",
                row.predictors, row.train_err, row.test_err
            );
        }

        let Baseline { weight, bias, loss } = self.baseline;
        let _ = write!(
            out,
            "gradient descent baseline: y = {weight:.3} x + {bias:.3} (train mse {loss:.4})"
        );

        out
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use rand::{SeedableRng, rngs::StdRng};
    use regression::{DatasetGenerator, FitterConfig, GeneratorConfig, RidgeFitter};

    use super::*;

    fn report() -> Report {
        let generator = GeneratorConfig {
            max_predictors: NonZeroUsize::new(4).unwrap(),
            ..Default::default()
        };
        let fitter = FitterConfig {
            max_predictors: NonZeroUsize::new(4).unwrap(),
            ..Default::default()
        };

        let dataset = DatasetGenerator::new(generator)
            .unwrap()
            .generate(&mut StdRng::seed_from_u64(3))
            .unwrap();
        let sweep = RidgeFitter::new(dataset, fitter).unwrap().sweep().unwrap();

        Report::new(3, &sweep, LinearModel::new(2.9, 0.1), 0.05)
    }

    #[test]
    fn rows_follow_sweep() {
        let report = report();

        assert_eq!(report.rows.len(), 4);
        for (i, row) in report.rows.iter().enumerate() {
            assert_eq!(row.predictors, i + 1);
            assert_eq!(row.weights.len(), i + 1);
            assert_eq!(row.overfitting, row.test_err > row.train_err);
        }
        assert!(report.best.is_some());
    }

    #[test]
    fn table_has_a_line_per_row() {
        let table = report().render(OutputFormat::Table).unwrap();
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 1 + 1 + 4 + 1);
        assert_eq!(lines[0], "seed 3");
        assert!(lines[2].contains("####..........."));
        assert!(lines[5].contains("###############"));
        assert!(lines[6].starts_with("gradient descent baseline: y = 2.900 x + 0.100"));
        assert_eq!(table.matches(" *").count(), 1);
    }

    #[test]
    fn json_round_trips_through_value() {
        let json = report().render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["seed"], 3);
        assert_eq!(value["rows"].as_array().unwrap().len(), 4);
        assert_eq!(value["baseline"]["weight"], 2.9);
    }
}
