#![cfg(test)]

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    DatasetGenerator, DescentConfig, FitterConfig, GeneratorConfig, RidgeFitter,
    training::{DescentTrainer, LinearModel},
};

fn fitter(seed: u64) -> RidgeFitter {
    let generator = DatasetGenerator::new(GeneratorConfig::default()).unwrap();
    let dataset = generator.generate(&mut StdRng::seed_from_u64(seed)).unwrap();
    RidgeFitter::new(dataset, FitterConfig::default()).unwrap()
}

#[test]
fn single_predictor_finds_true_weight() {
    let fitter = fitter(2024);
    let fit = fitter.fit(1).unwrap();

    println!("k=1: {fit:?}");
    assert!((fit.weights[0] - 3.).abs() < 0.5);
    assert!(fit.train_err > 0. && fit.train_err < 0.2);
    assert!(fit.test_err > 0. && fit.test_err < 0.2);
}

#[test]
fn every_predictor_shrinks_training_error() {
    let fitter = fitter(2024);
    let one = fitter.fit(1).unwrap();
    let all = fitter.fit(15).unwrap();

    println!("k=1: {one:?}\nk=15: {all:?}");
    assert_eq!(all.weights.len(), 15);
    assert!(all.train_err < one.train_err);
    assert!(all.train_err < 0.06);
}

#[test]
fn refit_is_bit_identical() {
    let fitter = fitter(11);
    let first = (*fitter.fit(7).unwrap()).clone();
    let second = (*fitter.fit(7).unwrap()).clone();

    assert_eq!(first.weights, second.weights);
    assert_eq!(first.train_err.to_bits(), second.train_err.to_bits());
    assert_eq!(first.test_err.to_bits(), second.test_err.to_bits());
}

#[test]
fn same_seed_same_fits() {
    let a = fitter(5).sweep().unwrap();
    let b = fitter(5).sweep().unwrap();

    for (x, y) in a.fits().iter().zip(b.fits()) {
        assert_eq!(**x, **y);
    }
}

#[test]
fn descent_agrees_with_generated_slope() {
    let fitter = fitter(8);
    let train = fitter.dataset().train();

    let mut model = LinearModel::default();
    let config = DescentConfig {
        learning_rate: 0.1,
        epochs: 2000,
    };
    DescentTrainer::from_config(config)
        .train(&mut model, train.x(), train.y())
        .unwrap();

    assert!((model.weight - 3.).abs() < 0.5, "{model:?}");
    assert!(model.bias.abs() < 0.3, "{model:?}");
}
