//! Blending ARIMA paths with HMM observations.

use approx::assert_abs_diff_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tsim_arima::{
    ArimaError, ArimaModel, ArimaParams, BlendedModelBuilder, GaussianInnovations,
    SequenceGenerator,
};
use tsim_hmm::{GaussianHmm, HmmGenerator, TransitionMatrix};
use tsim_stats::mean;

fn regime_model() -> GaussianHmm {
    // Stationary distribution [0.75, 0.25]; stationary mean 0.75*0 + 0.25*8 = 2.
    GaussianHmm::new(
        vec![0.75, 0.25],
        TransitionMatrix::from_rows(vec![vec![0.9, 0.1], vec![0.3, 0.7]]).unwrap(),
        vec![0.0, 8.0],
        vec![1.0, 1.0],
    )
    .unwrap()
}

fn arima_params() -> ArimaParams {
    ArimaParams::new(vec![0.5], vec![0.2]).with_mu(1.0)
}

#[test]
fn tau_zero_returns_hmm_observations() {
    let mut blended = BlendedModelBuilder::new(arima_params())
        .with_tau(0.0)
        .with_generator(HmmGenerator::new(regime_model(), StdRng::seed_from_u64(11)))
        .build()
        .unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let out = blended
        .sample(200, &mut GaussianInnovations::new(&mut rng))
        .unwrap();

    let expected = HmmGenerator::new(regime_model(), StdRng::seed_from_u64(11)).generate(200);
    assert_eq!(out, expected);
}

#[test]
fn tau_one_returns_arima_path() {
    let mut blended = BlendedModelBuilder::new(arima_params())
        .with_tau(1.0)
        .with_generator(HmmGenerator::new(regime_model(), StdRng::seed_from_u64(11)))
        .build()
        .unwrap();
    let mut rng1 = StdRng::seed_from_u64(2);
    let out = blended
        .sample(100, &mut GaussianInnovations::new(&mut rng1))
        .unwrap();

    let mut rng2 = StdRng::seed_from_u64(2);
    let expected = ArimaModel::new(arima_params())
        .unwrap()
        .sample(100, &mut GaussianInnovations::new(&mut rng2))
        .unwrap();
    assert_eq!(out, expected);
}

#[test]
fn blended_mean_is_weighted() {
    // ARIMA mean: mu * (1 + 0.2) / (1 - 0.5) = 2.4; HMM mean: 2.
    let tau = 0.4;
    let mut blended = BlendedModelBuilder::new(arima_params().with_burn(100))
        .with_tau(tau)
        .with_generator(HmmGenerator::new(regime_model(), StdRng::seed_from_u64(3)))
        .build()
        .unwrap();
    let mut rng = StdRng::seed_from_u64(4);
    let out = blended
        .sample(20_000, &mut GaussianInnovations::new(&mut rng))
        .unwrap();

    let expected = tau * 2.4 + (1.0 - tau) * 2.0;
    assert_abs_diff_eq!(mean(&out), expected, epsilon = 0.15);
}

#[test]
fn missing_generator_is_configuration_error() {
    let err = BlendedModelBuilder::new(arima_params())
        .with_tau(0.5)
        .build()
        .unwrap_err();
    assert!(matches!(err, ArimaError::MissingGenerator));
}
