//! Gaussian-emission hidden Markov model sampler.
//!
//! Provides the external sequence generator for blended simulations: a
//! first-order Markov chain over `K` hidden states, each emitting Gaussian
//! observations.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  transition   │────▶│   simulate     │────▶│     model        │
//!  │  (validate P) │     │  (draw states) │     │  (emit values)   │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tsim_arima::SequenceGenerator;
//! use tsim_hmm::{GaussianHmm, HmmGenerator, TransitionMatrix};
//!
//! let hmm = GaussianHmm::new(
//!     vec![1.0, 0.0],
//!     TransitionMatrix::from_rows(vec![vec![0.9, 0.1], vec![0.5, 0.5]]).unwrap(),
//!     vec![0.0, 3.0],
//!     vec![1.0, 1.0],
//! )
//! .unwrap();
//!
//! let mut generator = HmmGenerator::new(hmm, StdRng::seed_from_u64(0));
//! assert_eq!(generator.generate(10).len(), 10);
//! ```

pub mod error;
pub mod generator;
pub mod model;
pub mod simulate;
pub mod transition;

pub use error::HmmError;
pub use generator::HmmGenerator;
pub use model::{GaussianHmm, HmmSample};
pub use simulate::{simulate_states, simulate_states_into};
pub use transition::TransitionMatrix;
