//! # tsim-arima
//!
//! ARIMA(p, d, q) sample-path simulation with Gaussian innovations, plus a
//! blended model that mixes an ARIMA path with any external sequence
//! generator.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["ArimaParams::new(phi, theta)"] -->|"ArimaModel::new(params)?"| B["ArimaModel"]
//!     B --> C[".sample(n, &mut source)"]
//!     B --> D[".sample_paths(n, n_sim, &mut source)"]
//!     A -->|"BlendedModelBuilder::new(params)"| E["builder"]
//!     E -->|".with_generator(g).build()?"| F["BlendedModel"]
//!     F --> G[".sample(n, &mut source)"]
//! ```
//!
//! Randomness is always injected through an [`InnovationSource`]:
//! [`GaussianInnovations`] wraps any `rand::Rng`, [`RecordedInnovations`]
//! replays a fixed draw.
//!
//! ## Recurrence
//!
//! With `theta_eff = [1, theta...]` and innovations `a`:
//!
//! | Index | Value |
//! |-------|-------|
//! | `0` | `a[0]` |
//! | `i >= 1` | `sum phi[k] x[i-1-k] + sum theta_eff[k] a[i-k] + trend` |
//!
//! The first `max(p, q + 1) + burn` values are discarded and the remaining
//! `n` are integrated `d` times.

mod blend;
mod error;
mod innovations;
mod integrate;
mod model;
mod params;
mod simulate;

pub use blend::{BlendedModel, BlendedModelBuilder, DEFAULT_TAU, SequenceGenerator};
pub use error::ArimaError;
pub use innovations::{GaussianInnovations, InnovationSource, RecordedInnovations};
pub use integrate::{difference, integrate, integrate_in_place};
pub use model::ArimaModel;
pub use params::{ArimaParams, DEFAULT_BURN};
pub use simulate::{simulate, simulate_into, simulate_paths};
