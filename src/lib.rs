//! # rayleigh
//!
//! Two-point Rayleigh damping coefficients for structural dynamics.
//!
//! Given two natural periods `T₁`, `T₂` and a target damping ratio `ζ`,
//! computes the mass-proportional coefficient α and the stiffness-proportional
//! coefficient β of `C = αM + βK` so that both modes get exactly ζ.
//!
//! ```
//! let r = rayleigh::solve(0.75, 0.54, 0.05)?;
//! assert!((r.damping_ratio_at_period(0.75)? - 0.05).abs() < 1e-12);
//! # Ok::<(), rayleigh::RayleighError>(())
//! ```
//!
//! ## Architecture
//!
//! - **`solver`** — Closed-form 2×2 solve ([`solve`], [`RayleighSolver`])
//! - **`config`** — How a singular system is recognized ([`SolverConfig`])
//! - **`conventions`** — Period ↔ angular frequency, modal damping ratio
//! - **`form`** — Text parsing and display formatting for UI shells
//!
//! ## Design
//!
//! - **Pure and synchronous.** Solving is a fixed handful of floating-point
//!   operations with no I/O and no shared state. Call it from any thread.
//! - **No panics.** Every fallible operation returns [`Result`]. Library code
//!   never calls `unwrap()` or `expect()`.
//! - **No silent NaN.** Degenerate inputs are reported as
//!   [`RayleighError::SingularSystem`] or [`RayleighError::InvalidPeriod`]
//!   before any division happens.
//! - **Serializable.** Inputs, results and configuration implement Serde
//!   `Serialize` / `Deserialize`; results are re-validated on deserialization.

pub mod config;
pub mod conventions;
pub mod error;
pub mod form;
pub mod solver;
pub mod types;
mod validate;

#[doc(inline)]
pub use config::{SingularityCheck, SolverConfig};
#[doc(inline)]
pub use error::{RayleighError, Result};
#[doc(inline)]
pub use solver::{RayleighSolver, solve};
#[doc(inline)]
pub use types::{RayleighInput, RayleighResult};
