//! Two-point Rayleigh damping solver.
//!
//! Rayleigh damping expresses the damping matrix as `C = αM + βK`. The modal
//! damping ratio at angular frequency ω is then
//!
//! ```text
//! ζ(ω) = α / (2ω) + β·ω / 2      ⇔      α + β·ω² = 2·ζ·ω
//! ```
//!
//! Requiring the same ζ at two modes gives a 2×2 linear system in (α, β):
//!
//! ```text
//! ⎡1  ω₁²⎤ ⎡α⎤   ⎡2ζω₁⎤
//! ⎣1  ω₂²⎦ ⎣β⎦ = ⎣2ζω₂⎦
//! ```
//!
//! solved here by Cramer's rule. The determinant `ω₂² − ω₁²` is checked
//! against the configured [`SingularityCheck`](crate::config::SingularityCheck)
//! before any division.
//!
//! # References
//! - Chopra, A. K. "Dynamics of Structures", §11.4 (Rayleigh damping)

use crate::config::SolverConfig;
use crate::conventions::angular_frequency;
use crate::error::{self, RayleighError};
use crate::types::{RayleighInput, RayleighResult};
use crate::validate::{validate_finite, validate_period};

/// Solve for Rayleigh coefficients with the default configuration.
///
/// # Arguments
/// * `period_t1` — First natural period in seconds (must be > 0)
/// * `period_t2` — Second natural period in seconds (must be > 0, ≠ `period_t1`)
/// * `damping_ratio` — Target damping ratio ζ at both periods (any finite value)
///
/// # Errors
/// Returns [`RayleighError::InvalidPeriod`] for a non-positive or non-finite
/// period, [`RayleighError::InvalidInput`] for a non-finite damping ratio,
/// [`RayleighError::SingularSystem`] when the periods coincide, and
/// [`RayleighError::NumericalError`] if a coefficient overflows.
///
/// # Examples
/// ```
/// let r = rayleigh::solve(0.75, 0.54, 0.05).unwrap();
/// assert!((r.alpha() - 0.48707).abs() < 1e-4);
/// assert!((r.beta() - 0.0049967).abs() < 1e-6);
/// ```
pub fn solve(period_t1: f64, period_t2: f64, damping_ratio: f64) -> error::Result<RayleighResult> {
    RayleighSolver::default().solve(period_t1, period_t2, damping_ratio)
}

/// Rayleigh coefficient solver with an explicit configuration.
///
/// Stateless apart from its immutable configuration; share it freely
/// across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RayleighSolver {
    config: SolverConfig,
}

impl RayleighSolver {
    /// Create a solver from a configuration.
    ///
    /// # Errors
    /// Returns [`RayleighError::InvalidInput`] if the configuration is invalid.
    pub fn new(config: SolverConfig) -> error::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this solver was built with.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve a bundled [`RayleighInput`].
    ///
    /// # Errors
    /// See [`RayleighSolver::solve`].
    pub fn solve_input(&self, input: &RayleighInput) -> error::Result<RayleighResult> {
        self.solve(input.period_t1, input.period_t2, input.damping_ratio)
    }

    /// Compute (α, β) so that `C = αM + βK` has damping ratio `damping_ratio`
    /// at both `period_t1` and `period_t2`.
    ///
    /// The result does not depend on the order of the two periods.
    ///
    /// # Errors
    /// See [`solve`].
    pub fn solve(
        &self,
        period_t1: f64,
        period_t2: f64,
        damping_ratio: f64,
    ) -> error::Result<RayleighResult> {
        validate_period(period_t1, "period_t1")?;
        validate_period(period_t2, "period_t2")?;
        validate_finite(damping_ratio, "damping_ratio")?;

        let w1 = angular_frequency(period_t1);
        let w2 = angular_frequency(period_t2);

        // Rows [a, b | c] of the augmented system.
        let (a1, b1, c1) = (1.0, w1 * w1, 2.0 * damping_ratio * w1);
        let (a2, b2, c2) = (1.0, w2 * w2, 2.0 * damping_ratio * w2);

        // Equal frequencies are singular even when ω² overflows and det is NaN.
        let det = if w1 == w2 { 0.0 } else { a1 * b2 - a2 * b1 };
        if w1 == w2 || self.config.singularity.is_singular(det, b1, b2) {
            return Err(RayleighError::SingularSystem {
                message: format!(
                    "periods {period_t1:e} and {period_t2:e} give a degenerate determinant {det:e}"
                ),
                determinant: det,
            });
        }

        let alpha = (c1 * b2 - c2 * b1) / det;
        let beta = (a1 * c2 - a2 * c1) / det;

        if !alpha.is_finite() || !beta.is_finite() {
            return Err(RayleighError::NumericalError {
                message: format!(
                    "non-finite coefficients (alpha={alpha}, beta={beta}) for periods \
                     {period_t1:e} and {period_t2:e}"
                ),
            });
        }

        #[cfg(feature = "logging")]
        tracing::debug!(
            period_t1,
            period_t2,
            damping_ratio,
            determinant = det,
            alpha,
            beta,
            "rayleigh coefficients solved"
        );

        RayleighResult::new(alpha, beta)
    }
}
