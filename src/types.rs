//! Value objects flowing through the solver.
//!
//! [`RayleighInput`] is a plain bundle of the three scalars a caller supplies;
//! it is not validated on construction (validation happens inside the
//! solver). [`RayleighResult`] is immutable once produced and can only hold
//! finite coefficients, including after deserialization.
//!
//! # Why no `Eq`?
//! Both types wrap `f64`, so only `PartialEq` is derived.

use serde::{Deserialize, Serialize};

use crate::conventions::{angular_frequency, rayleigh_damping_ratio};
use crate::error::{self, RayleighError};
use crate::validate::{validate_finite, validate_period, validate_positive};

/// Two natural periods (seconds) and the damping ratio targeted at both.
///
/// # Examples
/// ```
/// use rayleigh::RayleighInput;
/// let input = RayleighInput::new(0.75, 0.54, 0.05);
/// let result = input.solve().unwrap();
/// assert!(result.alpha() > 0.0 && result.beta() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayleighInput {
    /// First natural period T₁ in seconds (must be > 0).
    pub period_t1: f64,
    /// Second natural period T₂ in seconds (must be > 0 and differ from T₁).
    pub period_t2: f64,
    /// Target damping ratio ζ (conventionally 0 < ζ < 1, not enforced).
    pub damping_ratio: f64,
}

impl RayleighInput {
    /// Bundle the three scalars. No validation is performed here.
    pub const fn new(period_t1: f64, period_t2: f64, damping_ratio: f64) -> Self {
        Self {
            period_t1,
            period_t2,
            damping_ratio,
        }
    }

    /// Solve with the default solver configuration.
    ///
    /// # Errors
    /// See [`crate::solver::solve`].
    pub fn solve(&self) -> error::Result<RayleighResult> {
        crate::solver::solve(self.period_t1, self.period_t2, self.damping_ratio)
    }
}

/// Rayleigh coefficients for `C = αM + βK`.
///
/// # Examples
/// ```
/// use rayleigh::RayleighResult;
/// let r = RayleighResult::new(0.487, 0.005).unwrap();
/// assert_eq!(r.into_tuple(), (0.487, 0.005));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RayleighResultRaw", into = "RayleighResultRaw")]
pub struct RayleighResult {
    /// Mass-proportional coefficient α (1/s).
    alpha: f64,
    /// Stiffness-proportional coefficient β (s).
    beta: f64,
}

#[derive(Serialize, Deserialize)]
struct RayleighResultRaw {
    alpha: f64,
    beta: f64,
}

impl TryFrom<RayleighResultRaw> for RayleighResult {
    type Error = RayleighError;
    fn try_from(raw: RayleighResultRaw) -> Result<Self, Self::Error> {
        Self::new(raw.alpha, raw.beta)
    }
}

impl From<RayleighResult> for RayleighResultRaw {
    fn from(r: RayleighResult) -> Self {
        Self {
            alpha: r.alpha,
            beta: r.beta,
        }
    }
}

impl RayleighResult {
    /// Wrap a pair of coefficients.
    ///
    /// # Errors
    /// Returns [`RayleighError::InvalidInput`] if either coefficient is NaN or infinite.
    pub fn new(alpha: f64, beta: f64) -> error::Result<Self> {
        validate_finite(alpha, "alpha")?;
        validate_finite(beta, "beta")?;
        Ok(Self { alpha, beta })
    }

    /// Mass-proportional coefficient α.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Stiffness-proportional coefficient β.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// `(alpha, beta)` as a plain tuple.
    pub fn into_tuple(self) -> (f64, f64) {
        (self.alpha, self.beta)
    }

    /// Damping ratio this model gives a mode at angular frequency `omega` (rad/s).
    ///
    /// # Errors
    /// Returns [`RayleighError::InvalidInput`] unless `omega` is positive and finite.
    pub fn damping_ratio_at(&self, omega: f64) -> error::Result<f64> {
        validate_positive(omega, "omega")?;
        Ok(rayleigh_damping_ratio(self.alpha, self.beta, omega))
    }

    /// Damping ratio this model gives a mode with natural period `period` (s).
    ///
    /// # Errors
    /// Returns [`RayleighError::InvalidPeriod`] unless `period` is positive and finite.
    pub fn damping_ratio_at_period(&self, period: f64) -> error::Result<f64> {
        validate_period(period, "period")?;
        Ok(rayleigh_damping_ratio(
            self.alpha,
            self.beta,
            angular_frequency(period),
        ))
    }
}
