//! Solver configuration.
//!
//! The only knob is how a degenerate determinant is recognized. Two periods
//! that are bit-identical always make the system singular; periods that are
//! merely very close give a tiny determinant and huge, meaningless
//! coefficients. [`SingularityCheck::Exact`] keeps the historical behavior of
//! only catching exact equality, [`SingularityCheck::Relative`] (the default)
//! also rejects determinants that are negligible relative to `max(ω₁², ω₂²)`.

use serde::{Deserialize, Serialize};

use crate::error;
use crate::validate::validate_non_negative;

/// Default relative tolerance for [`SingularityCheck::Relative`].
///
/// With this value, periods must differ by more than roughly 5e-13 in relative
/// terms to be solved.
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-12;

/// How the solver decides that the 2×2 system is singular.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SingularityCheck {
    /// Singular only when `ω₂² − ω₁²` is exactly zero.
    Exact,
    /// Singular when `|ω₂² − ω₁²| ≤ tolerance · max(ω₁², ω₂²)`.
    Relative { tolerance: f64 },
}

impl Default for SingularityCheck {
    fn default() -> Self {
        Self::Relative {
            tolerance: DEFAULT_RELATIVE_TOLERANCE,
        }
    }
}

impl SingularityCheck {
    /// Whether `determinant` counts as zero, given the squared frequencies
    /// it was computed from.
    pub fn is_singular(&self, determinant: f64, omega1_sq: f64, omega2_sq: f64) -> bool {
        match *self {
            Self::Exact => determinant == 0.0,
            Self::Relative { tolerance } => {
                determinant.abs() <= tolerance * omega1_sq.max(omega2_sq)
            }
        }
    }
}

/// Configuration for [`RayleighSolver`](crate::solver::RayleighSolver).
///
/// # Examples
/// ```
/// use rayleigh::config::{SingularityCheck, SolverConfig};
/// let cfg: SolverConfig = serde_json::from_str(r#"{"singularity": {"kind": "exact"}}"#).unwrap();
/// assert_eq!(cfg.singularity, SingularityCheck::Exact);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub singularity: SingularityCheck,
}

impl SolverConfig {
    /// Only exact equality of the squared frequencies is treated as singular.
    pub fn exact() -> Self {
        Self {
            singularity: SingularityCheck::Exact,
        }
    }

    /// Relative singularity check with a custom tolerance.
    pub fn relative(tolerance: f64) -> Self {
        Self {
            singularity: SingularityCheck::Relative { tolerance },
        }
    }

    /// Check that the configuration is usable.
    ///
    /// # Errors
    /// Returns [`RayleighError::InvalidInput`](crate::RayleighError::InvalidInput)
    /// if a relative tolerance is negative, NaN or infinite.
    pub fn validate(&self) -> error::Result<()> {
        if let SingularityCheck::Relative { tolerance } = self.singularity {
            validate_non_negative(tolerance, "singularity tolerance")?;
        }
        Ok(())
    }
}
