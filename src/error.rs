//! Error types for the rayleigh library.
//!
//! All fallible operations return `Result<T, RayleighError>` rather than
//! panicking. The presentation layer decides how a failure is shown to the
//! user; this crate never does any user-facing messaging on its own (see
//! [`crate::form::error_message`] for the default wording).

use thiserror::Error;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, RayleighError>;

/// Errors that can occur while computing Rayleigh damping coefficients.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RayleighError {
    /// A natural period is zero, negative, NaN or infinite.
    #[error("invalid period: {message}")]
    InvalidPeriod {
        message: String,
        /// The rejected period, in seconds.
        value: f64,
    },

    /// The two periods coincide (or are numerically indistinguishable), so
    /// the 2×2 system has no unique solution.
    #[error("singular system: {message}")]
    SingularSystem {
        message: String,
        /// Determinant `ω₂² − ω₁²` that failed the singularity check.
        determinant: f64,
    },

    /// Any other invalid input (non-finite damping ratio, empty or malformed
    /// text field, bad solver configuration).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Numerical computation produced a non-finite coefficient.
    #[error("numerical error: {message}")]
    NumericalError { message: String },
}
