//! Structural dynamics conventions.
//!
//! Conversions between natural period and angular frequency, and the modal
//! damping ratio implied by a Rayleigh damping model. These are raw formulas
//! with no validation; callers check their inputs first.

use std::f64::consts::TAU;

/// Convert a natural period to angular frequency: ω = 2π / T.
pub fn angular_frequency(period: f64) -> f64 {
    TAU / period
}

/// Convert an angular frequency back to a natural period: T = 2π / ω.
pub fn period_from_angular_frequency(omega: f64) -> f64 {
    TAU / omega
}

/// Damping ratio of a mode at angular frequency ω under `C = αM + βK`:
/// ζ(ω) = α / (2ω) + β·ω / 2.
pub fn rayleigh_damping_ratio(alpha: f64, beta: f64, omega: f64) -> f64 {
    alpha / (2.0 * omega) + beta * omega / 2.0
}
