//! Text-form adapter for presentation shells.
//!
//! A desktop or mobile shell collects two periods and a damping ratio as
//! text, and shows α and β back as text. This module holds that glue so
//! every shell shares it:
//!
//! - [`FormFields::parse`] turns the three text fields into a [`RayleighInput`]
//! - [`CoefficientLabels`] renders a [`RayleighResult`] in 4-digit scientific
//!   notation (`4.8707e-01`)
//! - [`error_message`] gives the wording for a transient error notification
//! - [`submit`] runs the whole round trip and never panics
//!
//! The shell owns its widgets and field values; nothing here holds state.

use serde::Serialize;

use crate::error::{self, RayleighError};
use crate::solver::RayleighSolver;
use crate::types::{RayleighInput, RayleighResult};

/// Field label for the first period.
pub const PERIOD_T1_LABEL: &str = "Period T1";
/// Field label for the second period.
pub const PERIOD_T2_LABEL: &str = "Period T2";
/// Field label for the damping ratio.
pub const DAMPING_RATIO_LABEL: &str = "Damping ratio ζ";

/// Parse one user-entered number.
///
/// Surrounding whitespace is ignored. A single decimal comma (`0,05`) is
/// accepted in place of a dot.
///
/// # Errors
/// Returns [`RayleighError::InvalidInput`] if the field is empty or not a number.
pub fn parse_field(text: &str, label: &str) -> error::Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(RayleighError::InvalidInput {
            message: format!("{label} is empty"),
        });
    }

    let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    normalized
        .parse::<f64>()
        .map_err(|_| RayleighError::InvalidInput {
            message: format!("{label} is not a number: {trimmed:?}"),
        })
}

/// Raw text of the three form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormFields<'a> {
    pub period_t1: &'a str,
    pub period_t2: &'a str,
    pub damping_ratio: &'a str,
}

impl<'a> FormFields<'a> {
    pub fn new(period_t1: &'a str, period_t2: &'a str, damping_ratio: &'a str) -> Self {
        Self {
            period_t1,
            period_t2,
            damping_ratio,
        }
    }

    /// Parse all three fields, in on-screen order.
    ///
    /// # Errors
    /// Returns [`RayleighError::InvalidInput`] for the first empty or malformed field.
    pub fn parse(&self) -> error::Result<RayleighInput> {
        Ok(RayleighInput::new(
            parse_field(self.period_t1, PERIOD_T1_LABEL)?,
            parse_field(self.period_t2, PERIOD_T2_LABEL)?,
            parse_field(self.damping_ratio, DAMPING_RATIO_LABEL)?,
        ))
    }
}

/// Format a coefficient in 4-digit scientific notation with a signed,
/// zero-padded exponent: `1.2345e-02`, `4.8707e-01`, `3.0000e+05`.
pub fn format_coefficient(value: f64) -> String {
    let raw = format!("{value:.4e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(e) => {
                let sign = if e < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", e.unsigned_abs())
            }
            Err(_) => raw,
        },
        None => raw,
    }
}

/// Display strings for a solved result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoefficientLabels {
    /// Mass-proportional coefficient α.
    pub alpha: String,
    /// Stiffness-proportional coefficient β.
    pub beta: String,
}

impl From<&RayleighResult> for CoefficientLabels {
    fn from(result: &RayleighResult) -> Self {
        Self {
            alpha: format_coefficient(result.alpha()),
            beta: format_coefficient(result.beta()),
        }
    }
}

/// Notification text for a failed computation.
pub fn error_message(err: &RayleighError) -> String {
    format!("Error: check your inputs ({err})")
}

/// What the shell should show after the user submits the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Show these labels in the result card.
    Solved(CoefficientLabels),
    /// Show this message as a transient notification; keep the field values.
    Rejected(String),
}

impl FormOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

/// Parse, solve and render in one step.
pub fn submit(fields: &FormFields<'_>, solver: &RayleighSolver) -> FormOutcome {
    match fields.parse().and_then(|input| solver.solve_input(&input)) {
        Ok(result) => FormOutcome::Solved(CoefficientLabels::from(&result)),
        Err(err) => {
            #[cfg(feature = "logging")]
            tracing::debug!(error = %err, "form submission rejected");
            FormOutcome::Rejected(error_message(&err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- parse_field ---

    #[test]
    fn parses_plain_number() {
        assert_eq!(parse_field("0.75", PERIOD_T1_LABEL).unwrap(), 0.75);
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_field("  0.54\n", PERIOD_T2_LABEL).unwrap(), 0.54);
    }

    #[test]
    fn accepts_decimal_comma() {
        assert_eq!(parse_field("0,05", DAMPING_RATIO_LABEL).unwrap(), 0.05);
    }

    #[test]
    fn accepts_exponent_notation() {
        assert_eq!(parse_field("5e-2", DAMPING_RATIO_LABEL).unwrap(), 0.05);
    }

    #[test]
    fn rejects_empty_field() {
        let r = parse_field("   ", PERIOD_T1_LABEL);
        match r {
            Err(RayleighError::InvalidInput { message }) => {
                assert!(message.contains("Period T1"));
                assert!(message.contains("empty"));
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["abc", "1,000,5", "0.5.1", "1.5,2"] {
            let r = parse_field(bad, PERIOD_T1_LABEL);
            assert!(
                matches!(r, Err(RayleighError::InvalidInput { .. })),
                "expected rejection for {bad:?}"
            );
        }
    }

    // --- FormFields ---

    #[test]
    fn parse_reports_first_bad_field() {
        let r = FormFields::new("0.75", "", "").parse();
        match r {
            Err(RayleighError::InvalidInput { message }) => assert!(message.contains("Period T2")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn parse_builds_input() {
        let input = FormFields::new("0.75", "0.54", "0.05").parse().unwrap();
        assert_eq!(input, RayleighInput::new(0.75, 0.54, 0.05));
    }

    // --- format_coefficient ---

    #[test]
    fn formats_like_scientific_four_digits() {
        assert_eq!(format_coefficient(0.012345), "1.2345e-02");
        assert_eq!(format_coefficient(0.4870686), "4.8707e-01");
        assert_eq!(format_coefficient(300000.0), "3.0000e+05");
        assert_eq!(format_coefficient(0.0), "0.0000e+00");
        assert_eq!(format_coefficient(-2.5e-120), "-2.5000e-120");
    }

    #[test]
    fn non_finite_falls_through() {
        assert_eq!(format_coefficient(f64::NAN), "NaN");
    }

    // --- submit ---

    #[test]
    fn submit_solves_reference_case() {
        let outcome = submit(
            &FormFields::new("0.75", "0.54", "0.05"),
            &RayleighSolver::default(),
        );
        assert_eq!(
            outcome,
            FormOutcome::Solved(CoefficientLabels {
                alpha: "4.8707e-01".into(),
                beta: "4.9967e-03".into(),
            })
        );
    }

    #[test]
    fn submit_rejects_zero_period() {
        let outcome = submit(
            &FormFields::new("0", "0.5", "0.05"),
            &RayleighSolver::default(),
        );
        match outcome {
            FormOutcome::Rejected(msg) => {
                assert!(msg.starts_with("Error: check your inputs"));
                assert!(msg.contains("invalid period"));
            }
            FormOutcome::Solved(_) => panic!("zero period must be rejected"),
        }
    }

    #[test]
    fn submit_rejects_equal_periods() {
        let outcome = submit(
            &FormFields::new("0.5", "0.5", "0.05"),
            &RayleighSolver::default(),
        );
        assert!(!outcome.is_solved());
        assert!(matches!(outcome, FormOutcome::Rejected(msg) if msg.contains("singular")));
    }

    #[test]
    fn labels_render_is_idempotent() {
        let result = crate::solve(0.75, 0.54, 0.05).unwrap();
        assert_eq!(CoefficientLabels::from(&result), CoefficientLabels::from(&result));
    }
}
