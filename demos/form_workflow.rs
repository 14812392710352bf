//! Walk through what a UI shell does with the solver.
//!
//! Shows how to:
//!   - Solve for Rayleigh coefficients directly
//!   - Check the damping the model gives other modes
//!   - Drive the text-form adapter, including error paths
//!   - Pick a singularity check
//!
//! Run with: `cargo run --example form_workflow`

use rayleigh::form::{self, FormFields, FormOutcome};
use rayleigh::{RayleighSolver, SolverConfig, solve};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (t1, t2, zeta) = (0.75, 0.54, 0.05);

    // ---------------------------------------------------------------
    // 1. Direct solve
    // ---------------------------------------------------------------

    let result = solve(t1, t2, zeta)?;
    println!("Rayleigh coefficients for T1 = {t1} s, T2 = {t2} s, ζ = {zeta}");
    println!("  α (mass):      {}", form::format_coefficient(result.alpha()));
    println!("  β (stiffness): {}", form::format_coefficient(result.beta()));

    // ---------------------------------------------------------------
    // 2. Damping across a period range
    // ---------------------------------------------------------------

    println!("\nModal damping ratio implied by the model");
    for period in [2.0, 1.0, 0.75, 0.64, 0.54, 0.3, 0.1] {
        let z = result.damping_ratio_at_period(period)?;
        println!("  T = {period:>5.2} s  ζ = {:.4}", z);
    }

    // ---------------------------------------------------------------
    // 3. Form round trip
    // ---------------------------------------------------------------

    let solver = RayleighSolver::default();
    println!("\nForm submissions");
    for fields in [
        FormFields::new("0.75", "0.54", "0,05"),
        FormFields::new("0.75", "", "0.05"),
        FormFields::new("0", "0.54", "0.05"),
        FormFields::new("0.5", "0.5", "0.05"),
    ] {
        match form::submit(&fields, &solver) {
            FormOutcome::Solved(labels) => {
                println!("  {fields:?}\n    α = {}  β = {}", labels.alpha, labels.beta)
            }
            FormOutcome::Rejected(msg) => println!("  {fields:?}\n    {msg}"),
        }
    }

    // ---------------------------------------------------------------
    // 4. Singularity check
    // ---------------------------------------------------------------

    let close = (1.0, 1.0 + 1e-14);
    let exact = RayleighSolver::new(SolverConfig::exact())?;
    println!("\nNearly equal periods {close:?}");
    println!("  exact check:    {:?}", exact.solve(close.0, close.1, zeta));
    println!("  default check:  {:?}", solver.solve(close.0, close.1, zeta));

    Ok(())
}
