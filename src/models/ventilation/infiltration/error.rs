//! Infiltration estimate failures.

use thiserror::Error;

use crate::support::solver::bisection::BisectionError;

/// Errors that can occur while estimating infiltration.
///
/// Both variants describe inputs the physical model cannot balance; the
/// caller decides how to present them (typically as "infiltration not
/// computable" next to the affected building).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InfiltrationError {
    /// Every leakage and opening coefficient is zero, so no enclosure
    /// pressure can move the required airflow through the envelope.
    #[error("envelope has no leakage or ventilation paths")]
    DegenerateEnvelope,

    /// The enclosure pressure balance could not be solved.
    #[error("enclosure pressure balance failed")]
    Solver(#[from] BisectionError),
}
