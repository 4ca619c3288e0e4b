//! Envelope infiltration airflow, UNE-EN 15242 iterative method.
//!
//! Given the building envelope ([`Envelope`]) and a design exhaust
//! air-change rate, the model derives per-component leakage coefficients
//! at the 1 Pa reference, sizes the ventilation openings with the
//! simplified microventilation model, and solves the enclosure pressure
//! that balances the component flows against the required exhaust at the
//! code-mandated design wind speed. The air entering through the envelope
//! at that pressure, averaged against the design exhaust and the kitchen
//! extractor allowance, is the infiltration estimate ([`Infiltration`]).
//!
//! Solver settings default to the values the code prescribes and can be
//! overridden through [`SolverConfig`] (for instance, a zero wind speed
//! for stack-only studies).

mod config;
mod envelope;
mod error;
mod pressure;
mod solve;

pub use config::SolverConfig;
pub use envelope::{BuildingClass, Envelope};
pub use error::InfiltrationError;
pub use solve::Infiltration;
