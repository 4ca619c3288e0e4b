//! # Ventilation Models
//!
//! Regulatory ventilation-airflow models for residential buildings under
//! the Spanish building-energy code (CTE DB-HE / DB-HS3).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific calculation models.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## What the crate computes
//!
//! A building described as a list of dwelling-type records is aggregated
//! into totals and the required mechanical ventilation airflow under two
//! code revisions ([`models::ventilation::demand`]); a building described
//! by its envelope permeability is solved for its natural infiltration
//! airflow with the UNE-EN 15242 iterative pressure-balance method
//! ([`models::ventilation::infiltration`]).
//!
//! Interface layers (forms, tables, persistence) live outside this crate:
//! every model here is a pure function of its explicit inputs and returns
//! plain result values for the caller to present.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're
//! useful, but their APIs are not stable. Breaking changes may occur as
//! needed. Utility code starts next to the model that needs it and moves
//! into [`support`] once a second model reaches for it.

pub mod models;
pub mod support;
