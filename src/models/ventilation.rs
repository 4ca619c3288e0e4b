//! Ventilation airflow models for residential buildings.
//!
//! Two independent models cover the regulatory ventilation figures of a
//! dwelling building:
//!
//! - [`demand`]: aggregates per-dwelling-type records into building totals
//!   and the required mechanical ventilation airflow under the 2009 and
//!   2017 revisions of the code.
//! - [`infiltration`]: estimates envelope air leakage from building
//!   permeability, wind exposure, and the design exhaust airflow, using
//!   the UNE-EN 15242 iterative pressure-balance method.
//!
//! Both models are pure functions of their inputs: no caching, no
//! mutation, no state between calls.

pub mod demand;
pub mod infiltration;
