//! Supporting utilities used by the ventilation models.
//!
//! These modules are part of the public API because they're useful on their
//! own, but their APIs are not stable. Breaking changes may occur as needed.
//!
//! - [`constraint`]: Numeric invariants checked at construction time.
//! - [`float`]: NaN-propagating floating-point helpers.
//! - [`solver`]: Bounded root finding for pressure-balance problems.
//! - [`vector`]: Element-wise arithmetic for weighted aggregation.

pub mod constraint;
pub mod float;
pub mod solver;
pub mod vector;
