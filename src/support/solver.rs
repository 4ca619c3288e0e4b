//! Bounded root finding for pressure-balance problems.

pub mod bisection;
