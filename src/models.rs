//! Public calculation models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules based on an
//! opinionated taxonomy; [`ventilation`] is currently the only domain.
//! This organization may evolve as more models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module: public input and result types at
//! the module root, with the computation split across internal submodules
//! (one concern per file). Models never hold state; callers construct
//! inputs, invoke a function or constructor, and receive a result value
//! or a typed error.

pub mod ventilation;
