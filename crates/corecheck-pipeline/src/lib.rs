//! Graph transformation pipeline and core-compatibility validation.
//!
//! This crate implements the corecheck validation pass: the generic
//! [`GraphTransformer`] step contract, the ordered [`TransformPipeline`],
//! and the [`CompatibilityChecker`] that rejects dependency graphs bundling
//! an incompatible version of the host's core libraries.

pub mod compat;
pub mod transformer;

pub use compat::{is_core_artifact, CompatibilityChecker};
pub use transformer::{GraphTransformer, TransformPipeline};
