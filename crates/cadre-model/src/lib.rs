//! Parametric model family and refactoring equivalence gate
//!
//! A [`ParametricModel`] is fully determined by a fixed set of strictly
//! positive dimensional attributes; validation happens at construction
//! and a model never exists in a partially built state. The
//! [`RefactoringGate`] decides whether two models denote the same solid
//! in the same pose, within tolerance: the acceptance check for any
//! script refactoring.
//!
//! # Example
//!
//! ```
//! use cadre_model::{LShapedExtrude, RefactoringGate};
//!
//! let reference = LShapedExtrude::new(120.0, 80.0, 40.0, 40.0, 20.0).unwrap();
//! let candidate = LShapedExtrude::new(120.0, 80.0, 40.0, 40.0, 20.0).unwrap();
//!
//! let gate = RefactoringGate::new(reference.into());
//! assert!(gate.run(&candidate.into()).is_equivalent());
//! ```

// Core modules
mod equivalence;
mod model;

// Re-exports
pub use equivalence::{EquivalenceVerdict, RefactoringGate, DIMENSION_TOLERANCE};
pub use model::{
    Block, DimensionError, LShapedBlock, LShapedExtrude, ModelVariant, ParametricModel,
    Placement,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
