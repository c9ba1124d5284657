//! Refactoring equivalence gate
//!
//! Decides whether a candidate model denotes the same solid as a
//! reference model: same variant topology, every declared dimension
//! within tolerance, same placement. Differing is an ordinary outcome
//! carried in the verdict, never an error; construction failures are the
//! caller's problem before the gate is ever invoked.

use crate::model::{ModelVariant, ParametricModel};

/// Fixed numeric tolerance for dimension and placement comparison.
pub const DIMENSION_TOLERANCE: f64 = 1e-6;

/// Outcome of one gate run.
///
/// The non-equivalent variants carry the first divergence found, in
/// check order: variant, then dimensions in declaration order, then
/// placement axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EquivalenceVerdict {
    /// Geometrically and locationally indistinguishable within tolerance
    Equivalent,
    /// Different model variants; topology differs regardless of values
    VariantMismatch {
        /// Reference variant
        reference: ModelVariant,
        /// Candidate variant
        candidate: ModelVariant,
    },
    /// A declared dimension diverged beyond tolerance
    DimensionMismatch {
        /// Name of the first diverging dimension
        name: &'static str,
        /// Reference value
        reference: f64,
        /// Candidate value
        candidate: f64,
    },
    /// Placement origins diverged beyond tolerance
    PlacementMismatch {
        /// Axis index of the first diverging origin component
        axis: usize,
        /// Reference component
        reference: f64,
        /// Candidate component
        candidate: f64,
    },
}

impl EquivalenceVerdict {
    /// Boolean view of the verdict.
    #[inline]
    #[must_use]
    pub fn is_equivalent(&self) -> bool {
        matches!(self, EquivalenceVerdict::Equivalent)
    }
}

impl std::fmt::Display for EquivalenceVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EquivalenceVerdict::Equivalent => write!(f, "equivalent"),
            EquivalenceVerdict::VariantMismatch {
                reference,
                candidate,
            } => write!(f, "variant mismatch: {reference} vs {candidate}"),
            EquivalenceVerdict::DimensionMismatch {
                name,
                reference,
                candidate,
            } => write!(f, "dimension mismatch: {name} {reference} vs {candidate}"),
            EquivalenceVerdict::PlacementMismatch {
                axis,
                reference,
                candidate,
            } => write!(f, "placement mismatch: axis {axis} {reference} vs {candidate}"),
        }
    }
}

/// Acceptance gate for a refactoring, bound to one reference model.
///
/// Pure predicate: running it mutates nothing and repeated runs with the
/// same candidate return the same verdict.
#[derive(Debug, Clone, Copy)]
pub struct RefactoringGate {
    reference: ParametricModel,
    tolerance: f64,
}

impl RefactoringGate {
    /// Bind a gate to a reference model with the default tolerance.
    #[inline]
    #[must_use]
    pub fn new(reference: ParametricModel) -> Self {
        Self {
            reference,
            tolerance: DIMENSION_TOLERANCE,
        }
    }

    /// Override the comparison tolerance.
    #[inline]
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// The reference model this gate compares against.
    #[inline]
    #[must_use]
    pub fn reference(&self) -> &ParametricModel {
        &self.reference
    }

    /// Compare a candidate against the reference.
    ///
    /// Checks, in order: variant identity, geometric equivalence (every
    /// declared dimension within tolerance; shape is fully determined
    /// by the declared dimensions for this family), locational
    /// equivalence (placement origins within tolerance; canonical for
    /// every current variant).
    #[must_use]
    pub fn run(&self, candidate: &ParametricModel) -> EquivalenceVerdict {
        let verdict = self.compare(candidate);
        tracing::debug!(
            reference = %self.reference.variant(),
            candidate = %candidate.variant(),
            verdict = %verdict,
            "refactoring gate"
        );
        verdict
    }

    fn compare(&self, candidate: &ParametricModel) -> EquivalenceVerdict {
        if self.reference.variant() != candidate.variant() {
            return EquivalenceVerdict::VariantMismatch {
                reference: self.reference.variant(),
                candidate: candidate.variant(),
            };
        }

        // Same variant, so the dimension lists have identical names and
        // length by construction.
        for ((name, reference), (_, value)) in self
            .reference
            .dimensions()
            .into_iter()
            .zip(candidate.dimensions())
        {
            if (reference - value).abs() > self.tolerance {
                return EquivalenceVerdict::DimensionMismatch {
                    name,
                    reference,
                    candidate: value,
                };
            }
        }

        let reference_origin = self.reference.placement().origin;
        let candidate_origin = candidate.placement().origin;
        for axis in 0..3 {
            if (reference_origin[axis] - candidate_origin[axis]).abs() > self.tolerance {
                return EquivalenceVerdict::PlacementMismatch {
                    axis,
                    reference: reference_origin[axis],
                    candidate: candidate_origin[axis],
                };
            }
        }

        EquivalenceVerdict::Equivalent
    }
}
