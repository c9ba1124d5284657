//! Acceptance scenarios for the refactoring gate: an LShapedExtrude
//! reference compared against candidates across the model family.

use cadre_model::{
    Block, DimensionError, LShapedBlock, LShapedExtrude, ParametricModel, RefactoringGate,
};
use proptest::prelude::*;

fn reference_gate() -> RefactoringGate {
    let reference = LShapedExtrude::new(120.0, 80.0, 40.0, 40.0, 20.0).unwrap();
    RefactoringGate::new(reference.into())
}

#[test]
fn identical_extrude_passes() {
    let candidate: ParametricModel =
        LShapedExtrude::new(120.0, 80.0, 40.0, 40.0, 20.0).unwrap().into();
    assert!(reference_gate().run(&candidate).is_equivalent());
}

#[test]
fn shortened_extrude_fails() {
    let candidate: ParametricModel =
        LShapedExtrude::new(100.0, 80.0, 40.0, 40.0, 20.0).unwrap().into();
    assert!(!reference_gate().run(&candidate).is_equivalent());
}

#[test]
fn lshaped_block_candidate_fails_on_variant() {
    // Same topology family by eye, different construction: never equivalent.
    let candidate: ParametricModel =
        LShapedBlock::new(120.0, 80.0, 40.0, 40.0, 80.0, 20.0).unwrap().into();
    assert!(!reference_gate().run(&candidate).is_equivalent());
}

#[test]
fn plain_block_candidate_fails_on_variant() {
    let candidate: ParametricModel = Block::new(100.0, 50.0, 25.0).unwrap().into();
    assert!(!reference_gate().run(&candidate).is_equivalent());
}

#[test]
fn invalid_candidate_never_reaches_the_gate() {
    // Construction is the validation boundary; the gate only sees models
    // that already passed it.
    let err: DimensionError =
        LShapedExtrude::new(120.0, 80.0, 40.0, 40.0, -20.0).unwrap_err();
    assert_eq!(err.name, "side_thickness");
}

proptest! {
    /// All-positive dimensions always construct, and the constructed
    /// model is always equivalent to itself.
    #[test]
    fn prop_positive_dimensions_construct_and_reflect(
        dims in proptest::array::uniform5(1e-3..1e4f64)
    ) {
        let model = LShapedExtrude::new(dims[0], dims[1], dims[2], dims[3], dims[4])
            .expect("positive dimensions must construct");
        let gate = RefactoringGate::new(model.into());
        prop_assert!(gate.run(&model.into()).is_equivalent());
    }

    /// Any single non-positive dimension aborts construction.
    #[test]
    fn prop_non_positive_dimension_rejected(
        index in 0usize..5,
        bad in -1e4..=0.0f64
    ) {
        let mut dims = [120.0, 80.0, 40.0, 40.0, 20.0];
        dims[index] = bad;
        let result = LShapedExtrude::new(dims[0], dims[1], dims[2], dims[3], dims[4]);
        prop_assert!(result.is_err());
    }

    /// Perturbing one dimension beyond tolerance flips the verdict.
    #[test]
    fn prop_single_dimension_sensitivity(
        index in 0usize..5,
        delta in 1e-3..1e2f64
    ) {
        let mut dims = [120.0, 80.0, 40.0, 40.0, 20.0];
        dims[index] += delta;
        let candidate = LShapedExtrude::new(dims[0], dims[1], dims[2], dims[3], dims[4])
            .unwrap();
        prop_assert!(!reference_gate().run(&candidate.into()).is_equivalent());
    }
}
