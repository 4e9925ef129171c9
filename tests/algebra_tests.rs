// tests/algebra_tests.rs

use grover_sim::algebra::{inner_product, project_onto, reflect_about};
use grover_sim::{GroverError, StateVector};
use num_complex::Complex;

const TEST_TOLERANCE: f64 = 1e-9;

/// Asserts that two complex state vectors are approximately equal
/// component-wise.
fn assert_state_approx_equal(actual: &StateVector, expected: &StateVector, context: &str) {
    assert_eq!(actual.dim(), expected.dim(), "dimension mismatch - {}", context);
    for (i, (a, e)) in actual.vector().iter().zip(expected.vector()).enumerate() {
        let dist_sq = (a - e).norm_sqr();
        assert!(
            dist_sq < TEST_TOLERANCE * TEST_TOLERANCE,
            "mismatch at index {} - actual: {}, expected: {}, context: {}",
            i, a, e, context
        );
    }
}

/// A fixed non-trivial unit vector with complex phases for exercising the
/// algebra beyond the real-amplitude states the engine produces.
fn sample_state() -> StateVector {
    StateVector::new(vec![
        Complex::new(0.5, 0.0),
        Complex::new(0.0, 0.5),
        Complex::new(-0.5, 0.0),
        Complex::new(0.3, 0.4),
    ])
}

#[test]
fn reflection_about_any_unit_axis_is_an_involution() -> Result<(), GroverError> {
    let v = sample_state();
    let axes = [
        StateVector::uniform(4),
        StateVector::basis(4, 1),
        StateVector::basis(4, 3),
    ];
    for axis in &axes {
        let once = reflect_about(&v, std::slice::from_ref(axis))?;
        let twice = reflect_about(&once, std::slice::from_ref(axis))?;
        assert_state_approx_equal(&twice, &v, "double reflection");
    }
    Ok(())
}

#[test]
fn reflection_list_composes_sequentially() -> Result<(), GroverError> {
    let v = sample_state();
    let u1 = StateVector::basis(4, 0);
    let u2 = StateVector::uniform(4);

    let composed = reflect_about(&v, &[u1.clone(), u2.clone()])?;
    let stepwise = reflect_about(&reflect_about(&v, std::slice::from_ref(&u1))?, std::slice::from_ref(&u2))?;
    assert_state_approx_equal(&composed, &stepwise, "list composition vs manual chaining");
    Ok(())
}

#[test]
fn projections_onto_complementary_subspaces_decompose_the_vector() -> Result<(), GroverError> {
    let v = sample_state();
    let good: Vec<StateVector> = [1usize, 3].iter().map(|&i| StateVector::basis(4, i)).collect();
    let bad: Vec<StateVector> = [0usize, 2].iter().map(|&i| StateVector::basis(4, i)).collect();

    let p_good = project_onto(&v, &good)?;
    let p_bad = project_onto(&v, &bad)?;

    // Each projection keeps the original amplitudes, phases included, on
    // its own coordinates and is zero elsewhere.
    let zero = Complex::new(0.0, 0.0);
    let expected_good = StateVector::new(vec![zero, v.vector()[1], zero, v.vector()[3]]);
    let expected_bad = StateVector::new(vec![v.vector()[0], zero, v.vector()[2], zero]);
    assert_state_approx_equal(&p_good, &expected_good, "projection onto the good subspace");
    assert_state_approx_equal(&p_bad, &expected_bad, "projection onto the bad subspace");

    // Summing the two complementary projections recomposes the vector.
    let recomposed = StateVector::new(
        p_good
            .vector()
            .iter()
            .zip(p_bad.vector())
            .map(|(g, b)| g + b)
            .collect(),
    );
    assert_state_approx_equal(&recomposed, &v, "complementary projections sum to the vector");

    // Pythagoras in the two orthogonal subspaces.
    let plane_norm = (p_good.norm().powi(2) + p_bad.norm().powi(2)).sqrt();
    assert!((plane_norm - v.norm()).abs() < TEST_TOLERANCE);
    Ok(())
}

#[test]
fn reflection_coefficient_conjugates_the_axis_not_the_state() -> Result<(), GroverError> {
    // Reflecting [i, 0] about |+>: ⟨u|v⟩ = i/√2, so the image is [0, i].
    // Conjugating the state instead would yield the non-unitary [−2i, −i].
    let v = StateVector::new(vec![Complex::new(0.0, 1.0), Complex::new(0.0, 0.0)]);
    let axis = StateVector::uniform(2);
    let reflected = reflect_about(&v, std::slice::from_ref(&axis))?;
    let expected = StateVector::new(vec![Complex::new(0.0, 0.0), Complex::new(0.0, 1.0)]);
    assert_state_approx_equal(&reflected, &expected, "reflect [i, 0] about the uniform axis");
    assert!((reflected.norm() - 1.0).abs() < TEST_TOLERANCE);
    Ok(())
}

#[test]
fn projection_coefficient_magnitudes_match_amplitudes() -> Result<(), GroverError> {
    let v = sample_state();
    let axis = StateVector::basis(4, 3);
    let projected = project_onto(&v, std::slice::from_ref(&axis))?;
    // |projection onto a one-hot axis| = |amplitude at that index| = 0.5.
    assert!((projected.norm() - 0.5).abs() < TEST_TOLERANCE);
    Ok(())
}

#[test]
fn all_operations_reject_mismatched_dimensions() {
    let u = StateVector::uniform(4);
    let v = StateVector::uniform(8);

    assert_eq!(
        inner_product(&u, &v),
        Err(GroverError::DimensionMismatch { expected: 4, found: 8 })
    );
    assert!(matches!(
        project_onto(&v, std::slice::from_ref(&u)),
        Err(GroverError::DimensionMismatch { .. })
    ));
    assert!(matches!(
        reflect_about(&v, std::slice::from_ref(&u)),
        Err(GroverError::DimensionMismatch { .. })
    ));
}

#[test]
fn inner_product_is_conjugate_symmetric() -> Result<(), GroverError> {
    let u = sample_state();
    let v = StateVector::uniform(4);
    let uv = inner_product(&u, &v)?;
    let vu = inner_product(&v, &u)?;
    assert!((uv - vu.conj()).norm() < TEST_TOLERANCE);
    Ok(())
}
