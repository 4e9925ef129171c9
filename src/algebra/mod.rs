// src/algebra/mod.rs

//! Primitive complex-vector operations: inner products, subspace
//! projection, and reflection about unit vectors.
//!
//! These are the only linear-algebra operations the engine needs. They never
//! fail for well-formed vectors of matching length; a length mismatch is a
//! programming error surfaced as [`GroverError::DimensionMismatch`].

use crate::core::{GroverError, StateVector};
use num_complex::Complex;
use num_traits::Zero;

fn check_dims(u: &StateVector, v: &StateVector) -> Result<(), GroverError> {
    if u.dim() != v.dim() {
        Err(GroverError::DimensionMismatch {
            expected: u.dim(),
            found: v.dim(),
        })
    } else {
        Ok(())
    }
}

/// The complex inner product sum(u_i * conj(v_i)).
///
/// Used wherever an amplitude projection coefficient is needed. No side
/// effects.
pub fn inner_product(u: &StateVector, v: &StateVector) -> Result<Complex<f64>, GroverError> {
    check_dims(u, v)?;
    let dot = u
        .vector()
        .iter()
        .zip(v.vector())
        .map(|(a, b)| a * b.conj())
        .sum();
    Ok(dot)
}

/// The component of `v` lying in the subspace spanned by `basis_set`.
///
/// Computed as a sequential accumulation: for each basis vector b, the
/// component ⟨b|remainder⟩·b (coefficient conjugates b, not the remainder)
/// is added to the running projection and subtracted from the running
/// remainder before the next basis vector is considered. This is exact only
/// because the engine's basis sets are pairwise-orthogonal one-hot unit
/// vectors.
///
/// Returns the zero vector when `basis_set` is empty.
pub fn project_onto(
    v: &StateVector,
    basis_set: &[StateVector],
) -> Result<StateVector, GroverError> {
    let mut projected = vec![Complex::zero(); v.dim()];
    let mut remainder = v.clone();
    for basis in basis_set {
        let coeff = inner_product(&remainder, basis)?;
        for (i, b) in basis.vector().iter().enumerate() {
            let along = coeff * b;
            projected[i] += along;
            remainder.vector_mut()[i] -= along;
        }
    }
    Ok(StateVector::new(projected))
}

/// Applies, in list order, an elementary reflection about each unit vector
/// in `axes`: v → 2⟨u|v⟩u − v, with the coefficient conjugating the axis u
/// rather than the state v, so complex amplitudes reflect unitarily.
///
/// Each reflection keeps the component of v along u and negates the
/// component perpendicular to u; composing them applies each to the output
/// of the previous. A single axis is the Householder-style reflection used
/// by the diffusion step.
///
/// Precondition: every axis must have unit norm. A non-unit axis silently
/// produces a non-unitary result; callers are responsible for normalization.
pub fn reflect_about(
    v: &StateVector,
    axes: &[StateVector],
) -> Result<StateVector, GroverError> {
    let mut reflected = v.clone();
    for axis in axes {
        let coeff = inner_product(&reflected, axis)?;
        for (r, u) in reflected.vector_mut().iter_mut().zip(axis.vector()) {
            // 2·⟨u,v⟩·u_i − v_i
            *r = 2.0 * coeff * u - *r;
        }
    }
    Ok(reflected)
}
