// src/validation/mod.rs

//! Provides functions to validate a [`StateVector`] against the invariants
//! the engine is supposed to preserve.

use crate::core::{GroverError, StateVector};

// Default tolerance (can be overridden by caller)
const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Checks that the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// The oracle and diffusion operators are both unitary, so a normalized
/// input stays normalized; a failure here means the amplitude arithmetic
/// went wrong, not the problem definition.
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0 (defaults to 1e-9).
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(GroverError::Degenerate)` if normalization fails.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<(), GroverError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sq: f64 = state.vector().iter().map(|c| c.norm_sqr()).sum();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(GroverError::Degenerate {
            message: format!(
                "state vector normalization failed: Sum(|c_i|^2) = {} (deviation > {})",
                norm_sq, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}
