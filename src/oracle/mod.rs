// src/oracle/mod.rs

//! Builds the diagonal oracle operator from a problem definition.

use crate::core::{GroverError, Problem, StateVector};
use num_complex::Complex;
use std::fmt;

/// The oracle: a basis_size × basis_size diagonal operator with −1 at each
/// marked basis index and +1 everywhere else, padding included.
///
/// Applying it sign-flips the amplitude of every marked index, which is all
/// the engine ever learns about the problem during iteration. Built once
/// from a [`Problem`]; immutable afterward. The matrix is diagonal, so only
/// the diagonal is stored and the matrix-vector product is an element-wise
/// multiply.
#[derive(Debug, Clone, PartialEq)]
pub struct Oracle {
    diagonal: Vec<Complex<f64>>,
}

impl Oracle {
    /// Builds the oracle for `problem` over its padded basis.
    ///
    /// Deterministic given the problem; no randomness, no side effects.
    pub fn build(problem: &Problem) -> Self {
        let diagonal = (0..problem.basis_size())
            .map(|index| {
                if problem.is_marked(index) {
                    Complex::new(-1.0, 0.0)
                } else {
                    Complex::new(1.0, 0.0)
                }
            })
            .collect();
        Self { diagonal }
    }

    /// The operator's dimension (number of diagonal entries).
    pub fn dim(&self) -> usize {
        self.diagonal.len()
    }

    /// Read-only access to the diagonal entries.
    pub fn diagonal(&self) -> &[Complex<f64>] {
        &self.diagonal
    }

    /// `true` when no index is marked, i.e. the oracle is the identity.
    pub fn is_identity(&self) -> bool {
        self.diagonal.iter().all(|entry| entry.re > 0.0)
    }

    /// Applies the operator to `state` in place (the matrix-vector product
    /// of a diagonal matrix).
    ///
    /// # Errors
    /// `DimensionMismatch` if the state's dimension differs from the
    /// oracle's.
    pub fn apply_in_place(&self, state: &mut StateVector) -> Result<(), GroverError> {
        if state.dim() != self.dim() {
            return Err(GroverError::DimensionMismatch {
                expected: self.dim(),
                found: state.dim(),
            });
        }
        for (amplitude, entry) in state.vector_mut().iter_mut().zip(&self.diagonal) {
            *amplitude *= entry;
        }
        Ok(())
    }
}

impl fmt::Display for Oracle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oracle[diag(")?;
        for (i, entry) in self.diagonal.iter().enumerate() {
            write!(f, "{}{:+.0}", if i > 0 { ", " } else { "" }, entry.re)?;
        }
        write!(f, ")]")
    }
}
