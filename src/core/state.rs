// src/core/state.rs

use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

/// A complex probability-amplitude vector over the computational basis.
///
/// The squared magnitude of each component is interpreted as the probability
/// of the corresponding basis index. The engine creates one state per run as
/// the uniform superposition, mutates it in place once per iteration, and
/// clones a snapshot into the trajectory before each mutation; nothing else
/// mutates it.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    /// Amplitudes, one per basis index. Length is the basis size 2^n_qubits.
    amplitudes: Vec<Complex<f64>>,
}

impl StateVector {
    /// Creates a state from a raw amplitude vector.
    ///
    /// Normalization is the caller's responsibility; the constructors below
    /// produce unit-norm states and the engine's operators preserve the norm.
    pub fn new(amplitudes: Vec<Complex<f64>>) -> Self {
        Self { amplitudes }
    }

    /// The equal-superposition state: every amplitude 1/sqrt(dim), zero phase.
    ///
    /// This is both the starting state of every run and the fixed axis the
    /// diffusion step reflects about.
    pub fn uniform(dim: usize) -> Self {
        let amp = Complex::new(1.0 / (dim as f64).sqrt(), 0.0);
        Self { amplitudes: vec![amp; dim] }
    }

    /// The one-hot computational basis state |index> of the given dimension.
    ///
    /// # Panics
    /// Panics if `index >= dim`; basis states are only constructed internally
    /// from indices already validated against the basis size.
    pub fn basis(dim: usize, index: usize) -> Self {
        assert!(index < dim, "basis index {} out of range for dimension {}", index, dim);
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[index] = Complex::new(1.0, 0.0);
        Self { amplitudes }
    }

    /// The all-zero vector of the given dimension (not a valid quantum state;
    /// used as the empty-subspace projection result).
    pub fn zero(dim: usize) -> Self {
        Self { amplitudes: vec![Complex::zero(); dim] }
    }

    /// Provides read-only access to the amplitude vector.
    pub fn vector(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Provides mutable access for the simulation engine to modify the state.
    pub(crate) fn vector_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.amplitudes
    }

    /// Gets the dimension (number of basis states) of the vector.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// The L2 norm, sqrt(sum |c_i|^2).
    pub fn norm(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt()
    }

    /// Per-index probabilities |c_i|^2, in basis order.
    ///
    /// This is what the external histogram/visualization layer consumes.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|c| c.norm_sqr()).collect()
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}
