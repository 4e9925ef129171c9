// src/simulation/engine.rs

use crate::algebra::{project_onto, reflect_about};
use crate::core::{GroverError, StateVector};
use crate::oracle::Oracle;
use crate::simulation::results::{StepRecord, Trajectory};
use std::f64::consts::PI;

/// Computes the number of oracle+diffusion iterations after which the
/// projection of `state` onto the good subspace is nearest its first
/// maximum.
///
/// The state lives in the two-dimensional plane spanned by the good and bad
/// subspace directions; each iteration rotates it by 2θ, where
/// θ = atan2(‖P_good state‖, ‖P_bad state‖). The closed-form stopping count
/// is round(π/(4θ) − 0.5). Rounding may under- or over-shoot by one step
/// when θ does not evenly divide π/4; that is inherent to the geometric
/// approximation.
///
/// Degenerate geometries are handled without dividing by zero: θ = 0 (no
/// good component at all) and θ = π/2 (state already entirely good) both
/// yield 0 steps.
pub fn compute_stopping_steps(
    good_vectors: &[StateVector],
    bad_vectors: &[StateVector],
    state: &StateVector,
) -> Result<usize, GroverError> {
    if state.dim() == 0 {
        return Err(GroverError::Degenerate {
            message: "cannot derive a stopping step for a zero-dimensional state".to_string(),
        });
    }
    let good_norm = project_onto(state, good_vectors)?.norm();
    let bad_norm = project_onto(state, bad_vectors)?.norm();

    // atan2(0, x) = 0 covers both "no good component" and the degenerate
    // all-zero case; π/(4θ) is undefined there, so stop immediately.
    let theta = good_norm.atan2(bad_norm);
    if theta <= 0.0 {
        return Ok(0);
    }

    let steps = (PI / (4.0 * theta) - 0.5).round();
    if steps <= 0.0 { Ok(0) } else { Ok(steps as usize) }
}

/// The core engine: owns the in-progress state vector exclusively for the
/// duration of a run and drives the oracle+diffusion iteration loop.
/// (Internal visibility)
pub(crate) struct GroverEngine {
    /// The evolving amplitude vector; mutated in place once per iteration.
    state: StateVector,
    /// The fixed diffusion axis, recomputed fresh once per run.
    uniform: StateVector,
    oracle: Oracle,
    good_vectors: Vec<StateVector>,
    bad_vectors: Vec<StateVector>,
}

impl GroverEngine {
    /// Initializes the engine with its immutable inputs; the starting state
    /// is the uniform superposition itself.
    pub(crate) fn init(
        oracle: Oracle,
        uniform: StateVector,
        good_vectors: Vec<StateVector>,
        bad_vectors: Vec<StateVector>,
    ) -> Self {
        Self {
            state: uniform.clone(),
            uniform,
            oracle,
            good_vectors,
            bad_vectors,
        }
    }

    /// Runs the iteration loop for `steps` oracle+diffusion applications.
    ///
    /// For each step index in `0..=steps`: snapshot the current state and
    /// its good/bad projection norms into the trajectory; then, unless this
    /// was the final index, apply the oracle followed by the diffusion
    /// reflection about the uniform vector.
    ///
    /// Both operators are unitary, so the state's L2 norm stays at 1 within
    /// floating tolerance throughout.
    pub(crate) fn run(&mut self, steps: usize) -> Result<Trajectory, GroverError> {
        let mut trajectory = Trajectory::new();

        for step in 0..=steps {
            let good_norm = project_onto(&self.state, &self.good_vectors)?.norm();
            let bad_norm = project_onto(&self.state, &self.bad_vectors)?.norm();
            trajectory.push(StepRecord::new(step, self.state.clone(), bad_norm, good_norm));

            if step < steps {
                self.oracle.apply_in_place(&mut self.state)?;
                self.state = reflect_about(&self.state, std::slice::from_ref(&self.uniform))?;
            }
        }

        Ok(trajectory)
    }

    #[cfg(test)]
    pub(crate) fn get_state(&self) -> &StateVector {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: StateVector) -> Result<(), GroverError> {
        if state.dim() != self.state.dim() {
            Err(GroverError::DimensionMismatch {
                expected: self.state.dim(),
                found: state.dim(),
            })
        } else {
            self.state = state;
            Ok(())
        }
    }
}
