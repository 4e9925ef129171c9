// src/simulation/mod.rs

//! Orchestrates the amplitude-evolution loop: build the uniform
//! superposition, derive the stopping step from the good/bad subspace
//! geometry, then repeatedly apply the oracle and the diffusion reflection
//! while recording the trajectory.

// Make engine module crate visible for tests
mod results;
pub(crate) mod engine;

// Re-export the main public interface types
pub use engine::compute_stopping_steps;
pub use results::{SimulationRun, StepRecord, Trajectory};

use crate::core::{GroverError, Problem, StateVector};
use crate::oracle::Oracle;
use engine::GroverEngine;

/// The main simulator: a pure function of the problem it is given.
///
/// A run builds the oracle, the good/bad basis partition, and the uniform
/// starting state from the problem, computes the stopping step, and drives
/// the internal engine through the iteration loop. No state persists across
/// calls; independent runs are fully independent.
#[derive(Default)] // Allows GroverSimulator::default() -> GroverSimulator::new()
pub struct GroverSimulator {
    // Future potential configuration options:
    // - norm_check_tolerance: f64, for per-step validation
    // - snapshot_policy: SnapshotPolicy, to skip full-state clones
}

impl GroverSimulator {
    /// Creates a new simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates Grover search for the given problem.
    ///
    /// # Arguments
    /// * `problem` - The marked-item mapping to search over.
    ///
    /// # Returns
    /// * `Ok(SimulationRun)` with the derived sizes, the computed stopping
    ///   step, and one trajectory record per iteration index
    ///   `0..=steps_to_stop`.
    /// * `Err(GroverError)` on internal-consistency failures; a well-formed
    ///   `Problem` never produces one.
    pub fn run(&self, problem: &Problem) -> Result<SimulationRun, GroverError> {
        let basis_size = problem.basis_size();
        let oracle = Oracle::build(problem);
        let (good_vectors, bad_vectors) = problem.partition_basis_vectors();
        let uniform = StateVector::uniform(basis_size);

        let steps_to_stop = compute_stopping_steps(&good_vectors, &bad_vectors, &uniform)?;

        let mut engine = GroverEngine::init(oracle, uniform, good_vectors, bad_vectors);
        let trajectory = engine.run(steps_to_stop)?;

        Ok(SimulationRun::new(
            problem.qubit_count(),
            basis_size,
            steps_to_stop,
            trajectory,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::engine::GroverEngine;
    use crate::validation::check_normalization;

    const TEST_TOLERANCE: f64 = 1e-9;

    fn problem_marking(n_potential: usize, marked: &[usize]) -> Problem {
        Problem::from_marked(n_potential, marked.iter().copied())
            .expect("test problem should be valid")
    }

    #[test]
    fn stopping_step_for_four_items_one_marked() -> Result<(), GroverError> {
        // θ = atan2(0.5, sqrt(0.75)) = π/6; round(π/(4θ) − 0.5) = 1.
        let problem = problem_marking(4, &[2]);
        let (good, bad) = problem.partition_basis_vectors();
        let uniform = StateVector::uniform(4);
        let theta = 0.5f64.atan2(0.75f64.sqrt());
        assert!((theta - std::f64::consts::FRAC_PI_6).abs() < TEST_TOLERANCE);
        assert_eq!(compute_stopping_steps(&good, &bad, &uniform)?, 1);
        Ok(())
    }

    #[test]
    fn stopping_step_zero_when_nothing_is_marked() -> Result<(), GroverError> {
        // θ = 0; the formula would divide by zero, so the engine stops at 0.
        let problem = problem_marking(8, &[]);
        let (good, bad) = problem.partition_basis_vectors();
        let uniform = StateVector::uniform(8);
        assert_eq!(compute_stopping_steps(&good, &bad, &uniform)?, 0);
        Ok(())
    }

    #[test]
    fn stopping_step_zero_when_everything_is_marked() -> Result<(), GroverError> {
        // θ = π/2; π/(4θ) − 0.5 = 0 exactly, no division by zero.
        let problem = problem_marking(4, &[0, 1, 2, 3]);
        let (good, bad) = problem.partition_basis_vectors();
        let uniform = StateVector::uniform(4);
        assert_eq!(compute_stopping_steps(&good, &bad, &uniform)?, 0);
        Ok(())
    }

    #[test]
    fn stopping_step_rejects_zero_dimensional_state() {
        let state = StateVector::new(Vec::new());
        assert!(matches!(
            compute_stopping_steps(&[], &[], &state),
            Err(GroverError::Degenerate { .. })
        ));
    }

    #[test]
    fn engine_preserves_unit_norm_every_step() -> Result<(), GroverError> {
        let problem = problem_marking(20, &[3, 17]);
        let (good, bad) = problem.partition_basis_vectors();
        let uniform = StateVector::uniform(problem.basis_size());
        let steps = compute_stopping_steps(&good, &bad, &uniform)?;

        let mut engine = GroverEngine::init(Oracle::build(&problem), uniform, good, bad);
        let trajectory = engine.run(steps)?;

        for record in &trajectory {
            check_normalization(record.state(), Some(TEST_TOLERANCE))?;
        }
        check_normalization(engine.get_state(), Some(TEST_TOLERANCE))?;
        Ok(())
    }

    #[test]
    fn engine_rejects_mismatched_state_injection() -> Result<(), GroverError> {
        let problem = problem_marking(4, &[1]);
        let (good, bad) = problem.partition_basis_vectors();
        let uniform = StateVector::uniform(4);
        let mut engine = GroverEngine::init(Oracle::build(&problem), uniform, good, bad);
        assert_eq!(
            engine.set_state(StateVector::uniform(8)),
            Err(GroverError::DimensionMismatch { expected: 4, found: 8 })
        );
        Ok(())
    }

    #[test]
    fn trajectory_records_monotone_amplification_until_stop() -> Result<(), GroverError> {
        // On the way to the first maximum the good-subspace norm must grow
        // strictly with every iteration.
        let problem = problem_marking(20, &[5, 11]);
        let run = GroverSimulator::new().run(&problem)?;
        let records = run.trajectory().records();
        assert_eq!(records.len(), run.steps_to_stop() + 1);
        for pair in records.windows(2) {
            assert!(
                pair[1].good_norm() > pair[0].good_norm(),
                "good norm fell between steps {} and {}",
                pair[0].step(),
                pair[1].step()
            );
        }
        Ok(())
    }
}
