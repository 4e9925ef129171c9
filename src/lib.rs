// src/lib.rs

//! `grover-sim` - A classical simulator for Grover's quantum search
//!
//! This library models the evolution of a complex probability-amplitude
//! vector under repeated oracle and diffusion reflections, until amplitude
//! concentrates on the marked items of an unstructured search space.

pub mod core;
pub mod algebra;
pub mod oracle;
pub mod simulation;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use core::{GroverError, Problem, StateVector, basis_size, qubit_count};
pub use oracle::Oracle;
pub use simulation::{
    GroverSimulator,
    SimulationRun,
    StepRecord,
    Trajectory,
    compute_stopping_steps,
};
pub use validation::check_normalization;

// Example 1: Searching 4 items with one marked solution
// Demonstrates the near-exact single-step amplification Grover gives for
// N = 4 with one marked item.
/// ```
/// use grover_sim::{GroverSimulator, Problem};
///
/// // Index 2 is the only correct solution among 4 items.
/// let problem = Problem::from_marked(4, [2]).expect("valid problem");
/// assert_eq!(problem.qubit_count(), 2);
/// assert_eq!(problem.basis_size(), 4);
///
/// let run = GroverSimulator::new().run(&problem).expect("run succeeds");
///
/// // θ = 30° here, so one oracle+diffusion iteration is optimal.
/// assert_eq!(run.steps_to_stop(), 1);
///
/// // After that iteration the probability of measuring index 2 is ~1.
/// let final_probs = run.final_state().expect("trajectory is non-empty").probabilities();
/// assert!(final_probs[2] > 0.9);
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Randomly marked items with a seeded source
// Demonstrates injecting a deterministic randomness source for marked-item
// selection and reading the trajectory the run produced.
/// ```
/// use grover_sim::{GroverSimulator, Problem};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let problem = Problem::sample(20, 2, &mut rng).expect("valid problem");
/// assert_eq!(problem.n_marked(), 2);
/// assert_eq!(problem.qubit_count(), 5);
/// assert_eq!(problem.basis_size(), 32);
///
/// let run = GroverSimulator::new().run(&problem).expect("run succeeds");
///
/// // One record per iteration index 0..=steps_to_stop, in step order.
/// assert_eq!(run.trajectory().len(), run.steps_to_stop() + 1);
///
/// // The good-subspace norm starts at sqrt(2/32) and ends near 1.
/// let first = run.trajectory().get(0).unwrap();
/// let last = run.trajectory().final_record().unwrap();
/// assert!((first.good_norm() - (2.0f64 / 32.0).sqrt()).abs() < 1e-9);
/// assert!(last.good_probability() > first.good_probability());
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
