// src/simulation/results.rs

use crate::core::StateVector;
use std::fmt;

/// One trajectory entry: the state as it stood at the start of an iteration,
/// together with the norms of its projections onto the bad and good
/// subspaces.
///
/// The (bad_norm, good_norm) pair is the state's position in the
/// two-dimensional rotation plane; good_norm² is the total success
/// probability at this step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    step: usize,
    state: StateVector,
    bad_norm: f64,
    good_norm: f64,
}

impl StepRecord {
    pub(crate) fn new(step: usize, state: StateVector, bad_norm: f64, good_norm: f64) -> Self {
        Self { step, state, bad_norm, good_norm }
    }

    /// Iteration index this record was captured at, starting at 0.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The state snapshot, taken before the step's oracle application.
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Norm of the projection onto the bad (unmarked) subspace.
    pub fn bad_norm(&self) -> f64 {
        self.bad_norm
    }

    /// Norm of the projection onto the good (marked) subspace.
    pub fn good_norm(&self) -> f64 {
        self.good_norm
    }

    /// Total probability of measuring a marked index at this step.
    pub fn good_probability(&self) -> f64 {
        self.good_norm * self.good_norm
    }

    /// Per-index probabilities |amplitude|², for histogram rendering.
    pub fn probabilities(&self) -> Vec<f64> {
        self.state.probabilities()
    }
}

/// The full recorded evolution of a run: one [`StepRecord`] per iteration
/// index `0..=steps_to_stop`, in increasing step order.
///
/// Read-only once the run completes; consumed by external visualization
/// (rotation diagrams, per-step probability histograms).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    records: Vec<StepRecord>,
}

impl Trajectory {
    /// Creates an empty trajectory. (Internal visibility)
    pub(crate) fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Appends a record. (Internal visibility)
    pub(crate) fn push(&mut self, record: StepRecord) {
        self.records.push(record);
    }

    /// Number of recorded steps (steps_to_stop + 1 for a completed run).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` if no steps were recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record at iteration index `step`, if recorded.
    pub fn get(&self, step: usize) -> Option<&StepRecord> {
        self.records.get(step)
    }

    /// All records in step order.
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// The last record, i.e. the state at the stopping step.
    pub fn final_record(&self) -> Option<&StepRecord> {
        self.records.last()
    }

    /// Iterates over the records in step order.
    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trajectory ({} steps recorded):", self.records.len())?;
        for record in &self.records {
            writeln!(
                f,
                "  step {}: bad={:.6} good={:.6} P_correct={:.6}",
                record.step(),
                record.bad_norm(),
                record.good_norm(),
                record.good_probability()
            )?;
        }
        Ok(())
    }
}

/// Everything a completed simulation produced: the derived sizes, the
/// computed stopping step, and the recorded trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRun {
    qubit_count: u32,
    basis_size: usize,
    steps_to_stop: usize,
    trajectory: Trajectory,
}

impl SimulationRun {
    pub(crate) fn new(
        qubit_count: u32,
        basis_size: usize,
        steps_to_stop: usize,
        trajectory: Trajectory,
    ) -> Self {
        Self { qubit_count, basis_size, steps_to_stop, trajectory }
    }

    /// Qubits needed to address the problem's index space.
    pub fn qubit_count(&self) -> u32 {
        self.qubit_count
    }

    /// Padded basis size 2^qubit_count.
    pub fn basis_size(&self) -> usize {
        self.basis_size
    }

    /// The analytically computed number of oracle+diffusion iterations the
    /// run stopped at.
    pub fn steps_to_stop(&self) -> usize {
        self.steps_to_stop
    }

    /// The recorded per-step evolution.
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// The state at the stopping step.
    ///
    /// A completed run always recorded at least step 0, so this never
    /// returns an empty trajectory's `None` in practice.
    pub fn final_state(&self) -> Option<&StateVector> {
        self.trajectory.final_record().map(|record| record.state())
    }
}

impl fmt::Display for SimulationRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "SimulationRun[{} qubits, {} bases, stop after {} steps]",
            self.qubit_count, self.basis_size, self.steps_to_stop
        )?;
        write!(f, "{}", self.trajectory)
    }
}
