// src/core/problem.rs

use super::error::GroverError;
use super::state::StateVector;
use rand::Rng;
use rand::seq::index;
use std::collections::BTreeSet;
use std::fmt;

/// Returns the minimal number of qubits needed to address `n_potential`
/// items, i.e. ceil(log2(n_potential)).
pub fn qubit_count(n_potential: usize) -> Result<u32, GroverError> {
    if n_potential < 1 {
        return Err(GroverError::InvalidArgument {
            message: format!(
                "number of potential solutions must be at least 1, got {}",
                n_potential
            ),
        });
    }
    Ok(n_potential.next_power_of_two().trailing_zeros())
}

/// Returns the padded basis size 2^qubit_count.
pub fn basis_size(qubit_count: u32) -> usize {
    1usize << qubit_count
}

/// An unstructured search problem: a total mapping from item index to a
/// boolean "marked" flag.
///
/// Every index in `[0, n_potential)` is either marked (a correct solution)
/// or unmarked; basis indices beyond `n_potential` introduced by power-of-two
/// padding are implicitly unmarked and are never proposed as solutions.
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// Number of addressable items N.
    n_potential: usize,
    /// The marked item indices, each in `[0, n_potential)`.
    /// BTreeSet keeps iteration order deterministic for Display and tests.
    marked: BTreeSet<usize>,
}

impl Problem {
    /// Samples a problem with `n_correct` distinct marked indices drawn
    /// without replacement from `[0, n_potential)`.
    ///
    /// Randomness is injected so that construction is deterministic and
    /// testable given a seeded source.
    ///
    /// # Errors
    /// `InvalidArgument` if `n_potential < 1` or `n_correct > n_potential`.
    pub fn sample<R: Rng + ?Sized>(
        n_potential: usize,
        n_correct: usize,
        rng: &mut R,
    ) -> Result<Self, GroverError> {
        // Validates n_potential as a side effect.
        qubit_count(n_potential)?;
        if n_correct > n_potential {
            return Err(GroverError::InvalidArgument {
                message: format!(
                    "cannot mark {} of {} potential solutions",
                    n_correct, n_potential
                ),
            });
        }
        let marked = index::sample(rng, n_potential, n_correct)
            .into_iter()
            .collect();
        Ok(Self { n_potential, marked })
    }

    /// Builds a problem from an explicit set of marked indices (the
    /// truth-table form). Duplicate indices are collapsed.
    ///
    /// # Errors
    /// `InvalidArgument` if `n_potential < 1` or any index is out of range.
    pub fn from_marked<I>(n_potential: usize, marked: I) -> Result<Self, GroverError>
    where
        I: IntoIterator<Item = usize>,
    {
        qubit_count(n_potential)?;
        let marked: BTreeSet<usize> = marked.into_iter().collect();
        if let Some(&bad) = marked.iter().find(|&&idx| idx >= n_potential) {
            return Err(GroverError::InvalidArgument {
                message: format!(
                    "marked index {} out of range for {} potential solutions",
                    bad, n_potential
                ),
            });
        }
        Ok(Self { n_potential, marked })
    }

    /// Number of addressable items N.
    pub fn n_potential(&self) -> usize {
        self.n_potential
    }

    /// Number of marked (correct) items.
    pub fn n_marked(&self) -> usize {
        self.marked.len()
    }

    /// Whether `index` is a marked solution. Padding indices at or beyond
    /// `n_potential` always report `false`.
    pub fn is_marked(&self, index: usize) -> bool {
        self.marked.contains(&index)
    }

    /// The marked indices in ascending order.
    pub fn marked_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.marked.iter().copied()
    }

    /// Minimal qubit count for this problem's index space.
    pub fn qubit_count(&self) -> u32 {
        // n_potential >= 1 is guaranteed by construction.
        self.n_potential.next_power_of_two().trailing_zeros()
    }

    /// Padded basis size 2^qubit_count.
    pub fn basis_size(&self) -> usize {
        basis_size(self.qubit_count())
    }

    /// Partitions the full computational basis into one-hot vectors for
    /// marked indices (good) and all remaining indices including padding
    /// (bad).
    ///
    /// The two sets are disjoint and together exhaust the basis, so their
    /// members are pairwise orthogonal unit vectors.
    pub fn partition_basis_vectors(&self) -> (Vec<StateVector>, Vec<StateVector>) {
        let dim = self.basis_size();
        let mut good = Vec::with_capacity(self.marked.len());
        let mut bad = Vec::with_capacity(dim - self.marked.len());
        for index in 0..dim {
            let one_hot = StateVector::basis(dim, index);
            if self.is_marked(index) {
                good.push(one_hot);
            } else {
                bad.push(one_hot);
            }
        }
        (good, bad)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Problem[{} items, marked: {:?}]",
            self.n_potential,
            self.marked.iter().collect::<Vec<_>>()
        )
    }
}
