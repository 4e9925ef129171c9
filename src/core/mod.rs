// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod problem;
pub mod state;

// Re-export public types for convenient access via `grover_sim::core::TypeName`
pub use error::GroverError;
pub use problem::{Problem, basis_size, qubit_count};
pub use state::StateVector;
