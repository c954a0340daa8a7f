//! Error types for target solving.

use nf_chem::{ChemError, Ion};
use nf_engine::EngineError;
use thiserror::Error;

/// Errors surfaced to callers of the target solver.
///
/// Singular sub-systems inside NNLS are not errors at this level; they end
/// the current refinement step and the best estimate so far is kept.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid target for {ion}: {ppm} ppm (must be finite)")]
    InvalidTarget { ion: Ion, ppm: f64 },

    #[error("Chemistry error: {0}")]
    Chem(#[from] ChemError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
}

pub type SolverResult<T> = Result<T, SolverError>;
