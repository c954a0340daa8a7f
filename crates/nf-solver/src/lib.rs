//! Inverse problem: target ion concentrations → chemical dosages.
//!
//! Three layers, leaf first:
//! - `linear`: dense Gaussian elimination with partial pivoting
//! - `nnls`: Lawson–Hanson active-set non-negative least squares
//! - `target`: builds the weighted ppm-per-mg/L system from a chemical list,
//!   solves it and reports achieved concentrations through the engine

pub mod error;
pub mod linear;
pub mod nnls;
pub mod target;

pub use error::{SolverError, SolverResult};
pub use linear::{PIVOT_TOLERANCE, SingularSystem, solve_dense};
pub use nnls::{NnlsConfig, NnlsResult, NnlsTermination, nnls};
pub use target::{
    SolverTarget, TargetSolution, TargetSolverConfig, solve_for_target,
    solve_for_target_with_config,
};
