use nf_chem::ChemError;
use nf_engine::EngineError;
use nf_solver::SolverError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error(transparent)]
    Chem(#[from] ChemError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
