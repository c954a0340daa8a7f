//! Error types for conversion and analysis operations.

use nf_chem::ChemError;
use nf_core::NfError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Chem(#[from] ChemError),

    #[error("Invalid dosage for '{chemical_id}': {value} mg/L (must be finite and >= 0)")]
    InvalidDosage { chemical_id: String, value: f64 },

    #[error("Chemical '{id}' is not an acid or base")]
    NotAcidOrBase { id: String },

    #[error("Invalid argument: {0}")]
    InvalidArg(#[from] NfError),
}

pub type EngineResult<T> = Result<T, EngineError>;
