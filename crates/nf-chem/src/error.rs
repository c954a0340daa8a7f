//! Chemistry reference-data errors.

use nf_core::NfError;
use thiserror::Error;

/// Result type for catalog and reference-data operations.
pub type ChemResult<T> = Result<T, ChemError>;

/// Errors raised while looking up or validating reference data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChemError {
    /// Chemical id absent from the catalog.
    #[error("Unknown chemical: {id}")]
    UnknownChemical { id: String },

    /// Ion key that does not name a tracked ion.
    #[error("Unknown ion: {key}")]
    UnknownIon { key: String },

    /// Recipe id absent from the preset list.
    #[error("Unknown recipe: {id}")]
    UnknownRecipe { id: String },

    /// Chemical record violates a catalog invariant.
    #[error("Invalid chemical '{id}': {what}")]
    InvalidChemical { id: String, what: String },

    /// Two catalog entries share an id.
    #[error("Duplicate chemical id: {id}")]
    DuplicateChemical { id: String },

    /// Catalog document could not be parsed.
    #[error("Failed to parse {format} catalog: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// Catalog file could not be read.
    #[error("Failed to read catalog file {path}: {message}")]
    Io { path: String, message: String },

    #[error(transparent)]
    Numeric(#[from] NfError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ChemError::UnknownChemical {
            id: "nonexistent".into(),
        };
        assert_eq!(err.to_string(), "Unknown chemical: nonexistent");

        let err = ChemError::Parse {
            format: "YAML",
            message: "bad indent".into(),
        };
        assert!(err.to_string().contains("YAML"));
    }

    #[test]
    fn numeric_error_is_transparent() {
        let err: ChemError = NfError::Negative {
            what: "coefficient",
            value: -1.0,
        }
        .into();
        assert!(err.to_string().starts_with("Negative value"));
    }
}
