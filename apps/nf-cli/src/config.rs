//! CLI configuration and input documents.

use crate::error::{CliError, CliResult};
use nf_chem::{Catalog, Chemical, ChemicalCategory, ChemicalSource, Dosage, recipe};
use nf_solver::{SolverTarget, TargetSolverConfig};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Contents of `--config`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Custom catalog file, relative to the config file's directory.
    pub catalog: Option<PathBuf>,
    pub solver: TargetSolverConfig,
}

impl CliConfig {
    pub fn load(path: &Path) -> CliResult<Self> {
        let mut config: CliConfig = read_document(path)?;
        if let Some(catalog) = &config.catalog {
            if catalog.is_relative() {
                if let Some(dir) = path.parent() {
                    config.catalog = Some(dir.join(catalog));
                }
            }
        }
        tracing::debug!(path = %path.display(), "loaded CLI config");
        Ok(config)
    }

    pub fn catalog(&self) -> CliResult<Catalog> {
        match &self.catalog {
            Some(path) => Ok(Catalog::load(path)?),
            None => Ok(Catalog::builtin()),
        }
    }
}

/// A dosage list file.
#[derive(Debug, Deserialize)]
pub struct DosageFile {
    pub dosages: Vec<Dosage>,
}

/// A solver input file. `chemicals` optionally restricts the candidates.
#[derive(Debug, Deserialize)]
pub struct TargetFile {
    pub targets: Vec<SolverTarget>,
    #[serde(default)]
    pub chemicals: Vec<String>,
}

/// Parse a YAML or JSON document; `.json` selects JSON.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(path, &content)
}

fn parse_document<T: DeserializeOwned>(path: &Path, content: &str) -> CliResult<T> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let parsed = if is_json {
        serde_json::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    };
    parsed.map_err(|message| CliError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Dosages from a preset id or a dosage file.
pub fn load_dosages(recipe_id: Option<&str>, file: Option<&Path>) -> CliResult<Vec<Dosage>> {
    match (recipe_id, file) {
        (Some(id), _) => Ok(recipe(id)?.dosages.clone()),
        (None, Some(path)) => Ok(read_document::<DosageFile>(path)?.dosages),
        // clap requires one of the two
        (None, None) => Ok(Vec::new()),
    }
}

/// Candidate chemicals for the solver, in catalog order without duplicates.
///
/// Explicit ids and categories are unioned. With neither, every macro and
/// micro salt is a candidate.
pub fn select_chemicals(
    catalog: &Catalog,
    categories: &[ChemicalCategory],
    ids: &[String],
) -> CliResult<Vec<Chemical>> {
    for id in ids {
        catalog.require(id)?;
    }

    let default_categories = [ChemicalCategory::Macro, ChemicalCategory::Micro];
    let categories = if categories.is_empty() && ids.is_empty() {
        &default_categories[..]
    } else {
        categories
    };

    Ok(catalog
        .iter()
        .filter(|c| categories.contains(&c.category) || ids.iter().any(|id| *id == c.id))
        .cloned()
        .collect())
}
