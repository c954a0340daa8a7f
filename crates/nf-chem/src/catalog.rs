//! Read-only chemical catalog keyed by chemical id.

use crate::builtin::BUILTIN_CHEMICALS;
use crate::chemical::{Chemical, ChemicalCategory};
use crate::error::{ChemError, ChemResult};
use std::collections::HashMap;
use std::path::Path;

/// Anything that can resolve a chemical id to its record.
///
/// Implemented by [`Catalog`] and by plain chemical slices, so conversions can
/// run against the full catalog or an ad-hoc list of available chemicals.
pub trait ChemicalSource {
    fn chemical(&self, id: &str) -> Option<&Chemical>;

    /// Like [`ChemicalSource::chemical`] but fails with `UnknownChemical`.
    fn require(&self, id: &str) -> ChemResult<&Chemical> {
        self.chemical(id).ok_or_else(|| ChemError::UnknownChemical { id: id.to_string() })
    }
}

impl ChemicalSource for [Chemical] {
    fn chemical(&self, id: &str) -> Option<&Chemical> {
        self.iter().find(|c| c.id == id)
    }
}

impl ChemicalSource for Vec<Chemical> {
    fn chemical(&self, id: &str) -> Option<&Chemical> {
        self.as_slice().chemical(id)
    }
}

/// Validated, ordered chemical table with O(1) lookup by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    chemicals: Vec<Chemical>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, validating every record and rejecting duplicate ids.
    pub fn new(chemicals: Vec<Chemical>) -> ChemResult<Self> {
        let mut index = HashMap::with_capacity(chemicals.len());
        for (i, chemical) in chemicals.iter().enumerate() {
            chemical.validate()?;
            if index.insert(chemical.id.clone(), i).is_some() {
                return Err(ChemError::DuplicateChemical {
                    id: chemical.id.clone(),
                });
            }
        }
        Ok(Self { chemicals, index })
    }

    /// The built-in hydroponic salt table.
    pub fn builtin() -> Self {
        let chemicals: Vec<Chemical> = BUILTIN_CHEMICALS.iter().map(|b| b.to_chemical()).collect();
        let index = chemicals
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();
        Self { chemicals, index }
    }

    pub fn from_yaml_str(content: &str) -> ChemResult<Self> {
        let chemicals: Vec<Chemical> =
            serde_yaml::from_str(content).map_err(|e| ChemError::Parse {
                format: "YAML",
                message: e.to_string(),
            })?;
        Self::new(chemicals)
    }

    pub fn from_json_str(content: &str) -> ChemResult<Self> {
        let chemicals: Vec<Chemical> =
            serde_json::from_str(content).map_err(|e| ChemError::Parse {
                format: "JSON",
                message: e.to_string(),
            })?;
        Self::new(chemicals)
    }

    /// Load a catalog file; `.json` is parsed as JSON, anything else as YAML.
    pub fn load(path: &Path) -> ChemResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ChemError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let catalog = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };
        tracing::debug!(
            path = %path.display(),
            chemicals = catalog.len(),
            "loaded chemical catalog"
        );
        Ok(catalog)
    }

    pub fn to_yaml_string(&self) -> ChemResult<String> {
        serde_yaml::to_string(&self.chemicals).map_err(|e| ChemError::Parse {
            format: "YAML",
            message: e.to_string(),
        })
    }

    /// Look up a chemical by id.
    pub fn get(&self, id: &str) -> ChemResult<&Chemical> {
        self.require(id)
    }

    pub fn len(&self) -> usize {
        self.chemicals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chemicals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chemical> + '_ {
        self.chemicals.iter()
    }

    pub fn as_slice(&self) -> &[Chemical] {
        &self.chemicals
    }

    pub fn by_category(&self, category: ChemicalCategory) -> Vec<Chemical> {
        self.chemicals
            .iter()
            .filter(|c| c.category == category)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over id, name and formula.
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Chemical> {
        let query = query.trim().to_lowercase();
        self.chemicals
            .iter()
            .filter(|c| {
                query.is_empty()
                    || c.id.to_lowercase().contains(&query)
                    || c.name.to_lowercase().contains(&query)
                    || c.formula.to_lowercase().contains(&query)
            })
            .collect()
    }
}

impl ChemicalSource for Catalog {
    fn chemical(&self, id: &str) -> Option<&Chemical> {
        self.index.get(id).map(|&i| &self.chemicals[i])
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
