//! nf-chem: chemistry reference data for nutriflow.
//!
//! Provides:
//! - Element and ion definitions (atomic weights, reporting element, valence)
//! - Chemical records (molecular weight + ion stoichiometry)
//! - The chemical catalog (built-in table, YAML/JSON loading, lookup by id)
//! - ppm / mmol/L / me/L conversions
//! - Nutrient sufficiency ranges and preset recipes
//!
//! # Example
//!
//! ```
//! use nf_chem::{Catalog, Ion};
//!
//! let catalog = Catalog::builtin();
//! let kno3 = catalog.get("potassium-nitrate").unwrap();
//! assert_eq!(kno3.coefficient_of(Ion::K), Some(1.0));
//! ```

pub mod builtin;
pub mod catalog;
pub mod chemical;
pub mod element;
pub mod error;
pub mod ion;
pub mod ranges;
pub mod recipes;
pub mod units;

// Re-exports for ergonomics
pub use catalog::{Catalog, ChemicalSource};
pub use chemical::{Chemical, ChemicalCategory, Dosage, IonContribution};
pub use element::Element;
pub use error::{ChemError, ChemResult};
pub use ion::Ion;
pub use ranges::{NutrientRange, RangeStatus, check_range, nutrient_range};
pub use recipes::{Recipe, recipe, recipes};
