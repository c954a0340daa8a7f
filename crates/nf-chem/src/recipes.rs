//! Preset nutrient recipes.
//!
//! Amounts are mg/L of the salt. Fe-EDTA amounts are for the trihydrate form.

use crate::chemical::Dosage;
use crate::error::{ChemError, ChemResult};
use serde::Serialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub dosages: Vec<Dosage>,
}

const PRESETS: [(&str, &str, &str, &[(&str, f64)]); 5] = [
    (
        "hoagland",
        "Hoagland Solution",
        "Classic full-strength Hoagland solution, general purpose reference.",
        &[
            ("calcium-nitrate", 945.0),
            ("potassium-nitrate", 506.0),
            ("monopotassium-phosphate", 136.0),
            ("magnesium-sulfate", 493.0),
            ("fe-edta", 21.1),
            ("boric-acid", 2.86),
            ("manganese-sulfate", 1.54),
            ("zinc-sulfate", 0.22),
            ("copper-sulfate", 0.08),
            ("sodium-molybdate", 0.02),
        ],
    ),
    (
        "lettuce",
        "Lettuce",
        "Optimized for head and leaf lettuce, moderate EC.",
        &[
            ("calcium-nitrate", 750.0),
            ("potassium-nitrate", 350.0),
            ("monopotassium-phosphate", 120.0),
            ("magnesium-sulfate", 400.0),
            ("fe-edta", 17.2),
            ("boric-acid", 1.8),
            ("manganese-sulfate", 1.2),
            ("zinc-sulfate", 0.25),
            ("copper-sulfate", 0.05),
            ("sodium-molybdate", 0.02),
        ],
    ),
    (
        "leafy-greens",
        "Leafy Greens",
        "Balanced formula for spinach, kale, chard and other leafy greens.",
        &[
            ("calcium-nitrate", 810.0),
            ("potassium-nitrate", 400.0),
            ("monopotassium-phosphate", 130.0),
            ("magnesium-sulfate", 450.0),
            ("fe-edta", 18.4),
            ("boric-acid", 2.0),
            ("manganese-sulfate", 1.3),
            ("zinc-sulfate", 0.22),
            ("copper-sulfate", 0.06),
            ("sodium-molybdate", 0.02),
        ],
    ),
    (
        "tomato",
        "Tomato",
        "High-K formula for the tomato fruiting stage, higher EC.",
        &[
            ("calcium-nitrate", 900.0),
            ("potassium-nitrate", 550.0),
            ("monopotassium-phosphate", 150.0),
            ("magnesium-sulfate", 500.0),
            ("potassium-sulfate", 85.0),
            ("fe-edta", 22.9),
            ("boric-acid", 3.0),
            ("manganese-sulfate", 1.7),
            ("zinc-sulfate", 0.30),
            ("copper-sulfate", 0.08),
            ("sodium-molybdate", 0.05),
        ],
    ),
    (
        "strawberry",
        "Strawberry",
        "Moderate-K, higher Ca formula for strawberry production.",
        &[
            ("calcium-nitrate", 850.0),
            ("potassium-nitrate", 450.0),
            ("monopotassium-phosphate", 140.0),
            ("magnesium-sulfate", 430.0),
            ("potassium-sulfate", 50.0),
            ("fe-edta", 20.7),
            ("boric-acid", 2.5),
            ("manganese-sulfate", 1.5),
            ("zinc-sulfate", 0.25),
            ("copper-sulfate", 0.06),
            ("sodium-molybdate", 0.03),
        ],
    ),
];

/// All preset recipes, in presentation order.
pub fn recipes() -> &'static [Recipe] {
    static RECIPES: OnceLock<Vec<Recipe>> = OnceLock::new();
    RECIPES.get_or_init(|| {
        PRESETS
            .iter()
            .map(|&(id, name, description, dosages)| Recipe {
                id,
                name,
                description,
                dosages: dosages
                    .iter()
                    .map(|&(chemical_id, mg_per_l)| Dosage::new(chemical_id, mg_per_l))
                    .collect(),
            })
            .collect()
    })
}

pub fn recipe(id: &str) -> ChemResult<&'static Recipe> {
    recipes()
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| ChemError::UnknownRecipe { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    #[test]
    fn five_presets() {
        assert_eq!(recipes().len(), 5);
        assert_eq!(recipe("hoagland").unwrap().dosages.len(), 10);
        assert!(matches!(
            recipe("cactus"),
            Err(ChemError::UnknownRecipe { .. })
        ));
    }

    #[test]
    fn every_recipe_chemical_is_in_builtin_catalog() {
        let catalog = Catalog::builtin();
        for r in recipes() {
            for d in &r.dosages {
                assert!(catalog.get(&d.chemical_id).is_ok(), "{}: {}", r.id, d.chemical_id);
                assert!(d.mg_per_l > 0.0);
            }
        }
    }
}
