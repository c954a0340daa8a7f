//! Two-tank (A/B) concentrated stock planning and batch weighing.
//!
//! Calcium must not share a concentrate with sulfate or phosphate: at stock
//! strength they precipitate. Tank A holds calcium sources and iron chelates,
//! tank B holds sulfates and phosphates.

use crate::error::{EngineError, EngineResult};
use nf_chem::{Chemical, ChemicalSource, Dosage, Ion};
use nf_core::ensure_positive;
use serde::Serialize;

const TANK_A_IDS: [&str; 8] = [
    "calcium-nitrate",
    "calcium-nitrate-anhydrous",
    "calcium-chloride",
    "calcium-chloride-dihydrate",
    "calcium-hydroxide",
    "fe-edta",
    "fe-dtpa",
    "ferric-tartrate",
];

const TANK_B_IDS: [&str; 11] = [
    "magnesium-sulfate",
    "magnesium-sulfate-anhydrous",
    "potassium-sulfate",
    "manganese-sulfate",
    "manganese-chloride",
    "zinc-sulfate",
    "copper-sulfate",
    "monopotassium-phosphate",
    "monoammonium-phosphate",
    "phosphoric-acid",
    "sulfuric-acid",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tank {
    A,
    B,
}

impl std::fmt::Display for Tank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tank::A => f.write_str("A"),
            Tank::B => f.write_str("B"),
        }
    }
}

/// Which concentrate a chemical belongs in.
///
/// Known ids use the fixed lists; anything else goes by its ions
/// (Ca → A, SO4 or H2PO4 → B, otherwise A).
pub fn assign_tank(chemical: &Chemical) -> Tank {
    let id = chemical.id.as_str();
    if TANK_A_IDS.contains(&id) {
        return Tank::A;
    }
    if TANK_B_IDS.contains(&id) {
        return Tank::B;
    }

    if chemical.contains_ion(Ion::Ca) {
        Tank::A
    } else if chemical.contains_ion(Ion::SO4) || chemical.contains_ion(Ion::H2PO4) {
        Tank::B
    } else {
        Tank::A
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockItem {
    pub chemical_id: String,
    pub name: String,
    pub formula: String,
    /// Working-solution dosage.
    pub mg_per_l: f64,
    pub grams_per_tank: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockPlan {
    pub concentration_factor: f64,
    pub tank_volume_l: f64,
    pub tank_a: Vec<StockItem>,
    pub tank_b: Vec<StockItem>,
}

impl StockPlan {
    pub fn is_empty(&self) -> bool {
        self.tank_a.is_empty() && self.tank_b.is_empty()
    }

    pub fn tank(&self, tank: Tank) -> &[StockItem] {
        match tank {
            Tank::A => &self.tank_a,
            Tank::B => &self.tank_b,
        }
    }
}

fn check_dosage(dosage: &Dosage) -> EngineResult<()> {
    if !dosage.mg_per_l.is_finite() || dosage.mg_per_l < 0.0 {
        return Err(EngineError::InvalidDosage {
            chemical_id: dosage.chemical_id.clone(),
            value: dosage.mg_per_l,
        });
    }
    Ok(())
}

/// Split `dosages` into A/B concentrates `concentration_factor` times stronger
/// than the working solution, each `tank_volume_l` litres.
///
/// grams per tank = mg/L × factor × tank volume / 1000. Zero dosages are
/// skipped; input order is kept within each tank.
pub fn plan_stock<S>(
    source: &S,
    dosages: &[Dosage],
    concentration_factor: f64,
    tank_volume_l: f64,
) -> EngineResult<StockPlan>
where
    S: ChemicalSource + ?Sized,
{
    let concentration_factor = ensure_positive(concentration_factor, "concentration factor")?;
    let tank_volume_l = ensure_positive(tank_volume_l, "tank volume")?;

    let mut plan = StockPlan {
        concentration_factor,
        tank_volume_l,
        tank_a: Vec::new(),
        tank_b: Vec::new(),
    };

    for dosage in dosages {
        check_dosage(dosage)?;
        let chemical = source.require(&dosage.chemical_id)?;
        if dosage.mg_per_l == 0.0 {
            continue;
        }

        let item = StockItem {
            chemical_id: chemical.id.clone(),
            name: chemical.name.clone(),
            formula: chemical.formula.clone(),
            mg_per_l: dosage.mg_per_l,
            grams_per_tank: dosage.mg_per_l * concentration_factor * tank_volume_l / 1000.0,
        };
        match assign_tank(chemical) {
            Tank::A => plan.tank_a.push(item),
            Tank::B => plan.tank_b.push(item),
        }
    }

    Ok(plan)
}

/// Amount to weigh out for one chemical in a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeighItem {
    pub chemical_id: String,
    pub mg_per_l: f64,
    pub total_mg: f64,
}

impl WeighItem {
    pub fn total_g(&self) -> f64 {
        self.total_mg / 1000.0
    }
}

/// Total mass of each dosed chemical for a `volume_l` batch. Zero dosages
/// are left out.
pub fn scale_to_volume(dosages: &[Dosage], volume_l: f64) -> EngineResult<Vec<WeighItem>> {
    let volume_l = ensure_positive(volume_l, "batch volume")?;

    let mut items = Vec::with_capacity(dosages.len());
    for dosage in dosages {
        check_dosage(dosage)?;
        if dosage.mg_per_l > 0.0 {
            items.push(WeighItem {
                chemical_id: dosage.chemical_id.clone(),
                mg_per_l: dosage.mg_per_l,
                total_mg: dosage.mg_per_l * volume_l,
            });
        }
    }
    Ok(items)
}
