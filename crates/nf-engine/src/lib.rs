//! Conversion engine: chemical mass dosages → per-ion concentrations.
//!
//! Flow for one chemical:
//! mg/L → mmol/L (÷ MW) → per-ion mmol/L (× coefficient)
//!      → ppm (× reporting-element atomic weight) and me/L (× valence)
//!
//! On top of the conversion this crate provides the analyses that read a
//! solution's totals: conductivity estimate, ion balance, nutrient ratios,
//! stock-tank planning, acid/base additions and source-water correction.

pub mod adjustment;
pub mod balance;
pub mod concentration;
pub mod conductivity;
pub mod engine;
pub mod error;
pub mod ratios;
pub mod stock;
pub mod water;

pub use adjustment::{AcidBaseAddition, acid_base_addition};
pub use balance::{BalanceStatus, IonBalance, ion_balance};
pub use concentration::{ChemicalBreakdown, IonConcentration, SolutionResult, zero_totals};
pub use conductivity::{ConductivityTable, estimate_conductivity, estimate_conductivity_with};
pub use engine::{aggregate_solution, breakdown, convert_chemical};
pub use error::{EngineError, EngineResult};
pub use ratios::{NitrogenForm, Npk, NutrientRatios, nutrient_ratios};
pub use stock::{StockItem, StockPlan, Tank, WeighItem, assign_tank, plan_stock, scale_to_volume};
pub use water::{WaterProfile, adjust_for_water};
