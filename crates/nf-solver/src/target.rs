//! Target ion concentrations → recommended chemical dosages.

use crate::error::{SolverError, SolverResult};
use crate::nnls::{NnlsConfig, nnls};
use nalgebra::{DMatrix, DVector};
use nf_chem::{ChemError, Chemical, Dosage, Ion};
use nf_core::round_to;
use nf_engine::{IonConcentration, aggregate_solution, zero_totals};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Desired concentration of one ion [ppm as element].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverTarget {
    pub ion: Ion,
    pub ppm: f64,
}

impl SolverTarget {
    pub fn new(ion: Ion, ppm: f64) -> Self {
        Self { ion, ppm }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetSolverConfig {
    pub nnls: NnlsConfig,
    /// Lower bound on the ppm used to normalise a target row.
    pub weight_floor_ppm: f64,
    /// Solved dosages at or below this are dropped from the report.
    pub materiality_mg_per_l: f64,
    /// Decimal places of the reported dosages.
    pub report_decimals: u32,
}

impl Default for TargetSolverConfig {
    fn default() -> Self {
        Self {
            nnls: NnlsConfig::default(),
            weight_floor_ppm: 0.001,
            materiality_mg_per_l: 0.001,
            report_decimals: 2,
        }
    }
}

/// Recommended dosages and what they actually produce.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetSolution {
    /// Rounded dosages, in the order of the available chemicals.
    pub chemicals: Vec<Dosage>,
    /// Totals for every tracked ion, recomputed from the rounded dosages.
    pub achieved: Vec<IonConcentration>,
    /// Σ ((achieved − target) / max(target, floor))² over active targets.
    pub residual: f64,
}

impl TargetSolution {
    fn empty() -> Self {
        Self {
            chemicals: Vec::new(),
            achieved: zero_totals(),
            residual: 0.0,
        }
    }

    pub fn achieved_ppm(&self, ion: Ion) -> f64 {
        self.achieved
            .iter()
            .find(|c| c.ion() == ion)
            .map_or(0.0, |c| c.ppm())
    }
}

/// [`solve_for_target_with_config`] with default settings.
pub fn solve_for_target(
    targets: &[SolverTarget],
    chemicals: &[Chemical],
) -> SolverResult<TargetSolution> {
    solve_for_target_with_config(targets, chemicals, &TargetSolverConfig::default())
}

/// Find non-negative dosages of `chemicals` that best reach `targets`.
///
/// Targets with ppm ≤ 0 are ignored; a non-finite ppm is an error. With no
/// active target or no chemical the result is empty with all-zero achieved
/// totals. Each row is weighted by 1 / max(target, floor) so trace elements
/// count as much as macros. Rounding happens after the solve, and `achieved`
/// reflects the rounded dosages.
pub fn solve_for_target_with_config(
    targets: &[SolverTarget],
    chemicals: &[Chemical],
    config: &TargetSolverConfig,
) -> SolverResult<TargetSolution> {
    if let Some(bad) = targets.iter().find(|t| !t.ppm.is_finite()) {
        return Err(SolverError::InvalidTarget {
            ion: bad.ion,
            ppm: bad.ppm,
        });
    }
    // Dosages are resolved by id when re-aggregating, so ids must be unique.
    let mut seen = HashSet::with_capacity(chemicals.len());
    for chemical in chemicals {
        chemical.validate()?;
        if !seen.insert(chemical.id.as_str()) {
            return Err(ChemError::DuplicateChemical {
                id: chemical.id.clone(),
            }
            .into());
        }
    }

    let active: Vec<&SolverTarget> = targets.iter().filter(|t| t.ppm > 0.0).collect();
    if active.is_empty() || chemicals.is_empty() {
        debug!(
            targets = targets.len(),
            chemicals = chemicals.len(),
            "nothing to solve"
        );
        return Ok(TargetSolution::empty());
    }

    let floor = config.weight_floor_ppm;
    let weights: Vec<f64> = active.iter().map(|t| 1.0 / t.ppm.max(floor)).collect();

    // Row i: ppm of target ion i per 1 mg/L of chemical j, weighted.
    let a = DMatrix::from_fn(active.len(), chemicals.len(), |i, j| {
        chemicals[j].ppm_per_mg_per_l(active[i].ion) * weights[i]
    });
    let b = DVector::from_fn(active.len(), |i, _| active[i].ppm * weights[i]);

    debug!(
        rows = a.nrows(),
        cols = a.ncols(),
        ignored_targets = targets.len() - active.len(),
        "solving weighted NNLS"
    );

    let solved = nnls(&a, &b, &config.nnls);
    debug!(
        termination = ?solved.termination,
        outer_iterations = solved.outer_iterations,
        "NNLS finished"
    );

    let dosages: Vec<Dosage> = chemicals
        .iter()
        .zip(solved.x.iter())
        .filter(|&(_, &mg)| mg > config.materiality_mg_per_l)
        .map(|(chemical, &mg)| Dosage::new(chemical.id.clone(), round_to(mg, config.report_decimals)))
        .collect();

    let achieved = aggregate_solution(chemicals, &dosages)?.totals;

    let residual = active
        .iter()
        .map(|t| {
            let got = achieved
                .iter()
                .find(|c| c.ion() == t.ion)
                .map_or(0.0, |c| c.ppm());
            let rel = (got - t.ppm) / t.ppm.max(floor);
            rel * rel
        })
        .sum();

    Ok(TargetSolution {
        chemicals: dosages,
        achieved,
        residual,
    })
}
