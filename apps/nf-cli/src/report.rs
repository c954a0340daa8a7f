//! Plain-text and JSON report shapes.

use nf_chem::{Chemical, Ion, RangeStatus, check_range};
use nf_engine::{
    EngineResult, IonBalance, IonConcentration, NitrogenForm, NutrientRatios, SolutionResult,
    StockPlan, WaterProfile, adjust_for_water, estimate_conductivity, ion_balance,
    nutrient_ratios,
};
use nf_solver::{SolverTarget, TargetSolution};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RangeCheck {
    pub ion: Ion,
    pub ppm: f64,
    pub status: RangeStatus,
}

/// Everything `convert` reports about a solution.
#[derive(Debug, Serialize)]
pub struct Analysis {
    pub solution: SolutionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water: Option<WaterProfile>,
    /// Solution totals less the source water; equal to them without a profile.
    pub totals: Vec<IonConcentration>,
    pub conductivity_ms_per_cm: f64,
    pub balance: Option<IonBalance>,
    pub ratios: NutrientRatios,
    pub ranges: Vec<RangeCheck>,
}

impl Analysis {
    pub fn of(solution: SolutionResult, water: Option<WaterProfile>) -> EngineResult<Self> {
        let totals = match &water {
            Some(profile) => adjust_for_water(&solution.totals, profile)?,
            None => solution.totals.clone(),
        };
        let ranges = totals
            .iter()
            .filter_map(|c| {
                check_range(c.ion(), c.ppm()).map(|status| RangeCheck {
                    ion: c.ion(),
                    ppm: c.ppm(),
                    status,
                })
            })
            .collect();
        Ok(Self {
            conductivity_ms_per_cm: estimate_conductivity(&totals),
            balance: ion_balance(&totals),
            ratios: nutrient_ratios(&totals),
            ranges,
            solution,
            water,
            totals,
        })
    }
}

/// mg below one gram, g below one kilogram, kg above.
pub fn format_mass(mg: f64) -> String {
    if mg < 1000.0 {
        format!("{mg:.1} mg")
    } else if mg < 1_000_000.0 {
        format!("{:.2} g", mg / 1000.0)
    } else {
        format!("{:.3} kg", mg / 1_000_000.0)
    }
}

fn status_label(status: Option<RangeStatus>) -> &'static str {
    match status {
        Some(RangeStatus::Low) => "low",
        Some(RangeStatus::Ok) => "ok",
        Some(RangeStatus::High) => "HIGH",
        None => "",
    }
}

pub fn print_chemicals(chemicals: &[&Chemical]) {
    for c in chemicals {
        let ions: Vec<String> = c
            .ions
            .iter()
            .map(|i| format!("{}×{}", i.coefficient, i.ion))
            .collect();
        println!(
            "  {:<30} {:<6} {:>9.3} g/mol  {:<22} {}",
            c.id,
            c.category.key(),
            c.molecular_weight,
            c.formula,
            ions.join(" ")
        );
    }
}

pub fn print_analysis(analysis: &Analysis) {
    println!("Chemicals:");
    for b in &analysis.solution.breakdowns {
        println!(
            "  {:<30} {:>9.2} mg/L {:>9.4} mmol/L",
            b.chemical_id, b.mg_per_l, b.mmol_per_l
        );
    }

    match &analysis.water {
        Some(water) if !water.name.is_empty() => println!("Totals (less {}):", water.name),
        Some(_) => println!("Totals (less source water):"),
        None => println!("Totals:"),
    }
    println!(
        "  {:<10} {:>10} {:>10} {:>10}",
        "ion", "ppm", "mmol/L", "me/L"
    );
    for c in &analysis.totals {
        if c.mmol_per_l() == 0.0 {
            continue;
        }
        println!(
            "  {:<10} {:>10.3} {:>10.4} {:>10.4}  {}",
            c.ion().display_name(),
            c.ppm(),
            c.mmol_per_l(),
            c.me_per_l(),
            status_label(check_range(c.ion(), c.ppm()))
        );
    }

    println!("EC (estimate): {:.2} mS/cm", analysis.conductivity_ms_per_cm);

    if let Some(balance) = &analysis.balance {
        println!(
            "Ion balance: cations {:.2} me/L, anions {:.2} me/L, deviation {:+.1}% ({:?})",
            balance.cation_me_per_l, balance.anion_me_per_l, balance.deviation_pct, balance.status
        );
    }

    let r = &analysis.ratios;
    if let Some(npk) = r.npk {
        println!("N:P:K = {:.1} : {:.1} : {:.1}", npk.n, npk.p, npk.k);
    }
    if let Some(v) = r.ca_mg {
        println!("Ca:Mg = {v:.1} : 1");
    }
    if let Some(v) = r.k_ca {
        println!("K:Ca = {v:.2} : 1");
    }
    match r.no3_nh4 {
        Some(NitrogenForm::Ratio(v)) => println!("NO3:NH4 = {v:.1} : 1"),
        Some(NitrogenForm::AllNitrate) => println!("NO3:NH4 = all nitrate"),
        None => {}
    }
}

pub fn print_solution(targets: &[SolverTarget], solution: &TargetSolution) {
    if solution.chemicals.is_empty() {
        println!("No chemicals needed");
        return;
    }

    println!("Recommended dosages:");
    for d in &solution.chemicals {
        println!("  {:<30} {:>9.2} mg/L", d.chemical_id, d.mg_per_l);
    }

    println!("Targets:");
    for t in targets.iter().filter(|t| t.ppm > 0.0) {
        let got = solution.achieved_ppm(t.ion);
        println!(
            "  {:<10} target {:>9.3} ppm  achieved {:>9.3} ppm ({:+.1}%)",
            t.ion.display_name(),
            t.ppm,
            got,
            (got - t.ppm) / t.ppm * 100.0
        );
    }
    println!("Residual: {:.3e}", solution.residual);
}

pub fn print_stock(plan: &StockPlan) {
    if plan.is_empty() {
        println!("No chemicals to dissolve");
        return;
    }
    println!(
        "{}x concentrate, {} L per tank",
        plan.concentration_factor, plan.tank_volume_l
    );
    for (label, items) in [("Tank A", &plan.tank_a), ("Tank B", &plan.tank_b)] {
        println!("{label}:");
        if items.is_empty() {
            println!("  (empty)");
        }
        for item in items {
            println!(
                "  {:<30} {:>12}",
                item.chemical_id,
                format_mass(item.grams_per_tank * 1000.0)
            );
        }
    }
}
