mod config;
mod error;
mod report;

use clap::{Args, Parser, Subcommand};
use config::{CliConfig, TargetFile, load_dosages, read_document, select_chemicals};
use error::CliResult;
use nf_chem::{Catalog, ChemicalCategory, ChemicalSource, recipes};
use nf_engine::{
    WaterProfile, acid_base_addition, aggregate_solution, plan_stock, scale_to_volume,
};
use nf_solver::solve_for_target_with_config;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "nutriflow")]
#[command(about = "Nutriflow CLI - Hydroponic nutrient solution calculator", long_about = None)]
struct Cli {
    /// Configuration file (YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

/// A preset recipe or a dosage file.
#[derive(Args)]
struct DosageArgs {
    /// Preset recipe id (see `recipes`)
    #[arg(long, conflicts_with = "file")]
    recipe: Option<String>,
    /// Dosage file (YAML or JSON)
    #[arg(required_unless_present = "recipe")]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog chemicals
    Chemicals {
        /// Only this category (macro, micro, acid, base)
        #[arg(long)]
        category: Option<ChemicalCategory>,
        /// Substring of id, name or formula
        #[arg(long)]
        search: Option<String>,
    },
    /// List preset recipes
    Recipes,
    /// Convert dosages to ion concentrations
    Convert {
        #[command(flatten)]
        input: DosageArgs,
        /// Source-water profile (YAML or JSON) subtracted from the totals
        #[arg(long)]
        water: Option<PathBuf>,
    },
    /// Find dosages that reach target concentrations
    Solve {
        /// Target file (YAML or JSON)
        file: PathBuf,
        /// Candidate category, repeatable
        #[arg(long = "category")]
        categories: Vec<ChemicalCategory>,
        /// Candidate chemical id, repeatable
        #[arg(long = "chemical")]
        chemicals: Vec<String>,
    },
    /// Plan A/B concentrated stock tanks
    Stock {
        #[command(flatten)]
        input: DosageArgs,
        /// Stock strength relative to the working solution
        #[arg(long, default_value_t = 100.0)]
        factor: f64,
        /// Volume of each stock tank in litres
        #[arg(long, default_value_t = 10.0)]
        tank_volume: f64,
    },
    /// Amounts to weigh for a batch
    Scale {
        #[command(flatten)]
        input: DosageArgs,
        /// Batch volume in litres
        #[arg(long)]
        volume: f64,
    },
    /// Ion contribution of an acid or base addition
    AcidBase {
        /// Acid or base chemical id
        chemical: String,
        /// Dose volume in mL
        #[arg(long)]
        volume_ml: f64,
        /// Concentration in % w/v
        #[arg(long)]
        percent: f64,
        /// Reservoir volume in litres
        #[arg(long)]
        reservoir: f64,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };

    match cli.command {
        Commands::Chemicals { category, search } => {
            cmd_chemicals(&config, category, search.as_deref(), cli.json)
        }
        Commands::Recipes => cmd_recipes(cli.json),
        Commands::Convert { input, water } => {
            cmd_convert(&config, &input, water.as_deref(), cli.json)
        }
        Commands::Solve {
            file,
            categories,
            chemicals,
        } => cmd_solve(&config, &file, &categories, chemicals, cli.json),
        Commands::Stock {
            input,
            factor,
            tank_volume,
        } => cmd_stock(&config, &input, factor, tank_volume, cli.json),
        Commands::Scale { input, volume } => cmd_scale(&config, &input, volume, cli.json),
        Commands::AcidBase {
            chemical,
            volume_ml,
            percent,
            reservoir,
        } => cmd_acid_base(&config, &chemical, volume_ml, percent, reservoir, cli.json),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn dosages_of(input: &DosageArgs) -> CliResult<Vec<nf_chem::Dosage>> {
    load_dosages(input.recipe.as_deref(), input.file.as_deref())
}

/// Every dosage must name a catalog chemical.
fn require_known(catalog: &Catalog, dosages: &[nf_chem::Dosage]) -> CliResult<()> {
    for dosage in dosages {
        catalog.require(&dosage.chemical_id)?;
    }
    Ok(())
}

fn cmd_chemicals(
    config: &CliConfig,
    category: Option<ChemicalCategory>,
    search: Option<&str>,
    json: bool,
) -> CliResult<()> {
    let catalog = config.catalog()?;
    let hits: Vec<_> = catalog
        .search(search.unwrap_or(""))
        .into_iter()
        .filter(|c| category.is_none_or(|cat| c.category == cat))
        .collect();

    if json {
        return print_json(&hits);
    }
    if hits.is_empty() {
        println!("No chemicals match");
        return Ok(());
    }
    report::print_chemicals(&hits);
    Ok(())
}

fn cmd_recipes(json: bool) -> CliResult<()> {
    if json {
        return print_json(&recipes());
    }
    for r in recipes() {
        println!("  {} - {} ({} chemicals)", r.id, r.name, r.dosages.len());
        println!("      {}", r.description);
    }
    Ok(())
}

fn cmd_convert(
    config: &CliConfig,
    input: &DosageArgs,
    water: Option<&Path>,
    json: bool,
) -> CliResult<()> {
    let catalog = config.catalog()?;
    let dosages = dosages_of(input)?;
    let water = water.map(read_document::<WaterProfile>).transpose()?;
    let solution = aggregate_solution(&catalog, &dosages)?;
    let analysis = report::Analysis::of(solution, water)?;

    if json {
        return print_json(&analysis);
    }
    report::print_analysis(&analysis);
    Ok(())
}

fn cmd_solve(
    config: &CliConfig,
    file: &Path,
    categories: &[ChemicalCategory],
    mut chemical_ids: Vec<String>,
    json: bool,
) -> CliResult<()> {
    let catalog = config.catalog()?;
    let doc: TargetFile = read_document(file)?;
    chemical_ids.extend(doc.chemicals);

    let candidates = select_chemicals(&catalog, categories, &chemical_ids)?;
    tracing::debug!(
        targets = doc.targets.len(),
        candidates = candidates.len(),
        "solving for targets"
    );
    let solution = solve_for_target_with_config(&doc.targets, &candidates, &config.solver)?;

    if json {
        return print_json(&solution);
    }
    report::print_solution(&doc.targets, &solution);
    Ok(())
}

fn cmd_stock(
    config: &CliConfig,
    input: &DosageArgs,
    factor: f64,
    tank_volume: f64,
    json: bool,
) -> CliResult<()> {
    let catalog = config.catalog()?;
    let dosages = dosages_of(input)?;
    let plan = plan_stock(&catalog, &dosages, factor, tank_volume)?;

    if json {
        return print_json(&plan);
    }
    report::print_stock(&plan);
    Ok(())
}

fn cmd_scale(config: &CliConfig, input: &DosageArgs, volume: f64, json: bool) -> CliResult<()> {
    let catalog = config.catalog()?;
    let dosages = dosages_of(input)?;
    require_known(&catalog, &dosages)?;
    let items = scale_to_volume(&dosages, volume)?;

    if json {
        return print_json(&items);
    }
    println!("Batch of {volume} L:");
    for item in &items {
        println!("  {:<32} {}", item.chemical_id, report::format_mass(item.total_mg));
    }
    Ok(())
}

fn cmd_acid_base(
    config: &CliConfig,
    chemical: &str,
    volume_ml: f64,
    percent: f64,
    reservoir: f64,
    json: bool,
) -> CliResult<()> {
    let catalog = config.catalog()?;
    let addition = acid_base_addition(&catalog, chemical, volume_ml, percent, reservoir)?;

    if json {
        return print_json(&addition);
    }
    println!(
        "{volume_ml} mL of {percent}% {chemical} in {reservoir} L: {:.3} g pure, {:.2} mg/L",
        addition.pure_mass_g, addition.mg_per_l
    );
    for c in &addition.breakdown.ions {
        println!(
            "  {:<10} {:>10.3} ppm {:>10.4} me/L",
            c.ion().display_name(),
            c.ppm(),
            c.me_per_l()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nf_chem::{ChemError, Dosage};

    #[test]
    fn unknown_dosage_id_rejected() {
        let catalog = Catalog::builtin();
        assert!(require_known(&catalog, &[Dosage::new("potassium-nitrate", 200.0)]).is_ok());

        let err = require_known(&catalog, &[Dosage::new("potasium-nitrate", 200.0)]).unwrap_err();
        assert!(matches!(
            err,
            error::CliError::Chem(ChemError::UnknownChemical { ref id }) if id == "potasium-nitrate"
        ));
    }

    #[test]
    fn convert_accepts_water() {
        let cli = Cli::try_parse_from([
            "nutriflow",
            "convert",
            "--recipe",
            "hoagland",
            "--water",
            "tap.yaml",
        ])
        .unwrap();
        match cli.command {
            Commands::Convert { input, water } => {
                assert_eq!(input.recipe.as_deref(), Some("hoagland"));
                assert_eq!(water, Some(PathBuf::from("tap.yaml")));
            }
            _ => panic!("expected convert"),
        }
    }
}
