use efsim::{ScenarioConfig, Scenario, Evaluation};
use efsim::{bench_potential_grid, bench_field_grid};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file inside `scenarios/`
    #[arg(short, default_value = "dipoles.yaml")]
    file_name: String,

    /// Run grid timing benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_potential_grid();
        bench_field_grid();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;
    info!(
        "loaded {}: {} charges, {} dipoles, {}x{} grid",
        args.file_name,
        scenario.sources.charges.len(),
        scenario.sources.dipoles.len(),
        scenario.grid.nx,
        scenario.grid.ny
    );

    let eval = Evaluation::run(&scenario);

    println!("Charges:");
    for c in &scenario.sources.charges {
        println!("  {c}");
    }
    println!("Dipoles:");
    for report in eval.reports(&scenario.sources) {
        println!("  {report}");
    }

    info!(
        "potential in [{:.4e}, {:.4e}], max |E| = {:.4e}",
        eval.potential.min(),
        eval.potential.max(),
        eval.field.max_magnitude()
    );

    Ok(())
}
