use clap::{Parser, Subcommand};
use merge_selector::engine::simulation::{
    SweepGrid, compute_part_log_metrics, read_part_log, run_simulation, run_sweep, write_csv,
};
use merge_selector::logging;
use merge_selector::shared::config::load_settings;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "merge_selector")]
#[command(about = "Simulate and tune size-tiered part merge selection", long_about = None)]
struct Args {
    /// Settings file (TOML). Defaults to MERGE_SELECTOR_CONFIG, then ./config.toml
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the workload once with the [selector] settings
    Simulate {
        #[arg(long)]
        steps: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run the baseline and every [sweep.grid] combination, then rank them
    Sweep {
        #[arg(long)]
        steps: Option<usize>,
        /// Where to write the CSV of all results
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compute production metrics from a `system.part_log` JSON dump
    PartLog { file: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let settings = match load_settings(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            e.log_error();
            return Err(e.into());
        }
    };
    logging::init(&settings.logging)?;

    match args.command {
        Command::Simulate { steps, seed } => {
            let mut simulation = settings.simulation.clone();
            if let Some(steps) = steps {
                simulation.steps = steps;
            }
            if seed.is_some() {
                simulation.seed = seed;
            }

            let metrics = run_simulation(&settings.selector, &simulation)?;
            println!("Write amplification:  {:.5}", metrics.write_amplification);
            println!("Average part count:   {:.5}", metrics.average_part_count);
            println!("Merges:               {}", metrics.merge_count);
            println!("Final part count:     {}", metrics.final_part_count);
        }
        Command::Sweep { steps, output } => {
            let mut simulation = settings.simulation.clone();
            if let Some(steps) = steps {
                simulation.steps = steps;
            }
            let output = output.unwrap_or_else(|| PathBuf::from(&settings.sweep.output));
            let grid = SweepGrid::from_config(&settings.sweep);

            let report = run_sweep(&settings.selector, &grid, &simulation)?;
            println!("Baseline settings:");
            println!(
                "  write amplification {:.5}, average part count {:.5}",
                report.baseline.write_amplification, report.baseline.average_part_count
            );

            let improved = report.improved();
            println!("Improved configurations: {}", improved.len());
            for outcome in improved.iter().take(5) {
                println!(
                    "  write amplification {:.5}, average part count {:.5}: {}",
                    outcome.metrics.write_amplification,
                    outcome.metrics.average_part_count,
                    serde_json::to_string(&outcome.config)?
                );
            }

            write_csv(&output, &report.outcomes)?;
            info!(path = %output.display(), "Sweep results saved");
        }
        Command::PartLog { file } => {
            let metrics = compute_part_log_metrics(read_part_log(&file)?)?;
            println!("Write amplification:  {:.5}", metrics.write_amplification);
            println!("Average part count:   {:.5}", metrics.average_part_count);
            println!("Events:               {}", metrics.event_count);
        }
    }

    Ok(())
}
