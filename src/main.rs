use clap::{Parser, ValueEnum};
use light_remote::scenario::serialization::{serialize_to_json, serialize_to_ron};
use light_remote::scenario::{StepOutcome, load_scenario};
use light_remote::{Scenario, ScenarioRunner};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DumpFormat {
    Ron,
    Json,
}

/// Drive smart lights through a remote control with undo
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Scenario file (.ron or .json); the built-in demo runs when omitted
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Maximum number of entries kept for global undo
    #[arg(long)]
    history_limit: Option<usize>,

    /// Print the built-in scenario in the given format and exit
    #[arg(long, value_enum)]
    dump: Option<DumpFormat>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Some(format) = args.dump {
        let scenario = Scenario::builtin();
        let text = match format {
            DumpFormat::Ron => serialize_to_ron(&scenario)?,
            DumpFormat::Json => serialize_to_json(&scenario)?,
        };
        println!("{}", text);
        return Ok(());
    }

    let scenario = match &args.scenario {
        Some(path) => load_scenario(path)?,
        None => Scenario::builtin(),
    };

    let mut runner = ScenarioRunner::new();
    if let Some(limit) = args.history_limit {
        runner = runner.with_history_limit(limit);
    }

    let report = runner.run(&scenario)?;

    println!("=== {} ===", report.scenario);
    if let Some(description) = &scenario.description {
        println!("{}", description);
    }
    println!();

    let mut separated = false;
    for record in &report.steps {
        if matches!(record.outcome, StepOutcome::Undo(_)) && !separated {
            println!();
            separated = true;
        }
        for notification in &record.notifications {
            println!("{}", notification);
        }
    }

    println!("\nFinal state:");
    for light in &report.lights {
        println!(
            "  {} ({}): {}, {}",
            light.name,
            light.room,
            if light.is_on { "ON" } else { "OFF" },
            light.color
        );
    }

    Ok(())
}
