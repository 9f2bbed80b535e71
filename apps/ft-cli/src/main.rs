use clap::{Parser, Subcommand};
use ft_batch::{Batch, BatchResult, ErrorPolicy, load_batch, run_batch};
use ft_training::{WorkoutKind, WorkoutSummary, read_package};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ft-cli")]
#[command(about = "FitTrack CLI - workout distance, speed and calorie calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a batch of sensor packages
    Run {
        /// Batch file (YAML, or JSON with a .json extension). Defaults to the built-in sample.
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Skip packages that fail instead of aborting the run
        #[arg(long)]
        skip_invalid: bool,
        /// Print summaries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate a single package
    Calc {
        /// Workout-type code (SWM, RUN, WLK)
        code: String,
        /// Positional values, see `types`
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// List supported workout types and their inputs
    Types,
}

fn main() -> BatchResult<()> {
    // Logs go to stderr; stdout carries only summaries
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            input,
            skip_invalid,
            json,
        } => cmd_run(input.as_deref(), skip_invalid, json),
        Commands::Calc { code, values, json } => cmd_calc(&code, &values, json),
        Commands::Types => {
            cmd_types();
            Ok(())
        }
    }
}

fn cmd_run(input: Option<&Path>, skip_invalid: bool, json: bool) -> BatchResult<()> {
    let batch = match input {
        Some(path) => load_batch(path)?,
        None => Batch::sample(),
    };
    let policy = if skip_invalid {
        ErrorPolicy::Skip
    } else {
        ErrorPolicy::Abort
    };

    let report = run_batch(&batch, policy)?;
    print_summaries(&report.summaries, json)?;

    for skipped in &report.skipped {
        eprintln!(
            "✗ Package {} ({}) skipped: {}",
            skipped.index, skipped.workout_type, skipped.error
        );
    }
    Ok(())
}

fn cmd_calc(code: &str, values: &[f64], json: bool) -> BatchResult<()> {
    let summary = read_package(code, values)?.show_training_info()?;
    print_summaries(std::slice::from_ref(&summary), json)
}

fn cmd_types() {
    println!("Workout types:");
    for kind in WorkoutKind::ALL {
        println!(
            "  {} - {} ({})",
            kind.code(),
            kind.display_name(),
            kind.input_names().join(", ")
        );
    }
}

fn print_summaries(summaries: &[WorkoutSummary], json: bool) -> BatchResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summaries)?);
    } else {
        for summary in summaries {
            println!("{summary}");
        }
    }
    Ok(())
}
