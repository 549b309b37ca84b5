//! Heartcheck CLI - relationship risk assessment tool

#![deny(warnings)]

// Global invariants enforced:
// - Deterministic output
// - A failed evaluation never affects anything beyond the current invocation

use anyhow::Context;
use clap::{Parser, Subcommand};
use heartcheck_core::chart::render_svg;
use heartcheck_core::config;
use heartcheck_core::report::{render_parameter_table, render_parameters_json};
use heartcheck_core::{
    assess, render_json, render_text, ParameterSet, ParameterUpdate, SessionStore,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "heartcheck")]
#[command(
    about = "Relationship risk assessment: scores sentiment parameters and renders a radar chart"
)]
#[command(version = env!("HEARTCHECK_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess risk from the given parameters
    Assess {
        /// Attraction level, 0.0 to 1.0
        #[arg(long)]
        attraction: Option<f64>,

        /// Emotional dependence, 0.0 to 1.0
        #[arg(long)]
        emotional_dependence: Option<f64>,

        /// Idealization, 0.0 to 1.0
        #[arg(long)]
        idealization: Option<f64>,

        /// Rationality, 0.0 to 1.0
        #[arg(long)]
        rationality: Option<f64>,

        /// External feedback, 0.0 to 1.0
        #[arg(long)]
        external_feedback: Option<f64>,

        /// Red-flag indicators as comma-separated booleans (e.g. true,false,false,true)
        #[arg(long, value_delimiter = ',')]
        red_flags: Option<Vec<bool>>,

        /// Time in relationship, in months (0 to 24)
        #[arg(long)]
        months: Option<u32>,

        /// Path to a JSON parameter file (flags override file values)
        #[arg(long)]
        params: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Output file path (for SVG format, default: risk-chart.svg)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the default parameter set restored by reset
    Defaults {
        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, PartialEq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Svg,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Assess {
            attraction,
            emotional_dependence,
            idealization,
            rationality,
            external_feedback,
            red_flags,
            months,
            params,
            format,
            output,
        } => {
            // Validate --output flag (only meaningful for SVG output)
            if output.is_some() && format != OutputFormat::Svg {
                anyhow::bail!("--output is only valid with --format svg");
            }

            let mut store = SessionStore::new();

            if let Some(path) = &params {
                let file_update = config::load_parameter_file(path)?;
                eprintln!("Using params file: {}", path.display());
                store
                    .apply(&file_update)
                    .context("invalid parameter file values")?;
            }

            // CLI flags take precedence over file values
            let flag_update = ParameterUpdate {
                attraction,
                emotional_dependence,
                idealization,
                rationality,
                external_feedback,
                red_flags,
                time_in_relationship_months: months,
            };
            let snapshot = store.apply(&flag_update)?.clone();

            let report = assess(&snapshot)?;
            match format {
                OutputFormat::Text => print!("{}", render_text(&report)),
                OutputFormat::Json => println!("{}", render_json(&report)),
                OutputFormat::Svg => {
                    let out_path = output.unwrap_or_else(|| PathBuf::from("risk-chart.svg"));
                    std::fs::write(&out_path, render_svg(&report))
                        .with_context(|| format!("Failed to write chart: {}", out_path.display()))?;
                    eprintln!("Wrote chart: {}", out_path.display());
                }
            }
        }
        Commands::Defaults { format } => {
            let defaults = ParameterSet::default();
            match format {
                OutputFormat::Text => print!("{}", render_parameter_table(&defaults)),
                OutputFormat::Json => println!("{}", render_parameters_json(&defaults)),
                OutputFormat::Svg => {
                    anyhow::bail!("svg format is only valid with the assess command")
                }
            }
        }
    }

    Ok(())
}
