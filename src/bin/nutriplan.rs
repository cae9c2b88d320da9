//! nutriplan CLI - Command-line interface for the nutriplan engine
//!
//! Commands:
//! - calculate: Compute a plan from form-style fields (units, labels, decimal commas)
//! - compute: Compute plans from PlanInput JSON (batch mode)
//! - tables: Print the diet phase and activity level tables

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use nutriplan::diet::DietTable;
use nutriplan::report::ReportEnvelope;
use nutriplan::{
    compute_plan, render_text, ActivityLevel, InputError, Labeled, Locale, NutritionReport,
    PlanInput, RawForm, ReportEncoder, NUTRIPLAN_VERSION,
};

/// nutriplan - Personalized calorie targets, macro splits and meal distribution
#[derive(Parser)]
#[command(name = "nutriplan")]
#[command(version = NUTRIPLAN_VERSION)]
#[command(about = "Compute calorie targets and macro splits from biometrics", long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, global = true, env = "NUTRIPLAN_FORMAT", default_value = "text")]
    format: OutputFormat,

    /// Language for labels in text output
    #[arg(long, global = true, env = "NUTRIPLAN_LOCALE", default_value = "en")]
    locale: LocaleArg,

    /// Log computation details to stderr (overrides NUTRIPLAN_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a plan from form-style fields
    Calculate {
        /// Body weight, e.g. "80", "80,5" or "80kg"
        #[arg(long)]
        weight: String,

        /// Height, e.g. "180" or "180cm"
        #[arg(long)]
        height: String,

        /// Age in years
        #[arg(long)]
        age: String,

        /// "male" or "female" (or a display label); anything else counts as female
        #[arg(long)]
        gender: String,

        /// Diet phase key or label; unknown values use maintenance
        #[arg(long)]
        diet: String,

        /// Activity level key or label; unknown values use sedentary
        #[arg(long)]
        activity: String,

        /// Number of meals per day
        #[arg(long)]
        meals: String,
    },

    /// Compute plans from PlanInput JSON (one object or an array)
    Compute {
        /// Input file path (use - for stdin)
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,
    },

    /// Print the lookup tables
    Tables,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable sections
    Text,
    /// Compact JSON report envelope
    Json,
    /// Pretty-printed JSON report envelope
    JsonPretty,
}

#[derive(Clone, Copy, ValueEnum)]
enum LocaleArg {
    /// English
    En,
    /// Brazilian Portuguese
    PtBr,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::En => Locale::En,
            LocaleArg::PtBr => Locale::PtBr,
        }
    }
}

/// Batch input: a single object or an array of them
#[derive(Deserialize)]
#[serde(untagged)]
enum PlanBatch {
    One(PlanInput),
    Many(Vec<PlanInput>),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e)).unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("nutriplan=debug")
    } else {
        EnvFilter::try_from_env("NUTRIPLAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), CliFailure> {
    let locale = Locale::from(cli.locale);

    match cli.command {
        Commands::Calculate {
            weight,
            height,
            age,
            gender,
            diet,
            activity,
            meals,
        } => {
            let form = RawForm {
                weight,
                height,
                age,
                gender,
                diet_phase: diet,
                activity_level: activity,
                meal_count: meals,
            };
            cmd_calculate(&form, &cli.format, locale)
        }

        Commands::Compute { input, output } => cmd_compute(&input, &output, &cli.format, locale),

        Commands::Tables => cmd_tables(&cli.format, locale),
    }
}

fn cmd_calculate(form: &RawForm, format: &OutputFormat, locale: Locale) -> Result<(), CliFailure> {
    // Invalid input never reaches the core
    let input = form.validate()?;
    tracing::info!(
        diet_phase = input.diet_phase.as_str(),
        activity_level = input.activity_level.as_str(),
        meal_count = input.meal_count,
        "calculating plan"
    );

    let report = compute_plan(&input);
    print!("{}", format_reports(&[report], format, locale)?);
    Ok(())
}

fn cmd_compute(
    input: &Path,
    output: &Path,
    format: &OutputFormat,
    locale: Locale,
) -> Result<(), CliFailure> {
    let input_data = if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };

    let inputs = match serde_json::from_str::<PlanBatch>(&input_data)? {
        PlanBatch::One(one) => vec![one],
        PlanBatch::Many(many) => many,
    };

    if inputs.is_empty() {
        return Err(CliFailure::NoInput);
    }

    let mut reports = Vec::with_capacity(inputs.len());
    for plan_input in &inputs {
        plan_input.validate()?;
        reports.push(compute_plan(plan_input));
    }
    tracing::info!(count = reports.len(), "computed plans");

    let output_data = format_reports(&reports, format, locale)?;

    if output.to_string_lossy() == "-" {
        print!("{}", output_data);
    } else {
        fs::write(output, output_data)?;
    }

    Ok(())
}

fn cmd_tables(format: &OutputFormat, locale: Locale) -> Result<(), CliFailure> {
    let activity: Vec<serde_json::Value> = ActivityLevel::ALL
        .iter()
        .map(|level| {
            serde_json::json!({
                "activity_level": level,
                "multiplier": level.multiplier(),
            })
        })
        .collect();

    match format {
        OutputFormat::Json | OutputFormat::JsonPretty => {
            let tables = serde_json::json!({
                "diet_phases": DietTable::entries(),
                "activity_levels": activity,
            });
            let rendered = match format {
                OutputFormat::JsonPretty => serde_json::to_string_pretty(&tables)?,
                _ => serde_json::to_string(&tables)?,
            };
            println!("{}", rendered);
        }
        OutputFormat::Text => {
            println!("Diet phases (g/kg body weight)");
            println!("{:<18} {:>6} {:>8} {:>7}", "", "fat", "protein", "kcal");
            for entry in DietTable::entries() {
                println!(
                    "{:<18} {:>6.1} {:>8.1} {:>+7}",
                    entry.phase.label(locale),
                    entry.ratios.fat_g_per_kg,
                    entry.ratios.protein_g_per_kg,
                    entry.calorie_offset_kcal
                );
            }
            println!();
            println!("Activity levels");
            for level in ActivityLevel::ALL {
                println!("{:<18} x{}", level.label(locale), level.multiplier());
            }
        }
    }

    Ok(())
}

fn format_reports(
    reports: &[NutritionReport],
    format: &OutputFormat,
    locale: Locale,
) -> Result<String, CliFailure> {
    match format {
        OutputFormat::Text => {
            let sections: Vec<String> = reports.iter().map(|r| render_text(r, locale)).collect();
            Ok(sections.join("\n"))
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            let encoder = ReportEncoder::new();
            let envelopes: Vec<ReportEnvelope> =
                reports.iter().cloned().map(|r| encoder.encode(r)).collect();

            let pretty = matches!(format, OutputFormat::JsonPretty);
            let rendered = match (envelopes.as_slice(), pretty) {
                ([single], true) => serde_json::to_string_pretty(single)?,
                ([single], false) => serde_json::to_string(single)?,
                (_, true) => serde_json::to_string_pretty(&envelopes)?,
                (_, false) => serde_json::to_string(&envelopes)?,
            };
            Ok(format!("{}\n", rendered))
        }
    }
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum CliFailure {
    Io(io::Error),
    Json(serde_json::Error),
    InvalidInput(InputError),
    NoInput,
}

impl From<io::Error> for CliFailure {
    fn from(e: io::Error) -> Self {
        CliFailure::Io(e)
    }
}

impl From<serde_json::Error> for CliFailure {
    fn from(e: serde_json::Error) -> Self {
        CliFailure::Json(e)
    }
}

impl From<InputError> for CliFailure {
    fn from(e: InputError) -> Self {
        CliFailure::InvalidInput(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<CliFailure> for CliError {
    fn from(e: CliFailure) -> Self {
        match e {
            CliFailure::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            CliFailure::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Input must be a PlanInput object or an array of them".to_string()),
            },
            CliFailure::InvalidInput(e) => CliError {
                code: "INVALID_DATA".to_string(),
                message: "Invalid data! Make sure every field is filled in correctly".to_string(),
                hint: Some(e.to_string()),
            },
            CliFailure::NoInput => CliError {
                code: "NO_INPUT".to_string(),
                message: "No plan inputs found".to_string(),
                hint: Some("Provide at least one PlanInput object".to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALCULATE: [&str; 16] = [
        "nutriplan",
        "calculate",
        "--weight",
        "80",
        "--height",
        "180",
        "--age",
        "25",
        "--gender",
        "male",
        "--diet",
        "maintenance",
        "--activity",
        "moderate",
        "--meals",
        "4",
    ];

    #[test]
    fn test_calculate_accepts_every_field() {
        let cli = Cli::try_parse_from(CALCULATE).unwrap();
        match cli.command {
            Commands::Calculate { diet, activity, meals, .. } => {
                assert_eq!(diet, "maintenance");
                assert_eq!(activity, "moderate");
                assert_eq!(meals, "4");
            }
            _ => panic!("expected calculate"),
        }
    }

    #[test]
    fn test_calculate_requires_diet_activity_and_meals() {
        for flag in ["--diet", "--activity", "--meals"] {
            let position = CALCULATE.iter().position(|arg| *arg == flag).unwrap();
            let args: Vec<&str> = CALCULATE
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != position && *i != position + 1)
                .map(|(_, arg)| *arg)
                .collect();

            let err = Cli::try_parse_from(args).err().unwrap();
            assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        }
    }

    #[test]
    fn test_blank_selection_is_invalid_data() {
        let form = RawForm {
            weight: "80".to_string(),
            height: "180".to_string(),
            age: "25".to_string(),
            gender: "male".to_string(),
            diet_phase: "  ".to_string(),
            activity_level: "moderate".to_string(),
            meal_count: "4".to_string(),
        };

        let err = cmd_calculate(&form, &OutputFormat::Json, Locale::En).unwrap_err();
        assert!(matches!(
            err,
            CliFailure::InvalidInput(InputError::MissingSelection { field: "diet_phase" })
        ));
        assert_eq!(CliError::from(err).code, "INVALID_DATA");
    }
}
