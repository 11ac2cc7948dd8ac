use crate::infra::{build_engine, export_catalog, parse_date};
use crate::input::{load_project, load_projects_csv};
use crate::render::{render_batch, render_profile};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use docscope::config::AppConfig;
use docscope::error::AppError;
use docscope::telemetry;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "docscope",
    about = "Score project complexity and recommend the management documents it needs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a single project described in a JSON file
    Analyze(AnalyzeArgs),
    /// Analyze every row of a CSV export and print one line per project
    Batch(BatchArgs),
    /// Export the built-in rubric catalog as JSON
    Rubrics(RubricsArgs),
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Project attributes as JSON
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Rubric catalog override (defaults to APP_RUBRIC_PATH, then the built-in catalog)
    #[arg(long)]
    pub(crate) rubrics: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Date printed in the report header (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with one project per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Rubric catalog override
    #[arg(long)]
    pub(crate) rubrics: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct RubricsArgs {
    /// Write the catalog to a file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "docscope starting");

    match cli.command {
        Command::Analyze(args) => run_analyze(args, &config),
        Command::Batch(args) => run_batch(args, &config),
        Command::Rubrics(args) => export_catalog(args.output.as_deref()),
    }
}

fn run_analyze(args: AnalyzeArgs, config: &AppConfig) -> Result<(), AppError> {
    let AnalyzeArgs {
        input,
        rubrics,
        format,
        as_of,
    } = args;

    let engine = build_engine(rubrics.as_deref(), &config.scoring)?;
    let attributes = load_project(&input)?;
    let profile = engine.analyze(&attributes)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&profile)?),
        OutputFormat::Text => {
            let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
            render_profile(&profile, engine.weights(), as_of);
        }
    }
    Ok(())
}

fn run_batch(args: BatchArgs, config: &AppConfig) -> Result<(), AppError> {
    let engine = build_engine(args.rubrics.as_deref(), &config.scoring)?;
    let projects = load_projects_csv(&args.csv)?;
    info!(projects = projects.len(), "scoring batch");

    let results = engine.analyze_batch(&projects);
    render_batch(&results);
    Ok(())
}
