use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use thiserror::Error;

use station_scores::input::{InputError, load_directions, load_scores};
use station_scores::logging;
use station_scores::model::sample::{sample_directions, sample_scores};
use station_scores::model::{SchemaMode, ScoreError, ScoringParams, ZeroSpreadPolicy};
use station_scores::pipeline::stage3_report::write_summary;
use station_scores::pipeline::{aggregate, write_reports};
use station_scores::report::ReportError;
use station_scores::report::json::render_summary_json;
use station_scores::report::text::render_ranking_text;

/// Rank teams across stations with different scales and directions.
///
/// With no positional arguments a built-in sample is scored and printed.
#[derive(Debug, Parser)]
#[command(name = "station-scores", version)]
struct Cli {
    /// Scores CSV: a `team` column plus one numeric column per station
    scores: Option<PathBuf>,

    /// Directions CSV with `task` and `higher_is_better` columns
    directions: Option<PathBuf>,

    /// Output CSV: team, total_normalised, then the raw station scores
    output: Option<PathBuf>,

    /// Upper bound of the score range [default: 1.0 for files, 10.0 for the demo]
    #[arg(long, value_name = "POINTS")]
    max_points: Option<f64>,

    /// How tied stations and tied totals are handled
    #[arg(long, value_enum, default_value_t = ZeroSpreadArg::Midpoint)]
    zero_spread: ZeroSpreadArg,

    /// Fail on direction entries that match no station
    #[arg(long)]
    strict_schema: bool,

    /// Also write a JSON run summary to this path
    #[arg(long, value_name = "PATH")]
    summary: Option<PathBuf>,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ZeroSpreadArg {
    Midpoint,
    Reject,
}

impl From<ZeroSpreadArg> for ZeroSpreadPolicy {
    fn from(value: ZeroSpreadArg) -> Self {
        match value {
            ZeroSpreadArg::Midpoint => ZeroSpreadPolicy::Midpoint,
            ZeroSpreadArg::Reject => ZeroSpreadPolicy::Reject,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Invocation {
    Demo,
    Files {
        scores: PathBuf,
        directions: PathBuf,
        output: PathBuf,
    },
}

#[derive(Debug, Error)]
enum AppError {
    #[error("usage: {0}")]
    Usage(String),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl Cli {
    fn invocation(&self) -> Result<Invocation, AppError> {
        match (&self.scores, &self.directions, &self.output) {
            (None, None, None) => Ok(Invocation::Demo),
            (Some(scores), Some(directions), Some(output)) => Ok(Invocation::Files {
                scores: scores.clone(),
                directions: directions.clone(),
                output: output.clone(),
            }),
            _ => Err(AppError::Usage(
                "expected <SCORES> <DIRECTIONS> <OUTPUT>, or no arguments for the demo".to_string(),
            )),
        }
    }

    fn params(&self, base: ScoringParams) -> ScoringParams {
        let mut params = base;
        if let Some(max_points) = self.max_points {
            params.max_points = max_points;
        }
        params.zero_spread = self.zero_spread.into();
        params.schema = if self.strict_schema {
            SchemaMode::Strict
        } else {
            SchemaMode::Lenient
        };
        params
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    match cli.invocation()? {
        Invocation::Demo => run_demo(cli),
        Invocation::Files {
            scores,
            directions,
            output,
        } => run_files(cli, &scores, &directions, &output),
    }
}

fn run_demo(cli: &Cli) -> Result<(), AppError> {
    let params = cli.params(ScoringParams::demo_default());
    tracing::info!("no input files given; scoring the built-in sample");

    let scores = sample_scores()?;
    let directions = sample_directions();
    let results = aggregate(&scores, &directions, &params)?;

    print!("{}", render_ranking_text(&results));
    if let Some(path) = &cli.summary {
        let json = render_summary_json(&results, &params).map_err(ReportError::from)?;
        write_summary(path, &json)?;
    }
    Ok(())
}

fn run_files(
    cli: &Cli,
    scores_path: &Path,
    directions_path: &Path,
    output: &Path,
) -> Result<(), AppError> {
    let params = cli.params(ScoringParams::csv_default());

    let scores = load_scores(scores_path)?;
    let directions = load_directions(directions_path)?;
    tracing::info!(
        "loaded {} teams x {} stations from {}, {} directions from {}",
        scores.n_teams(),
        scores.n_categories(),
        scores_path.display(),
        directions.len(),
        directions_path.display()
    );

    let results = aggregate(&scores, &directions, &params)?;
    write_reports(&results, &params, output, cli.summary.as_deref())?;
    print!("{}", render_ranking_text(&results));
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
