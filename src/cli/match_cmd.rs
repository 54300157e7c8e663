//! Match command handler.
//!
//! Implements the `match` subcommand: load a profile and a program
//! catalog, apply the query, score every program, and render the grouped
//! report.

use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::catalog::{CatalogQuery, InMemoryCatalog, ProgramCatalog, validate_record};
use crate::matching::{MatchEngine, ScoringConfig};
use crate::pipeline::{OutputTarget, exit_codes, load_profile, load_records, write_output};
use crate::reports::{MatchReport, ProgramMatch, ReportFormat, render_json, render_summary};

/// Match command configuration
pub struct MatchCommandConfig {
    pub profile_path: PathBuf,
    pub programs_path: PathBuf,
    pub query: CatalogQuery,
    pub scoring: ScoringConfig,
    pub output: ReportFormat,
    pub output_file: Option<PathBuf>,
    pub min_score: Option<i32>,
    pub no_color: bool,
    pub strict: bool,
    pub quiet: bool,
}

/// Run the match command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_match(config: MatchCommandConfig) -> Result<i32> {
    let profile = load_profile(&config.profile_path)?;
    let records = load_records(&config.programs_path)?;

    // The engine never validates program data; the CLI is the caller and
    // checks it here, before anything is scored.
    let scoring = config.scoring.clone();
    let mut invalid = 0usize;
    for record in &records {
        if let Err(err) = validate_record(record, &scoring) {
            if config.strict {
                bail!("invalid program record: {err}");
            }
            invalid += 1;
            tracing::warn!("{err}");
        }
    }
    if invalid > 0 {
        tracing::warn!("{invalid} program record(s) failed validation; scoring them anyway");
    }

    let catalog = InMemoryCatalog::new(records);
    let selected = catalog.list(&config.query)?;
    tracing::info!(
        programs = selected.len(),
        limit = config.query.effective_limit(),
        "catalog query resolved"
    );

    let engine = MatchEngine::new(scoring);
    let programs: Vec<_> = selected.into_iter().map(|record| record.program).collect();
    let results = engine.evaluate_all(&profile, &programs);
    let matches: Vec<ProgramMatch> = programs
        .into_iter()
        .zip(results)
        .map(|(program, result)| ProgramMatch { program, result })
        .collect();

    let best_score = matches
        .iter()
        .map(|entry| entry.result.overall_score)
        .max();
    let report = MatchReport::build(matches);

    let output_target = OutputTarget::from_option(config.output_file.clone());
    let format = config.output.resolve(output_target.is_terminal());
    let rendered = match format {
        ReportFormat::Json => render_json(&report)?,
        _ => render_summary(&report, config.no_color),
    };
    write_output(&rendered, &output_target, config.quiet)?;

    if let Some(threshold) = config.min_score {
        let best = best_score.unwrap_or(0);
        if best < threshold {
            tracing::error!(
                "best overall score {best} is below the minimum threshold {threshold}"
            );
            return Ok(exit_codes::BELOW_MIN_SCORE);
        }
    }

    Ok(exit_codes::SUCCESS)
}
