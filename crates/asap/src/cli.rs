//! Batch Command Surface
//!
//! | Command | Use case |
//! |---------|----------|
//! | `validate <oscal-file-path>` | [`OscalService::validate_file_with`] |
//! | `generate-schematron-summaries` | [`SchematronSummary::generate_all_summaries`] |
//! | `create-assertion-view` | [`AssertionViewGenerator::generate_all`] |
//! | `create-xspec-summaries <document-type>` | [`XSpecScenarioSummaryGenerator::generate`] |
//!
//! ## Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | success, or the document passed |
//! | 1 | the document failed |
//! | 2 | the document was malformed |
//! | 3 | any reported error |
//!
//! [`OscalService::validate_file_with`]: asap_application::OscalService::validate_file_with
//! [`SchematronSummary::generate_all_summaries`]: asap_application::SchematronSummary::generate_all_summaries
//! [`AssertionViewGenerator::generate_all`]: asap_application::AssertionViewGenerator::generate_all
//! [`XSpecScenarioSummaryGenerator::generate`]: asap_application::XSpecScenarioSummaryGenerator::generate

use std::io::Write;
use std::path::PathBuf;

use asap_domain::error::Result;
use asap_domain::value_objects::{
    DocumentType, RulesetKey, ValidationOutcome, ValidationResult,
};
use asap_infrastructure::config::ConfigLoader;
use asap_infrastructure::di::{AppContext, init_app};
use asap_infrastructure::error_ext::ErrorContext;
use asap_infrastructure::logging::init_logging;
use clap::{Parser, Subcommand};

/// Document passed, or a command succeeded
pub const EXIT_PASS: u8 = 0;
/// Document failed a blocking rule
pub const EXIT_FAIL: u8 = 1;
/// Document could not be checked
pub const EXIT_MALFORMED: u8 = 2;
/// Any reported error
pub const EXIT_ERROR: u8 = 3;

/// Command line interface for ASAP
#[derive(Parser, Debug)]
#[command(name = "asap")]
#[command(about = "OSCAL document validation and rule documentation")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Batch commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// validate OSCAL document (SSP, SAP, SAR, or POA&M)
    Validate {
        /// Document location (path or http(s) URL)
        oscal_file_path: String,
        /// Ruleset to validate against (rev4, rev5)
        #[arg(long)]
        ruleset: Option<RulesetKey>,
        /// Document type, when it cannot be inferred from the root
        #[arg(long = "type")]
        document_type: Option<DocumentType>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// parse all Schematron XML and outputs JSON summaries
    GenerateSchematronSummaries,
    /// write UI-optimized JSON of assertion views to target location
    CreateAssertionView,
    /// write UI-optimized JSON xspec scenario summaries, useful for usage examples
    CreateXspecSummaries {
        /// Document type tag (poam, sap, sar, ssp)
        document_type: String,
    },
}

/// Load configuration, initialize logging and run the command
pub async fn run(cli: Cli) -> anyhow::Result<u8> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;
    init_logging(&config.logging)?;
    let context = init_app(config)?;

    let mut stdout = std::io::stdout().lock();
    Ok(execute(&context, cli.command, &mut stdout).await?)
}

/// Run one command against a context, writing results to `out`
pub async fn execute<W: Write>(context: &AppContext, command: Command, out: &mut W) -> Result<u8> {
    match command {
        Command::Validate {
            oscal_file_path,
            ruleset,
            document_type,
            json,
        } => {
            let result = context
                .oscal_service()
                .validate_file_with(&oscal_file_path, document_type, ruleset)
                .await?;
            tracing::info!(
                location = %oscal_file_path,
                outcome = %result.outcome,
                failures = result.failure_count(),
                "validation finished"
            );
            if json {
                let rendered =
                    serde_json::to_string_pretty(&result).context("Failed to render result")?;
                writeln!(out, "{rendered}").io_context("Failed to write result")?;
            } else {
                write_result(out, &oscal_file_path, &result).io_context("Failed to write result")?;
            }
            Ok(exit_code(result.outcome))
        }
        Command::GenerateSchematronSummaries => {
            let catalogs = context.schematron_summary().generate_all_summaries().await?;
            let layout = context.config.summaries.layout();
            for (document_type, catalog) in catalogs.iter() {
                writeln!(
                    out,
                    "{document_type}: {} rules -> {}",
                    catalog.len(),
                    layout.rule_catalog_output(document_type)
                )
                .io_context("Failed to write summary")?;
            }
            Ok(EXIT_PASS)
        }
        Command::CreateAssertionView => {
            let views = context.assertion_views().generate_all().await?;
            let layout = context.config.summaries.layout();
            for (document_type, views) in views.iter() {
                writeln!(
                    out,
                    "{document_type}: {} views -> {}",
                    views.len(),
                    layout.assertion_view_output(document_type)
                )
                .io_context("Failed to write summary")?;
            }
            Ok(EXIT_PASS)
        }
        Command::CreateXspecSummaries { document_type } => {
            let document_type: DocumentType = document_type.parse()?;
            let scenarios = context.xspec_summaries().generate(document_type).await?;
            writeln!(
                out,
                "{document_type}: {} scenarios -> {}",
                scenarios.len(),
                context
                    .config
                    .summaries
                    .layout()
                    .scenario_summary_output(document_type)
            )
            .io_context("Failed to write summary")?;
            Ok(EXIT_PASS)
        }
    }
}

/// Exit code for a validation outcome
pub fn exit_code(outcome: ValidationOutcome) -> u8 {
    match outcome {
        ValidationOutcome::Pass => EXIT_PASS,
        ValidationOutcome::Fail => EXIT_FAIL,
        ValidationOutcome::Malformed => EXIT_MALFORMED,
    }
}

fn write_result<W: Write>(out: &mut W, location: &str, result: &ValidationResult) -> std::io::Result<()> {
    let document_type = result
        .document_type
        .map_or_else(|| "unknown".to_string(), |t| t.to_string());
    writeln!(
        out,
        "{location}: {} ({document_type}, {})",
        result.outcome, result.ruleset
    )?;
    if let Some(diagnostic) = &result.diagnostic {
        writeln!(out, "  {diagnostic}")?;
    }
    for assertion in &result.assertions {
        let status = if assertion.passed { "pass" } else { "fail" };
        write!(out, "  [{status}] [{}] {}", assertion.severity(), assertion.id)?;
        if !assertion.location.is_empty() {
            write!(out, " at {}", assertion.location)?;
        }
        writeln!(out, ": {}", assertion.message)?;
    }
    Ok(())
}
