// sovad-cli/src/main.rs
// ============================================================================
// Module: Sovad CLI Entry Point
// Description: Command dispatcher for ruleset validation and classification.
// Purpose: Provide a safe CLI over Sovad ruleset documents.
// Dependencies: clap, serde_json, sovad-core, thiserror
// ============================================================================

//! ## Overview
//! The Sovad CLI validates ruleset documents, reports their canonical
//! digests, and classifies single evidence records. Inputs are untrusted and
//! size-limited; load failures fail closed with explicit errors.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use sovad_core::Decision;
use sovad_core::DecisionEngine;
use sovad_core::EvidenceCounts;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of a ruleset document input.
const MAX_RULES_BYTES: usize = 1024 * 1024;
/// Maximum size of an evidence-counts JSON input.
const MAX_COUNTS_BYTES: usize = 64 * 1024;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "sovad", version, about = "Sovad ruleset validation and classification")]
struct Cli {
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a ruleset document and print its canonical digest.
    Validate(RulesArgs),
    /// Print the canonical digest of a ruleset document.
    Hash(RulesArgs),
    /// Classify one evidence record against a ruleset document.
    Classify(ClassifyArgs),
}

/// Arguments selecting a ruleset document.
#[derive(Args, Debug)]
struct RulesArgs {
    /// Path to the ruleset document (JSON).
    #[arg(long, value_name = "FILE")]
    rules: PathBuf,
}

/// Arguments for the `classify` command.
#[derive(Args, Debug)]
struct ClassifyArgs {
    /// Path to the ruleset document (JSON).
    #[arg(long, value_name = "FILE")]
    rules: PathBuf,
    /// Evidence counts as inline JSON, for example '{"PVS": 1, "PM": 1}'.
    #[arg(long, value_name = "JSON", conflicts_with = "counts_file")]
    counts: Option<String>,
    /// Path to a JSON file holding the evidence counts.
    #[arg(long, value_name = "FILE")]
    counts_file: Option<PathBuf>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper carrying a user-facing message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Validate(command) => command_validate(&command),
        Commands::Hash(command) => command_hash(&command),
        Commands::Classify(command) => command_classify(&command),
    }
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Executes the `validate` command.
fn command_validate(command: &RulesArgs) -> CliResult<ExitCode> {
    let decision = load_decision(&command.rules)?;
    let message = format!(
        "ruleset {} ({} rules) is valid; digest {}",
        decision.ruleset().ruleset_id,
        decision.ruleset().rules.len(),
        decision.digest().value,
    );
    write_stdout_line(&message).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `hash` command.
fn command_hash(command: &RulesArgs) -> CliResult<ExitCode> {
    let decision = load_decision(&command.rules)?;
    write_stdout_line(&decision.digest().value)
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `classify` command.
fn command_classify(command: &ClassifyArgs) -> CliResult<ExitCode> {
    let decision = load_decision(&command.rules)?;
    let counts = resolve_counts(command.counts.as_deref(), command.counts_file.as_deref())?;
    let evaluation = decision.evaluate(&counts);
    let rendered = serde_json::to_string_pretty(&evaluation)
        .map_err(|err| CliError::new(format!("failed to render evaluation: {err}")))?;
    write_stdout_line(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Input Handling
// ============================================================================

/// Loads and validates a ruleset document into a decision handle.
fn load_decision(path: &Path) -> CliResult<Decision> {
    let bytes = read_limited(path, MAX_RULES_BYTES)?;
    DecisionEngine::new()
        .create_decision(&bytes)
        .map_err(|err| CliError::new(format!("failed to load ruleset {}: {err}", path.display())))
}

/// Resolves evidence counts from inline JSON or a file.
fn resolve_counts(inline: Option<&str>, file: Option<&Path>) -> CliResult<EvidenceCounts> {
    match (inline, file) {
        (Some(json), None) => parse_counts(json.as_bytes()),
        (None, Some(path)) => {
            let bytes = read_limited(path, MAX_COUNTS_BYTES)?;
            parse_counts(&bytes)
        }
        (None, None) => Err(CliError::new("provide evidence counts via --counts or --counts-file")),
        // clap rejects the combination before dispatch.
        (Some(_), Some(_)) => Err(CliError::new("--counts conflicts with --counts-file")),
    }
}

/// Parses evidence counts from JSON bytes.
fn parse_counts(bytes: &[u8]) -> CliResult<EvidenceCounts> {
    serde_json::from_slice(bytes)
        .map_err(|err| CliError::new(format!("failed to parse evidence counts: {err}")))
}

/// Reads a file with a hard byte limit.
fn read_limited(path: &Path, max_bytes: usize) -> CliResult<Vec<u8>> {
    let file = File::open(path)
        .map_err(|err| CliError::new(format!("failed to open {}: {err}", path.display())))?;
    let limit = u64::try_from(max_bytes)
        .map_err(|_| CliError::new(format!("invalid size limit for {}", path.display())))?;

    let mut bytes = Vec::new();
    let mut handle = file.take(limit.saturating_add(1));
    handle
        .read_to_end(&mut bytes)
        .map_err(|err| CliError::new(format!("failed to read {}: {err}", path.display())))?;
    if bytes.len() > max_bytes {
        return Err(CliError::new(format!(
            "{} exceeds the {max_bytes} byte input limit",
            path.display()
        )));
    }
    Ok(bytes)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes an error line to stderr, returning a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let mut stderr = std::io::stderr();
    let _ = writeln!(&mut stderr, "error: {message}");
    ExitCode::FAILURE
}

/// Formats an output-stream failure message.
fn output_error(stream: &str, err: &std::io::Error) -> String {
    format!("failed to write to {stream}: {err}")
}
