//! Command handlers: read the source, run the pipeline, emit results
//!
//! Handlers return a process exit code. File and stdin I/O happens only here.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::cli::commands::{ConvertArgs, InspectArgs};
use crate::cli::output::OutputFormatter;
use crate::config::ConverterConfig;
use crate::extractors::{ExtractError, FunctionModuleExtractor};
use crate::output::{render_artifacts, Artifact};
use crate::signature::SignatureRecord;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_MALFORMED_INPUT: i32 = 1;
pub const EXIT_FAILURE: i32 = 2;

/// Applies `convert` flags on top of the loaded configuration
pub fn resolve_config(args: &ConvertArgs, base: &ConverterConfig) -> ConverterConfig {
    let mut config = base.clone();
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if args.include_pytest {
        config.include_pytest = true;
    }
    if let Some(format) = args.spec_format {
        config.spec_format = format.into();
    }
    config
}

pub fn handle_convert(args: &ConvertArgs, base: &ConverterConfig, quiet: bool) -> i32 {
    let config = resolve_config(args, base);
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return EXIT_FAILURE;
    }

    match run_convert(args, &config) {
        Ok(summary) => {
            if !quiet {
                println!("{}", summary.trim_end());
            }
            EXIT_SUCCESS
        }
        Err(e) => report_failure(&e),
    }
}

pub fn handle_inspect(args: &InspectArgs) -> i32 {
    match run_inspect(args) {
        Ok(output) => {
            println!("{}", output);
            EXIT_SUCCESS
        }
        Err(e) => report_failure(&e),
    }
}

fn run_convert(args: &ConvertArgs, config: &ConverterConfig) -> Result<String> {
    let record = load_signature(&args.source)?;
    let artifacts = render_artifacts(&record, &config.render_options())
        .context("Failed to render artifacts")?;

    let formatter = OutputFormatter::new(args.format.into());
    if args.dry_run {
        info!(artifacts = artifacts.len(), "Dry run, nothing written");
        return formatter.format_artifacts(&artifacts, None);
    }

    write_artifacts(&config.output_dir, &artifacts)?;
    info!(
        fm_name = record.name(),
        output_dir = %config.output_dir.display(),
        artifacts = artifacts.len(),
        "Artifacts written"
    );

    formatter.format_artifacts(&artifacts, Some(&config.output_dir))
}

fn run_inspect(args: &InspectArgs) -> Result<String> {
    let record = load_signature(&args.source)?;
    OutputFormatter::new(args.format.into()).format(&record)
}

fn load_signature(source: &Path) -> Result<SignatureRecord> {
    let text = read_source(source)?;
    debug!(source = %source.display(), bytes = text.len(), "Read function module source");

    Ok(FunctionModuleExtractor::shared()?.extract(&text)?)
}

/// Reads the source file, or stdin for `-`, decoding UTF-8 lossily
pub fn read_source(source: &Path) -> Result<String> {
    let bytes = if source == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read source from stdin")?;
        buf
    } else {
        fs::read(source).with_context(|| format!("Failed to read {}", source.display()))?
    };

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes every artifact under `dir`, creating the directory if needed
pub fn write_artifacts(dir: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = dir.join(artifact.file_name());
        fs::write(&path, &artifact.content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!(path = %path.display(), content_type = artifact.content_type(), "Wrote artifact");
        written.push(path);
    }

    Ok(written)
}

fn report_failure(err: &anyhow::Error) -> i32 {
    let code = match err.downcast_ref::<ExtractError>() {
        Some(ExtractError::MalformedInput) => EXIT_MALFORMED_INPUT,
        _ => EXIT_FAILURE,
    };

    debug!(exit_code = code, error = ?err, "Command failed");
    eprintln!("Error: {:#}", err);
    code
}
