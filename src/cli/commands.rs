use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::output::StructuredFormat;

/// Converts ABAP function module sources into specs, docs and Python stubs
#[derive(Parser, Debug)]
#[command(
    name = "fmconv",
    about = "Converts ABAP function module sources into specs, docs and Python stubs",
    version,
    long_about = "fmconv extracts the parameter interface (importing, exporting, changing, \
                  tables, exceptions) of a single ABAP function module and renders it as a \
                  JSON/YAML spec, Markdown documentation, a Python stub and an optional \
                  pytest stub."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Extract the signature and write all artifacts",
        long_about = "Extracts the function module signature and writes fm_spec.json, \
                      fm_doc.md and fm_stub.py (plus test_fm_stub.py with --include-pytest) \
                      into the output directory.\n\n\
                      Examples:\n  \
                      fmconv convert z_add_numbers.abap\n  \
                      fmconv convert z_add_numbers.abap -o out --include-pytest\n  \
                      cat z_add_numbers.abap | fmconv convert - --spec-format yaml\n  \
                      fmconv convert z_add_numbers.abap --dry-run --format json"
    )]
    Convert(ConvertArgs),

    #[command(
        about = "Print the parsed function module signature",
        long_about = "Extracts the function module signature and prints it without writing \
                      any files.\n\n\
                      Examples:\n  \
                      fmconv inspect z_add_numbers.abap\n  \
                      fmconv inspect z_add_numbers.abap --format json"
    )]
    Inspect(InspectArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ConvertArgs {
    #[arg(value_name = "SOURCE", help = "ABAP source file ('-' reads stdin)")]
    pub source: PathBuf,

    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        help = "Directory to write artifacts into (defaults to FMCONV_OUTPUT_DIR or '.')"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(long, help = "Also generate test_fm_stub.py")]
    pub include_pytest: bool,

    #[arg(long, value_enum, help = "Structured export format (defaults to json)")]
    pub spec_format: Option<SpecFormatArg>,

    #[arg(long, help = "List the artifacts that would be written without writing them")]
    pub dry_run: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Format of the artifact listing"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    #[arg(value_name = "SOURCE", help = "ABAP source file ('-' reads stdin)")]
    pub source: PathBuf,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormatArg {
    Json,
    Yaml,
}

impl From<SpecFormatArg> for StructuredFormat {
    fn from(arg: SpecFormatArg) -> Self {
        match arg {
            SpecFormatArg::Json => StructuredFormat::Json,
            SpecFormatArg::Yaml => StructuredFormat::Yaml,
        }
    }
}
