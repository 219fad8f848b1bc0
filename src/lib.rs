//! fmconv - ABAP function module signature converter
//!
//! This library extracts the parameter interface of a single ABAP function
//! module from its raw source text and renders it into text artifacts: a
//! structured JSON/YAML spec, Markdown documentation, a Python callable stub
//! and a pytest stub.
//!
//! # Pipeline
//!
//! 1. [`extractors::extract`] scans the source and returns a [`SignatureRecord`],
//!    failing with [`ExtractError::MalformedInput`] when no `FUNCTION <name>`
//!    declaration exists.
//! 2. The renderers in [`output`] each turn the record into one artifact. They
//!    are independent pure functions of the record.
//!
//! # Example
//!
//! ```
//! use fmconv::{extract, render_doc, render_stub};
//!
//! let source = "FUNCTION Z_ADD_NUMBERS\n  IMPORTING\n    IV_A TYPE I\n    IV_B TYPE I\n  \
//!               EXPORTING\n    EV_RESULT TYPE I.\nENDFUNCTION.";
//!
//! let record = extract(source)?;
//! assert_eq!(record.name(), "Z_ADD_NUMBERS");
//! assert!(render_stub(&record).starts_with("def z_add_numbers(iv_a, iv_b):"));
//! assert!(render_doc(&record).contains("- **EV_RESULT** — TYPE I"));
//! # Ok::<(), fmconv::ExtractError>(())
//! ```
//!
//! The core performs no I/O. The `fmconv` binary in [`cli`] reads sources and
//! writes artifacts.

pub mod cli;
pub mod config;
pub mod extractors;
pub mod output;
pub mod signature;
pub mod util;

pub use config::{ConfigError, ConverterConfig};
pub use extractors::{extract, ExtractError, FunctionModuleExtractor};
pub use output::{
    render_artifacts, render_doc, render_structured, render_structured_as, render_stub,
    render_test_stub, Artifact, ArtifactKind, RenderError, RenderOptions, StructuredFormat,
};
pub use signature::{Parameter, Section, SignatureError, SignatureRecord};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
