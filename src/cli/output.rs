//! Output formatting for the command-line host
//!
//! Formats a parsed [`SignatureRecord`] (the `inspect` command) and the list of
//! artifacts produced by `convert` as JSON, YAML or human-readable text.

use anyhow::{Context, Result};
use std::path::Path;

use crate::output::{render_structured_as, Artifact, StructuredFormat};
use crate::signature::{Section, SignatureRecord};

const RULE: &str = "\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}";

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a parsed signature record
    pub fn format(&self, record: &SignatureRecord) -> Result<String> {
        match self.format {
            OutputFormat::Json => render_structured_as(record, StructuredFormat::Json)
                .context("Failed to serialize signature to JSON"),
            OutputFormat::Yaml => render_structured_as(record, StructuredFormat::Yaml)
                .context("Failed to serialize signature to YAML"),
            OutputFormat::Human => Ok(self.format_human(record)),
        }
    }

    /// Formats the artifacts written (or planned, when `output_dir` is `None`)
    pub fn format_artifacts(
        &self,
        artifacts: &[Artifact],
        output_dir: Option<&Path>,
    ) -> Result<String> {
        let entries: Vec<serde_json::Value> = artifacts
            .iter()
            .map(|artifact| {
                serde_json::json!({
                    "file_name": artifact.file_name(),
                    "content_type": artifact.content_type(),
                    "bytes": artifact.content.len(),
                    "path": output_dir.map(|dir| dir.join(artifact.file_name()).display().to_string()),
                })
            })
            .collect();

        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&entries)
                .context("Failed to serialize artifact list to JSON"),
            OutputFormat::Yaml => serde_yaml::to_string(&entries)
                .context("Failed to serialize artifact list to YAML"),
            OutputFormat::Human => Ok(self.format_artifacts_human(artifacts, output_dir)),
        }
    }

    fn format_human(&self, record: &SignatureRecord) -> String {
        let mut output = String::new();

        output.push_str(&format!("\u{2713} Function Module: {}\n", record.name()));
        output.push_str(RULE);
        output.push_str("\n\n");

        for section in Section::ALL {
            let params = record.section(section);
            let title = section.keyword();

            if params.is_empty() {
                output.push_str(&format!("{}: (none)\n\n", title));
                continue;
            }

            output.push_str(&format!("{} ({}):\n", title, params.len()));
            let width = params.iter().map(|p| p.name().len()).max().unwrap_or(0);
            for (i, param) in params.iter().enumerate() {
                let connector = if i == params.len() - 1 {
                    "\u{2514}"
                } else {
                    "\u{251C}"
                };
                output.push_str(&format!(
                    "{}\u{2500} {:<width$}  {}\n",
                    connector,
                    param.name(),
                    param.param_type(),
                    width = width
                ));
            }
            output.push('\n');
        }

        output.push_str(&format!("Total parameters: {}\n", record.parameter_count()));
        output
    }

    fn format_artifacts_human(&self, artifacts: &[Artifact], output_dir: Option<&Path>) -> String {
        let mut output = String::new();

        match output_dir {
            Some(dir) => output.push_str(&format!(
                "\u{2713} Wrote {} artifacts to {}\n",
                artifacts.len(),
                dir.display()
            )),
            None => output.push_str(&format!(
                "Would write {} artifacts (dry run)\n",
                artifacts.len()
            )),
        }

        for artifact in artifacts {
            output.push_str(&format!(
                "  - {:<16} {:<17} {} bytes\n",
                artifact.file_name(),
                artifact.content_type(),
                artifact.content.len()
            ));
        }

        output
    }
}
