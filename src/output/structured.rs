//! Structured-data export of a signature record (JSON or YAML)

use crate::signature::SignatureRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const JSON_INDENT: &[u8] = b"    ";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to serialize signature to JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to serialize signature to YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Serialization format of the structured export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StructuredFormat {
    #[default]
    Json,
    Yaml,
}

impl StructuredFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            StructuredFormat::Json => "fm_spec.json",
            StructuredFormat::Yaml => "fm_spec.yaml",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            StructuredFormat::Json => "application/json",
            StructuredFormat::Yaml => "application/yaml",
        }
    }
}

impl FromStr for StructuredFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(StructuredFormat::Json),
            "yaml" | "yml" => Ok(StructuredFormat::Yaml),
            other => Err(format!(
                "Invalid spec format: {}. Valid options: json, yaml",
                other
            )),
        }
    }
}

impl fmt::Display for StructuredFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuredFormat::Json => f.write_str("json"),
            StructuredFormat::Yaml => f.write_str("yaml"),
        }
    }
}

/// Renders the record as 4-space indented JSON
pub fn render_structured(sig: &SignatureRecord) -> Result<String, RenderError> {
    render_structured_as(sig, StructuredFormat::Json)
}

pub fn render_structured_as(
    sig: &SignatureRecord,
    format: StructuredFormat,
) -> Result<String, RenderError> {
    match format {
        StructuredFormat::Json => {
            let mut buf = Vec::new();
            let mut serializer = serde_json::Serializer::with_formatter(
                &mut buf,
                PrettyFormatter::with_indent(JSON_INDENT),
            );
            sig.serialize(&mut serializer)?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
        StructuredFormat::Yaml => Ok(serde_yaml::to_string(sig)?),
    }
}
