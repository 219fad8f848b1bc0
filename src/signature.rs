//! Function module signature data structures
//!
//! A [`SignatureRecord`] is the only value passed from the extractor to the
//! renderers. It is built once per extraction and never mutated afterwards:
//! fields are private and exposed through read-only accessors. Names are
//! checked at construction and on deserialization, so every record and
//! parameter in circulation has a non-blank name.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("Function module name must not be empty")]
    EmptyName,
    #[error("Parameter name must not be empty")]
    EmptyParameterName,
}

fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

/// One of the five parameter sections of a function module interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Importing,
    Exporting,
    Changing,
    Tables,
    Exceptions,
}

impl Section {
    /// All sections in declaration/rendering order
    pub const ALL: [Section; 5] = [
        Section::Importing,
        Section::Exporting,
        Section::Changing,
        Section::Tables,
        Section::Exceptions,
    ];

    /// Keyword that opens the section in ABAP source
    pub fn keyword(self) -> &'static str {
        match self {
            Section::Importing => "IMPORTING",
            Section::Exporting => "EXPORTING",
            Section::Changing => "CHANGING",
            Section::Tables => "TABLES",
            Section::Exceptions => "EXCEPTIONS",
        }
    }

    /// Field name used in the structured export
    pub fn field_name(self) -> &'static str {
        match self {
            Section::Importing => "importing",
            Section::Exporting => "exporting",
            Section::Changing => "changing",
            Section::Tables => "tables",
            Section::Exceptions => "exceptions",
        }
    }

    /// Subsection heading in the generated documentation
    pub fn heading(self) -> &'static str {
        match self {
            Section::Importing => "Importing Parameters",
            Section::Exporting => "Exporting Parameters",
            Section::Changing => "Changing Parameters",
            Section::Tables => "Tables Parameters",
            Section::Exceptions => "Exceptions",
        }
    }

    /// Whether parameters of this section become positional arguments of the
    /// generated callable. Exporting and exceptions are output-only.
    pub fn is_stub_argument(self) -> bool {
        matches!(
            self,
            Section::Importing | Section::Changing | Section::Tables
        )
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// A single `{name, type}` declaration inside a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawParameter")]
pub struct Parameter {
    name: String,
    #[serde(rename = "type")]
    param_type: String,
}

#[derive(Deserialize)]
struct RawParameter {
    name: String,
    #[serde(rename = "type")]
    param_type: String,
}

impl TryFrom<RawParameter> for Parameter {
    type Error = SignatureError;

    fn try_from(raw: RawParameter) -> Result<Self, Self::Error> {
        Parameter::new(raw.name, raw.param_type)
    }
}

impl Parameter {
    /// # Errors
    ///
    /// Returns [`SignatureError::EmptyParameterName`] for a blank name.
    pub fn new(
        name: impl Into<String>,
        param_type: impl Into<String>,
    ) -> Result<Self, SignatureError> {
        let name = name.into();
        if is_blank(&name) {
            return Err(SignatureError::EmptyParameterName);
        }

        Ok(Self {
            name,
            param_type: param_type.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form type text, e.g. `TYPE I` or `LIKE SY-DATUM OPTIONAL`
    pub fn param_type(&self) -> &str {
        &self.param_type
    }
}

/// Extracted interface of one function module
///
/// Serializes with the stable field order `fm_name`, `importing`, `exporting`,
/// `changing`, `tables`, `exceptions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSignatureRecord")]
pub struct SignatureRecord {
    #[serde(rename = "fm_name")]
    name: String,
    importing: Vec<Parameter>,
    exporting: Vec<Parameter>,
    changing: Vec<Parameter>,
    tables: Vec<Parameter>,
    exceptions: Vec<Parameter>,
}

/// Unchecked wire form; accepts `name` for `fm_name` and missing sections
#[derive(Deserialize)]
struct RawSignatureRecord {
    #[serde(rename = "fm_name", alias = "name")]
    name: String,
    #[serde(default)]
    importing: Vec<Parameter>,
    #[serde(default)]
    exporting: Vec<Parameter>,
    #[serde(default)]
    changing: Vec<Parameter>,
    #[serde(default)]
    tables: Vec<Parameter>,
    #[serde(default)]
    exceptions: Vec<Parameter>,
}

impl TryFrom<RawSignatureRecord> for SignatureRecord {
    type Error = SignatureError;

    fn try_from(raw: RawSignatureRecord) -> Result<Self, Self::Error> {
        Ok(SignatureRecord::new(raw.name)?
            .with_section(Section::Importing, raw.importing)
            .with_section(Section::Exporting, raw.exporting)
            .with_section(Section::Changing, raw.changing)
            .with_section(Section::Tables, raw.tables)
            .with_section(Section::Exceptions, raw.exceptions))
    }
}

impl SignatureRecord {
    /// Creates a record with the given name and five empty sections
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::EmptyName`] for a blank name.
    pub fn new(name: impl Into<String>) -> Result<Self, SignatureError> {
        let name = name.into();
        if is_blank(&name) {
            return Err(SignatureError::EmptyName);
        }

        Ok(Self {
            name,
            importing: Vec::new(),
            exporting: Vec::new(),
            changing: Vec::new(),
            tables: Vec::new(),
            exceptions: Vec::new(),
        })
    }

    /// Replaces the parameters of one section, consuming the record
    pub fn with_section(mut self, section: Section, params: Vec<Parameter>) -> Self {
        *self.section_mut(section) = params;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn section(&self, section: Section) -> &[Parameter] {
        match section {
            Section::Importing => &self.importing,
            Section::Exporting => &self.exporting,
            Section::Changing => &self.changing,
            Section::Tables => &self.tables,
            Section::Exceptions => &self.exceptions,
        }
    }

    pub fn importing(&self) -> &[Parameter] {
        &self.importing
    }

    pub fn exporting(&self) -> &[Parameter] {
        &self.exporting
    }

    pub fn changing(&self) -> &[Parameter] {
        &self.changing
    }

    pub fn tables(&self) -> &[Parameter] {
        &self.tables
    }

    pub fn exceptions(&self) -> &[Parameter] {
        &self.exceptions
    }

    /// Total number of parameters across all sections
    pub fn parameter_count(&self) -> usize {
        Section::ALL.iter().map(|s| self.section(*s).len()).sum()
    }

    fn section_mut(&mut self, section: Section) -> &mut Vec<Parameter> {
        match section {
            Section::Importing => &mut self.importing,
            Section::Exporting => &mut self.exporting,
            Section::Changing => &mut self.changing,
            Section::Tables => &mut self.tables,
            Section::Exceptions => &mut self.exceptions,
        }
    }
}
