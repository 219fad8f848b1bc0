//! Function module extractor - pattern-based extraction of an ABAP function
//! module interface from raw source text
//!
//! Each section is located by an independent scan over the whole source: the
//! first occurrence of the section keyword opens the block and the earliest
//! following terminator (any section keyword, a `.` or `ENDFUNCTION`) closes
//! it. Reordered or malformed sources may yield overlapping or empty
//! sections.

use crate::extractors::parameters::parse_parameter_block;
use crate::signature::{Parameter, Section, SignatureRecord};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, trace};

/// Whitespace class that also covers the ASCII separators 0x1C-0x1F, matching
/// [`is_separator`](crate::extractors::parameters::is_separator)
const SPACE_CLASS: &str = r"[\s\x1C-\x1F]";
const END_KEYWORD: &str = "ENDFUNCTION";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Could not find FUNCTION <name> in source.")]
    MalformedInput,
    #[error("Invalid scan pattern: {0}")]
    InvalidPattern(String),
}

impl From<regex::Error> for ExtractError {
    fn from(err: regex::Error) -> Self {
        ExtractError::InvalidPattern(err.to_string())
    }
}

/// Compiled scan patterns, reusable across any number of sources
#[derive(Debug, Clone)]
pub struct FunctionModuleExtractor {
    name_pattern: Regex,
    section_patterns: Vec<(Section, Regex)>,
    terminator_pattern: Regex,
}

impl FunctionModuleExtractor {
    pub fn new() -> Result<Self, ExtractError> {
        let name_pattern = Regex::new(&format!(r"(?i)FUNCTION{}+(\w+)", SPACE_CLASS))?;

        let section_patterns = Section::ALL
            .iter()
            .map(|section| -> Result<(Section, Regex), ExtractError> {
                let pattern = format!(
                    r"(?i){}{}*",
                    regex::escape(section.keyword()),
                    SPACE_CLASS
                );
                Ok((*section, Regex::new(&pattern)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let keywords: Vec<String> = Section::ALL
            .iter()
            .map(|section| regex::escape(section.keyword()))
            .collect();
        let terminator_pattern = Regex::new(&format!(
            r"(?i){}|\.|{}",
            keywords.join("|"),
            END_KEYWORD
        ))?;

        Ok(Self {
            name_pattern,
            section_patterns,
            terminator_pattern,
        })
    }

    /// Process-wide extractor, compiled on first use
    pub fn shared() -> Result<&'static Self, ExtractError> {
        static SHARED: OnceLock<FunctionModuleExtractor> = OnceLock::new();

        if let Some(extractor) = SHARED.get() {
            return Ok(extractor);
        }
        let extractor = Self::new()?;
        Ok(SHARED.get_or_init(|| extractor))
    }

    /// Extracts the signature record from one function module source
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::MalformedInput`] when no `FUNCTION <name>`
    /// declaration exists anywhere in the text. Missing sections and
    /// unparsable declaration lines are not errors.
    pub fn extract(&self, source: &str) -> Result<SignatureRecord, ExtractError> {
        let name = self
            .name_pattern
            .captures(source)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or(ExtractError::MalformedInput)?;

        debug!(fm_name = name, "Found function module declaration");

        let mut record = SignatureRecord::new(name).map_err(|_| ExtractError::MalformedInput)?;
        for (section, keyword) in &self.section_patterns {
            let params = self.extract_section(source, *section, keyword);
            record = record.with_section(*section, params);
        }

        debug!(
            fm_name = name,
            parameters = record.parameter_count(),
            "Extracted function module signature"
        );

        Ok(record)
    }

    fn extract_section(&self, source: &str, section: Section, keyword: &Regex) -> Vec<Parameter> {
        let block = match self.section_block(source, keyword) {
            Some(b) => b,
            None => {
                trace!(section = %section, "Section not present");
                return Vec::new();
            }
        };

        let parsed = parse_parameter_block(block);
        debug!(
            section = %section,
            parameters = parsed.parameters.len(),
            dropped_lines = parsed.dropped_lines,
            "Parsed section block"
        );

        parsed.parameters
    }

    /// Returns the text between the first keyword occurrence (plus trailing
    /// whitespace) and the earliest terminator after it
    fn section_block<'a>(&self, source: &'a str, keyword: &Regex) -> Option<&'a str> {
        let opening = keyword.find(source)?;
        let terminator = self.terminator_pattern.find_at(source, opening.end())?;
        Some(&source[opening.end()..terminator.start()])
    }
}

/// Extracts a signature record using the shared extractor
pub fn extract(source: &str) -> Result<SignatureRecord, ExtractError> {
    FunctionModuleExtractor::shared()?.extract(source)
}
