//! Declaration line parsing for a single section block

use crate::signature::Parameter;

/// Parameters parsed from one section block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBlock {
    pub parameters: Vec<Parameter>,
    /// Non-blank lines that yielded fewer than two tokens
    pub dropped_lines: usize,
}

/// Unicode whitespace plus the ASCII file/group/record/unit separators
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Splits a section block into one parameter per non-blank line
///
/// Lines are split on `\n` and trimmed; blank lines are skipped. A line with
/// fewer than two whitespace-separated tokens is dropped and only counted.
pub fn parse_parameter_block(block: &str) -> ParsedBlock {
    let mut parsed = ParsedBlock::default();

    for line in block
        .split('\n')
        .map(|l| l.trim_matches(is_separator))
        .filter(|l| !l.is_empty())
    {
        match parse_declaration_line(line) {
            Some(param) => parsed.parameters.push(param),
            None => parsed.dropped_lines += 1,
        }
    }

    parsed
}

/// Parses `NAME TYPE ...` into a [`Parameter`]
///
/// The first token is the name; the remaining tokens are rejoined with single
/// spaces to form the type. Returns `None` for lines with fewer than two tokens.
pub fn parse_declaration_line(line: &str) -> Option<Parameter> {
    let mut tokens = line.split(is_separator).filter(|t| !t.is_empty());
    let name = tokens.next()?;
    let rest: Vec<&str> = tokens.collect();
    if rest.is_empty() {
        return None;
    }

    Parameter::new(name, rest.join(" ")).ok()
}
