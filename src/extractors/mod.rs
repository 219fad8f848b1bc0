// Pattern-based extraction of function module signatures
//
// Extractors scan raw ABAP source text for the function module name and its
// parameter sections without parsing statement syntax.

pub mod function_module;
pub mod parameters;

pub use function_module::{extract, ExtractError, FunctionModuleExtractor};
pub use parameters::{parse_declaration_line, parse_parameter_block, ParsedBlock};
