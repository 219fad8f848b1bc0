//! Python callable and pytest skeletons generated from a signature

use crate::signature::{Section, SignatureRecord};

/// Module name the test skeleton imports the callable from
pub const STUB_MODULE: &str = "fm_stub";

/// Lower-cased function module name used as the Python identifier
pub fn callable_name(sig: &SignatureRecord) -> String {
    sig.name().to_lowercase()
}

/// Lower-cased positional arguments: importing, changing, then tables
pub fn stub_arguments(sig: &SignatureRecord) -> Vec<String> {
    Section::ALL
        .iter()
        .filter(|section| section.is_stub_argument())
        .flat_map(|section| sig.section(*section))
        .map(|param| param.name().to_lowercase())
        .collect()
}

pub fn render_stub(sig: &SignatureRecord) -> String {
    let stub = [
        format!(
            "def {}({}):",
            callable_name(sig),
            stub_arguments(sig).join(", ")
        ),
        format!("    \"\"\"Python stub for ABAP FM {}\"\"\"", sig.name()),
        "    # TODO: Implement logic".to_string(),
        "    return None".to_string(),
    ];

    stub.join("\n")
}

/// Renders a pytest module calling the stub without arguments
///
/// The stub's parameters are ignored; the generated test only asserts the
/// placeholder `None` result.
pub fn render_test_stub(sig: &SignatureRecord) -> String {
    let name = callable_name(sig);
    format!(
        "import pytest\n\n\
         from {module} import {name}\n\n\
         def test_{name}():\n    \
         # TODO: Adjust parameters\n    \
         result = {name}()\n    \
         assert result is None\n",
        module = STUB_MODULE,
        name = name,
    )
}
