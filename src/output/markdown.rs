use crate::signature::{Section, SignatureRecord};

const EMPTY_SECTION: &str = "_None_";

/// Renders the signature as a Markdown reference page
///
/// One `##` subsection per section in fixed order; empty sections render
/// `_None_` instead of a list.
pub fn render_doc(sig: &SignatureRecord) -> String {
    let mut lines = Vec::new();
    lines.push(format!("# Function Module: {}\n", sig.name()));

    for section in Section::ALL {
        lines.push(format!("## {}", section.heading()));

        let params = sig.section(section);
        if params.is_empty() {
            lines.push(format!("{}\n", EMPTY_SECTION));
            continue;
        }

        for param in params {
            lines.push(format!("- **{}** — {}", param.name(), param.param_type()));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
