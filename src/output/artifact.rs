//! Artifact bundle: every rendered output paired with its suggested file name
//! and content type

use crate::output::markdown::render_doc;
use crate::output::python::{render_stub, render_test_stub};
use crate::output::structured::{render_structured_as, RenderError, StructuredFormat};
use crate::signature::SignatureRecord;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Spec(StructuredFormat),
    Doc,
    Stub,
    TestStub,
}

impl ArtifactKind {
    pub fn file_name(self) -> &'static str {
        match self {
            ArtifactKind::Spec(format) => format.file_name(),
            ArtifactKind::Doc => "fm_doc.md",
            ArtifactKind::Stub => "fm_stub.py",
            ArtifactKind::TestStub => "test_fm_stub.py",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ArtifactKind::Spec(format) => format.content_type(),
            ArtifactKind::Doc => "text/markdown",
            ArtifactKind::Stub | ArtifactKind::TestStub => "text/plain",
        }
    }
}

/// One rendered output ready to be handed to a consumer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub content: String,
}

impl Artifact {
    pub fn file_name(&self) -> &'static str {
        self.kind.file_name()
    }

    pub fn content_type(&self) -> &'static str {
        self.kind.content_type()
    }
}

/// Options controlling which artifacts are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub include_pytest: bool,
    pub spec_format: StructuredFormat,
}

/// Renders spec, doc and stub, plus the pytest stub when requested
pub fn render_artifacts(
    sig: &SignatureRecord,
    options: &RenderOptions,
) -> Result<Vec<Artifact>, RenderError> {
    let mut artifacts = vec![
        Artifact {
            kind: ArtifactKind::Spec(options.spec_format),
            content: render_structured_as(sig, options.spec_format)?,
        },
        Artifact {
            kind: ArtifactKind::Doc,
            content: render_doc(sig),
        },
        Artifact {
            kind: ArtifactKind::Stub,
            content: render_stub(sig),
        },
    ];

    if options.include_pytest {
        artifacts.push(Artifact {
            kind: ArtifactKind::TestStub,
            content: render_test_stub(sig),
        });
    }

    debug!(
        fm_name = sig.name(),
        artifacts = artifacts.len(),
        "Rendered artifacts"
    );

    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bundle_excludes_pytest() {
        let record = SignatureRecord::new("Z_NOOP").unwrap();
        let artifacts = render_artifacts(&record, &RenderOptions::default()).unwrap();

        let names: Vec<_> = artifacts.iter().map(|a| a.file_name()).collect();
        assert_eq!(names, vec!["fm_spec.json", "fm_doc.md", "fm_stub.py"]);
    }

    #[test]
    fn test_bundle_with_pytest_and_yaml() {
        let record = SignatureRecord::new("Z_NOOP").unwrap();
        let options = RenderOptions {
            include_pytest: true,
            spec_format: StructuredFormat::Yaml,
        };
        let artifacts = render_artifacts(&record, &options).unwrap();

        assert_eq!(artifacts.len(), 4);
        assert_eq!(artifacts[0].file_name(), "fm_spec.yaml");
        assert_eq!(artifacts[3].kind, ArtifactKind::TestStub);
        assert!(artifacts[3].content.contains("def test_z_noop():"));
    }

    #[test]
    fn test_content_types() {
        assert_eq!(
            ArtifactKind::Spec(StructuredFormat::Json).content_type(),
            "application/json"
        );
        assert_eq!(ArtifactKind::Doc.content_type(), "text/markdown");
        assert_eq!(ArtifactKind::Stub.content_type(), "text/plain");
        assert_eq!(ArtifactKind::TestStub.file_name(), "test_fm_stub.py");
    }
}
