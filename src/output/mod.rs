//! Renderers turning a [`SignatureRecord`](crate::signature::SignatureRecord)
//! into text artifacts
//!
//! Every renderer is a pure function of the record: calling it twice on the
//! same record yields byte-identical output. No renderer depends on another.

pub mod artifact;
pub mod markdown;
pub mod python;
pub mod structured;

pub use artifact::{render_artifacts, Artifact, ArtifactKind, RenderOptions};
pub use markdown::render_doc;
pub use python::{render_stub, render_test_stub};
pub use structured::{render_structured, render_structured_as, RenderError, StructuredFormat};
