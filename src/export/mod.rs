use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::model::{Competency, IdentityFields, Session};
use crate::render::svg::render_export_page;
use crate::render::{VisualSnapshot, WheelGeometry};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("assessment incomplete; still unassessed: {}", join_keys(.missing))]
    NotFullyAssessed { missing: Vec<Competency> },
    #[error("failed to compress artifact: {0}")]
    Compress(#[source] std::io::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_keys(keys: &[Competency]) -> String {
    keys.iter()
        .map(|c| c.key())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Turns a frozen view of the wheel into a downloadable artifact.
pub trait Exporter {
    fn extension(&self) -> &'static str;

    fn render(
        &self,
        visual: &VisualSnapshot,
        identity: &IdentityFields,
    ) -> Result<Artifact, ExportError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SvgExporter;

impl Exporter for SvgExporter {
    fn extension(&self) -> &'static str {
        "svg"
    }

    fn render(
        &self,
        visual: &VisualSnapshot,
        identity: &IdentityFields,
    ) -> Result<Artifact, ExportError> {
        Ok(Artifact {
            filename: derive_filename(identity, self.extension()),
            media_type: "image/svg+xml",
            bytes: render_export_page(visual, identity).into_bytes(),
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SvgzExporter {
    pub level: Compression,
}

impl Default for SvgzExporter {
    fn default() -> Self {
        Self {
            level: Compression::default(),
        }
    }
}

impl Exporter for SvgzExporter {
    fn extension(&self) -> &'static str {
        "svgz"
    }

    fn render(
        &self,
        visual: &VisualSnapshot,
        identity: &IdentityFields,
    ) -> Result<Artifact, ExportError> {
        let page = render_export_page(visual, identity);
        let mut encoder = GzEncoder::new(Vec::new(), self.level);
        encoder
            .write_all(page.as_bytes())
            .map_err(ExportError::Compress)?;
        let bytes = encoder.finish().map_err(ExportError::Compress)?;
        Ok(Artifact {
            filename: derive_filename(identity, self.extension()),
            media_type: "image/svg+xml",
            bytes,
        })
    }
}

fn sanitize_component(value: &str, fallback: &str) -> String {
    let source = if value.is_empty() { fallback } else { value };
    source
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

pub fn derive_filename(identity: &IdentityFields, extension: &str) -> String {
    format!(
        "{}_{}_Assessment.{}",
        sanitize_component(&identity.student_name, "Student"),
        sanitize_component(&identity.project_name, "Project"),
        extension
    )
}

/// Refuses partial assessments, then hands a hover-free snapshot to the
/// exporter. The session itself is only read.
pub fn export_session(
    session: &Session,
    geometry: &WheelGeometry,
    exporter: &dyn Exporter,
) -> Result<Artifact, ExportError> {
    if !session.is_fully_assessed() {
        return Err(ExportError::NotFullyAssessed {
            missing: session.state().unassessed(),
        });
    }
    let snapshot = VisualSnapshot::capture(session, geometry);
    exporter.render(&snapshot, session.identity())
}

#[cfg(test)]
#[path = "../../tests/src_inline/export/tests.rs"]
mod tests;
