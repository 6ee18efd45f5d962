pub mod json;
pub mod text;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::export::{ExportError, Exporter, export_session};
use crate::model::Session;
use crate::render::WheelGeometry;
use crate::rubric::Rubric;

use json::{build_summary, render_summary_json};
use text::render_status_text;

pub const SUMMARY_FILE: &str = "summary.json";
pub const STATUS_FILE: &str = "report.txt";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrittenReports {
    pub summary: PathBuf,
    pub status: PathBuf,
    pub wheel: Option<PathBuf>,
}

/// File written under a `.partial` name and moved into place on `commit`.
/// Dropping it uncommitted removes the partial file, so a failed run never
/// leaves a truncated artifact behind.
struct PendingFile {
    partial: PathBuf,
    dest: PathBuf,
    committed: bool,
}

impl PendingFile {
    /// Fails up front when the destination cannot be replaced by a file, so
    /// the rename in `commit` only races with outside changes.
    fn write(dest: PathBuf, bytes: &[u8]) -> io::Result<Self> {
        if dest.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("{} is a directory", dest.display()),
            ));
        }
        let mut name = dest.file_name().unwrap_or_default().to_os_string();
        name.push(".partial");
        let pending = Self {
            partial: dest.with_file_name(name),
            dest,
            committed: false,
        };
        fs::write(&pending.partial, bytes)?;
        Ok(pending)
    }

    fn commit(mut self) -> io::Result<PathBuf> {
        fs::rename(&self.partial, &self.dest)?;
        self.committed = true;
        Ok(self.dest.clone())
    }
}

impl Drop for PendingFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.partial);
        }
    }
}

/// Writes the JSON summary, the status report and the wheel artifact.
///
/// All files are staged before any is moved into place. An incomplete
/// assessment fails before anything is written unless `allow_incomplete` is
/// set, in which case the wheel artifact is skipped.
pub fn write_reports(
    session: &Session,
    rubric: &Rubric,
    geometry: &WheelGeometry,
    exporter: &dyn Exporter,
    out_dir: &Path,
    allow_incomplete: bool,
) -> Result<WrittenReports, ExportError> {
    let artifact = match export_session(session, geometry, exporter) {
        Ok(artifact) => Some(artifact),
        Err(ExportError::NotFullyAssessed { missing }) if allow_incomplete => {
            tracing::warn!(
                unassessed = missing.len(),
                "assessment incomplete; skipping wheel artifact"
            );
            None
        }
        Err(err) => return Err(err),
    };

    fs::create_dir_all(out_dir)?;

    let summary = build_summary(session, rubric);
    let json = render_summary_json(&summary)?;
    let status = render_status_text(&summary);

    // Stage every file before committing any, so a failed write leaves the
    // previous outputs in place.
    let summary_file = PendingFile::write(out_dir.join(SUMMARY_FILE), json.as_bytes())?;
    let status_file = PendingFile::write(out_dir.join(STATUS_FILE), status.as_bytes())?;
    let wheel_file = artifact
        .map(|artifact| PendingFile::write(out_dir.join(&artifact.filename), &artifact.bytes))
        .transpose()?;

    let summary_path = summary_file.commit()?;
    let status_path = status_file.commit()?;
    let wheel_path = wheel_file.map(PendingFile::commit).transpose()?;

    for path in [Some(&summary_path), Some(&status_path), wheel_path.as_ref()]
        .into_iter()
        .flatten()
    {
        tracing::info!(path = %path.display(), "wrote");
    }

    Ok(WrittenReports {
        summary: summary_path,
        status: status_path,
        wheel: wheel_path,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
