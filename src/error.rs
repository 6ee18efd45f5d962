use crate::events::EventParseError;
use crate::export::ExportError;
use crate::rubric::RubricGap;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Export(#[from] ExportError),
    #[error("script line {line}: {source}")]
    Script {
        line: usize,
        #[source]
        source: EventParseError,
    },
    #[error("failed to read script {path}: {source}")]
    ScriptIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("rubric table is incomplete: {0}")]
    Rubric(#[from] RubricGap),
}
