use crate::logging::{codes, Code};
use crate::report::ReportError;
use crate::syntax::SyntaxError;
use std::io;
use std::path::PathBuf;

/// Pipeline processing errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("open {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Syntax errors print as `path:row:column (offset) message`
    #[error("{}{source}", .path.display())]
    Syntax {
        path: PathBuf,
        #[source]
        source: SyntaxError,
    },

    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PipelineError {
    pub fn error_code(&self) -> Code {
        match self {
            Self::FileOpen { .. } => codes::file_processing::FILE_OPEN_FAILED,
            Self::Syntax { source, .. } => source.error_code(),
            Self::Output(_) | Self::Serialize(_) => codes::file_processing::OUTPUT_FAILED,
        }
    }

    pub fn recommended_action(&self) -> &'static str {
        codes::get_action(self.error_code().as_str())
    }
}

impl From<ReportError> for PipelineError {
    fn from(error: ReportError) -> Self {
        match error {
            ReportError::Io(e) => Self::Output(e),
            ReportError::Serialize(e) => Self::Serialize(e),
        }
    }
}
