//! Error taxonomy for document compilation.

use sfc_parser::SplitError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for compilation operations.
pub type CompileResult<T> = Result<T, CompileError>;

/// A fatal error for one document's compilation.
///
/// Every variant aborts the current document entirely; there is no
/// partial or degraded output mode. Unknown `lang` values and absent
/// injection anchors are not errors.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The document was delivered as a stream instead of a buffer.
    #[error("streamed documents are not supported")]
    UnsupportedInput,

    /// No `<script>` section was found.
    #[error("document has no <script> section")]
    MissingScriptSection,

    /// A style preprocessor rejected its input.
    #[error("style compilation failed: {message}")]
    StyleCompilation {
        /// The underlying compiler diagnostic.
        message: String,
    },

    /// An `include`/`href` file could not be read.
    #[error("failed to read {path}")]
    IncludeRead {
        /// The path that failed to read.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document bytes could not be decoded for the structural parse.
    #[error("malformed document: {message}")]
    MalformedDocument {
        /// What went wrong with the decode.
        message: String,
    },
}

impl CompileError {
    /// Wrap a preprocessor diagnostic.
    pub(crate) fn style(message: impl Into<String>) -> Self {
        Self::StyleCompilation {
            message: message.into(),
        }
    }

    /// Wrap a failed file read.
    pub(crate) fn include_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::IncludeRead {
            path: path.into(),
            source,
        }
    }
}

impl From<SplitError> for CompileError {
    fn from(err: SplitError) -> Self {
        match err {
            SplitError::MissingScriptSection => Self::MissingScriptSection,
        }
    }
}
