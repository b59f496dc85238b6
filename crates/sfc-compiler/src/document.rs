//! In-memory document model.

use std::path::PathBuf;

/// The delivery form of a document's contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentContents {
    /// A placeholder entry with no contents. Compilation passes it
    /// through unchanged.
    Empty,
    /// Fully buffered bytes, the only supported delivery form.
    Buffer(Vec<u8>),
    /// Chunked/streamed delivery. Always rejected.
    Stream,
}

/// The byte decoding of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// UTF-8, the only supported encoding.
    #[default]
    Utf8,
}

/// One component source document, owned by a single compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Path the host associates with this document.
    pub path: PathBuf,
    /// Document contents.
    pub contents: DocumentContents,
    /// How `contents` bytes decode to text.
    pub encoding: TextEncoding,
}

impl SourceDocument {
    /// Create a buffered document from already-decoded text.
    pub fn from_string(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: DocumentContents::Buffer(text.into().into_bytes()),
            encoding: TextEncoding::Utf8,
        }
    }

    /// View buffered contents as UTF-8 text.
    ///
    /// Returns `None` for empty/streamed documents and undecodable bytes.
    pub fn text(&self) -> Option<&str> {
        match &self.contents {
            DocumentContents::Buffer(bytes) => std::str::from_utf8(bytes).ok(),
            _ => None,
        }
    }
}
