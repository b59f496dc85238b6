//! Error types for section splitting.

use thiserror::Error;

/// Result type for splitting operations.
pub type SplitResult<T> = Result<T, SplitError>;

/// An error raised while splitting a document into sections.
///
/// The fragment parse itself is tolerant and never fails on text input;
/// the only structural invariant the splitter enforces is the presence
/// of a script section.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// The document contains no `<script>` child.
    #[error("document has no <script> section")]
    MissingScriptSection,
}
