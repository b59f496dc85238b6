//! Single-file component compilation pipeline.
//!
//! One document in, one artifact out: the document is split into
//! sections, each style section is compiled through its preprocessor,
//! the template is resolved from the raw source (or an include file),
//! and the script section is rewritten to embed the results as members
//! of its export. No state survives an invocation.

pub mod document;
pub mod error;
pub mod inject;
pub mod loader;
pub mod normalize;
pub mod shape;
pub mod style;
pub mod template;

pub use document::{DocumentContents, SourceDocument, TextEncoding};
pub use error::{CompileError, CompileResult};
pub use loader::{FileLoader, FsLoader};
pub use shape::{detect_module_shape, ModuleShape};
pub use style::{compile_style, LessOptions, SassOptions, SassOutputStyle, StyleDescriptor};

use sfc_parser::split_document;

use crate::inject::inject_members;
use crate::template::resolve_template;

/// Default invocation expression for the style-loading call.
pub const DEFAULT_LOAD_CSS_METHOD: &str = "require.loadCss";

/// Recognized compilation options.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Emit a per-document trace of the path being processed.
    pub debug: bool,
    /// The invocation expression used for the style-loading call.
    pub load_css_method: String,
    /// LESS-family preprocessor overrides.
    pub less: LessOptions,
    /// SASS-family preprocessor overrides.
    pub sass: SassOptions,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            debug: false,
            load_css_method: DEFAULT_LOAD_CSS_METHOD.to_string(),
            less: LessOptions::default(),
            sass: SassOptions::default(),
        }
    }
}

/// Compile one component document into its script artifact.
///
/// Empty documents pass through unchanged; streamed documents are
/// rejected. The returned document keeps the input path and encoding
/// with its contents replaced by the compiled script text. Style
/// descriptors are fully resolved before the injector runs.
pub fn compile_document(
    document: &SourceDocument,
    options: &CompileOptions,
    loader: &dyn FileLoader,
) -> CompileResult<SourceDocument> {
    let source = match &document.contents {
        DocumentContents::Empty => return Ok(document.clone()),
        DocumentContents::Stream => return Err(CompileError::UnsupportedInput),
        DocumentContents::Buffer(bytes) => decode(bytes, document.encoding)?,
    };

    if options.debug {
        eprintln!("[sfc-compiler] compiling {}", document.path.display());
    }

    let sections = split_document(source)?;
    let shape = detect_module_shape(source);

    let template = match &sections.template {
        Some(section) => resolve_template(source, section, loader)?,
        None => None,
    };

    // Accumulation by section kind: every style section compiles (a
    // failure in any is fatal) and the last descriptor wins the slot.
    let mut style = None;
    for section in &sections.styles {
        style = Some(compile_style(section, &options.less, &options.sass, loader)?);
    }

    let artifact = inject_members(
        &sections.script.raw_text,
        shape,
        template.as_deref(),
        style.as_ref(),
        &options.load_css_method,
    );

    Ok(SourceDocument {
        path: document.path.clone(),
        contents: DocumentContents::Buffer(artifact.into_bytes()),
        encoding: document.encoding,
    })
}

fn decode(bytes: &[u8], encoding: TextEncoding) -> CompileResult<&str> {
    match encoding {
        TextEncoding::Utf8 => std::str::from_utf8(bytes).map_err(|err| {
            CompileError::MalformedDocument {
                message: err.to_string(),
            }
        }),
    }
}
