//! Style section compilation.

use std::path::{Path, PathBuf};

use lightningcss::printer::PrinterOptions;
use lightningcss::stylesheet::{MinifyOptions, ParserOptions, StyleSheet};
use sfc_parser::StyleSection;

use crate::error::{CompileError, CompileResult};
use crate::loader::FileLoader;
use crate::normalize::normalize;

/// The compiled result of one style section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleDescriptor {
    /// Compiled, minified style text embedded as a content string.
    Inline {
        /// Normalized style text, ready for literal embedding.
        compiled_text: String,
    },
    /// A URL/path the runtime loads at render time instead of inlined
    /// content.
    Reference {
        /// The `href` value, verbatim.
        path: String,
    },
}

impl StyleDescriptor {
    fn inline(compiled_text: String) -> Self {
        Self::Inline { compiled_text }
    }

    /// The argument expression handed to the CSS-loading call.
    pub fn as_loader_argument(&self) -> String {
        match self {
            Self::Inline { compiled_text } => format!("{{ content: \"{compiled_text}\" }}"),
            Self::Reference { path } => format!("{{ url: '{path}' }}"),
        }
    }
}

/// Caller overrides for the LESS-family compile.
///
/// Unset fields fall back to the compiler defaults (compressed output,
/// strict parsing); set fields take precedence.
#[derive(Debug, Clone, Default)]
pub struct LessOptions {
    /// Override compressed output.
    pub minify: Option<bool>,
    /// Recover from parse errors instead of failing the document.
    pub error_recovery: Option<bool>,
}

/// Caller overrides for the SASS-family compile.
///
/// Unset fields fall back to the defaults derived from `lang` (syntax
/// selection) and compressed output; set fields take precedence.
#[derive(Debug, Clone, Default)]
pub struct SassOptions {
    /// Override the output style.
    pub output_style: Option<SassOutputStyle>,
    /// Override the indented-syntax selection made from `lang`.
    pub indented_syntax: Option<bool>,
    /// Additional directories searched for imports.
    pub load_paths: Vec<PathBuf>,
}

/// Output style for the SASS-family compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SassOutputStyle {
    /// Human-readable output.
    Expanded,
    /// Whitespace-stripped output.
    Compressed,
}

/// Compile one style section into exactly one descriptor.
///
/// `lang` selects the preprocessor; anything unrecognized is plain
/// style text. A bare `href` without a preprocessor skips compilation
/// entirely and produces a reference descriptor. Preprocessor failures
/// are fatal for the whole document.
pub fn compile_style(
    section: &StyleSection,
    less: &LessOptions,
    sass: &SassOptions,
    loader: &dyn FileLoader,
) -> CompileResult<StyleDescriptor> {
    match section.lang() {
        Some("less") => compile_less(&section.raw_markup, less),
        Some(lang @ ("sass" | "scss")) => compile_sass(section, lang == "sass", sass, loader),
        _ => {
            if let Some(href) = &section.href {
                // External plain style: referenced, never read or inlined.
                Ok(StyleDescriptor::Reference { path: href.clone() })
            } else {
                Ok(StyleDescriptor::inline(normalize(&section.raw_markup)))
            }
        }
    }
}

fn compile_less(source: &str, options: &LessOptions) -> CompileResult<StyleDescriptor> {
    let parser_options = ParserOptions {
        error_recovery: options.error_recovery.unwrap_or(false),
        ..ParserOptions::default()
    };
    let mut sheet = StyleSheet::parse(source, parser_options)
        .map_err(|err| CompileError::style(err.to_string()))?;
    sheet
        .minify(MinifyOptions::default())
        .map_err(|err| CompileError::style(err.to_string()))?;
    let output = sheet
        .to_css(PrinterOptions {
            minify: options.minify.unwrap_or(true),
            ..PrinterOptions::default()
        })
        .map_err(|err| CompileError::style(err.to_string()))?;
    Ok(StyleDescriptor::inline(normalize(&output.code)))
}

fn compile_sass(
    section: &StyleSection,
    indented_from_lang: bool,
    options: &SassOptions,
    loader: &dyn FileLoader,
) -> CompileResult<StyleDescriptor> {
    let indented = options.indented_syntax.unwrap_or(indented_from_lang);
    let syntax = if indented {
        grass::InputSyntax::Sass
    } else {
        grass::InputSyntax::Scss
    };
    let style = match options.output_style {
        Some(SassOutputStyle::Expanded) => grass::OutputStyle::Expanded,
        _ => grass::OutputStyle::Compressed,
    };

    let mut grass_options = grass::Options::default().style(style).input_syntax(syntax);
    for path in &options.load_paths {
        grass_options = grass_options.load_path(path);
    }

    let input = if let Some(href) = &section.href {
        // External file mode: the captured markup is ignored entirely.
        let path = Path::new(href.as_str());
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            grass_options = grass_options.load_path(parent);
        }
        loader
            .read_to_string(path)
            .map_err(|err| CompileError::include_read(path, err))?
    } else {
        section.raw_markup.clone()
    };

    let css = grass::from_string(input, &grass_options)
        .map_err(|err| CompileError::style(err.to_string()))?;
    Ok(StyleDescriptor::inline(normalize(&css)))
}
