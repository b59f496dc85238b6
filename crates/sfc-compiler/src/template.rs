//! Template resolution.

use std::path::Path;

use sfc_parser::TemplateSection;

use crate::error::{CompileError, CompileResult};
use crate::loader::FileLoader;
use crate::normalize::normalize;

const OPEN_MARKER: &str = "<template>";
const CLOSE_MARKER: &str = "</template>";

/// Produce the final template text for a template section.
///
/// An `include` attribute wins: the referenced file is read through the
/// injected loader and its whole content is the template body, with no
/// delimiter stripping. Otherwise the body is re-sliced from the raw
/// document between the first literal `<template>` and the last literal
/// `</template>` markers. The parsed node is never the source of truth
/// because the fragment parser lowercases attribute names, which would
/// corrupt mixed-case binding syntax.
///
/// Returns `None` when the literal markers cannot be found (e.g. the
/// open tag carries attributes); the caller skips template injection in
/// that case.
pub fn resolve_template(
    source: &str,
    section: &TemplateSection,
    loader: &dyn FileLoader,
) -> CompileResult<Option<String>> {
    if let Some(include) = &section.include {
        let path = Path::new(include);
        let body = loader
            .read_to_string(path)
            .map_err(|err| CompileError::include_read(path, err))?;
        return Ok(Some(normalize(&body)));
    }

    let Some(open) = source.find(OPEN_MARKER) else {
        return Ok(None);
    };
    let Some(close) = source.rfind(CLOSE_MARKER) else {
        return Ok(None);
    };
    let start = open + OPEN_MARKER.len();
    if close < start {
        return Ok(None);
    }
    Ok(Some(normalize(&source[start..close])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::FsLoader;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn section(include: Option<&str>) -> TemplateSection {
        TemplateSection {
            raw_markup: String::new(),
            include: include.map(String::from),
        }
    }

    #[test]
    fn test_reslices_raw_document() {
        let source = "<template>\n  <div>Hi</div>\n</template>\n<script>export default {}</script>";
        let body = resolve_template(source, &section(None), &FsLoader)
            .unwrap()
            .unwrap();
        assert_eq!(body, "<div>Hi</div>");
    }

    // The raw slice is what preserves attribute case; the parsed node
    // has already been lowercased.
    #[test]
    fn test_preserves_mixed_case_attributes() {
        let source =
            "<template><div :myProp=\"x\" viewBox=\"0 0 1 1\"/></template><script>a</script>";
        let body = resolve_template(source, &section(None), &FsLoader)
            .unwrap()
            .unwrap();
        assert!(body.contains(":myProp"));
        assert!(body.contains("viewBox"));
    }

    #[test]
    fn test_uses_last_close_marker() {
        let source = "<template><template></template></template><script>a</script>";
        let body = resolve_template(source, &section(None), &FsLoader)
            .unwrap()
            .unwrap();
        assert_eq!(body, "<template></template>");
    }

    #[test]
    fn test_missing_markers_resolve_to_none() {
        let source = "<template class=\"x\"><div/></template><script>a</script>";
        assert_eq!(resolve_template(source, &section(None), &FsLoader).unwrap(), None);
    }

    #[test]
    fn test_include_reads_whole_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<div>\n  from include\n</div>").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let body = resolve_template("<script>a</script>", &section(Some(&path)), &FsLoader)
            .unwrap()
            .unwrap();
        assert_eq!(body, "<div> from include </div>");
    }

    #[test]
    fn test_include_read_failure_is_fatal() {
        let err = resolve_template(
            "<script>a</script>",
            &section(Some("no/such/file.html")),
            &FsLoader,
        )
        .unwrap_err();
        assert!(matches!(err, CompileError::IncludeRead { .. }));
    }
}
