//! Document splitting via an HTML fragment parse.
//!
//! The document is parsed as a body-context fragment so the splitter is
//! tolerant of unclosed and foreign tags, then the immediate children
//! are classified by tag name. The parse is only trusted for structure
//! and attributes; template content must be re-sliced from the raw
//! document by the resolver because the parser lowercases names.

use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::TendrilSink;
use html5ever::{local_name, namespace_url, ns, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};
use smol_str::SmolStr;

use crate::attr::get_attribute;
use crate::error::{SplitError, SplitResult};
use crate::section::{ScriptSection, Sections, StyleSection, TemplateSection};

/// Split a raw component document into its sections.
///
/// Unrecognized top-level tags are silently ignored. Later template and
/// script sections overwrite earlier ones; style sections accumulate in
/// document order. A document without a script section is an error.
pub fn split_document(source: &str) -> SplitResult<Sections> {
    let mut template = None;
    let mut script = None;
    let mut styles = Vec::new();

    for node in parse_fragment_children(source) {
        let NodeData::Element { ref name, .. } = node.data else {
            continue;
        };
        match name.local.as_ref() {
            "template" => {
                template = Some(TemplateSection {
                    raw_markup: template_markup(&node),
                    include: get_attribute(&node, "include"),
                });
            }
            "script" => {
                script = Some(ScriptSection {
                    raw_text: inner_markup(&node),
                });
            }
            "style" => {
                styles.push(StyleSection {
                    raw_markup: inner_markup(&node),
                    lang: get_attribute(&node, "lang").map(SmolStr::from),
                    href: get_attribute(&node, "href"),
                });
            }
            _ => {}
        }
    }

    let script = script.ok_or(SplitError::MissingScriptSection)?;
    Ok(Sections {
        template,
        script,
        styles,
    })
}

/// Parse `source` as a body-context fragment and return its top-level nodes.
pub(crate) fn parse_fragment_children(source: &str) -> Vec<Handle> {
    let dom = html5ever::parse_fragment(
        RcDom::default(),
        ParseOpts::default(),
        QualName::new(None, ns!(html), local_name!("body")),
        Vec::new(),
    )
    .one(source);

    // parse_fragment roots the parsed nodes under a synthetic <html> element.
    let document = dom.document.children.borrow();
    match document.first() {
        Some(root) => root.children.borrow().iter().cloned().collect(),
        None => Vec::new(),
    }
}

/// Re-serialize the inner content of a raw-text element (script/style).
///
/// The element's own name seeds the serializer context so its text
/// children come back verbatim instead of entity-escaped.
fn inner_markup(node: &Handle) -> String {
    let NodeData::Element { ref name, .. } = node.data else {
        return String::new();
    };
    serialize_children(node, Some(name.clone()))
}

/// Re-serialize the markup inside a `<template>` element.
///
/// Template children live in the parser's separate contents fragment.
fn template_markup(node: &Handle) -> String {
    if let NodeData::Element {
        ref template_contents,
        ..
    } = node.data
    {
        if let Some(contents) = template_contents.borrow().as_ref() {
            return serialize_children(contents, None);
        }
    }
    String::new()
}

fn serialize_children(node: &Handle, context: Option<QualName>) -> String {
    let mut buf = Vec::new();
    let handle: SerializableHandle = node.clone().into();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(context),
        ..SerializeOpts::default()
    };
    if serialize(&mut buf, &handle, opts).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_basic_document() {
        let source = "<template><div>Hi</div></template>\n<script>export default {}</script>\n<style>.a { color: red; }</style>";
        let sections = split_document(source).unwrap();
        assert!(sections.template.is_some());
        assert_eq!(sections.script.raw_text, "export default {}");
        assert_eq!(sections.styles.len(), 1);
        assert_eq!(sections.styles[0].raw_markup, ".a { color: red; }");
    }

    #[test]
    fn test_missing_script_is_fatal() {
        let source = "<template><div/></template>";
        assert_eq!(
            split_document(source).unwrap_err(),
            SplitError::MissingScriptSection
        );
    }

    #[test]
    fn test_unrecognized_tags_are_ignored() {
        let source = "<docs>internal notes</docs><script>export default {}</script>";
        let sections = split_document(source).unwrap();
        assert!(sections.template.is_none());
        assert!(sections.styles.is_empty());
    }

    #[test]
    fn test_style_attributes() {
        let source =
            "<style lang=\"scss\" href=\"theme.scss\"></style><script>export default {}</script>";
        let sections = split_document(source).unwrap();
        assert_eq!(sections.styles[0].lang(), Some("scss"));
        assert_eq!(sections.styles[0].href.as_deref(), Some("theme.scss"));
    }

    #[test]
    fn test_template_include_attribute() {
        let source = "<template include=\"body.html\"></template><script>export default {}</script>";
        let sections = split_document(source).unwrap();
        let template = sections.template.unwrap();
        assert_eq!(template.include.as_deref(), Some("body.html"));
    }

    #[test]
    fn test_multiple_styles_kept_in_document_order() {
        let source = "<style>.a{}</style><style>.b{}</style><script>export default {}</script>";
        let sections = split_document(source).unwrap();
        assert_eq!(sections.styles.len(), 2);
        assert_eq!(sections.styles[0].raw_markup, ".a{}");
        assert_eq!(sections.styles[1].raw_markup, ".b{}");
    }

    #[test]
    fn test_script_content_is_verbatim() {
        let source = "<script>export default { greet() { return 1 < 2; } }</script>";
        let sections = split_document(source).unwrap();
        assert_eq!(
            sections.script.raw_text,
            "export default { greet() { return 1 < 2; } }"
        );
    }

    // The structural parse lowercases attribute names inside templates.
    // This is why resolved template text never comes from `raw_markup`.
    #[test]
    fn test_template_markup_is_case_folded() {
        let source =
            "<template><div myAttr=\"x\">Hi</div></template><script>export default {}</script>";
        let sections = split_document(source).unwrap();
        let template = sections.template.unwrap();
        assert!(template.raw_markup.contains("myattr"));
        assert!(!template.raw_markup.contains("myAttr"));
    }
}
