//! Script rewriting by anchored textual injection.
//!
//! The script section belongs to an unparsed target dialect, so members
//! are injected by pattern substitution against a small fixed set of
//! anchor signatures instead of an AST rewrite. Each substitution
//! targets the first occurrence of its anchor; a missing anchor is a
//! silent no-op for that injection only.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::shape::ModuleShape;
use crate::style::StyleDescriptor;

/// Opening brace of the default-exported object literal.
static OBJECT_EXPORT_ANCHOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"export default [^{]*\{").expect("object export anchor"));

/// From `export default` to the factory's own `return {`, non-greedily
/// across line breaks.
static FACTORY_RETURN_ANCHOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)(export default.*?)(return\s*\{)").expect("factory anchor"));

/// Opening brace of the returned object literal.
static RETURN_OBJECT_ANCHOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"return\s*\{").expect("return object anchor"));

/// Rewrite script text to embed the resolved template and compiled
/// style as members appropriate to the detected module shape.
///
/// Style injection runs before template injection, so a Standard-shape
/// object literal ends up ordered `template`, `beforeCreate`, then the
/// author's members.
pub fn inject_members(
    script: &str,
    shape: ModuleShape,
    template: Option<&str>,
    style: Option<&StyleDescriptor>,
    load_css_method: &str,
) -> String {
    let mut content = script.to_string();
    if let Some(descriptor) = style {
        content = inject_style(&content, shape, descriptor, load_css_method);
    }
    if let Some(template) = template {
        content = inject_template(&content, shape, template);
    }
    content
}

/// Inject the CSS-loading call for the style descriptor.
///
/// Standard shape gets a `beforeCreate` lifecycle member guarded by a
/// literal substring check. Factory shape inserts the call before the
/// factory's `return {` with no guard; re-running against already
/// injected text re-inserts, so this shape is not safely re-runnable.
fn inject_style(
    script: &str,
    shape: ModuleShape,
    descriptor: &StyleDescriptor,
    load_css_method: &str,
) -> String {
    let call = format!("{}({});", load_css_method, descriptor.as_loader_argument());
    match shape {
        ModuleShape::Standard => {
            if script.contains("beforeCreate") {
                return script.to_string();
            }
            OBJECT_EXPORT_ANCHOR
                .replace(script, |caps: &Captures| {
                    format!("{}\n    beforeCreate() {{\n        {}\n    }},", &caps[0], call)
                })
                .into_owned()
        }
        ModuleShape::Factory => FACTORY_RETURN_ANCHOR
            .replace(script, |caps: &Captures| {
                format!("{}{}\n    {}", &caps[1], call, &caps[2])
            })
            .into_owned(),
    }
}

/// Inject the resolved template text as a member.
///
/// `template:` goes after the object-literal anchor for Standard shape;
/// `$template:` goes after `return {` for Factory shape. Both carry a
/// literal-substring idempotence guard. The replacement is composed in
/// a closure so `$template` is never treated as a capture reference.
fn inject_template(script: &str, shape: ModuleShape, template: &str) -> String {
    match shape {
        ModuleShape::Standard => {
            if script.contains("template:") {
                return script.to_string();
            }
            OBJECT_EXPORT_ANCHOR
                .replace(script, |caps: &Captures| {
                    format!("{}\n    template: \"{}\",", &caps[0], template)
                })
                .into_owned()
        }
        ModuleShape::Factory => {
            if script.contains("$template:") {
                return script.to_string();
            }
            RETURN_OBJECT_ANCHOR
                .replace(script, |caps: &Captures| {
                    format!("{}\n        $template: \"{}\",", &caps[0], template)
                })
                .into_owned()
        }
    }
}
