//! Single-file component section splitter.
//!
//! This crate splits a component document into its template, script,
//! and style sections using an HTML fragment parse for structure and
//! attributes while leaving content fidelity concerns to the caller.

pub mod attr;
pub mod error;
pub mod section;
pub mod splitter;

pub use attr::get_attribute;
pub use error::{SplitError, SplitResult};
pub use section::{ScriptSection, Sections, StyleSection, TemplateSection};
pub use splitter::split_document;

/// Split a component document and return its sections.
pub fn split(source: &str) -> SplitResult<Sections> {
    split_document(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_full_component() {
        let source = r#"<template>
  <div class="greeting">{{ message }}</div>
</template>

<script>
export default {
    data() {
        return { message: 'Hello' };
    }
}
</script>

<style lang="less">
.greeting { color: red; }
</style>
"#;
        let sections = split(source).unwrap();
        assert!(sections.template.is_some());
        assert!(sections.script.raw_text.contains("data()"));
        assert_eq!(sections.styles.len(), 1);
        assert_eq!(sections.styles[0].lang(), Some("less"));
    }

    #[test]
    fn test_later_script_overwrites_earlier() {
        let source = "<script>first</script><script>second</script>";
        let sections = split(source).unwrap();
        assert_eq!(sections.script.raw_text, "second");
    }
}
