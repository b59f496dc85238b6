//! Section types produced by the splitter.

use smol_str::SmolStr;

/// The classified sections of one component document.
///
/// A document yields at most one template, exactly one script (the
/// splitter fails without one), and any number of style sections in
/// document order. Later template/script sections overwrite earlier
/// ones; style sections are kept so each can be compiled even though
/// only the last compiled descriptor survives downstream.
#[derive(Debug, Clone)]
pub struct Sections {
    /// The template section, if present.
    pub template: Option<TemplateSection>,
    /// The mandatory script section.
    pub script: ScriptSection,
    /// All style sections, in document order.
    pub styles: Vec<StyleSection>,
}

/// A `<template>` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSection {
    /// The structurally re-serialized inner markup.
    ///
    /// The fragment parser lowercases attribute names, so this is never
    /// the authoritative template text; resolution re-slices the raw
    /// document instead. Kept for inspection and diagnostics.
    pub raw_markup: String,
    /// Path from the `include` attribute, if any.
    pub include: Option<String>,
}

/// A `<script>` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSection {
    /// The inner script text, exactly as written.
    pub raw_text: String,
}

/// A `<style>` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSection {
    /// The inner style text, exactly as written.
    pub raw_markup: String,
    /// The `lang` attribute (less, sass, scss, ...), if any.
    pub lang: Option<SmolStr>,
    /// The `href` attribute, if any.
    pub href: Option<String>,
}

impl StyleSection {
    /// Get the declared language, lowercased for comparison.
    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }
}
