//! Module shape detection.

/// The export convention used by the script section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleShape {
    /// The script exports an object literal directly.
    Standard,
    /// The script exports a function that returns an object literal.
    Factory,
}

const FACTORY_SIGNATURE: &str = "export default function";

/// Classify the script export shape from the raw document text.
///
/// A single substring heuristic, run once per document before any
/// injection decision, never re-derived. The signature appearing inside
/// a comment or string literal is a false positive; no guard exists
/// against that.
pub fn detect_module_shape(source: &str) -> ModuleShape {
    if source.contains(FACTORY_SIGNATURE) {
        ModuleShape::Factory
    } else {
        ModuleShape::Standard
    }
}
