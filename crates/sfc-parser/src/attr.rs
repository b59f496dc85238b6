//! Attribute access on parsed fragment nodes.

use markup5ever_rcdom::{Handle, NodeData};

/// Get the value of a named attribute on an element node.
///
/// Returns `None` for non-element nodes and for absent attributes. The
/// fragment parser has already lowercased attribute names, so `name`
/// must be given in lowercase.
pub fn get_attribute(node: &Handle, name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| attr.name.local.as_ref() == name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::parse_fragment_children;

    #[test]
    fn test_get_attribute_present() {
        let children = parse_fragment_children("<style lang=\"scss\"></style>");
        let node = &children[0];
        assert_eq!(get_attribute(node, "lang"), Some("scss".to_string()));
    }

    #[test]
    fn test_get_attribute_absent() {
        let children = parse_fragment_children("<style></style>");
        let node = &children[0];
        assert_eq!(get_attribute(node, "href"), None);
    }

    #[test]
    fn test_attribute_names_are_lowercased_by_parser() {
        let children = parse_fragment_children("<style LANG=\"less\"></style>");
        let node = &children[0];
        assert_eq!(get_attribute(node, "lang"), Some("less".to_string()));
    }
}
