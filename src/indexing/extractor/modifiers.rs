use super::common::{self, SyntaxKind};
use crate::store::Classification;
use tree_sitter::Node;

// First match wins, regardless of keyword order in the source.
const PRECEDENCE: [(&str, Classification); 5] = [
    ("abstract", Classification::Abstract),
    ("final", Classification::Final),
    ("public", Classification::Public),
    ("private", Classification::Private),
    ("protected", Classification::Protected),
];

/// Keyword modifiers on a declaration, in source order. Annotations are skipped.
pub fn extract_modifiers(node: Node, source: &str) -> Vec<String> {
    let Some(modifiers) = common::find_named_child(node, SyntaxKind::Modifiers) else {
        return Vec::new();
    };

    let mut cursor = modifiers.walk();
    modifiers
        .children(&mut cursor)
        .filter(|child| !child.is_named())
        .map(|child| common::get_node_text(child, source))
        .collect()
}

pub fn classify(modifiers: &[String]) -> Classification {
    PRECEDENCE
        .iter()
        .find(|(keyword, _)| modifiers.iter().any(|m| m == keyword))
        .map(|(_, classification)| *classification)
        .unwrap_or(Classification::Default)
}
