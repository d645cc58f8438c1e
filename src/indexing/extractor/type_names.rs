use super::common::{self, SyntaxKind};
use tree_sitter::Node;

/// Flattens a heritage clause into base type names, in declaration order.
///
/// Plain and scoped names are taken verbatim; generic types contribute only
/// their base name. Wrapper nodes such as `type_list` are descended into.
pub fn collect_type_names(node: Option<Node>, source: &str) -> Vec<String> {
    let mut names = Vec::new();
    if let Some(node) = node {
        collect_into(node, source, &mut names);
    }
    names
}

fn collect_into(node: Node, source: &str, names: &mut Vec<String>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match SyntaxKind::of(child) {
            SyntaxKind::TypeIdentifier | SyntaxKind::ScopedTypeIdentifier => {
                names.push(common::get_node_text(child, source));
            }
            SyntaxKind::GenericType => {
                // A scoped base keeps its full dotted text
                if let Some(base) = generic_base_name(child, source) {
                    names.push(base);
                }
            }
            _ => collect_into(child, source, names),
        }
    }
}

fn generic_base_name(node: Node, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find(|child| {
            matches!(
                SyntaxKind::of(*child),
                SyntaxKind::TypeIdentifier | SyntaxKind::ScopedTypeIdentifier
            )
        })
        .map(|base| common::get_node_text(base, source))
}
