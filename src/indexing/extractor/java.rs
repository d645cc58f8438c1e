use super::common::{self, SyntaxKind};
use super::{modifiers, type_names};
use crate::store::{Classification, DeclarationRecord};
use log::{trace, warn};
use tree_sitter::{Node, Tree};

const UNKNOWN_NAME: &str = "Unknown";

/// Builds one `DeclarationRecord` per class or interface in a parsed file.
pub struct JavaExtractor<'a> {
    source: &'a str,
}

impl<'a> JavaExtractor<'a> {
    pub fn new(source: &'a str) -> Self {
        JavaExtractor { source }
    }

    pub fn extract(&self, tree: &Tree) -> Vec<DeclarationRecord> {
        find_declarations(tree.root_node())
            .into_iter()
            .map(|node| self.build_record(node))
            .collect()
    }

    fn build_record(&self, node: Node) -> DeclarationRecord {
        match SyntaxKind::of(node) {
            SyntaxKind::InterfaceDeclaration => self.build_interface_record(node),
            _ => self.build_class_record(node),
        }
    }

    fn build_class_record(&self, node: Node) -> DeclarationRecord {
        let name = self.find_node_name(node);
        let keywords = modifiers::extract_modifiers(node, self.source);
        let classification = modifiers::classify(&keywords);

        // A class has at most one direct superclass
        let superclass = type_names::collect_type_names(
            node.child_by_field_name(common::SUPERCLASS_FIELD),
            self.source,
        )
        .into_iter()
        .next();

        let interfaces = type_names::collect_type_names(
            node.child_by_field_name(common::INTERFACES_FIELD),
            self.source,
        );

        trace!(
            "Found class {} ({}) at lines {}-{}",
            name,
            classification,
            node.start_position().row + 1,
            node.end_position().row + 1
        );

        DeclarationRecord::new(name, common::line_count(node), classification)
            .with_methods(self.extract_methods(node))
            .with_extends(superclass)
            .with_implements(interfaces)
    }

    fn build_interface_record(&self, node: Node) -> DeclarationRecord {
        let name = self.find_node_name(node);

        // extends_interfaces is a plain child, not a field
        let extended = type_names::collect_type_names(
            common::find_named_child(node, SyntaxKind::ExtendsInterfaces),
            self.source,
        );

        trace!(
            "Found interface {} at lines {}-{}",
            name,
            node.start_position().row + 1,
            node.end_position().row + 1
        );

        DeclarationRecord::new(name, common::line_count(node), Classification::Interface)
            .with_methods(self.extract_methods(node))
            .with_implements(extended)
    }

    fn find_node_name(&self, node: Node) -> String {
        match node.child_by_field_name(common::NAME_FIELD) {
            Some(name) => common::get_node_text(name, self.source),
            None => {
                warn!(
                    "No name node for {} at line {}",
                    node.kind(),
                    node.start_position().row + 1
                );
                UNKNOWN_NAME.to_string()
            }
        }
    }

    /// Names of methods declared directly in the declaration's body.
    fn extract_methods(&self, node: Node) -> Vec<String> {
        let Some(body) = node.child_by_field_name(common::BODY_FIELD) else {
            return Vec::new();
        };

        let mut cursor = body.walk();
        body.named_children(&mut cursor)
            .filter(|child| SyntaxKind::of(*child) == SyntaxKind::MethodDeclaration)
            .filter_map(|method| method.child_by_field_name(common::NAME_FIELD))
            .map(|name| common::get_node_text(name, self.source))
            .collect()
    }
}

/// Class and interface declarations in pre-order, i.e. source order.
///
/// Matched declarations are descended into as well, so nested types follow
/// their enclosing declaration as independent entries.
pub fn find_declarations(root: Node) -> Vec<Node> {
    let mut declarations = Vec::new();
    visit(root, &mut declarations);
    declarations
}

fn visit<'tree>(node: Node<'tree>, declarations: &mut Vec<Node<'tree>>) {
    if matches!(
        SyntaxKind::of(node),
        SyntaxKind::ClassDeclaration | SyntaxKind::InterfaceDeclaration
    ) {
        declarations.push(node);
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        visit(child, declarations);
    }
}
