use tree_sitter::Node;

// Helper functions shared by the Java extraction passes

pub const NAME_FIELD: &str = "name";
pub const BODY_FIELD: &str = "body";
pub const SUPERCLASS_FIELD: &str = "superclass";
pub const INTERFACES_FIELD: &str = "interfaces";

/// Grammar node kinds the extractor inspects. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxKind {
    ClassDeclaration,
    InterfaceDeclaration,
    MethodDeclaration,
    Modifiers,
    Superclass,
    SuperInterfaces,
    ExtendsInterfaces,
    TypeIdentifier,
    GenericType,
    ScopedTypeIdentifier,
    Other,
}

impl SyntaxKind {
    pub fn from_kind(kind: &str) -> Self {
        match kind {
            "class_declaration" => SyntaxKind::ClassDeclaration,
            "interface_declaration" => SyntaxKind::InterfaceDeclaration,
            "method_declaration" => SyntaxKind::MethodDeclaration,
            "modifiers" => SyntaxKind::Modifiers,
            "superclass" => SyntaxKind::Superclass,
            "super_interfaces" => SyntaxKind::SuperInterfaces,
            "extends_interfaces" => SyntaxKind::ExtendsInterfaces,
            "type_identifier" => SyntaxKind::TypeIdentifier,
            "generic_type" => SyntaxKind::GenericType,
            "scoped_type_identifier" => SyntaxKind::ScopedTypeIdentifier,
            _ => SyntaxKind::Other,
        }
    }

    pub fn of(node: Node) -> Self {
        Self::from_kind(node.kind())
    }
}

pub fn get_node_text(node: Node, source: &str) -> String {
    source
        .get(node.start_byte()..node.end_byte())
        .unwrap_or_default()
        .to_string()
}

pub fn find_named_child(node: Node, kind: SyntaxKind) -> Option<Node> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find(|child| SyntaxKind::of(*child) == kind)
}

/// Inclusive number of source lines spanned by a node.
pub fn line_count(node: Node) -> usize {
    node.end_position().row - node.start_position().row + 1
}
