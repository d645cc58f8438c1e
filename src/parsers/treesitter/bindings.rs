use tree_sitter::Language;

pub fn java_language() -> Language {
    tree_sitter_java::LANGUAGE.into()
}
