use serde::{Deserialize, Serialize};
use std::fmt;

/// Single label summarizing the modifiers of a declaration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Abstract,
    Final,
    Public,
    Private,
    Protected,
    Default,
    Interface,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Abstract => "abstract",
            Classification::Final => "final",
            Classification::Public => "public",
            Classification::Private => "private",
            Classification::Protected => "protected",
            Classification::Default => "default",
            Classification::Interface => "interface",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One class or interface found in a Java source file.
///
/// Field names on the wire follow the presentation layer's contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeclarationRecord {
    #[serde(rename = "Classname")]
    pub name: String,
    #[serde(rename = "Methods")]
    pub methods: Vec<String>,
    #[serde(rename = "Loc")]
    pub line_count: usize,
    #[serde(rename = "Type")]
    pub classification: Classification,
    #[serde(rename = "Extends")]
    pub extends: Option<String>,
    #[serde(rename = "Implements")]
    pub implements: Vec<String>,
}

impl DeclarationRecord {
    pub fn new(name: String, line_count: usize, classification: Classification) -> Self {
        DeclarationRecord {
            name,
            methods: Vec::new(),
            line_count,
            classification,
            extends: None,
            implements: Vec::new(),
        }
    }

    pub fn with_methods(mut self, methods: Vec<String>) -> Self {
        self.methods = methods;
        self
    }

    pub fn with_extends(mut self, extends: Option<String>) -> Self {
        self.extends = extends;
        self
    }

    pub fn with_implements(mut self, implements: Vec<String>) -> Self {
        self.implements = implements;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_wire_shape() {
        let record = DeclarationRecord::new("AbstractService".to_string(), 18, Classification::Abstract)
            .with_methods(vec!["start".to_string(), "stop".to_string()])
            .with_extends(Some("BaseService".to_string()))
            .with_implements(vec!["Serializable".to_string()]);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "Classname": "AbstractService",
                "Methods": ["start", "stop"],
                "Loc": 18,
                "Type": "abstract",
                "Extends": "BaseService",
                "Implements": ["Serializable"],
            })
        );
    }

    #[test]
    fn test_absent_superclass_serializes_as_null() {
        let record = DeclarationRecord::new("Printable".to_string(), 4, Classification::Interface);
        let value = serde_json::to_value(&record).unwrap();
        assert!(value["Extends"].is_null());
        assert_eq!(value["Implements"], json!([]));
        assert_eq!(value["Type"], "interface");
    }

    #[test]
    fn test_classification_labels() {
        assert_eq!(Classification::Default.to_string(), "default");
        assert_eq!(Classification::Protected.as_str(), "protected");
    }
}
