use std::collections::BTreeMap;
use serde::Serialize;

/// Structured-output schema descriptor, serialized in the provider's
/// OpenAPI subset (`{"type": "OBJECT", "properties": ..., "required": ...}`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum SchemaNode {
    Object {
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        properties: BTreeMap<String, SchemaNode>,
        required: Vec<String>,
    },
    Array {
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        items: Box<SchemaNode>,
    },
    String {
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
        allowed_values: Option<Vec<String>>,
    },
    Integer {
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl SchemaNode {
    pub fn string(description: &str) -> Self {
        SchemaNode::String { description: Some(description.to_string()), allowed_values: None }
    }

    /// String node the model must fill with one of `values`.
    pub fn string_enum(description: &str, values: &[&str]) -> Self {
        SchemaNode::String {
            description: Some(description.to_string()),
            allowed_values: Some(values.iter().map(|value| value.to_string()).collect()),
        }
    }

    pub fn integer(description: &str) -> Self {
        SchemaNode::Integer { description: Some(description.to_string()) }
    }

    pub fn array(description: &str, items: SchemaNode) -> Self {
        SchemaNode::Array {
            description: Some(description.to_string()),
            items: Box::new(items),
        }
    }

    /// Object node from `(name, node)` pairs; `required` lists field names.
    pub fn object(fields: Vec<(&str, SchemaNode)>, required: &[&str]) -> Self {
        SchemaNode::Object {
            description: None,
            properties: fields
                .into_iter()
                .map(|(name, node)| (name.to_string(), node))
                .collect(),
            required: required.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Required field names of an object node, empty for other kinds.
    pub fn required_fields(&self) -> &[String] {
        match self {
            SchemaNode::Object { required, .. } => required,
            _ => &[],
        }
    }

    pub fn property_names(&self) -> Vec<&str> {
        match self {
            SchemaNode::Object { properties, .. } => properties.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        match self {
            SchemaNode::Object { properties, .. } => properties.get(name),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        // Serialization of this tree cannot fail: keys are strings, no maps of non-string keys.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_as_provider_schema() {
        let schema = SchemaNode::object(
            vec![
                ("name", SchemaNode::string("The full path of the file.")),
                ("line", SchemaNode::integer("Line number")),
            ],
            &["name"],
        );

        assert_eq!(
            schema.to_json(),
            json!({
                "type": "OBJECT",
                "properties": {
                    "line": { "type": "INTEGER", "description": "Line number" },
                    "name": { "type": "STRING", "description": "The full path of the file." }
                },
                "required": ["name"]
            })
        );
    }

    #[test]
    fn enum_strings_list_allowed_values() {
        let schema = SchemaNode::string_enum("Severity", &["High", "Low"]);
        assert_eq!(
            schema.to_json(),
            json!({ "type": "STRING", "description": "Severity", "enum": ["High", "Low"] })
        );
    }

    #[test]
    fn array_nodes_nest_items() {
        let schema = SchemaNode::array("names", SchemaNode::string("a name"));
        assert_eq!(
            schema.to_json(),
            json!({
                "type": "ARRAY",
                "description": "names",
                "items": { "type": "STRING", "description": "a name" }
            })
        );
        assert!(schema.required_fields().is_empty());
    }
}
