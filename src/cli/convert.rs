//! Node tree -> JSON conversion utilities

use crate::ast::Node;
use crate::value::NodeValue;

/// Convert a parsed node tree to a serde_json::Value
///
/// Each node maps to an object with `id`, `name`, and `value` keys; a list
/// value maps to an array of child objects, an absent value to null.
pub fn node_to_json(node: &Node) -> serde_json::Value {
    let value = match node.value() {
        NodeValue::None => serde_json::Value::Null,
        NodeValue::String(text) => serde_json::Value::String(text.clone()),
        NodeValue::List(items) => {
            serde_json::Value::Array(items.iter().map(node_to_json).collect())
        }
    };

    let mut obj = serde_json::Map::new();
    obj.insert("id".to_string(), serde_json::Value::Number(node.id().into()));
    obj.insert(
        "name".to_string(),
        serde_json::Value::String(node.name().to_string()),
    );
    obj.insert("value".to_string(), value);

    serde_json::Value::Object(obj)
}
