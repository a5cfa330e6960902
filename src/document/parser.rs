//! Conversion between JSON text and content documents.
//!
//! Content is stored and exchanged as JSON. Parsing goes through
//! `serde_json::Value` (built with `preserve_order`, so object keys keep the
//! order they had in the source) and is then converted into `ContentNode`s.
//!
//! # Example
//!
//! ```
//! use contentquill::document::parser::{parse_content, to_json_string};
//!
//! let root = parse_content(r#"{"hero": {"title": "A"}}"#).unwrap();
//! assert_eq!(root.get("hero").and_then(|h| h.get("title")).and_then(|t| t.as_str()), Some("A"));
//! assert_eq!(to_json_string(&root, 0).unwrap(), r#"{"hero":{"title":"A"}}"#);
//! ```

use super::node::{ContentNode, ContentNumber, ContentValue};
use anyhow::{Context, Result};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value as SerdeValue;

/// Parses a JSON string into a content document.
pub fn parse_content(json_str: &str) -> Result<ContentNode> {
    let value: SerdeValue = serde_json::from_str(json_str).context("Failed to parse JSON")?;
    Ok(parse_value(&value))
}

/// Parses a value typed by a content editor.
///
/// The text is tried as JSON first. Anything that is not valid JSON is taken
/// verbatim as a string, so `Desa Wisata` and `"Desa Wisata"` mean the same
/// thing while `42`, `true` and `["a"]` keep their JSON meaning.
pub fn parse_input_value(input: &str) -> ContentNode {
    match serde_json::from_str::<SerdeValue>(input) {
        Ok(value) => parse_value(&value),
        Err(_) => ContentNode::from(input),
    }
}

/// Converts a `serde_json::Value` into a `ContentNode`.
pub fn parse_value(value: &SerdeValue) -> ContentNode {
    let content = match value {
        SerdeValue::Null => ContentValue::Null,
        SerdeValue::Bool(b) => ContentValue::Boolean(*b),
        SerdeValue::Number(n) => ContentValue::Number(if let Some(i) = n.as_i64() {
            ContentNumber::Integer(i)
        } else if let Some(u) = n.as_u64() {
            ContentNumber::Unsigned(u)
        } else {
            ContentNumber::Float(n.as_f64().unwrap_or(0.0))
        }),
        SerdeValue::String(s) => ContentValue::String(s.clone()),
        SerdeValue::Array(items) => ContentValue::Array(items.iter().map(parse_value).collect()),
        SerdeValue::Object(map) => ContentValue::Object(
            map.iter()
                .map(|(key, child)| (key.clone(), parse_value(child)))
                .collect(),
        ),
    };
    ContentNode::new(content)
}

/// Converts a content document back into a `serde_json::Value`.
pub fn to_json_value(node: &ContentNode) -> SerdeValue {
    match node.value() {
        ContentValue::Null => SerdeValue::Null,
        ContentValue::Boolean(b) => SerdeValue::Bool(*b),
        ContentValue::Number(ContentNumber::Integer(i)) => SerdeValue::from(*i),
        ContentValue::Number(ContentNumber::Unsigned(u)) => SerdeValue::from(*u),
        ContentValue::Number(ContentNumber::Float(f)) => {
            // NaN and infinities have no JSON form
            serde_json::Number::from_f64(*f)
                .map(SerdeValue::Number)
                .unwrap_or(SerdeValue::Null)
        }
        ContentValue::String(s) => SerdeValue::String(s.clone()),
        ContentValue::Array(items) => SerdeValue::Array(items.iter().map(to_json_value).collect()),
        ContentValue::Object(entries) => SerdeValue::Object(
            entries
                .iter()
                .map(|(key, child)| (key.clone(), to_json_value(child)))
                .collect(),
        ),
    }
}

/// Serializes a document to JSON text.
///
/// An `indent_size` of zero produces compact output.
pub fn to_json_string(node: &ContentNode, indent_size: usize) -> Result<String> {
    if indent_size == 0 {
        return serde_json::to_string(node).context("Failed to serialize content");
    }

    let indent = " ".repeat(indent_size);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    node.serialize(&mut serializer)
        .context("Failed to serialize content")?;
    String::from_utf8(out).context("Serialized content was not UTF-8")
}

impl Serialize for ContentNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value() {
            ContentValue::Null => serializer.serialize_unit(),
            ContentValue::Boolean(b) => serializer.serialize_bool(*b),
            ContentValue::Number(ContentNumber::Integer(i)) => serializer.serialize_i64(*i),
            ContentValue::Number(ContentNumber::Unsigned(u)) => serializer.serialize_u64(*u),
            ContentValue::Number(ContentNumber::Float(f)) => {
                if f.is_finite() {
                    serializer.serialize_f64(*f)
                } else {
                    serializer.serialize_unit()
                }
            }
            ContentValue::String(s) => serializer.serialize_str(s),
            ContentValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ContentValue::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, child) in entries {
                    map.serialize_entry(key, child)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for ContentNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = SerdeValue::deserialize(deserializer)?;
        Ok(parse_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalars() {
        assert!(matches!(parse_content("null").unwrap().value(), ContentValue::Null));
        assert!(matches!(
            parse_content("true").unwrap().value(),
            ContentValue::Boolean(true)
        ));
        assert!(matches!(
            parse_content("7").unwrap().value(),
            ContentValue::Number(ContentNumber::Integer(7))
        ));
        assert!(matches!(
            parse_content("7.5").unwrap().value(),
            ContentValue::Number(ContentNumber::Float(f)) if *f == 7.5
        ));
        assert!(matches!(
            parse_content("18446744073709551615").unwrap().value(),
            ContentValue::Number(ContentNumber::Unsigned(u64::MAX))
        ));
    }

    #[test]
    fn test_parse_preserves_key_order() {
        let root = parse_content(r#"{"north": 1, "east": 2, "south": 3, "west": 4}"#).unwrap();
        if let ContentValue::Object(entries) = root.value() {
            let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["north", "east", "south", "west"]);
        } else {
            panic!("Expected object");
        }
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(parse_content("{not json").is_err());
    }

    #[test]
    fn test_input_value_falls_back_to_string() {
        assert_eq!(parse_input_value("Desa Wisata"), ContentNode::from("Desa Wisata"));
        assert_eq!(parse_input_value("\"quoted\""), ContentNode::from("quoted"));
        assert_eq!(parse_input_value("42"), ContentNode::from(42));
        assert!(parse_input_value("[1, 2]").value().is_array());
    }

    #[test]
    fn test_pretty_output_uses_indent() {
        let root = parse_content(r#"{"a": [1]}"#).unwrap();
        let text = to_json_string(&root, 4).unwrap();
        assert_eq!(text, "{\n    \"a\": [\n        1\n    ]\n}");
    }

    #[test]
    fn test_non_finite_float_serializes_as_null() {
        let node = ContentNode::from(f64::NAN);
        assert_eq!(to_json_string(&node, 0).unwrap(), "null");
        assert_eq!(to_json_value(&node), SerdeValue::Null);
    }

    #[test]
    fn test_serde_round_trip_through_deserialize() {
        let source = r#"{"hero":{"title":"A","tags":["x",1,false,null]}}"#;
        let node: ContentNode = serde_json::from_str(source).unwrap();
        assert_eq!(serde_json::to_string(&node).unwrap(), source);
    }
}
