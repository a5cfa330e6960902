//! Content node representation with structural sharing.
//!
//! Every value in a page-content document is wrapped in a `ContentNode`, a
//! cheaply clonable handle to an immutable `ContentValue`. Cloning a node
//! never copies the subtree beneath it; it only bumps a reference count. This
//! is what lets the mutation engine rebuild the nodes along a path while every
//! other subtree of the new snapshot stays the very same allocation as in the
//! previous one.
//!
//! # Example
//!
//! ```
//! use contentquill::document::node::{ContentNode, ContentValue};
//! use indexmap::IndexMap;
//!
//! let mut hero = IndexMap::new();
//! hero.insert("title".to_string(), ContentNode::from("Desa Wisata"));
//! let root = ContentNode::object([("hero".to_string(), ContentNode::new(ContentValue::Object(hero)))]);
//!
//! assert!(root.value().is_object());
//! let copy = root.clone();
//! assert!(ContentNode::ptr_eq(&root, &copy));
//! ```

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Numbers as they appear in content documents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentNumber {
    Integer(i64),
    /// Integers above `i64::MAX`
    Unsigned(u64),
    Float(f64),
}

impl fmt::Display for ContentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentNumber::Integer(i) => write!(f, "{}", i),
            ContentNumber::Unsigned(u) => write!(f, "{}", u),
            ContentNumber::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl ContentNumber {
    pub fn as_f64(&self) -> f64 {
        match self {
            ContentNumber::Integer(i) => *i as f64,
            ContentNumber::Unsigned(u) => *u as f64,
            ContentNumber::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, ContentNumber::Integer(_) | ContentNumber::Unsigned(_))
    }
}

/// A content value without the sharing handle.
///
/// Objects keep their keys in insertion order so that editors see fields in
/// the same order the content author wrote them.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentValue {
    /// A map of field name to child node
    Object(IndexMap<String, ContentNode>),
    /// An ordered, positional list of child nodes
    Array(Vec<ContentNode>),
    String(String),
    Number(ContentNumber),
    Boolean(bool),
    Null,
}

impl ContentValue {
    /// Returns true if this value is an object.
    pub fn is_object(&self) -> bool {
        matches!(self, ContentValue::Object(_))
    }

    /// Returns true if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, ContentValue::Array(_))
    }

    /// Returns true if this value can hold children (object or array).
    ///
    /// # Example
    ///
    /// ```
    /// use contentquill::document::node::ContentValue;
    ///
    /// assert!(ContentValue::Array(vec![]).is_container());
    /// assert!(!ContentValue::Null.is_container());
    /// ```
    pub fn is_container(&self) -> bool {
        matches!(self, ContentValue::Object(_) | ContentValue::Array(_))
    }

    /// Returns a short lowercase name for the value's kind, used in error
    /// messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ContentValue::Object(_) => "object",
            ContentValue::Array(_) => "array",
            ContentValue::String(_) => "string",
            ContentValue::Number(_) => "number",
            ContentValue::Boolean(_) => "boolean",
            ContentValue::Null => "null",
        }
    }
}

/// A shared, immutable handle to a `ContentValue`.
///
/// `PartialEq` compares by value. Use [`ContentNode::ptr_eq`] to ask whether
/// two handles point at the same node, which is how callers detect that a
/// subtree was left untouched by an edit.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentNode(Arc<ContentValue>);

impl ContentNode {
    /// Wraps a value in a fresh node.
    pub fn new(value: ContentValue) -> Self {
        Self(Arc::new(value))
    }

    /// Builds an object node from key/value pairs, keeping their order.
    pub fn object<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, ContentNode)>,
    {
        Self::new(ContentValue::Object(entries.into_iter().collect()))
    }

    /// Builds an array node.
    pub fn array(items: Vec<ContentNode>) -> Self {
        Self::new(ContentValue::Array(items))
    }

    pub fn empty_object() -> Self {
        Self::new(ContentValue::Object(IndexMap::new()))
    }

    pub fn null() -> Self {
        Self::new(ContentValue::Null)
    }

    /// Returns an immutable reference to the node's value.
    pub fn value(&self) -> &ContentValue {
        &self.0
    }

    /// Returns true when both handles refer to the same node.
    ///
    /// # Example
    ///
    /// ```
    /// use contentquill::document::node::ContentNode;
    ///
    /// let a = ContentNode::from("x");
    /// let b = ContentNode::from("x");
    /// assert_eq!(a, b);
    /// assert!(!ContentNode::ptr_eq(&a, &b));
    /// assert!(ContentNode::ptr_eq(&a, &a.clone()));
    /// ```
    pub fn ptr_eq(a: &ContentNode, b: &ContentNode) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Looks up a field when this node is an object.
    pub fn get(&self, key: &str) -> Option<&ContentNode> {
        match self.value() {
            ContentValue::Object(entries) => entries.get(key),
            _ => None,
        }
    }

    /// Looks up an element when this node is an array.
    pub fn get_index(&self, index: usize) -> Option<&ContentNode> {
        match self.value() {
            ContentValue::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Number of direct children; zero for scalars.
    pub fn len(&self) -> usize {
        match self.value() {
            ContentValue::Object(entries) => entries.len(),
            ContentValue::Array(items) => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_str(&self) -> Option<&str> {
        match self.value() {
            ContentValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<ContentValue> for ContentNode {
    fn from(value: ContentValue) -> Self {
        ContentNode::new(value)
    }
}

impl From<&str> for ContentNode {
    fn from(s: &str) -> Self {
        ContentNode::new(ContentValue::String(s.to_string()))
    }
}

impl From<String> for ContentNode {
    fn from(s: String) -> Self {
        ContentNode::new(ContentValue::String(s))
    }
}

impl From<i64> for ContentNode {
    fn from(i: i64) -> Self {
        ContentNode::new(ContentValue::Number(ContentNumber::Integer(i)))
    }
}

impl From<i32> for ContentNode {
    fn from(i: i32) -> Self {
        ContentNode::from(i64::from(i))
    }
}

impl From<f64> for ContentNode {
    fn from(f: f64) -> Self {
        ContentNode::new(ContentValue::Number(ContentNumber::Float(f)))
    }
}

impl From<bool> for ContentNode {
    fn from(b: bool) -> Self {
        ContentNode::new(ContentValue::Boolean(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display() {
        assert_eq!(format!("{}", ContentNumber::Integer(42)), "42");
        assert_eq!(format!("{}", ContentNumber::Float(42.5)), "42.5");
        assert_eq!(format!("{}", ContentNumber::Unsigned(u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn test_number_is_integer() {
        assert!(ContentNumber::Integer(-3).is_integer());
        assert!(ContentNumber::Unsigned(u64::MAX).is_integer());
        assert!(!ContentNumber::Float(3.0).is_integer());
    }

    #[test]
    fn test_clone_shares_node() {
        let node = ContentNode::array(vec![ContentNode::from(1), ContentNode::from(2)]);
        let copy = node.clone();
        assert!(ContentNode::ptr_eq(&node, &copy));
    }

    #[test]
    fn test_equal_values_are_distinct_nodes() {
        let a = ContentNode::from("pantai");
        let b = ContentNode::from("pantai");
        assert_eq!(a, b);
        assert!(!ContentNode::ptr_eq(&a, &b));
    }

    #[test]
    fn test_object_preserves_insertion_order() {
        let node = ContentNode::object([
            ("zeta".to_string(), ContentNode::from(1)),
            ("alpha".to_string(), ContentNode::from(2)),
        ]);
        if let ContentValue::Object(entries) = node.value() {
            let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["zeta", "alpha"]);
        } else {
            panic!("Expected object");
        }
    }

    #[test]
    fn test_lookups() {
        let node = ContentNode::object([(
            "missions".to_string(),
            ContentNode::array(vec![ContentNode::from("x")]),
        )]);
        let missions = node.get("missions").unwrap();
        assert_eq!(missions.len(), 1);
        assert_eq!(missions.get_index(0).and_then(|n| n.as_str()), Some("x"));
        assert!(node.get("absent").is_none());
        assert!(missions.get("missions").is_none());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(ContentValue::Null.type_name(), "null");
        assert_eq!(ContentNode::from(true).value().type_name(), "boolean");
        assert_eq!(ContentNode::empty_object().value().type_name(), "object");
    }
}
