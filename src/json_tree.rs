//! Tree model for structured message bodies.
//!
//! A parsed JSON value is turned into a tree of [`JsonNode`]s, each carrying
//! its namespace path (root name first) and whether it starts expanded.
//! The view in `ui::json_view` only draws what this module decides.

use serde_json::Value;

/// Name of the root node's namespace entry.
pub const ROOT_NAME: &str = "root";

/// Containers whose namespace path is longer than this start collapsed.
pub const COLLAPSE_NAMESPACE_LEN: usize = 1;

/// Default collapse rule: only the root is expanded.
pub fn should_collapse(namespace: &[String]) -> bool {
    namespace.len() > COLLAPSE_NAMESPACE_LEN
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKey {
    Field(String),
    Index(usize),
}

impl NodeKey {
    pub fn label(&self) -> String {
        match self {
            NodeKey::Field(name) => name.clone(),
            NodeKey::Index(i) => i.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafKind {
    String,
    Integer,
    Float,
    Boolean,
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    Leaf { text: String, kind: LeafKind },
    Object(Vec<JsonNode>),
    Array(Vec<JsonNode>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsonNode {
    /// `None` only for the root.
    pub key: Option<NodeKey>,
    /// Path from the root, root name included.
    pub namespace: Vec<String>,
    pub value: NodeValue,
    /// Initial expansion state for containers. Always false for leaves.
    pub default_open: bool,
}

impl JsonNode {
    pub fn is_container(&self) -> bool {
        !matches!(self.value, NodeValue::Leaf { .. })
    }

    pub fn children(&self) -> &[JsonNode] {
        match &self.value {
            NodeValue::Object(children) | NodeValue::Array(children) => children.as_slice(),
            NodeValue::Leaf { .. } => &[],
        }
    }

    /// Header text for a container: opening bracket and item count.
    pub fn summary(&self) -> String {
        let (bracket, len) = match &self.value {
            NodeValue::Object(children) => ("{", children.len()),
            NodeValue::Array(children) => ("[", children.len()),
            NodeValue::Leaf { text, .. } => return text.clone(),
        };
        let noun = if len == 1 { "item" } else { "items" };
        format!("{bracket} {len} {noun}")
    }

    /// Stable id for egui memory, unique within one tree.
    pub fn id_path(&self) -> String {
        self.namespace.join("\u{1f}")
    }
}

/// Build the display tree for a parsed body.
pub fn build_tree(value: &Value) -> JsonNode {
    build_node(None, vec![ROOT_NAME.to_string()], value)
}

fn build_node(key: Option<NodeKey>, namespace: Vec<String>, value: &Value) -> JsonNode {
    let node_value = match value {
        Value::Object(map) => NodeValue::Object(
            map.iter()
                .map(|(name, child)| {
                    let mut ns = namespace.clone();
                    ns.push(name.clone());
                    build_node(Some(NodeKey::Field(name.clone())), ns, child)
                })
                .collect(),
        ),
        Value::Array(items) => NodeValue::Array(
            items
                .iter()
                .enumerate()
                .map(|(i, child)| {
                    let mut ns = namespace.clone();
                    ns.push(i.to_string());
                    build_node(Some(NodeKey::Index(i)), ns, child)
                })
                .collect(),
        ),
        leaf => {
            let (text, kind) = leaf_text(leaf);
            NodeValue::Leaf { text, kind }
        }
    };

    let default_open =
        !matches!(node_value, NodeValue::Leaf { .. }) && !should_collapse(&namespace);

    JsonNode {
        key,
        namespace,
        value: node_value,
        default_open,
    }
}

fn leaf_text(value: &Value) -> (String, LeafKind) {
    match value {
        // Quoted, with JSON escapes
        Value::String(_) => (value.to_string(), LeafKind::String),
        Value::Number(n) if n.is_f64() => (
            n.as_f64().map_or_else(|| n.to_string(), format_float),
            LeafKind::Float,
        ),
        Value::Number(n) => (n.to_string(), LeafKind::Integer),
        Value::Bool(b) => (b.to_string(), LeafKind::Boolean),
        Value::Null => ("null".to_string(), LeafKind::Null),
        // Containers never reach here
        Value::Object(_) | Value::Array(_) => (value.to_string(), LeafKind::String),
    }
}

/// Shortest decimal form, integral floats without a fraction (`1.0` -> `1`).
fn format_float(f: f64) -> String {
    if f == 0.0 {
        // Covers -0.0
        return "0".to_string();
    }
    f.to_string()
}
