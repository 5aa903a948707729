//! Core data structures for the JSON flow graph

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Discriminates what kind of JSON value a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Object,
    Array,
    Primitive,
}

impl NodeKind {
    /// Classify a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => NodeKind::Object,
            Value::Array(_) => NodeKind::Array,
            _ => NodeKind::Primitive,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Object => "object",
            NodeKind::Array => "array",
            NodeKind::Primitive => "primitive",
        }
    }

    /// Style hook the front-end attaches to nodes of this kind.
    pub fn class_name(self) -> &'static str {
        match self {
            NodeKind::Object => "node-object",
            NodeKind::Array => "node-array",
            NodeKind::Primitive => "node-primitive",
        }
    }
}

/// Top-left corner of a node in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A single JSON value at a single tree position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlowNode {
    /// Canonical path, e.g. `$.items[0].price`.
    pub id: String,
    pub kind: NodeKind,
    /// Key or `[index]` used to reach this node, `$` for the root.
    pub name: String,
    pub label: String,
    pub tooltip: String,
    /// Child count for containers, JSON type name for primitives.
    pub meta: String,
    /// Serialized primitive value; empty for containers.
    pub value_text: String,
    #[serde(default)]
    pub position: Position,
}

/// A direct parent → child relationship.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlowEdge {
    /// `source->target`
    pub id: String,
    pub source: String,
    pub target: String,
    /// The child's key or index as text.
    pub label: String,
}

impl FlowEdge {
    pub fn new(source: &str, target: &str, label: impl Into<String>) -> Self {
        FlowEdge {
            id: format!("{source}->{target}"),
            source: source.to_string(),
            target: target.to_string(),
            label: label.into(),
        }
    }
}

/// Nodes and edges for one JSON document, in emission order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Flow {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl Flow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by canonical path.
    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn root(&self) -> Option<&FlowNode> {
        self.node(crate::path::ROOT)
    }

    /// Node ids in emission order, the order the matcher breaks ties in.
    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }
}
