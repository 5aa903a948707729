//! JSON value → nodes and edges

use serde_json::Value;
use tracing::debug;

use crate::model::{Flow, FlowEdge, FlowNode, NodeKind, Position};
use crate::path::{self, ChildKey, ROOT};

/// Pending visit: a value plus the edge that reaches it.
struct Visit<'a> {
    value: &'a Value,
    path: String,
    key: Option<ChildKey<'a>>,
    parent: Option<String>,
}

/// Walk `value` and emit one node per value and one edge per parent → child link.
///
/// Nodes come out in pre-order; each edge is emitted right before the node it
/// points to. The walk keeps its own stack, so nesting depth is bounded by
/// memory rather than the call stack.
pub fn build(value: &Value) -> Flow {
    let mut flow = Flow::new();
    let mut stack = vec![Visit {
        value,
        path: ROOT.to_string(),
        key: None,
        parent: None,
    }];

    while let Some(visit) = stack.pop() {
        if let (Some(parent), Some(key)) = (&visit.parent, visit.key) {
            flow.edges.push(FlowEdge::new(parent, &visit.path, key.label()));
        }
        flow.nodes.push(make_node(visit.value, &visit.path, visit.key));

        // Children are pushed in reverse so they pop in document order.
        match visit.value {
            Value::Object(map) => {
                for (k, v) in map.iter().rev() {
                    let key = ChildKey::Key(k);
                    stack.push(Visit {
                        value: v,
                        path: path::child_path(&visit.path, key),
                        key: Some(key),
                        parent: Some(visit.path.clone()),
                    });
                }
            }
            Value::Array(items) => {
                for (idx, v) in items.iter().enumerate().rev() {
                    let key = ChildKey::Index(idx);
                    stack.push(Visit {
                        value: v,
                        path: path::child_path(&visit.path, key),
                        key: Some(key),
                        parent: Some(visit.path.clone()),
                    });
                }
            }
            _ => {}
        }
    }

    debug!("Built {} nodes, {} edges", flow.nodes.len(), flow.edges.len());
    flow
}

/// Make sure the flow carries a root record labelled `$`.
pub fn ensure_root(flow: &mut Flow, value: &Value) {
    match flow.nodes.iter_mut().find(|n| n.id == ROOT) {
        Some(root) => root.label = ROOT.to_string(),
        None => {
            let kind = NodeKind::of(value);
            flow.nodes.insert(
                0,
                FlowNode {
                    id: ROOT.to_string(),
                    kind,
                    name: ROOT.to_string(),
                    label: ROOT.to_string(),
                    tooltip: String::new(),
                    meta: meta_of(value),
                    value_text: String::new(),
                    position: Position::default(),
                },
            );
        }
    }
}

fn make_node(value: &Value, path: &str, key: Option<ChildKey<'_>>) -> FlowNode {
    let kind = NodeKind::of(value);
    let value_text = match kind {
        NodeKind::Primitive => value.to_string(),
        _ => String::new(),
    };
    let tooltip = match value {
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => kind.as_str().to_string(),
        other => other.to_string(),
    };

    FlowNode {
        id: path.to_string(),
        kind,
        name: key.map_or_else(|| ROOT.to_string(), |k| k.name()),
        label: label_of(key, value),
        tooltip,
        meta: meta_of(value),
        value_text,
        position: Position::default(),
    }
}

fn label_of(key: Option<ChildKey<'_>>, value: &Value) -> String {
    let key = key.map(|k| k.label());
    match (key, value) {
        (Some(k), Value::Object(_)) => format!("{k} {{}}"),
        (Some(k), Value::Array(_)) => format!("{k} []"),
        (Some(k), v) => format!("{k}: {v}"),
        (None, Value::Object(_)) => "{}".to_string(),
        (None, Value::Array(_)) => "[]".to_string(),
        (None, Value::String(s)) => s.clone(),
        (None, v) => v.to_string(),
    }
}

fn meta_of(value: &Value) -> String {
    match value {
        Value::Object(map) => format!("{} keys", map.len()),
        Value::Array(items) => format!("{} items", items.len()),
        Value::String(_) => "string".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Null => "null".to_string(),
    }
}
