//! Entry points for the UI shell: JSON value → laid-out flow

use serde_json::Value;

use crate::builder;
use crate::config::LayoutConfig;
use crate::layout;
use crate::model::Flow;

/// Build nodes and edges for `json` and lay them out with default spacing.
pub fn build_flow_from_json(json: &Value) -> Flow {
    build_flow_with_config(json, &LayoutConfig::default())
}

pub fn build_flow_with_config(json: &Value, config: &LayoutConfig) -> Flow {
    let mut flow = builder::build(json);
    builder::ensure_root(&mut flow, json);
    layout::apply_layout(&mut flow.nodes, &flow.edges, config);
    flow
}

/// Re-run layout on a record set, e.g. one handed back by a client.
pub fn relayout(flow: &mut Flow, config: &LayoutConfig) {
    layout::apply_layout(&mut flow.nodes, &flow.edges, config);
}
