//! JSON Flow Core — JSON → node/edge graph, tree layout, and path search

pub mod builder;
pub mod config;
pub mod error;
pub mod flow;
pub mod graph;
pub mod layout;
pub mod matcher;
pub mod model;
pub mod parse;
pub mod path;

#[cfg(test)]
mod tests;

pub use config::{FlowConfig, LayoutConfig, ServerSettings, CONFIG_FILE};
pub use error::{FlowError, Result};
pub use flow::{build_flow_from_json, build_flow_with_config, relayout};
pub use graph::FlowGraph;
pub use layout::{apply_layout, vertical_band, TreeShape};
pub use matcher::{normalize_query, resolve, resolve_with_tier, MatchTier, Resolution};
pub use model::{Flow, FlowEdge, FlowNode, NodeKind, Position};
pub use parse::{parse_json, SAMPLE_JSON};
pub use path::ROOT;
