//! Tree index over flow records using petgraph::DiGraph

use std::collections::{HashMap, HashSet};

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Dfs, EdgeRef};
use tracing::warn;

use crate::error::{FlowError, Result};
use crate::model::{FlowEdge, FlowNode};
use crate::path::ROOT;

/// Adjacency over a node/edge record set.
///
/// Node weights are positions in the node slice, edge weights positions in the
/// edge slice, so emission order survives petgraph's own adjacency order.
pub struct FlowGraph {
    inner: DiGraph<usize, usize>,
    index: HashMap<String, NodeIndex>,
    ids: Vec<String>,
    dangling: Vec<String>,
    duplicates: Vec<String>,
}

impl std::fmt::Debug for FlowGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowGraph")
            .field("node_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .finish()
    }
}

impl FlowGraph {
    pub fn from_records(nodes: &[FlowNode], edges: &[FlowEdge]) -> Self {
        let mut inner = DiGraph::with_capacity(nodes.len(), edges.len());
        let mut index = HashMap::with_capacity(nodes.len());
        let mut ids = Vec::with_capacity(nodes.len());
        let mut duplicates = Vec::new();

        for (pos, node) in nodes.iter().enumerate() {
            if index.contains_key(&node.id) {
                warn!("Skipping duplicate node {}", node.id);
                duplicates.push(node.id.clone());
                continue;
            }
            let idx = inner.add_node(pos);
            index.insert(node.id.clone(), idx);
            ids.push(node.id.clone());
        }

        let mut dangling = Vec::new();
        for (pos, edge) in edges.iter().enumerate() {
            match (index.get(&edge.source), index.get(&edge.target)) {
                (Some(&source), Some(&target)) => {
                    inner.add_edge(source, target, pos);
                }
                _ => {
                    warn!("Skipping edge {} with unknown endpoint", edge.id);
                    dangling.push(edge.id.clone());
                }
            }
        }

        FlowGraph {
            inner,
            index,
            ids,
            dangling,
            duplicates,
        }
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn root(&self) -> Option<NodeIndex> {
        self.index_of(ROOT)
    }

    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn id(&self, idx: NodeIndex) -> &str {
        &self.ids[idx.index()]
    }

    /// Position of the node in the slice the graph was built from.
    pub fn record(&self, idx: NodeIndex) -> usize {
        self.inner[idx]
    }

    /// Targets of outgoing edges, in edge emission order.
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut out: Vec<(usize, NodeIndex)> = self
            .inner
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (*e.weight(), e.target()))
            .collect();
        out.sort_unstable_by_key(|(pos, _)| *pos);
        out.into_iter().map(|(_, target)| target).collect()
    }

    /// Source of the first emitted edge pointing at `idx`.
    pub fn parent(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.inner
            .edges_directed(idx, Direction::Incoming)
            .min_by_key(|e| *e.weight())
            .map(|e| e.source())
    }

    /// Ids of every node above `id`, following parent links.
    pub fn ancestors(&self, id: &str) -> HashSet<String> {
        let mut ancestors = HashSet::new();
        let Some(mut current) = self.index_of(id) else {
            return ancestors;
        };

        while let Some(parent) = self.parent(current) {
            if !ancestors.insert(self.id(parent).to_string()) {
                break;
            }
            current = parent;
        }
        ancestors.remove(id);
        ancestors
    }

    /// Check the records form a single tree rooted at `$`.
    pub fn validate(&self) -> Result<()> {
        if let Some(id) = self.duplicates.first() {
            return Err(FlowError::DuplicateNode { id: id.clone() });
        }
        let root = self.root().ok_or(FlowError::MissingRoot)?;
        if let Some(edge) = self.dangling.first() {
            return Err(FlowError::UnknownEndpoint { edge: edge.clone() });
        }
        for idx in self.inner.node_indices() {
            if self.inner.edges_directed(idx, Direction::Incoming).count() > 1 {
                return Err(FlowError::MultipleParents {
                    id: self.id(idx).to_string(),
                });
            }
        }
        if petgraph::algo::is_cyclic_directed(&self.inner) {
            return Err(FlowError::Cycle);
        }

        let mut reached = vec![false; self.inner.node_count()];
        let mut dfs = Dfs::new(&self.inner, root);
        while let Some(idx) = dfs.next(&self.inner) {
            reached[idx.index()] = true;
        }
        if let Some(pos) = reached.iter().position(|r| !r) {
            return Err(FlowError::Unreachable {
                id: self.ids[pos].clone(),
            });
        }
        Ok(())
    }
}
