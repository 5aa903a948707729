//! Layered tree layout: depth along x, subtree slots along y

use petgraph::graph::NodeIndex;
use tracing::{debug, warn};

use crate::config::LayoutConfig;
use crate::graph::FlowGraph;
use crate::model::{FlowEdge, FlowNode};

/// Depth, subtree size and pre-order of the tree reachable from `$`.
#[derive(Debug)]
pub struct TreeShape {
    order: Vec<NodeIndex>,
    children: Vec<Vec<NodeIndex>>,
    depth: Vec<Option<usize>>,
    size: Vec<usize>,
}

impl TreeShape {
    /// Returns `None` when the graph has no root.
    ///
    /// A node joins the tree under its first parent only, and each node is
    /// visited once, so stray extra edges or cycles cannot loop the walk.
    pub fn new(graph: &FlowGraph) -> Option<Self> {
        let root = graph.root()?;
        let n = graph.node_count();
        let mut shape = TreeShape {
            order: Vec::with_capacity(n),
            children: vec![Vec::new(); n],
            depth: vec![None; n],
            size: vec![1; n],
        };

        let mut seen = vec![false; n];
        seen[root.index()] = true;
        shape.depth[root.index()] = Some(0);
        let mut stack = vec![root];

        while let Some(idx) = stack.pop() {
            shape.order.push(idx);
            let depth = shape.depth[idx.index()].unwrap_or(0);
            let kids: Vec<NodeIndex> = graph
                .children(idx)
                .into_iter()
                .filter(|&c| !seen[c.index()] && graph.parent(c) == Some(idx))
                .collect();
            for &kid in &kids {
                seen[kid.index()] = true;
                shape.depth[kid.index()] = Some(depth + 1);
            }
            stack.extend(kids.iter().rev());
            shape.children[idx.index()] = kids;
        }

        for &idx in shape.order.iter().rev() {
            let kids = &shape.children[idx.index()];
            if !kids.is_empty() {
                let total: usize = kids.iter().map(|k| shape.size[k.index()]).sum();
                shape.size[idx.index()] = total;
            }
        }

        Some(shape)
    }

    /// Pre-order of reachable nodes.
    pub fn order(&self) -> &[NodeIndex] {
        &self.order
    }

    pub fn children(&self, idx: NodeIndex) -> &[NodeIndex] {
        &self.children[idx.index()]
    }

    /// Edges from the root; `None` for nodes outside the tree.
    pub fn depth(&self, idx: NodeIndex) -> Option<usize> {
        self.depth[idx.index()]
    }

    /// Number of leaf slots under a node (1 for a leaf).
    pub fn subtree_size(&self, idx: NodeIndex) -> usize {
        self.size[idx.index()]
    }
}

/// Assign every node reachable from `$` its position.
///
/// Each node owns a vertical band of `subtree_size * slot_height` starting at
/// the band start handed down by its parent; siblings' bands follow each other
/// without gaps, and a node sits centred on its band. Positions depend only on
/// topology, so running this twice gives the same result.
pub fn apply_layout(nodes: &mut [FlowNode], edges: &[FlowEdge], config: &LayoutConfig) {
    let graph = FlowGraph::from_records(nodes, edges);
    let Some(shape) = TreeShape::new(&graph) else {
        warn!("No root node; leaving positions untouched");
        return;
    };

    let slot = config.slot_height();
    let mut band_start = vec![0.0_f64; graph.node_count()];

    for &idx in shape.order() {
        let start = band_start[idx.index()];
        let size = shape.subtree_size(idx) as f64;
        let depth = shape.depth(idx).unwrap_or(0) as f64;

        let node = &mut nodes[graph.record(idx)];
        node.position.x = depth * config.horizontal_spacing;
        node.position.y =
            start + (size * slot - config.vertical_gap) / 2.0 - config.node_height / 2.0;

        let mut cursor = start;
        for &kid in shape.children(idx) {
            band_start[kid.index()] = cursor;
            cursor += shape.subtree_size(kid) as f64 * slot;
        }
    }

    let skipped = graph.node_count() - shape.order().len();
    if skipped > 0 {
        warn!("{} nodes are not reachable from the root", skipped);
    }
    debug!("Laid out {} nodes", shape.order().len());
}

/// Vertical extent `(top, bottom)` of the slots a node's subtree occupies.
pub fn vertical_band(node: &FlowNode, subtree_size: usize, config: &LayoutConfig) -> (f64, f64) {
    let center = node.position.y + config.node_height / 2.0;
    let half = (subtree_size as f64 * config.slot_height() - config.vertical_gap) / 2.0;
    (center - half, center + half)
}
