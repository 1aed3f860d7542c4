/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Graph data structures for the workflow editor.
//!
//! Core structures:
//! - `Graph`: the canonical node/edge collections (the "graph store")
//! - `Node`: one workflow step with a role label, position, and metadata
//! - `Edge`: a directed connection between two steps
//!
//! Boundary: direct mutation methods are `pub(crate)` — callers outside
//! the app's single write path are invariant violations.

use euclid::default::Point2D;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod validate;

/// Stable node identity (survives reordering and other deletions).
pub type NodeId = Uuid;

/// Stable edge identity.
pub type EdgeId = Uuid;

/// Semantic role of a workflow step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeLabel {
    /// Entry point of the workflow.
    Start,

    /// Terminal step.
    End,

    /// Unit of work.
    Task,

    /// Branch point.
    Decision,
}

/// A workflow step in the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Stable node identity.
    pub id: NodeId,

    /// Semantic role of the step.
    pub label: NodeLabel,

    /// Free-text description (e.g. "buy a coffee").
    pub name: String,

    /// Opaque duration metadata; carried through mutations, never
    /// interpreted by this core.
    pub execution_time: f64,

    /// Position in canvas space; mutated by drag interactions outside
    /// this core, or by the duplication offset inside it.
    pub position: Point2D<f32>,
}

impl Node {
    /// Node factory: a fresh node with a unique identity and default
    /// field values. Never touches the graph store.
    pub fn create(label: NodeLabel, position: Point2D<f32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label,
            name: String::new(),
            execution_time: 0.0,
            position,
        }
    }
}

/// A directed connection between two workflow steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Stable edge identity.
    pub id: EdgeId,

    /// Origin node.
    pub source: NodeId,

    /// Destination node.
    pub target: NodeId,
}

impl Edge {
    /// Fresh edge between two node identities. Endpoint existence is
    /// checked at insertion, not here.
    pub fn create(source: NodeId, target: NodeId) -> Self {
        Self {
            id: Uuid::new_v4(),
            source,
            target,
        }
    }
}

/// Partial field update supplied by the edit surface on commit.
///
/// Absent fields leave the node's current value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodePatch {
    pub label: Option<NodeLabel>,
    pub name: Option<String>,
    pub execution_time: Option<f64>,
}

impl NodePatch {
    /// Merge into an owned node, field by field.
    pub(crate) fn apply_to(&self, node: &mut Node) {
        if let Some(label) = self.label {
            node.label = label;
        }
        if let Some(name) = &self.name {
            node.name = name.clone();
        }
        if let Some(execution_time) = self.execution_time {
            node.execution_time = execution_time;
        }
    }
}

/// The canonical graph: ordered node and edge collections.
///
/// Exactly one current `Graph` lives in the store; historical state is
/// owned by the history manager as change records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // Single-write-path boundary: graph topology mutators are
    // crate-internal. Callers outside the app's mutation path are
    // invariant violations.

    /// Append a node, returning its identity.
    pub(crate) fn insert_node(&mut self, node: Node) -> NodeId {
        let id = node.id;
        self.nodes.push(node);
        id
    }

    /// Insert a node at a specific collection index (history restore
    /// path). Indexes past the end clamp to an append.
    pub(crate) fn insert_node_at(&mut self, index: usize, node: Node) {
        let index = index.min(self.nodes.len());
        self.nodes.insert(index, node);
    }

    /// Remove a node, returning its collection index and data.
    pub(crate) fn remove_node(&mut self, id: NodeId) -> Option<(usize, Node)> {
        let index = self.nodes.iter().position(|node| node.id == id)?;
        Some((index, self.nodes.remove(index)))
    }

    /// Append an edge after checking that both endpoints resolve.
    pub(crate) fn insert_edge(&mut self, edge: Edge) -> Option<EdgeId> {
        if !self.contains_node(edge.source) || !self.contains_node(edge.target) {
            return None;
        }
        let id = edge.id;
        self.edges.push(edge);
        Some(id)
    }

    /// Insert an edge at a specific collection index (history restore
    /// path). Endpoints are not re-checked here; the validator sweep
    /// after the restore keeps the invariant.
    pub(crate) fn insert_edge_at(&mut self, index: usize, edge: Edge) {
        let index = index.min(self.edges.len());
        self.edges.insert(index, edge);
    }

    /// Remove every edge originating at `id`, returning each with its
    /// pre-removal collection index.
    pub(crate) fn remove_edges_from(&mut self, id: NodeId) -> Vec<(usize, Edge)> {
        self.drain_edges(|edge| edge.source == id)
    }

    /// Remove every edge touching `id` on either endpoint, returning
    /// each with its pre-removal collection index.
    pub(crate) fn remove_incident_edges(&mut self, id: NodeId) -> Vec<(usize, Edge)> {
        self.drain_edges(|edge| edge.source == id || edge.target == id)
    }

    fn drain_edges(&mut self, mut doomed: impl FnMut(&Edge) -> bool) -> Vec<(usize, Edge)> {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.edges.len());
        for (index, edge) in std::mem::take(&mut self.edges).into_iter().enumerate() {
            if doomed(&edge) {
                removed.push((index, edge));
            } else {
                kept.push(edge);
            }
        }
        self.edges = kept;
        removed
    }

    /// Snapshot every edge touching `id`, with collection indexes, in
    /// collection order. Used to build delete records before the
    /// two-phase edge cleanup runs.
    pub(crate) fn incident_edges(&self, id: NodeId) -> Vec<(usize, Edge)> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, edge)| edge.source == id || edge.target == id)
            .map(|(index, edge)| (index, edge.clone()))
            .collect()
    }

    /// Get a mutable node by identity.
    pub(crate) fn get_node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|node| node.id == id)
    }

    /// Repair the store in place: drop edges that fail to resolve and
    /// duplicate edge identifiers. Runs inside the mutation chokepoint
    /// so consumers never observe a dangling edge.
    pub(crate) fn validate_in_place(&mut self) {
        let nodes = std::mem::take(&mut self.nodes);
        let edges = std::mem::take(&mut self.edges);
        let (nodes, edges) = validate::validate(nodes, edges);
        self.nodes = nodes;
        self.edges = edges;
    }

    /// Get a node by identity.
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Collection index of a node.
    pub fn node_index(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|node| node.id == id)
    }

    /// Whether a node with this identity exists.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|node| node.id == id)
    }

    /// The node collection, in order, for the rendering layer.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The edge collection, in order, for the rendering layer.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Whether a directed edge exists from `source` to `target`.
    pub fn has_edge_between(&self, source: NodeId, target: NodeId) -> bool {
        self.edges
            .iter()
            .any(|edge| edge.source == source && edge.target == target)
    }

    /// Count of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Count of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
