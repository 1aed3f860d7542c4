/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Linear undo/redo over reversible change records.
//!
//! Each record snapshots one node-level mutation with enough prior
//! state to reverse it exactly, including the collection indexes of the
//! subject node and any removed edges. Undo and redo re-capture live
//! state as they apply, pushing the inverted record onto the opposite
//! stack, so a full undo/redo cycle restores the store bit-for-bit.

use log::{debug, warn};

use crate::graph::{Edge, Graph, Node, NodeId};

/// What a change record describes. Node-level today; edge-level kinds
/// would slot in alongside these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// A node was appended to the store.
    Add,

    /// A node's fields were rewritten in place.
    Update,

    /// A node and its incident edges were removed.
    Delete,
}

/// Immutable description of one applied mutation.
///
/// For `Add` the snapshot is the node as inserted; for `Update` it is
/// the node as it existed before the patch; for `Delete` it is the
/// removed node plus every incident edge, with pre-removal indexes.
/// Records are never mutated after being pushed — inversion builds a
/// fresh record from live state instead.
#[derive(Debug, Clone)]
pub struct ChangeRecord {
    kind: ChangeKind,
    node: Node,
    node_index: usize,
    edges: Vec<(usize, Edge)>,
}

impl ChangeRecord {
    /// Record a node appended at `index`.
    pub(crate) fn added(node: Node, index: usize) -> Self {
        Self {
            kind: ChangeKind::Add,
            node,
            node_index: index,
            edges: Vec::new(),
        }
    }

    /// Record a node's pre-patch state at `index`.
    pub(crate) fn updated(before: Node, index: usize) -> Self {
        Self {
            kind: ChangeKind::Update,
            node: before,
            node_index: index,
            edges: Vec::new(),
        }
    }

    /// Record a removed node at `index` with its incident edges.
    /// `edges` carry pre-removal collection indexes in ascending order.
    pub(crate) fn deleted(node: Node, index: usize, edges: Vec<(usize, Edge)>) -> Self {
        Self {
            kind: ChangeKind::Delete,
            node,
            node_index: index,
            edges,
        }
    }

    /// What this record describes.
    pub fn kind(&self) -> ChangeKind {
        self.kind
    }

    /// Identity of the subject node.
    pub fn subject(&self) -> NodeId {
        self.node.id
    }
}

/// Undo/redo stacks over a strictly linear timeline.
///
/// A new recorded action clears the redo stack — undoing and then
/// acting discards the previously-undone future, never branches it.
#[derive(Debug, Default)]
pub struct HistoryManager {
    undo_stack: Vec<ChangeRecord>,
    redo_stack: Vec<ChangeRecord>,
    limit: Option<usize>,
}

impl HistoryManager {
    /// Unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// History capped at `limit` entries; the oldest are discarded
    /// first once the cap is exceeded.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Append a record for a freshly applied mutation.
    pub(crate) fn record(&mut self, record: ChangeRecord) {
        self.undo_stack.push(record);
        self.redo_stack.clear();
        if let Some(limit) = self.limit
            && self.undo_stack.len() > limit
        {
            let excess = self.undo_stack.len() - limit;
            self.undo_stack.drain(0..excess);
        }
    }

    /// Reverse the most recent change. Returns `false` when there is
    /// nothing to undo.
    pub fn undo(&mut self, graph: &mut Graph) -> bool {
        let Some(record) = self.undo_stack.pop() else {
            debug!("undo requested with empty history");
            return false;
        };
        let inverted = match record.kind {
            ChangeKind::Add => detach_subject(record, graph),
            ChangeKind::Delete => Some(restore_subject(record, graph)),
            ChangeKind::Update => swap_subject(record, graph),
        };
        match inverted {
            Some(inverted) => {
                self.redo_stack.push(inverted);
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone change. Returns `false` when
    /// there is nothing to redo.
    pub fn redo(&mut self, graph: &mut Graph) -> bool {
        let Some(record) = self.redo_stack.pop() else {
            debug!("redo requested with empty history");
            return false;
        };
        let inverted = match record.kind {
            ChangeKind::Add => Some(restore_subject(record, graph)),
            ChangeKind::Delete => detach_subject(record, graph),
            ChangeKind::Update => swap_subject(record, graph),
        };
        match inverted {
            Some(inverted) => {
                self.undo_stack.push(inverted);
                true
            }
            None => false,
        }
    }

    /// Depth of the undo stack.
    pub fn undo_stack_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Depth of the redo stack.
    pub fn redo_stack_len(&self) -> usize {
        self.redo_stack.len()
    }
}

/// Remove the record's subject node and its incident edges from the
/// live graph, capturing their current state and positions for the
/// opposite stack. `None` means the subject has vanished — an internal
/// invariant breach, since every path that drops a node clears or
/// rewrites the history that mentions it.
fn detach_subject(record: ChangeRecord, graph: &mut Graph) -> Option<ChangeRecord> {
    if !graph.contains_node(record.node.id) {
        warn!("history subject {} no longer in store", record.node.id);
        return None;
    }
    let edges = graph.remove_incident_edges(record.node.id);
    let (index, node) = graph.remove_node(record.node.id)?;
    Some(ChangeRecord {
        kind: record.kind,
        node,
        node_index: index,
        edges,
    })
}

/// Reinsert the record's subject node and edges at their recorded
/// collection indexes. Ascending insertion order reproduces the
/// original layout exactly.
fn restore_subject(record: ChangeRecord, graph: &mut Graph) -> ChangeRecord {
    graph.insert_node_at(record.node_index, record.node.clone());
    for (index, edge) in &record.edges {
        graph.insert_edge_at(*index, edge.clone());
    }
    record
}

/// Exchange the record's node snapshot with the live node's fields.
/// Update inversion is its own inverse, so undo and redo share it.
fn swap_subject(record: ChangeRecord, graph: &mut Graph) -> Option<ChangeRecord> {
    let Some(node) = graph.get_node_mut(record.node.id) else {
        warn!("history subject {} no longer in store", record.node.id);
        return None;
    };
    let other = std::mem::replace(node, record.node);
    Some(ChangeRecord {
        kind: record.kind,
        node: other,
        node_index: record.node_index,
        edges: record.edges,
    })
}
