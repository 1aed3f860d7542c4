/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Application core for the workflow editor: the single write path for
//! graph mutations, the context-command dispatcher, and the undo/redo
//! wiring.
//!
//! All mutations run synchronously in response to discrete events; one
//! handler completes before the next is dispatched, so the graph,
//! session, and history need no locking.

use euclid::default::Point2D;
use log::{debug, warn};

use crate::graph::{Edge, EdgeId, Graph, Node, NodeId, NodeLabel, NodePatch};
use crate::history::{ChangeRecord, HistoryManager};
use crate::session::EditSession;

/// Offset applied to a duplicated node on both axes, in canvas units.
const DUPLICATE_OFFSET: f32 = 50.0;

/// User intents surfaced by the context menu and keyboard shortcuts.
///
/// Anchors position the menu surface only; they never affect graph
/// semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkflowIntent {
    DuplicateNode { anchor: Point2D<f32> },
    EditNode { anchor: Point2D<f32> },
    DeleteNode { anchor: Point2D<f32> },
    Undo,
    Redo,
}

/// Holds the canonical graph plus the edit session and history stacks,
/// and owns every mutation applied to them.
#[derive(Debug, Default)]
pub struct WorkflowApp {
    graph: Graph,
    session: EditSession,
    history: HistoryManager,
    /// Node the context surface last targeted; commands act on it.
    context_target: Option<NodeId>,
}

impl WorkflowApp {
    /// Empty editor with unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty editor whose history keeps at most `limit` entries,
    /// discarding the oldest first.
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            history: HistoryManager::with_limit(limit),
            ..Self::default()
        }
    }

    /// The current validated graph, for the rendering layer.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The edit session, for the edit surface.
    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Depth of the undo stack.
    pub fn undo_stack_len(&self) -> usize {
        self.history.undo_stack_len()
    }

    /// Depth of the redo stack.
    pub fn redo_stack_len(&self) -> usize {
        self.history.redo_stack_len()
    }

    /// Current explicit node target for context-surface commands.
    pub fn context_target(&self) -> Option<NodeId> {
        self.context_target
    }

    /// Set or clear the node target for context-surface commands.
    pub fn set_context_target(&mut self, target: Option<NodeId>) {
        self.context_target = target;
    }

    /// Dispatch one context-surface intent.
    pub fn handle_intent(&mut self, intent: WorkflowIntent) {
        match intent {
            WorkflowIntent::DuplicateNode { anchor } => {
                debug!("context duplicate anchored at {:?}", anchor);
                let _ = self.duplicate_node();
            }
            WorkflowIntent::EditNode { anchor } => {
                debug!("context edit anchored at {:?}", anchor);
                let _ = self.edit_node();
            }
            WorkflowIntent::DeleteNode { anchor } => {
                debug!("context delete anchored at {:?}", anchor);
                let _ = self.delete_node();
            }
            WorkflowIntent::Undo => {
                let _ = self.undo();
            }
            WorkflowIntent::Redo => {
                let _ = self.redo();
            }
        }
    }

    /// Append a fresh node (toolbar/canvas creation path). Records an
    /// add entry.
    pub fn add_node(&mut self, label: NodeLabel, position: Point2D<f32>) -> NodeId {
        let node = Node::create(label, position);
        let record = ChangeRecord::added(node.clone(), self.graph.node_count());
        let id = self.graph.insert_node(node);
        self.commit(record);
        id
    }

    /// Connect two nodes (canvas connect path). Returns `None` when
    /// either endpoint is missing. Edge creation is not recorded in
    /// history; change records are node-scoped today.
    pub fn connect(&mut self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        let id = self.graph.insert_edge(Edge::create(source, target));
        if id.is_none() {
            debug!("connect refused: endpoint missing");
        }
        id
    }

    /// Duplicate the context-target node: same label, position offset
    /// by a fixed delta, fresh identity, default fields. Missing target
    /// is a silent no-op.
    pub fn duplicate_node(&mut self) -> Option<NodeId> {
        let target = self.context_target?;
        let Some(original) = self.graph.get_node(target) else {
            debug!("duplicate requested for missing node {target}");
            return None;
        };
        let position = Point2D::new(
            original.position.x + DUPLICATE_OFFSET,
            original.position.y + DUPLICATE_OFFSET,
        );
        let copy = Node::create(original.label, position);
        let record = ChangeRecord::added(copy.clone(), self.graph.node_count());
        let id = self.graph.insert_node(copy);
        self.commit(record);
        Some(id)
    }

    /// Delete the context-target node and its edges. Edges originating
    /// at the target are removed here; edges merely terminating at it
    /// are swept by the validator pass inside the commit (two-phase
    /// cleanup). The record captures all of them for undo. Missing
    /// target is a no-op.
    pub fn delete_node(&mut self) -> bool {
        let Some(target) = self.context_target else {
            return false;
        };
        if !self.graph.contains_node(target) {
            debug!("delete requested for missing node {target}");
            return false;
        }

        let incident = self.graph.incident_edges(target);
        let outgoing = self.graph.remove_edges_from(target);
        debug!("delete removed {} outgoing edges", outgoing.len());
        let Some((index, node)) = self.graph.remove_node(target) else {
            // Presence was checked above; reaching here means the store
            // lost the node mid-handler.
            warn!("delete target {target} vanished during removal");
            return false;
        };

        self.commit(ChangeRecord::deleted(node, index, incident));
        self.context_target = None;
        true
    }

    /// Open the edit session over the context-target node. No graph
    /// mutation and no history entry; the commit path does both.
    /// Missing target is a no-op.
    pub fn edit_node(&mut self) -> bool {
        let Some(target) = self.context_target else {
            return false;
        };
        if !self.graph.contains_node(target) {
            debug!("edit requested for missing node {target}");
            return false;
        }
        self.session.open(target);
        true
    }

    /// Apply the edit surface's field patch to the session target,
    /// recording the pre-patch node for undo, and return the session to
    /// idle. A target deleted while the surface was open degrades to a
    /// cancel: no mutation, no record.
    pub fn commit_edit(&mut self, patch: &NodePatch) -> bool {
        let Some(target) = self.session.target() else {
            debug!("edit commit with no open session");
            return false;
        };
        let Some(index) = self.graph.node_index(target) else {
            debug!("edit commit for missing node {target}; treating as cancel");
            self.session.close();
            return false;
        };
        let Some(node) = self.graph.get_node_mut(target) else {
            return false;
        };

        let before = node.clone();
        patch.apply_to(node);
        self.commit(ChangeRecord::updated(before, index));
        self.session.close();
        true
    }

    /// Close the edit session, discarding any pending (unsaved) edit.
    pub fn cancel_edit(&mut self) {
        self.session.close();
    }

    /// Reverse the most recent recorded mutation. Returns `false` when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.history.undo(&mut self.graph) {
            return false;
        }
        self.graph.validate_in_place();
        true
    }

    /// Re-apply the most recently undone mutation. Returns `false` when
    /// there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.history.redo(&mut self.graph) {
            return false;
        }
        self.graph.validate_in_place();
        true
    }

    /// Mutation chokepoint: every reversible change passes through
    /// here, so each one re-validates the store and produces exactly
    /// one history entry.
    fn commit(&mut self, record: ChangeRecord) {
        self.graph.validate_in_place();
        self.history.record(record);
    }
}
