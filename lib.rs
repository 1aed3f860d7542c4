/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Mutation-and-history core for the flowgraph workflow editor.
//!
//! This crate owns the canonical node/edge collections, enforces
//! structural invariants on every mutation, and provides reversible
//! editing through a linear undo/redo history. Rendering, layout, and
//! widget surfaces live outside the crate and drive it through
//! [`WorkflowApp`].
//!
//! Module map:
//! - [`graph`]: node/edge data model, the graph store, and the
//!   structural validator
//! - [`session`]: single-node edit focus state machine
//! - [`history`]: reversible change records and the undo/redo stacks
//! - [`app`]: the single write path tying the pieces together

pub mod app;
pub mod graph;
pub mod history;
pub mod session;

pub use app::{WorkflowApp, WorkflowIntent};
pub use graph::{Edge, EdgeId, Graph, Node, NodeId, NodeLabel, NodePatch};
pub use history::{ChangeKind, ChangeRecord, HistoryManager};
pub use session::EditSession;
