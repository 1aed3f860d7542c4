/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Single-node edit focus for the edit surface.

use crate::graph::NodeId;

/// Which node, if any, the edit surface is focused on.
///
/// Modeled as a two-state machine rather than a pair of fields so the
/// exclusivity invariant — open iff exactly one target — holds by
/// construction. The session persists for the life of the surface;
/// there is no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditSession {
    /// No node targeted, surface closed.
    #[default]
    Idle,

    /// Surface open over a single targeted node.
    Editing { target: NodeId },
}

impl EditSession {
    /// Whether the edit surface is open.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// The targeted node, when editing.
    pub fn target(&self) -> Option<NodeId> {
        match self {
            Self::Editing { target } => Some(*target),
            Self::Idle => None,
        }
    }

    /// `Idle -> Editing`, or re-target while already editing. A
    /// discarded previous target has no side effect (no implicit save).
    pub(crate) fn open(&mut self, target: NodeId) {
        *self = Self::Editing { target };
    }

    /// `Editing -> Idle` on commit or explicit cancel.
    pub(crate) fn close(&mut self) {
        *self = Self::Idle;
    }
}
