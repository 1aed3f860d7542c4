/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Pure structural repair for candidate graphs.
//!
//! `validate` restores the edge-integrity invariant after a mutation:
//! every surviving edge resolves both endpoints, and edge identifiers
//! are unique. It never removes or alters a node.

use std::collections::HashSet;

use super::{Edge, EdgeId, Node, NodeId};

/// Repair a candidate node/edge pair.
///
/// Drops any edge whose `source` or `target` does not resolve to a node
/// in `nodes`, and any edge whose identifier duplicates an earlier
/// edge's (first occurrence wins). Nodes pass through untouched, and
/// collection order is preserved on both sides.
///
/// Idempotent: a second pass over the result changes nothing.
pub fn validate(nodes: Vec<Node>, edges: Vec<Edge>) -> (Vec<Node>, Vec<Edge>) {
    let ids: HashSet<NodeId> = nodes.iter().map(|node| node.id).collect();
    let mut seen: HashSet<EdgeId> = HashSet::with_capacity(edges.len());
    let edges = edges
        .into_iter()
        .filter(|edge| {
            ids.contains(&edge.source) && ids.contains(&edge.target) && seen.insert(edge.id)
        })
        .collect();
    (nodes, edges)
}
