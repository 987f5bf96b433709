//! Union-find over station identifiers.

use std::collections::HashMap;

use crate::registry::StationId;

/// Path-compressed disjoint-set forest keyed by station identifier.
///
/// Stations are added lazily: the first `find` of an unseen station makes it
/// its own parent. Unions attach the second root under the first without rank
/// balancing.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parent: HashMap<StationId, StationId>,
}

impl DisjointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the representative of `node`'s set, compressing the walked path.
    pub fn find(&mut self, node: StationId) -> StationId {
        let mut root = *self.parent.entry(node).or_insert(node);
        while let Some(&parent) = self.parent.get(&root) {
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut current = node;
        while current != root {
            let next = self.parent.insert(current, root).unwrap_or(root);
            current = next;
        }

        root
    }

    /// Merge the sets containing `a` and `b`. Returns `false` if they were already joined.
    pub fn union(&mut self, a: StationId, b: StationId) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent.insert(root_b, root_a);
        true
    }

    pub fn same_set(&mut self, a: StationId, b: StationId) -> bool {
        self.find(a) == self.find(b)
    }
}
