//! Groups contacts by their `from` node for O(1) neighbor lookup during
//! search expansion (spec §4.2).

use crate::contact::ContactSet;
use crate::types::NodeId;

/// A flat, array-backed index from node id to the contacts leaving that
/// node.
///
/// Built once per contact set and borrowed read-only by every search
/// invocation — multiple concurrent searches may share one `NeighborIndex`
/// (spec §5). A flat `Vec<Vec<usize>>` rather than a `HashMap<NodeId, _>`
/// because node ids are small, dense, non-negative integers in practice
/// (spec §4.2); this also matches the C original's `by_from: IndexList*`
/// array (`original_source/cgr/include/cgr.h`).
#[derive(Debug, Clone)]
pub struct NeighborIndex {
    by_from: Vec<Vec<usize>>,
}

impl NeighborIndex {
    /// Builds the index from a contact set. O(N). Contacts whose `from` is
    /// negative or falls outside `[0, node_cap)` are silently skipped, per
    /// spec §4.2. Malformed contacts (`t_start > t_end`) are skipped too,
    /// so they are never seeded or expanded into by the search (see
    /// [`crate::contact::Contact::is_well_formed`]).
    pub fn build(contacts: &ContactSet) -> Self {
        let node_cap = contacts.node_cap();
        let mut by_from = vec![Vec::new(); node_cap];

        for (idx, contact) in contacts.as_slice().iter().enumerate() {
            if !contact.is_well_formed() {
                continue;
            }
            if contact.from < 0 {
                continue;
            }
            let from = contact.from as usize;
            if from >= node_cap {
                continue;
            }
            by_from[from].push(idx);
        }

        Self { by_from }
    }

    /// Number of node-id slots this index was built for.
    #[inline]
    pub fn node_cap(&self) -> usize {
        self.by_from.len()
    }

    /// Whether `node` falls within this index's allocated range.
    #[inline]
    pub fn contains_node(&self, node: NodeId) -> bool {
        node >= 0 && (node as usize) < self.node_cap()
    }

    /// The indices (into the contact set this index was built from) of
    /// contacts leaving `node`. Empty if `node` is out of range.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[usize] {
        if !self.contains_node(node) {
            return &[];
        }
        &self.by_from[node as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Contact;

    fn c(id: i64, from: i64, to: i64) -> Contact {
        Contact {
            id,
            from,
            to,
            t_start: 0.0,
            t_end: 1.0,
            owlt: 0.0,
            rate_bps: 1.0,
            setup_s: 0.0,
            residual_bytes: 0.0,
        }
    }

    #[test]
    fn groups_by_from_node() {
        let set = ContactSet::new(vec![c(1, 0, 1), c(2, 0, 2), c(3, 1, 2)]);
        let ni = NeighborIndex::build(&set);
        assert_eq!(ni.neighbors(0), &[0, 1]);
        assert_eq!(ni.neighbors(1), &[2]);
        assert!(ni.neighbors(2).is_empty());
    }

    #[test]
    fn skips_out_of_range_from() {
        // node_cap is driven by max(from, to) across all contacts; a
        // contact can never have an out-of-range `from` by construction of
        // node_cap, but the lookup must still be safe for queries against
        // nodes beyond node_cap.
        let set = ContactSet::new(vec![c(1, 0, 5)]);
        let ni = NeighborIndex::build(&set);
        assert!(ni.neighbors(100).is_empty());
        assert!(!ni.contains_node(100));
    }

    #[test]
    fn skips_malformed_contact() {
        let mut malformed = c(1, 0, 1);
        malformed.t_start = 10.0;
        malformed.t_end = 0.0;
        let set = ContactSet::new(vec![malformed, c(2, 0, 1)]);
        let ni = NeighborIndex::build(&set);
        assert_eq!(ni.neighbors(0), &[1]);
    }

    #[test]
    fn empty_contact_set_has_empty_index() {
        let set = ContactSet::new(vec![]);
        let ni = NeighborIndex::build(&set);
        assert_eq!(ni.node_cap(), 0);
        assert!(ni.neighbors(0).is_empty());
    }
}
