//! Scheduled link windows between nodes — the vertices of the contact graph.

use crate::types::{BitsPerSecond, Bytes, ContactId, NodeId, Seconds};

/// A scheduled unidirectional link window between two nodes.
///
/// Every field here is load-bearing for the ETA kernel (see [`crate::eta`]);
/// `residual_bytes` is the only field mutated after construction, and only
/// by the capacity-consuming K-routes search operating on its own private
/// clone of the contact set (spec §3, §4.4.3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Stable integer identifier, unique within a contact set, reported in
    /// results.
    pub id: ContactId,
    /// Sending node.
    pub from: NodeId,
    /// Receiving node.
    pub to: NodeId,
    /// Start of the window (absolute seconds).
    pub t_start: Seconds,
    /// End of the window (absolute seconds). Must satisfy `t_start <= t_end`
    /// for the contact to be usable; violations are skipped rather than
    /// rejected at construction (see [`Contact::is_well_formed`]).
    pub t_end: Seconds,
    /// One-way light time added to the finish-of-transmission time to
    /// obtain arrival at `to`.
    pub owlt: Seconds,
    /// Channel capacity, in bits per second. Values `<= 0` are treated as
    /// `1.0` everywhere the rate is consulted, guarding against
    /// divide-by-zero on pathological inputs (spec §4.3, §8).
    pub rate_bps: BitsPerSecond,
    /// Connection establishment delay added at the start of transmission.
    pub setup_s: Seconds,
    /// Remaining byte budget for this contact.
    pub residual_bytes: Bytes,
}

impl Contact {
    /// A contact is well-formed iff its window is non-empty. Malformed
    /// contacts are excluded from the neighbor index (see
    /// [`crate::neighbor_index::NeighborIndex::build`]), so the search never
    /// seeds or expands into them.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.t_start <= self.t_end
    }

    /// The rate to use in all capacity/time arithmetic: `rate_bps` clamped
    /// to a minimum of `1.0`.
    #[inline(always)]
    pub fn effective_rate(&self) -> BitsPerSecond {
        if self.rate_bps > 1.0 { self.rate_bps } else { 1.0 }
    }
}

/// An owned collection of [`Contact`]s.
///
/// A thin wrapper rather than a bare `Vec<Contact>` so call sites that need
/// "the contact set" as a single value (building a
/// [`crate::neighbor_index::NeighborIndex`], cloning for K-by-consumption)
/// read as intent rather than a raw `Vec` clone.
#[derive(Debug, Clone, Default)]
pub struct ContactSet {
    contacts: Vec<Contact>,
}

impl ContactSet {
    /// Creates a new contact set from an owned vector of contacts.
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    /// The contacts, in the order supplied at construction. Search state
    /// (labels, heap entries) is keyed by position in this slice.
    #[inline]
    pub fn as_slice(&self) -> &[Contact] {
        &self.contacts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// `1 + max(from, to)` across all contacts, i.e. the number of node-id
    /// slots the [`crate::neighbor_index::NeighborIndex`] must allocate.
    /// `0` for an empty contact set.
    pub fn node_cap(&self) -> usize {
        let mut max_node: i64 = -1;
        for c in &self.contacts {
            max_node = max_node.max(c.from).max(c.to);
        }
        if max_node < 0 { 0 } else { (max_node + 1) as usize }
    }

    /// Mutable access to the underlying contacts, used by the
    /// capacity-consuming K-routes search on its private clone (spec
    /// §4.4.3).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Contact] {
        &mut self.contacts
    }
}

impl From<Vec<Contact>> for ContactSet {
    fn from(contacts: Vec<Contact>) -> Self {
        Self::new(contacts)
    }
}
