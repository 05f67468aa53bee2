//! Query/result types: the search's inputs ([`Query`], [`Filters`]) and
//! outputs ([`Route`], [`Routes`]), plus per-contact search state
//! ([`Label`]) — spec §3.

use serde::Serialize;

use crate::types::{Bytes, ContactId, NodeId, Seconds};

/// A routing request: where from, where to, when, how much, and how long
/// the answer remains useful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    pub src: NodeId,
    pub dst: NodeId,
    /// Departure time, in absolute seconds.
    pub t0: Seconds,
    /// Bundle size, in bytes. Must be `> 0`.
    pub bundle_bytes: Bytes,
    /// Relative expiry from `t0`. `0.0` means "no expiry".
    pub expiry: Seconds,
}

impl Query {
    /// The absolute expiry deadline, or `0.0` if unconstrained — the form
    /// the ETA kernel expects (spec §4.3).
    #[inline]
    pub fn expiry_abs(&self) -> Seconds {
        if self.expiry > 0.0 { self.t0 + self.expiry } else { 0.0 }
    }

    /// Whether this query is well-formed enough to search at all (spec
    /// §4.4.6, §7): a non-negative, in-range-eligible source/destination and
    /// a strictly positive bundle size. Node-range validity against a
    /// specific contact set is checked separately by the caller (the
    /// search entry points reject out-of-range nodes before seeding).
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.src >= 0 && self.dst >= 0 && self.bundle_bytes > 0.0
    }
}

/// Optional search constraints: banned contact ids and/or a forced prefix
/// (spec §3, §4.4.2).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    /// Contact ids invisible to the search, both at seeding and expansion.
    pub banned: Vec<ContactId>,
    /// An ordered sequence of contact ids the route must begin with,
    /// starting at the source node.
    pub forced_prefix: Vec<ContactId>,
}

impl Filters {
    /// No constraints at all.
    pub fn none() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_banned(&self, id: ContactId) -> bool {
        self.banned.contains(&id)
    }

    #[inline]
    pub fn has_forced_prefix(&self) -> bool {
        !self.forced_prefix.is_empty()
    }
}

/// Per-contact search state: the best ETA seen at the tail of that contact,
/// and the predecessor contact index for path reconstruction (spec §3).
///
/// Labels are monotonically improving: overwritten only by a strictly
/// smaller ETA, beyond [`crate::types::EPS_T`] (spec §3, §9).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label {
    pub eta: Seconds,
    pub prev: Option<usize>,
}

impl Label {
    pub const UNSET: Label = Label { eta: Seconds::INFINITY, prev: None };
}

/// A single routing result: an ordered sequence of contact ids, its hop
/// count, final ETA, and whether a route was found at all (spec §3).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta: Option<Seconds>,
    pub contacts: Vec<ContactId>,
}

impl Route {
    /// The canonical "no route" result.
    pub fn not_found() -> Self {
        Self { found: false, eta: None, contacts: Vec::new() }
    }

    /// A found route over the given contact id sequence, with a final ETA.
    pub fn found(contacts: Vec<ContactId>, eta: Seconds) -> Self {
        Self { found: true, eta: Some(eta), contacts }
    }

    #[inline]
    pub fn hops(&self) -> usize {
        self.contacts.len()
    }
}

/// Up to K [`Route`]s, in discovery order (first = globally optimal) —
/// spec §3.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Routes {
    pub routes: Vec<Route>,
}

impl Routes {
    pub fn empty() -> Self {
        Self { routes: Vec::new() }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether `candidate`'s ordered contact-id sequence already appears in
    /// this result set. Comparison is hop-count equality followed by
    /// element-wise id equality (spec §4.4.4).
    pub fn contains_sequence(&self, candidate: &[ContactId]) -> bool {
        self.routes.iter().any(|r| r.contacts.as_slice() == candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_zero_is_unconstrained() {
        let q = Query { src: 0, dst: 1, t0: 10.0, bundle_bytes: 1.0, expiry: 0.0 };
        assert_eq!(q.expiry_abs(), 0.0);
    }

    #[test]
    fn expiry_is_relative_to_t0() {
        let q = Query { src: 0, dst: 1, t0: 10.0, bundle_bytes: 1.0, expiry: 5.0 };
        assert_eq!(q.expiry_abs(), 15.0);
    }

    #[test]
    fn non_positive_bundle_is_not_well_formed() {
        let q = Query { src: 0, dst: 1, t0: 0.0, bundle_bytes: 0.0, expiry: 0.0 };
        assert!(!q.is_well_formed());
    }

    #[test]
    fn routes_dedup_is_global_not_adjacent_only() {
        let mut rs = Routes::empty();
        rs.routes.push(Route::found(vec![1, 2], 5.0));
        rs.routes.push(Route::found(vec![1, 3], 6.0));
        assert!(rs.contains_sequence(&[1, 2]));
        assert!(!rs.contains_sequence(&[1, 2, 3]));
    }
}
