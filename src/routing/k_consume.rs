//! K routes by capacity consumption (spec §4.4.3).
//!
//! Models scheduling K bundles back-to-back: each found route consumes
//! `bundle_bytes` from every contact it uses, so later routes may diverge
//! or degrade. Operates on a private clone of the contact set — the
//! caller's original set is never mutated (spec §4.4.3, §5).

use crate::contact::ContactSet;
use crate::neighbor_index::NeighborIndex;
use crate::query::{Query, Routes};
use crate::types::Bytes;

use super::single::best_route;

/// Subtracts `bytes` from every contact on `route`'s path, clamped at zero
/// (spec §4.4.3, §8 invariant 6).
fn consume_capacity(contacts: &mut ContactSet, route_contact_ids: &[i64], bytes: Bytes) {
    let slice = contacts.as_mut_slice();
    for &id in route_contact_ids {
        if let Some(c) = slice.iter_mut().find(|c| c.id == id) {
            c.residual_bytes = (c.residual_bytes - bytes).max(0.0);
        }
    }
}

/// Up to `k` routes, each consuming capacity from the contacts it uses.
/// Stops early if no further route can be found. `k == 0` yields an empty
/// result with no search performed.
pub fn k_routes_by_consumption(
    contacts: &ContactSet,
    index: &NeighborIndex,
    query: &Query,
    k: usize,
) -> Routes {
    let mut out = Routes::empty();
    if k == 0 {
        return out;
    }

    let mut clone = contacts.clone();

    for _ in 0..k {
        let route = best_route(&clone, index, query);
        if !route.found {
            break;
        }
        consume_capacity(&mut clone, &route.contacts, query.bundle_bytes);
        out.routes.push(route);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Contact;

    fn c(id: i64, from: i64, to: i64, residual: f64) -> Contact {
        Contact {
            id,
            from,
            to,
            t_start: 0.0,
            t_end: 100.0,
            owlt: 1.0,
            rate_bps: 1e6,
            setup_s: 0.0,
            residual_bytes: residual,
        }
    }

    // spec §8 S5
    #[test]
    fn s5_three_bundle_capacity_yields_one_route() {
        let bundle_bytes = 1e5;
        let set = ContactSet::new(vec![c(1, 10, 20, bundle_bytes)]);
        let ni = NeighborIndex::build(&set);
        let q = Query { src: 10, dst: 20, t0: 0.0, bundle_bytes, expiry: 0.0 };

        let result = k_routes_by_consumption(&set, &ni, &q, 3);
        assert_eq!(result.len(), 1);
        assert!(result.routes[0].found);
    }

    #[test]
    fn original_contact_set_is_not_mutated() {
        let bundle_bytes = 1e5;
        let set = ContactSet::new(vec![c(1, 10, 20, bundle_bytes * 3.0)]);
        let ni = NeighborIndex::build(&set);
        let q = Query { src: 10, dst: 20, t0: 0.0, bundle_bytes, expiry: 0.0 };

        let _ = k_routes_by_consumption(&set, &ni, &q, 3);
        assert_eq!(set.as_slice()[0].residual_bytes, bundle_bytes * 3.0);
    }

    #[test]
    fn k_zero_performs_no_search() {
        let set = ContactSet::new(vec![c(1, 10, 20, 1e8)]);
        let ni = NeighborIndex::build(&set);
        let q = Query { src: 10, dst: 20, t0: 0.0, bundle_bytes: 1e5, expiry: 0.0 };
        assert!(k_routes_by_consumption(&set, &ni, &q, 0).is_empty());
    }

    #[test]
    fn conservation_across_returned_routes() {
        let bundle_bytes = 1e5;
        let set = ContactSet::new(vec![c(1, 10, 20, bundle_bytes * 2.0)]);
        let ni = NeighborIndex::build(&set);
        let q = Query { src: 10, dst: 20, t0: 0.0, bundle_bytes, expiry: 0.0 };

        let result = k_routes_by_consumption(&set, &ni, &q, 5);
        assert_eq!(result.len(), 2);

        let mut clone = set.clone();
        for r in &result.routes {
            consume_capacity(&mut clone, &r.contacts, bundle_bytes);
        }
        assert!(clone.as_slice()[0].residual_bytes >= 0.0);
        assert_eq!(clone.as_slice()[0].residual_bytes, 0.0);
    }
}
