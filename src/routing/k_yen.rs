//! K routes by Yen-style deviation: diverse alternative routes without
//! consuming capacity (spec §4.4.4).
//!
//! Unlike the original NASA Space Apps C implementation this spec was
//! distilled from (`original_source/cgr/src/cgr.c`'s `cgr_k_yen`, which only
//! compares a candidate against the immediately preceding route), this spec
//! mandates *global* deduplication against every route already collected —
//! otherwise identical alternatives can be rediscovered through different
//! deviation origins (spec §4.4.4, §9).

use crate::contact::ContactSet;
use crate::neighbor_index::NeighborIndex;
use crate::query::{Filters, Query, Routes};

use super::single::{best_route, best_route_filtered};

/// Up to `k` distinct routes ordered by ETA, the first being the single-best
/// route. Capacity is never consumed. Search halts once `k` routes are
/// collected or the attempt budget (`k * 20`) is exhausted (spec §4.4.4).
pub fn k_routes_by_deviation(
    contacts: &ContactSet,
    index: &NeighborIndex,
    query: &Query,
    k: usize,
) -> Routes {
    let mut out = Routes::empty();
    if k == 0 {
        return out;
    }

    let base = best_route(contacts, index, query);
    if !base.found {
        return out;
    }
    out.routes.push(base);

    let attempt_budget = k.saturating_mul(20);
    let mut attempts = 0;

    while out.len() < k && attempts < attempt_budget {
        attempts += 1;

        let mut best_candidate: Option<crate::query::Route> = None;

        for route in out.routes.clone() {
            for i in 0..route.hops() {
                let filters = Filters {
                    forced_prefix: route.contacts[..i].to_vec(),
                    banned: vec![route.contacts[i]],
                };

                let candidate = best_route_filtered(contacts, index, query, &filters);
                if !candidate.found {
                    continue;
                }
                if out.contains_sequence(&candidate.contacts) {
                    continue;
                }

                let is_better = match &best_candidate {
                    Some(current) => candidate.eta.unwrap() < current.eta.unwrap(),
                    None => true,
                };
                if is_better {
                    best_candidate = Some(candidate);
                }
            }
        }

        match best_candidate {
            Some(candidate) => out.routes.push(candidate),
            None => break,
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Contact;

    fn c(id: i64, from: i64, to: i64, owlt: f64) -> Contact {
        Contact {
            id,
            from,
            to,
            t_start: 0.0,
            t_end: 100.0,
            owlt,
            rate_bps: 1e6,
            setup_s: 0.0,
            residual_bytes: 1e8,
        }
    }

    // spec §8 S6: diamond graph, two parallel two-hop paths, A strictly faster.
    fn diamond() -> ContactSet {
        ContactSet::new(vec![
            c(1, 0, 1, 1.0),  // path A hop 1 (src -> mid_a)
            c(2, 1, 3, 1.0),  // path A hop 2 (mid_a -> dst)
            c(3, 0, 2, 5.0),  // path B hop 1 (src -> mid_b), slower owlt
            c(4, 2, 3, 5.0),  // path B hop 2 (mid_b -> dst)
        ])
    }

    #[test]
    fn s6_yen_k_on_diamond_graph_finds_exactly_two_paths() {
        let set = diamond();
        let ni = NeighborIndex::build(&set);
        let q = Query { src: 0, dst: 3, t0: 0.0, bundle_bytes: 1e5, expiry: 0.0 };

        let k3 = k_routes_by_deviation(&set, &ni, &q, 3);
        assert_eq!(k3.len(), 2);
        assert_eq!(k3.routes[0].contacts, vec![1, 2]);
        assert_eq!(k3.routes[1].contacts, vec![3, 4]);

        let k5 = k_routes_by_deviation(&set, &ni, &q, 5);
        assert_eq!(k5.len(), 2);
        assert_eq!(k5.routes, k3.routes);
    }

    #[test]
    fn first_route_equals_single_best() {
        let set = diamond();
        let ni = NeighborIndex::build(&set);
        let q = Query { src: 0, dst: 3, t0: 0.0, bundle_bytes: 1e5, expiry: 0.0 };

        let single = best_route(&set, &ni, &q);
        let yen = k_routes_by_deviation(&set, &ni, &q, 3);
        assert_eq!(yen.routes[0], single);
    }

    #[test]
    fn subsequent_routes_never_beat_the_first() {
        let set = diamond();
        let ni = NeighborIndex::build(&set);
        let q = Query { src: 0, dst: 3, t0: 0.0, bundle_bytes: 1e5, expiry: 0.0 };

        let yen = k_routes_by_deviation(&set, &ni, &q, 5);
        for route in &yen.routes[1..] {
            assert!(route.eta.unwrap() >= yen.routes[0].eta.unwrap());
        }
    }

    #[test]
    fn routes_are_never_duplicated() {
        let set = diamond();
        let ni = NeighborIndex::build(&set);
        let q = Query { src: 0, dst: 3, t0: 0.0, bundle_bytes: 1e5, expiry: 0.0 };

        let yen = k_routes_by_deviation(&set, &ni, &q, 5);
        for i in 0..yen.len() {
            for j in (i + 1)..yen.len() {
                assert_ne!(yen.routes[i].contacts, yen.routes[j].contacts);
            }
        }
    }

    #[test]
    fn no_base_route_yields_empty_result() {
        let set = ContactSet::new(vec![c(1, 0, 1, 1.0)]);
        let ni = NeighborIndex::build(&set);
        let q = Query { src: 0, dst: 99, t0: 0.0, bundle_bytes: 1e5, expiry: 0.0 };
        assert!(k_routes_by_deviation(&set, &ni, &q, 3).is_empty());
    }

    #[test]
    fn capacity_is_never_consumed() {
        let set = diamond();
        let ni = NeighborIndex::build(&set);
        let q = Query { src: 0, dst: 3, t0: 0.0, bundle_bytes: 1e5, expiry: 0.0 };
        let before = set.as_slice().to_vec();

        let _ = k_routes_by_deviation(&set, &ni, &q, 5);
        assert_eq!(set.as_slice(), before.as_slice());
    }
}
