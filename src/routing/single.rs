//! Single-best route search: temporal Dijkstra over the contact graph,
//! with optional banned-id / forced-prefix filters (spec §4.4.1, §4.4.2).

use crate::contact::ContactSet;
use crate::eta::{eta_contact, is_viable};
use crate::heap::{HeapEntry, MinHeap};
use crate::neighbor_index::NeighborIndex;
use crate::query::{Filters, Label, Query, Route};
use crate::types::EPS_T;

use super::{prefix_done, reconstruct};

/// The unconstrained single-best route (spec §4.4.1).
///
/// Query-invalid inputs (out-of-range `src`/`dst`, non-positive bundle size)
/// yield `found = false` with no search performed (spec §4.4.6, §7).
pub fn best_route(contacts: &ContactSet, index: &NeighborIndex, query: &Query) -> Route {
    best_route_filtered(contacts, index, query, &Filters::none())
}

/// The single-best route subject to `filters` (banned contact ids and/or a
/// forced prefix) — spec §4.4.2.
pub fn best_route_filtered(
    contacts: &ContactSet,
    index: &NeighborIndex,
    query: &Query,
    filters: &Filters,
) -> Route {
    if !query.is_well_formed() {
        return Route::not_found();
    }
    // Spec §9 open question: src == dst never yields a zero-hop route.
    if query.src == query.dst {
        return Route::not_found();
    }
    if !index.contains_node(query.src) || !index.contains_node(query.dst) {
        return Route::not_found();
    }

    let c = contacts.as_slice();
    let expiry_abs = query.expiry_abs();

    let mut labels = vec![Label::UNSET; c.len()];
    let mut heap = MinHeap::with_capacity(64);

    // --- Seed (spec §4.4.1 step 1, §4.4.2 seeding rule) ---
    if filters.has_forced_prefix() {
        let first_id = filters.forced_prefix[0];
        if let Some(ci) = index
            .neighbors(query.src)
            .iter()
            .copied()
            .find(|&ci| c[ci].id == first_id && !filters.is_banned(c[ci].id))
        {
            if let Some(eta) = eta_contact(&c[ci], query.t0, query.bundle_bytes, expiry_abs)
                .value()
            {
                labels[ci] = Label { eta, prev: None };
                heap.push(HeapEntry { contact_idx: ci, eta, prev_idx: None });
            }
        }
    } else {
        for &ci in index.neighbors(query.src) {
            if filters.is_banned(c[ci].id) {
                continue;
            }
            if !is_viable(&c[ci], query.t0, query.bundle_bytes) {
                continue;
            }
            if let Some(eta) = eta_contact(&c[ci], query.t0, query.bundle_bytes, expiry_abs)
                .value()
            {
                if eta < labels[ci].eta {
                    labels[ci] = Label { eta, prev: None };
                    heap.push(HeapEntry { contact_idx: ci, eta, prev_idx: None });
                }
            }
        }
    }

    // --- Relax (spec §4.4.1 steps 2-3) ---
    let mut terminal: Option<(usize, f64)> = None;

    while let Some(popped) = heap.pop() {
        let ci = popped.contact_idx;
        if popped.eta > labels[ci].eta + EPS_T {
            continue; // stale entry, discard (spec §4.4.1 step 2, §9)
        }

        let done = prefix_done(ci, &labels, c, &filters.forced_prefix);

        if c[ci].to == query.dst && done >= filters.forced_prefix.len() {
            terminal = Some((ci, popped.eta));
            break; // first popped terminal is optimal (Dijkstra)
        }

        let next_node = c[ci].to;
        if !index.contains_node(next_node) {
            continue;
        }

        let need_forced_next =
            (done < filters.forced_prefix.len()).then(|| filters.forced_prefix[done]);

        for &nj in index.neighbors(next_node) {
            if let Some(need) = need_forced_next {
                if c[nj].id != need {
                    continue;
                }
            }
            if filters.is_banned(c[nj].id) {
                continue;
            }
            if !is_viable(&c[nj], popped.eta, query.bundle_bytes) {
                continue;
            }
            if let Some(eta_n) =
                eta_contact(&c[nj], popped.eta, query.bundle_bytes, expiry_abs).value()
            {
                if eta_n + EPS_T < labels[nj].eta {
                    labels[nj] = Label { eta: eta_n, prev: Some(ci) };
                    heap.push(HeapEntry { contact_idx: nj, eta: eta_n, prev_idx: Some(ci) });
                }
            }
        }
    }

    match terminal {
        Some((idx, eta)) => Route::found(reconstruct(idx, &labels, c), eta),
        None => Route::not_found(),
    }
}
