//! Route search: the four public operations built on top of the ETA kernel,
//! the neighbor index, and the min-heap (spec §4.4).
//!
//! A single search invocation runs through the state machine spec §4.4.5
//! describes: `seeding -> relaxing -> (terminated-found | terminated-unreachable)`.
//! It owns its heap and label array exclusively (spec §5); nothing here
//! retries, suspends, or reports partial results (spec §4.4.6).

pub mod k_consume;
pub mod k_yen;
pub mod single;

use crate::contact::Contact;
use crate::query::Label;
use crate::types::ContactId;

/// Bound on the forced-prefix matching walk (spec §4.4.2), defending
/// against accidental cycles in a corrupt label graph — this should never
/// be reached in practice since labels form a tree via predecessor
/// indices (spec §9), never a graph.
const PREFIX_WALK_GUARD: usize = 10_000;

/// Walks `labels` backward from `from_idx` to the root, counting how many
/// of the leading ids of `forced_prefix` are already matched by the path
/// reconstructed so far (spec §4.4.2, §9 — recomputed on each pop rather
/// than carried on the label, keeping [`Label`] narrow).
///
/// Returns `0` immediately if there is no forced prefix.
pub(crate) fn prefix_done(
    from_idx: usize,
    labels: &[Label],
    contacts: &[Contact],
    forced_prefix: &[ContactId],
) -> usize {
    if forced_prefix.is_empty() {
        return 0;
    }

    // Walk root -> from_idx is easier to compare against forced_prefix in
    // order, so collect the path (bounded) and reverse it.
    let mut path = Vec::new();
    let mut walker = Some(from_idx);
    let mut guard = 0;
    while let Some(idx) = walker {
        path.push(contacts[idx].id);
        walker = labels[idx].prev;
        guard += 1;
        if guard >= PREFIX_WALK_GUARD {
            break;
        }
    }
    path.reverse();

    let mut matched = 0;
    while matched < forced_prefix.len() && matched < path.len() {
        if path[matched] != forced_prefix[matched] {
            break;
        }
        matched += 1;
    }
    matched
}

/// Reconstructs the contact-id sequence from the terminal contact index
/// back to the root, via predecessor indices (spec §4.4.1 step 4).
pub(crate) fn reconstruct(
    terminal_idx: usize,
    labels: &[Label],
    contacts: &[Contact],
) -> Vec<ContactId> {
    let mut rev = Vec::new();
    let mut walker = Some(terminal_idx);
    while let Some(idx) = walker {
        rev.push(contacts[idx].id);
        walker = labels[idx].prev;
    }
    rev.reverse();
    rev
}
